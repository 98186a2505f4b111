// Reference presentation layer for a single raw framebuffer output

pub mod framebuffer;
pub mod host;

pub use framebuffer::FbDisplay;
pub use host::{FULLSCREEN_WINDOW, FramebufferHost, PRIMARY_DISPLAY};
