// Library exports for fbcursor

pub mod backend;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod pixels;

// Re-export commonly used types
pub use backend::{CursorBackend, FbCursorBackend, MouseRegistry, VideoHost, init_mouse, quit_mouse};
pub use config::{BackendConfig, DefaultCursor};
pub use error::CursorError;
pub use model::{Cursor, CursorImage, PixelFormat, Surface};
