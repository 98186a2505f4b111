// Pixel conversion primitives used when building cursor images

pub mod monochrome;
pub mod premultiply;

pub use monochrome::create_monochrome_surface;
pub use premultiply::{premultiply_alpha, premultiply_pixel};
