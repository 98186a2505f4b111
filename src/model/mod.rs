pub mod cursor;
pub mod pointer;
pub mod surface;

pub use cursor::{Cursor, CursorImage};
pub use pointer::{DisplayId, MouseId, PointerState, WindowId};
pub use surface::{PixelFormat, Surface};
