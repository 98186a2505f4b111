// Cursor backend for displays that are a bare pixel buffer

pub mod default_cursor;
pub mod fbdev;
pub mod host;

pub use fbdev::{FbCursorBackend, init_mouse, quit_mouse};
pub use host::{MouseRegistry, VideoHost};

use crate::error::Result;
use crate::model::{Cursor, Surface, WindowId};

/// Capability set the host mouse subsystem drives a display backend through.
///
/// A successful [`show_cursor`](CursorBackend::show_cursor) only performs the
/// visual bind; recording the current cursor and its visibility is the
/// caller's job.
pub trait CursorBackend {
    fn create_cursor(&mut self, surface: &Surface, hot_x: i32, hot_y: i32) -> Result<Cursor>;

    /// Show `cursor` on the focused display, or hide when `None`.
    fn show_cursor(&mut self, host: &mut dyn VideoHost, cursor: Option<&Cursor>) -> Result<()>;

    /// Called whenever the pointer position changes, including from inside
    /// [`warp_mouse_global`](CursorBackend::warp_mouse_global).
    ///
    /// Implementations must only redraw the cursor graphic. They must never
    /// call [`VideoHost::send_mouse_motion`]: motion is what triggers this
    /// hook, so doing so recurses without end.
    fn move_cursor(&mut self, host: &mut dyn VideoHost, cursor: &Cursor);

    fn free_cursor(&mut self, cursor: Cursor);

    fn warp_mouse(&mut self, host: &mut dyn VideoHost, window: WindowId, x: i32, y: i32) -> Result<()>;

    fn warp_mouse_global(&mut self, host: &mut dyn VideoHost, x: i32, y: i32) -> Result<()>;
}
