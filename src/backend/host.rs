// Interfaces the cursor backend consumes from the host video and mouse layers

use super::CursorBackend;
use crate::model::{Cursor, CursorImage, DisplayId, MouseId, PointerState, WindowId};

/// The host's display directory and mouse-event entry points.
///
/// Passed by reference into every backend call. Implementations own the
/// pointer state; the backend only reads it and mutates it through
/// [`VideoHost::send_mouse_motion`].
pub trait VideoHost {
    /// `None` when no mouse subsystem is registered.
    fn mouse(&self) -> Option<&PointerState>;

    fn display_for_window(&self, window: WindowId) -> Option<DisplayId>;

    /// Make `image` the visible cursor on `display`.
    fn bind_cursor(&mut self, display: DisplayId, image: &CursorImage);

    /// Deliver a motion event. This updates the logical pointer position and
    /// may in turn invoke [`CursorBackend::move_cursor`].
    fn send_mouse_motion(&mut self, window: WindowId, mouse: MouseId, relative: bool, x: i32, y: i32);

    /// Move the pointer graphic to window-local `(x, y)` without emitting motion.
    fn warp_in_window(&mut self, window: WindowId, x: i32, y: i32);
}

/// Registration side of the host mouse subsystem.
pub trait MouseRegistry {
    fn install_cursor_backend(&mut self, backend: Box<dyn CursorBackend>);

    fn set_default_cursor(&mut self, cursor: Cursor);
}
