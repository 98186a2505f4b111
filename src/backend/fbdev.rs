use tracing::{debug, trace, warn};

use super::default_cursor::{builtin_cursor_surface, load_default_cursor_surface};
use super::{CursorBackend, MouseRegistry, VideoHost};
use crate::config::BackendConfig;
use crate::error::{CursorError, Result};
use crate::model::{Cursor, CursorImage, Surface, WindowId};

/// Cursor backend for a single fullscreen framebuffer output.
///
/// Cursors live as premultiplied ARGB8888 soft buffers. Nothing is copied to
/// the display until the cursor is shown, since the display surface may be
/// recreated in between.
#[derive(Debug, Default)]
pub struct FbCursorBackend;

impl FbCursorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CursorBackend for FbCursorBackend {
    fn create_cursor(&mut self, surface: &Surface, hot_x: i32, hot_y: i32) -> Result<Cursor> {
        let image = CursorImage::from_surface(surface, hot_x, hot_y)?;
        debug!(
            width = image.width(),
            height = image.height(),
            hot_x,
            hot_y,
            "created cursor"
        );
        Ok(Cursor::new(image))
    }

    fn show_cursor(&mut self, host: &mut dyn VideoHost, cursor: Option<&Cursor>) -> Result<()> {
        let mouse = host.mouse().ok_or(CursorError::NoPointerDevice)?;

        // No focus also covers video shutdown, where the focus is already
        // gone but the host still restores its default cursor.
        let (Some(window), Some(cursor)) = (mouse.focus, cursor) else {
            trace!("hiding cursor");
            return Ok(());
        };

        match host.display_for_window(window) {
            Some(target) => {
                trace!(?target, ?window, "binding cursor to display");
                host.bind_cursor(target, cursor.image());
            }
            None => debug!(?window, "focused window has no display, cursor not shown"),
        }
        Ok(())
    }

    fn move_cursor(&mut self, host: &mut dyn VideoHost, _cursor: &Cursor) {
        // The graphic follows the pointer through warp_in_window; never send
        // motion from here.
        if let Some(mouse) = host.mouse() {
            trace!(x = mouse.x, y = mouse.y, "cursor moved");
        }
    }

    fn free_cursor(&mut self, cursor: Cursor) {
        trace!(
            width = cursor.image().width(),
            height = cursor.image().height(),
            "freeing cursor"
        );
        drop(cursor);
    }

    fn warp_mouse(&mut self, host: &mut dyn VideoHost, _window: WindowId, x: i32, y: i32) -> Result<()> {
        // Only one global fullscreen window exists
        self.warp_mouse_global(host, x, y)
    }

    fn warp_mouse_global(&mut self, host: &mut dyn VideoHost, x: i32, y: i32) -> Result<()> {
        let (window, mouse_id) = match host.mouse() {
            Some(mouse) if mouse.has_current_cursor => match mouse.focus {
                Some(window) => (window, mouse.mouse_id),
                None => return Err(CursorError::NoFocusOrCursor),
            },
            _ => return Err(CursorError::NoFocusOrCursor),
        };

        debug!(x, y, ?window, "warping pointer");
        // Position first, so the graphic move below sees a consistent state.
        host.send_mouse_motion(window, mouse_id, false, x, y);
        host.warp_in_window(window, x, y);
        Ok(())
    }
}

/// Register the framebuffer cursor backend and its default cursor.
///
/// A configured default cursor that fails to load falls back to the
/// built-in arrow.
pub fn init_mouse(registry: &mut dyn MouseRegistry, config: &BackendConfig) -> Result<()> {
    let mut backend = FbCursorBackend::new();

    let (surface, hot_x, hot_y) = match load_default_cursor_surface(&config.default_cursor) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("failed to load default cursor ({:#}), using built-in arrow", e);
            builtin_cursor_surface()?
        }
    };
    let default_cursor = backend.create_cursor(&surface, hot_x, hot_y)?;

    registry.install_cursor_backend(Box::new(backend));
    registry.set_default_cursor(default_cursor);
    Ok(())
}

pub fn quit_mouse(_registry: &mut dyn MouseRegistry) {
    trace!("framebuffer mouse shut down");
}
