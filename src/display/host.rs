use tracing::trace;

use super::framebuffer::FbDisplay;
use crate::backend::VideoHost;
use crate::model::{CursorImage, DisplayId, MouseId, PointerState, WindowId};

pub const FULLSCREEN_WINDOW: WindowId = WindowId(1);
pub const PRIMARY_DISPLAY: DisplayId = DisplayId(0);

/// Single-output host: one fullscreen window on one framebuffer display.
#[derive(Debug)]
pub struct FramebufferHost {
    pointer: Option<PointerState>,
    display: FbDisplay,
}

impl FramebufferHost {
    /// A host with a registered mouse, focused on the fullscreen window.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pointer: Some(PointerState {
                mouse_id: MouseId::default(),
                focus: Some(FULLSCREEN_WINDOW),
                has_current_cursor: false,
                x: 0,
                y: 0,
            }),
            display: FbDisplay::new(width, height),
        }
    }

    pub fn without_mouse(width: u32, height: u32) -> Self {
        Self {
            pointer: None,
            display: FbDisplay::new(width, height),
        }
    }

    pub fn pointer_mut(&mut self) -> Option<&mut PointerState> {
        self.pointer.as_mut()
    }

    pub fn set_focus(&mut self, focus: Option<WindowId>) {
        if let Some(pointer) = self.pointer.as_mut() {
            pointer.focus = focus;
        }
    }

    pub fn display(&self) -> &FbDisplay {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut FbDisplay {
        &mut self.display
    }

    /// Nearest on-screen position to `(x, y)`.
    fn clamp_to_display(&self, x: i32, y: i32) -> (i32, i32) {
        let max_x = self.display.width().saturating_sub(1) as i32;
        let max_y = self.display.height().saturating_sub(1) as i32;
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }
}

impl VideoHost for FramebufferHost {
    fn mouse(&self) -> Option<&PointerState> {
        self.pointer.as_ref()
    }

    fn display_for_window(&self, window: WindowId) -> Option<DisplayId> {
        (window == FULLSCREEN_WINDOW).then_some(PRIMARY_DISPLAY)
    }

    fn bind_cursor(&mut self, display: DisplayId, image: &CursorImage) {
        if display == PRIMARY_DISPLAY {
            self.display.bind_cursor(image);
        }
    }

    fn send_mouse_motion(&mut self, window: WindowId, _mouse: MouseId, relative: bool, x: i32, y: i32) {
        if window != FULLSCREEN_WINDOW {
            return;
        }
        let Some((px, py)) = self.pointer.as_ref().map(PointerState::position) else {
            return;
        };

        let (x, y) = if relative {
            (px.saturating_add(x), py.saturating_add(y))
        } else {
            (x, y)
        };
        let (x, y) = self.clamp_to_display(x, y);
        let Some(pointer) = self.pointer.as_mut() else {
            return;
        };
        pointer.x = x;
        pointer.y = y;
        trace!(x = pointer.x, y = pointer.y, "pointer motion");
    }

    fn warp_in_window(&mut self, window: WindowId, x: i32, y: i32) {
        if window == FULLSCREEN_WINDOW {
            let (x, y) = self.clamp_to_display(x, y);
            self.display.move_cursor_to(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_is_clamped() {
        let mut host = FramebufferHost::new(10, 5);
        host.send_mouse_motion(FULLSCREEN_WINDOW, MouseId(0), false, 40, -2);
        assert_eq!(host.mouse().unwrap().position(), (9, 0));

        host.send_mouse_motion(FULLSCREEN_WINDOW, MouseId(0), true, -3, 2);
        assert_eq!(host.mouse().unwrap().position(), (6, 2));
    }

    #[test]
    fn test_off_screen_warp_matches_pointer() {
        let mut host = FramebufferHost::new(64, 48);
        host.send_mouse_motion(FULLSCREEN_WINDOW, MouseId(0), false, 1000, 1000);
        host.warp_in_window(FULLSCREEN_WINDOW, 1000, 1000);

        assert_eq!(host.mouse().unwrap().position(), (63, 47));
        assert_eq!(host.display().cursor_position(), (63, 47));

        host.send_mouse_motion(FULLSCREEN_WINDOW, MouseId(0), true, i32::MIN, i32::MAX);
        host.warp_in_window(FULLSCREEN_WINDOW, i32::MIN, i32::MAX);
        assert_eq!(host.mouse().unwrap().position(), (0, 47));
        assert_eq!(host.display().cursor_position(), (0, 47));
    }

    #[test]
    fn test_other_windows_ignored() {
        let mut host = FramebufferHost::new(10, 10);
        host.send_mouse_motion(WindowId(7), MouseId(0), false, 4, 4);
        host.warp_in_window(WindowId(7), 4, 4);

        assert_eq!(host.mouse().unwrap().position(), (0, 0));
        assert_eq!(host.display().cursor_position(), (0, 0));
        assert_eq!(host.display_for_window(WindowId(7)), None);
    }

    #[test]
    fn test_without_mouse() {
        let host = FramebufferHost::without_mouse(4, 4);
        assert!(host.mouse().is_none());
    }
}
