// Host-owned pointer state, read by the backend on every call

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MouseId(pub u32);

#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pub mouse_id: MouseId,
    /// Window that currently receives pointer input.
    pub focus: Option<WindowId>,
    pub has_current_cursor: bool,
    pub x: i32,
    pub y: i32,
}

impl PointerState {
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
