use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("out of memory")]
    OutOfMemory,
    #[error("No mouse.")]
    NoPointerDevice,
    #[error("No mouse or current cursor.")]
    NoFocusOrCursor,
    #[error("invalid surface: {0}")]
    InvalidSurface(String),
}

pub type Result<T, E = CursorError> = std::result::Result<T, E>;
