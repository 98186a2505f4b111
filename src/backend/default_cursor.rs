// Default arrow glyph and loading of configured default cursors

use anyhow::{Context, anyhow};
use std::fs;
use xcursor::parser::parse_xcursor;

use crate::config::DefaultCursor;
use crate::error::Result;
use crate::model::Surface;
use crate::pixels::create_monochrome_surface;

pub const DEFAULT_CWIDTH: u32 = 16;
pub const DEFAULT_CHEIGHT: u32 = 16;
pub const DEFAULT_CHOTX: i32 = 0;
pub const DEFAULT_CHOTY: i32 = 0;

#[rustfmt::skip]
pub const DEFAULT_CDATA: [u8; 32] = [
    0x00, 0x00, 0x40, 0x00, 0x60, 0x00, 0x70, 0x00,
    0x78, 0x00, 0x7C, 0x00, 0x7E, 0x00, 0x7F, 0x00,
    0x7F, 0x80, 0x7C, 0x00, 0x6C, 0x00, 0x46, 0x00,
    0x06, 0x00, 0x03, 0x00, 0x03, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
pub const DEFAULT_CMASK: [u8; 32] = [
    0xC0, 0x00, 0xE0, 0x00, 0xF0, 0x00, 0xF8, 0x00,
    0xFC, 0x00, 0xFE, 0x00, 0xFF, 0x00, 0xFF, 0x80,
    0xFF, 0xC0, 0xFF, 0xE0, 0xFE, 0x00, 0xEF, 0x00,
    0xCF, 0x00, 0x87, 0x80, 0x07, 0x80, 0x03, 0x00,
];

/// The built-in arrow as a surface plus hotspot.
pub fn builtin_cursor_surface() -> Result<(Surface, i32, i32)> {
    let surface =
        create_monochrome_surface(&DEFAULT_CDATA, &DEFAULT_CMASK, DEFAULT_CWIDTH, DEFAULT_CHEIGHT)?;
    Ok((surface, DEFAULT_CHOTX, DEFAULT_CHOTY))
}

pub fn load_default_cursor_surface(source: &DefaultCursor) -> anyhow::Result<(Surface, i32, i32)> {
    match source {
        DefaultCursor::Builtin => Ok(builtin_cursor_surface()?),
        DefaultCursor::Xcursor { path, size } => {
            let data = fs::read(path)
                .with_context(|| format!("Failed to read Xcursor file {}", path.display()))?;
            let images = parse_xcursor(&data).context("Failed to parse X11 cursor file")?;

            // first frame of the nominal size closest to the one requested
            let image = images
                .iter()
                .min_by_key(|img| img.size.abs_diff(*size))
                .ok_or_else(|| anyhow!("No images in {}", path.display()))?;

            let surface = Surface::from_xcursor_image(image)?;
            Ok((surface, image.xhot as i32, image.yhot as i32))
        }
        DefaultCursor::Image { path, hot_x, hot_y } => {
            let image = image::open(path)
                .with_context(|| format!("Failed to decode cursor image {}", path.display()))?
                .to_rgba8();
            Ok((Surface::from_rgba_image(&image), *hot_x, *hot_y))
        }
    }
}
