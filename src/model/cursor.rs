use crate::error::{CursorError, Result};
use crate::model::surface::{PixelFormat, Surface};
use crate::pixels::premultiply_alpha;

/// Format of every cursor buffer, regardless of the source surface.
pub const CURSOR_FORMAT: PixelFormat = PixelFormat::Argb8888;

/// Backend-private pixel data of one cursor.
///
/// `buffer` is premultiplied ARGB8888 with no row padding, so its length is
/// always `width * height * 4`.
#[derive(Debug)]
pub struct CursorImage {
    hot_x: i32,
    hot_y: i32,
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl CursorImage {
    /// Convert `surface` into a premultiplied cursor buffer.
    ///
    /// The hotspot is not range checked and may lie outside the image.
    pub fn from_surface(surface: &Surface, hot_x: i32, hot_y: i32) -> Result<Self> {
        let size = buffer_len(surface.width(), surface.height())?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(size)
            .map_err(|_| CursorError::OutOfMemory)?;
        buffer.resize(size, 0);

        premultiply_alpha(
            surface.width(),
            surface.height(),
            surface.format(),
            surface.pixels(),
            surface.pitch(),
            CURSOR_FORMAT,
            &mut buffer,
            surface.width() as usize * 4,
        );

        Ok(Self {
            hot_x,
            hot_y,
            width: surface.width(),
            height: surface.height(),
            buffer,
        })
    }

    pub fn hotspot(&self) -> (i32, i32) {
        (self.hot_x, self.hot_y)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Premultiplied `[a, r, g, b]` at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.pitch() + x as usize * 4;
        Some(CURSOR_FORMAT.decode(&self.buffer[offset..offset + 4]))
    }
}

/// Byte length of a `width` x `height` cursor buffer.
fn buffer_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(CursorError::OutOfMemory)
}

/// Host-visible cursor handle. Owns its image; dropping the handle frees it.
#[derive(Debug)]
pub struct Cursor {
    image: CursorImage,
}

impl Cursor {
    pub fn new(image: CursorImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &CursorImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba_surface(width: u32, height: u32, px: [u8; 4]) -> Surface {
        let mut pixels = vec![0u8; (width * height * 4) as usize];
        for chunk in pixels.chunks_exact_mut(4) {
            PixelFormat::Rgba8888.encode(px, chunk);
        }
        Surface::new(width, height, PixelFormat::Rgba8888, width as usize * 4, pixels).unwrap()
    }

    #[test]
    fn test_buffer_length() {
        for (w, h) in [(1, 1), (16, 16), (7, 3), (32, 48)] {
            let image = CursorImage::from_surface(&rgba_surface(w, h, [255, 1, 2, 3]), 0, 0).unwrap();
            assert_eq!(image.buffer().len(), (w * h * 4) as usize);
            assert_eq!(image.width(), w);
            assert_eq!(image.height(), h);
        }
    }

    #[test]
    fn test_padded_source_packs_tightly() {
        let mut pixels = vec![0u8; 20 * 2];
        for y in 0..2 {
            for x in 0..3 {
                let off = y * 20 + x * 3;
                pixels[off..off + 3].copy_from_slice(&[x as u8, y as u8, 9]);
            }
        }
        let surface = Surface::new(3, 2, PixelFormat::Rgb24, 20, pixels).unwrap();

        let image = CursorImage::from_surface(&surface, 1, 1).unwrap();
        assert_eq!(image.pitch(), 12);
        assert_eq!(image.buffer().len(), 24);
        assert_eq!(image.pixel(2, 1), Some([255, 2, 1, 9]));
    }

    #[test]
    fn test_premultiplied_on_creation() {
        let image = CursorImage::from_surface(&rgba_surface(2, 2, [0, 200, 100, 50]), 0, 0).unwrap();
        assert!(image.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_hotspot_not_validated() {
        let image = CursorImage::from_surface(&rgba_surface(4, 4, [255; 4]), -3, 100).unwrap();
        assert_eq!(image.hotspot(), (-3, 100));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_buffer_is_out_of_memory() {
        assert_eq!(buffer_len(u32::MAX, u32::MAX), Err(CursorError::OutOfMemory));
        assert_eq!(buffer_len(u32::MAX, 1), Ok(u32::MAX as usize * 4));
    }

    #[test]
    fn test_short_pixel_buffer_never_reaches_conversion() {
        let err = Surface::new(2, 2, PixelFormat::Argb8888, 8, Vec::new()).unwrap_err();
        assert!(matches!(err, CursorError::InvalidSurface(_)));

        // the last row may omit its padding, and conversion stays within it
        let surface = Surface::new(2, 2, PixelFormat::Argb8888, 12, vec![0xFF; 20]).unwrap();
        let image = CursorImage::from_surface(&surface, 0, 0).unwrap();
        assert_eq!(image.pixel(1, 1), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_empty_surface() {
        let surface = Surface::new(0, 0, PixelFormat::Argb8888, 0, Vec::new()).unwrap();
        let image = CursorImage::from_surface(&surface, 0, 0).unwrap();
        assert!(image.buffer().is_empty());
        assert_eq!(image.pixel(0, 0), None);
    }
}
