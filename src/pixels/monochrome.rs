// 1-bit data/mask cursor bitmaps, as used by the classic X11 and SDL glyphs

use crate::error::{CursorError, Result};
use crate::model::surface::{PixelFormat, Surface};

const BLACK: [u8; 4] = [0xFF, 0x00, 0x00, 0x00];
const WHITE: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
const TRANSPARENT: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

/// Expand a monochrome cursor bitmap into an ARGB8888 surface.
///
/// `width` is rounded up to a whole number of bytes per row. Bits are read
/// most significant first:
///
/// | mask | data | pixel       |
/// |------|------|-------------|
/// | 1    | 1    | black       |
/// | 1    | 0    | white       |
/// | 0    | 1    | black       |
/// | 0    | 0    | transparent |
pub fn create_monochrome_surface(
    data: &[u8],
    mask: &[u8],
    width: u32,
    height: u32,
) -> Result<Surface> {
    let width = (width + 7) & !7;
    let row_bytes = (width / 8) as usize;
    let expected = row_bytes * height as usize;

    if data.len() < expected || mask.len() < expected {
        return Err(CursorError::InvalidSurface(format!(
            "monochrome {}x{} cursor needs {} bytes of data and mask, got {} and {}",
            width,
            height,
            expected,
            data.len(),
            mask.len()
        )));
    }

    let pitch = width as usize * 4;
    let mut pixels = vec![0u8; pitch * height as usize];

    for (i, (&data_byte, &mask_byte)) in data.iter().zip(mask).take(expected).enumerate() {
        let y = i / row_bytes;
        let x0 = (i % row_bytes) * 8;

        for bit in 0..8 {
            let set = |b: u8| b & (0x80 >> bit) != 0;
            let px = match (set(mask_byte), set(data_byte)) {
                (_, true) => BLACK,
                (true, false) => WHITE,
                (false, false) => TRANSPARENT,
            };
            let offset = y * pitch + (x0 + bit) * 4;
            PixelFormat::Argb8888.encode(px, &mut pixels[offset..offset + 4]);
        }
    }

    Surface::new(width, height, PixelFormat::Argb8888, pitch, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_table() {
        // one row: mask 1100, data 1010
        let surface = create_monochrome_surface(&[0b1010_0000], &[0b1100_0000], 8, 1).unwrap();

        assert_eq!(surface.pixel(0, 0), Some(BLACK));
        assert_eq!(surface.pixel(1, 0), Some(WHITE));
        assert_eq!(surface.pixel(2, 0), Some(BLACK));
        assert_eq!(surface.pixel(3, 0), Some(TRANSPARENT));
    }

    #[test]
    fn test_width_rounded_up() {
        let surface = create_monochrome_surface(&[0, 0, 0], &[0xFF, 0xFF, 0xFF], 5, 3).unwrap();
        assert_eq!(surface.width(), 8);
        assert_eq!(surface.height(), 3);
        assert_eq!(surface.pixel(7, 2), Some(WHITE));
    }

    #[test]
    fn test_short_bitmap_rejected() {
        let err = create_monochrome_surface(&[0; 3], &[0; 4], 16, 2).unwrap_err();
        assert!(matches!(err, CursorError::InvalidSurface(_)));
    }
}
