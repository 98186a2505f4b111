// Pixel surfaces handed to the cursor backend

use byteorder::{ByteOrder, LittleEndian};
use image::RgbaImage;

use crate::error::{CursorError, Result};

/// Pixel layouts a cursor surface may arrive in.
///
/// The 32-bit formats are packed little-endian words, so `Argb8888` is stored
/// in memory as B, G, R, A. The 24-bit formats are plain byte orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Argb8888,
    Rgba8888,
    Abgr8888,
    Bgra8888,
    Xrgb8888,
    Xbgr8888,
    Rgb24,
    Bgr24,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb24 | PixelFormat::Bgr24 => 3,
            _ => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            PixelFormat::Argb8888
                | PixelFormat::Rgba8888
                | PixelFormat::Abgr8888
                | PixelFormat::Bgra8888
        )
    }

    /// Decode one pixel into `[a, r, g, b]`. Formats without alpha read as opaque.
    pub fn decode(self, px: &[u8]) -> [u8; 4] {
        let [a, r, g, b] = match self {
            PixelFormat::Rgb24 => [0xFF, px[0], px[1], px[2]],
            PixelFormat::Bgr24 => [0xFF, px[2], px[1], px[0]],
            _ => {
                let v = LittleEndian::read_u32(px);
                let (a, r, g, b) = match self {
                    PixelFormat::Argb8888 | PixelFormat::Xrgb8888 => {
                        (v >> 24, v >> 16, v >> 8, v)
                    }
                    PixelFormat::Rgba8888 => (v, v >> 24, v >> 16, v >> 8),
                    PixelFormat::Abgr8888 | PixelFormat::Xbgr8888 => {
                        (v >> 24, v, v >> 8, v >> 16)
                    }
                    PixelFormat::Bgra8888 => (v, v >> 8, v >> 16, v >> 24),
                    PixelFormat::Rgb24 | PixelFormat::Bgr24 => unreachable!(),
                };
                [a as u8, r as u8, g as u8, b as u8]
            }
        };
        if self.has_alpha() { [a, r, g, b] } else { [0xFF, r, g, b] }
    }

    /// Encode `[a, r, g, b]` into `out`, which must hold `bytes_per_pixel` bytes.
    pub fn encode(self, [a, r, g, b]: [u8; 4], out: &mut [u8]) {
        let (a, r, g, b) = (a as u32, r as u32, g as u32, b as u32);
        let v = match self {
            PixelFormat::Rgb24 => {
                out[..3].copy_from_slice(&[r as u8, g as u8, b as u8]);
                return;
            }
            PixelFormat::Bgr24 => {
                out[..3].copy_from_slice(&[b as u8, g as u8, r as u8]);
                return;
            }
            PixelFormat::Argb8888 => a << 24 | r << 16 | g << 8 | b,
            PixelFormat::Xrgb8888 => 0xFF << 24 | r << 16 | g << 8 | b,
            PixelFormat::Rgba8888 => r << 24 | g << 16 | b << 8 | a,
            PixelFormat::Abgr8888 => a << 24 | b << 16 | g << 8 | r,
            PixelFormat::Xbgr8888 => 0xFF << 24 | b << 16 | g << 8 | r,
            PixelFormat::Bgra8888 => b << 24 | g << 16 | r << 8 | a,
        };
        LittleEndian::write_u32(out, v);
    }
}

/// A straight-alpha pixel surface of arbitrary format and pitch.
///
/// Only built through validating constructors, so `pixels` always covers
/// `height` rows of `pitch` bytes (the last row may omit its padding).
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    format: PixelFormat,
    pitch: usize,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pitch: usize,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        let row = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| CursorError::InvalidSurface(format!("{} pixel row overflows", width)))?;
        if pitch < row {
            return Err(CursorError::InvalidSurface(format!(
                "pitch {} is shorter than a {} byte row",
                pitch, row
            )));
        }
        let needed = match height {
            0 => Some(0),
            h => pitch
                .checked_mul(h as usize - 1)
                .and_then(|n| n.checked_add(row)),
        };
        let Some(needed) = needed else {
            return Err(CursorError::InvalidSurface(format!(
                "{}x{} with pitch {} overflows",
                width, height, pitch
            )));
        };
        if pixels.len() < needed {
            return Err(CursorError::InvalidSurface(format!(
                "{} bytes of pixels, {}x{} needs {}",
                pixels.len(),
                width,
                height,
                needed
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            pitch,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        // R, G, B, A in memory is ABGR8888 as a little-endian word
        Self {
            width: image.width(),
            height: image.height(),
            format: PixelFormat::Abgr8888,
            pitch: image.width() as usize * 4,
            pixels: image.as_raw().clone(),
        }
    }

    /// Build a surface from an Xcursor image, undoing its premultiplied alpha.
    ///
    /// Xcursor pixels are little-endian ARGB words, so B, G, R, A in memory.
    pub fn from_xcursor_image(image: &xcursor::parser::Image) -> Result<Self> {
        let mut pixels = image.pixels_rgba.clone();
        for px in pixels.chunks_exact_mut(4) {
            let a = px[3] as u32;
            if a == 0 {
                px.copy_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((*c as u32 * 255) / a).min(255) as u8;
            }
        }
        Self::new(
            image.width,
            image.height,
            PixelFormat::Argb8888,
            image.width as usize * 4,
            pixels,
        )
    }

    /// Read the pixel at `(x, y)` as `[a, r, g, b]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let offset = y as usize * self.pitch + x as usize * bpp;
        Some(self.format.decode(&self.pixels[offset..offset + bpp]))
    }
}
