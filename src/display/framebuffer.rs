use crate::model::CursorImage;
use crate::model::cursor::CURSOR_FORMAT;

#[derive(Debug, Clone)]
struct BoundCursor {
    width: u32,
    height: u32,
    hot_x: i32,
    hot_y: i32,
    buffer: Vec<u8>,
}

/// A single framebuffer output with a software cursor slot.
///
/// The framebuffer and the cursor slot are both premultiplied ARGB8888 with
/// no row padding. The cursor is only blended in by [`FbDisplay::compose`],
/// so the framebuffer itself never contains cursor pixels.
#[derive(Debug, Clone)]
pub struct FbDisplay {
    width: u32,
    height: u32,
    framebuffer: Vec<u8>,
    cursor: Option<BoundCursor>,
    cursor_visible: bool,
    cursor_pos: (i32, i32),
}

impl FbDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        let mut framebuffer = vec![0u8; width as usize * height as usize * 4];
        for px in framebuffer.chunks_exact_mut(4) {
            CURSOR_FORMAT.encode([0xFF, 0, 0, 0], px);
        }
        Self {
            width,
            height,
            framebuffer,
            cursor: None,
            cursor_visible: false,
            cursor_pos: (0, 0),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, argb: [u8; 4]) {
        for px in self.framebuffer.chunks_exact_mut(4) {
            CURSOR_FORMAT.encode(argb, px);
        }
    }

    /// Copy `image` into the cursor slot and make it visible.
    pub fn bind_cursor(&mut self, image: &CursorImage) {
        let (hot_x, hot_y) = image.hotspot();
        self.cursor = Some(BoundCursor {
            width: image.width(),
            height: image.height(),
            hot_x,
            hot_y,
            buffer: image.buffer().to_vec(),
        });
        self.cursor_visible = true;
    }

    pub fn hide_cursor(&mut self) {
        self.cursor_visible = false;
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible && self.cursor.is_some()
    }

    pub fn cursor_position(&self) -> (i32, i32) {
        self.cursor_pos
    }

    pub fn move_cursor_to(&mut self, x: i32, y: i32) {
        self.cursor_pos = (x, y);
    }

    /// The framebuffer with the cursor blended over it, hotspot at the
    /// cursor position.
    pub fn compose(&self) -> Vec<u8> {
        let mut out = self.framebuffer.clone();
        let Some(cursor) = self.cursor.as_ref().filter(|_| self.cursor_visible) else {
            return out;
        };

        let origin_x = i64::from(self.cursor_pos.0) - i64::from(cursor.hot_x);
        let origin_y = i64::from(self.cursor_pos.1) - i64::from(cursor.hot_y);

        for cy in 0..cursor.height as usize {
            let y = origin_y + cy as i64;
            if y < 0 || y >= i64::from(self.height) {
                continue;
            }
            for cx in 0..cursor.width as usize {
                let x = origin_x + cx as i64;
                if x < 0 || x >= i64::from(self.width) {
                    continue;
                }
                let src_off = (cy * cursor.width as usize + cx) * 4;
                let dst_off = (y as usize * self.width as usize + x as usize) * 4;

                let src = CURSOR_FORMAT.decode(&cursor.buffer[src_off..src_off + 4]);
                let dst = CURSOR_FORMAT.decode(&out[dst_off..dst_off + 4]);
                CURSOR_FORMAT.encode(blend_over(src, dst), &mut out[dst_off..dst_off + 4]);
            }
        }
        out
    }

    /// Premultiplied `[a, r, g, b]` of the composed output at `(x, y)`.
    pub fn composed_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let composed = self.compose();
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        Some(CURSOR_FORMAT.decode(&composed[offset..offset + 4]))
    }
}

/// Premultiplied source-over.
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let inv = 255 - src[0] as u32;
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = (src[i] as u32 + dst[i] as u32 * inv / 255).min(255) as u8;
    }
    out
}
