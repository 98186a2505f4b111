use crate::model::surface::PixelFormat;

/// Convert a straight-alpha block of pixels into premultiplied alpha,
/// re-encoding from `src_format` to `dst_format` on the way.
///
/// Every colour channel becomes `c * a / 255`. Both buffers must cover
/// `height` rows of their respective pitch.
#[allow(clippy::too_many_arguments)]
pub fn premultiply_alpha(
    width: u32,
    height: u32,
    src_format: PixelFormat,
    src: &[u8],
    src_pitch: usize,
    dst_format: PixelFormat,
    dst: &mut [u8],
    dst_pitch: usize,
) {
    let src_bpp = src_format.bytes_per_pixel();
    let dst_bpp = dst_format.bytes_per_pixel();

    for y in 0..height as usize {
        let src_row = &src[y * src_pitch..];
        let dst_row = &mut dst[y * dst_pitch..];

        for x in 0..width as usize {
            let [a, r, g, b] = src_format.decode(&src_row[x * src_bpp..x * src_bpp + src_bpp]);
            let out = &mut dst_row[x * dst_bpp..x * dst_bpp + dst_bpp];
            dst_format.encode(premultiply_pixel([a, r, g, b]), out);
        }
    }
}

pub fn premultiply_pixel([a, r, g, b]: [u8; 4]) -> [u8; 4] {
    if a == 0xFF {
        return [a, r, g, b];
    }
    let scale = |c: u8| ((c as u32 * a as u32) / 255) as u8;
    [a, scale(r), scale(g), scale(b)]
}
