use crate::foundation::color::Rgb;
use crate::foundation::error::{PosterError, PosterResult};
use crate::render::backend::FrameRGBA;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of a premultiplied pixel onto another, scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Composite a premultiplied frame over an opaque background and drop alpha.
///
/// Returns tightly packed RGB8 bytes, row-major.
pub fn flatten_over(frame: &FrameRGBA, background: Rgb) -> PosterResult<Vec<u8>> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(PosterError::render(format!(
            "frame has {} bytes, expected {expected}",
            frame.data.len()
        )));
    }
    if !frame.premultiplied {
        return Err(PosterError::render("flatten_over expects premultiplied rgba8"));
    }

    let [br, bg, bb] = background.to_rgb8();
    let base = [br, bg, bb, 255];
    let mut out = Vec::with_capacity(expected / 4 * 3);
    for px in frame.data.chunks_exact(4) {
        let [r, g, b, _] = over(base, [px[0], px[1], px[2], px[3]], 1.0);
        out.extend_from_slice(&[r, g, b]);
    }
    Ok(out)
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
