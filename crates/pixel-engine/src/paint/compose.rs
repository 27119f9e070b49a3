use super::{DrawingMode, Pixel};

/// Computes the result of writing `src` over `dst` under `mode`.
///
/// - `NoAlpha`: `src`.
/// - `FullAlpha`: per channel `a*src + (1-a)*dst` with `a = src.a / 255`,
///   truncated. The destination alpha is kept. A fully opaque source
///   replaces the destination outright and a fully transparent one leaves it
///   untouched.
/// - `Mask`: `src` when it is fully opaque, otherwise `dst`.
#[inline]
pub fn compose(mode: DrawingMode, src: Pixel, dst: Pixel) -> Pixel {
    match mode {
        DrawingMode::NoAlpha => src,
        DrawingMode::Mask => {
            if src.is_opaque() {
                src
            } else {
                dst
            }
        }
        DrawingMode::FullAlpha => match src.a {
            0xFF => src,
            0 => dst,
            alpha => {
                let a = f32::from(alpha) / 255.0;
                let c = 1.0 - a;
                let mix = |s: u8, d: u8| (a * f32::from(s) + c * f32::from(d)) as u8;
                Pixel::rgba(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), dst.a)
            }
        },
    }
}
