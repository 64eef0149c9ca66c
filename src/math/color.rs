//! Color space conversion for body and border pixels

use image::Rgba;

/// Fully transparent pixel used for the background
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Opaque black used for borders of uncolored sprites
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Convert hue, saturation and lightness in `[0, 1]` to an opaque color
///
/// Uses the six-sector method: the hue picks a sector of the color wheel and
/// the fractional position within it blends two of `l`, `p`, `q` and `t`.
/// Channels are truncated after scaling, and inputs outside `[0, 1]` saturate
/// at the channel limits.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgba<u8> {
    let scaled = hue * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;

    let l = lightness;
    let p = lightness * (1.0 - saturation);
    let q = lightness * f.mul_add(-saturation, 1.0);
    let t = lightness * (1.0 - f).mul_add(-saturation, 1.0);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (l, t, p),
        1 => (q, l, p),
        2 => (p, l, t),
        3 => (p, q, l),
        4 => (t, p, l),
        _ => (l, p, q),
    };

    Rgba([channel(r), channel(g), channel(b), 255])
}

/// Opaque gray with all channels at `round(255 × brightness)`
pub fn gray(brightness: f64) -> Rgba<u8> {
    let level = (255.0 * brightness).round().clamp(0.0, 255.0) as u8;
    Rgba([level, level, level, 255])
}

fn channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}
