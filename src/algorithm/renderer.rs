//! Painting resolved bitmaps with banded hue gradients
//!
//! Continuous randomness comes from a secondary generator seeded with the bit
//! source's derived value. Draw order is fixed: initial hue, saturation,
//! gradient axis, then one band statistic (and possibly a new hue) per outer
//! index. Replaying a source therefore replays every color.

use image::RgbaImage;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::PI;
use tracing::trace;

use crate::algorithm::resolver::Bitmap;
use crate::entropy::BitSource;
use crate::io::configuration::{COIN_THRESHOLD, GenerationOptions};
use crate::io::error::Result;
use crate::math::color::{BLACK, TRANSPARENT, gray, hsl_to_rgb};
use crate::math::probability::band_change_statistic;
use crate::spatial::Pixel;

/// Axis along which hue bands and the brightness arch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    /// Bands are rows; the outer index walks down the image
    Vertical,
    /// Bands are columns; the outer index walks across the image
    Horizontal,
}

impl GradientAxis {
    /// Pick an axis with equal probability
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random::<f64>() > COIN_THRESHOLD {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Outer (band) and inner lengths for an image of the given size
    pub const fn lengths(self, width: usize, height: usize) -> (usize, usize) {
        match self {
            Self::Vertical => (height, width),
            Self::Horizontal => (width, height),
        }
    }

    /// Image (x, y) for outer index `u` and inner index `v`
    pub const fn position(self, u: usize, v: usize) -> (usize, usize) {
        match self {
            Self::Vertical => (v, u),
            Self::Horizontal => (u, v),
        }
    }
}

/// Hue of each band along the outer axis
///
/// Starting from `initial_hue`, a band draws a fresh hue whenever its change
/// statistic exceeds `1 - variation_rate`; the hue then persists until the
/// next change. A rate of zero keeps one hue for the whole sprite.
pub fn band_hues<R: Rng + ?Sized>(
    rng: &mut R,
    initial_hue: f64,
    bands: usize,
    variation_rate: f64,
) -> Vec<f64> {
    let mut hue = initial_hue;
    (0..bands)
        .map(|_| {
            if band_change_statistic(rng) > 1.0 - variation_rate {
                hue = rng.random::<f64>();
            }
            hue
        })
        .collect()
}

/// Paint a resolved bitmap into an RGBA image of the full mirrored size
///
/// Borders take the border color. Bodies are painted only in colored mode,
/// with brightness following a half-sine arch along the outer axis. All
/// other pixels stay transparent.
///
/// # Errors
///
/// Returns an error if the bit source cannot derive a seed value
pub fn render(bitmap: &Bitmap, options: &mut GenerationOptions) -> Result<RgbaImage> {
    let seed = options.source.seed_value()?;
    let mut rng = StdRng::seed_from_u64(seed as u64);

    let initial_hue = rng.random::<f64>();
    let saturation = (rng.random::<f64>() * options.saturation).clamp(0.0, 1.0);
    let border = if options.colored {
        gray(options.edge_brightness)
    } else {
        BLACK
    };

    let (width, height) = (bitmap.image_width(), bitmap.image_height());
    let axis = GradientAxis::choose(&mut rng);
    let (outer_len, inner_len) = axis.lengths(width, height);
    let hues = band_hues(
        &mut rng,
        initial_hue,
        outer_len,
        options.color_variation_rate,
    );
    trace!(seed, ?axis, saturation, "Rendering sprite");

    let mut image = RgbaImage::new(width as u32, height as u32);
    for (u, hue) in hues.into_iter().enumerate() {
        let brightness =
            (u as f64 / outer_len as f64 * PI).sin() * (1.0 - options.brightness_noise);

        for v in 0..inner_len {
            let (x, y) = axis.position(u, v);
            let color = match bitmap.pixel_at(x, y)? {
                Pixel::Border => border,
                Pixel::Body if options.colored => hsl_to_rgb(hue, saturation, brightness),
                _ => TRANSPARENT,
            };
            image.put_pixel(x as u32, y as u32, color);
        }
    }

    Ok(image)
}
