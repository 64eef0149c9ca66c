//! Generation constants and runtime configuration defaults

use crate::entropy::{BitSource, ReseedingSource};

// Default values for configurable parameters
/// Paint bodies with gradients instead of outlines only
pub const DEFAULT_COLORED: bool = false;
/// Gray level of borders when coloring is enabled
pub const DEFAULT_EDGE_BRIGHTNESS: f64 = 0.3;
/// Probability scale for hue changes between gradient bands
pub const DEFAULT_COLOR_VARIATION_RATE: f64 = 0.2;
/// Fraction of brightness removed from body pixels
pub const DEFAULT_BRIGHTNESS_NOISE: f64 = 0.3;
/// Upper bound for the randomly drawn saturation
pub const DEFAULT_SATURATION: f64 = 0.5;

// Entropy material sizes
/// Bytes of fresh material drawn whenever a reseeding source runs dry
pub const RESEED_BYTES: usize = 32;
/// Leading bytes interpreted as the big-endian derived seed
pub const SEED_VALUE_BYTES: usize = 8;

// Rendering constants
/// Uniform draws averaged for the hue band change statistic
pub const BAND_NOISE_SAMPLES: usize = 3;
/// Draws above this threshold count as `true` for continuous sources
pub const COIN_THRESHOLD: f64 = 0.5;

/// Rendering parameters and the bit source driving every random decision
///
/// Numeric fields are meaningful in `[0, 1]`. Values outside that range are
/// accepted and produce unspecified (but deterministic) output.
#[derive(Debug)]
pub struct GenerationOptions {
    /// Paint bodies with hue gradients; otherwise only borders are drawn
    pub colored: bool,
    /// Gray level of borders in colored mode
    pub edge_brightness: f64,
    /// How readily the hue changes from one gradient band to the next
    pub color_variation_rate: f64,
    /// Fraction of brightness removed from body pixels
    pub brightness_noise: f64,
    /// Upper bound for the randomly drawn saturation
    pub saturation: f64,
    /// Source of every random decision, owned exclusively
    pub source: Box<dyn BitSource + Send>,
}

impl GenerationOptions {
    /// Replace the bit source, keeping all other settings
    #[must_use]
    pub fn with_source(mut self, source: impl BitSource + Send + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Enable or disable colored rendering
    #[must_use]
    pub const fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            colored: DEFAULT_COLORED,
            edge_brightness: DEFAULT_EDGE_BRIGHTNESS,
            color_variation_rate: DEFAULT_COLOR_VARIATION_RATE,
            brightness_noise: DEFAULT_BRIGHTNESS_NOISE,
            saturation: DEFAULT_SATURATION,
            source: Box::new(ReseedingSource::new()),
        }
    }
}
