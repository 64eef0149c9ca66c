use rand::Rng;

use crate::io::configuration::BAND_NOISE_SAMPLES;

/// Magnitude of the mean of uniform draws mapped to `[-1, 1]`
///
/// Concentrates near zero, so comparing it against `1 - rate` gives a band
/// change probability that grows steeply as `rate` approaches one. Consumes
/// exactly `BAND_NOISE_SAMPLES` draws.
pub fn band_change_statistic<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let sum = (0..BAND_NOISE_SAMPLES).fold(0.0, |sum, _| {
        sum + rng.random::<f64>().mul_add(2.0, -1.0)
    });
    (sum / BAND_NOISE_SAMPLES as f64).abs()
}
