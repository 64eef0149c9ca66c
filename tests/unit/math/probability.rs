//! Tests for the gradient band change statistic

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use spritegen::math::probability::band_change_statistic;

    #[test]
    fn test_statistic_within_unit_interval() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..1000 {
            let statistic = band_change_statistic(&mut rng);
            assert!((0.0..=1.0).contains(&statistic), "got {statistic}");
        }
    }

    // Tests exactly three draws are consumed per statistic
    // Verified by drawing a fourth sample
    #[test]
    fn test_statistic_consumes_three_draws() {
        let mut measured = StdRng::seed_from_u64(11);
        let mut reference = StdRng::seed_from_u64(11);

        let _: f64 = band_change_statistic(&mut measured);
        for _ in 0..3 {
            let _: f64 = reference.random();
        }

        assert_eq!(measured.random::<u64>(), reference.random::<u64>());
    }

    // Tests the statistic matches the mean magnitude of the mapped draws
    #[test]
    fn test_statistic_is_mean_magnitude() {
        let mut measured = StdRng::seed_from_u64(29);
        let mut reference = StdRng::seed_from_u64(29);

        let statistic = band_change_statistic(&mut measured);
        let sum: f64 = (0..3)
            .map(|_| reference.random::<f64>() * 2.0 - 1.0)
            .sum();

        assert!((statistic - (sum / 3.0).abs()).abs() < 1e-12);
    }

    #[test]
    fn test_statistic_rarely_reaches_extremes() {
        let mut rng = StdRng::seed_from_u64(5);
        let extreme = (0..10_000)
            .filter(|_| band_change_statistic(&mut rng) > 0.9)
            .count();

        assert!(extreme < 100, "{extreme} samples above 0.9");
    }
}
