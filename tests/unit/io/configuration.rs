//! Tests for option defaults and builders

#[cfg(test)]
mod tests {
    use spritegen::io::configuration::{
        DEFAULT_BRIGHTNESS_NOISE, DEFAULT_COLOR_VARIATION_RATE, DEFAULT_EDGE_BRIGHTNESS,
        DEFAULT_SATURATION,
    };
    use spritegen::{BitSource, ByteSource, GenerationOptions};

    // Tests documented defaults
    // Verified by swapping edge brightness and brightness noise defaults
    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();

        assert!(!options.colored);
        assert!((options.edge_brightness - 0.3).abs() < f64::EPSILON);
        assert!((options.color_variation_rate - 0.2).abs() < f64::EPSILON);
        assert!((options.brightness_noise - 0.3).abs() < f64::EPSILON);
        assert!((options.saturation - 0.5).abs() < f64::EPSILON);

        assert!((options.edge_brightness - DEFAULT_EDGE_BRIGHTNESS).abs() < f64::EPSILON);
        assert!((options.color_variation_rate - DEFAULT_COLOR_VARIATION_RATE).abs() < f64::EPSILON);
        assert!((options.brightness_noise - DEFAULT_BRIGHTNESS_NOISE).abs() < f64::EPSILON);
        assert!((options.saturation - DEFAULT_SATURATION).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_source_derives_seed() {
        let mut options = GenerationOptions::default();
        assert!(options.source.seed_value().is_ok());
    }

    // Tests the replacement source is the one consulted afterwards
    #[test]
    fn test_with_source_replaces_source() {
        let mut options = GenerationOptions::default()
            .with_source(ByteSource::new(&[1, 2, 3, 4, 5, 6, 7, 8]))
            .with_colored(true);

        assert!(options.colored);
        assert_eq!(options.source.seed_value(), Ok(0x0102_0304_0506_0708));
    }
}
