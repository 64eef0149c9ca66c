//! Tests for built-in templates

#[cfg(test)]
mod tests {
    use spritegen::Pixel;
    use spritegen::spatial::presets::spaceship;

    #[test]
    fn test_spaceship_shape() {
        let mask = spaceship();

        assert_eq!((mask.width(), mask.height()), (6, 12));
        assert_eq!((mask.image_width(), mask.image_height()), (12, 12));
        assert!(mask.mirror_x());
        assert!(!mask.mirror_y());
    }

    // Tests the quadrant carries 32 ambiguous cells
    #[test]
    fn test_spaceship_ambiguity_count() {
        assert_eq!(spaceship().ambiguity_count(), 32);
    }

    #[test]
    fn test_spaceship_hull_border() {
        let mask = spaceship();

        for y in [2, 3, 4, 5, 9] {
            assert_eq!(mask.pixel_at(5, y), Ok(Pixel::Border));
            assert_eq!(mask.pixel_at(6, y), Ok(Pixel::Border));
        }
        for y in 6..9 {
            assert_eq!(mask.pixel_at(5, y), Ok(Pixel::BodyOrBorder));
        }
    }

    #[test]
    fn test_spaceship_template_rows() {
        let rendered = spaceship().to_string();
        let rows: Vec<&str> = rendered.lines().collect();

        assert_eq!(rows.len(), 12);
        assert_eq!(rows.first(), Some(&"            "));
        assert_eq!(rows.get(6), Some(&" ...////... "));
        assert_eq!(rows.last(), Some(&"            "));
    }
}
