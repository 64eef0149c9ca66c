//! Tests for mask construction, addressing and ambiguity counting

#[cfg(test)]
mod tests {
    use spritegen::{Mask, Pixel, SpriteError};

    #[test]
    fn test_from_template_dimensions() {
        let Ok(mask) = Mask::from_template(&["  .", " /O"], true, false) else {
            unreachable!("template is well formed");
        };

        assert_eq!((mask.width(), mask.height()), (3, 2));
        assert_eq!((mask.image_width(), mask.image_height()), (6, 2));
        assert!(mask.mirror_x());
        assert!(!mask.mirror_y());
    }

    // Tests rows of differing length fail construction
    // Verified by comparing only against the previous row's length
    #[test]
    fn test_mismatched_rows_rejected() {
        let result = Mask::from_template(&[" .", "...", " ."], false, false);

        assert_eq!(
            result,
            Err(SpriteError::MalformedTemplate {
                row: 1,
                width: 3,
                expected: 2,
            })
        );
    }

    #[test]
    fn test_unknown_character_rejected() {
        let result = Mask::from_template(&["..", " x"], false, false);

        assert_eq!(
            result,
            Err(SpriteError::UnknownTemplateCharacter {
                row: 1,
                column: 1,
                character: 'x',
            })
        );
    }

    #[test]
    fn test_empty_template() {
        let rows: [&str; 0] = [];
        let Ok(mask) = Mask::from_template(&rows, true, true) else {
            unreachable!("empty template is valid");
        };

        assert_eq!((mask.image_width(), mask.image_height()), (0, 0));
        assert_eq!(mask.ambiguity_count(), 0);
    }

    // Tests ambiguity count tallies '.' and '/' only
    #[test]
    fn test_ambiguity_count() {
        let Ok(mask) = Mask::from_template(&["./ O", "..-|", "+  /"], true, true) else {
            unreachable!("template is well formed");
        };

        assert_eq!(mask.ambiguity_count(), 5);
    }

    #[test]
    fn test_pixel_at_reads_mirrored_template() {
        let Ok(mask) = Mask::from_template(&["O.", " /"], true, true) else {
            unreachable!("template is well formed");
        };

        assert_eq!(mask.pixel_at(0, 0), Ok(Pixel::Body));
        assert_eq!(mask.pixel_at(3, 0), Ok(Pixel::Body));
        assert_eq!(mask.pixel_at(2, 2), Ok(Pixel::BodyOrBorder));
        assert_eq!(mask.pixel_at(1, 3), Ok(Pixel::BodyOrEmpty));
        assert!(mask.pixel_at(4, 0).is_err());
    }

    #[test]
    fn test_from_cells_checks_cell_count() {
        let result = Mask::from_cells(2, 2, vec![Pixel::Body; 3], false, false);

        assert_eq!(
            result,
            Err(SpriteError::CellCountMismatch {
                cells: 3,
                width: 2,
                height: 2,
            })
        );
        assert!(Mask::from_cells(2, 2, vec![Pixel::Body; 4], false, false).is_ok());
    }

    #[test]
    fn test_from_cells_matches_template() {
        let cells = vec![Pixel::Empty, Pixel::BodyOrEmpty, Pixel::Border, Pixel::Body];

        assert_eq!(
            Mask::from_cells(2, 2, cells, true, false),
            Mask::from_template(&[" .", "-O"], true, false)
        );
    }

    #[test]
    fn test_display_uses_canonical_characters() {
        let Ok(mask) = Mask::from_template(&[" .", "|O"], false, false) else {
            unreachable!("template is well formed");
        };

        assert_eq!(mask.to_string(), " .\n+O");
    }
}
