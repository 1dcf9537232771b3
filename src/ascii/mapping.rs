//! Luminance to glyph mapping.

use super::charset::Palette;

/// Palette index for a luminance value: `ceil((N-1) * L / 255)`.
///
/// Rounds up, so 0 maps to the first glyph and 255 to the last. Values
/// outside 0-255 (and NaN) are clamped into the palette instead of failing.
#[inline]
pub fn glyph_index(luminance: f64, palette_len: usize) -> usize {
    if palette_len <= 1 {
        return 0;
    }
    let max = (palette_len - 1) as f64;
    let idx = (max * luminance / 255.0).ceil();
    if idx.is_nan() {
        return 0;
    }
    idx.clamp(0.0, max) as usize
}

/// Glyph for a single luminance value.
#[inline]
pub fn map_glyph(luminance: f64, palette: &Palette) -> char {
    palette.glyphs()[glyph_index(luminance, palette.len())]
}

/// Map a luminance field to glyphs, one per value, in the same order.
pub fn map_to_chars(luminance: &[f64], palette: &Palette) -> Vec<char> {
    luminance.iter().map(|&l| map_glyph(l, palette)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::charset::{PaletteConfig, SIMPLE_PALETTE};

    fn simple() -> Palette {
        Palette::new(SIMPLE_PALETTE).unwrap()
    }

    #[test]
    fn test_mid_gray_rounds_up() {
        // 9 * 128 / 255 = 4.517... -> 5
        assert_eq!(glyph_index(128.0, 10), 5);
        assert_eq!(map_glyph(128.0, &simple()), '+');
    }

    #[test]
    fn test_extremes_hit_palette_ends() {
        for n in 2..=70 {
            assert_eq!(glyph_index(0.0, n), 0);
            assert_eq!(glyph_index(255.0, n), n - 1);
        }
    }

    #[test]
    fn test_index_matches_ceiling_formula() {
        for n in [2usize, 10, 70] {
            for l in 0..=255 {
                let expected = ((n - 1) as f64 * l as f64 / 255.0).ceil() as usize;
                let idx = glyph_index(l as f64, n);
                assert_eq!(idx, expected);
                assert!(idx < n);
            }
        }
    }

    #[test]
    fn test_tiny_luminance_already_moves_off_first_glyph() {
        assert_eq!(glyph_index(0.01, 10), 1);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(glyph_index(-40.0, 10), 0);
        assert_eq!(glyph_index(300.0, 10), 9);
        assert_eq!(glyph_index(f64::INFINITY, 10), 9);
        assert_eq!(glyph_index(f64::NEG_INFINITY, 10), 0);
        assert_eq!(glyph_index(f64::NAN, 10), 0);
    }

    #[test]
    fn test_single_glyph_palette_is_constant() {
        let palette = Palette::new("#").unwrap();
        assert_eq!(map_glyph(0.0, &palette), '#');
        assert_eq!(map_glyph(255.0, &palette), '#');
    }

    #[test]
    fn test_inverted_palette_mirrors_index() {
        for simple_flag in [true, false] {
            let normal = PaletteConfig::new(simple_flag, false).palette();
            let inverted = PaletteConfig::new(simple_flag, true).palette();
            let n = normal.len();
            for l in 0..=255 {
                let idx = glyph_index(l as f64, n);
                assert_eq!(map_glyph(l as f64, &inverted), normal.glyphs()[n - 1 - idx]);
            }
        }
    }

    #[test]
    fn test_map_to_chars_preserves_order() {
        let chars = map_to_chars(&[0.0, 128.0, 255.0], &simple());
        assert_eq!(chars, vec![' ', '+', '@']);
    }
}
