//! Assembles mapped glyphs into the final multi-line artwork.

use std::fmt;

/// Rendered character art. One line per raster row, each ending in `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArtwork(String);

impl AsciiArtwork {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the rows without their line breaks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl fmt::Display for AsciiArtwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join glyphs row by row, appending a newline after every `width` glyphs.
///
/// A `width` of 0 is treated as 1.
pub fn compose(glyphs: &[char], width: usize) -> AsciiArtwork {
    let width = width.max(1);
    let rows = glyphs.len().div_ceil(width);
    let mut out = String::with_capacity(glyphs.len() + rows);

    for (i, &glyph) in glyphs.iter().enumerate() {
        out.push(glyph);
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }

    AsciiArtwork(out)
}
