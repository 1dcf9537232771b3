//! Glyph palettes and their selection.

/// Short 10-level density ramp, sparse (space) to dense (@).
pub const SIMPLE_PALETTE: &str = " .:-=+*#%@";

/// Long 70-level density ramp, dense ($) to sparse (space).
pub const DENSE_PALETTE: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Which palette to render with, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteConfig {
    /// Use the short palette instead of the long one.
    pub simple: bool,
    /// Reverse the chosen palette.
    pub invert: bool,
}

impl PaletteConfig {
    pub fn new(simple: bool, invert: bool) -> Self {
        Self { simple, invert }
    }

    /// Build the palette this configuration selects.
    pub fn palette(&self) -> Palette {
        let base = if self.simple {
            SIMPLE_PALETTE
        } else {
            DENSE_PALETTE
        };
        let palette = Palette::from_static(base);
        if self.invert {
            palette.reversed()
        } else {
            palette
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match (self.simple, self.invert) {
            (true, false) => "simple",
            (true, true) => "simple-inverted",
            (false, false) => "dense",
            (false, true) => "dense-inverted",
        }
    }
}

/// A non-empty ordered sequence of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Build a palette from a string of glyphs. Returns `None` if empty.
    pub fn new(glyphs: &str) -> Option<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            None
        } else {
            Some(Self { glyphs })
        }
    }

    fn from_static(glyphs: &'static str) -> Self {
        Self {
            glyphs: glyphs.chars().collect(),
        }
    }

    /// Same glyphs in reverse order.
    pub fn reversed(&self) -> Self {
        Self {
            glyphs: self.glyphs.iter().rev().copied().collect(),
        }
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }
}
