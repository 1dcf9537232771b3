//! Image to character-art rendering pipeline.
//!
//! 1. **Rasterize** - decode an image and stretch it onto the terminal grid
//! 2. **Grayscale** - `0.21*R + 0.72*G + 0.07*B` per pixel
//! 3. **Mapping** - luminance to a glyph of the selected [`Palette`]
//! 4. **Compose** - glyphs joined row by row into an [`AsciiArtwork`]
//!
//! Only step 1 touches I/O. Steps 2-4 are pure and run through [`render`].

mod charset;
mod compose;
mod dimensions;
mod grayscale;
mod mapping;
mod raster;

pub use charset::{Palette, PaletteConfig, DENSE_PALETTE, SIMPLE_PALETTE};
pub use compose::{compose, AsciiArtwork};
pub use dimensions::{terminal_dimensions, Dimensions, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use grayscale::{luminance, to_luminance, BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT};
pub use mapping::{glyph_index, map_glyph, map_to_chars};
pub use raster::{
    parse_filter, resample, DecodeError, ImageSource, RasterBuffer, Rasterizer, Rgb,
};

pub use image::imageops::FilterType;

/// Turn a raster into character art with the given palette.
///
/// Deterministic: the same raster and palette always give the same output.
pub fn render(raster: &RasterBuffer, palette: &Palette) -> AsciiArtwork {
    let field = to_luminance(raster);
    let glyphs = map_to_chars(&field, palette);
    compose(&glyphs, raster.width() as usize)
}
