//! RGB to luminance conversion.

use super::raster::{RasterBuffer, Rgb};

/// Red channel weight.
pub const RED_WEIGHT: f64 = 0.21;
/// Green channel weight.
pub const GREEN_WEIGHT: f64 = 0.72;
/// Blue channel weight.
pub const BLUE_WEIGHT: f64 = 0.07;

/// Luminance of a single pixel: `0.21*R + 0.72*G + 0.07*B`.
///
/// The result is not clamped; for channels in 0-255 it stays within 0-255.
#[inline]
pub fn luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb;
    RED_WEIGHT * r as f64 + GREEN_WEIGHT * g as f64 + BLUE_WEIGHT * b as f64
}

/// Convert every pixel of a raster to luminance, keeping row-major order.
///
/// # Returns
/// A vector with exactly one value per raster cell.
pub fn to_luminance(raster: &RasterBuffer) -> Vec<f64> {
    raster.pixels().iter().map(|&px| luminance(px)).collect()
}
