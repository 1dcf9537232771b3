//! Image fetching, decoding and resampling onto the character grid.

use std::path::PathBuf;

use futures_util::StreamExt;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use super::dimensions::Dimensions;

/// A single pixel, composited over black.
pub type Rgb = [u8; 3];

/// Where the pixels of a post's image come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Remote image fetched over HTTP(S).
    Url(String),
    /// Image file on the local filesystem.
    Path(PathBuf),
    /// Already-loaded encoded image bytes (PNG, JPEG, GIF, ...).
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Human-readable description used in log lines and error messages.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Url(url) => url.clone(),
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }
}

/// Pixel grid resampled to the output dimensions, row-major.
///
/// Always holds exactly `width * height` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RasterBuffer {
    /// Build a buffer from raw pixels.
    ///
    /// Returns `None` if either dimension is zero or the pixel count does
    /// not equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Errors that can occur while loading an image into a [`RasterBuffer`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to fetch image {source_desc}: {error}")]
    Fetch {
        source_desc: String,
        #[source]
        error: reqwest::Error,
    },

    #[error("Image request {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read image {path}: {error}")]
    Io {
        path: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Failed to decode image {source_desc}: {error}")]
    Image {
        source_desc: String,
        #[source]
        error: image::ImageError,
    },
}

/// Fetches, decodes and stretches images onto a fixed-size grid.
///
/// Holds no decoded state between calls; every render starts from the
/// source again.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    http_client: reqwest::Client,
    filter: FilterType,
}

impl Rasterizer {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            filter: FilterType::Triangle,
        }
    }

    /// Use a different resampling filter.
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Load `source` and resample it to exactly `dims`.
    ///
    /// The image is stretched to fill the grid; aspect ratio is not kept.
    pub async fn rasterize(
        &self,
        source: &ImageSource,
        dims: Dimensions,
    ) -> Result<RasterBuffer, DecodeError> {
        let bytes = self.load(source).await?;
        log::debug!(
            "Decoding {} ({} bytes) to {}x{}",
            source.describe(),
            bytes.len(),
            dims.width(),
            dims.height()
        );
        let image = image::load_from_memory(&bytes).map_err(|error| DecodeError::Image {
            source_desc: source.describe(),
            error,
        })?;
        Ok(resample(&image, dims, self.filter))
    }

    async fn load(&self, source: &ImageSource) -> Result<Vec<u8>, DecodeError> {
        match source {
            ImageSource::Bytes(bytes) => Ok(bytes.clone()),
            ImageSource::Path(path) => {
                tokio::fs::read(path).await.map_err(|error| DecodeError::Io {
                    path: path.display().to_string(),
                    error,
                })
            }
            ImageSource::Url(url) => self.download(url).await,
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, DecodeError> {
        let fetch_err = |error: reqwest::Error| DecodeError::Fetch {
            source_desc: url.to_string(),
            error,
        };

        log::info!("Downloading image from: {}", url);
        let response = self.http_client.get(url).send().await.map_err(fetch_err)?;

        if !response.status().is_success() {
            return Err(DecodeError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            bytes.extend_from_slice(&chunk.map_err(fetch_err)?);
        }

        Ok(bytes)
    }
}

/// Stretch a decoded image onto a `dims` grid.
///
/// Alpha is flattened over black before resizing, so fully transparent
/// pixels read as `[0, 0, 0]` and never bleed their hidden colour into
/// neighbouring cells.
pub fn resample(image: &DynamicImage, dims: Dimensions, filter: FilterType) -> RasterBuffer {
    let rgba = image.to_rgba8();
    let flattened = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        image::Rgb(over_black(rgba.get_pixel(x, y).0))
    });
    let resized = image::imageops::resize(&flattened, dims.width(), dims.height(), filter);

    let pixels = resized.pixels().map(|p| p.0).collect();

    RasterBuffer {
        width: dims.width(),
        height: dims.height(),
        pixels,
    }
}

/// Composite one RGBA pixel over an opaque black background.
fn over_black([r, g, b, a]: [u8; 4]) -> Rgb {
    let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
    [scale(r), scale(g), scale(b)]
}

/// Parse a resampling filter name as used in the config file.
pub fn parse_filter(name: &str) -> Option<FilterType> {
    match name.to_ascii_lowercase().as_str() {
        "nearest" => Some(FilterType::Nearest),
        "triangle" | "bilinear" => Some(FilterType::Triangle),
        "catmull-rom" | "catmullrom" | "cubic" => Some(FilterType::CatmullRom),
        "gaussian" => Some(FilterType::Gaussian),
        "lanczos3" | "lanczos" => Some(FilterType::Lanczos3),
        _ => None,
    }
}
