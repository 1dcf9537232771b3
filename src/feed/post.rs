//! Post records as returned by the feed's JSON listing.

use serde::Deserialize;

use crate::ascii::ImageSource;

use super::client::FeedError;

/// Top-level listing response: `{ "data": { "children": [...] } }`.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub data: Option<ListingData>,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingChild>,
}

/// One entry of the listing; the post itself sits under `data`.
#[derive(Debug, Deserialize)]
pub struct ListingChild {
    #[serde(default)]
    pub data: Option<Post>,
}

/// A single post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Post {
    /// Image to render for this post.
    ///
    /// Video posts always use their thumbnail, never the video url.
    pub fn image_source(&self) -> Result<ImageSource, FeedError> {
        let (field, value) = if self.is_video {
            ("thumbnail", self.thumbnail.as_deref())
        } else {
            ("url", self.url.as_deref())
        };

        match value.map(str::trim) {
            Some(addr) if is_http_url(addr) => Ok(ImageSource::Url(addr.to_string())),
            _ => Err(FeedError::MissingData {
                reason: format!("post \"{}\" has no usable {}", self.title, field),
            }),
        }
    }
}

/// Feeds put placeholders like `self`, `default` or `nsfw` in image fields.
fn is_http_url(addr: &str) -> bool {
    addr.starts_with("http://") || addr.starts_with("https://")
}
