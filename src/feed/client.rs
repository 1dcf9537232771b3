//! FeedClient - fetches listings from the content feed.

use std::time::Duration;

use super::listing::Listing;
use super::picker::PostPicker;
use super::post::{ListingResponse, Post};

/// Default base URL of the feed.
pub const FEED_BASE_URL: &str = "https://www.reddit.com";

/// Prefix shown before the feed name in the post header.
pub const FEED_PREFIX: &str = "r";

/// User-Agent sent with every request; the feed throttles anonymous agents.
pub const DEFAULT_USER_AGENT: &str = concat!("ascii-buddy/", env!("CARGO_PKG_VERSION"));

/// Default timeout for HTTP requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the shared HTTP client used for the feed and for image downloads.
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, FeedError> {
    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Client for a feed's JSON listing endpoint.
pub struct FeedClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl FeedClient {
    /// Create a client against the default feed host.
    pub fn new() -> Result<Self, FeedError> {
        Self::with_base_url(FEED_BASE_URL.to_string())
    }

    /// Create a client against a custom host (mirrors, tests).
    pub fn with_base_url(base_url: String) -> Result<Self, FeedError> {
        let http_client = build_http_client(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT)?;
        Ok(Self::with_http_client(base_url, http_client))
    }

    /// Create a client that shares an existing HTTP client.
    pub fn with_http_client(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the JSON listing, without the query string.
    pub fn listing_url(&self, name: &str, listing: Listing) -> String {
        format!(
            "{}/{}/{}/{}/.json",
            self.base_url,
            FEED_PREFIX,
            name,
            listing.category()
        )
    }

    /// Fetch all posts of a listing.
    ///
    /// # Errors
    /// - `FeedError::Http` / `FeedError::Status` when the request fails
    /// - `FeedError::Malformed` when the body is not a listing
    /// - `FeedError::EmptyListing` when it holds no posts
    pub async fn fetch_posts(&self, name: &str, listing: Listing) -> Result<Vec<Post>, FeedError> {
        let url = self.listing_url(name, listing);
        log::info!("Fetching {} listing: {}", listing, url);

        let mut request = self.http_client.get(&url);
        if let Some(period) = listing.period() {
            request = request.query(&[("t", period.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(FeedError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body: ListingResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                FeedError::Malformed {
                    reason: e.to_string(),
                }
            } else {
                FeedError::Http(e)
            }
        })?;

        let posts: Vec<Post> = body
            .data
            .map(|d| d.children)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|child| child.data)
            .collect();

        if posts.is_empty() {
            return Err(FeedError::EmptyListing {
                name: name.to_string(),
            });
        }

        log::debug!("Listing returned {} posts", posts.len());
        Ok(posts)
    }

    /// Fetch a listing and let `picker` choose one post from it.
    pub async fn random_post(
        &self,
        name: &str,
        listing: Listing,
        picker: &mut dyn PostPicker,
    ) -> Result<Post, FeedError> {
        let mut posts = self.fetch_posts(name, listing).await?;
        let index = picker.pick(posts.len()).min(posts.len() - 1);
        log::debug!("Picked post {} of {}", index + 1, posts.len());
        Ok(posts.swap_remove(index))
    }
}

/// Errors that can occur while talking to the feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed request {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Couldn't load posts from {name}")]
    EmptyListing { name: String },

    #[error("Malformed listing: {reason}")]
    Malformed { reason: String },

    #[error("Missing required data: {reason}")]
    MissingData { reason: String },
}

impl FeedError {
    /// True for transport and status failures, false for bad payloads.
    pub fn is_network(&self) -> bool {
        matches!(self, FeedError::Http(_) | FeedError::Status { .. })
    }
}
