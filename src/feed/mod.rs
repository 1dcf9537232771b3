//! Content feed access: listings, posts and post selection.

mod client;
mod listing;
mod picker;
mod post;

pub use client::{
    build_http_client, FeedClient, FeedError, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, FEED_BASE_URL,
    FEED_PREFIX,
};
pub use listing::{Listing, Period};
pub use picker::{FixedPicker, PostPicker, RandomPicker};
pub use post::{ListingChild, ListingData, ListingResponse, Post};
