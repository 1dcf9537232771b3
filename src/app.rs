//! Wires the feed, the rasterizer and the character pipeline together.

use std::fmt;

use colored::Colorize;

use crate::ascii::{self, AsciiArtwork, Dimensions, PaletteConfig, Rasterizer};
use crate::cli::{Args, Flags, Invocation};
use crate::config::Config;
use crate::error::AppError;
use crate::feed::{build_http_client, FeedClient, Listing, PostPicker, FEED_PREFIX};

/// A post ready to print: header line plus artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPost {
    pub feed: String,
    pub title: String,
    pub artwork: AsciiArtwork,
}

impl RenderedPost {
    /// `r/<feed> <title>` without styling.
    pub fn header(&self) -> String {
        format!("{}/{} {}", FEED_PREFIX, self.feed, self.title)
    }

    /// Header with the feed on a blue background and a blue title.
    pub fn styled_header(&self) -> String {
        format!(
            "{} {}",
            format!("{}/{}", FEED_PREFIX, self.feed).black().on_blue(),
            self.title.blue()
        )
    }
}

impl fmt::Display for RenderedPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.styled_header())?;
        write!(f, "{}", self.artwork)
    }
}

/// Settings for one render, resolved from flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub listing: Listing,
    pub palette: PaletteConfig,
    pub dimensions: Dimensions,
}

impl RenderRequest {
    /// Command-line flags win over config; booleans are OR-ed.
    pub fn resolve(flags: &Flags, config: &Config, dimensions: Dimensions) -> Self {
        let configured = config.palette();
        Self {
            listing: flags.listing.unwrap_or_else(|| config.default_listing()),
            palette: PaletteConfig::new(
                flags.simple || configured.simple,
                flags.invert || configured.invert,
            ),
            dimensions,
        }
    }
}

/// Everything needed to turn a feed name into artwork.
pub struct App {
    feed: FeedClient,
    rasterizer: Rasterizer,
}

impl App {
    /// Build clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let http_client = build_http_client(&config.feed.user_agent, config.timeout())?;
        let feed = FeedClient::with_http_client(config.feed.base_url.clone(), http_client.clone());
        let rasterizer = Rasterizer::new(http_client).with_filter(config.filter());
        Ok(Self { feed, rasterizer })
    }

    pub fn new(feed: FeedClient, rasterizer: Rasterizer) -> Self {
        Self { feed, rasterizer }
    }

    /// Pick a post from `name` and render its image.
    ///
    /// Nothing is printed here; the caller prints only on success.
    pub async fn render_post(
        &self,
        name: &str,
        request: &RenderRequest,
        picker: &mut dyn PostPicker,
    ) -> Result<RenderedPost, AppError> {
        let post = self.feed.random_post(name, request.listing, picker).await?;
        let source = post.image_source()?;
        log::info!(
            "Rendering \"{}\" from {} at {}x{} ({} palette)",
            post.title,
            source.describe(),
            request.dimensions.width(),
            request.dimensions.height(),
            request.palette.name()
        );

        let raster = self.rasterizer.rasterize(&source, request.dimensions).await?;
        let artwork = ascii::render(&raster, &request.palette.palette());

        Ok(RenderedPost {
            feed: name.to_string(),
            title: post.title,
            artwork,
        })
    }
}

/// Result of a successful invocation.
#[derive(Debug)]
pub enum Outcome {
    /// Usage text was requested.
    Usage,
    Rendered(RenderedPost),
}

/// Resolve arguments and config, then render one post.
pub async fn run(args: &Args, picker: &mut dyn PostPicker) -> Result<Outcome, AppError> {
    let (name, flags) = match args.invocation()? {
        Invocation::Help => return Ok(Outcome::Usage),
        Invocation::Render { name, flags } => (name, flags),
    };

    let config = Config::load(args.config.as_deref())?;
    let dimensions = ascii::terminal_dimensions(config.fallback_dimensions());
    let request = RenderRequest::resolve(&flags, &config, dimensions);
    log::debug!("Resolved request: {:?}", request);

    let app = App::from_config(&config)?;
    let post = app.render_post(&name, &request, picker).await?;
    Ok(Outcome::Rendered(post))
}
