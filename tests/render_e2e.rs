//! End-to-end tests: mock feed + mock image host -> rendered post.

use std::io::Write;

use ascii_buddy::app::{self, App, Outcome, RenderRequest};
use ascii_buddy::ascii::{Dimensions, PaletteConfig, Rasterizer};
use ascii_buddy::cli::Args;
use ascii_buddy::error::{AppError, ErrorKind};
use ascii_buddy::feed::{FeedClient, FixedPicker, Listing};
use clap::Parser;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Left half black, right half white.
fn split_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    let mut out = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

async fn mount_listing(server: &MockServer, name: &str, posts: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/r/{}/hot/.json", name)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": { "children": posts } })),
        )
        .mount(server)
        .await;
}

async fn mount_image(server: &MockServer, image_path: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(body),
        )
        .mount(server)
        .await;
}

fn app(server: &MockServer) -> App {
    App::new(
        FeedClient::with_base_url(server.uri()).unwrap(),
        Rasterizer::new(reqwest::Client::new()),
    )
}

fn request(width: u32, height: u32, simple: bool, invert: bool) -> RenderRequest {
    RenderRequest {
        listing: Listing::Hot,
        palette: PaletteConfig::new(simple, invert),
        dimensions: Dimensions::new(width, height),
    }
}

#[tokio::test]
async fn test_image_post_renders_to_requested_size() {
    let server = MockServer::start().await;
    mount_image(&server, "/img/split.png", split_png(64, 32)).await;
    mount_listing(
        &server,
        "pics",
        serde_json::json!([{ "data": {
            "title": "Half and half",
            "url": format!("{}/img/split.png", server.uri()),
            "is_video": false
        }}]),
    )
    .await;

    let post = app(&server)
        .render_post("pics", &request(8, 3, true, false), &mut FixedPicker(0))
        .await
        .unwrap();

    assert_eq!(post.header(), "r/pics Half and half");
    assert_eq!(post.artwork.as_str().matches('\n').count(), 3);
    for line in post.artwork.lines() {
        assert_eq!(line.chars().count(), 8);
        // Dark side maps to the sparse end, bright side to the dense end
        assert!(line.starts_with(' '));
        assert!(line.ends_with('@'));
    }
}

#[tokio::test]
async fn test_invert_swaps_polarity() {
    let server = MockServer::start().await;
    mount_image(&server, "/img/split.png", split_png(64, 32)).await;
    mount_listing(
        &server,
        "pics",
        serde_json::json!([{ "data": {
            "title": "inverted",
            "url": format!("{}/img/split.png", server.uri())
        }}]),
    )
    .await;

    let post = app(&server)
        .render_post("pics", &request(8, 2, true, true), &mut FixedPicker(0))
        .await
        .unwrap();

    for line in post.artwork.lines() {
        assert!(line.starts_with('@'));
        assert!(line.ends_with(' '));
    }
}

#[tokio::test]
async fn test_video_post_uses_thumbnail_not_url() {
    let server = MockServer::start().await;
    mount_image(&server, "/thumb/v.png", split_png(16, 16)).await;
    mount_listing(
        &server,
        "videos",
        serde_json::json!([{ "data": {
            "title": "A clip",
            "url": "this is not a url",
            "is_video": true,
            "thumbnail": format!("{}/thumb/v.png", server.uri())
        }}]),
    )
    .await;

    let post = app(&server)
        .render_post("videos", &request(4, 2, false, false), &mut FixedPicker(0))
        .await
        .unwrap();

    assert_eq!(post.title, "A clip");
    assert_eq!(post.artwork.lines().count(), 2);
}

#[tokio::test]
async fn test_empty_listing_is_data_error() {
    let server = MockServer::start().await;
    mount_listing(&server, "nothing", serde_json::json!([])).await;

    let err = app(&server)
        .render_post("nothing", &request(4, 2, false, false), &mut FixedPicker(0))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Data);
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_broken_image_is_decode_error() {
    let server = MockServer::start().await;
    mount_image(&server, "/img/broken.png", b"not a png".to_vec()).await;
    mount_listing(
        &server,
        "pics",
        serde_json::json!([{ "data": {
            "title": "broken",
            "url": format!("{}/img/broken.png", server.uri())
        }}]),
    )
    .await;

    let err = app(&server)
        .render_post("pics", &request(4, 2, false, false), &mut FixedPicker(0))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Decode(_)));
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_missing_image_is_decode_error() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        "pics",
        serde_json::json!([{ "data": {
            "title": "gone",
            "url": format!("{}/img/gone.png", server.uri())
        }}]),
    )
    .await;

    let err = app(&server)
        .render_post("pics", &request(4, 2, false, false), &mut FixedPicker(0))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_run_with_config_file() {
    let server = MockServer::start().await;
    mount_image(&server, "/img/split.png", split_png(32, 32)).await;
    mount_listing(
        &server,
        "pics",
        serde_json::json!([{ "data": {
            "title": "from run",
            "url": format!("{}/img/split.png", server.uri())
        }}]),
    )
    .await;

    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(
        config,
        "[feed]\nbase_url = \"{}\"\n\n[render]\nfallback_columns = 12\nfallback_rows = 3\n",
        server.uri()
    )
    .unwrap();

    let config_path = config.path().to_str().unwrap().to_string();
    // Unknown flags behave like no flag at all (hot listing)
    let args = Args::parse_from(["ascii-buddy", "--config", config_path.as_str(), "pics", "-foo", "-simple"]);

    match app::run(&args, &mut FixedPicker(0)).await.unwrap() {
        Outcome::Rendered(post) => {
            assert_eq!(post.title, "from run");
            let widths: Vec<usize> = post.artwork.lines().map(|l| l.chars().count()).collect();
            assert!(!widths.is_empty());
            assert!(widths.iter().all(|&w| w == widths[0] && w >= 1));
        }
        other => panic!("expected a rendered post, got {:?}", other),
    }
}

#[tokio::test]
async fn test_run_help_returns_usage() {
    let args = Args::parse_from(["ascii-buddy", "help"]);
    let outcome = app::run(&args, &mut FixedPicker(0)).await.unwrap();
    assert!(matches!(outcome, Outcome::Usage));
}

#[tokio::test]
async fn test_run_without_name_is_usage_error() {
    let args = Args::parse_from(["ascii-buddy"]);
    let err = app::run(&args, &mut FixedPicker(0)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
}

#[tokio::test]
async fn test_run_with_missing_config_is_config_error() {
    let args = Args::parse_from(["ascii-buddy", "--config", "/nonexistent/ascii-buddy.toml", "pics"]);
    let err = app::run(&args, &mut FixedPicker(0)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}
