//! Resolution of the single-dash listing and palette flags.

use super::args::is_verbose_flag;
use crate::feed::{Listing, Period};

/// Names that print usage instead of fetching a feed.
pub const HELP_WORDS: &[&str] = &["?", "help", "man", "woman"];

/// Listing and palette toggles found after the feed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Category flag, if any. `None` means the configured default (hot).
    pub listing: Option<Listing>,
    pub simple: bool,
    pub invert: bool,
}

/// Scan the trailing arguments.
///
/// The last of `-hot`, `-new`, `-top` wins. A period word may appear
/// anywhere; it only matters for `-top` and falls back to `day`.
/// `-v`/`--verbose` is consumed by [`Args::wants_verbose`](super::Args::wants_verbose).
/// Anything unrecognised is ignored.
pub fn parse_flags<S: AsRef<str>>(args: &[S]) -> Flags {
    let mut category: Option<&str> = None;
    let mut period: Option<Period> = None;
    let mut flags = Flags::default();

    for arg in args {
        match arg.as_ref() {
            "-hot" => category = Some("hot"),
            "-new" => category = Some("new"),
            "-top" => category = Some("top"),
            "-simple" => flags.simple = true,
            "-invert" => flags.invert = true,
            verbose if is_verbose_flag(verbose) => {}
            other => {
                if let Ok(p) = other.parse::<Period>() {
                    period = Some(p);
                } else {
                    log::debug!("Ignoring unknown argument '{}'", other);
                }
            }
        }
    }

    flags.listing = match category {
        Some("hot") => Some(Listing::Hot),
        Some("new") => Some(Listing::New),
        Some("top") => Some(Listing::Top(period.unwrap_or_default())),
        _ => None,
    };

    flags
}

/// True if the feed name asks for usage text.
pub fn is_help(name: &str) -> bool {
    HELP_WORDS.contains(&name)
}
