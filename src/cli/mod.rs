//! Command-line interface definitions and helpers.
//!
//! clap handles `--config`/`--verbose`; the single-dash listing flags are
//! collected verbatim and resolved by [`parse_flags`].

mod args;
mod flags;
mod usage;

pub use args::Args;
pub use flags::{is_help, parse_flags, Flags, HELP_WORDS};
pub use usage::{print_usage, usage_text};

/// Bad or missing feed name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("Missing feed name. Run `ascii-buddy help` for usage.")]
    MissingName,

    #[error("Invalid feed name '{0}'. Run `ascii-buddy help` for usage.")]
    InvalidName(String),
}

/// True if `name` is usable as a single URL path segment.
///
/// Feed names are letters, digits, `_`, `-` and `+` (combined feeds), and
/// must not start with `-`.
fn is_valid_name(name: &str) -> bool {
    !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage text.
    Help,
    /// Render a post from `name`.
    Render { name: String, flags: Flags },
}

impl Args {
    /// Validate the feed name and resolve the trailing flags.
    pub fn invocation(&self) -> Result<Invocation, UsageError> {
        let name = match self.name.as_deref().map(str::trim) {
            None | Some("") => return Err(UsageError::MissingName),
            Some(name) => name,
        };

        if is_help(name) {
            return Ok(Invocation::Help);
        }

        if !is_valid_name(name) {
            return Err(UsageError::InvalidName(name.to_string()));
        }

        Ok(Invocation::Render {
            name: name.to_string(),
            flags: parse_flags(&self.flags),
        })
    }
}
