//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Render a random post's image from a feed as character art
#[derive(Parser, Debug)]
#[command(name = "ascii-buddy")]
#[command(version, about = "Random feed post rendered as ASCII art in your terminal", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log more (debug level)
    #[arg(long, short)]
    pub verbose: bool,

    /// Feed name, or `help` for usage
    #[arg(allow_hyphen_values = true)]
    pub name: Option<String>,

    /// -hot | -new | -top [hour|day|week|month|year|all] | -simple | -invert
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub flags: Vec<String>,
}

/// Verbose switches also accepted after the feed name.
const VERBOSE_FLAGS: &[&str] = &["-v", "--verbose"];

impl Args {
    /// True if `-v`/`--verbose` was given before or after the feed name.
    pub fn wants_verbose(&self) -> bool {
        self.verbose || self.flags.iter().any(|f| is_verbose_flag(f))
    }
}

pub(crate) fn is_verbose_flag(arg: &str) -> bool {
    VERBOSE_FLAGS.contains(&arg)
}
