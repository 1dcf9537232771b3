//! Usage text printed for `ascii-buddy help`.

use colored::Colorize;

/// Build the usage text, with colors when enabled.
pub fn usage_text() -> String {
    format!(
        "
    {usage}

      ascii-buddy [--config <file>] [-v] <feed> [parameters]

      parameters:

      {hot}            random post in hot category
      {new}            random post in new category
      {top} [options]  random post in top category
                      {options} hour, day, week, month, year, all
                      {default} hot
      {simple}         use simple character matching
      {invert}         invert the character palette

",
        usage = "usage:".green(),
        hot = "-hot".blue(),
        new = "-new".blue(),
        top = "-top".blue(),
        options = "options:".yellow(),
        default = "default:".yellow(),
        simple = "-simple".blue(),
        invert = "-invert".blue(),
    )
}

/// Print usage to stdout.
pub fn print_usage() {
    println!("{}", usage_text());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_flag() {
        colored::control::set_override(false);
        let text = usage_text();
        for flag in ["-hot", "-new", "-top", "-simple", "-invert"] {
            assert!(text.contains(flag), "usage is missing {}", flag);
        }
        assert!(text.contains("hour, day, week, month, year, all"));
        colored::control::unset_override();
    }
}
