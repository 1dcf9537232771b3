//! Output grid dimensions, taken from the terminal.

/// Column count used when the terminal size cannot be queried.
pub const DEFAULT_COLUMNS: u16 = 80;

/// Row count used when the terminal size cannot be queried.
pub const DEFAULT_ROWS: u16 = 24;

/// Size of the character grid in cells. Both sides are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create dimensions, clamping degenerate sizes up to 1x1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS as u32, DEFAULT_ROWS as u32)
    }
}

/// Query the invoking terminal's column and row count.
///
/// Falls back to `fallback` when stdout is not attached to a terminal
/// (piped output, CI, ...).
pub fn terminal_dimensions(fallback: Dimensions) -> Dimensions {
    match crossterm::terminal::size() {
        Ok((cols, rows)) => {
            log::debug!("Terminal size: {}x{}", cols, rows);
            Dimensions::new(cols as u32, rows as u32)
        }
        Err(e) => {
            log::warn!(
                "Could not query terminal size ({}), using {}x{}",
                e,
                fallback.width,
                fallback.height
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_zero_to_one() {
        let dims = Dimensions::new(0, 0);
        assert_eq!((dims.width(), dims.height()), (1, 1));
        assert_eq!(dims.cells(), 1);

        let dims = Dimensions::new(0, 7);
        assert_eq!((dims.width(), dims.height()), (1, 7));
    }

    #[test]
    fn test_new_keeps_valid_sizes() {
        let dims = Dimensions::new(120, 40);
        assert_eq!(dims.width(), 120);
        assert_eq!(dims.height(), 40);
        assert_eq!(dims.cells(), 4800);
    }

    #[test]
    fn test_default_is_80x24() {
        assert_eq!(Dimensions::default(), Dimensions::new(80, 24));
    }

    #[test]
    fn test_terminal_dimensions_never_degenerate() {
        let dims = terminal_dimensions(Dimensions::new(0, 0));
        assert!(dims.width() >= 1);
        assert!(dims.height() >= 1);
    }
}
