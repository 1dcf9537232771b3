//! Post selection strategies.

use rand::Rng;

/// Chooses which post of a listing to render.
pub trait PostPicker {
    /// Return an index in `0..len`. Only called with `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniformly random selection.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl PostPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len.max(1))
    }
}

/// Always picks the same index, clamped to the listing length.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl PostPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
