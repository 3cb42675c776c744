//! Benchmark parameter types.

use std::fmt;

use crate::synthetic::ImagePattern;

/// Parameters for one component-tree benchmark input.
#[derive(Clone, Copy, Debug)]
pub struct TreeBenchParams {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Intensity layout of the image.
    pub pattern: ImagePattern,
}

impl fmt::Display for TreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}/{}", self.width, self.height, self.pattern)
    }
}
