//! Fixture types for component-tree property tests.

use test_strategy::Arbitrary;

use crate::{Connectivity, PixelMap};

/// How intensities are distributed over a generated grid.
///
/// Few distinct levels stress same-level merges and tie-breaking; the full
/// range stresses deep trees.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum LevelDistribution {
    /// Two distinct levels.
    #[weight(2)]
    Binary,
    /// Three to five distinct levels.
    #[weight(3)]
    FewLevels,
    /// Flat background with painted rectangles of other levels.
    #[weight(3)]
    Plateaus,
    /// Independent uniform samples over the full 8-bit range.
    #[weight(2)]
    Noise,
    /// Only the extreme intensities 0 and 255.
    #[weight(1)]
    Extremes,
}

/// A generated grid together with the settings used to produce it.
#[derive(Clone, Debug)]
pub(super) struct GridFixture {
    pub width: usize,
    pub height: usize,
    pub values: Vec<u8>,
    pub connectivity: Connectivity,
    pub distribution: LevelDistribution,
}

impl GridFixture {
    /// Wraps the fixture in a [`PixelMap`].
    ///
    /// # Panics
    /// Panics when the generator produced inconsistent dimensions.
    pub(super) fn pixel_map(&self) -> PixelMap {
        PixelMap::new(
            self.width,
            self.height,
            self.values.clone(),
            self.connectivity,
        )
        .expect("generated fixtures have consistent dimensions")
    }

    /// Short context string for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, {}x{}, connectivity={:?}",
            self.distribution, self.width, self.height, self.connectivity
        )
    }
}
