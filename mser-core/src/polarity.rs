//! Processing direction through the intensity range.

/// Selects whether components grow from dark or from bright pixels.
///
/// Construction processes intensities in *rank* order. For
/// [`Polarity::MinTree`] the rank of an intensity is the intensity itself;
/// for [`Polarity::MaxTree`] it is the inverted intensity `255 - value`.
/// Parents always have a strictly larger rank than their children.
///
/// # Examples
/// ```
/// use mser_core::Polarity;
///
/// assert!(Polarity::MinTree.includes(10, 20));
/// assert!(!Polarity::MaxTree.includes(10, 20));
/// assert_eq!(Polarity::MaxTree.rank(255), 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Levels ascend; a component at level `L` holds pixels with
    /// intensity `<= L`.
    #[default]
    MinTree,
    /// Levels descend; a component at level `L` holds pixels with
    /// intensity `>= L`.
    MaxTree,
}

impl Polarity {
    /// Maps an intensity to its processing rank.
    #[must_use]
    pub const fn rank(self, value: u8) -> u8 {
        match self {
            Self::MinTree => value,
            Self::MaxTree => u8::MAX - value,
        }
    }

    /// Maps a processing rank back to an intensity.
    #[must_use]
    pub const fn level(self, rank: u8) -> u8 {
        // The mapping is an involution.
        self.rank(rank)
    }

    /// Returns `true` when a pixel of intensity `value` is foreground in the
    /// threshold set at `level`.
    #[must_use]
    pub const fn includes(self, value: u8, level: u8) -> bool {
        self.rank(value) <= self.rank(level)
    }

    /// Returns `true` when `earlier` is processed strictly before `later`.
    #[must_use]
    pub const fn precedes(self, earlier: u8, later: u8) -> bool {
        self.rank(earlier) < self.rank(later)
    }
}
