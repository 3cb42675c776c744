//! Binary masks produced by threshold reconstruction.

/// Foreground/background labeling of a grid at one threshold level.
///
/// # Examples
/// ```
/// use mser_core::{ComponentTree, Connectivity, PixelMap};
///
/// let map = PixelMap::new(3, 1, vec![0, 9, 4], Connectivity::Four)?;
/// let tree = ComponentTree::new(&map)?;
/// let mask = tree.reconstruct_at_level(4);
/// assert_eq!(mask.as_slice(), &[true, false, true]);
/// assert_eq!(mask.to_bytes(), vec![255, 0, 255]);
/// # Ok::<(), mser_core::ComponentTreeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThresholdMask {
    width: usize,
    height: usize,
    foreground: Vec<bool>,
}

impl ThresholdMask {
    pub(crate) fn new(width: usize, height: usize, foreground: Vec<bool>) -> Self {
        Self {
            width,
            height,
            foreground,
        }
    }

    /// Returns the mask width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the mask height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major foreground flags.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.foreground
    }

    /// Returns `true` when pixel `id` is foreground.
    #[must_use]
    pub fn is_foreground(&self, id: usize) -> bool {
        self.foreground.get(id).copied().unwrap_or(false)
    }

    /// Returns the flag at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.foreground.get(y * self.width + x).copied()
    }

    /// Returns the number of foreground pixels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.foreground.iter().filter(|&&flag| flag).count()
    }

    /// Returns `true` when every foreground pixel of `self` is foreground in
    /// `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.foreground.len() == other.foreground.len()
            && self
                .foreground
                .iter()
                .zip(&other.foreground)
                .all(|(&mine, &theirs)| !mine || theirs)
    }

    /// Renders the mask as bytes, `255` for foreground and `0` otherwise.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.foreground
            .iter()
            .map(|&flag| if flag { u8::MAX } else { 0 })
            .collect()
    }
}
