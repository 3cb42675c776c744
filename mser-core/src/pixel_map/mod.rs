//! Gray-level pixel grid with stable pixel identities and neighbor lookup.
//!
//! A [`PixelMap`] owns the intensities of a rectangular image and the
//! neighborhood type used to connect pixels. Pixel identities are row-major
//! indices (`id = y * width + x`) and never change after construction.

use std::iter::FusedIterator;

use crate::error::{ComponentTreeError, Result};

/// Axis-aligned offsets in the order east, north, west, south.
const AXIS_OFFSETS: [(isize, isize); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// Axis-aligned offsets followed by the diagonals north-east, north-west,
/// south-west and south-east.
const FULL_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
];

/// Pixel adjacency used when connecting pixels into components.
///
/// # Examples
/// ```
/// use mser_core::Connectivity;
///
/// assert_eq!(Connectivity::try_from(8), Ok(Connectivity::Eight));
/// assert_eq!(Connectivity::Four.degree(), 4);
/// assert!(Connectivity::try_from(6).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Horizontal and vertical neighbors only.
    #[default]
    Four,
    /// Horizontal, vertical and diagonal neighbors.
    Eight,
}

impl Connectivity {
    /// Returns the maximum number of neighbors a pixel can have.
    #[must_use]
    pub const fn degree(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    pub(crate) const fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::Four => &AXIS_OFFSETS,
            Self::Eight => &FULL_OFFSETS,
        }
    }
}

impl TryFrom<u8> for Connectivity {
    type Error = ComponentTreeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            got => Err(ComponentTreeError::UnsupportedNeighborhood { got }),
        }
    }
}

/// A single grid position and its intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Row-major pixel identity.
    pub id: usize,
    /// Horizontal position.
    pub x: usize,
    /// Vertical position.
    pub y: usize,
    /// Gray-level intensity.
    pub value: u8,
}

/// Immutable gray-level image with per-pixel neighbor iteration.
///
/// # Examples
/// ```
/// use mser_core::{Connectivity, PixelMap};
///
/// let map = PixelMap::new(3, 2, vec![0, 1, 2, 3, 4, 5], Connectivity::Four)?;
/// assert_eq!(map.intensity(4), Some(4));
/// let neighbors: Vec<usize> = map.neighbors(4).collect();
/// assert_eq!(neighbors, vec![5, 1, 3]);
/// # Ok::<(), mser_core::ComponentTreeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMap {
    width: usize,
    height: usize,
    values: Vec<u8>,
    connectivity: Connectivity,
}

impl PixelMap {
    /// Creates a pixel map from row-major intensities.
    ///
    /// # Errors
    /// Returns [`ComponentTreeError::InvalidDimensions`] when either
    /// dimension is zero, [`ComponentTreeError::DimensionsOverflow`] when the
    /// pixel count overflows `usize`, and
    /// [`ComponentTreeError::GridSizeMismatch`] when `values.len()` differs
    /// from `width * height`.
    pub fn new(
        width: usize,
        height: usize,
        values: Vec<u8>,
        connectivity: Connectivity,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ComponentTreeError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(ComponentTreeError::DimensionsOverflow { width, height })?;
        if values.len() != expected {
            return Err(ComponentTreeError::GridSizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
            connectivity,
        })
    }

    /// Creates a pixel map from a slice of equally long rows.
    ///
    /// # Errors
    /// Returns [`ComponentTreeError::InvalidDimensions`] when there are no
    /// rows or the first row is empty, and
    /// [`ComponentTreeError::GridSizeMismatch`] when the rows differ in
    /// length.
    ///
    /// # Examples
    /// ```
    /// use mser_core::{Connectivity, PixelMap};
    ///
    /// let map = PixelMap::from_rows(&[vec![1_u8, 2], vec![3, 4]], Connectivity::Eight)?;
    /// assert_eq!((map.width(), map.height()), (2, 2));
    /// # Ok::<(), mser_core::ComponentTreeError>(())
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], connectivity: Connectivity) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let values: Vec<u8> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::new(width, height, values, connectivity)
    }

    /// Returns the grid width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a pixel map holds at least one pixel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the neighborhood type.
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Returns all intensities in row-major order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Returns the intensity of `id`, or `None` when `id` is out of range.
    #[must_use]
    pub fn intensity(&self, id: usize) -> Option<u8> {
        self.values.get(id).copied()
    }

    /// Returns the pixel record for `id`.
    #[must_use]
    pub fn pixel(&self, id: usize) -> Option<Pixel> {
        let value = self.intensity(id)?;
        let (x, y) = self.coordinates(id);
        Some(Pixel { id, x, y, value })
    }

    /// Iterates over every pixel in identity order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.values.iter().enumerate().map(|(id, &value)| {
            let (x, y) = self.coordinates(id);
            Pixel { id, x, y, value }
        })
    }

    /// Returns the identity of the pixel at `(x, y)`.
    #[must_use]
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Returns the `(x, y)` position of `id`.
    #[must_use]
    pub fn coordinates(&self, id: usize) -> (usize, usize) {
        (id % self.width, id / self.width)
    }

    /// Iterates over the in-bounds neighbors of `id`.
    ///
    /// The iterator borrows the map and holds no state beyond its own
    /// position, so calling `neighbors` again restarts the sequence. An
    /// `id` outside the map has no neighbors.
    #[must_use]
    pub fn neighbors(&self, id: usize) -> Neighbors<'_> {
        let (x, y) = self.coordinates(id);
        let offsets: &'static [(isize, isize)] = if id < self.len() {
            self.connectivity.offsets()
        } else {
            &[]
        };
        Neighbors {
            map: self,
            x,
            y,
            offsets: offsets.iter(),
        }
    }

    /// Returns the neighbor of `id` in the given direction slot.
    ///
    /// Direction slots follow the order used by [`PixelMap::neighbors`];
    /// `None` means the slot points outside the grid.
    pub(crate) fn neighbor(&self, id: usize, direction: usize) -> Option<usize> {
        if id >= self.len() {
            return None;
        }
        let &(dx, dy) = self.connectivity.offsets().get(direction)?;
        let (x, y) = self.coordinates(id);
        self.offset(x, y, dx, dy)
    }

    fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<usize> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.index_of(nx, ny)
    }
}

/// Iterator over the in-bounds neighbors of one pixel.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    map: &'a PixelMap,
    x: usize,
    y: usize,
    offsets: std::slice::Iter<'static, (isize, isize)>,
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for &(dx, dy) in self.offsets.by_ref() {
            if let Some(id) = self.map.offset(self.x, self.y, dx, dy) {
                return Some(id);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len()))
    }
}

impl FusedIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests;
