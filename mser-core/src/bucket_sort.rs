//! Counting sort of pixel identities by intensity rank.
//!
//! Construction consumes pixels one rank at a time. The sort is a single
//! histogram pass plus a stable scatter, so pixels inside one bucket appear
//! in ascending identity order. That order is the canonical tie-break that
//! keeps trees reproducible.

use crate::{pixel_map::PixelMap, polarity::Polarity};

/// Number of distinct 8-bit intensities.
pub const LEVEL_COUNT: usize = 256;

/// Pixel identities grouped into one bucket per rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityOrder {
    order: Vec<usize>,
    // `offsets[r]..offsets[r + 1]` delimits bucket `r`.
    offsets: Vec<usize>,
    polarity: Polarity,
}

impl IntensityOrder {
    /// Returns every pixel identity in processing order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Returns the number of sorted pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when no pixels were sorted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the polarity the buckets were ranked with.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the pixels of one rank in ascending identity order.
    #[must_use]
    pub fn bucket(&self, rank: u8) -> &[usize] {
        let index = usize::from(rank);
        match (self.offsets.get(index), self.offsets.get(index + 1)) {
            (Some(&start), Some(&end)) => self.order.get(start..end).unwrap_or_default(),
            _ => &[],
        }
    }

    /// Iterates over the non-empty buckets in ascending rank order.
    pub fn buckets(&self) -> impl Iterator<Item = (u8, &[usize])> + '_ {
        (0..=u8::MAX)
            .map(|rank| (rank, self.bucket(rank)))
            .filter(|(_, bucket)| !bucket.is_empty())
    }
}

/// Sorts the pixels of `map` by rank under `polarity`.
///
/// Runs in `O(N + K)` for `N` pixels and `K` = [`LEVEL_COUNT`] ranks.
///
/// # Examples
/// ```
/// use mser_core::{Connectivity, PixelMap, Polarity, sort_by_intensity};
///
/// let map = PixelMap::new(4, 1, vec![3, 1, 3, 0], Connectivity::Four)?;
/// let order = sort_by_intensity(&map, Polarity::MinTree);
/// assert_eq!(order.as_slice(), &[3, 1, 0, 2]);
/// let inverted = sort_by_intensity(&map, Polarity::MaxTree);
/// assert_eq!(inverted.as_slice(), &[0, 2, 1, 3]);
/// # Ok::<(), mser_core::ComponentTreeError>(())
/// ```
#[must_use]
pub fn sort_by_intensity(map: &PixelMap, polarity: Polarity) -> IntensityOrder {
    let mut histogram = [0_usize; LEVEL_COUNT];
    for &value in map.values() {
        histogram[usize::from(polarity.rank(value))] += 1;
    }

    let mut offsets = Vec::with_capacity(LEVEL_COUNT + 1);
    let mut running = 0;
    offsets.push(running);
    for count in histogram {
        running += count;
        offsets.push(running);
    }

    let mut cursor: Vec<usize> = offsets.iter().take(LEVEL_COUNT).copied().collect();
    let mut order = vec![0; map.len()];
    for (id, &value) in map.values().iter().enumerate() {
        let slot = &mut cursor[usize::from(polarity.rank(value))];
        order[*slot] = id;
        *slot += 1;
    }

    IntensityOrder {
        order,
        offsets,
        polarity,
    }
}
