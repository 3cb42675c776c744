//! Naive threshold-and-label oracle.
//!
//! Binarizes the grid at one level and labels the foreground with a plain
//! breadth-first flood fill. It shares no code with the tree builders apart
//! from [`PixelMap::neighbors`].

use std::collections::VecDeque;

use crate::{PixelMap, Polarity};

/// Connected-component labels of one threshold set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ThresholdLabels {
    /// Label per pixel; `None` for background.
    pub labels: Vec<Option<usize>>,
    /// Number of connected foreground regions.
    pub regions: usize,
}

/// Labels the threshold set of `map` at `level`.
pub(super) fn label_threshold_set(map: &PixelMap, polarity: Polarity, level: u8) -> ThresholdLabels {
    let values = map.values();
    let mut labels = vec![None; map.len()];
    let mut regions = 0;
    let mut queue = VecDeque::new();
    for seed in 0..map.len() {
        if labels[seed].is_some() || !polarity.includes(values[seed], level) {
            continue;
        }
        labels[seed] = Some(regions);
        queue.push_back(seed);
        while let Some(pixel) = queue.pop_front() {
            for neighbor in map.neighbors(pixel) {
                if labels[neighbor].is_none() && polarity.includes(values[neighbor], level) {
                    labels[neighbor] = Some(regions);
                    queue.push_back(neighbor);
                }
            }
        }
        regions += 1;
    }
    ThresholdLabels { labels, regions }
}

/// Returns `true` when both labelings mark the same pixels and induce the
/// same partition, regardless of the label values themselves.
pub(super) fn same_partition<A, B>(left: &[Option<A>], right: &[Option<B>]) -> bool
where
    A: Copy + Eq + std::hash::Hash,
    B: Copy + Eq + std::hash::Hash,
{
    use std::collections::HashMap;

    if left.len() != right.len() {
        return false;
    }
    let mut forward: HashMap<A, B> = HashMap::new();
    let mut backward: HashMap<B, A> = HashMap::new();
    left.iter().zip(right).all(|pair| match pair {
        (None, None) => true,
        (Some(a), Some(b)) => {
            *forward.entry(*a).or_insert(*b) == *b && *backward.entry(*b).or_insert(*a) == *a
        }
        _ => false,
    })
}
