//! Helpers shared by the `mser-core` integration tests.
#![allow(dead_code, reason = "each test crate uses a subset of the helpers")]

use mser_core::{
    ComponentTree, ComponentTreeBuilder, ComponentTreeMethod, Connectivity, PixelMap, Polarity,
};

/// Builds a grid from row slices.
///
/// # Panics
/// Panics when the rows are ragged or empty.
#[must_use]
pub fn grid<R: AsRef<[u8]>>(rows: &[R], connectivity: Connectivity) -> PixelMap {
    PixelMap::from_rows(rows, connectivity).expect("test grids are rectangular")
}

/// Builds a grid from a per-coordinate intensity function.
#[must_use]
pub fn grid_from_fn(
    width: usize,
    height: usize,
    connectivity: Connectivity,
    value: impl Fn(usize, usize) -> u8,
) -> PixelMap {
    let values = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| value(x, y))
        .collect();
    PixelMap::new(width, height, values, connectivity).expect("test grids are rectangular")
}

/// Builds a validated tree with the given strategy and polarity.
///
/// # Panics
/// Panics when construction or validation fails.
#[must_use]
pub fn build(map: &PixelMap, method: ComponentTreeMethod, polarity: Polarity) -> ComponentTree {
    ComponentTreeBuilder::new()
        .with_method(method)
        .with_polarity(polarity)
        .with_validation(true)
        .build(map)
        .unwrap_or_else(|err| panic!("{method:?}/{polarity:?} build failed: {err}"))
}

/// Sorted `(level, size, local pixel count)` triples of every component.
#[must_use]
pub fn summary(tree: &ComponentTree) -> Vec<(u8, usize, usize)> {
    let mut triples: Vec<_> = tree
        .components()
        .map(|c| (c.level(), c.size(), c.local_pixels().len()))
        .collect();
    triples.sort_unstable();
    triples
}
