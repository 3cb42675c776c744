//! Component trees of gray-level images.
//!
//! The crate turns a [`PixelMap`] into a [`ComponentTree`]: the nested
//! connected components of every threshold set of the image, the structure
//! MSER detection scores for stability. Three interchangeable strategies
//! build the same tree; see [`ComponentTreeMethod`].
//!
//! # Examples
//! ```
//! use mser_core::{ComponentTreeBuilder, Connectivity, PixelMap, Polarity};
//!
//! let map = PixelMap::from_rows(&[[0_u8, 0, 0], [0, 255, 0], [0, 0, 0]], Connectivity::Four)?;
//! let tree = ComponentTreeBuilder::new()
//!     .with_polarity(Polarity::MaxTree)
//!     .build(&map)?;
//! let root = tree.root().expect("one root");
//! assert_eq!((root.level(), root.size(), root.local_pixels().len()), (0, 9, 8));
//! assert_eq!(tree.reconstruct_at_level(255).count(), 1);
//! # Ok::<(), mser_core::ComponentTreeError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bucket_sort;
mod builder;
mod component;
mod construct;
mod error;
mod pixel_map;
mod polarity;
mod tree;
mod union_find;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    bucket_sort::{IntensityOrder, LEVEL_COUNT, sort_by_intensity},
    builder::ComponentTreeBuilder,
    component::{Component, ComponentId},
    construct::ComponentTreeMethod,
    error::{ComponentTreeError, ComponentTreeErrorCode, ErrorCategory, Result},
    pixel_map::{Connectivity, Neighbors, Pixel, PixelMap},
    polarity::Polarity,
    tree::{Ancestors, ComponentTree, ThresholdMask},
};
