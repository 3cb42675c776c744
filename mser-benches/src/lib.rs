//! Benchmark support crate for mser.
//!
//! Provides synthetic gray-level images and parameter types used by the
//! Criterion benchmarks that compare component-tree construction strategies.

pub mod error;
pub mod params;
pub mod synthetic;
