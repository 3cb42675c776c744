//! Shared test utilities used across the mser crates.

pub mod ci;
pub mod tracing;
