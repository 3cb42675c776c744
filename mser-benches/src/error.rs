//! Benchmark setup error type.
//!
//! Lets setup code propagate generator and construction failures with `?`
//! instead of panicking outside the measured closures.

use mser_core::ComponentTreeError;

use crate::synthetic::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic image generation failed.
    #[error("synthetic image generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building a pixel map or component tree failed.
    #[error("component tree setup failed: {0}")]
    ComponentTree(#[from] ComponentTreeError),
}
