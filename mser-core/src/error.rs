//! Error types for the component-tree engine.
//!
//! Every failure the engine reports intentionally is one of the variants of
//! [`ComponentTreeError`]. Each variant maps to a stable
//! [`ComponentTreeErrorCode`] and to one of three coarse
//! [`ErrorCategory`] buckets so callers can separate malformed input from
//! construction bugs without matching on individual variants.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr, $category:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the coarse category this code belongs to.
            pub const fn category(self) -> ErrorCategory {
                match self {
                    $(Self::$CodeVariant => ErrorCategory::$category,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Retrieve the coarse [`ErrorCategory`] for this error.
            pub const fn category(&self) -> ErrorCategory {
                self.code().category()
            }
        }
    };
}

/// Coarse classification of [`ComponentTreeError`] values.
///
/// Errors in [`ErrorCategory::InvalidArgument`] and
/// [`ErrorCategory::EmptyInput`] are caused by the caller's input and fail
/// identically on every retry. [`ErrorCategory::InternalInvariantViolation`]
/// indicates a construction bug.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCategory {
    /// Malformed pixel-map construction input.
    InvalidArgument,
    /// A zero-pixel grid was passed to tree construction.
    EmptyInput,
    /// An integrity check on a built tree failed.
    InternalInvariantViolation,
}

/// Error type produced when building or validating a component tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ComponentTreeError {
    /// Width or height of the grid was zero.
    #[error("grid dimensions must be positive (got {width}x{height})")]
    InvalidDimensions {
        /// Requested grid width.
        width: usize,
        /// Requested grid height.
        height: usize,
    },
    /// `width * height` does not fit into `usize`.
    #[error("grid dimensions {width}x{height} overflow the addressable pixel count")]
    DimensionsOverflow {
        /// Requested grid width.
        width: usize,
        /// Requested grid height.
        height: usize,
    },
    /// The number of supplied intensities did not match `width * height`.
    #[error("grid holds {actual} intensities but {expected} were expected")]
    GridSizeMismatch {
        /// Pixel count implied by the dimensions.
        expected: usize,
        /// Number of intensities actually supplied.
        actual: usize,
    },
    /// The neighborhood type was neither 4 nor 8.
    #[error("unsupported neighborhood type {got}; expected 4 or 8")]
    UnsupportedNeighborhood {
        /// The rejected neighborhood type.
        got: u8,
    },
    /// Tree construction was asked to process a grid without pixels.
    #[error("cannot build a component tree from an empty grid")]
    EmptyInput,
    /// A structural check on the component tree failed.
    #[error("component tree invariant violated at index {index}: {invariant}")]
    InvariantViolation {
        /// Description of the violated invariant.
        invariant: &'static str,
        /// Component or pixel index implicated by the failure.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ComponentTreeError`] variants.
    enum ComponentTreeErrorCode for ComponentTreeError {
        /// Width or height of the grid was zero.
        InvalidDimensions => InvalidDimensions { .. } => "MSER_INVALID_DIMENSIONS", InvalidArgument,
        /// `width * height` does not fit into `usize`.
        DimensionsOverflow => DimensionsOverflow { .. } => "MSER_DIMENSIONS_OVERFLOW", InvalidArgument,
        /// The number of supplied intensities did not match the dimensions.
        GridSizeMismatch => GridSizeMismatch { .. } => "MSER_GRID_SIZE_MISMATCH", InvalidArgument,
        /// The neighborhood type was neither 4 nor 8.
        UnsupportedNeighborhood => UnsupportedNeighborhood { .. } => "MSER_UNSUPPORTED_NEIGHBORHOOD", InvalidArgument,
        /// Tree construction was asked to process a grid without pixels.
        EmptyInput => EmptyInput => "MSER_EMPTY_INPUT", EmptyInput,
        /// A structural check on the component tree failed.
        InvariantViolation => InvariantViolation { .. } => "MSER_INVARIANT_VIOLATION", InternalInvariantViolation,
    }
}

/// Convenient alias for results returned by the component-tree API.
pub type Result<T> = core::result::Result<T, ComponentTreeError>;
