//! Synthetic gray-level images for component-tree benchmarks.
//!
//! Each pattern stresses construction differently: uniform noise yields
//! many tiny components over all 256 levels, blobs yield deep nested
//! regions over a noisy floor, and the sawtooth ramp yields long chains of
//! single-level components.

use std::fmt;

use mser_core::{ComponentTreeError, Connectivity, PixelMap};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Number of blobs painted by [`ImagePattern::Blobs`].
const BLOB_COUNT: usize = 12;
/// Largest blob radius, measured in city-block distance.
const MAX_BLOB_RADIUS: usize = 24;
/// Intensity gained per pixel towards a blob center.
const BLOB_STEP: usize = 8;
/// Upper bound of the noise floor under the blobs.
const BLOB_FLOOR: u8 = 32;

/// Intensity layout of a synthetic image.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ImagePattern {
    /// Independent uniform intensities.
    Noise,
    /// Overlapping bright cones on a dark noisy floor.
    Blobs,
    /// Diagonal ramp wrapping every 256 levels, with light noise.
    Ramp,
}

impl ImagePattern {
    /// Every available pattern.
    pub const ALL: [Self; 3] = [Self::Noise, Self::Blobs, Self::Ramp];

    /// Returns a short lowercase name for benchmark ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noise => "noise",
            Self::Blobs => "blobs",
            Self::Ramp => "ramp",
        }
    }
}

impl fmt::Display for ImagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while generating synthetic images.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SyntheticError {
    /// Width or height was zero.
    #[error("image dimensions must be positive (got {width}x{height})")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// `width * height` does not fit into `usize`.
    #[error("image dimensions {width}x{height} overflow the pixel count")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

/// Configuration for [`SyntheticImage::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticImageConfig {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Intensity layout.
    pub pattern: ImagePattern,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// A generated row-major gray-level image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntheticImage {
    width: usize,
    height: usize,
    values: Vec<u8>,
}

impl SyntheticImage {
    /// Generates an image deterministically from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the dimensions are zero or overflow.
    ///
    /// # Examples
    /// ```
    /// use mser_benches::synthetic::{ImagePattern, SyntheticImage, SyntheticImageConfig};
    ///
    /// let image = SyntheticImage::generate(&SyntheticImageConfig {
    ///     width: 8,
    ///     height: 4,
    ///     pattern: ImagePattern::Ramp,
    ///     seed: 1,
    /// })?;
    /// assert_eq!(image.values().len(), 32);
    /// # Ok::<(), mser_benches::synthetic::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticImageConfig) -> Result<Self, SyntheticError> {
        let SyntheticImageConfig {
            width,
            height,
            pattern,
            seed,
        } = *config;
        if width == 0 || height == 0 {
            return Err(SyntheticError::ZeroDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(SyntheticError::TooLarge { width, height })?;

        let mut rng = SmallRng::seed_from_u64(seed);
        let values = match pattern {
            ImagePattern::Noise => (0..len).map(|_| rng.r#gen::<u8>()).collect(),
            ImagePattern::Blobs => blobs(width, height, &mut rng),
            ImagePattern::Ramp => ramp(width, height, &mut rng),
        };
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Returns the image width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major intensities.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Wraps a copy of the image in a [`PixelMap`].
    ///
    /// # Errors
    /// Propagates [`PixelMap::new`] failures.
    pub fn pixel_map(&self, connectivity: Connectivity) -> Result<PixelMap, ComponentTreeError> {
        PixelMap::new(self.width, self.height, self.values.clone(), connectivity)
    }
}

fn coordinates(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}

fn blobs(width: usize, height: usize, rng: &mut SmallRng) -> Vec<u8> {
    let centers: Vec<(usize, usize, usize)> = (0..BLOB_COUNT)
        .map(|_| {
            (
                rng.gen_range(0..width),
                rng.gen_range(0..height),
                rng.gen_range(1..=MAX_BLOB_RADIUS),
            )
        })
        .collect();
    coordinates(width, height)
        .map(|(x, y)| {
            let floor = rng.gen_range(0..=BLOB_FLOOR);
            let peak = centers
                .iter()
                .map(|&(cx, cy, radius)| {
                    let distance = x.abs_diff(cx).saturating_add(y.abs_diff(cy));
                    radius.saturating_sub(distance).saturating_mul(BLOB_STEP)
                })
                .max()
                .unwrap_or(0);
            u8::try_from(peak).unwrap_or(u8::MAX).max(floor)
        })
        .collect()
}

fn ramp(width: usize, height: usize, rng: &mut SmallRng) -> Vec<u8> {
    coordinates(width, height)
        .map(|(x, y)| {
            let base = x.saturating_add(y) & usize::from(u8::MAX);
            u8::try_from(base)
                .unwrap_or(u8::MAX)
                .saturating_add(rng.gen_range(0..4))
        })
        .collect()
}
