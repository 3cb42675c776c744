//! Grid generators for component-tree property tests.
//!
//! Grids are derived from a seeded [`SmallRng`] so rstest cases can replay
//! a distribution deterministically while proptest samples the seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Connectivity;

use super::types::{GridFixture, LevelDistribution};

/// Largest generated width or height.
const MAX_SIDE: usize = 12;

/// Generates grid fixtures covering every level distribution and both
/// neighborhoods.
pub(super) fn grid_fixture_strategy() -> impl Strategy<Value = GridFixture> {
    (any::<LevelDistribution>(), any::<bool>(), any::<u64>()).prop_map(
        |(distribution, diagonal, seed)| {
            let connectivity = if diagonal {
                Connectivity::Eight
            } else {
                Connectivity::Four
            };
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(distribution, connectivity, &mut rng)
        },
    )
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(
    distribution: LevelDistribution,
    connectivity: Connectivity,
    rng: &mut SmallRng,
) -> GridFixture {
    let width = rng.gen_range(1..=MAX_SIDE);
    let height = rng.gen_range(1..=MAX_SIDE);
    let len = width * height;
    let values = match distribution {
        LevelDistribution::Binary => {
            let palette = [rng.r#gen::<u8>(), rng.r#gen::<u8>()];
            sample_palette(&palette, len, rng)
        }
        LevelDistribution::FewLevels => {
            let count = rng.gen_range(3..=5);
            let palette: Vec<u8> = (0..count).map(|_| rng.r#gen()).collect();
            sample_palette(&palette, len, rng)
        }
        LevelDistribution::Plateaus => paint_plateaus(width, height, rng),
        LevelDistribution::Noise => (0..len).map(|_| rng.r#gen()).collect(),
        LevelDistribution::Extremes => sample_palette(&[0, u8::MAX], len, rng),
    };
    GridFixture {
        width,
        height,
        values,
        connectivity,
        distribution,
    }
}

fn sample_palette(palette: &[u8], len: usize, rng: &mut SmallRng) -> Vec<u8> {
    (0..len)
        .map(|_| palette[rng.gen_range(0..palette.len())])
        .collect()
}

/// Paints up to four random rectangles onto a flat background.
fn paint_plateaus(width: usize, height: usize, rng: &mut SmallRng) -> Vec<u8> {
    let mut values = vec![rng.r#gen::<u8>(); width * height];
    for _ in 0..rng.gen_range(1..=4) {
        let x0 = rng.gen_range(0..width);
        let y0 = rng.gen_range(0..height);
        let x1 = rng.gen_range(x0..width);
        let y1 = rng.gen_range(y0..height);
        let level = rng.r#gen::<u8>();
        for y in y0..=y1 {
            for x in x0..=x1 {
                values[y * width + x] = level;
            }
        }
    }
    values
}
