//! Threshold equivalence with the naive oracle.
//!
//! For every strategy, both polarities and all 256 levels, the tree must
//! reproduce the foreground of the threshold set, its connected-component
//! partition, and its region count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ComponentTree, ComponentTreeBuilder, ComponentTreeMethod, PixelMap, Polarity};

use super::oracle::{label_threshold_set, same_partition};
use super::types::GridFixture;

pub(super) const POLARITIES: [Polarity; 2] = [Polarity::MinTree, Polarity::MaxTree];

/// Builds a validated tree, mapping failures into a test-case error.
pub(super) fn build_tree(
    fixture: &GridFixture,
    map: &PixelMap,
    method: ComponentTreeMethod,
    polarity: Polarity,
) -> Result<ComponentTree, TestCaseError> {
    ComponentTreeBuilder::new()
        .with_method(method)
        .with_polarity(polarity)
        .with_validation(true)
        .build(map)
        .map_err(|err| {
            TestCaseError::fail(format!(
                "{method:?}/{polarity:?} build failed: {err} ({})",
                fixture.describe()
            ))
        })
}

/// Runs the threshold equivalence property for the given fixture.
pub(super) fn run_threshold_equivalence_property(fixture: &GridFixture) -> TestCaseResult {
    let map = fixture.pixel_map();
    for polarity in POLARITIES {
        let trees = ComponentTreeMethod::ALL
            .into_iter()
            .map(|method| build_tree(fixture, &map, method, polarity))
            .collect::<Result<Vec<_>, _>>()?;

        for level in 0..=u8::MAX {
            let oracle = label_threshold_set(&map, polarity, level);
            for tree in &trees {
                check_level(fixture, tree, level, &oracle.labels, oracle.regions)?;
            }
        }
    }
    Ok(())
}

fn check_level(
    fixture: &GridFixture,
    tree: &ComponentTree,
    level: u8,
    expected: &[Option<usize>],
    regions: usize,
) -> TestCaseResult {
    let context = || {
        format!(
            "{:?}/{:?} at level {level} ({})",
            tree.method(),
            tree.polarity(),
            fixture.describe()
        )
    };

    let mask = tree.reconstruct_at_level(level);
    let foreground: Vec<bool> = expected.iter().map(Option::is_some).collect();
    if mask.as_slice() != foreground.as_slice() {
        return Err(TestCaseError::fail(format!(
            "reconstruction differs from thresholding: {}",
            context()
        )));
    }

    let labels = tree.label_at_level(level);
    if !same_partition(&labels, expected) {
        return Err(TestCaseError::fail(format!(
            "labels differ from flood-fill labeling: {}",
            context()
        )));
    }

    let alive = tree.alive_at_level(level).len();
    if alive != regions {
        return Err(TestCaseError::fail(format!(
            "{alive} alive components but {regions} regions: {}",
            context()
        )));
    }
    Ok(())
}
