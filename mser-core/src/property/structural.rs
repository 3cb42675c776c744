//! Structural invariants of built trees.
//!
//! Verifies, per strategy and polarity:
//!
//! - **Validation**: [`ComponentTree::validate`] accepts the tree.
//! - **Size additivity**: sizes equal local pixels plus child sizes.
//! - **Monotonicity**: threshold sets grow along the processing order.
//! - **Determinism**: rebuilding yields an identical tree.
//! - **Idempotence**: reconstruction neither varies nor mutates the tree.
//! - **Agreement**: all strategies yield the same canonical tree.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ComponentTree, ComponentTreeMethod, Polarity};

use super::equivalence::{POLARITIES, build_tree};
use super::types::GridFixture;

/// Numbering-independent description of one component: level, sorted
/// local pixels, size, subtree height and the first local pixel of the
/// parent.
pub(super) type CanonicalComponent = (u8, Vec<usize>, usize, usize, Option<usize>);

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GridFixture) -> TestCaseResult {
    let map = fixture.pixel_map();
    for polarity in POLARITIES {
        let mut reference: Option<Vec<CanonicalComponent>> = None;
        for method in ComponentTreeMethod::ALL {
            let tree = build_tree(fixture, &map, method, polarity)?;
            let context = format!("{method:?}/{polarity:?} ({})", fixture.describe());

            validate_size_additivity(&tree, &context)?;
            validate_monotonicity(&tree, polarity, &context)?;
            validate_single_root(&tree, map.len(), &context)?;

            let rebuilt = build_tree(fixture, &map, method, polarity)?;
            if rebuilt != tree {
                return Err(TestCaseError::fail(format!("rebuild differs: {context}")));
            }
            validate_idempotence(&tree, &context)?;

            let canonical = canonical_form(&tree);
            match &reference {
                None => reference = Some(canonical),
                Some(expected) if *expected != canonical => {
                    return Err(TestCaseError::fail(format!(
                        "canonical tree differs from {:?}: {context}",
                        ComponentTreeMethod::ALL[0]
                    )));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

/// Computes the sorted canonical form of `tree`.
pub(super) fn canonical_form(tree: &ComponentTree) -> Vec<CanonicalComponent> {
    let anchor = |component: &crate::Component| component.local_pixels().first().copied();
    let mut canonical: Vec<CanonicalComponent> = tree
        .components()
        .map(|component| {
            (
                component.level(),
                component.local_pixels().to_vec(),
                component.size(),
                component.height(),
                component.parent().map(|parent| &tree[parent]).and_then(anchor),
            )
        })
        .collect();
    canonical.sort_unstable();
    canonical
}

fn validate_size_additivity(tree: &ComponentTree, context: &str) -> TestCaseResult {
    for component in tree {
        let children: usize = component.children().iter().map(|&c| tree[c].size()).sum();
        if component.size() != children + component.local_pixels().len() {
            return Err(TestCaseError::fail(format!(
                "size of {} is not additive: {context}",
                component.id()
            )));
        }
        if tree.all_pixels(component.id()).len() != component.size() {
            return Err(TestCaseError::fail(format!(
                "all_pixels of {} disagrees with its size: {context}",
                component.id()
            )));
        }
    }
    Ok(())
}

fn validate_monotonicity(tree: &ComponentTree, polarity: Polarity, context: &str) -> TestCaseResult {
    let stack = tree.threshold_stack();
    for rank in 0..u8::MAX {
        let lower = &stack[usize::from(polarity.level(rank))];
        let upper = &stack[usize::from(polarity.level(rank + 1))];
        if !lower.is_subset_of(upper) {
            return Err(TestCaseError::fail(format!(
                "threshold set at rank {rank} is not contained in the next: {context}"
            )));
        }
    }
    Ok(())
}

fn validate_single_root(tree: &ComponentTree, pixels: usize, context: &str) -> TestCaseResult {
    match tree.root_ids() {
        [root] if tree[*root].size() == pixels => Ok(()),
        roots => Err(TestCaseError::fail(format!(
            "expected one root covering {pixels} pixels, found {} roots: {context}",
            roots.len()
        ))),
    }
}

fn validate_idempotence(tree: &ComponentTree, context: &str) -> TestCaseResult {
    let snapshot = tree.clone();
    for level in [0, 17, 128, u8::MAX] {
        if tree.reconstruct_at_level(level) != tree.reconstruct_at_level(level) {
            return Err(TestCaseError::fail(format!(
                "reconstruction at {level} is not repeatable: {context}"
            )));
        }
    }
    if *tree != snapshot {
        return Err(TestCaseError::fail(format!(
            "reconstruction mutated the tree: {context}"
        )));
    }
    Ok(())
}
