//! Union-find sweep over intensity buckets.
//!
//! Pixels are activated one rank at a time. Every activated pixel starts a
//! singleton pending component; unions with already-active neighbors either
//! fold two pending components of the current rank together or let a pending
//! component adopt a sealed one from an earlier rank. Once the bucket is
//! exhausted every surviving pending component is sealed and its handle is
//! stored on the union-find root for the following ranks.

use crate::{
    bucket_sort::sort_by_intensity,
    component::{ComponentId, PendingComponent},
    error::{ComponentTreeError, Result},
    pixel_map::PixelMap,
    polarity::Polarity,
    tree::TreeAssembler,
    union_find::{DisjointSet, Union},
};

/// Handle stored on a union-find root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// Index into the pending components of the rank being processed.
    Pending(usize),
    /// A component sealed at an earlier rank.
    Sealed(ComponentId),
}

pub(super) fn build(map: &PixelMap, polarity: Polarity) -> Result<TreeAssembler> {
    let order = sort_by_intensity(map, polarity);
    let mut sets: DisjointSet<Slot> = DisjointSet::new(map.len());
    let mut assembler = TreeAssembler::new(polarity);

    for (rank, bucket) in order.buckets() {
        let mut pending: Vec<Option<PendingComponent>> = Vec::with_capacity(bucket.len());
        for &pixel in bucket {
            sets.make_set(pixel, Slot::Pending(pending.len()));
            pending.push(Some(PendingComponent::singleton(rank, pixel)));
        }

        for &pixel in bucket {
            for neighbor in map.neighbors(pixel) {
                if !sets.is_active(neighbor) {
                    continue;
                }
                if let Union::Merged { root, left, right } = sets.union(pixel, neighbor) {
                    let combined = combine(left, right, &mut pending, &assembler, pixel)?;
                    sets.set_component(root, combined);
                }
            }
        }

        seal_bucket(pending, &mut sets, &mut assembler)?;
    }

    Ok(assembler)
}

fn combine(
    left: Option<Slot>,
    right: Option<Slot>,
    pending: &mut [Option<PendingComponent>],
    assembler: &TreeAssembler,
    pixel: usize,
) -> Result<Slot> {
    match (left, right) {
        (Some(Slot::Pending(a)), Some(Slot::Pending(b))) => {
            let (keep, absorbed) = if a <= b { (a, b) } else { (b, a) };
            let other = take_pending(pending, absorbed)?;
            pending_mut(pending, keep)?.merge(other);
            Ok(Slot::Pending(keep))
        }
        (Some(Slot::Pending(open)), Some(Slot::Sealed(child)))
        | (Some(Slot::Sealed(child)), Some(Slot::Pending(open))) => {
            pending_mut(pending, open)?.adopt(assembler.get(child)?);
            Ok(Slot::Pending(open))
        }
        _ => Err(ComponentTreeError::InvariantViolation {
            invariant: "an activated pixel must belong to a pending component",
            index: pixel,
        }),
    }
}

fn pending_mut(
    pending: &mut [Option<PendingComponent>],
    slot: usize,
) -> Result<&mut PendingComponent> {
    pending
        .get_mut(slot)
        .and_then(Option::as_mut)
        .ok_or(ComponentTreeError::InvariantViolation {
            invariant: "pending slot must hold a live component",
            index: slot,
        })
}

fn take_pending(
    pending: &mut [Option<PendingComponent>],
    slot: usize,
) -> Result<PendingComponent> {
    pending
        .get_mut(slot)
        .and_then(Option::take)
        .ok_or(ComponentTreeError::InvariantViolation {
            invariant: "pending slot must hold a live component",
            index: slot,
        })
}

/// Seals the pending components that survived the rank, in activation order.
fn seal_bucket(
    pending: Vec<Option<PendingComponent>>,
    sets: &mut DisjointSet<Slot>,
    assembler: &mut TreeAssembler,
) -> Result<()> {
    for (slot, component) in pending.into_iter().enumerate() {
        let Some(component) = component else {
            continue;
        };
        let anchor = component
            .anchor()
            .ok_or(ComponentTreeError::InvariantViolation {
                invariant: "pending component must hold a local pixel",
                index: slot,
            })?;
        let id = assembler.seal(component)?;
        let root = sets.find(anchor);
        sets.set_component(root, Slot::Sealed(id));
    }
    Ok(())
}
