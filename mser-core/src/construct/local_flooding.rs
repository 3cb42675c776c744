//! Local flooding from a single seed.
//!
//! The flood keeps a heap of boundary pixels keyed by rank and a stack of
//! open components whose ranks strictly increase from top to bottom. It
//! always descends into a lower-ranked neighbor as soon as one is found,
//! pushing a fresh component for it. When the next boundary pixel has a
//! larger rank than the current one, open components below that rank are
//! sealed and merged into the next component down the stack.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    component::PendingComponent,
    error::{ComponentTreeError, Result},
    pixel_map::PixelMap,
    polarity::Polarity,
    tree::TreeAssembler,
};

/// Seed pixel of the flood; any pixel would do.
const SEED: usize = 0;

pub(super) fn build(map: &PixelMap, polarity: Polarity) -> Result<TreeAssembler> {
    let values = map.values();
    let rank = |pixel: usize| polarity.rank(values[pixel]);
    let degree = map.connectivity().degree();

    let mut visited = vec![false; map.len()];
    // Next neighbor direction to inspect for each pixel.
    let mut cursor = vec![0_usize; map.len()];
    let mut boundary: BinaryHeap<Reverse<(u8, usize)>> = BinaryHeap::new();
    let mut stack = vec![PendingComponent::new(rank(SEED))];
    let mut assembler = TreeAssembler::new(polarity);

    visited[SEED] = true;
    let mut current = Some(SEED);
    while let Some(mut pixel) = current {
        while cursor[pixel] < degree {
            let direction = cursor[pixel];
            cursor[pixel] += 1;
            let Some(neighbor) = map.neighbor(pixel, direction) else {
                continue;
            };
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            if rank(neighbor) >= rank(pixel) {
                boundary.push(Reverse((rank(neighbor), neighbor)));
            } else {
                boundary.push(Reverse((rank(pixel), pixel)));
                stack.push(PendingComponent::new(rank(neighbor)));
                pixel = neighbor;
            }
        }

        stack
            .last_mut()
            .ok_or(ComponentTreeError::InvariantViolation {
                invariant: "component stack must not run empty during the flood",
                index: pixel,
            })?
            .add_pixel(pixel);

        current = boundary.pop().map(|Reverse((_, next))| next);
        if let Some(next) = current
            && rank(next) > rank(pixel)
        {
            raise(rank(next), &mut stack, &mut assembler)?;
        }
    }

    let root = stack.pop().ok_or(ComponentTreeError::InvariantViolation {
        invariant: "component stack must hold the root after the flood",
        index: 0,
    })?;
    if !stack.is_empty() {
        return Err(ComponentTreeError::InvariantViolation {
            invariant: "component stack must hold exactly one component after the flood",
            index: stack.len() + 1,
        });
    }
    assembler.seal(root)?;
    Ok(assembler)
}

/// Seals every open component ranked below `target` and merges it into the
/// component that continues it at `target` or above.
fn raise(
    target: u8,
    stack: &mut Vec<PendingComponent>,
    assembler: &mut TreeAssembler,
) -> Result<()> {
    while let Some(top) = stack.pop_if(|top| top.rank() < target) {
        let id = assembler.seal(top)?;
        if stack.last().is_none_or(|next| target < next.rank()) {
            stack.push(PendingComponent::new(target));
        }
        let parent = stack
            .last_mut()
            .ok_or(ComponentTreeError::InvariantViolation {
                invariant: "raised component must have a successor",
                index: id.index(),
            })?;
        parent.adopt(assembler.get(id)?);
    }
    Ok(())
}
