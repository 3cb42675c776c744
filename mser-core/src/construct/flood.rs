//! Level-by-level flooding.
//!
//! For every occupied rank `r` the threshold set `{p : rank(p) <= r}` is
//! flooded again from each pixel of rank `r`. Each flooded region becomes a
//! component whose local pixels are the region's rank-`r` pixels and whose
//! children are the components that held the region's older pixels.

use std::collections::VecDeque;

use crate::{
    bucket_sort::sort_by_intensity,
    component::{ComponentId, PendingComponent},
    error::{ComponentTreeError, Result},
    pixel_map::PixelMap,
    polarity::Polarity,
    tree::TreeAssembler,
};

pub(super) fn build(map: &PixelMap, polarity: Polarity) -> Result<TreeAssembler> {
    let values = map.values();
    let order = sort_by_intensity(map, polarity);
    let mut assembler = TreeAssembler::new(polarity);
    // Latest component covering each pixel.
    let mut top: Vec<Option<ComponentId>> = vec![None; map.len()];
    // Rank + 1 of the last flood that reached each pixel; 0 means never.
    let mut stamp: Vec<u16> = vec![0; map.len()];
    let mut queue = VecDeque::new();
    let mut region = Vec::new();

    for (rank, bucket) in order.buckets() {
        let epoch = u16::from(rank) + 1;
        for &seed in bucket {
            if stamp[seed] == epoch {
                continue;
            }
            stamp[seed] = epoch;
            queue.push_back(seed);
            region.clear();
            while let Some(pixel) = queue.pop_front() {
                region.push(pixel);
                for neighbor in map.neighbors(pixel) {
                    if stamp[neighbor] != epoch && polarity.rank(values[neighbor]) <= rank {
                        stamp[neighbor] = epoch;
                        queue.push_back(neighbor);
                    }
                }
            }

            let id = seal_region(&region, rank, values, polarity, &top, &mut assembler)?;
            for &pixel in &region {
                top[pixel] = Some(id);
            }
        }
    }

    Ok(assembler)
}

fn seal_region(
    region: &[usize],
    rank: u8,
    values: &[u8],
    polarity: Polarity,
    top: &[Option<ComponentId>],
    assembler: &mut TreeAssembler,
) -> Result<ComponentId> {
    let mut component = PendingComponent::new(rank);
    let mut children = Vec::new();
    for &pixel in region {
        if polarity.rank(values[pixel]) == rank {
            component.add_pixel(pixel);
        } else {
            let child = top[pixel].ok_or(ComponentTreeError::InvariantViolation {
                invariant: "older pixels must already be covered by a component",
                index: pixel,
            })?;
            children.push(child);
        }
    }
    children.sort_unstable();
    children.dedup();
    for child in children {
        component.adopt(assembler.get(child)?);
    }
    assembler.seal(component)
}
