//! Arena bookkeeping shared by all construction strategies.
//!
//! Strategies hand finished [`PendingComponent`]s to [`TreeAssembler::seal`],
//! which freezes them into the arena, links children to their new parent and
//! returns the new [`ComponentId`]. [`TreeAssembler::finish`] then derives the
//! root list, the per-level index and the pixel ownership table.

use crate::{
    bucket_sort::LEVEL_COUNT,
    component::{Component, ComponentId, PendingComponent},
    construct::ComponentTreeMethod,
    error::{ComponentTreeError, Result},
    pixel_map::PixelMap,
    polarity::Polarity,
};

use super::ComponentTree;

#[derive(Debug)]
pub(crate) struct TreeAssembler {
    polarity: Polarity,
    components: Vec<Component>,
}

impl TreeAssembler {
    pub(crate) fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            components: Vec::new(),
        }
    }

    pub(crate) fn get(&self, id: ComponentId) -> Result<&Component> {
        self.components
            .get(id.0)
            .ok_or(ComponentTreeError::InvariantViolation {
                invariant: "component id must refer to a sealed component",
                index: id.0,
            })
    }

    /// Freezes `pending` and attaches its children to it.
    pub(crate) fn seal(&mut self, pending: PendingComponent) -> Result<ComponentId> {
        let id = ComponentId(self.components.len());
        let (rank, mut local_pixels, children, size, height) = pending.into_parts();
        for &child in &children {
            let component =
                self.components
                    .get_mut(child.0)
                    .ok_or(ComponentTreeError::InvariantViolation {
                        invariant: "children must be sealed before their parent",
                        index: child.0,
                    })?;
            if component.parent.is_some() {
                return Err(ComponentTreeError::InvariantViolation {
                    invariant: "a component can be absorbed only once",
                    index: child.0,
                });
            }
            component.parent = Some(id);
        }
        local_pixels.sort_unstable();
        self.components.push(Component {
            id,
            level: self.polarity.level(rank),
            size,
            local_pixels,
            children,
            parent: None,
            height,
        });
        Ok(id)
    }

    pub(crate) fn finish(self, map: &PixelMap, method: ComponentTreeMethod) -> Result<ComponentTree> {
        let Self {
            polarity,
            components,
        } = self;

        let mut by_level = vec![Vec::new(); LEVEL_COUNT];
        let mut roots = Vec::new();
        let mut owner: Vec<Option<ComponentId>> = vec![None; map.len()];
        for component in &components {
            by_level[usize::from(component.level)].push(component.id);
            if component.parent.is_none() {
                roots.push(component.id);
            }
            for &pixel in &component.local_pixels {
                let slot = owner
                    .get_mut(pixel)
                    .ok_or(ComponentTreeError::InvariantViolation {
                        invariant: "local pixel must lie inside the grid",
                        index: pixel,
                    })?;
                if slot.replace(component.id).is_some() {
                    return Err(ComponentTreeError::InvariantViolation {
                        invariant: "pixel must belong to exactly one component",
                        index: pixel,
                    });
                }
            }
        }
        let owner = owner
            .into_iter()
            .enumerate()
            .map(|(pixel, slot)| {
                slot.ok_or(ComponentTreeError::InvariantViolation {
                    invariant: "every pixel must belong to a component",
                    index: pixel,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ComponentTree {
            width: map.width(),
            height: map.height(),
            connectivity: map.connectivity(),
            polarity,
            method,
            values: map.values().to_vec(),
            components,
            roots,
            by_level,
            owner,
        })
    }
}
