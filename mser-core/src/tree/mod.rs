//! The immutable component tree and its query API.
//!
//! A [`ComponentTree`] is the arena of every sealed [`Component`] of an image
//! together with three indices built once at the end of construction:
//!
//! - the root list (components without a parent),
//! - the per-level lists of components sealed at each intensity,
//! - the pixel ownership table mapping each pixel to the component that holds
//!   it as a local pixel.
//!
//! The ownership table makes threshold reconstruction a single pass over the
//! pixels: a pixel is foreground at level `L` exactly when its owning
//! component's level is included at `L`. Connected-component labels at `L`
//! follow from the ownership table by climbing to the highest ancestor that
//! is still included at `L`.

mod assembler;
mod mask;
mod validate;

use std::{fmt, iter::FusedIterator, ops::Index};

use crate::{
    builder::ComponentTreeBuilder,
    component::{Component, ComponentId},
    construct::ComponentTreeMethod,
    error::Result,
    pixel_map::{Connectivity, PixelMap},
    polarity::Polarity,
};

pub(crate) use self::assembler::TreeAssembler;
pub use self::mask::ThresholdMask;

/// Nested connected components of a gray-level image across all levels.
///
/// Built once by one of the [`ComponentTreeMethod`] strategies and read-only
/// afterwards, so a tree can be shared freely between threads.
///
/// # Examples
/// ```
/// use mser_core::{ComponentTree, Connectivity, PixelMap};
///
/// let map = PixelMap::new(5, 1, vec![3, 1, 4, 1, 5], Connectivity::Four)?;
/// let tree = ComponentTree::new(&map)?;
/// assert_eq!(tree.len(), 5);
/// let root = tree.root().expect("a grid has one root");
/// assert_eq!((root.level(), root.size()), (5, 5));
/// # Ok::<(), mser_core::ComponentTreeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTree {
    width: usize,
    height: usize,
    connectivity: Connectivity,
    polarity: Polarity,
    method: ComponentTreeMethod,
    values: Vec<u8>,
    components: Vec<Component>,
    roots: Vec<ComponentId>,
    by_level: Vec<Vec<ComponentId>>,
    owner: Vec<ComponentId>,
}

impl ComponentTree {
    /// Builds a min-tree of `map` with the default linear-time strategy.
    ///
    /// # Errors
    /// Propagates construction failures; see [`ComponentTreeBuilder::build`].
    pub fn new(map: &PixelMap) -> Result<Self> {
        ComponentTreeBuilder::new().build(map)
    }

    /// Builds a min-tree of `map` with the given strategy.
    ///
    /// # Errors
    /// Propagates construction failures; see [`ComponentTreeBuilder::build`].
    pub fn with_method(map: &PixelMap, method: ComponentTreeMethod) -> Result<Self> {
        ComponentTreeBuilder::new().with_method(method).build(map)
    }

    /// Returns the width of the source grid.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the source grid.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the neighborhood type the tree was built with.
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Returns the processing direction the tree was built with.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the strategy that produced the tree.
    #[must_use]
    pub fn method(&self) -> ComponentTreeMethod {
        self.method
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` when the tree holds no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over every component in sealing order.
    pub fn components(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Returns the component with the given id.
    #[must_use]
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0)
    }

    /// Returns the ids of all components without a parent.
    #[must_use]
    pub fn root_ids(&self) -> &[ComponentId] {
        &self.roots
    }

    /// Iterates over all components without a parent.
    pub fn roots(&self) -> impl Iterator<Item = &Component> + '_ {
        self.roots.iter().map(|&id| &self[id])
    }

    /// Returns the first root. A rectangular grid is connected, so this is
    /// the only root.
    #[must_use]
    pub fn root(&self) -> Option<&Component> {
        self.roots.first().and_then(|&id| self.component(id))
    }

    /// Iterates over all components without children.
    pub fn leaves(&self) -> impl Iterator<Item = &Component> + '_ {
        self.components.iter().filter(|component| component.is_leaf())
    }

    /// Iterates over the components sealed at exactly `level`.
    pub fn components_at_level(&self, level: u8) -> impl Iterator<Item = &Component> + '_ {
        self.by_level
            .get(usize::from(level))
            .into_iter()
            .flatten()
            .map(|&id| &self[id])
    }

    /// Returns the component holding `pixel` as a local pixel.
    #[must_use]
    pub fn component_of(&self, pixel: usize) -> Option<&Component> {
        self.owner.get(pixel).and_then(|&id| self.component(id))
    }

    /// Iterates from `id` up to its root, starting with `id` itself.
    #[must_use]
    pub fn ancestors(&self, id: ComponentId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.component(id).map(Component::id),
        }
    }

    /// Collects the pixels of `id` and of all its descendants, in ascending
    /// identity order.
    #[must_use]
    pub fn all_pixels(&self, id: ComponentId) -> Vec<usize> {
        let Some(component) = self.component(id) else {
            return Vec::new();
        };
        let mut pixels = Vec::with_capacity(component.size);
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let current = &self[next];
            pixels.extend_from_slice(&current.local_pixels);
            pending.extend_from_slice(&current.children);
        }
        pixels.sort_unstable();
        pixels
    }

    /// Returns the components that represent the connected regions of the
    /// threshold set at `level`, in sealing order.
    #[must_use]
    pub fn alive_at_level(&self, level: u8) -> Vec<ComponentId> {
        self.components
            .iter()
            .filter(|component| {
                self.polarity.includes(component.level, level)
                    && component
                        .parent
                        .is_none_or(|parent| !self.polarity.includes(self[parent].level, level))
            })
            .map(Component::id)
            .collect()
    }

    /// Labels every pixel of the threshold set at `level` with the component
    /// representing its connected region; background pixels map to `None`.
    #[must_use]
    pub fn label_at_level(&self, level: u8) -> Vec<Option<ComponentId>> {
        let limit = self.polarity.rank(level);
        let mut representative: Vec<Option<ComponentId>> = vec![None; self.components.len()];
        // Parents have larger ranks than their children, so walking ranks
        // downwards resolves every parent before its children.
        for rank in (0..=limit).rev() {
            let Some(bucket) = self.by_level.get(usize::from(self.polarity.level(rank))) else {
                continue;
            };
            for &id in bucket {
                let inherited = self[id]
                    .parent
                    .filter(|&parent| self.polarity.rank(self[parent].level) <= limit)
                    .and_then(|parent| representative[parent.0]);
                representative[id.0] = Some(inherited.unwrap_or(id));
            }
        }
        self.owner
            .iter()
            .map(|&owner| representative[owner.0])
            .collect()
    }

    /// Marks a pixel foreground iff its owning component's level is
    /// included at `level`.
    ///
    /// This reproduces thresholding the source image at `level` and does not
    /// touch the tree.
    #[must_use]
    pub fn reconstruct_at_level(&self, level: u8) -> ThresholdMask {
        let foreground = self
            .owner
            .iter()
            .map(|&owner| self.polarity.includes(self[owner].level, level))
            .collect();
        ThresholdMask::new(self.width, self.height, foreground)
    }

    /// Reconstructs the threshold set at every one of the 256 levels.
    #[must_use]
    pub fn threshold_stack(&self) -> Vec<ThresholdMask> {
        (0..=u8::MAX)
            .map(|level| self.reconstruct_at_level(level))
            .collect()
    }

    /// Returns component ids ordered by decreasing size.
    #[must_use]
    pub fn sorted_by_size(&self) -> Vec<ComponentId> {
        let mut ids: Vec<ComponentId> = self.components.iter().map(Component::id).collect();
        ids.sort_by(|a, b| self[*b].size.cmp(&self[*a].size).then(a.cmp(b)));
        ids
    }

    /// Returns component ids in processing-level order.
    #[must_use]
    pub fn sorted_by_level(&self) -> Vec<ComponentId> {
        (0..=u8::MAX)
            .map(|rank| self.polarity.level(rank))
            .filter_map(|level| self.by_level.get(usize::from(level)))
            .flatten()
            .copied()
            .collect()
    }

    pub(crate) fn values(&self) -> &[u8] {
        &self.values
    }

    fn fmt_subtree(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: ComponentId,
        depth: usize,
    ) -> fmt::Result {
        for _ in 0..depth {
            f.write_str("|    ")?;
        }
        writeln!(f, "{}", self[id])?;
        for &child in &self[id].children {
            self.fmt_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

/// # Panics
/// Panics when `id` does not belong to this tree, for instance an id taken
/// from a larger tree. Use [`ComponentTree::component`] for a checked lookup.
impl Index<ComponentId> for ComponentTree {
    type Output = Component;

    fn index(&self, id: ComponentId) -> &Component {
        &self.components[id.0]
    }
}

impl<'a> IntoIterator for &'a ComponentTree {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Formats one line per component; the alternate form (`{:#}`) indents each
/// component below its parent.
impl fmt::Display for ComponentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "component tree ({:?}, {:?}, {}x{}): {} components, {} roots",
            self.method,
            self.polarity,
            self.width,
            self.height,
            self.components.len(),
            self.roots.len()
        )?;
        if f.alternate() {
            for &root in &self.roots {
                self.fmt_subtree(f, root, 0)?;
            }
            return Ok(());
        }
        for component in &self.components {
            writeln!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Iterator over a component and its ancestors.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a ComponentTree,
    next: Option<ComponentId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<&'a Component> {
        let component = self.tree.component(self.next?)?;
        self.next = component.parent;
        Some(component)
    }
}

impl FusedIterator for Ancestors<'_> {}
