//! Component-tree nodes.
//!
//! A [`Component`] is a connected set of pixels whose intensity ranks do not
//! exceed the component's level. Components live in the arena owned by
//! [`crate::ComponentTree`] and refer to each other by [`ComponentId`].
//! While a level is being processed, open components are accumulated as
//! [`PendingComponent`] values and turned into immutable [`Component`]s when
//! they are sealed.

use std::fmt;

/// Index of a [`Component`] inside its [`crate::ComponentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sealed node of a component tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub(crate) id: ComponentId,
    pub(crate) level: u8,
    pub(crate) size: usize,
    pub(crate) local_pixels: Vec<usize>,
    pub(crate) children: Vec<ComponentId>,
    pub(crate) parent: Option<ComponentId>,
    pub(crate) height: usize,
}

impl Component {
    /// Returns this component's identifier.
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Returns the intensity level at which this component was sealed.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Returns the total pixel count, including all descendants.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the pixels first added at this component's level, in
    /// ascending identity order. Pixels inherited from children are not
    /// included.
    #[must_use]
    pub fn local_pixels(&self) -> &[usize] {
        &self.local_pixels
    }

    /// Returns the components absorbed into this one.
    #[must_use]
    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }

    /// Returns the enclosing component, or `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    /// Returns the height of the subtree rooted here; leaves have height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when the component has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` when the component has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "component {} level={} size={} local={} children={}",
            self.id,
            self.level,
            self.size,
            self.local_pixels.len(),
            self.children.len()
        )?;
        match self.parent {
            Some(parent) => write!(f, " parent={parent}"),
            None => f.write_str(" parent=none"),
        }
    }
}

/// A component still open for new pixels at the level being processed.
#[derive(Debug, Clone)]
pub(crate) struct PendingComponent {
    rank: u8,
    local_pixels: Vec<usize>,
    children: Vec<ComponentId>,
    size: usize,
    height: usize,
}

impl PendingComponent {
    pub(crate) fn new(rank: u8) -> Self {
        Self {
            rank,
            local_pixels: Vec::new(),
            children: Vec::new(),
            size: 0,
            height: 0,
        }
    }

    pub(crate) fn singleton(rank: u8, pixel: usize) -> Self {
        let mut component = Self::new(rank);
        component.add_pixel(pixel);
        component
    }

    pub(crate) fn rank(&self) -> u8 {
        self.rank
    }

    /// Any pixel of the component, used to locate its union-find root.
    pub(crate) fn anchor(&self) -> Option<usize> {
        self.local_pixels.first().copied()
    }

    pub(crate) fn add_pixel(&mut self, pixel: usize) {
        self.local_pixels.push(pixel);
        self.size += 1;
    }

    /// Makes a sealed lower-level component a child of this one.
    pub(crate) fn adopt(&mut self, child: &Component) {
        self.children.push(child.id);
        self.size += child.size;
        self.height = self.height.max(child.height + 1);
    }

    /// Folds another open component of the same level into this one.
    pub(crate) fn merge(&mut self, other: Self) {
        self.local_pixels.extend(other.local_pixels);
        self.children.extend(other.children);
        self.size += other.size;
        self.height = self.height.max(other.height);
    }

    pub(crate) fn into_parts(self) -> (u8, Vec<usize>, Vec<ComponentId>, usize, usize) {
        (
            self.rank,
            self.local_pixels,
            self.children,
            self.size,
            self.height,
        )
    }
}
