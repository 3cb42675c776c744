//! Incremental union-find over pixel identities.
//!
//! Sets are created lazily as pixels become active during the level sweep.
//! Each live root carries a handle to the component that currently
//! represents its set; [`DisjointSet::union`] hands both handles back to the
//! caller, which decides how the components combine and stores the result on
//! the surviving root.

/// Parent marker for pixels that have not been activated yet.
const INACTIVE: usize = usize::MAX;

/// Outcome of [`DisjointSet::union`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Union<C> {
    /// Both identities already shared a root.
    Same {
        /// The shared root.
        root: usize,
    },
    /// Two distinct sets were joined.
    Merged {
        /// The surviving root.
        root: usize,
        /// Handle formerly stored on the left argument's root.
        left: Option<C>,
        /// Handle formerly stored on the right argument's root.
        right: Option<C>,
    },
}

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet<C> {
    parent: Vec<usize>,
    rank: Vec<u8>,
    component: Vec<Option<C>>,
}

impl<C: Copy> DisjointSet<C> {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: vec![INACTIVE; n],
            rank: vec![0; n],
            component: vec![None; n],
        }
    }

    /// Activates `node` as a singleton set represented by `component`.
    pub(crate) fn make_set(&mut self, node: usize, component: C) {
        self.parent[node] = node;
        self.rank[node] = 0;
        self.component[node] = Some(component);
    }

    pub(crate) fn is_active(&self, node: usize) -> bool {
        self.parent.get(node).is_some_and(|&parent| parent != INACTIVE)
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Joins the sets containing `left` and `right`.
    ///
    /// On a merge both component handles are taken out of their roots; the
    /// caller stores the combined handle with [`DisjointSet::set_component`].
    /// Joining two identities that already share a root is a no-op.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> Union<C> {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return Union::Same { root: left_root };
        }

        let left_component = self.component[left_root].take();
        let right_component = self.component[right_root].take();

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (root, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = root;
        if left_rank == right_rank {
            self.rank[root] = left_rank.saturating_add(1);
        }

        Union::Merged {
            root,
            left: left_component,
            right: right_component,
        }
    }

    #[cfg(test)]
    pub(crate) fn component(&self, root: usize) -> Option<C> {
        self.component.get(root).copied().flatten()
    }

    pub(crate) fn set_component(&mut self, root: usize, component: C) {
        self.component[root] = Some(component);
    }
}
