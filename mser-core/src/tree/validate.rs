//! Structural checks over a finished tree.

use crate::{
    component::ComponentId,
    error::{ComponentTreeError, Result},
};

use super::ComponentTree;

fn violation(invariant: &'static str, index: usize) -> ComponentTreeError {
    ComponentTreeError::InvariantViolation { invariant, index }
}

impl ComponentTree {
    /// Checks the structural invariants of the tree.
    ///
    /// The walk verifies that:
    ///
    /// - the tree has exactly one root and every component is reachable from
    ///   it exactly once,
    /// - parent and child links agree and no component is its own parent,
    /// - every parent is processed strictly after each of its children,
    /// - local pixels carry exactly the component's level,
    /// - sizes and heights add up over children.
    ///
    /// # Errors
    /// Returns [`ComponentTreeError::InvariantViolation`] naming the first
    /// broken invariant and the offending component or pixel index.
    pub fn validate(&self) -> Result<()> {
        let [root] = self.roots.as_slice() else {
            return Err(violation(
                "a connected grid must have exactly one root",
                self.roots.len(),
            ));
        };

        let mut visited = vec![false; self.components.len()];
        let mut pending = vec![*root];
        while let Some(id) = pending.pop() {
            let seen = visited
                .get_mut(id.0)
                .ok_or_else(|| violation("component id must refer to the arena", id.0))?;
            if std::mem::replace(seen, true) {
                return Err(violation("component must be reachable exactly once", id.0));
            }
            self.check_component(id)?;
            pending.extend_from_slice(&self[id].children);
        }
        if let Some(orphan) = visited.iter().position(|&seen| !seen) {
            return Err(violation("component must be reachable from the root", orphan));
        }
        Ok(())
    }

    fn check_component(&self, id: ComponentId) -> Result<()> {
        let component = &self[id];
        if component.id != id {
            return Err(violation("component must store its own id", id.0));
        }
        if component.parent == Some(id) {
            return Err(violation("component must not be its own parent", id.0));
        }

        let values = self.values();
        for &pixel in &component.local_pixels {
            if values.get(pixel) != Some(&component.level) {
                return Err(violation(
                    "local pixels must carry the component level",
                    pixel,
                ));
            }
        }

        let mut size = component.local_pixels.len();
        let mut height = 0;
        for &child_id in &component.children {
            let child = self
                .component(child_id)
                .ok_or_else(|| violation("child id must refer to the arena", child_id.0))?;
            if child.parent != Some(id) {
                return Err(violation("child must link back to its parent", child_id.0));
            }
            if !self.polarity.precedes(child.level, component.level) {
                return Err(violation(
                    "parent must be processed after its children",
                    child_id.0,
                ));
            }
            size += child.size;
            height = height.max(child.height + 1);
        }
        if size != component.size {
            return Err(violation(
                "size must equal local pixels plus child sizes",
                id.0,
            ));
        }
        if height != component.height {
            return Err(violation("height must exceed the tallest child by one", id.0));
        }
        Ok(())
    }
}
