//! Member-to-layout reverse lookup

use crate::layout::LinearLayout;
use crate::tree::{NodeId, TreeError, TreeHost};
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Owns the linear layouts of one render tree, keyed by container node.
///
/// Lets a member be removed from whatever layout holds it without the caller
/// knowing which one that is.
pub struct LayoutRegistry {
    host: Rc<dyn TreeHost>,
    layouts: FxHashMap<NodeId, LinearLayout>,
}

impl LayoutRegistry {
    pub fn new(host: Rc<dyn TreeHost>) -> Self {
        Self {
            host,
            layouts: FxHashMap::default(),
        }
    }

    /// Registers `layout`, returning any layout previously registered for
    /// the same container.
    pub fn register(&mut self, layout: LinearLayout) -> Option<LinearLayout> {
        self.layouts.insert(layout.id(), layout)
    }

    pub fn unregister(&mut self, container: NodeId) -> Option<LinearLayout> {
        self.layouts.remove(&container)
    }

    pub fn layout(&self, container: NodeId) -> Option<&LinearLayout> {
        self.layouts.get(&container)
    }

    pub fn layout_mut(&mut self, container: NodeId) -> Option<&mut LinearLayout> {
        self.layouts.get_mut(&container)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Removes `member` from the linear layout it belongs to.
    ///
    /// Returns `Ok(false)` when the member's parent is not a registered
    /// linear layout; the member then stays where it is.
    pub fn remove_from_linear_layout(&mut self, member: NodeId) -> Result<bool, TreeError> {
        let parent = self.host.borrow_dyn().parent_of(member);
        let Some(parent) = parent else {
            return Ok(false);
        };
        let Some(layout) = self.layouts.get_mut(&parent) else {
            log::warn!("#{member}: parent #{parent} is not a linear layout");
            return Ok(false);
        };
        if layout.position_of(member).is_none() {
            return Ok(false);
        }
        layout.remove_member(member)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
