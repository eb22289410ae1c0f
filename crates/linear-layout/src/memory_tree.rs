//! Headless render tree

use crate::tree::{NodeId, RenderTree, TreeError};
use indexmap::IndexSet;
use linear_layout_relations::RelationRef;
use std::rc::Rc;

#[derive(Default)]
struct NodeRecord {
    parent: Option<NodeId>,
    children: IndexSet<NodeId>,
    relations: Vec<RelationRef>,
    relation_positioned: bool,
}

/// Render tree kept entirely in memory.
///
/// Records parent/child links and the relations installed on each node. It
/// never solves anything; it is the stand-in for a platform view hierarchy in
/// headless use and in tests.
#[derive(Default)]
pub struct MemoryRenderTree {
    nodes: Vec<Option<NodeRecord>>,
}

impl MemoryRenderTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn create_node(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Some(NodeRecord::default()));
        id
    }

    /// Drops a detached node. Its children are orphaned, not destroyed.
    pub fn destroy_node(&mut self, id: NodeId) -> Result<(), TreeError> {
        let record = self.record(id)?;
        if let Some(parent) = record.parent {
            return Err(TreeError::AlreadyAttached { id, parent });
        }
        let children: Vec<NodeId> = record.children.iter().copied().collect();
        for child in children {
            if let Ok(child) = self.record_mut(child) {
                child.parent = None;
            }
        }
        if let Some(slot) = self.nodes.get_mut(id) {
            slot.take();
        }
        Ok(())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id), Some(Some(_)))
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.record(id)
            .map(|record| record.children.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn relations_of(&self, owner: NodeId) -> &[RelationRef] {
        self.record(owner)
            .map(|record| record.relations.as_slice())
            .unwrap_or(&[])
    }

    /// Every installed relation, grouped by owner in node order.
    pub fn active_relations(&self) -> impl Iterator<Item = &RelationRef> {
        self.nodes
            .iter()
            .flatten()
            .flat_map(|record| record.relations.iter())
    }

    pub fn relation_count(&self) -> usize {
        self.active_relations().count()
    }

    pub fn is_installed(&self, relation: &RelationRef) -> bool {
        self.active_relations()
            .any(|installed| Rc::ptr_eq(installed, relation))
    }

    pub fn is_relation_positioned(&self, id: NodeId) -> bool {
        self.record(id)
            .map(|record| record.relation_positioned)
            .unwrap_or(false)
    }

    pub fn dump_tree(&self, root: NodeId) -> String {
        let mut output = String::new();
        self.dump_node(&mut output, root, 0);
        output
    }

    fn dump_node(&self, output: &mut String, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.record(id) {
            Ok(record) => {
                output.push_str(&format!("{}[{}]\n", indent, id));
                for relation in &record.relations {
                    output.push_str(&format!("{}  | {}\n", indent, relation));
                }
                for &child in &record.children {
                    self.dump_node(output, child, depth + 1);
                }
            }
            Err(_) => output.push_str(&format!("{}[{}] (missing)\n", indent, id)),
        }
    }

    fn record(&self, id: NodeId) -> Result<&NodeRecord, TreeError> {
        self.nodes
            .get(id)
            .and_then(|slot| slot.as_ref())
            .ok_or(TreeError::Missing { id })
    }

    fn record_mut(&mut self, id: NodeId) -> Result<&mut NodeRecord, TreeError> {
        self.nodes
            .get_mut(id)
            .and_then(|slot| slot.as_mut())
            .ok_or(TreeError::Missing { id })
    }
}

impl RenderTree for MemoryRenderTree {
    fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.record(parent)?;
        let record = self.record_mut(child)?;
        if let Some(existing) = record.parent {
            return Err(TreeError::AlreadyAttached {
                id: child,
                parent: existing,
            });
        }
        record.parent = Some(parent);
        record.relation_positioned = true;
        self.record_mut(parent)?.children.insert(child);
        Ok(())
    }

    fn detach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let removed = self.record_mut(parent)?.children.shift_remove(&child);
        if !removed {
            return Err(TreeError::NotAChild { parent, child });
        }
        self.record_mut(child)?.parent = None;
        Ok(())
    }

    fn parent_of(&self, child: NodeId) -> Option<NodeId> {
        self.record(child).ok().and_then(|record| record.parent)
    }

    fn install(&mut self, owner: NodeId, relation: RelationRef) {
        match self.record_mut(owner) {
            Ok(record) => {
                log::trace!("install on #{owner}: {relation}");
                record.relations.push(relation);
            }
            Err(err) => log::warn!("dropping relation {relation}: {err}"),
        }
    }

    fn retract(&mut self, owner: NodeId, relation: &RelationRef) {
        if let Ok(record) = self.record_mut(owner) {
            let before = record.relations.len();
            record
                .relations
                .retain(|installed| !Rc::ptr_eq(installed, relation));
            if record.relations.len() != before {
                log::trace!("retract from #{owner}: {relation}");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/memory_tree_tests.rs"]
mod tests;
