//! Testing utilities for linear layouts.
//!
//! [`LayoutHarness`] wires a [`LinearLayout`] to an in-memory render tree and
//! can verify that the layout's bookkeeping matches what is installed in the
//! tree after every mutation.

use linear_layout::{
    ConcreteTreeHost, LayoutParams, LinearLayout, MemoryRenderTree, NodeId, RelationDescriptor,
    RelationRef, RenderTree,
};
use linear_layout_relations::Axis;
use std::cell::RefMut;
use std::fmt;
use std::rc::Rc;

/// A broken bookkeeping rule, described for a test failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Value copy of everything a layout has emitted, for before/after checks.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub members: Vec<NodeId>,
    pub spacing: Vec<RelationDescriptor>,
    pub sides: Vec<(RelationDescriptor, RelationDescriptor)>,
    pub sizes: Vec<Option<RelationDescriptor>>,
    /// Installed relations, in a stable order independent of install order.
    pub installed: Vec<RelationDescriptor>,
}

impl LayoutSnapshot {
    pub fn capture(layout: &LinearLayout, tree: &MemoryRenderTree) -> Self {
        let mut installed: Vec<RelationDescriptor> = owned_relations(layout, tree)
            .iter()
            .map(|relation| relation.descriptor())
            .collect();
        installed.sort_by_key(|descriptor| format!("{descriptor:?}"));
        Self {
            members: layout.members().to_vec(),
            spacing: layout
                .spacing_relations()
                .iter()
                .map(|r| r.descriptor())
                .collect(),
            sides: layout
                .side_relations()
                .iter()
                .map(|s| (s.leading.descriptor(), s.trailing.descriptor()))
                .collect(),
            sizes: layout
                .size_relations()
                .iter()
                .map(|s| s.as_ref().map(|r| r.descriptor()))
                .collect(),
            installed,
        }
    }
}

/// Relations installed on the layout's container or on any of its members.
fn owned_relations(layout: &LinearLayout, tree: &MemoryRenderTree) -> Vec<RelationRef> {
    std::iter::once(layout.id())
        .chain(layout.members().iter().copied())
        .flat_map(|owner| tree.relations_of(owner).iter().cloned())
        .collect()
}

/// Checks every bookkeeping rule of `layout` against `tree`.
pub fn check_invariants(
    layout: &LinearLayout,
    tree: &MemoryRenderTree,
) -> Result<(), InvariantViolation> {
    let container = layout.id();
    let members = layout.members();
    let count = members.len();

    if layout.side_relations().len() != count
        || layout.size_relations().len() != count
        || layout.spacing_relations().len() != count
    {
        return Err(InvariantViolation::new(format!(
            "sequence lengths diverged: members {}, spacing {}, sides {}, sizes {}",
            count,
            layout.spacing_relations().len(),
            layout.side_relations().len(),
            layout.size_relations().len()
        )));
    }

    for (position, relation) in layout.spacing_relations().iter().enumerate() {
        let expected_before = match position {
            0 => container,
            _ => members[position - 1],
        };
        let actual = (
            relation.first().element,
            relation.second().map(|anchor| anchor.element),
        );
        if actual != (members[position], Some(expected_before)) {
            return Err(InvariantViolation::new(format!(
                "spacing[{position}] is {relation}, expected #{} after #{}",
                members[position], expected_before
            )));
        }
    }

    for (position, sides) in layout.side_relations().iter().enumerate() {
        for relation in sides.iter() {
            if !relation.references(members[position]) || !relation.references(container) {
                return Err(InvariantViolation::new(format!(
                    "side relation {relation} does not pin #{} to #{container}",
                    members[position]
                )));
            }
        }
    }

    for (position, size) in layout.size_relations().iter().enumerate() {
        if let Some(relation) = size {
            if relation.first().element != members[position] {
                return Err(InvariantViolation::new(format!(
                    "size[{position}] is {relation}, expected it to size #{}",
                    members[position]
                )));
            }
        }
    }

    let mut tracked: Vec<&RelationRef> = layout.spacing_relations().iter().collect();
    tracked.extend(layout.side_relations().iter().flat_map(|s| s.iter()));
    tracked.extend(layout.size_relations().iter().flatten());
    for relation in &tracked {
        if !tree.is_installed(relation) {
            return Err(InvariantViolation::new(format!(
                "tracked relation {relation} is not installed"
            )));
        }
    }

    let installed = owned_relations(layout, tree);
    if installed.len() != tracked.len() {
        return Err(InvariantViolation::new(format!(
            "{} relations installed but {} tracked",
            installed.len(),
            tracked.len()
        )));
    }

    for relation in tree.active_relations() {
        let touches_layout = relation.references(container)
            || members.iter().any(|&member| relation.references(member));
        if !touches_layout {
            continue;
        }
        let stranger = [relation.first()]
            .into_iter()
            .chain(relation.second())
            .map(|anchor| anchor.element)
            .find(|&element| element != container && !members.contains(&element));
        if let Some(element) = stranger {
            return Err(InvariantViolation::new(format!(
                "relation {relation} references #{element}, which is not a member"
            )));
        }
    }

    for &member in members {
        if tree.parent_of(member) != Some(container) {
            return Err(InvariantViolation::new(format!(
                "member #{member} is not attached to #{container}"
            )));
        }
    }

    Ok(())
}

/// A layout on top of a fresh in-memory tree.
pub struct LayoutHarness {
    pub host: Rc<ConcreteTreeHost<MemoryRenderTree>>,
    pub layout: LinearLayout,
}

impl LayoutHarness {
    pub fn new(axis: Axis) -> Self {
        let host = Rc::new(ConcreteTreeHost::new(MemoryRenderTree::new()));
        let container = host.borrow_typed().create_node();
        let layout = LinearLayout::new(axis, host.clone(), container);
        Self { host, layout }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.layout.set_params(params);
        self
    }

    pub fn tree(&self) -> RefMut<'_, MemoryRenderTree> {
        self.host.borrow_typed()
    }

    pub fn create_member(&self) -> NodeId {
        self.tree().create_node()
    }

    pub fn create_members<const N: usize>(&self) -> [NodeId; N] {
        std::array::from_fn(|_| self.create_member())
    }

    /// Creates `N` members and appends them in order.
    pub fn populate<const N: usize>(&mut self) -> [NodeId; N] {
        let members = self.create_members::<N>();
        for member in members {
            if let Err(err) = self.layout.add_member(member) {
                panic!("failed to append #{member}: {err}");
            }
        }
        members
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::capture(&self.layout, &self.tree())
    }

    pub fn check(&self) -> Result<(), InvariantViolation> {
        check_invariants(&self.layout, &self.tree())
    }

    #[track_caller]
    pub fn assert_consistent(&self) {
        if let Err(violation) = self.check() {
            panic!(
                "layout invariant violated: {violation}\n{}",
                self.tree().dump_tree(self.layout.id())
            );
        }
    }

    /// Spacing chain as (member, predecessor) element pairs.
    pub fn chain(&self) -> Vec<(NodeId, NodeId)> {
        self.layout
            .spacing_relations()
            .iter()
            .filter_map(|r| r.second().map(|second| (r.first().element, second.element)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linear_layout::{Anchor, Attribute, LayoutRelation};

    #[test]
    fn fresh_harness_is_consistent() {
        let mut harness = LayoutHarness::vertical();
        harness.assert_consistent();
        harness.populate::<3>();
        harness.assert_consistent();
    }

    #[test]
    fn stray_relation_is_reported() {
        let mut harness = LayoutHarness::horizontal();
        let [a] = harness.populate::<1>();
        let outsider = harness.create_member();
        let container = harness.layout.id();
        harness.tree().install(
            container,
            LayoutRelation::between(
                Anchor::new(a, Attribute::Leading),
                Anchor::new(outsider, Attribute::Trailing),
                1.0,
                0.0,
            ),
        );

        let violation = harness.check().unwrap_err();
        assert!(violation.message.contains("installed but"));
    }

    #[test]
    fn snapshot_ignores_install_order() {
        let mut harness = LayoutHarness::horizontal();
        harness.populate::<2>();
        let snapshot = harness.snapshot();
        assert_eq!(snapshot.installed.len(), 6);
        assert_eq!(snapshot, harness.snapshot());
    }
}
