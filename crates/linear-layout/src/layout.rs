//! Ordered linear layout container

use crate::tree::{NodeId, TreeError, TreeHost};
use linear_layout_relations::{
    Axis, AxisPolicy, LayoutParams, MemberSize, RelationRef, SideRelations,
};
use smallvec::SmallVec;
use std::rc::Rc;

/// Arranges members along one axis by maintaining a chain of relations.
///
/// Four sequences are kept index-aligned with the members:
///
/// - `spacing[i]` is the relation placing member `i` after its predecessor
///   (or after the container's start edge for `i == 0`);
/// - `sides[i]` pins member `i` to the container on the cross axis;
/// - `sizes[i]` is the optional extent relation of member `i`.
///
/// Insertions and removals only touch the relations around the affected
/// position. The trailing edge of the last member is left unpinned.
pub struct LinearLayout {
    id: NodeId,
    policy: &'static dyn AxisPolicy,
    params: LayoutParams,
    host: Rc<dyn TreeHost>,
    members: Vec<NodeId>,
    spacing: Vec<RelationRef>,
    sides: Vec<SideRelations>,
    sizes: Vec<Option<RelationRef>>,
}

impl LinearLayout {
    /// Creates an empty layout for the existing container node `id`.
    pub fn new(axis: Axis, host: Rc<dyn TreeHost>, id: NodeId) -> Self {
        Self {
            id,
            policy: axis.policy(),
            params: LayoutParams::default(),
            host,
            members: Vec::new(),
            spacing: Vec::new(),
            sides: Vec::new(),
            sizes: Vec::new(),
        }
    }

    pub fn horizontal(host: Rc<dyn TreeHost>, id: NodeId) -> Self {
        Self::new(Axis::Horizontal, host, id)
    }

    pub fn vertical(host: Rc<dyn TreeHost>, id: NodeId) -> Self {
        Self::new(Axis::Vertical, host, id)
    }

    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.set_params(params);
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn axis(&self) -> Axis {
        self.policy.axis()
    }

    pub fn params(&self) -> LayoutParams {
        self.params
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn member_at(&self, position: usize) -> Option<NodeId> {
        self.members.get(position).copied()
    }

    pub fn position_of(&self, member: NodeId) -> Option<usize> {
        self.members.iter().position(|&candidate| candidate == member)
    }

    pub fn spacing_relations(&self) -> &[RelationRef] {
        &self.spacing
    }

    pub fn side_relations(&self) -> &[SideRelations] {
        &self.sides
    }

    pub fn size_relations(&self) -> &[Option<RelationRef>] {
        &self.sizes
    }

    pub fn leading_margin(&self) -> f32 {
        self.params.leading_margin
    }

    pub fn set_leading_margin(&mut self, margin: f32) {
        self.params.leading_margin = margin;
        if let Some(relation) = self.spacing.first() {
            relation.set_constant(margin);
        }
    }

    pub fn leading_side_margin(&self) -> f32 {
        self.params.leading_side_margin
    }

    pub fn set_leading_side_margin(&mut self, margin: f32) {
        self.params.leading_side_margin = margin;
        for sides in &self.sides {
            sides.leading.set_constant(margin);
        }
    }

    pub fn trailing_side_margin(&self) -> f32 {
        self.params.trailing_side_margin
    }

    pub fn set_trailing_side_margin(&mut self, margin: f32) {
        self.params.trailing_side_margin = margin;
        for sides in &self.sides {
            sides.trailing.set_constant(margin);
        }
    }

    pub fn spacing(&self) -> f32 {
        self.params.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.params.spacing = spacing;
        for relation in self.spacing.iter().skip(1) {
            relation.set_constant(spacing);
        }
    }

    /// Applies every parameter to the existing relations.
    pub fn set_params(&mut self, params: LayoutParams) {
        self.set_leading_margin(params.leading_margin);
        self.set_leading_side_margin(params.leading_side_margin);
        self.set_trailing_side_margin(params.trailing_side_margin);
        self.set_spacing(params.spacing);
    }

    /// Appends `member` after the current last member.
    pub fn add_member(&mut self, member: NodeId) -> Result<(), TreeError> {
        self.insert_member(member, self.members.len())
    }

    /// Inserts `member` so that it ends up at `position`.
    ///
    /// Positions past the end append. The member must not belong to another
    /// parent; the tree reports that case and nothing is changed.
    pub fn insert_member(&mut self, member: NodeId, position: usize) -> Result<(), TreeError> {
        let position = position.min(self.members.len());
        let mut tree = self.host.borrow_dyn();
        tree.attach_child(self.id, member)?;

        // The relation spanning the gap the member is inserted into is split
        // in two below.
        let has_successor = position < self.members.len();
        if has_successor {
            let stale = self.spacing.remove(position);
            tree.retract(self.id, &stale);
        }

        let mut added: SmallVec<[RelationRef; 4]> = SmallVec::new();

        let sides = self.policy.side_relations(self.id, member, &self.params);
        added.extend(sides.iter().cloned());
        self.sides.insert(position, sides);

        let before = self.spacing_before(member, position);
        added.push(Rc::clone(&before));
        self.spacing.insert(position, before);

        if has_successor {
            let next = self.members[position];
            let after = self.policy.spacing_to_next(member, next, &self.params);
            added.push(Rc::clone(&after));
            self.spacing.insert(position + 1, after);
        }

        for relation in added {
            tree.install(self.id, relation);
        }

        self.members.insert(position, member);
        self.sizes.insert(position, None);
        log::debug!(
            "layout #{}: inserted #{} at {} ({} members)",
            self.id,
            member,
            position,
            self.members.len()
        );
        Ok(())
    }

    /// Removes `member` if it belongs to this layout; otherwise does nothing.
    pub fn remove_member(&mut self, member: NodeId) -> Result<(), TreeError> {
        match self.position_of(member) {
            Some(position) => self.remove_member_at(position),
            None => Ok(()),
        }
    }

    /// Removes the member at `position`. Out-of-range positions do nothing.
    pub fn remove_member_at(&mut self, position: usize) -> Result<(), TreeError> {
        if position >= self.members.len() {
            return Ok(());
        }
        let member = self.members[position];
        let mut tree = self.host.borrow_dyn();
        match tree.detach_child(self.id, member) {
            // Already detached through the tree; its relations still go.
            Ok(()) | Err(TreeError::NotAChild { .. }) => {}
            Err(err) => return Err(err),
        }

        let sides = self.sides.remove(position);
        for relation in sides.iter() {
            tree.retract(self.id, relation);
        }

        let before = self.spacing.remove(position);
        tree.retract(self.id, &before);
        // A last member has no relation after it.
        if position + 1 < self.members.len() {
            let after = self.spacing.remove(position);
            tree.retract(self.id, &after);
        }

        if let Some(size) = self.sizes.remove(position) {
            tree.retract(self.size_owner(&size), &size);
        }
        self.members.remove(position);

        if let Some(&successor) = self.members.get(position) {
            let before = self.spacing_before(successor, position);
            tree.install(self.id, Rc::clone(&before));
            self.spacing.insert(position, before);
        }

        log::debug!(
            "layout #{}: removed #{} from {} ({} members)",
            self.id,
            member,
            position,
            self.members.len()
        );
        Ok(())
    }

    /// Fixes the extent of the member at `position` along the layout axis,
    /// replacing any previous size. Out-of-range positions do nothing.
    pub fn set_member_size(&mut self, position: usize, size: MemberSize) {
        let Some(&member) = self.members.get(position) else {
            return;
        };
        let mut tree = self.host.borrow_dyn();
        if let Some(previous) = self.sizes[position].take() {
            tree.retract(self.size_owner(&previous), &previous);
        }

        let relation = self.policy.size_relation(self.id, member, size);
        tree.install(self.size_owner(&relation), Rc::clone(&relation));
        self.sizes[position] = Some(relation);
        log::debug!("layout #{}: #{} sized {:?}", self.id, member, size);
    }

    /// Removes the size relation of the member at `position`, letting its
    /// extent be determined intrinsically again.
    pub fn clear_member_size(&mut self, position: usize) {
        let Some(previous) = self.sizes.get_mut(position).and_then(Option::take) else {
            return;
        };
        let owner = self.size_owner(&previous);
        self.host.borrow_dyn().retract(owner, &previous);
    }

    fn spacing_before(&self, member: NodeId, position: usize) -> RelationRef {
        match position {
            0 => self.policy.spacing_to_container(self.id, member, &self.params),
            _ => self
                .policy
                .spacing_to_previous(member, self.members[position - 1], &self.params),
        }
    }

    // Absolute sizes live on the member, relative ones on the container.
    fn size_owner(&self, relation: &RelationRef) -> NodeId {
        if relation.is_self_contained() {
            relation.first().element
        } else {
            self.id
        }
    }
}

impl std::fmt::Debug for LinearLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearLayout")
            .field("id", &self.id)
            .field("axis", &self.axis())
            .field("params", &self.params)
            .field("members", &self.members)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
