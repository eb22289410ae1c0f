//! Axis-specific relation factories

use crate::axis::Axis;
use crate::params::{LayoutParams, MemberSize};
use crate::relation::{Anchor, Attribute, ElementId, LayoutRelation, RelationRef};

/// The pair of relations pinning a member to the container on the cross axis.
#[derive(Clone, Debug)]
pub struct SideRelations {
    pub leading: RelationRef,
    pub trailing: RelationRef,
}

impl SideRelations {
    pub fn iter(&self) -> impl Iterator<Item = &RelationRef> {
        [&self.leading, &self.trailing].into_iter()
    }
}

/// Builds the relations a linear layout needs for one axis.
///
/// Implementations are pure: they only describe relations, they never
/// install them or inspect the tree.
pub trait AxisPolicy {
    fn axis(&self) -> Axis;

    /// Anchors of the cross-axis leading and trailing edges.
    fn side_attributes(&self) -> (Attribute, Attribute);

    /// Anchors of the start and end edges along the layout axis.
    fn main_attributes(&self) -> (Attribute, Attribute);

    /// Extent along the layout axis.
    fn extent_attribute(&self) -> Attribute;

    fn leading_side_relation(
        &self,
        container: ElementId,
        member: ElementId,
        params: &LayoutParams,
    ) -> RelationRef {
        let (leading, _) = self.side_attributes();
        LayoutRelation::between(
            Anchor::new(member, leading),
            Anchor::new(container, leading),
            1.0,
            params.leading_side_margin,
        )
    }

    fn trailing_side_relation(
        &self,
        container: ElementId,
        member: ElementId,
        params: &LayoutParams,
    ) -> RelationRef {
        let (_, trailing) = self.side_attributes();
        LayoutRelation::between(
            Anchor::new(container, trailing),
            Anchor::new(member, trailing),
            1.0,
            params.trailing_side_margin,
        )
    }

    fn side_relations(
        &self,
        container: ElementId,
        member: ElementId,
        params: &LayoutParams,
    ) -> SideRelations {
        SideRelations {
            leading: self.leading_side_relation(container, member, params),
            trailing: self.trailing_side_relation(container, member, params),
        }
    }

    /// Pins the member's start edge to the container's start edge.
    fn spacing_to_container(
        &self,
        container: ElementId,
        member: ElementId,
        params: &LayoutParams,
    ) -> RelationRef {
        let (start, _) = self.main_attributes();
        LayoutRelation::between(
            Anchor::new(member, start),
            Anchor::new(container, start),
            1.0,
            params.leading_margin,
        )
    }

    /// Pins the member's start edge to the end edge of its predecessor.
    fn spacing_to_previous(
        &self,
        member: ElementId,
        previous: ElementId,
        params: &LayoutParams,
    ) -> RelationRef {
        let (start, end) = self.main_attributes();
        LayoutRelation::between(
            Anchor::new(member, start),
            Anchor::new(previous, end),
            1.0,
            params.spacing,
        )
    }

    /// Pins the start edge of the successor to the member's end edge.
    fn spacing_to_next(
        &self,
        member: ElementId,
        next: ElementId,
        params: &LayoutParams,
    ) -> RelationRef {
        self.spacing_to_previous(next, member, params)
    }

    fn size_relation(&self, container: ElementId, member: ElementId, size: MemberSize) -> RelationRef {
        let extent = self.extent_attribute();
        match size {
            MemberSize::Relative(fraction) => LayoutRelation::between(
                Anchor::new(member, extent),
                Anchor::new(container, extent),
                fraction,
                0.0,
            ),
            MemberSize::Absolute(points) => {
                LayoutRelation::fixed(Anchor::new(member, extent), points)
            }
        }
    }
}

/// Lays members out leading to trailing, pinning top and bottom.
#[derive(Clone, Copy, Debug, Default)]
pub struct HorizontalPolicy;

impl AxisPolicy for HorizontalPolicy {
    fn axis(&self) -> Axis {
        Axis::Horizontal
    }

    fn side_attributes(&self) -> (Attribute, Attribute) {
        (Attribute::Top, Attribute::Bottom)
    }

    fn main_attributes(&self) -> (Attribute, Attribute) {
        (Attribute::Leading, Attribute::Trailing)
    }

    fn extent_attribute(&self) -> Attribute {
        Attribute::Width
    }
}

/// Lays members out top to bottom, pinning leading and trailing.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerticalPolicy;

impl AxisPolicy for VerticalPolicy {
    fn axis(&self) -> Axis {
        Axis::Vertical
    }

    fn side_attributes(&self) -> (Attribute, Attribute) {
        (Attribute::Leading, Attribute::Trailing)
    }

    fn main_attributes(&self) -> (Attribute, Attribute) {
        (Attribute::Top, Attribute::Bottom)
    }

    fn extent_attribute(&self) -> Attribute {
        Attribute::Height
    }
}

#[cfg(test)]
#[path = "tests/policy_tests.rs"]
mod tests;
