//! Symbolic relations handed to the constraint solver

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Identifies a container or a member in the render tree.
pub type ElementId = usize;

/// Process-unique identity of a relation object.
pub type RelationId = usize;

/// Shared handle to a relation. The layout bookkeeping and the solver's
/// active set hold clones of the same handle.
pub type RelationRef = Rc<LayoutRelation>;

static NEXT_RELATION_ID: AtomicUsize = AtomicUsize::new(1);

fn next_relation_id() -> RelationId {
    NEXT_RELATION_ID.fetch_add(1, Ordering::Relaxed)
}

/// Edge or extent of an element a relation can refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Leading,
    Trailing,
    Top,
    Bottom,
    Width,
    Height,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Leading => "leading",
            Attribute::Trailing => "trailing",
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::Width => "width",
            Attribute::Height => "height",
        };
        f.write_str(name)
    }
}

/// An (element, attribute) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub element: ElementId,
    pub attribute: Attribute,
}

impl Anchor {
    pub const fn new(element: ElementId, attribute: Attribute) -> Self {
        Self { element, attribute }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.element, self.attribute)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Equal,
}

/// Value snapshot of a relation, comparable across distinct relation objects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelationDescriptor {
    pub first: Anchor,
    pub relation: Relation,
    pub second: Option<Anchor>,
    pub multiplier: f32,
    pub constant: f32,
}

/// `first == second * multiplier + constant`, or `first == constant` when
/// there is no second anchor.
///
/// Only the constant is mutable. Changing it through any clone of a
/// [`RelationRef`] is observed by every other holder.
#[derive(Debug)]
pub struct LayoutRelation {
    id: RelationId,
    first: Anchor,
    relation: Relation,
    second: Option<Anchor>,
    multiplier: f32,
    constant: Cell<f32>,
}

impl LayoutRelation {
    /// Relates two anchors.
    pub fn between(first: Anchor, second: Anchor, multiplier: f32, constant: f32) -> RelationRef {
        Rc::new(Self {
            id: next_relation_id(),
            first,
            relation: Relation::Equal,
            second: Some(second),
            multiplier,
            constant: Cell::new(constant),
        })
    }

    /// Pins an anchor to a fixed value.
    pub fn fixed(first: Anchor, constant: f32) -> RelationRef {
        Rc::new(Self {
            id: next_relation_id(),
            first,
            relation: Relation::Equal,
            second: None,
            multiplier: 1.0,
            constant: Cell::new(constant),
        })
    }

    pub fn id(&self) -> RelationId {
        self.id
    }

    pub fn first(&self) -> Anchor {
        self.first
    }

    pub fn second(&self) -> Option<Anchor> {
        self.second
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn constant(&self) -> f32 {
        self.constant.get()
    }

    pub fn set_constant(&self, constant: f32) {
        self.constant.set(constant);
    }

    /// True when the relation constrains a single element and is therefore
    /// installed on that element rather than on a common ancestor.
    pub fn is_self_contained(&self) -> bool {
        self.second.is_none()
    }

    pub fn references(&self, element: ElementId) -> bool {
        self.first.element == element
            || self.second.map(|anchor| anchor.element) == Some(element)
    }

    pub fn descriptor(&self) -> RelationDescriptor {
        RelationDescriptor {
            first: self.first,
            relation: self.relation,
            second: self.second,
            multiplier: self.multiplier,
            constant: self.constant(),
        }
    }
}

impl fmt::Display for LayoutRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second {
            Some(second) => write!(
                f,
                "{} == {} * {} + {}",
                self.first,
                second,
                self.multiplier,
                self.constant()
            ),
            None => write!(f, "{} == {}", self.first, self.constant()),
        }
    }
}

#[cfg(test)]
#[path = "tests/relation_tests.rs"]
mod tests;
