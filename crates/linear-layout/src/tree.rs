//! Interface to the view hierarchy and the solver's active relation set

use linear_layout_relations::{ElementId, RelationRef};
use std::cell::{RefCell, RefMut};

pub type NodeId = ElementId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    Missing { id: NodeId },
    AlreadyAttached { id: NodeId, parent: NodeId },
    NotAChild { parent: NodeId, child: NodeId },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::Missing { id } => write!(f, "node {id} missing"),
            TreeError::AlreadyAttached { id, parent } => {
                write!(f, "node {id} already attached to {parent}")
            }
            TreeError::NotAChild { parent, child } => {
                write!(f, "node {child} is not a child of {parent}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// The render tree a linear layout lives in.
///
/// Relations spanning two elements are installed on the container; relations
/// constraining a single element's extent are installed on that element.
pub trait RenderTree {
    /// Adds `child` under `parent` and turns off its independent
    /// positioning so only relations place it.
    fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError>;

    fn detach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError>;

    fn parent_of(&self, child: NodeId) -> Option<NodeId>;

    fn install(&mut self, owner: NodeId, relation: RelationRef);

    /// Retracting a relation that is not installed on `owner` does nothing.
    fn retract(&mut self, owner: NodeId, relation: &RelationRef);
}

pub trait TreeHost {
    fn borrow_dyn(&self) -> RefMut<'_, dyn RenderTree>;
}

pub struct ConcreteTreeHost<T: RenderTree + 'static> {
    inner: RefCell<T>,
}

impl<T: RenderTree + 'static> ConcreteTreeHost<T> {
    pub fn new(tree: T) -> Self {
        Self {
            inner: RefCell::new(tree),
        }
    }

    pub fn borrow_typed(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }
}

impl<T: RenderTree + 'static> TreeHost for ConcreteTreeHost<T> {
    fn borrow_dyn(&self) -> RefMut<'_, dyn RenderTree> {
        RefMut::map(self.inner.borrow_mut(), |tree| tree as &mut dyn RenderTree)
    }
}
