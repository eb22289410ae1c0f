//! Ordered container that keeps its members positioned through symbolic
//! relations instead of frame arithmetic.
//!
//! The container only emits and retracts relations. Solving them is left to
//! whatever sits behind [`RenderTree`].

mod layout;
mod memory_tree;
mod registry;
mod tree;

pub use layout::LinearLayout;
pub use memory_tree::MemoryRenderTree;
pub use registry::LayoutRegistry;
pub use tree::{ConcreteTreeHost, NodeId, RenderTree, TreeError, TreeHost};

pub use linear_layout_relations::{
    Anchor, Attribute, Axis, AxisPolicy, LayoutParams, LayoutRelation, MemberSize,
    RelationDescriptor, RelationRef, SideRelations,
};
