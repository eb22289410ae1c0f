//! Relation descriptors & axis policies for linear layouts

mod axis;
mod params;
mod policy;
mod relation;

pub use axis::*;
pub use params::*;
pub use policy::*;
pub use relation::*;
