//! Relationship classification.
//!
//! [`classify`] computes structural implementation across the whole model;
//! the edge functions derive composition, aggregation, implementation and
//! alias edges from a classified model.

mod implements;
mod relationships;

pub use implements::{classify, implements, MethodSet};
pub use relationships::{
    alias_edges, interface_edges, struct_edges, Edge, EdgeEnd, EdgeKind, StructEdges,
};
