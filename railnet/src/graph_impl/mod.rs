//! Graph data structures.
//!
//! [`RouteGraph`] is an adjacency-map graph over plain station identifiers.
//! It is built once from an edge list and cannot be modified after creation.

mod route_graph;

pub use route_graph::*;
