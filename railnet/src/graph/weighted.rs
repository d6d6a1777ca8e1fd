use crate::graph::GraphBase;
use std::fmt::Debug;
use std::ops::Add;

/// Trait representing an edge weight(cost) in weighted graph
pub trait Weight<T = Self>: Default + Add<Output = T> + Ord + Copy + Debug {}
impl<T> Weight for T where T: Default + Add<Output = T> + Ord + Copy + Debug {}

/// Weighted graph
///
/// The weight is the cost of traveling the direct edge from one node to
/// another, `None` when the graph has no such edge.
pub trait Weighted: GraphBase {
  type Weight: Weight;
  fn edge_weight(&self, from: Self::NodeId, to: Self::NodeId) -> Option<Self::Weight>;
}

impl<'a, G: Weighted> Weighted for &'a G {
  type Weight = G::Weight;

  fn edge_weight(&self, from: Self::NodeId, to: Self::NodeId) -> Option<Self::Weight> {
    (*self).edge_weight(from, to)
  }
}
