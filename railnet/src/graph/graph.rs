use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

// ====== Basic traits =====

/// Requirements for a node identifier
///
/// `Ord` is part of the contract: neighbor iteration and search tie-breaking
/// follow the identifier order, which keeps query results deterministic.
pub trait Identifier: Eq + Ord + Hash + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Ord + Hash + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

// ====== Neighbors access =====

/// Trait for defining graph connectivity
///
/// `neighbors()` for a node with id `u` must return all nodes `v` such that there
/// is an edge from `u` to `v` in the graph, in ascending order of `v`. A node
/// without outgoing edges yields an empty iterator.
pub trait IntoNeighbors: GraphBase {
  type Neighbors: Iterator<Item = Self::NodeId>;
  fn neighbors(self, node: Self::NodeId) -> Self::Neighbors;
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}
