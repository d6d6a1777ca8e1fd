use crate::graph_impl::{Edge, RouteGraph};

pub fn graph_from_edges(edges: &[(char, char, u32)]) -> RouteGraph<char, u32> {
  RouteGraph::from_edges(
    edges
      .iter()
      .map(|&(from, to, weight)| Edge { from, to, weight }),
  )
}

/// The rail network used across the query tests, `C`/`D` and `B`/`C`/`E`
/// forming the cycles the distance queries exercise:
///
///   AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7
pub fn sample_network() -> RouteGraph<char, u32> {
  graph_from_edges(&[
    ('A', 'B', 5),
    ('B', 'C', 4),
    ('C', 'D', 8),
    ('D', 'C', 8),
    ('D', 'E', 6),
    ('A', 'D', 5),
    ('C', 'E', 2),
    ('E', 'B', 3),
    ('A', 'E', 7),
  ])
}
