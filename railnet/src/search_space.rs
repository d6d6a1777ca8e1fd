use crate::graph::*;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State<W: Weight, N: Identifier> {
  cost: W,
  id: N,
}

impl<W: Weight, N: Identifier> Ord for State<W, N> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc, ties resolved towards the lowest node id
    other
      .cost
      .cmp(&self.cost)
      .then_with(|| other.id.cmp(&self.id))
  }
}

// `PartialOrd` needs to be implemented as well.
impl<W: Weight, N: Identifier> PartialOrd for State<W, N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Label-setting shortest path search state.
///
/// `resolved` doubles as the tentative distance table: each entry holds the
/// best known cost of a node together with its parent on that path. The
/// priority queue is not rebuilt on decrease-key updates; stale entries are
/// skipped when popped.
pub struct SearchSpace<W: Weight, N: Identifier> {
  pq: BinaryHeap<State<W, N>>,
  resolved: HashMap<N, State<W, N>>,
}

impl<W: Weight, N: Identifier> SearchSpace<W, N> {
  pub fn new() -> Self {
    SearchSpace {
      pq: BinaryHeap::new(),
      resolved: HashMap::new(),
    }
  }

  pub fn init(&mut self, node: N) {
    self.resolve(node, node, Default::default());
  }

  /// Forgets the settled entry of `node`, so that a later edge back into it
  /// can settle it a second time. Applied to the start node right after its
  /// first settle, this records the shortest cycle through it.
  pub fn reopen(&mut self, node: N) {
    self.resolved.remove(&node);
  }

  /// Pops one node and relaxes its outgoing edges. Returns `false` once the
  /// queue is exhausted.
  pub fn update<G>(&mut self, graph: G) -> bool
  where
    G: Copy + Weighted<Weight = W> + IntoNeighbors<NodeId = N>,
  {
    if let Some(State { cost, id }) = self.pq.pop() {
      if let Some(resolved) = self.resolved.get(&id) {
        if cost > resolved.cost {
          return true;
        }
      }

      for target_id in graph.neighbors(id) {
        let edge_cost = match graph.edge_weight(id, target_id) {
          Some(weight) => weight,
          None => continue,
        };
        let path_cost: W = cost + edge_cost;
        if let Some(target_state) = self.resolved.get(&target_id) {
          if path_cost >= target_state.cost {
            continue;
          }
        }

        self.resolve(target_id, id, path_cost);
      }

      return true;
    }
    false
  }

  /// Final distance and parent tables, consuming the search.
  pub fn into_maps(self) -> (HashMap<N, W>, HashMap<N, N>) {
    let mut distances = HashMap::with_capacity(self.resolved.len());
    let mut parents = HashMap::with_capacity(self.resolved.len());
    for (node, state) in self.resolved {
      distances.insert(node, state.cost);
      parents.insert(node, state.id);
    }
    (distances, parents)
  }

  fn resolve(&mut self, node: N, parent_node: N, path_cost: W) {
    self.resolved.insert(
      node,
      State {
        cost: path_cost,
        id: parent_node,
      },
    );
    self.pq.push(State {
      cost: path_cost,
      id: node,
    });
  }
}

#[cfg(test)]
mod tests {
  use super::super::test_utils::graph_from_edges;
  use super::*;

  #[test]
  fn update_returns_false_once_the_queue_drains() {
    let graph = graph_from_edges(&[('a', 'b', 1), ('b', 'c', 1), ('c', 'd', 1)]);

    let mut search_space = SearchSpace::<u32, char>::new();

    search_space.init('a');

    assert!(search_space.update(&graph));
    assert!(search_space.update(&graph));
    assert!(search_space.update(&graph));
    assert!(search_space.update(&graph));

    assert_ne!(search_space.update(&graph), true);
  }

  #[test]
  fn ties_settle_the_lowest_node_first() {
    let graph = graph_from_edges(&[('a', 'b', 1), ('a', 'c', 1), ('b', 'd', 1), ('c', 'd', 1)]);

    let mut search_space = SearchSpace::new();
    search_space.init('a');
    while search_space.update(&graph) {}

    let (distances, parents) = search_space.into_maps();
    assert_eq!(distances[&'d'], 2);
    // 'b' and 'c' are both at distance 1; 'b' settles first and claims 'd'
    assert_eq!(parents[&'d'], 'b');
  }

  #[test]
  fn reopen_lets_a_cycle_settle_the_start_again() {
    let graph = graph_from_edges(&[('a', 'b', 2), ('b', 'c', 3), ('c', 'a', 4)]);

    let mut search_space = SearchSpace::new();
    search_space.init('a');

    assert!(search_space.update(&graph));
    search_space.reopen('a');
    while search_space.update(&graph) {}

    let (distances, parents) = search_space.into_maps();
    assert_eq!(distances[&'a'], 9);
    assert_eq!(parents[&'a'], 'c');
  }
}
