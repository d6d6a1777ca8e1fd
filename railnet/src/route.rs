//! Route finding algorithms.

use crate::error::{Error, Result};
use crate::graph::*;
use crate::search_space::SearchSpace;

use std::collections::HashMap;

/// A shortest route between two stations: the total distance plus the
/// stations visited in travel order.
pub struct Route<W: Weight, N: Identifier> {
  pub distance: W,
  pub nodes: Vec<N>,
}

/// Shortest known distance from `start` to every reachable node, plus the
/// predecessor of each node on its shortest route.
///
/// The zero-distance entry of `start` itself is dropped right after `start`
/// settles, so when some route later loops back the distance recorded for
/// `start` is that of its shortest cycle. A `start` without outgoing edges
/// produces empty maps.
pub fn shortest_distances<G>(
  graph: G,
  start: G::NodeId,
) -> (HashMap<G::NodeId, G::Weight>, HashMap<G::NodeId, G::NodeId>)
where
  G: Copy + Weighted + IntoNeighbors,
{
  let mut search: SearchSpace<G::Weight, G::NodeId> = SearchSpace::new();

  search.init(start);
  search.update(graph);
  search.reopen(start);
  while search.update(graph) {}

  search.into_maps()
}

/// Finds the shortest route between two stations. With `from == to` the
/// result is the shortest cycle through the station; a station is never a
/// zero-length route to itself.
pub fn shortest_route<G>(
  graph: G,
  from: G::NodeId,
  to: G::NodeId,
) -> Result<Route<G::Weight, G::NodeId>>
where
  G: Copy + Weighted + IntoNeighbors,
{
  let (distances, predecessors) = shortest_distances(graph, from);
  let distance = *distances.get(&to).ok_or(Error::NoRoute)?;

  // Walk predecessors backwards. The first hop is unconditional: for a cycle
  // query `to` equals `from`, and the walk has to stop on the second visit of
  // `from`, not the first.
  let mut nodes = vec![to];
  let mut current = *predecessors.get(&to).ok_or(Error::NoRoute)?;
  loop {
    nodes.push(current);
    if current == from {
      break;
    }
    current = *predecessors.get(&current).ok_or(Error::NoRoute)?;
  }
  nodes.reverse();

  Ok(Route { distance, nodes })
}

/// Total distance of a trip visiting the given stations in order. Every
/// consecutive pair has to be a direct edge of the graph.
pub fn trip_distance<G>(graph: G, trip: &[G::NodeId]) -> Result<G::Weight>
where
  G: Copy + Weighted,
{
  let mut distance: G::Weight = Default::default();
  for leg in trip.windows(2) {
    match graph.edge_weight(leg[0], leg[1]) {
      Some(weight) => distance = distance + weight,
      None => return Err(Error::NoRoute),
    }
  }
  Ok(distance)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::sample_network;

  #[test]
  fn shortest_route_reports_the_visited_stations() {
    let network = sample_network();

    let route = shortest_route(&network, 'A', 'C').unwrap();
    assert_eq!(route.distance, 9);
    assert_eq!(route.nodes, vec!['A', 'B', 'C']);
  }

  #[test]
  fn shortest_cycle_returns_to_the_start() {
    let network = sample_network();

    let route = shortest_route(&network, 'B', 'B').unwrap();
    assert_eq!(route.distance, 9);
    assert_eq!(route.nodes, vec!['B', 'C', 'E', 'B']);
  }

  #[test]
  fn unreachable_stations_have_no_route() {
    let network = sample_network();

    // No edge enters 'A', so it can be neither reached nor cycled back to
    assert_eq!(shortest_route(&network, 'C', 'A').err(), Some(Error::NoRoute));
    assert_eq!(shortest_route(&network, 'A', 'A').err(), Some(Error::NoRoute));
  }

  #[test]
  fn shortest_distances_cover_every_reachable_station() {
    let network = sample_network();

    let (distances, predecessors) = shortest_distances(&network, 'A');
    assert_eq!(distances[&'B'], 5);
    assert_eq!(distances[&'C'], 9);
    assert_eq!(distances[&'D'], 5);
    assert_eq!(distances[&'E'], 7);
    assert!(!distances.contains_key(&'A'));
    assert_eq!(predecessors[&'C'], 'B');
  }

  #[test]
  fn trip_distance_sums_the_traveled_edges() {
    let network = sample_network();

    assert_eq!(trip_distance(&network, &['A', 'B', 'C']), Ok(9));
    assert_eq!(trip_distance(&network, &['A']), Ok(0));
    assert_eq!(trip_distance(&network, &['A', 'E', 'D']), Err(Error::NoRoute));
  }
}
