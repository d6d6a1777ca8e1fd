//! Algorithms and data structures for querying routes in a rail network.
//!
//! A network is built once from an edge list and stays immutable afterwards.
//! Queries enumerate bounded trips ([`trips`]), compute shortest routes
//! ([`route`]), or go through the [`graph_impl::RouteGraph`] query façade.

pub mod error;
pub mod graph;
pub mod graph_impl;
pub mod route;
pub mod trips;

mod search_space;

#[cfg(test)]
mod test_utils;
