//! Error types shared across the crate.

use thiserror::Error;

/// Failures surfaced by graph construction and route queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// The requested start station has no departures, an edge along a trip is
  /// missing, or the target station cannot be reached.
  #[error("no such route")]
  NoRoute,

  /// An edge token could not be parsed during graph construction.
  #[error("malformed edge token `{0}`")]
  MalformedEdge(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn errors_render_a_short_message() {
    assert_eq!(Error::NoRoute.to_string(), "no such route");
    assert_eq!(
      Error::MalformedEdge("A5".to_string()).to_string(),
      "malformed edge token `A5`"
    );
  }
}
