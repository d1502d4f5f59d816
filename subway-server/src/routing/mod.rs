//! Shortest-route computation over the combined network.
//!
//! The graph is derived from the current lines on every query; nothing is
//! cached across mutations, so a query is always correct by construction.

mod graph;
mod shortest_path;

pub use graph::NetworkGraph;
pub use shortest_path::{Route, RouteError, shortest_path};
