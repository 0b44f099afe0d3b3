//! Shortest-path routing over the subway network.
//!
//! The engine has two parts: [`RouteGraph`] merges every line's sections
//! into one undirected weighted graph, and [`shortest_route`] runs a
//! deterministic Dijkstra over it. [`Subway`](crate::domain::Subway)
//! wraps both behind station-level queries.

mod dijkstra;
mod graph;

pub use dijkstra::{shortest_route, Hop, Route};
pub use graph::{RouteEdge, RouteGraph};
