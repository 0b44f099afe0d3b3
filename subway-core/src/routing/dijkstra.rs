//! Deterministic shortest-path search over the route graph.
//!
//! Classic Dijkstra with a binary heap. The result is deterministic for
//! a given graph: the heap breaks equal distances by vertex index, and a
//! recorded best distance is only replaced when the candidate is
//! strictly shorter, so among tied paths the first one reached in edge
//! order wins.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::domain::LineId;

use super::graph::RouteGraph;

/// One edge of a found route, in travel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: usize,
    pub to: usize,
    pub distance: u32,
    pub line_id: Option<LineId>,
    pub surcharge: u64,
}

/// A shortest route between two vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Total distance over all hops.
    pub distance: u64,
    pub hops: Vec<Hop>,
}

impl Route {
    /// Vertex sequence from `start` to the route's end, both inclusive.
    /// For a route from a vertex to itself this is just `[start]`.
    pub fn vertices(&self, start: usize) -> Vec<usize> {
        let mut vertices = vec![start];
        vertices.extend(self.hops.iter().map(|hop| hop.to));
        vertices
    }
}

/// Finds the shortest route from `start` to `end`, or `None` when `end`
/// is unreachable. Both arguments must be valid vertex indices.
pub fn shortest_route(graph: &RouteGraph, start: usize, end: usize) -> Option<Route> {
    let mut best: Vec<Option<u64>> = vec![None; graph.len()];
    let mut prev: Vec<Option<Hop>> = vec![None; graph.len()];
    let mut settled = vec![false; graph.len()];
    let mut heap = BinaryHeap::new();

    best[start] = Some(0);
    heap.push(Reverse((0u64, start)));

    while let Some(Reverse((distance, vertex))) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;
        trace!(vertex, distance, "settled vertex");
        if vertex == end {
            break;
        }

        for edge in graph.neighbours(vertex) {
            if settled[edge.to] {
                continue;
            }
            let candidate = distance + u64::from(edge.distance);
            // Strictly-shorter relaxation: tied paths keep the earlier one.
            if best[edge.to].map_or(true, |current| candidate < current) {
                best[edge.to] = Some(candidate);
                prev[edge.to] = Some(Hop {
                    from: vertex,
                    to: edge.to,
                    distance: edge.distance,
                    line_id: edge.line_id,
                    surcharge: edge.surcharge,
                });
                heap.push(Reverse((candidate, edge.to)));
            }
        }
    }

    if !settled[end] {
        return None;
    }

    let mut hops = Vec::new();
    let mut cursor = end;
    while cursor != start {
        let hop = prev[cursor].clone()?;
        cursor = hop.from;
        hops.push(hop);
    }
    hops.reverse();

    Some(Route {
        distance: best[end]?,
        hops,
    })
}
