//! Union graph over every line's sections.
//!
//! All lines are merged into one undirected graph weighted by section
//! distance. Parallel sections between the same pair of stations are all
//! kept, so the search can pick the cheapest of them and report which
//! line it rode.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Line, LineId, Station};

/// One directed adjacency entry of the route graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEdge {
    /// Index of the neighbouring vertex.
    pub to: usize,
    pub distance: u32,
    /// Id of the line the section belongs to; `None` for unsaved lines.
    pub line_id: Option<LineId>,
    /// Per-ride surcharge of that line.
    pub surcharge: u64,
}

/// The union graph of a set of lines.
///
/// Vertex numbering is deterministic: lines are visited in ascending id
/// order with unsaved lines first, and each line contributes its
/// stations in chain order. Every real section becomes two directed
/// entries, one per direction.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    vertices: Vec<Station>,
    indices: HashMap<Station, usize>,
    adjacency: Vec<Vec<RouteEdge>>,
}

impl RouteGraph {
    /// Builds the union graph of `lines`. Terminator rows contribute no
    /// edges; their stations are already interned by the real section
    /// that precedes them.
    pub fn from_lines(lines: &[Line]) -> Self {
        let mut ordered: Vec<&Line> = lines.iter().collect();
        ordered.sort_by_key(|line| line.id());

        let mut graph = RouteGraph {
            vertices: Vec::new(),
            indices: HashMap::new(),
            adjacency: Vec::new(),
        };

        for line in ordered {
            for section in line.sections().iter() {
                let Some((upward, downward, distance)) = section.as_real() else {
                    continue;
                };
                let from = graph.intern(upward);
                let to = graph.intern(downward);
                graph.adjacency[from].push(RouteEdge {
                    to,
                    distance,
                    line_id: line.id(),
                    surcharge: line.surcharge(),
                });
                graph.adjacency[to].push(RouteEdge {
                    to: from,
                    distance,
                    line_id: line.id(),
                    surcharge: line.surcharge(),
                });
            }
        }

        debug!(
            vertices = graph.vertices.len(),
            lines = lines.len(),
            "built route graph"
        );
        graph
    }

    fn intern(&mut self, station: &Station) -> usize {
        if let Some(&index) = self.indices.get(station) {
            return index;
        }
        let index = self.vertices.len();
        self.vertices.push(station.clone());
        self.indices.insert(station.clone(), index);
        self.adjacency.push(Vec::new());
        index
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Index of `station`, or `None` if no section registers it.
    pub fn index_of(&self, station: &Station) -> Option<usize> {
        self.indices.get(station).copied()
    }

    /// The station at a vertex index.
    pub fn station(&self, index: usize) -> &Station {
        &self.vertices[index]
    }

    /// Adjacency entries of a vertex, in insertion order.
    pub fn neighbours(&self, index: usize) -> &[RouteEdge] {
        &self.adjacency[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};

    fn station(id: u64, name: &str) -> Station {
        Station::with_id(StationId::new(id), name).unwrap()
    }

    fn line_two(id: u64, name: &str) -> Line {
        Line::with_id(LineId::new(id), name, "초록색").unwrap()
    }

    #[test]
    fn sections_become_undirected_edges() {
        let mut line = line_two(2, "2호선");
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        let graph = RouteGraph::from_lines(&[line]);
        assert_eq!(graph.len(), 2);

        let gyodae = graph.index_of(&station(1, "교대역")).unwrap();
        let gangnam = graph.index_of(&station(2, "강남역")).unwrap();
        assert_eq!(graph.neighbours(gyodae).len(), 1);
        assert_eq!(graph.neighbours(gyodae)[0].to, gangnam);
        assert_eq!(graph.neighbours(gyodae)[0].distance, 20);
        assert_eq!(graph.neighbours(gangnam)[0].to, gyodae);
    }

    #[test]
    fn shared_stations_are_interned_once() {
        let mut green = line_two(2, "2호선");
        green
            .add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();
        let mut orange = line_two(3, "3호선");
        orange
            .add_section(station(1, "교대역"), station(5, "남부터미널역"), 5)
            .unwrap();

        let graph = RouteGraph::from_lines(&[green, orange]);
        assert_eq!(graph.len(), 3);

        let gyodae = graph.index_of(&station(1, "교대역")).unwrap();
        assert_eq!(graph.neighbours(gyodae).len(), 2);
    }

    #[test]
    fn parallel_sections_are_all_kept() {
        let mut green = line_two(2, "2호선");
        green
            .add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();
        let mut red = line_two(9, "9호선");
        red.add_section(station(1, "교대역"), station(2, "강남역"), 3)
            .unwrap();

        let graph = RouteGraph::from_lines(&[green, red]);
        let gyodae = graph.index_of(&station(1, "교대역")).unwrap();

        let distances: Vec<u32> = graph
            .neighbours(gyodae)
            .iter()
            .map(|e| e.distance)
            .collect();
        assert_eq!(distances, vec![20, 3]);
        assert_eq!(graph.neighbours(gyodae)[1].line_id, Some(LineId::new(9)));
    }

    #[test]
    fn numbering_follows_line_id_order() {
        let mut late = line_two(9, "9호선");
        late.add_section(station(6, "양재역"), station(2, "강남역"), 5)
            .unwrap();
        let mut early = line_two(2, "2호선");
        early
            .add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        // Passing the lines in reverse order must not change numbering.
        let graph = RouteGraph::from_lines(&[late.clone(), early.clone()]);
        assert_eq!(graph.station(0), &station(1, "교대역"));
        assert_eq!(graph.station(1), &station(2, "강남역"));
        assert_eq!(graph.station(2), &station(6, "양재역"));

        let swapped = RouteGraph::from_lines(&[early, late]);
        assert_eq!(swapped.station(0), &station(1, "교대역"));
        assert_eq!(swapped.station(1), &station(2, "강남역"));
        assert_eq!(swapped.station(2), &station(6, "양재역"));
    }

    #[test]
    fn empty_lines_contribute_nothing() {
        let line = line_two(2, "2호선");
        let graph = RouteGraph::from_lines(&[line]);
        assert!(graph.is_empty());
        assert_eq!(graph.index_of(&station(1, "교대역")), None);
    }
}
