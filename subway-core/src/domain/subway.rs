//! The subway network and its path queries.

use tracing::debug;

use crate::fare::FareCalculator;
use crate::routing::{shortest_route, Route, RouteGraph};

use super::line::Line;
use super::passenger::Passenger;
use super::section::PathSection;
use super::station::Station;
use super::DomainError;

/// The whole network: the union of every line.
///
/// Queries treat the lines as one undirected graph weighted by section
/// distance. The graph is derived from the lines on demand, so a subway
/// never goes stale against the lines it was built from.
///
/// # Examples
///
/// ```
/// use subway_core::domain::{Line, LineId, Station, StationId, Subway};
///
/// let gyodae = Station::with_id(StationId::new(1), "교대역").unwrap();
/// let gangnam = Station::with_id(StationId::new(2), "강남역").unwrap();
/// let mut line = Line::with_id(LineId::new(2), "2호선", "초록색").unwrap();
/// line.add_section(gyodae.clone(), gangnam.clone(), 20).unwrap();
///
/// let subway = Subway::new(vec![line]);
/// assert_eq!(subway.shortest_distance(&gyodae, &gangnam).unwrap(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Subway {
    lines: Vec<Line>,
}

impl Subway {
    pub fn new(lines: Vec<Line>) -> Self {
        Subway { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Station sequence of the shortest path from `start` to `end`,
    /// both inclusive. When `start == end` the path is just `[start]`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStationName`] if either station is
    /// not registered in any section, and [`DomainError::InvalidSection`]
    /// if the two stations are not connected.
    pub fn shortest_path(
        &self,
        start: &Station,
        end: &Station,
    ) -> Result<Vec<Station>, DomainError> {
        let graph = RouteGraph::from_lines(&self.lines);
        let (start_index, route) = self.route_between(&graph, start, end)?;
        Ok(route
            .vertices(start_index)
            .into_iter()
            .map(|vertex| graph.station(vertex).clone())
            .collect())
    }

    /// Total distance of the shortest path from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Subway::shortest_path`].
    pub fn shortest_distance(&self, start: &Station, end: &Station) -> Result<u64, DomainError> {
        let graph = RouteGraph::from_lines(&self.lines);
        let (_, route) = self.route_between(&graph, start, end)?;
        Ok(route.distance)
    }

    /// The shortest path as ridden sections, each annotated with the
    /// line it belongs to. Empty when `start == end`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Subway::shortest_path`].
    pub fn shortest_path_sections(
        &self,
        start: &Station,
        end: &Station,
    ) -> Result<Vec<PathSection>, DomainError> {
        let graph = RouteGraph::from_lines(&self.lines);
        let (_, route) = self.route_between(&graph, start, end)?;
        Ok(route
            .hops
            .iter()
            .map(|hop| {
                PathSection::new(
                    graph.station(hop.from).clone(),
                    graph.station(hop.to).clone(),
                    hop.distance,
                    hop.line_id,
                    hop.surcharge,
                )
            })
            .collect())
    }

    /// Fare for the passenger's trip under the default fare rules.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Subway::shortest_path`] applied to the
    /// passenger's start and end stations.
    pub fn calculate_fare(&self, passenger: &Passenger) -> Result<u64, DomainError> {
        FareCalculator::default().calculate(passenger, self)
    }

    fn route_between(
        &self,
        graph: &RouteGraph,
        start: &Station,
        end: &Station,
    ) -> Result<(usize, Route), DomainError> {
        let start_index = graph.index_of(start).ok_or_else(unregistered_station)?;
        let end_index = graph.index_of(end).ok_or_else(unregistered_station)?;

        let route = shortest_route(graph, start_index, end_index).ok_or_else(|| {
            DomainError::InvalidSection("출발역과 도착역이 연결되어 있지 않습니다.".into())
        })?;

        debug!(
            start = %start.name(),
            end = %end.name(),
            distance = route.distance,
            hops = route.hops.len(),
            "shortest route found"
        );
        Ok((start_index, route))
    }
}

fn unregistered_station() -> DomainError {
    DomainError::InvalidStationName(
        "노선 구간에 등록되지 않은 역 이름을 통해 경로를 조회할 수 없습니다.".into(),
    )
}
