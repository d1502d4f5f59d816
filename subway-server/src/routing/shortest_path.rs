//! Dijkstra over the network graph.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::domain::Station;

use super::NetworkGraph;

/// Error from shortest-route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Departure or destination is not part of any line.
    #[error("station {0} is not part of the network")]
    UnknownStation(Station),

    /// The two stations lie in disconnected parts of the network.
    #[error("no route from {from} to {to}")]
    NoRoute { from: Station, to: Station },
}

/// A minimum-distance route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stations from departure to destination, inclusive.
    pub stations: Vec<Station>,

    /// Sum of segment distances along the route.
    pub total_distance: u64,
}

/// Find a minimum-distance route from `from` to `to`.
///
/// Standard Dijkstra with a binary-heap frontier keyed by accumulated
/// distance; all edge weights are at least 1, so the first settled distance
/// per station is final. Parallel edges are relaxed individually and the
/// smaller weight wins. When several minimum-distance routes exist, any one
/// of them is returned.
pub fn shortest_path(
    graph: &NetworkGraph,
    from: &Station,
    to: &Station,
) -> Result<Route, RouteError> {
    if !graph.contains(from) {
        return Err(RouteError::UnknownStation(from.clone()));
    }
    if !graph.contains(to) {
        return Err(RouteError::UnknownStation(to.clone()));
    }
    if from == to {
        return Ok(Route {
            stations: vec![from.clone()],
            total_distance: 0,
        });
    }

    let mut distances: HashMap<Station, u64> = HashMap::new();
    let mut predecessors: HashMap<Station, Station> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<(u64, Station)>> = BinaryHeap::new();

    distances.insert(from.clone(), 0);
    frontier.push(Reverse((0, from.clone())));

    while let Some(Reverse((distance, station))) = frontier.pop() {
        if station == *to {
            break;
        }
        // Stale frontier entry for an already-settled station
        if distances.get(&station).is_some_and(|best| distance > *best) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&station) {
            let candidate = distance + u64::from(*weight);
            let best = distances.get(neighbor).copied().unwrap_or(u64::MAX);
            if candidate < best {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), station.clone());
                frontier.push(Reverse((candidate, neighbor.clone())));
            }
        }
    }

    let total_distance = distances.get(to).copied().ok_or_else(|| RouteError::NoRoute {
        from: from.clone(),
        to: to.clone(),
    })?;

    let mut stations = vec![to.clone()];
    let mut current = to;
    while let Some(previous) = predecessors.get(current) {
        stations.push(previous.clone());
        current = previous;
    }
    stations.reverse();

    debug!(
        from = %from,
        to = %to,
        total_distance,
        stops = stations.len(),
        "route found"
    );

    Ok(Route {
        stations,
        total_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineName, Segment};

    fn station(name: &str) -> Station {
        Station::new(name).unwrap()
    }

    fn line(name: &str, stops: &[(&str, &str, u32)]) -> Line {
        let mut segments = stops.iter().map(|(up, down, distance)| {
            Segment::new(station(up), station(down), *distance).unwrap()
        });
        let mut line = Line::new(LineName::new(name).unwrap(), segments.next().unwrap());
        for segment in segments {
            let up = segment.upstream().clone();
            line.insert_station(segment.downstream().clone(), Some(&up), None, segment.distance())
                .unwrap();
        }
        line
    }

    fn names(route: &Route) -> Vec<&str> {
        route.stations.iter().map(Station::name).collect()
    }

    #[test]
    fn single_line_path() {
        let lines = [line("Line 2", &[("Gangnam", "Seolleung", 3), ("Seolleung", "Jamsil", 4)])];
        let graph = NetworkGraph::from_lines(&lines);

        let route = shortest_path(&graph, &station("Gangnam"), &station("Jamsil")).unwrap();
        assert_eq!(names(&route), ["Gangnam", "Seolleung", "Jamsil"]);
        assert_eq!(route.total_distance, 7);
    }

    #[test]
    fn direct_parallel_edge_wins_over_longer_path() {
        let lines = [
            line("Line 2", &[("Gangnam", "Seolleung", 3), ("Seolleung", "Jamsil", 4)]),
            line("Express", &[("Gangnam", "Jamsil", 5)]),
        ];
        let graph = NetworkGraph::from_lines(&lines);

        let route = shortest_path(&graph, &station("Gangnam"), &station("Jamsil")).unwrap();
        assert_eq!(names(&route), ["Gangnam", "Jamsil"]);
        assert_eq!(route.total_distance, 5);
    }

    #[test]
    fn transfer_across_lines() {
        let lines = [
            line("Line 2", &[("Gangnam", "Seolleung", 3), ("Seolleung", "Jamsil", 4)]),
            line("Bundang", &[("Seolleung", "Suseo", 6)]),
        ];
        let graph = NetworkGraph::from_lines(&lines);

        let route = shortest_path(&graph, &station("Gangnam"), &station("Suseo")).unwrap();
        assert_eq!(names(&route), ["Gangnam", "Seolleung", "Suseo"]);
        assert_eq!(route.total_distance, 9);
    }

    #[test]
    fn departure_equals_destination() {
        let lines = [line("Line 2", &[("Gangnam", "Jamsil", 5)])];
        let graph = NetworkGraph::from_lines(&lines);

        let route = shortest_path(&graph, &station("Gangnam"), &station("Gangnam")).unwrap();
        assert_eq!(names(&route), ["Gangnam"]);
        assert_eq!(route.total_distance, 0);
    }

    #[test]
    fn unknown_station_is_reported() {
        let lines = [line("Line 2", &[("Gangnam", "Jamsil", 5)])];
        let graph = NetworkGraph::from_lines(&lines);

        assert_eq!(
            shortest_path(&graph, &station("Hongdae"), &station("Jamsil")),
            Err(RouteError::UnknownStation(station("Hongdae")))
        );
        assert_eq!(
            shortest_path(&graph, &station("Gangnam"), &station("Hongdae")),
            Err(RouteError::UnknownStation(station("Hongdae")))
        );
    }

    #[test]
    fn disconnected_network_is_a_typed_error() {
        let lines = [
            line("Line 2", &[("Gangnam", "Jamsil", 5)]),
            line("Airport", &[("Gimpo", "Incheon", 20)]),
        ];
        let graph = NetworkGraph::from_lines(&lines);

        assert_eq!(
            shortest_path(&graph, &station("Gangnam"), &station("Incheon")),
            Err(RouteError::NoRoute {
                from: station("Gangnam"),
                to: station("Incheon"),
            })
        );
    }

    #[test]
    fn picks_the_cheaper_of_two_transfers() {
        // Gangnam - Seolleung - Jamsil (3 + 4) versus
        // Gangnam - Kyodae - Jamsil (2 + 9)
        let lines = [
            line("Line 2", &[("Gangnam", "Seolleung", 3), ("Seolleung", "Jamsil", 4)]),
            line("Line 3", &[("Gangnam", "Kyodae", 2), ("Kyodae", "Jamsil", 9)]),
        ];
        let graph = NetworkGraph::from_lines(&lines);

        let route = shortest_path(&graph, &station("Gangnam"), &station("Jamsil")).unwrap();
        assert_eq!(names(&route), ["Gangnam", "Seolleung", "Jamsil"]);
        assert_eq!(route.total_distance, 7);
    }
}
