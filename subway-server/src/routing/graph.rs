//! The derived network graph.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Line, Station};

/// Weighted undirected multigraph over the stations of all lines.
///
/// Vertices are the stations appearing in any line's segments; edges are
/// the union of all segments, weighted by distance. Two lines connecting
/// the same pair of stations contribute two parallel edges. Each edge is
/// stored in both directions for O(1) neighbor lookup.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    adjacency: HashMap<Station, Vec<(Station, u32)>>,
}

impl NetworkGraph {
    /// Build the graph from the given lines.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
        let mut graph = NetworkGraph::default();
        for line in lines {
            for segment in line.segments() {
                graph.add_edge(
                    segment.upstream().clone(),
                    segment.downstream().clone(),
                    segment.distance(),
                );
            }
        }
        trace!(stations = graph.station_count(), "network graph rebuilt");
        graph
    }

    fn add_edge(&mut self, a: Station, b: Station, distance: u32) {
        self.adjacency
            .entry(a.clone())
            .or_default()
            .push((b.clone(), distance));
        self.adjacency.entry(b).or_default().push((a, distance));
    }

    /// True if `station` appears on any line.
    pub fn contains(&self, station: &Station) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Neighbors of `station` with edge weights; empty if unknown.
    pub fn neighbors(&self, station: &Station) -> &[(Station, u32)] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct stations in the graph.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// True if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
