//! Application service tying the domain, registries, routing and fares
//! together.
//!
//! `Subway` plays the role the core model does not: it resolves plain name
//! strings to domain objects, assigns numeric identifiers, and serializes
//! results back to plain values. The core never sees an id.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{
    DomainError, InvalidLineName, InvalidStationName, Line, LineName, Segment, Station,
};
use crate::fare::FarePolicy;
use crate::registry::{DuplicateLineName, LineRegistry, StationRegistry};
use crate::routing::{NetworkGraph, RouteError, shortest_path};

/// Error surfaced by subway operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubwayError {
    /// Invalid station name in a request
    #[error(transparent)]
    StationName(#[from] InvalidStationName),

    /// Invalid line name in a request
    #[error(transparent)]
    LineName(#[from] InvalidLineName),

    /// Validation or structural failure in the domain model
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Line name collision on registration
    #[error(transparent)]
    DuplicateLine(#[from] DuplicateLineName),

    /// Route query failure
    #[error(transparent)]
    Route(#[from] RouteError),

    /// No line with the given name
    #[error("no line named {0:?}")]
    LineNotFound(String),

    /// No line with the given id
    #[error("no line with id {0}")]
    LineIdNotFound(u64),

    /// No station with the given name
    #[error("no station named {0:?}")]
    StationNotFound(String),
}

/// A line with its stations in chain order, for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOverview {
    pub id: u64,
    pub name: String,
    pub stations: Vec<String>,
}

/// A priced shortest route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedRoute {
    pub stations: Vec<String>,
    pub total_distance: u64,
    pub fare: u64,
}

/// The subway network with its surrounding bookkeeping.
///
/// Owns the registries and the id tables. Ids are monotonically increasing
/// and stable: a station keeps its id even when removed from every line
/// (stations are never deleted from the network).
#[derive(Debug, Clone)]
pub struct Subway {
    lines: LineRegistry,
    stations: StationRegistry,
    policy: FarePolicy,
    /// Line id by normalized line name.
    line_ids: HashMap<String, u64>,
    /// Station id by station name.
    station_ids: HashMap<String, u64>,
    next_line_id: u64,
    next_station_id: u64,
}

impl Subway {
    /// Create an empty network with the default fare policy.
    pub fn new() -> Self {
        Self::with_policy(FarePolicy::default())
    }

    /// Create an empty network with a custom fare policy.
    pub fn with_policy(policy: FarePolicy) -> Self {
        Self {
            lines: LineRegistry::new(),
            stations: StationRegistry::new(),
            policy,
            line_ids: HashMap::new(),
            station_ids: HashMap::new(),
            next_line_id: 1,
            next_station_id: 1,
        }
    }

    /// Create a new line with one segment between two stations, creating
    /// the stations as needed. Returns the line id.
    pub fn add_line(
        &mut self,
        name: &str,
        upstream_name: &str,
        downstream_name: &str,
        distance: u32,
    ) -> Result<u64, SubwayError> {
        let line_name = LineName::new(name)?;
        let upstream = self.lookup_or_create(upstream_name)?;
        let downstream = self.lookup_or_create(downstream_name)?;
        let segment = Segment::new(upstream.clone(), downstream.clone(), distance)?;

        // Register the line before the stations so a duplicate name leaves
        // no trace.
        let key = line_name.normalized();
        self.lines.add(Line::new(line_name, segment))?;
        self.register_station(upstream);
        self.register_station(downstream);

        let id = self.next_line_id;
        self.next_line_id += 1;
        self.line_ids.insert(key, id);

        debug!(line = name, id, "line created");
        Ok(id)
    }

    /// Insert a station into a line.
    ///
    /// `upstream_name` / `downstream_name` of `None` denote the line end on
    /// that side. Named neighbors must already exist; the inserted station
    /// is reused if known and created otherwise. Returns the station id.
    pub fn add_station(
        &mut self,
        line_name: &str,
        station_name: &str,
        upstream_name: Option<&str>,
        downstream_name: Option<&str>,
        distance: u32,
    ) -> Result<u64, SubwayError> {
        let station = self.lookup_or_create(station_name)?;
        let upstream = self.resolve_neighbor(upstream_name)?;
        let downstream = self.resolve_neighbor(downstream_name)?;

        let line = self
            .lines
            .get_mut(line_name)
            .ok_or_else(|| SubwayError::LineNotFound(line_name.to_string()))?;
        line.insert_station(
            station.clone(),
            upstream.as_ref(),
            downstream.as_ref(),
            distance,
        )?;

        // Only a successful insertion registers a brand-new station.
        Ok(self.register_station(station))
    }

    /// Remove a station from a line.
    ///
    /// The station's registry entry and id survive; only the line geometry
    /// changes.
    pub fn remove_station(&mut self, line_name: &str, station_name: &str) -> Result<(), SubwayError> {
        let station = self
            .stations
            .by_name(station_name)
            .cloned()
            .ok_or_else(|| SubwayError::StationNotFound(station_name.to_string()))?;
        let line = self
            .lines
            .get_mut(line_name)
            .ok_or_else(|| SubwayError::LineNotFound(line_name.to_string()))?;
        line.remove_station(&station)?;
        Ok(())
    }

    /// A line by its id, with stations in chain order.
    pub fn line_by_id(&self, id: u64) -> Result<LineOverview, SubwayError> {
        self.lines
            .iter()
            .find(|line| self.line_id_of(line) == Some(id))
            .map(|line| self.overview(line, id))
            .ok_or(SubwayError::LineIdNotFound(id))
    }

    /// All lines, in creation order.
    pub fn lines(&self) -> Vec<LineOverview> {
        self.lines
            .iter()
            .filter_map(|line| self.line_id_of(line).map(|id| self.overview(line, id)))
            .collect()
    }

    /// Minimum-distance route between two named stations, with its fare.
    ///
    /// The graph is rebuilt from the current lines on every call.
    pub fn shortest_route(
        &self,
        departure_name: &str,
        destination_name: &str,
    ) -> Result<PricedRoute, SubwayError> {
        let from = self
            .stations
            .by_name(departure_name)
            .cloned()
            .ok_or_else(|| SubwayError::StationNotFound(departure_name.to_string()))?;
        let to = self
            .stations
            .by_name(destination_name)
            .cloned()
            .ok_or_else(|| SubwayError::StationNotFound(destination_name.to_string()))?;

        let graph = NetworkGraph::from_lines(self.lines.iter());
        let route = shortest_path(&graph, &from, &to)?;
        let fare = self.policy.fare(route.total_distance);

        Ok(PricedRoute {
            stations: route
                .stations
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
            total_distance: route.total_distance,
            fare,
        })
    }

    /// Fare for an arbitrary distance under this network's policy.
    pub fn fare(&self, distance: u64) -> u64 {
        self.policy.fare(distance)
    }

    fn lookup_or_create(&self, name: &str) -> Result<Station, SubwayError> {
        match self.stations.by_name(name) {
            Some(station) => Ok(station.clone()),
            None => Ok(Station::new(name)?),
        }
    }

    fn resolve_neighbor(&self, name: Option<&str>) -> Result<Option<Station>, SubwayError> {
        match name {
            None => Ok(None),
            Some(n) => {
                let station = self
                    .stations
                    .by_name(n)
                    .cloned()
                    .ok_or_else(|| SubwayError::StationNotFound(n.to_string()))?;
                Ok(Some(station))
            }
        }
    }

    fn register_station(&mut self, station: Station) -> u64 {
        if let Some(id) = self.station_ids.get(station.name()) {
            return *id;
        }
        let id = self.next_station_id;
        self.next_station_id += 1;
        self.station_ids.insert(station.name().to_string(), id);
        self.stations.insert(station);
        id
    }

    fn line_id_of(&self, line: &Line) -> Option<u64> {
        self.line_ids.get(&line.name().normalized()).copied()
    }

    fn overview(&self, line: &Line, id: u64) -> LineOverview {
        LineOverview {
            id,
            name: line.name().as_str().to_string(),
            stations: line
                .stations_in_order()
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
        }
    }
}

impl Default for Subway {
    fn default() -> Self {
        Self::new()
    }
}
