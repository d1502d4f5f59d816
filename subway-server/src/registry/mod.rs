//! Name-keyed collections of lines and stations.

use std::collections::HashMap;

use crate::domain::{Line, LineName, Station};

/// Error returned when registering a line whose name is already taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a line named {0:?} already exists")]
pub struct DuplicateLineName(pub String);

/// All lines of the network, unique by normalized name.
///
/// Uniqueness and lookup both apply [`LineName::normalize`], so "Line 2"
/// and " line 2 " refer to the same line.
#[derive(Debug, Clone, Default)]
pub struct LineRegistry {
    lines: Vec<Line>,
}

impl LineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a line.
    ///
    /// Fails, leaving the registry unchanged, if a line with the same
    /// normalized name already exists.
    pub fn add(&mut self, line: Line) -> Result<(), DuplicateLineName> {
        let key = line.name().normalized();
        if self.lines.iter().any(|l| l.name().normalized() == key) {
            return Err(DuplicateLineName(line.name().as_str().to_string()));
        }
        self.lines.push(line);
        Ok(())
    }

    /// Look up a line by name.
    pub fn get(&self, name: &str) -> Option<&Line> {
        let key = LineName::normalize(name);
        self.lines.iter().find(|l| l.name().normalized() == key)
    }

    /// Look up a line by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Line> {
        let key = LineName::normalize(name);
        self.lines.iter_mut().find(|l| l.name().normalized() == key)
    }

    /// A defensive snapshot of all lines, in registration order.
    pub fn all(&self) -> Vec<Line> {
        self.lines.clone()
    }

    /// Iterate over the lines in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Number of registered lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if no line is registered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// All stations known to the network, keyed by name.
///
/// Stations are never removed: a station dropped from every line keeps its
/// entry here, only its membership in line geometry changes.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: HashMap<String, Station>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a station by name.
    ///
    /// Returns `None` if unknown; the caller decides between reuse and
    /// creation.
    pub fn by_name(&self, name: &str) -> Option<&Station> {
        self.stations.get(name.trim())
    }

    /// Register a station. Registering the same name twice is a no-op.
    pub fn insert(&mut self, station: Station) {
        self.stations
            .entry(station.name().to_string())
            .or_insert(station);
    }

    /// Number of known stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// True if no station is known.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
