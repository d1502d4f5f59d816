//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::service::{LineOverview, PricedRoute};

/// Request to create a new line with its first segment.
#[derive(Debug, Deserialize)]
pub struct AddLineRequest {
    /// Line name
    pub name: String,

    /// Name of the upstream terminal station
    pub upstream_name: String,

    /// Name of the downstream terminal station
    pub downstream_name: String,

    /// Distance between the two terminals
    pub distance: u32,
}

/// Request to insert a station into a line.
///
/// An omitted or empty neighbor name denotes the line end on that side.
#[derive(Debug, Deserialize)]
pub struct AddStationRequest {
    /// Name of the station to insert (created if unknown)
    pub station_name: String,

    /// Line to insert into
    pub line_name: String,

    /// Upstream neighbor of the new station
    #[serde(default)]
    pub upstream_name: Option<String>,

    /// Downstream neighbor of the new station
    #[serde(default)]
    pub downstream_name: Option<String>,

    /// Distance from the new station to its upstream neighbor
    pub distance_to_upstream: u32,
}

impl AddStationRequest {
    /// Upstream neighbor with the empty-means-line-end convention applied.
    pub fn upstream(&self) -> Option<&str> {
        neighbor(self.upstream_name.as_deref())
    }

    /// Downstream neighbor with the empty-means-line-end convention applied.
    pub fn downstream(&self) -> Option<&str> {
        neighbor(self.downstream_name.as_deref())
    }
}

fn neighbor(name: Option<&str>) -> Option<&str> {
    match name {
        Some(n) if !n.trim().is_empty() => Some(n),
        _ => None,
    }
}

/// Request to remove a station from a line.
#[derive(Debug, Deserialize)]
pub struct DeleteStationRequest {
    /// Line to remove from
    pub line_name: String,

    /// Name of the station to remove
    pub station_name: String,
}

/// Response carrying the id of a created resource.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Assigned id
    pub id: u64,
}

/// A line with its stations in chain order.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    /// Line id
    pub id: u64,

    /// Line name
    pub name: String,

    /// Station names from the upstream to the downstream terminus
    pub stations: Vec<String>,
}

impl LineResponse {
    /// Create from a service-level line overview.
    pub fn from_overview(overview: &LineOverview) -> Self {
        Self {
            id: overview.id,
            name: overview.name.clone(),
            stations: overview.stations.clone(),
        }
    }
}

/// Query parameters for the shortest-route endpoint.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Departure station name
    pub departure: String,

    /// Destination station name
    pub arrival: String,
}

/// A priced shortest route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations from departure to destination, inclusive
    pub stations: Vec<String>,

    /// Total distance along the route
    pub distance: u64,

    /// Fare for that distance
    pub fare: u64,
}

impl RouteResponse {
    /// Create from a service-level priced route.
    pub fn from_route(route: &PricedRoute) -> Self {
        Self {
            stations: route.stations.clone(),
            distance: route.total_distance,
            fare: route.fare,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_station_request_with_neighbors() {
        let req: AddStationRequest = serde_json::from_str(
            r#"{
                "station_name": "Seolleung",
                "line_name": "Line 2",
                "upstream_name": "Gangnam",
                "downstream_name": "Jamsil",
                "distance_to_upstream": 4
            }"#,
        )
        .unwrap();

        assert_eq!(req.upstream(), Some("Gangnam"));
        assert_eq!(req.downstream(), Some("Jamsil"));
        assert_eq!(req.distance_to_upstream, 4);
    }

    #[test]
    fn empty_or_missing_neighbor_means_line_end() {
        let req: AddStationRequest = serde_json::from_str(
            r#"{
                "station_name": "Kyodae",
                "line_name": "Line 2",
                "upstream_name": "",
                "downstream_name": "Gangnam",
                "distance_to_upstream": 3
            }"#,
        )
        .unwrap();
        assert_eq!(req.upstream(), None);
        assert_eq!(req.downstream(), Some("Gangnam"));

        let req: AddStationRequest = serde_json::from_str(
            r#"{
                "station_name": "Jamsil Naru",
                "line_name": "Line 2",
                "upstream_name": "Jamsil",
                "distance_to_upstream": 2
            }"#,
        )
        .unwrap();
        assert_eq!(req.upstream(), Some("Jamsil"));
        assert_eq!(req.downstream(), None);
    }

    #[test]
    fn line_response_from_overview() {
        let overview = LineOverview {
            id: 1,
            name: "Line 2".to_string(),
            stations: vec!["Gangnam".to_string(), "Jamsil".to_string()],
        };
        let response = LineResponse::from_overview(&overview);

        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Line 2");
        assert_eq!(response.stations, ["Gangnam", "Jamsil"]);
    }

    #[test]
    fn route_response_from_route() {
        let route = PricedRoute {
            stations: vec!["Gangnam".to_string(), "Jamsil".to_string()],
            total_distance: 12,
            fare: 1350,
        };
        let response = RouteResponse::from_route(&route);

        assert_eq!(response.stations, ["Gangnam", "Jamsil"]);
        assert_eq!(response.distance, 12);
        assert_eq!(response.fare, 1350);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["fare"], 1350);
    }
}
