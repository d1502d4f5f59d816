//! HTTP route handlers.

use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::domain::DomainError;
use crate::service::{Subway, SubwayError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lines", get(list_lines).post(create_line))
        .route("/lines/:id", get(find_line))
        .route("/line/stations", post(create_station).delete(delete_station))
        .route("/routes/shortest", get(shortest_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create a new line with its first segment.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<AddLineRequest>,
) -> Result<Response, AppError> {
    let mut subway = write_state(&state)?;
    let id = subway.add_line(&req.name, &req.upstream_name, &req.downstream_name, req.distance)?;
    Ok(created(format!("/lines/{id}"), id))
}

/// List all lines with their stations in order.
async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, AppError> {
    let subway = read_state(&state)?;
    let lines = subway
        .lines()
        .iter()
        .map(LineResponse::from_overview)
        .collect();
    Ok(Json(lines))
}

/// Find a line by id.
async fn find_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LineResponse>, AppError> {
    let subway = read_state(&state)?;
    let overview = subway.line_by_id(id)?;
    Ok(Json(LineResponse::from_overview(&overview)))
}

/// Insert a station into a line.
async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<AddStationRequest>,
) -> Result<Response, AppError> {
    let mut subway = write_state(&state)?;
    let id = subway.add_station(
        &req.line_name,
        &req.station_name,
        req.upstream(),
        req.downstream(),
        req.distance_to_upstream,
    )?;
    Ok(created(format!("/line/stations/{id}"), id))
}

/// Remove a station from a line.
async fn delete_station(
    State(state): State<AppState>,
    Json(req): Json<DeleteStationRequest>,
) -> Result<StatusCode, AppError> {
    let mut subway = write_state(&state)?;
    subway.remove_station(&req.line_name, &req.station_name)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Shortest route between two stations, with its fare.
async fn shortest_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let subway = read_state(&state)?;
    let route = subway.shortest_route(&query.departure, &query.arrival)?;
    Ok(Json(RouteResponse::from_route(&route)))
}

/// 201 response with a Location header and the assigned id.
fn created(location: String, id: u64) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedResponse { id }),
    )
        .into_response()
}

fn read_state(state: &AppState) -> Result<RwLockReadGuard<'_, Subway>, AppError> {
    state.subway.read().map_err(|_| AppError::Internal {
        message: "state lock poisoned".to_string(),
    })
}

fn write_state(state: &AppState) -> Result<RwLockWriteGuard<'_, Subway>, AppError> {
    state.subway.write().map_err(|_| AppError::Internal {
        message: "state lock poisoned".to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<SubwayError> for AppError {
    fn from(e: SubwayError) -> Self {
        let message = e.to_string();
        match e {
            SubwayError::LineNotFound(_)
            | SubwayError::LineIdNotFound(_)
            | SubwayError::StationNotFound(_)
            | SubwayError::Route(_) => AppError::NotFound { message },
            SubwayError::DuplicateLine(_) => AppError::Conflict { message },
            SubwayError::Domain(
                DomainError::InsertionPointNotFound { .. } | DomainError::NotOnLine(_),
            ) => AppError::NotFound { message },
            SubwayError::Domain(_) | SubwayError::StationName(_) | SubwayError::LineName(_) => {
                AppError::BadRequest { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use crate::routing::RouteError;

    fn state_with_line() -> AppState {
        let mut subway = Subway::new();
        subway.add_line("Line 2", "Gangnam", "Jamsil", 10).unwrap();
        AppState::new(subway)
    }

    #[test]
    fn error_mapping_per_category() {
        // Lookup errors are 404
        let err = AppError::from(SubwayError::LineNotFound("Bundang".to_string()));
        assert!(matches!(err, AppError::NotFound { .. }));

        let err = AppError::from(SubwayError::Route(RouteError::NoRoute {
            from: Station::new("Gangnam").unwrap(),
            to: Station::new("Incheon").unwrap(),
        }));
        assert!(matches!(err, AppError::NotFound { .. }));

        let err = AppError::from(SubwayError::Domain(DomainError::InsertionPointNotFound {
            upstream: "Gangnam".to_string(),
            downstream: "Jamsil".to_string(),
        }));
        assert!(matches!(err, AppError::NotFound { .. }));

        // Duplicates are 409
        let err = AppError::from(SubwayError::DuplicateLine(
            crate::registry::DuplicateLineName("Line 2".to_string()),
        ));
        assert!(matches!(err, AppError::Conflict { .. }));

        // Validation and structural failures are 400
        let err = AppError::from(SubwayError::Domain(DomainError::InvalidDistance { got: 0 }));
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = AppError::from(SubwayError::Domain(DomainError::LastSegment));
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn create_station_returns_created_with_location() {
        let state = state_with_line();
        let req = AddStationRequest {
            station_name: "Seolleung".to_string(),
            line_name: "Line 2".to_string(),
            upstream_name: Some("Gangnam".to_string()),
            downstream_name: Some("Jamsil".to_string()),
            distance_to_upstream: 4,
        };

        let response = create_station(State(state), Json(req)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert!(location.starts_with("/line/stations/"));
    }

    #[tokio::test]
    async fn delete_station_returns_no_content() {
        let state = state_with_line();
        let insert = AddStationRequest {
            station_name: "Seolleung".to_string(),
            line_name: "Line 2".to_string(),
            upstream_name: Some("Gangnam".to_string()),
            downstream_name: Some("Jamsil".to_string()),
            distance_to_upstream: 4,
        };
        create_station(State(state.clone()), Json(insert)).await.unwrap();

        let req = DeleteStationRequest {
            line_name: "Line 2".to_string(),
            station_name: "Seolleung".to_string(),
        };
        let status = delete_station(State(state), Json(req)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn shortest_route_handler() {
        let state = state_with_line();
        let query = RouteQuery {
            departure: "Gangnam".to_string(),
            arrival: "Jamsil".to_string(),
        };

        let Json(response) = shortest_route(State(state), Query(query)).await.unwrap();
        assert_eq!(response.stations, ["Gangnam", "Jamsil"]);
        assert_eq!(response.distance, 10);
        assert_eq!(response.fare, 1250);
    }

    #[tokio::test]
    async fn find_line_handler() {
        let state = state_with_line();
        let Json(response) = find_line(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(response.name, "Line 2");
        assert_eq!(response.stations, ["Gangnam", "Jamsil"]);

        assert!(find_line(State(state), Path(42)).await.is_err());
    }
}
