//! Web layer for the subway network service.
//!
//! Provides HTTP endpoints over the subway application service.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
