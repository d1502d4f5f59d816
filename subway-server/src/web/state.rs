//! Application state for the web layer.

use std::sync::{Arc, RwLock};

use crate::service::Subway;

/// Shared application state.
///
/// All handlers go through the one lock; mutations take it for writing,
/// which serializes topology changes the way the core expects (each
/// mutation runs to completion before the next is observed).
#[derive(Clone)]
pub struct AppState {
    pub subway: Arc<RwLock<Subway>>,
}

impl AppState {
    /// Create a new app state around a subway network.
    pub fn new(subway: Subway) -> Self {
        Self {
            subway: Arc::new(RwLock::new(subway)),
        }
    }
}
