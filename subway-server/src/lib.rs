//! Subway network service.
//!
//! Models a transit network of named lines — each an ordered chain of
//! distance-weighted segments — and answers shortest-route and fare
//! queries over the combined network.

pub mod domain;
pub mod fare;
pub mod registry;
pub mod routing;
pub mod service;
pub mod web;
