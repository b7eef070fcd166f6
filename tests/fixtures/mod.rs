//! Test fixtures for line-locate.
//!
//! Provides a real Washington DC route (coordinates from OpenStreetMap)
//! shared across the integration tests.

pub mod washington_route;

pub use washington_route::*;
