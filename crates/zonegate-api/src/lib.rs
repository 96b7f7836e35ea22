//! # zonegate-api
//!
//! HTTP API layer for zonegate built on Axum.
//!
//! Resolves the identity zone for each request, runs the authentication
//! gate as middleware in front of protected routes, exposes the zone-aware
//! credential validation endpoints, and maps every error to a JSON response.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod zones;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::{AppState, MemoryCollaborators};
pub use zones::ZoneRegistry;
