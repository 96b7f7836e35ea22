//! Axum middleware stack.

pub mod gate;
pub mod logging;
pub mod zone;
