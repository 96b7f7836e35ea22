//! Request handlers.

pub mod health;
pub mod token;
pub mod zones;
