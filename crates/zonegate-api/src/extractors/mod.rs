//! Custom Axum extractors.

pub mod client;

pub use client::GatedClient;
