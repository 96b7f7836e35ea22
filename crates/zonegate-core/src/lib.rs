//! # zonegate-core
//!
//! Core crate for zonegate. Contains configuration schemas, typed
//! identifiers, credential policy types, the identity zone model, the
//! collaborator traits consumed by the authentication gate, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other zonegate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
