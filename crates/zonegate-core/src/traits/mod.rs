//! Collaborator traits defined in `zonegate-core` and implemented by other crates.

pub mod client_store;
pub mod clock;
pub mod lockout;

pub use client_store::{ClientDetails, ClientDetailsStore};
pub use clock::{Clock, FixedClock, SystemClock};
pub use lockout::{LockoutDecision, LockoutPolicy};
