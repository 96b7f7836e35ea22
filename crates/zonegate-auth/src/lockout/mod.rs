//! Lockout collaborators.

pub mod memory;

pub use memory::MemoryLockoutPolicy;
