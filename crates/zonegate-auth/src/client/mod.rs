//! Client record stores.

pub mod memory;

pub use memory::MemoryClientStore;
