//! Persistence adapters. Implement the data-access ports.

pub mod in_memory;

pub use in_memory::InMemoryUserDataAccess;
