//! Cross-cutting helpers shared by the binary and the adapters.

pub mod config;
