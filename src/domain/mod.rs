//! Core domain layer. No I/O, no UI types.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod policy;

pub use entities::{CommonUserFactory, User, UserFactory};
pub use errors::{DomainError, ValidationError};
pub use policy::PasswordPolicy;
