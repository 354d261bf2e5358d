//! account-desk: sign-up, login, logout and password change, layered as
//! entities, use-case interactors, boundaries, presenters and view models.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
