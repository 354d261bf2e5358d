//! Adapters around the use cases.
//!
//! Persistence implements the data-access ports; presentation holds the
//! controllers, presenters and view models; ui is the terminal front end.

pub mod persistence;
pub mod presentation;
pub mod ui;
