//! Store adapters and the caching repository
//!
//! - [`RestStore`] - transport to the hosted store's REST API
//! - [`Repository`] - validation and cache invalidation over any store

pub mod repository;
pub mod rest;

pub use repository::Repository;
pub use rest::RestStore;
