//! Catalog services.
//!
//! Thin orchestration over the repositories: load records, resolve the
//! relationship joins a projection needs, and hand back DTOs.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
