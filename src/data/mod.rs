//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! catalog. Repositories provide an abstraction layer over database
//! operations, organized by entity (planets, characters, users, and the
//! favorite join records). They perform no validation and no constraint
//! checking; store errors propagate to the caller untouched.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
