//! Catalog entity fixture utilities.

pub mod factory;
