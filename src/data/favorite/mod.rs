//! Repositories for the favorite join records.
//!
//! Favorites link users to characters and planets through explicit link
//! records. The link carries its own primary key so individual favorites can
//! be addressed and deleted directly. Reverse lookups (favorites of a user,
//! users who favorited a record) run against the foreign-key indexes.

pub mod character;
pub mod planet;
