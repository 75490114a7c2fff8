//! Database entity definitions for the holocron catalog.
//!
//! One module per table. Relationships are declared as one-directional edges:
//! `belongs_to` on the side carrying the foreign key, `has_many` on the other.
//! Reverse lookups go through the foreign-key indexes created by the
//! `migration` crate rather than through back-pointers.

pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;
