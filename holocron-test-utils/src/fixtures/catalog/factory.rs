//! Factory functions for generating catalog active models.
//!
//! Provides pure functions for creating user, planet, and character active
//! models with standard test values. These are in-memory instances that don't
//! require database interaction until inserted.

use chrono::Utc;
use sea_orm::ActiveValue;

/// Create a user active model with standard test values.
///
/// # Arguments
/// - `username` - Unique username for the user
/// - `email` - Unique email for the user
pub fn user_active_model(username: &str, email: &str) -> entity::user::ActiveModel {
    entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        email: ActiveValue::Set(email.to_string()),
        full_name: ActiveValue::Set("Test User".to_string()),
        subscription_date: ActiveValue::Set(Utc::now().naive_utc()),
        profile_picture: ActiveValue::Set(None),
        password: ActiveValue::Set("test_password".to_string()),
        is_active: ActiveValue::Set(true),
        ..Default::default()
    }
}

/// Create a planet active model with standard test values.
pub fn planet_active_model(name: &str) -> entity::planet::ActiveModel {
    entity::planet::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        climate: ActiveValue::Set(Some("temperate".to_string())),
        terrain: ActiveValue::Set(None),
        population: ActiveValue::Set(None),
        gravity: ActiveValue::Set(Some("1 standard".to_string())),
        can_a_human_live: ActiveValue::Set(Some(true)),
        ..Default::default()
    }
}

/// Create a character active model with standard test values.
///
/// # Arguments
/// - `name` - Name of the character
/// - `homeworld_id` - Optional planet record ID for the homeworld link
pub fn character_active_model(
    name: &str,
    homeworld_id: Option<i32>,
) -> entity::character::ActiveModel {
    entity::character::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        age: ActiveValue::Set(None),
        gender: ActiveValue::Set(None),
        species: ActiveValue::Set("Human".to_string()),
        homeworld_id: ActiveValue::Set(homeworld_id),
        height: ActiveValue::Set(None),
        hostility: ActiveValue::Set(None),
        ..Default::default()
    }
}
