use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Public view of a user.
///
/// Excludes `password` and `is_active`; neither is safe or relevant for
/// external exposure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub subscription_date: NaiveDateTime,
    pub profile_picture: Option<String>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            subscription_date: user.subscription_date,
            profile_picture: user.profile_picture,
        }
    }
}

/// Fields required to create a user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub subscription_date: NaiveDateTime,
    pub profile_picture: Option<String>,
    pub password: String,
    pub is_active: bool,
}

/// Partial update for a user; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub profile_picture: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}
