use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::user::{NewUser, UserChanges};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// A duplicate username or email surfaces as a unique-constraint error
    /// from the store.
    pub async fn create(&self, user: NewUser) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            full_name: ActiveValue::Set(user.full_name),
            subscription_date: ActiveValue::Set(user.subscription_date),
            profile_picture: ActiveValue::Set(user.profile_picture),
            password: ActiveValue::Set(user.password),
            is_active: ActiveValue::Set(user.is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Get a user by its primary key
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Get a user by their unique username
    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Update a user entry, applying only the changed fields
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Option<`[`entity::user::Model`]`>`: Some if the update is successful
    ///   or None if the user was not found
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn update(
        &self,
        user_id: i32,
        changes: UserChanges,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(username) = changes.username {
            user_am.username = ActiveValue::Set(username);
        }
        if let Some(email) = changes.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(full_name) = changes.full_name {
            user_am.full_name = ActiveValue::Set(full_name);
        }
        if let Some(profile_picture) = changes.profile_picture {
            user_am.profile_picture = ActiveValue::Set(Some(profile_picture));
        }
        if let Some(password) = changes.password {
            user_am.password = ActiveValue::Set(password);
        }
        if let Some(is_active) = changes.is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
