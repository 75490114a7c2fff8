use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::Error, model::user::UserDto};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get the public view of a user
    ///
    /// The projection drops the stored credential and activation flag.
    ///
    /// # Arguments
    /// - `user_id` (`i32`): The ID of the user entry in the database
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - `Option<`[`UserDto`]`>`: Some if the user was found, None otherwise
    /// - [`Error`]: An error if there is an issue with the database
    pub async fn get_profile(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository.get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Get the public view of a user by their unique username
    pub async fn get_profile_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserDto>, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository.get_by_username(username).await?;

        Ok(user.map(UserDto::from))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::{data::user::UserRepository, model::user::NewUser};

    async fn setup() -> Result<(DatabaseConnection, entity::user::Model), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        let schema = Schema::new(DbBackend::Sqlite);
        let stmt = schema.create_table_from_entity(entity::prelude::User);

        db.execute(&stmt).await?;

        let user_repository = UserRepository::new(&db);
        let user = user_repository
            .create(NewUser {
                username: "luke".to_string(),
                email: "luke@example.com".to_string(),
                full_name: "Luke Skywalker".to_string(),
                subscription_date: Utc::now().naive_utc(),
                profile_picture: None,
                password: "hunter2".to_string(),
                is_active: true,
            })
            .await?;

        Ok((db, user))
    }

    mod get_profile_tests {
        use sea_orm::DbErr;

        use crate::service::user::{tests::setup, UserService};

        /// Expect Some with the projected fields when the user exists
        #[tokio::test]
        async fn test_get_profile_some() -> Result<(), DbErr> {
            let (db, user) = setup().await?;
            let user_service = UserService::new(&db);

            let result = user_service.get_profile(user.id).await;

            assert!(result.is_ok());
            let maybe_profile = result.unwrap();

            assert!(maybe_profile.is_some());
            let profile = maybe_profile.unwrap();

            assert_eq!(profile.id, user.id);
            assert_eq!(profile.username, "luke");
            assert_eq!(profile.full_name, "Luke Skywalker");

            Ok(())
        }

        /// Expect None when the user does not exist
        #[tokio::test]
        async fn test_get_profile_none() -> Result<(), DbErr> {
            let (db, user) = setup().await?;
            let user_service = UserService::new(&db);

            let result = user_service.get_profile(user.id + 1).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_none());

            Ok(())
        }

        /// Expect the serialized profile to never contain the password field
        #[tokio::test]
        async fn test_get_profile_excludes_password() -> Result<(), DbErr> {
            let (db, user) = setup().await?;
            let user_service = UserService::new(&db);

            let profile = user_service.get_profile(user.id).await.unwrap().unwrap();

            let value = serde_json::to_value(&profile).unwrap();
            let object = value.as_object().unwrap();

            assert!(!object.contains_key("password"));
            assert!(!object.contains_key("is_active"));

            Ok(())
        }
    }

    mod get_profile_by_username_tests {
        use sea_orm::DbErr;

        use crate::service::user::{tests::setup, UserService};

        /// Expect Some when a user with the username exists
        #[tokio::test]
        async fn test_get_profile_by_username_some() -> Result<(), DbErr> {
            let (db, user) = setup().await?;
            let user_service = UserService::new(&db);

            let result = user_service.get_profile_by_username("luke").await;

            assert!(result.is_ok());
            let maybe_profile = result.unwrap();

            assert_eq!(maybe_profile.map(|p| p.id), Some(user.id));

            Ok(())
        }

        /// Expect None when no user with the username exists
        #[tokio::test]
        async fn test_get_profile_by_username_none() -> Result<(), DbErr> {
            let (db, _) = setup().await?;
            let user_service = UserService::new(&db);

            let result = user_service.get_profile_by_username("leia").await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_none());

            Ok(())
        }
    }
}
