//! Store-level constraint behavior: uniqueness, referential integrity, and
//! the deliberate absence of a duplicate-favorite constraint.

use chrono::Utc;
use holocron::{
    data::{
        character::CharacterRepository, favorite::character::FavoriteCharacterRepository,
        planet::PlanetRepository, user::UserRepository,
    },
    model::{character::NewCharacter, user::NewUser},
};
use holocron_test_utils::{
    setup::{seed_character, seed_planet, seed_user},
    test_setup_with_catalog_tables, TestError, TestSetup,
};
use sea_orm::{DbErr, EntityTrait, RuntimeErr};

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        full_name: "Test User".to_string(),
        subscription_date: Utc::now().naive_utc(),
        profile_picture: None,
        password: "test_password".to_string(),
        is_active: true,
    }
}

/// Expect a duplicate username to surface as a store-level unique violation
#[tokio::test]
async fn test_duplicate_username_rejected() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_repository = UserRepository::new(&test.db);

    let _ = user_repository
        .create(new_user("luke", "luke@example.com"))
        .await?;
    let result = user_repository
        .create(new_user("luke", "other@example.com"))
        .await;

    assert!(result.is_err());

    // Assert error code is 2067 indicating a unique constraint error
    assert!(matches!(
        result,
        Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
            .as_database_error()
            .and_then(|d| d.code().map(|c| c == "2067"))
            .unwrap_or(false)
    ));

    Ok(())
}

/// Expect two users with distinct usernames and emails to both insert
#[tokio::test]
async fn test_distinct_users_accepted() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_repository = UserRepository::new(&test.db);

    let first = user_repository
        .create(new_user("luke", "luke@example.com"))
        .await;
    let second = user_repository
        .create(new_user("leia", "leia@example.com"))
        .await;

    assert!(first.is_ok());
    assert!(second.is_ok());

    Ok(())
}

/// Expect a dangling homeworld reference to surface as a foreign-key violation
#[tokio::test]
async fn test_dangling_homeworld_rejected() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let character_repository = CharacterRepository::new(&test.db);

    // No planets exist yet, any homeworld_id is dangling
    let result = character_repository
        .create(NewCharacter {
            name: "Luke".to_string(),
            species: "Human".to_string(),
            homeworld_id: Some(1),
            ..Default::default()
        })
        .await;

    assert!(result.is_err());

    // Assert error code is 787 indicating a foreign key constraint error
    assert!(matches!(
        result,
        Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
            .as_database_error()
            .and_then(|d| d.code().map(|c| c == "787"))
            .unwrap_or(false)
    ));

    Ok(())
}

/// Expect two identical (user_id, character_id) favorites to both insert,
/// the schema enforces no uniqueness on the pair
#[tokio::test]
async fn test_duplicate_favorites_accepted() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let favorite_repository = FavoriteCharacterRepository::new(&test.db);

    let user = seed_user(&test.db, "luke", "luke@example.com").await?;
    let character = seed_character(&test.db, "Han Solo", None).await?;

    let first = favorite_repository.create(user.id, character.id).await;
    let second = favorite_repository.create(user.id, character.id).await;

    assert!(first.is_ok());
    assert!(second.is_ok());

    let favorites = favorite_repository.get_many_by_user_id(user.id).await?;

    assert_eq!(favorites.len(), 2);

    Ok(())
}

/// Expect a user's favorite entries to be removed when the user is deleted
#[tokio::test]
async fn test_delete_user_cascades_favorites() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_repository = UserRepository::new(&test.db);
    let favorite_repository = FavoriteCharacterRepository::new(&test.db);

    let user = seed_user(&test.db, "luke", "luke@example.com").await?;
    let character = seed_character(&test.db, "Han Solo", None).await?;

    let _ = favorite_repository.create(user.id, character.id).await?;

    let delete_result = user_repository.delete(user.id).await?;

    assert_eq!(delete_result.rows_affected, 1);

    let favorites = favorite_repository.get_many_by_user_id(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}

/// Expect residents' homeworld references to be nulled when the planet is deleted
#[tokio::test]
async fn test_delete_planet_nulls_homeworld() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_repository = PlanetRepository::new(&test.db);

    let planet = seed_planet(&test.db, "Alderaan").await?;
    let character = seed_character(&test.db, "Leia", Some(planet.id)).await?;

    let delete_result = planet_repository.delete(planet.id).await?;

    assert_eq!(delete_result.rows_affected, 1);

    let character = entity::prelude::Character::find_by_id(character.id)
        .one(&test.db)
        .await?
        .unwrap();

    assert!(character.homeworld_id.is_none());

    Ok(())
}
