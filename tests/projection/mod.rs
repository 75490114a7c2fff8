//! Public-view projection coverage across all five record types.

use holocron::{
    model::favorite::FavoriteCharacterDto,
    service::{
        character::CharacterService, favorite::FavoriteService, planet::PlanetService,
        user::UserService,
    },
};
use holocron_test_utils::{
    setup::{seed_character, seed_planet, seed_user},
    test_setup_with_catalog_tables, test_setup_with_tables, TestError, TestSetup,
};

/// Expect the user projection to expose exactly the public fields, never the
/// stored credential or activation flag
#[tokio::test]
async fn test_user_projection_excludes_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_service = UserService::new(&test.db);

    let user = seed_user(&test.db, "luke", "luke@example.com").await?;

    let profile = user_service.get_profile(user.id).await.unwrap().unwrap();

    let value = serde_json::to_value(&profile).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("is_active"));

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();

    assert_eq!(
        keys,
        vec![
            "email",
            "full_name",
            "id",
            "profile_picture",
            "subscription_date",
            "username"
        ]
    );

    Ok(())
}

/// Expect homeworld_name to match the referenced planet's name
#[tokio::test]
async fn test_character_projection_resolves_homeworld_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let character_service = CharacterService::new(&test.db);

    let planet = seed_planet(&test.db, "Dagobah").await?;
    let character = seed_character(&test.db, "Yoda", Some(planet.id)).await?;

    let view = character_service
        .get_public_view(character.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(view.homeworld_id, Some(planet.id));
    assert_eq!(view.homeworld_name, Some("Dagobah".to_string()));

    Ok(())
}

/// Expect homeworld fields to serialize as null when no homeworld is set
#[tokio::test]
async fn test_character_projection_null_homeworld() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let character_service = CharacterService::new(&test.db);

    let character = seed_character(&test.db, "Chewbacca", None).await?;

    let view = character_service
        .get_public_view(character.id)
        .await
        .unwrap()
        .unwrap();

    let value = serde_json::to_value(&view).unwrap();

    assert!(value["homeworld_id"].is_null());
    assert!(value["homeworld_name"].is_null());

    Ok(())
}

/// Expect the planet projection to carry all seven public fields unchanged
#[tokio::test]
async fn test_planet_projection_fields() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_service = PlanetService::new(&test.db);

    let planet = seed_planet(&test.db, "Naboo").await?;

    let view = planet_service
        .get_public_view(planet.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(view.id, planet.id);
    assert_eq!(view.name, "Naboo");
    assert_eq!(view.climate, planet.climate);
    assert_eq!(view.terrain, planet.terrain);
    assert_eq!(view.population, planet.population);
    assert_eq!(view.gravity, planet.gravity);
    assert_eq!(view.can_a_human_live, planet.can_a_human_live);

    Ok(())
}

/// Expect the favorite projection to pass its three scalar fields through
#[tokio::test]
async fn test_favorite_projection_passthrough() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let favorite_service = FavoriteService::new(&test.db);

    let user = seed_user(&test.db, "leia", "leia@example.com").await?;
    let character = seed_character(&test.db, "Han Solo", None).await?;

    let favorite = favorite_service
        .add_favorite_character(user.id, character.id)
        .await
        .unwrap();

    assert_eq!(
        favorite,
        FavoriteCharacterDto {
            id: favorite.id,
            user_id: user.id,
            character_id: character.id,
        }
    );

    Ok(())
}
