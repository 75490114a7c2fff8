//! End-to-end catalog scenario exercised field-for-field.

use holocron::{
    data::{character::CharacterRepository, planet::PlanetRepository},
    model::{character::NewCharacter, planet::NewPlanet},
    service::character::CharacterService,
};
use holocron_test_utils::{test_setup_with_catalog_tables, TestError, TestSetup};
use serde_json::json;

/// Expect the Tatooine/Luke public view to match the documented shape exactly
#[tokio::test]
async fn test_tatooine_luke_public_view() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_repository = PlanetRepository::new(&test.db);
    let character_repository = CharacterRepository::new(&test.db);
    let character_service = CharacterService::new(&test.db);

    let planet = planet_repository
        .create(NewPlanet {
            name: "Tatooine".to_string(),
            climate: Some("arid".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(planet.id, 1);

    let character = character_repository
        .create(NewCharacter {
            name: "Luke".to_string(),
            species: "Human".to_string(),
            homeworld_id: Some(planet.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(character.id, 1);

    let view = character_service
        .get_public_view(character.id)
        .await
        .unwrap()
        .unwrap();

    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(
        value,
        json!({
            "id": 1,
            "name": "Luke",
            "age": null,
            "gender": null,
            "species": "Human",
            "homeworld_id": 1,
            "homeworld_name": "Tatooine",
            "height": null,
            "hostility": null
        })
    );

    Ok(())
}
