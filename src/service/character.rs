use sea_orm::DatabaseConnection;

use crate::{
    data::{character::CharacterRepository, planet::PlanetRepository},
    error::Error,
    model::character::CharacterDto,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get the public view of a character
    ///
    /// Resolves `homeworld_name` by following the homeworld relationship when
    /// the character has one.
    ///
    /// # Arguments
    /// - `character_id` (`i32`): The ID of the character entry in the database
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - `Option<`[`CharacterDto`]`>`: Some if the character was found, None otherwise
    /// - [`Error`]: An error if there is an issue with the database
    pub async fn get_public_view(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character_repository = CharacterRepository::new(self.db);

        let character = character_repository.get_with_homeworld(character_id).await?;

        Ok(character.map(|(character, homeworld)| CharacterDto::from_model(character, homeworld)))
    }

    /// Get the public views of all characters in the catalog
    pub async fn list_public_views(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repository = CharacterRepository::new(self.db);

        let characters = character_repository.get_all_with_homeworld().await?;

        Ok(characters
            .into_iter()
            .map(|(character, homeworld)| CharacterDto::from_model(character, homeworld))
            .collect())
    }

    /// Get the public views of all characters residing on the provided planet
    pub async fn list_residents(&self, planet_id: i32) -> Result<Vec<CharacterDto>, Error> {
        let planet_repository = PlanetRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);

        // Every resident shares the same homeworld row, resolve it once
        let planet = planet_repository.get_by_id(planet_id).await?;
        let residents = character_repository.get_many_by_homeworld_id(planet_id).await?;

        Ok(residents
            .into_iter()
            .map(|character| CharacterDto::from_model(character, planet.clone()))
            .collect())
    }
}
