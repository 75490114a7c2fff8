use sea_orm::{DatabaseConnection, DeleteResult};

use crate::{
    data::favorite::{character::FavoriteCharacterRepository, planet::FavoritePlanetRepository},
    error::Error,
    model::favorite::{FavoriteCharacterDto, FavoritePlanetDto},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record a character as a favorite of a user
    ///
    /// The schema does not enforce uniqueness on the pair, so repeat calls
    /// insert additional link records; a warning is logged when that happens.
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        let favorite_repository = FavoriteCharacterRepository::new(self.db);

        let existing = favorite_repository
            .get_by_user_and_character(user_id, character_id)
            .await?;

        if existing.is_some() {
            tracing::warn!(
                "user {} already favorited character {}; inserting duplicate favorite entry",
                user_id,
                character_id
            );
        }

        let favorite = favorite_repository.create(user_id, character_id).await?;

        Ok(FavoriteCharacterDto::from(favorite))
    }

    /// Record a planet as a favorite of a user
    ///
    /// Same duplicate behavior as [`Self::add_favorite_character`].
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        let favorite_repository = FavoritePlanetRepository::new(self.db);

        let existing = favorite_repository
            .get_by_user_and_planet(user_id, planet_id)
            .await?;

        if existing.is_some() {
            tracing::warn!(
                "user {} already favorited planet {}; inserting duplicate favorite entry",
                user_id,
                planet_id
            );
        }

        let favorite = favorite_repository.create(user_id, planet_id).await?;

        Ok(FavoritePlanetDto::from(favorite))
    }

    /// Get the public views of all characters favorited by a user
    pub async fn list_favorite_characters(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteCharacterDto>, Error> {
        let favorite_repository = FavoriteCharacterRepository::new(self.db);

        let favorites = favorite_repository.get_many_by_user_id(user_id).await?;

        Ok(favorites.into_iter().map(FavoriteCharacterDto::from).collect())
    }

    /// Get the public views of all planets favorited by a user
    pub async fn list_favorite_planets(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoritePlanetDto>, Error> {
        let favorite_repository = FavoritePlanetRepository::new(self.db);

        let favorites = favorite_repository.get_many_by_user_id(user_id).await?;

        Ok(favorites.into_iter().map(FavoritePlanetDto::from).collect())
    }

    /// Remove a favorite character entry by its ID
    pub async fn remove_favorite_character(&self, favorite_id: i32) -> Result<DeleteResult, Error> {
        let favorite_repository = FavoriteCharacterRepository::new(self.db);

        Ok(favorite_repository.delete(favorite_id).await?)
    }

    /// Remove a favorite planet entry by its ID
    pub async fn remove_favorite_planet(&self, favorite_id: i32) -> Result<DeleteResult, Error> {
        let favorite_repository = FavoritePlanetRepository::new(self.db);

        Ok(favorite_repository.delete(favorite_id).await?)
    }
}
