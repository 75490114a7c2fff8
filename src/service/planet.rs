use sea_orm::DatabaseConnection;

use crate::{data::planet::PlanetRepository, error::Error, model::planet::PlanetDto};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get the public view of a planet
    pub async fn get_public_view(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet_repository = PlanetRepository::new(self.db);

        let planet = planet_repository.get_by_id(planet_id).await?;

        Ok(planet.map(PlanetDto::from))
    }

    /// Get the public views of all planets in the catalog
    pub async fn list_public_views(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repository = PlanetRepository::new(self.db);

        let planets = planet_repository.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }
}
