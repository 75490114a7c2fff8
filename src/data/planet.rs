use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::planet::{NewPlanet, PlanetChanges};

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, planet: NewPlanet) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            population: ActiveValue::Set(planet.population),
            gravity: ActiveValue::Set(planet.gravity),
            can_a_human_live: ActiveValue::Set(planet.can_a_human_live),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Get a planet by its primary key
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Get all planets in the catalog
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find().all(self.db).await
    }

    /// Update a planet entry, applying only the changed fields
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Option<`[`entity::planet::Model`]`>`: Some if the update is
    ///   successful or None if the planet was not found
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn update(
        &self,
        planet_id: i32,
        changes: PlanetChanges,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        if let Some(name) = changes.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(climate) = changes.climate {
            planet_am.climate = ActiveValue::Set(Some(climate));
        }
        if let Some(terrain) = changes.terrain {
            planet_am.terrain = ActiveValue::Set(Some(terrain));
        }
        if let Some(population) = changes.population {
            planet_am.population = ActiveValue::Set(Some(population));
        }
        if let Some(gravity) = changes.gravity {
            planet_am.gravity = ActiveValue::Set(Some(gravity));
        }
        if let Some(can_a_human_live) = changes.can_a_human_live {
            planet_am.can_a_human_live = ActiveValue::Set(Some(can_a_human_live));
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of the planet existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
