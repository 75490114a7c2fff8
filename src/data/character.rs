use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::character::{CharacterChanges, NewCharacter};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// A `homeworld_id` referencing a planet that does not exist surfaces as
    /// a foreign-key error from the store.
    pub async fn create(
        &self,
        character: NewCharacter,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            age: ActiveValue::Set(character.age),
            gender: ActiveValue::Set(character.gender),
            species: ActiveValue::Set(character.species),
            homeworld_id: ActiveValue::Set(character.homeworld_id),
            height: ActiveValue::Set(character.height),
            hostility: ActiveValue::Set(character.hostility),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Get a character by its primary key
    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Get a character together with its homeworld planet, if it has one
    pub async fn get_with_homeworld(
        &self,
        character_id: i32,
    ) -> Result<Option<(entity::character::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .find_also_related(entity::prelude::Planet)
            .one(self.db)
            .await
    }

    /// Get all characters, each with its homeworld planet if it has one
    pub async fn get_all_with_homeworld(
        &self,
    ) -> Result<Vec<(entity::character::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Character::find()
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await
    }

    /// Gets all characters residing on the provided planet
    pub async fn get_many_by_homeworld_id(
        &self,
        planet_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::HomeworldId.eq(planet_id))
            .all(self.db)
            .await
    }

    /// Update a character entry, applying only the changed fields
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Option<`[`entity::character::Model`]`>`: Some if the update is
    ///   successful or None if the character was not found
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn update(
        &self,
        character_id: i32,
        changes: CharacterChanges,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();
        if let Some(name) = changes.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(age) = changes.age {
            character_am.age = ActiveValue::Set(Some(age));
        }
        if let Some(gender) = changes.gender {
            character_am.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(species) = changes.species {
            character_am.species = ActiveValue::Set(species);
        }
        if let Some(homeworld_id) = changes.homeworld_id {
            character_am.homeworld_id = ActiveValue::Set(Some(homeworld_id));
        }
        if let Some(height) = changes.height {
            character_am.height = ActiveValue::Set(Some(height));
        }
        if let Some(hostility) = changes.hostility {
            character_am.hostility = ActiveValue::Set(Some(hostility));
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of the character existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
