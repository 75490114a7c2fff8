use serde::{Deserialize, Serialize};

/// Public view of a character.
///
/// `homeworld_name` is the one computed field in the catalog: it is resolved
/// from the joined planet row when the character has a homeworld, and `null`
/// otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub species: String,
    pub homeworld_id: Option<i32>,
    pub homeworld_name: Option<String>,
    pub height: Option<String>,
    pub hostility: Option<bool>,
}

impl CharacterDto {
    /// Build the public view of a character from its record and the homeworld
    /// row loaded alongside it, if any.
    pub fn from_model(
        character: entity::character::Model,
        homeworld: Option<entity::planet::Model>,
    ) -> Self {
        Self {
            id: character.id,
            name: character.name,
            age: character.age,
            gender: character.gender,
            species: character.species,
            homeworld_id: character.homeworld_id,
            homeworld_name: homeworld.map(|planet| planet.name),
            height: character.height,
            hostility: character.hostility,
        }
    }
}

/// Fields required to create a character.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub species: String,
    pub homeworld_id: Option<i32>,
    pub height: Option<String>,
    pub hostility: Option<bool>,
}

/// Partial update for a character; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CharacterChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub species: Option<String>,
    pub homeworld_id: Option<i32>,
    pub height: Option<String>,
    pub hostility: Option<bool>,
}
