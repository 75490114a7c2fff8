use serde::{Deserialize, Serialize};

/// Public view of a planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub gravity: Option<String>,
    pub can_a_human_live: Option<bool>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
            gravity: planet.gravity,
            can_a_human_live: planet.can_a_human_live,
        }
    }
}

/// Fields required to create a planet.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub gravity: Option<String>,
    pub can_a_human_live: Option<bool>,
}

/// Partial update for a planet; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub gravity: Option<String>,
    pub can_a_human_live: Option<bool>,
}
