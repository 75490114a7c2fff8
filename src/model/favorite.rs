use serde::{Deserialize, Serialize};

/// Public view of a favorite-character link. Pass-through projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

impl From<entity::favorite_character::Model> for FavoriteCharacterDto {
    fn from(favorite: entity::favorite_character::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
        }
    }
}

/// Public view of a favorite-planet link. Pass-through projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl From<entity::favorite_planet::Model> for FavoritePlanetDto {
    fn from(favorite: entity::favorite_planet::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
        }
    }
}
