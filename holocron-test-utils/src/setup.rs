use sea_orm::{
    sea_query::TableCreateStatement, ActiveModelTrait, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::{error::TestError, fixtures::catalog::factory};

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Inserts a user with standard test values and the provided identity
pub async fn seed_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
) -> Result<entity::user::Model, TestError> {
    let user = factory::user_active_model(username, email).insert(db).await?;

    Ok(user)
}

/// Inserts a planet with the provided name
pub async fn seed_planet(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::planet::Model, TestError> {
    let planet = factory::planet_active_model(name).insert(db).await?;

    Ok(planet)
}

/// Inserts a character, optionally linked to a homeworld planet
pub async fn seed_character(
    db: &DatabaseConnection,
    name: &str,
    homeworld_id: Option<i32>,
) -> Result<entity::character::Model, TestError> {
    let character = factory::character_active_model(name, homeworld_id)
        .insert(db)
        .await?;

    Ok(character)
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    // Creates all five catalog tables in dependency order
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
