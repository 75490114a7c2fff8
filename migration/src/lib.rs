pub use sea_orm_migration::prelude::*;

mod m20260805_000001_planet;
mod m20260805_000002_character;
mod m20260805_000003_user;
mod m20260805_000004_favorite_character;
mod m20260805_000005_favorite_planet;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260805_000001_planet::Migration),
            Box::new(m20260805_000002_character::Migration),
            Box::new(m20260805_000003_user::Migration),
            Box::new(m20260805_000004_favorite_character::Migration),
            Box::new(m20260805_000005_favorite_planet::Migration),
        ]
    }
}
