use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260805_000001_planet::Planet;

static IDX_CHARACTER_HOMEWORLD_ID: &str = "idx-character-homeworld_id";
static FK_CHARACTER_HOMEWORLD_ID: &str = "fk-character-homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(integer_null(Character::Age))
                    .col(string_null(Character::Gender))
                    .col(string(Character::Species))
                    .col(integer_null(Character::HomeworldId))
                    .col(string_null(Character::Height))
                    .col(boolean_null(Character::Hostility))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .col(Character::HomeworldId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_HOMEWORLD_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::HomeworldId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Age,
    Gender,
    Species,
    HomeworldId,
    Height,
    Hostility,
}
