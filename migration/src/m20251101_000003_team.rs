use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_competition::Competition;

static IDX_TEAM_COMPETITION_ID: &str = "idx-team-competition_id";
static FK_TEAM_COMPETITION_ID: &str = "fk-team-competition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(string_len(Team::Id, 64).primary_key())
                    .col(string_len(Team::CompetitionId, 64))
                    .col(string(Team::Name))
                    .col(string_len(Team::ShortName, 8))
                    .col(string_null(Team::LogoUrl))
                    .col(string(Team::Country))
                    .col(string_len_null(Team::PrimaryColor, 16))
                    .col(string_len_null(Team::SecondaryColor, 16))
                    .col(boolean(Team::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_COMPETITION_ID)
                    .table(Team::Table)
                    .col(Team::CompetitionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_COMPETITION_ID)
                    .from_tbl(Team::Table)
                    .from_col(Team::CompetitionId)
                    .to_tbl(Competition::Table)
                    .to_col(Competition::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_COMPETITION_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_COMPETITION_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    CompetitionId,
    Name,
    ShortName,
    LogoUrl,
    Country,
    PrimaryColor,
    SecondaryColor,
    IsActive,
}
