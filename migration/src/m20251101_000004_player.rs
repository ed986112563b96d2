use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_team::Team;

static IDX_PLAYER_TEAM_ID: &str = "idx-player-team_id";
static FK_PLAYER_TEAM_ID: &str = "fk-player-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_len(Player::TeamId, 64))
                    .col(string(Player::Name))
                    .col(string_len(Player::Position, 8))
                    .col(integer_null(Player::ShirtNumber))
                    .col(string_null(Player::Nationality))
                    .col(big_integer(Player::MarketValueEuros).default(0))
                    .col(boolean(Player::IsActive).default(true))
                    .col(timestamp(Player::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TEAM_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
    TeamId,
    Name,
    Position,
    ShirtNumber,
    Nationality,
    MarketValueEuros,
    IsActive,
    CreatedAt,
}
