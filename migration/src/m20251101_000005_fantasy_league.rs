use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000002_competition::Competition};

static IDX_FANTASY_LEAGUE_CREATOR_ID: &str = "idx-fantasy_league-creator_id";
static IDX_FANTASY_LEAGUE_TYPE_STATUS: &str = "idx-fantasy_league-league_type-status";
static FK_FANTASY_LEAGUE_CREATOR_ID: &str = "fk-fantasy_league-creator_id";
static FK_FANTASY_LEAGUE_COMPETITION_ID: &str = "fk-fantasy_league-competition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyLeague::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyLeague::Id))
                    .col(string(FantasyLeague::Name))
                    .col(text_null(FantasyLeague::Description))
                    .col(integer(FantasyLeague::CreatorId))
                    .col(string_len(FantasyLeague::CompetitionId, 64))
                    .col(string_len(FantasyLeague::LeagueType, 16))
                    .col(string_len(FantasyLeague::Status, 16))
                    .col(string_len(FantasyLeague::SelectionMethod, 16))
                    .col(integer(FantasyLeague::MaxMembers))
                    .col(integer(FantasyLeague::CurrentMembers).default(0))
                    .col(big_integer(FantasyLeague::BudgetLimit))
                    .col(big_integer(FantasyLeague::EntryFee).default(0))
                    .col(big_integer(FantasyLeague::PrizePool).default(0))
                    .col(integer(FantasyLeague::SquadSize))
                    .col(boolean(FantasyLeague::HasPlayoffs).default(true))
                    .col(timestamp_null(FantasyLeague::DraftStartedAt))
                    .col(timestamp(FantasyLeague::CreatedAt))
                    .col(timestamp(FantasyLeague::UpdatedAt))
                    .check(
                        Expr::col(FantasyLeague::CurrentMembers)
                            .lte(Expr::col(FantasyLeague::MaxMembers)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FANTASY_LEAGUE_CREATOR_ID)
                    .table(FantasyLeague::Table)
                    .col(FantasyLeague::CreatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FANTASY_LEAGUE_TYPE_STATUS)
                    .table(FantasyLeague::Table)
                    .col(FantasyLeague::LeagueType)
                    .col(FantasyLeague::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FANTASY_LEAGUE_CREATOR_ID)
                    .from_tbl(FantasyLeague::Table)
                    .from_col(FantasyLeague::CreatorId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FANTASY_LEAGUE_COMPETITION_ID)
                    .from_tbl(FantasyLeague::Table)
                    .from_col(FantasyLeague::CompetitionId)
                    .to_tbl(Competition::Table)
                    .to_col(Competition::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_FANTASY_LEAGUE_COMPETITION_ID, FK_FANTASY_LEAGUE_CREATOR_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(FantasyLeague::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_FANTASY_LEAGUE_TYPE_STATUS, IDX_FANTASY_LEAGUE_CREATOR_ID] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(FantasyLeague::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(FantasyLeague::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FantasyLeague {
    Table,
    Id,
    Name,
    Description,
    CreatorId,
    CompetitionId,
    LeagueType,
    Status,
    SelectionMethod,
    MaxMembers,
    CurrentMembers,
    BudgetLimit,
    EntryFee,
    PrizePool,
    SquadSize,
    HasPlayoffs,
    DraftStartedAt,
    CreatedAt,
    UpdatedAt,
}
