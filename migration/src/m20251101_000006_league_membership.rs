use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000005_fantasy_league::FantasyLeague};

static IDX_LEAGUE_MEMBERSHIP_LEAGUE_ID_USER_ID: &str = "idx-league_membership-league_id-user_id";
static IDX_LEAGUE_MEMBERSHIP_USER_ID: &str = "idx-league_membership-user_id";
static FK_LEAGUE_MEMBERSHIP_LEAGUE_ID: &str = "fk-league_membership-league_id";
static FK_LEAGUE_MEMBERSHIP_USER_ID: &str = "fk-league_membership-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueMembership::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueMembership::Id))
                    .col(integer(LeagueMembership::LeagueId))
                    .col(integer(LeagueMembership::UserId))
                    .col(string(LeagueMembership::TeamName))
                    .col(integer(LeagueMembership::TotalPoints).default(0))
                    .col(integer(LeagueMembership::GameweekPoints).default(0))
                    .col(integer_null(LeagueMembership::LeaguePosition))
                    .col(boolean(LeagueMembership::IsAdmin).default(false))
                    .col(big_integer(LeagueMembership::RemainingBudget))
                    .col(timestamp(LeagueMembership::JoinedAt))
                    .to_owned(),
            )
            .await?;

        // One membership per user per league
        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_MEMBERSHIP_LEAGUE_ID_USER_ID)
                    .table(LeagueMembership::Table)
                    .col(LeagueMembership::LeagueId)
                    .col(LeagueMembership::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_MEMBERSHIP_USER_ID)
                    .table(LeagueMembership::Table)
                    .col(LeagueMembership::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEAGUE_MEMBERSHIP_LEAGUE_ID)
                    .from_tbl(LeagueMembership::Table)
                    .from_col(LeagueMembership::LeagueId)
                    .to_tbl(FantasyLeague::Table)
                    .to_col(FantasyLeague::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEAGUE_MEMBERSHIP_USER_ID)
                    .from_tbl(LeagueMembership::Table)
                    .from_col(LeagueMembership::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_LEAGUE_MEMBERSHIP_USER_ID, FK_LEAGUE_MEMBERSHIP_LEAGUE_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(LeagueMembership::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [
            IDX_LEAGUE_MEMBERSHIP_USER_ID,
            IDX_LEAGUE_MEMBERSHIP_LEAGUE_ID_USER_ID,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(LeagueMembership::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(LeagueMembership::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LeagueMembership {
    Table,
    Id,
    LeagueId,
    UserId,
    TeamName,
    TotalPoints,
    GameweekPoints,
    LeaguePosition,
    IsAdmin,
    RemainingBudget,
    JoinedAt,
}
