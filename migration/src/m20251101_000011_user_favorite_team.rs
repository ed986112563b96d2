use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000003_team::Team};

static IDX_USER_FAVORITE_TEAM_USER_ID: &str = "idx-user_favorite_team-user_id";
static FK_USER_FAVORITE_TEAM_USER_ID: &str = "fk-user_favorite_team-user_id";
static FK_USER_FAVORITE_TEAM_TEAM_ID: &str = "fk-user_favorite_team-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(UserFavoriteTeam::Id))
                    .col(integer(UserFavoriteTeam::UserId))
                    .col(string_len(UserFavoriteTeam::TeamId, 64))
                    .col(integer(UserFavoriteTeam::Priority))
                    .col(timestamp(UserFavoriteTeam::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_FAVORITE_TEAM_USER_ID)
                    .table(UserFavoriteTeam::Table)
                    .col(UserFavoriteTeam::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_FAVORITE_TEAM_USER_ID)
                    .from_tbl(UserFavoriteTeam::Table)
                    .from_col(UserFavoriteTeam::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_FAVORITE_TEAM_TEAM_ID)
                    .from_tbl(UserFavoriteTeam::Table)
                    .from_col(UserFavoriteTeam::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_USER_FAVORITE_TEAM_TEAM_ID, FK_USER_FAVORITE_TEAM_USER_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(UserFavoriteTeam::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_FAVORITE_TEAM_USER_ID)
                    .table(UserFavoriteTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavoriteTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoriteTeam {
    Table,
    Id,
    UserId,
    TeamId,
    Priority,
    CreatedAt,
}
