use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_user::User;

static IDX_ACTIVITY_LOG_LEAGUE_ID: &str = "idx-activity_log-league_id";
static FK_ACTIVITY_LOG_USER_ID: &str = "fk-activity_log-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityLog::Id))
                    .col(integer(ActivityLog::UserId))
                    .col(integer_null(ActivityLog::LeagueId))
                    .col(string_len(ActivityLog::ActionType, 32))
                    .col(text(ActivityLog::Description))
                    .col(json_binary(ActivityLog::Metadata))
                    .col(timestamp(ActivityLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTIVITY_LOG_LEAGUE_ID)
                    .table(ActivityLog::Table)
                    .col(ActivityLog::LeagueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACTIVITY_LOG_USER_ID)
                    .from_tbl(ActivityLog::Table)
                    .from_col(ActivityLog::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACTIVITY_LOG_USER_ID)
                    .table(ActivityLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTIVITY_LOG_LEAGUE_ID)
                    .table(ActivityLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ActivityLog {
    Table,
    Id,
    UserId,
    LeagueId,
    ActionType,
    Description,
    Metadata,
    CreatedAt,
}
