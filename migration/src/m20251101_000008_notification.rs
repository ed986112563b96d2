use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_user::User;

static IDX_NOTIFICATION_USER_ID_LEAGUE_ID: &str = "idx-notification-user_id-league_id";
static FK_NOTIFICATION_USER_ID: &str = "fk-notification-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(integer(Notification::UserId))
                    .col(string_len(Notification::NotificationType, 32))
                    .col(string(Notification::Title))
                    .col(text(Notification::Content))
                    .col(integer_null(Notification::LeagueId))
                    .col(integer_null(Notification::RelatedUserId))
                    .col(string_null(Notification::ActionUrl))
                    .col(boolean(Notification::IsRead).default(false))
                    .col(timestamp_null(Notification::ReadAt))
                    .col(timestamp(Notification::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_USER_ID_LEAGUE_ID)
                    .table(Notification::Table)
                    .col(Notification::UserId)
                    .col(Notification::LeagueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_USER_ID)
                    .from_tbl(Notification::Table)
                    .from_col(Notification::UserId)
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
                    .name(FK_NOTIFICATION_USER_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_USER_ID_LEAGUE_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    UserId,
    NotificationType,
    Title,
    Content,
    LeagueId,
    RelatedUserId,
    ActionUrl,
    IsRead,
    ReadAt,
    CreatedAt,
}
