use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_user::User;

static FK_USER_PREFERENCES_USER_ID: &str = "fk-user_preferences-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPreferences::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPreferences::Id))
                    .col(integer_uniq(UserPreferences::UserId))
                    .col(boolean(UserPreferences::HasCompletedOnboarding).default(false))
                    .col(string_len(UserPreferences::NewsFrequency, 16))
                    .col(boolean(UserPreferences::NotificationsEnabled).default(true))
                    .col(boolean(UserPreferences::EmailNotifications).default(true))
                    .col(boolean(UserPreferences::PushNotifications).default(true))
                    .col(timestamp(UserPreferences::CreatedAt))
                    .col(timestamp(UserPreferences::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_PREFERENCES_USER_ID)
                    .from_tbl(UserPreferences::Table)
                    .from_col(UserPreferences::UserId)
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
                    .name(FK_USER_PREFERENCES_USER_ID)
                    .table(UserPreferences::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserPreferences::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserPreferences {
    Table,
    Id,
    UserId,
    HasCompletedOnboarding,
    NewsFrequency,
    NotificationsEnabled,
    EmailNotifications,
    PushNotifications,
    CreatedAt,
    UpdatedAt,
}
