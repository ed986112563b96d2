use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string_null(User::Username).unique_key())
                    .col(string_null(User::DisplayName))
                    .col(string_null(User::AvatarUrl))
                    .col(text_null(User::Bio))
                    .col(string_len_null(User::CountryCode, 8))
                    .col(string_null(User::Timezone))
                    .col(string_len_null(User::PreferredLanguage, 16))
                    .col(boolean(User::EmailVerified).default(false))
                    .col(boolean(User::IsPremium).default(false))
                    .col(timestamp_null(User::PremiumExpiresAt))
                    .col(integer(User::TotalExperiencePoints).default(0))
                    .col(integer(User::ReputationScore).default(0))
                    .col(timestamp(User::CreatedAt))
                    .col(timestamp(User::UpdatedAt))
                    .col(timestamp_null(User::LastActiveAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    Username,
    DisplayName,
    AvatarUrl,
    Bio,
    CountryCode,
    Timezone,
    PreferredLanguage,
    EmailVerified,
    IsPremium,
    PremiumExpiresAt,
    TotalExperiencePoints,
    ReputationScore,
    CreatedAt,
    UpdatedAt,
    LastActiveAt,
}
