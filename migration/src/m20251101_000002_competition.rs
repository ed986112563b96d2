use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competition::Table)
                    .if_not_exists()
                    .col(string_len(Competition::Id, 64).primary_key())
                    .col(string(Competition::Name))
                    .col(string_len(Competition::ShortName, 16))
                    .col(string(Competition::Country))
                    .col(string_len(Competition::Season, 16))
                    .col(string_null(Competition::LogoUrl))
                    .col(boolean(Competition::IsActive).default(true))
                    .col(timestamp(Competition::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Competition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Competition {
    Table,
    Id,
    Name,
    ShortName,
    Country,
    Season,
    LogoUrl,
    IsActive,
    CreatedAt,
}
