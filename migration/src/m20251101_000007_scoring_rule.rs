use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_fantasy_league::FantasyLeague;

static FK_SCORING_RULE_LEAGUE_ID: &str = "fk-scoring_rule-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScoringRule::Table)
                    .if_not_exists()
                    .col(pk_auto(ScoringRule::Id))
                    .col(integer_uniq(ScoringRule::LeagueId))
                    .col(integer(ScoringRule::GoalPoints))
                    .col(integer(ScoringRule::AssistPoints))
                    .col(integer(ScoringRule::CleanSheetGkPoints))
                    .col(integer(ScoringRule::YellowCardPoints))
                    .col(integer(ScoringRule::RedCardPoints))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SCORING_RULE_LEAGUE_ID)
                    .from_tbl(ScoringRule::Table)
                    .from_col(ScoringRule::LeagueId)
                    .to_tbl(FantasyLeague::Table)
                    .to_col(FantasyLeague::Id)
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
                    .name(FK_SCORING_RULE_LEAGUE_ID)
                    .table(ScoringRule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ScoringRule::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ScoringRule {
    Table,
    Id,
    LeagueId,
    GoalPoints,
    AssistPoints,
    CleanSheetGkPoints,
    YellowCardPoints,
    RedCardPoints,
}
