pub use sea_orm_migration::prelude::*;

mod m20251101_000001_user;
mod m20251101_000002_competition;
mod m20251101_000003_team;
mod m20251101_000004_player;
mod m20251101_000005_fantasy_league;
mod m20251101_000006_league_membership;
mod m20251101_000007_scoring_rule;
mod m20251101_000008_notification;
mod m20251101_000009_activity_log;
mod m20251101_000010_user_preferences;
mod m20251101_000011_user_favorite_team;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_user::Migration),
            Box::new(m20251101_000002_competition::Migration),
            Box::new(m20251101_000003_team::Migration),
            Box::new(m20251101_000004_player::Migration),
            Box::new(m20251101_000005_fantasy_league::Migration),
            Box::new(m20251101_000006_league_membership::Migration),
            Box::new(m20251101_000007_scoring_rule::Migration),
            Box::new(m20251101_000008_notification::Migration),
            Box::new(m20251101_000009_activity_log::Migration),
            Box::new(m20251101_000010_user_preferences::Migration),
            Box::new(m20251101_000011_user_favorite_team::Migration),
        ]
    }
}
