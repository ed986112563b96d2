use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::server::reference::{LeagueInfo, TeamInfo, CURRENT_SEASON};

pub struct CompetitionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompetitionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        competition_id: &str,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find_by_id(competition_id)
            .one(self.db)
            .await
    }

    pub async fn find_many(
        &self,
        competition_ids: Vec<String>,
    ) -> Result<Vec<entity::competition::Model>, DbErr> {
        if competition_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Competition::find()
            .filter(entity::competition::Column::Id.is_in(competition_ids))
            .all(self.db)
            .await
    }

    /// Inserts the catalog leagues, leaving existing rows untouched
    ///
    /// Returns the number of rows inserted.
    pub async fn insert_missing(&self, leagues: &[LeagueInfo]) -> Result<usize, DbErr> {
        let existing: HashSet<String> = entity::prelude::Competition::find()
            .select_only()
            .column(entity::competition::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let missing: Vec<&LeagueInfo> = leagues
            .iter()
            .filter(|league| !existing.contains(league.id))
            .collect();
        if missing.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().naive_utc();
        let competitions = missing.into_iter().map(|league| entity::competition::ActiveModel {
            id: ActiveValue::Set(league.id.to_string()),
            name: ActiveValue::Set(league.name.to_string()),
            short_name: ActiveValue::Set(league.short_name()),
            country: ActiveValue::Set(league.country.to_string()),
            season: ActiveValue::Set(CURRENT_SEASON.to_string()),
            logo_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
        });

        let inserted = entity::prelude::Competition::insert_many(competitions)
            .exec_with_returning(self.db)
            .await?;

        Ok(inserted.len())
    }
}

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_many(&self, team_ids: Vec<String>) -> Result<Vec<entity::team::Model>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .all(self.db)
            .await
    }

    /// Inserts the catalog teams, leaving existing rows untouched
    ///
    /// Competitions referenced by the teams must already exist.
    pub async fn insert_missing(&self, teams: &[TeamInfo]) -> Result<usize, DbErr> {
        let existing: HashSet<String> = entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let missing: Vec<&TeamInfo> = teams
            .iter()
            .filter(|team| !existing.contains(team.id))
            .collect();
        if missing.is_empty() {
            return Ok(0);
        }

        let rows = missing.into_iter().map(|team| entity::team::ActiveModel {
            id: ActiveValue::Set(team.id.to_string()),
            competition_id: ActiveValue::Set(team.league_id.to_string()),
            name: ActiveValue::Set(team.name.to_string()),
            short_name: ActiveValue::Set(team.short_name.to_string()),
            logo_url: ActiveValue::Set(Some(team.logo_url.to_string())),
            country: ActiveValue::Set(team.country.to_string()),
            primary_color: ActiveValue::Set(Some(team.primary_color.to_string())),
            secondary_color: ActiveValue::Set(team.secondary_color.map(str::to_string)),
            is_active: ActiveValue::Set(true),
        });

        let inserted = entity::prelude::Team::insert_many(rows)
            .exec_with_returning(self.db)
            .await?;

        Ok(inserted.len())
    }
}
