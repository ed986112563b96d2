use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{LeagueStatus, LeagueType, SelectionMethod};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    ExprTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::data::contains_pattern;

/// Validated settings for a league about to be created.
#[derive(Debug, Clone)]
pub struct NewLeague {
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub competition_id: String,
    pub league_type: LeagueType,
    pub selection_method: SelectionMethod,
    pub max_members: i32,
    pub budget_limit: i64,
    pub entry_fee: i64,
    pub squad_size: i32,
    pub has_playoffs: bool,
}

pub struct LeagueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueRepository<'a, C> {
    /// Creates a new instance of [`LeagueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a league in draft status counting its creator as the first member
    pub async fn create(&self, league: NewLeague) -> Result<entity::fantasy_league::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let league = entity::fantasy_league::ActiveModel {
            name: ActiveValue::Set(league.name),
            description: ActiveValue::Set(league.description),
            creator_id: ActiveValue::Set(league.creator_id),
            competition_id: ActiveValue::Set(league.competition_id),
            league_type: ActiveValue::Set(league.league_type),
            status: ActiveValue::Set(LeagueStatus::Draft),
            selection_method: ActiveValue::Set(league.selection_method),
            max_members: ActiveValue::Set(league.max_members),
            current_members: ActiveValue::Set(1),
            budget_limit: ActiveValue::Set(league.budget_limit),
            entry_fee: ActiveValue::Set(league.entry_fee),
            prize_pool: ActiveValue::Set(0),
            squad_size: ActiveValue::Set(league.squad_size),
            has_playoffs: ActiveValue::Set(league.has_playoffs),
            draft_started_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        league.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        league_id: i32,
    ) -> Result<Option<entity::fantasy_league::Model>, DbErr> {
        entity::prelude::FantasyLeague::find_by_id(league_id)
            .one(self.db)
            .await
    }

    /// Leagues with the given ids, newest first
    pub async fn find_many_newest_first(
        &self,
        league_ids: Vec<i32>,
    ) -> Result<Vec<entity::fantasy_league::Model>, DbErr> {
        if league_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FantasyLeague::find()
            .filter(entity::fantasy_league::Column::Id.is_in(league_ids))
            .order_by_desc(entity::fantasy_league::Column::CreatedAt)
            .order_by_desc(entity::fantasy_league::Column::Id)
            .all(self.db)
            .await
    }

    /// Public leagues still taking members, most populated first
    ///
    /// `search` matches name or description case-insensitively. Full leagues are not
    /// excluded here.
    pub async fn find_public(
        &self,
        search: Option<&str>,
        limit: u64,
    ) -> Result<Vec<entity::fantasy_league::Model>, DbErr> {
        let mut query = entity::prelude::FantasyLeague::find()
            .filter(entity::fantasy_league::Column::LeagueType.eq(LeagueType::Public))
            .filter(entity::fantasy_league::Column::Status.is_in(LeagueStatus::OPEN));

        if let Some(search) = search {
            let pattern = contains_pattern(search);

            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::fantasy_league::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            entity::fantasy_league::Column::Description,
                        )))
                        .like(pattern),
                    ),
            );
        }

        query
            .order_by_desc(entity::fantasy_league::Column::CurrentMembers)
            .order_by_desc(entity::fantasy_league::Column::CreatedAt)
            .order_by_desc(entity::fantasy_league::Column::Id)
            .limit(Ord::min(limit, i64::MAX as u64))
            .all(self.db)
            .await
    }

    /// Claims a member slot in a single statement
    ///
    /// Increments `current_members` only while the league has room and is in an open status.
    /// Returns `false` when no slot was claimed.
    pub async fn try_claim_member_slot(&self, league_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FantasyLeague::update_many()
            .col_expr(
                entity::fantasy_league::Column::CurrentMembers,
                Expr::col(entity::fantasy_league::Column::CurrentMembers).add(1),
            )
            .col_expr(
                entity::fantasy_league::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::fantasy_league::Column::Id.eq(league_id))
            .filter(
                Expr::col(entity::fantasy_league::Column::CurrentMembers)
                    .lt(Expr::col(entity::fantasy_league::Column::MaxMembers)),
            )
            .filter(entity::fantasy_league::Column::Status.is_in(LeagueStatus::OPEN))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a league out of draft status in a single statement
    ///
    /// Returns `false` when the league was no longer in draft status.
    pub async fn start_draft(
        &self,
        league_id: i32,
        new_status: LeagueStatus,
        started_at: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::FantasyLeague::update_many()
            .col_expr(entity::fantasy_league::Column::Status, Expr::value(new_status))
            .col_expr(
                entity::fantasy_league::Column::DraftStartedAt,
                Expr::value(Some(started_at)),
            )
            .col_expr(entity::fantasy_league::Column::UpdatedAt, Expr::value(started_at))
            .filter(entity::fantasy_league::Column::Id.eq(league_id))
            .filter(entity::fantasy_league::Column::Status.eq(LeagueStatus::Draft))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

/// Default points awarded by a new league.
pub struct DefaultScoring;

impl DefaultScoring {
    pub const GOAL: i32 = 5;
    pub const ASSIST: i32 = 3;
    pub const CLEAN_SHEET_GK: i32 = 4;
    pub const YELLOW_CARD: i32 = -1;
    pub const RED_CARD: i32 = -3;
}

pub struct ScoringRuleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScoringRuleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_default(
        &self,
        league_id: i32,
    ) -> Result<entity::scoring_rule::Model, DbErr> {
        let rules = entity::scoring_rule::ActiveModel {
            league_id: ActiveValue::Set(league_id),
            goal_points: ActiveValue::Set(DefaultScoring::GOAL),
            assist_points: ActiveValue::Set(DefaultScoring::ASSIST),
            clean_sheet_gk_points: ActiveValue::Set(DefaultScoring::CLEAN_SHEET_GK),
            yellow_card_points: ActiveValue::Set(DefaultScoring::YELLOW_CARD),
            red_card_points: ActiveValue::Set(DefaultScoring::RED_CARD),
            ..Default::default()
        };

        rules.insert(self.db).await
    }

    pub async fn find_by_league(
        &self,
        league_id: i32,
    ) -> Result<Option<entity::scoring_rule::Model>, DbErr> {
        entity::prelude::ScoringRule::find()
            .filter(entity::scoring_rule::Column::LeagueId.eq(league_id))
            .one(self.db)
            .await
    }
}
