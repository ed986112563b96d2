use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{LeagueStatus, LeagueType, SelectionMethod};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_league")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub competition_id: String,
    pub league_type: LeagueType,
    pub status: LeagueStatus,
    pub selection_method: SelectionMethod,
    pub max_members: i32,
    pub current_members: i32,
    /// Minor currency units
    pub budget_limit: i64,
    pub entry_fee: i64,
    pub prize_pool: i64,
    pub squad_size: i32,
    pub has_playoffs: bool,
    pub draft_started_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::competition::Entity",
        from = "Column::CompetitionId",
        to = "super::competition::Column::Id"
    )]
    Competition,
    #[sea_orm(has_many = "super::league_membership::Entity")]
    LeagueMembership,
    #[sea_orm(has_one = "super::scoring_rule::Entity")]
    ScoringRule,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::competition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Competition.def()
    }
}

impl Related<super::league_membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueMembership.def()
    }
}

impl Related<super::scoring_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoringRule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
