use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub preferred_language: Option<String>,
    pub email_verified: bool,
    pub is_premium: bool,
    pub premium_expires_at: Option<DateTime>,
    pub total_experience_points: i32,
    pub reputation_score: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub last_active_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fantasy_league::Entity")]
    CreatedLeague,
    #[sea_orm(has_many = "super::league_membership::Entity")]
    LeagueMembership,
    #[sea_orm(has_one = "super::user_preferences::Entity")]
    UserPreferences,
    #[sea_orm(has_many = "super::user_favorite_team::Entity")]
    UserFavoriteTeam,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::league_membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueMembership.def()
    }
}

impl Related<super::user_preferences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPreferences.def()
    }
}

impl Related<super::user_favorite_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteTeam.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
