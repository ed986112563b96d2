pub mod prelude;

pub mod activity_log;
pub mod competition;
pub mod fantasy_league;
pub mod league_membership;
pub mod notification;
pub mod player;
pub mod scoring_rule;
pub mod sea_orm_active_enums;
pub mod team;
pub mod user;
pub mod user_favorite_team;
pub mod user_preferences;
