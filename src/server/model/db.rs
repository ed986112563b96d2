//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used across repositories and
//! services.

/// Registered account, keyed by a unique email.
pub type UserModel = entity::user::Model;

pub type CompetitionModel = entity::competition::Model;

pub type TeamModel = entity::team::Model;

/// Player in a club squad with a market value in minor currency units.
pub type PlayerModel = entity::player::Model;

/// Fantasy league owned by its creator.
///
/// `current_members` always equals the number of membership rows and never exceeds
/// `max_members`.
pub type FantasyLeagueModel = entity::fantasy_league::Model;

/// A user's team inside a league, unique per `(league_id, user_id)`.
pub type LeagueMembershipModel = entity::league_membership::Model;

pub type ScoringRuleModel = entity::scoring_rule::Model;

pub type NotificationModel = entity::notification::Model;

pub type ActivityLogModel = entity::activity_log::Model;

/// Onboarding state and notification settings, at most one row per user.
pub type UserPreferencesModel = entity::user_preferences::Model;

pub type UserFavoriteTeamModel = entity::user_favorite_team::Model;
