pub use super::activity_log::Entity as ActivityLog;
pub use super::competition::Entity as Competition;
pub use super::fantasy_league::Entity as FantasyLeague;
pub use super::league_membership::Entity as LeagueMembership;
pub use super::notification::Entity as Notification;
pub use super::player::Entity as Player;
pub use super::scoring_rule::Entity as ScoringRule;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
pub use super::user_favorite_team::Entity as UserFavoriteTeam;
pub use super::user_preferences::Entity as UserPreferences;
