//! Data access layer repositories.
//!
//! Each repository wraps one table (or a tight group of tables) and is generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait), so services can hand it either the pooled
//! connection or an open transaction.

pub mod activity_log;
pub mod favorite_team;
pub mod league;
pub mod membership;
pub mod notification;
pub mod player;
pub mod preferences;
pub mod reference;
pub mod user;

use sea_orm::sea_query::LikeExpr;

/// Case-insensitive substring pattern for `LOWER(col) LIKE`, with `%`, `_` and `\` matched
/// literally.
pub(crate) fn contains_pattern(search: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for c in search.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');

    LikeExpr::new(escaped).escape('\\')
}

