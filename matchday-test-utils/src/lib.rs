//! Test harness for the matchday crates.
//!
//! Tests declare the tables and fixtures they need through [`TestBuilder`] and receive a
//! [`TestContext`] holding an in-memory SQLite database plus an in-memory session.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        test_setup_with_league_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}

/// Every table of the schema in foreign key order.
pub fn league_tables() -> Vec<sea_orm::sea_query::TableCreateStatement> {
    let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::Competition),
        schema.create_table_from_entity(entity::prelude::Team),
        schema.create_table_from_entity(entity::prelude::Player),
        schema.create_table_from_entity(entity::prelude::FantasyLeague),
        schema.create_table_from_entity(entity::prelude::LeagueMembership),
        schema.create_table_from_entity(entity::prelude::ScoringRule),
        schema.create_table_from_entity(entity::prelude::Notification),
        schema.create_table_from_entity(entity::prelude::ActivityLog),
        schema.create_table_from_entity(entity::prelude::UserPreferences),
        schema.create_table_from_entity(entity::prelude::UserFavoriteTeam),
    ]
}

/// Indexes the migrations add on top of the entity definitions.
pub fn league_indexes() -> Vec<sea_orm::sea_query::IndexCreateStatement> {
    use sea_orm::sea_query::Index;

    vec![Index::create()
        .name("idx_league_membership_league_user")
        .table(entity::prelude::LeagueMembership)
        .col(entity::league_membership::Column::LeagueId)
        .col(entity::league_membership::Column::UserId)
        .unique()
        .to_owned()]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // No tables, session only
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_league_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_tables($crate::league_tables()).await?;
            setup.with_indexes($crate::league_indexes()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
