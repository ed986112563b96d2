//! Declarative test setup.
//!
//! Configuration methods only queue work; tables and fixtures are created when `build()` runs.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, league_indexes, league_tables, TestContext};

/// Builder for a [`TestContext`].
///
/// Tables are created before any fixture is inserted, so fixtures may be declared in any order
/// relative to the tables they depend on.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_league_tables: bool,

    competitions: Vec<String>,
    // (team_id, competition_id, name, short_name)
    teams: Vec<(String, String, String, String)>,
    // (email, has_completed_onboarding)
    users: Vec<(String, Option<bool>)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_league_tables: false,
            competitions: Vec::new(),
            teams: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Create every table of the schema.
    pub fn with_league_tables(mut self) -> Self {
        self.include_league_tables = true;
        self
    }

    /// Create the table for a single entity.
    ///
    /// ```no_run
    /// use matchday_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), matchday_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(UserPreferences)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a competition row with the given id.
    pub fn with_competition(mut self, competition_id: impl Into<String>) -> Self {
        self.competitions.push(competition_id.into());
        self
    }

    /// Insert a team row. The competition is created if it was not declared.
    pub fn with_team(
        mut self,
        team_id: impl Into<String>,
        competition_id: impl Into<String>,
        name: impl Into<String>,
        short_name: impl Into<String>,
    ) -> Self {
        self.teams.push((
            team_id.into(),
            competition_id.into(),
            name.into(),
            short_name.into(),
        ));
        self
    }

    /// Insert a user without a preferences row.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push((email.into(), None));
        self
    }

    /// Insert a user with a preferences row carrying the given onboarding flag.
    pub fn with_onboarded_user(mut self, email: impl Into<String>, completed: bool) -> Self {
        self.users.push((email.into(), Some(completed)));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_league_tables {
            all_tables.extend(league_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        if self.include_league_tables {
            setup.with_indexes(league_indexes()).await?;
        }

        for competition_id in self.competitions {
            setup
                .reference()
                .insert_competition_if_absent(&competition_id)
                .await?;
        }

        for (team_id, competition_id, name, short_name) in self.teams {
            setup
                .reference()
                .insert_competition_if_absent(&competition_id)
                .await?;
            setup
                .reference()
                .insert_team(&team_id, &competition_id, &name, &short_name)
                .await?;
        }

        for (email, onboarding) in self.users {
            let user = setup.user().insert_user(&email).await?;

            if let Some(completed) = onboarding {
                setup.user().insert_preferences(user.id, completed).await?;
            }
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
