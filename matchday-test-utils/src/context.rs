//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// In-memory database and session shared by a single test.
///
/// ```ignore
/// let test = TestBuilder::new().with_league_tables().build().await?;
///
/// let user = test.user().insert_user("alice@example.com").await?;
/// let league = test.league().insert_league(user.id, "premier-league", 12).await?;
/// ```
pub struct TestContext {
    /// Connection to the `sqlite::memory:` database
    pub db: DatabaseConnection,
    /// Session backed by a [`MemoryStore`]
    pub session: Session,
}

impl TestContext {
    /// Connect a fresh in-memory database with no tables.
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Execute the provided CREATE TABLE statements in order.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Execute the provided CREATE INDEX statements in order.
    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
