use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::reference::{CompetitionRepository, TeamRepository},
    error::Error,
    reference,
};

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the reference competitions and teams missing from the database
    ///
    /// Existing rows are left untouched, so running this on every start is safe.
    pub async fn seed_reference_data(&self) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let competitions = CompetitionRepository::new(&txn)
            .insert_missing(reference::leagues())
            .await?;
        let teams = TeamRepository::new(&txn)
            .insert_missing(reference::teams())
            .await?;

        txn.commit().await?;

        if competitions + teams > 0 {
            tracing::info!(competitions, teams, "Seeded reference data");
        } else {
            tracing::debug!("Reference data already present");
        }

        Ok(())
    }
}
