use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use entity::sea_orm_active_enums::PlayerPosition;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn reference(&self) -> ReferenceFixtures<'_> {
        ReferenceFixtures { setup: self }
    }
}

pub struct ReferenceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReferenceFixtures<'a> {
    /// Insert a competition unless one with the same id already exists.
    pub async fn insert_competition_if_absent(
        &self,
        competition_id: &str,
    ) -> Result<entity::competition::Model, TestError> {
        if let Some(existing) = entity::prelude::Competition::find_by_id(competition_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(
            entity::prelude::Competition::insert(entity::competition::ActiveModel {
                id: ActiveValue::Set(competition_id.to_string()),
                name: ActiveValue::Set(format!("Competition {}", competition_id)),
                short_name: ActiveValue::Set(competition_id.chars().take(10).collect()),
                country: ActiveValue::Set("Testland".to_string()),
                season: ActiveValue::Set("2024-25".to_string()),
                logo_url: ActiveValue::Set(None),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_team(
        &self,
        team_id: &str,
        competition_id: &str,
        name: &str,
        short_name: &str,
    ) -> Result<entity::team::Model, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            id: ActiveValue::Set(team_id.to_string()),
            competition_id: ActiveValue::Set(competition_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            short_name: ActiveValue::Set(short_name.to_string()),
            logo_url: ActiveValue::Set(None),
            country: ActiveValue::Set("Testland".to_string()),
            primary_color: ActiveValue::Set(None),
            secondary_color: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_player(
        &self,
        team_id: &str,
        name: &str,
        position: PlayerPosition,
        market_value_euros: i64,
    ) -> Result<entity::player::Model, TestError> {
        Ok(entity::prelude::Player::insert(entity::player::ActiveModel {
            team_id: ActiveValue::Set(team_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            position: ActiveValue::Set(position),
            shirt_number: ActiveValue::Set(None),
            nationality: ActiveValue::Set(None),
            market_value_euros: ActiveValue::Set(market_value_euros),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
