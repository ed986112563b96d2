use entity::sea_orm_active_enums::PlayerPosition;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use crate::server::data::contains_pattern;

#[derive(Debug, Clone, Default)]
pub struct PlayerFilters {
    /// Case-insensitive substring of the player name
    pub search: Option<String>,
    pub position: Option<PlayerPosition>,
    pub team_id: Option<String>,
}

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// One page of active players, most valuable first, with their teams
    ///
    /// `page` is zero-based.
    pub async fn find_page(
        &self,
        filters: &PlayerFilters,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<(entity::player::Model, Option<entity::team::Model>)>, DbErr> {
        // Offsets past what the database can bind cannot hold any rows
        let Some(offset) = page
            .checked_mul(per_page)
            .filter(|offset| *offset <= i64::MAX as u64)
        else {
            return Ok(Vec::new());
        };

        Self::filtered(filters)
            .order_by_desc(entity::player::Column::MarketValueEuros)
            .order_by_asc(entity::player::Column::Name)
            .order_by_asc(entity::player::Column::Id)
            .offset(offset)
            .limit(per_page)
            .find_also_related(entity::prelude::Team)
            .all(self.db)
            .await
    }

    /// Number of active players matching the filters
    pub async fn count(&self, filters: &PlayerFilters) -> Result<u64, DbErr> {
        Self::filtered(filters).count(self.db).await
    }

    fn filtered(filters: &PlayerFilters) -> Select<entity::player::Entity> {
        let mut query =
            entity::prelude::Player::find().filter(entity::player::Column::IsActive.eq(true));

        if let Some(search) = &filters.search {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::player::Column::Name)))
                    .like(contains_pattern(search)),
            );
        }
        if let Some(position) = filters.position {
            query = query.filter(entity::player::Column::Position.eq(position));
        }
        if let Some(team_id) = &filters.team_id {
            query = query.filter(entity::player::Column::TeamId.eq(team_id.as_str()));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::PlayerPosition;
    use matchday_test_utils::prelude::*;
    use sea_orm::{ActiveValue, EntityTrait};

    use crate::server::data::player::{PlayerFilters, PlayerRepository};

    async fn setup() -> Result<TestContext, TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_team("arsenal", "premier-league", "Arsenal", "ARS")
            .with_team("napoli", "serie-a", "Napoli", "NAP")
            .build()
            .await?;

        test.reference()
            .insert_player("arsenal", "Bukayo Saka", PlayerPosition::Midfielder, 120_000_000)
            .await?;
        test.reference()
            .insert_player("arsenal", "David Raya", PlayerPosition::Goalkeeper, 35_000_000)
            .await?;
        test.reference()
            .insert_player("napoli", "Khvicha Kvaratskhelia", PlayerPosition::Forward, 80_000_000)
            .await?;
        test.reference()
            .insert_player("napoli", "Alex Meret", PlayerPosition::Goalkeeper, 35_000_000)
            .await?;

        Ok(test)
    }

    /// Expect value descending with name as the tie breaker
    #[tokio::test]
    async fn orders_by_value_then_name() -> Result<(), TestError> {
        let test = setup().await?;

        let players = PlayerRepository::new(&test.db)
            .find_page(&PlayerFilters::default(), 0, 10)
            .await?;

        let names: Vec<&str> = players.iter().map(|(p, _)| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Bukayo Saka", "Khvicha Kvaratskhelia", "Alex Meret", "David Raya"]
        );
        assert!(players.iter().all(|(_, team)| team.is_some()));

        Ok(())
    }

    /// Expect filters to combine and count to agree with the page
    #[tokio::test]
    async fn filters_by_position_team_and_search() -> Result<(), TestError> {
        let test = setup().await?;
        let player_repo = PlayerRepository::new(&test.db);

        let goalkeepers = PlayerFilters {
            position: Some(PlayerPosition::Goalkeeper),
            team_id: Some("napoli".to_string()),
            ..Default::default()
        };
        let page = player_repo.find_page(&goalkeepers, 0, 10).await?;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].0.name, "Alex Meret");
        assert_eq!(player_repo.count(&goalkeepers).await?, 1);

        let search = PlayerFilters {
            search: Some("SAKA".to_string()),
            ..Default::default()
        };
        assert_eq!(player_repo.count(&search).await?, 1);

        Ok(())
    }

    /// Expect inactive players to be hidden
    #[tokio::test]
    async fn skips_inactive_players() -> Result<(), TestError> {
        let test = setup().await?;
        let retired = test
            .reference()
            .insert_player("arsenal", "Retired Legend", PlayerPosition::Forward, 1)
            .await?;
        entity::prelude::Player::update(entity::player::ActiveModel {
            id: ActiveValue::Unchanged(retired.id),
            is_active: ActiveValue::Set(false),
            ..Default::default()
        })
        .exec(&test.db)
        .await?;

        let player_repo = PlayerRepository::new(&test.db);

        assert_eq!(player_repo.count(&PlayerFilters::default()).await?, 4);

        Ok(())
    }

    /// Expect the offset to skip whole pages
    #[tokio::test]
    async fn pages_through_results() -> Result<(), TestError> {
        let test = setup().await?;

        let second_page = PlayerRepository::new(&test.db)
            .find_page(&PlayerFilters::default(), 1, 3)
            .await?;

        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].0.name, "David Raya");

        Ok(())
    }
}
