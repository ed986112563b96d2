use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::news::{NewsListDto, NewsQuery, PersonalizedNewsDto},
    server::{
        data::favorite_team::FavoriteTeamRepository,
        error::{news::NewsError, Error},
        identity::Principal,
        news::{personalize, NewsCatalog, NewsFilters, DEFAULT_PERSONALIZED_LIMIT},
        service::user::UserService,
    },
};

pub const DEFAULT_NEWS_LIMIT: usize = 20;

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a NewsCatalog,
}

impl<'a> NewsService<'a> {
    /// Creates a new instance of [`NewsService`]
    pub fn new(db: &'a DatabaseConnection, catalog: &'a NewsCatalog) -> Self {
        Self { db, catalog }
    }

    /// Catalog articles matching the query filters, newest first
    pub fn list(&self, query: NewsQuery) -> NewsListDto {
        let filters = NewsFilters {
            league: query.league.filter(|l| !l.is_empty()),
            category: query.category.filter(|c| !c.is_empty()),
            date_range: query.date_range,
        };

        let limit = query.limit.unwrap_or(DEFAULT_NEWS_LIMIT);

        let (articles, total_results) = if filters.is_empty() {
            (self.catalog.top(limit), self.catalog.articles().len())
        } else {
            let mut articles = self.catalog.filter(&filters, Utc::now());
            let total = articles.len();
            articles.truncate(limit);
            (articles, total)
        };

        NewsListDto {
            articles: articles.into_iter().map(Into::into).collect(),
            total_results,
        }
    }

    /// News personalised to the caller's favourite teams
    ///
    /// # Returns
    /// - `Err(UserError::NotFound)` - Identity resolved but no user row exists
    /// - `Err(NewsError::OnboardingIncomplete)` - Onboarding not finished
    pub async fn personalized(
        &self,
        principal: &Principal,
        limit: Option<usize>,
    ) -> Result<PersonalizedNewsDto, Error> {
        let user_service = UserService::new(self.db);
        let user = user_service.require_user(principal).await?;

        if !user_service.has_completed_onboarding(user.id).await? {
            return Err(NewsError::OnboardingIncomplete.into());
        }

        let team_ids = FavoriteTeamRepository::new(self.db)
            .team_ids_for_user(user.id)
            .await?;

        let news = personalize(
            self.catalog,
            &team_ids,
            limit.unwrap_or(DEFAULT_PERSONALIZED_LIMIT),
        );

        Ok(PersonalizedNewsDto {
            personalization: (&news).into(),
            news: news.articles.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use matchday_test_utils::prelude::*;

    use crate::{
        model::news::{DateRange, NewsQuery},
        server::{
            error::{news::NewsError, user::UserError, Error},
            identity::Principal,
            news::NewsCatalog,
            service::news::NewsService,
        },
    };

    fn principal(email: &str) -> Principal {
        Principal {
            email: email.to_string(),
            name: None,
        }
    }

    /// Expect OnboardingIncomplete without a preferences row or with the flag unset
    #[tokio::test]
    async fn requires_completed_onboarding() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_user("new@example.com")
            .with_onboarded_user("halfway@example.com", false)
            .build()
            .await?;
        let catalog = NewsCatalog::new(Utc::now());
        let service = NewsService::new(&test.db, &catalog);

        for email in ["new@example.com", "halfway@example.com"] {
            let result = service.personalized(&principal(email), None).await;

            assert!(matches!(
                result,
                Err(Error::NewsError(NewsError::OnboardingIncomplete))
            ));
        }

        Ok(())
    }

    /// Expect NotFound for a principal without a user row
    #[tokio::test]
    async fn requires_existing_user() -> Result<(), TestError> {
        let test = test_setup_with_league_tables!()?;
        let catalog = NewsCatalog::new(Utc::now());

        let result = NewsService::new(&test.db, &catalog)
            .personalized(&principal("ghost@example.com"), None)
            .await;

        assert!(matches!(result, Err(Error::UserError(UserError::NotFound(_)))));

        Ok(())
    }

    /// Expect articles about the favourite team once onboarding is done
    #[tokio::test]
    async fn personalizes_for_favourites() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_team("bayern-munich", "bundesliga", "Bayern Munich", "FCB")
            .with_onboarded_user("fan@example.com", true)
            .build()
            .await?;
        let fan = crate::server::data::user::UserRepository::new(&test.db)
            .find_by_email("fan@example.com")
            .await?
            .unwrap();
        test.user()
            .insert_favorite_team(fan.id, "bayern-munich", 1)
            .await?;
        let catalog = NewsCatalog::new(Utc::now());

        let news = NewsService::new(&test.db, &catalog)
            .personalized(&principal("fan@example.com"), None)
            .await
            .unwrap();

        assert!(news.personalization.is_personalized);
        assert_eq!(news.personalization.favorite_teams_count, 1);
        assert_eq!(news.news.len(), news.personalization.total_available);
        assert!(!news.news.is_empty());

        Ok(())
    }

    /// Expect the limit to truncate while the total keeps counting every match
    #[tokio::test]
    async fn lists_filtered_news() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let catalog = NewsCatalog::new(Utc::now());
        let service = NewsService::new(&test.db, &catalog);

        let all = service.list(NewsQuery {
            date_range: Some(DateRange::Month),
            limit: Some(2),
            ..Default::default()
        });

        assert_eq!(all.articles.len(), 2);
        assert_eq!(all.total_results, 8);

        Ok(())
    }
}
