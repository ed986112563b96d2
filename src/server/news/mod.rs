//! In-memory football news catalog.
//!
//! A [`NewsCatalog`] is built once at startup and shared read-only through `AppState`.
//! Article timestamps are relative to the moment the catalog was constructed.

mod articles;
mod personalize;

pub use personalize::{personalize, PersonalizedNews, DEFAULT_PERSONALIZED_LIMIT};

use chrono::{DateTime, Duration, Utc};

use crate::model::news::{DateRange, NewsArticleDto, NewsSourceDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSource {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub url_to_image: String,
    pub published_at: DateTime<Utc>,
    pub source: NewsSource,
    /// League id tag such as `premier-league` or `champions-league`
    pub league: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewsFilters {
    pub league: Option<String>,
    pub category: Option<String>,
    pub date_range: Option<DateRange>,
}

impl NewsFilters {
    pub fn is_empty(&self) -> bool {
        self.league.is_none() && self.category.is_none() && self.date_range.is_none()
    }
}

pub struct NewsCatalog {
    articles: Vec<NewsArticle>,
}

impl NewsCatalog {
    /// Builds the catalog with article timestamps relative to `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::from_articles(articles::mock_articles(now))
    }

    pub fn from_articles(articles: Vec<NewsArticle>) -> Self {
        Self { articles }
    }

    /// Every article, newest first.
    pub fn all(&self) -> Vec<NewsArticle> {
        let mut articles = self.articles.clone();
        sort_newest_first(&mut articles);
        articles
    }

    /// Articles matching every given filter, newest first.
    ///
    /// `today` starts at UTC midnight of `now`, `week` covers the last 7 days and `month`
    /// the last 30.
    pub fn filter(&self, filters: &NewsFilters, now: DateTime<Utc>) -> Vec<NewsArticle> {
        let cutoff = filters.date_range.map(|range| match range {
            DateRange::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc())
                .unwrap_or(now),
            DateRange::Week => now - Duration::days(7),
            DateRange::Month => now - Duration::days(30),
        });

        let mut matching: Vec<NewsArticle> = self
            .articles
            .iter()
            .filter(|article| match &filters.league {
                Some(league) => article.league.as_deref() == Some(league.as_str()),
                None => true,
            })
            .filter(|article| match &filters.category {
                Some(category) => article.category.as_deref() == Some(category.as_str()),
                None => true,
            })
            .filter(|article| match cutoff {
                Some(cutoff) => article.published_at >= cutoff,
                None => true,
            })
            .cloned()
            .collect();

        sort_newest_first(&mut matching);
        matching
    }

    /// The `limit` most recent articles.
    pub fn top(&self, limit: usize) -> Vec<NewsArticle> {
        let mut articles = self.all();
        articles.truncate(limit);
        articles
    }

    pub(crate) fn articles(&self) -> &[NewsArticle] {
        &self.articles
    }
}

pub(crate) fn sort_newest_first(articles: &mut [NewsArticle]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

impl From<NewsArticle> for NewsArticleDto {
    fn from(article: NewsArticle) -> Self {
        Self {
            id: article.id,
            title: article.title,
            description: article.description,
            content: article.content,
            url: article.url,
            url_to_image: article.url_to_image,
            published_at: article.published_at,
            source: NewsSourceDto {
                id: article.source.id,
                name: article.source.name,
            },
            league: article.league,
            category: article.category,
        }
    }
}
