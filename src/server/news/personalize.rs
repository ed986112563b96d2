use std::collections::HashSet;

use crate::{
    model::news::{FavoriteTeamSummaryDto, PersonalizationDto},
    server::reference::{self, TeamInfo},
};

use super::{sort_newest_first, NewsArticle, NewsCatalog};

pub const DEFAULT_PERSONALIZED_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct PersonalizedNews {
    pub articles: Vec<NewsArticle>,
    pub favorite_teams: Vec<&'static TeamInfo>,
    pub favorite_teams_count: usize,
    /// Matching articles before truncation
    pub total_available: usize,
    pub is_personalized: bool,
}

/// Selects catalog articles relevant to the given favourite teams.
///
/// An article matches a team when its title or description mentions the team's name or
/// short name, or when it is tagged with the team's league. If nothing matches, articles
/// from any of the favourite teams' leagues are used instead. Without favourites the
/// whole catalog is returned.
pub fn personalize(
    catalog: &NewsCatalog,
    favorite_team_ids: &[String],
    limit: usize,
) -> PersonalizedNews {
    let favorite_teams: Vec<&'static TeamInfo> = favorite_team_ids
        .iter()
        .filter_map(|team_id| reference::team_by_id(team_id))
        .collect();

    let mut selected: Vec<NewsArticle> = if favorite_team_ids.is_empty() {
        catalog.articles().to_vec()
    } else {
        let matched: Vec<NewsArticle> = catalog
            .articles()
            .iter()
            .filter(|article| favorite_teams.iter().any(|team| mentions(article, team)))
            .cloned()
            .collect();

        if matched.is_empty() {
            let favorite_leagues: HashSet<&str> =
                favorite_teams.iter().map(|team| team.league_id).collect();

            catalog
                .articles()
                .iter()
                .filter(|article| {
                    article
                        .league
                        .as_deref()
                        .is_some_and(|league| favorite_leagues.contains(league))
                })
                .cloned()
                .collect()
        } else {
            matched
        }
    };

    sort_newest_first(&mut selected);
    let total_available = selected.len();
    selected.truncate(limit);

    PersonalizedNews {
        articles: selected,
        favorite_teams,
        favorite_teams_count: favorite_team_ids.len(),
        total_available,
        is_personalized: !favorite_team_ids.is_empty(),
    }
}

fn mentions(article: &NewsArticle, team: &TeamInfo) -> bool {
    let text = format!("{} {}", article.title, article.description).to_lowercase();

    text.contains(&team.name.to_lowercase())
        || text.contains(&team.short_name.to_lowercase())
        || article.league.as_deref() == Some(team.league_id)
}

impl From<&PersonalizedNews> for PersonalizationDto {
    fn from(news: &PersonalizedNews) -> Self {
        Self {
            favorite_teams_count: news.favorite_teams_count,
            favorite_teams: news
                .favorite_teams
                .iter()
                .map(|team| FavoriteTeamSummaryDto {
                    id: team.id.to_string(),
                    name: team.name.to_string(),
                    short_name: team.short_name.to_string(),
                    league: team.league.to_string(),
                })
                .collect(),
            total_available: news.total_available,
            is_personalized: news.is_personalized,
        }
    }
}
