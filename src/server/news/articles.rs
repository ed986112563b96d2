use chrono::{DateTime, Duration, Utc};

use super::{NewsArticle, NewsSource};

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    content: &'static str,
    url: &'static str,
    image: &'static str,
    hours_ago: i64,
    source: (&'static str, &'static str),
    league: &'static str,
    category: &'static str,
}

static SEEDS: [Seed; 8] = [
    Seed {
        id: "1",
        title: "Manchester City defeats Arsenal 2-1 in Premier League thriller",
        description: "A stunning late goal from Erling Haaland secured victory for City at the Etihad Stadium in what was a captivating encounter.",
        content: "Manchester City came from behind to defeat Arsenal 2-1 in a thrilling Premier League encounter...",
        url: "https://example.com/city-arsenal",
        image: "https://images.unsplash.com/photo-1459865264687-595d652de67e?w=400&h=250&fit=crop",
        hours_ago: 2,
        source: ("bbc-sport", "BBC Sport"),
        league: "premier-league",
        category: "match-result",
    },
    Seed {
        id: "2",
        title: "Real Madrid signs new wonderkid from Brazilian club",
        description: "The Spanish giants have completed the signing of 18-year-old midfielder for €50 million.",
        content: "Real Madrid have announced the signing of Brazilian midfielder...",
        url: "https://example.com/real-madrid-signing",
        image: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=400&h=250&fit=crop",
        hours_ago: 5,
        source: ("marca", "Marca"),
        league: "la-liga",
        category: "transfer",
    },
    Seed {
        id: "3",
        title: "Champions League draw: English clubs learn their fate",
        description: "The Champions League Round of 16 draw has been completed with some fascinating matchups.",
        content: "The Champions League Round of 16 draw took place in Nyon...",
        url: "https://example.com/champions-league-draw",
        image: "https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d?w=400&h=250&fit=crop",
        hours_ago: 8,
        source: ("uefa", "UEFA"),
        league: "champions-league",
        category: "tournament",
    },
    Seed {
        id: "4",
        title: "Bayern Munich dominates Borussia Dortmund in Der Klassiker",
        description: "Bayern Munich secured a commanding 3-0 victory over their rivals in the Bundesliga.",
        content: "Bayern Munich put on a dominant display against Borussia Dortmund...",
        url: "https://example.com/bayern-dortmund",
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400&h=250&fit=crop",
        hours_ago: 12,
        source: ("sky-sports", "Sky Sports"),
        league: "bundesliga",
        category: "match-result",
    },
    Seed {
        id: "5",
        title: "PSG and Mbappe agree on contract extension",
        description: "Kylian Mbappe has agreed to extend his contract with Paris Saint-Germain until 2026.",
        content: "Paris Saint-Germain have announced that Kylian Mbappe...",
        url: "https://example.com/mbappe-contract",
        image: "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=400&h=250&fit=crop",
        hours_ago: 18,
        source: ("lequipe", "L'Équipe"),
        league: "ligue-1",
        category: "transfer",
    },
    Seed {
        id: "6",
        title: "Inter Milan secures Serie A title with victory over Juventus",
        description: "Inter Milan clinched their second consecutive Serie A title with a decisive win.",
        content: "Inter Milan have secured the Serie A title after defeating Juventus...",
        url: "https://example.com/inter-serie-a",
        image: "https://images.unsplash.com/photo-1577223625816-7546f13df25d?w=400&h=250&fit=crop",
        hours_ago: 24,
        source: ("gazzetta", "Gazzetta dello Sport"),
        league: "serie-a",
        category: "match-result",
    },
    Seed {
        id: "7",
        title: "World Cup 2026: Venues announced for USA, Canada, and Mexico",
        description: "FIFA has announced the official venues for the 2026 World Cup across three countries.",
        content: "FIFA has officially announced the venues for the 2026 World Cup...",
        url: "https://example.com/world-cup-venues",
        image: "https://images.unsplash.com/photo-1508098682722-e99c43a406b2?w=400&h=250&fit=crop",
        hours_ago: 36,
        source: ("fifa", "FIFA"),
        league: "world-cup",
        category: "tournament",
    },
    Seed {
        id: "8",
        title: "Europa League: Manchester United advances to quarterfinals",
        description: "Manchester United secured their place in the Europa League quarterfinals with a 2-1 aggregate win.",
        content: "Manchester United have advanced to the Europa League quarterfinals...",
        url: "https://example.com/united-europa",
        image: "https://images.unsplash.com/photo-1543326727-cf6c39e8f84c?w=400&h=250&fit=crop",
        hours_ago: 48,
        source: ("uefa", "UEFA"),
        league: "europa-league",
        category: "match-result",
    },
];

pub(super) fn mock_articles(now: DateTime<Utc>) -> Vec<NewsArticle> {
    SEEDS
        .iter()
        .map(|seed| NewsArticle {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            content: seed.content.to_string(),
            url: seed.url.to_string(),
            url_to_image: seed.image.to_string(),
            published_at: now - Duration::hours(seed.hours_ago),
            source: NewsSource {
                id: seed.source.0.to_string(),
                name: seed.source.1.to_string(),
            },
            league: Some(seed.league.to_string()),
            category: Some(seed.category.to_string()),
        })
        .collect()
}
