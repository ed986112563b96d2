use super::TeamInfo;

pub(super) static TEAMS: [TeamInfo; 31] = [
    // Premier League
    TeamInfo {
        id: "man-city",
        name: "Manchester City",
        short_name: "MCI",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Manchester-City-Logo.png",
        league: "Premier League",
        league_id: "premier-league",
        country: "England",
        primary_color: "#6CABDD",
        secondary_color: None,
    },
    TeamInfo {
        id: "arsenal",
        name: "Arsenal",
        short_name: "ARS",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Arsenal-Logo.png",
        league: "Premier League",
        league_id: "premier-league",
        country: "England",
        primary_color: "#EF0107",
        secondary_color: None,
    },
    TeamInfo {
        id: "liverpool",
        name: "Liverpool",
        short_name: "LIV",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Liverpool-Logo.png",
        league: "Premier League",
        league_id: "premier-league",
        country: "England",
        primary_color: "#C8102E",
        secondary_color: None,
    },
    TeamInfo {
        id: "man-united",
        name: "Manchester United",
        short_name: "MUN",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Manchester-United-Logo.png",
        league: "Premier League",
        league_id: "premier-league",
        country: "England",
        primary_color: "#DA020E",
        secondary_color: None,
    },
    TeamInfo {
        id: "chelsea",
        name: "Chelsea",
        short_name: "CHE",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Chelsea-Logo.png",
        league: "Premier League",
        league_id: "premier-league",
        country: "England",
        primary_color: "#034694",
        secondary_color: None,
    },
    TeamInfo {
        id: "tottenham",
        name: "Tottenham Hotspur",
        short_name: "TOT",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Tottenham-Logo.png",
        league: "Premier League",
        league_id: "premier-league",
        country: "England",
        primary_color: "#132257",
        secondary_color: None,
    },
    TeamInfo {
        id: "newcastle",
        name: "Newcastle United",
        short_name: "NEW",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Newcastle-United-Logo.png",
        league: "Premier League",
        league_id: "premier-league",
        country: "England",
        primary_color: "#241F20",
        secondary_color: None,
    },
    TeamInfo {
        id: "aston-villa",
        name: "Aston Villa",
        short_name: "AVL",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Aston-Villa-Logo.png",
        league: "Premier League",
        league_id: "premier-league",
        country: "England",
        primary_color: "#670E36",
        secondary_color: None,
    },
    // La Liga
    TeamInfo {
        id: "real-madrid",
        name: "Real Madrid",
        short_name: "RMA",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Real-Madrid-Logo.png",
        league: "La Liga",
        league_id: "la-liga",
        country: "Spain",
        primary_color: "#FFFFFF",
        secondary_color: Some("#000000"),
    },
    TeamInfo {
        id: "barcelona",
        name: "FC Barcelona",
        short_name: "BAR",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Barcelona-Logo.png",
        league: "La Liga",
        league_id: "la-liga",
        country: "Spain",
        primary_color: "#A50044",
        secondary_color: None,
    },
    TeamInfo {
        id: "atletico-madrid",
        name: "Atlético Madrid",
        short_name: "ATM",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Atletico-Madrid-Logo.png",
        league: "La Liga",
        league_id: "la-liga",
        country: "Spain",
        primary_color: "#CE3524",
        secondary_color: None,
    },
    TeamInfo {
        id: "sevilla",
        name: "Sevilla FC",
        short_name: "SEV",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Sevilla-Logo.png",
        league: "La Liga",
        league_id: "la-liga",
        country: "Spain",
        primary_color: "#D71920",
        secondary_color: None,
    },
    TeamInfo {
        id: "valencia",
        name: "Valencia CF",
        short_name: "VAL",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Valencia-Logo.png",
        league: "La Liga",
        league_id: "la-liga",
        country: "Spain",
        primary_color: "#FF8C00",
        secondary_color: None,
    },
    TeamInfo {
        id: "villarreal",
        name: "Villarreal CF",
        short_name: "VIL",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Villarreal-Logo.png",
        league: "La Liga",
        league_id: "la-liga",
        country: "Spain",
        primary_color: "#FFE500",
        secondary_color: None,
    },
    // Serie A
    TeamInfo {
        id: "juventus",
        name: "Juventus",
        short_name: "JUV",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Juventus-Logo.png",
        league: "Serie A",
        league_id: "serie-a",
        country: "Italy",
        primary_color: "#000000",
        secondary_color: None,
    },
    TeamInfo {
        id: "inter-milan",
        name: "Inter Milan",
        short_name: "INT",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Inter-Milan-Logo.png",
        league: "Serie A",
        league_id: "serie-a",
        country: "Italy",
        primary_color: "#0068A8",
        secondary_color: None,
    },
    TeamInfo {
        id: "ac-milan",
        name: "AC Milan",
        short_name: "MIL",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/AC-Milan-Logo.png",
        league: "Serie A",
        league_id: "serie-a",
        country: "Italy",
        primary_color: "#FB090B",
        secondary_color: None,
    },
    TeamInfo {
        id: "napoli",
        name: "SSC Napoli",
        short_name: "NAP",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Napoli-Logo.png",
        league: "Serie A",
        league_id: "serie-a",
        country: "Italy",
        primary_color: "#087BC4",
        secondary_color: None,
    },
    TeamInfo {
        id: "roma",
        name: "AS Roma",
        short_name: "ROM",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/AS-Roma-Logo.png",
        league: "Serie A",
        league_id: "serie-a",
        country: "Italy",
        primary_color: "#CC2129",
        secondary_color: None,
    },
    TeamInfo {
        id: "lazio",
        name: "SS Lazio",
        short_name: "LAZ",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Lazio-Logo.png",
        league: "Serie A",
        league_id: "serie-a",
        country: "Italy",
        primary_color: "#87CEEB",
        secondary_color: None,
    },
    // Bundesliga
    TeamInfo {
        id: "bayern-munich",
        name: "Bayern Munich",
        short_name: "BAY",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Bayern-Munich-Logo.png",
        league: "Bundesliga",
        league_id: "bundesliga",
        country: "Germany",
        primary_color: "#DC052D",
        secondary_color: None,
    },
    TeamInfo {
        id: "borussia-dortmund",
        name: "Borussia Dortmund",
        short_name: "BVB",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Borussia-Dortmund-Logo.png",
        league: "Bundesliga",
        league_id: "bundesliga",
        country: "Germany",
        primary_color: "#FDE100",
        secondary_color: None,
    },
    TeamInfo {
        id: "rb-leipzig",
        name: "RB Leipzig",
        short_name: "RBL",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/RB-Leipzig-Logo.png",
        league: "Bundesliga",
        league_id: "bundesliga",
        country: "Germany",
        primary_color: "#DD0741",
        secondary_color: None,
    },
    TeamInfo {
        id: "bayer-leverkusen",
        name: "Bayer Leverkusen",
        short_name: "B04",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Bayer-Leverkusen-Logo.png",
        league: "Bundesliga",
        league_id: "bundesliga",
        country: "Germany",
        primary_color: "#E32221",
        secondary_color: None,
    },
    TeamInfo {
        id: "eintracht-frankfurt",
        name: "Eintracht Frankfurt",
        short_name: "SGE",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Eintracht-Frankfurt-Logo.png",
        league: "Bundesliga",
        league_id: "bundesliga",
        country: "Germany",
        primary_color: "#E1000F",
        secondary_color: None,
    },
    // Ligue 1
    TeamInfo {
        id: "psg",
        name: "Paris Saint-Germain",
        short_name: "PSG",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/PSG-Logo.png",
        league: "Ligue 1",
        league_id: "ligue-1",
        country: "France",
        primary_color: "#004170",
        secondary_color: None,
    },
    TeamInfo {
        id: "marseille",
        name: "Olympique Marseille",
        short_name: "OM",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Marseille-Logo.png",
        league: "Ligue 1",
        league_id: "ligue-1",
        country: "France",
        primary_color: "#009BDB",
        secondary_color: None,
    },
    TeamInfo {
        id: "lyon",
        name: "Olympique Lyon",
        short_name: "OL",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Lyon-Logo.png",
        league: "Ligue 1",
        league_id: "ligue-1",
        country: "France",
        primary_color: "#CC092F",
        secondary_color: None,
    },
    TeamInfo {
        id: "monaco",
        name: "AS Monaco",
        short_name: "ASM",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Monaco-Logo.png",
        league: "Ligue 1",
        league_id: "ligue-1",
        country: "France",
        primary_color: "#CC092F",
        secondary_color: None,
    },
    TeamInfo {
        id: "lille",
        name: "Lille OSC",
        short_name: "LOSC",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Lille-Logo.png",
        league: "Ligue 1",
        league_id: "ligue-1",
        country: "France",
        primary_color: "#D20A2E",
        secondary_color: None,
    },
    TeamInfo {
        id: "nice",
        name: "OGC Nice",
        short_name: "NICE",
        logo_url: "https://logos-world.net/wp-content/uploads/2020/06/Nice-Logo.png",
        league: "Ligue 1",
        league_id: "ligue-1",
        country: "France",
        primary_color: "#D20A2E",
        secondary_color: None,
    },
];
