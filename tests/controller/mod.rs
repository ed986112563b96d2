mod league;
mod news;
mod preferences;
mod router;
mod user;
