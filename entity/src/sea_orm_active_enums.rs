use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a fantasy league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeagueStatus {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "AUCTION")]
    Auction,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

impl LeagueStatus {
    /// Statuses in which a league still takes on new members.
    pub const OPEN: [LeagueStatus; 2] = [LeagueStatus::Draft, LeagueStatus::Auction];

    pub fn accepts_members(&self) -> bool {
        match self {
            LeagueStatus::Draft | LeagueStatus::Auction => true,
            LeagueStatus::Active | LeagueStatus::Completed => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeagueType {
    #[sea_orm(string_value = "PRIVATE")]
    Private,
    #[sea_orm(string_value = "PUBLIC")]
    Public,
}

/// How league members build their squads once the draft starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionMethod {
    #[sea_orm(string_value = "AUCTION")]
    Auction,
    #[sea_orm(string_value = "DRAFT")]
    Draft,
}

impl SelectionMethod {
    /// Status a league moves to when its creator starts the draft.
    pub fn started_status(&self) -> LeagueStatus {
        match self {
            SelectionMethod::Auction => LeagueStatus::Auction,
            SelectionMethod::Draft => LeagueStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    #[sea_orm(string_value = "LEAGUE_INVITE")]
    LeagueInvite,
    #[sea_orm(string_value = "DRAFT_STARTED")]
    DraftStarted,
    #[sea_orm(string_value = "SYSTEM")]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    #[sea_orm(string_value = "LEAGUE_CREATE")]
    LeagueCreate,
    #[sea_orm(string_value = "LEAGUE_JOIN")]
    LeagueJoin,
    #[sea_orm(string_value = "DRAFT_START")]
    DraftStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum NewsFrequency {
    #[sea_orm(string_value = "instant")]
    Instant,
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "weekly")]
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum PlayerPosition {
    #[sea_orm(string_value = "GK")]
    #[serde(rename = "GK")]
    Goalkeeper,
    #[sea_orm(string_value = "DEF")]
    #[serde(rename = "DEF")]
    Defender,
    #[sea_orm(string_value = "MID")]
    #[serde(rename = "MID")]
    Midfielder,
    #[sea_orm(string_value = "FWD")]
    #[serde(rename = "FWD")]
    Forward,
}
