mod create_league;
mod invite;

use entity::sea_orm_active_enums::{LeagueStatus, LeagueType};
use matchday_test_utils::prelude::*;

use super::*;
use crate::{
    model::league::CreateLeagueDto,
    server::{
        error::{league::LeagueError, Error},
        identity::Principal,
    },
};

fn principal(email: &str) -> Principal {
    Principal {
        email: email.to_string(),
        name: None,
    }
}

fn create_request(name: &str, competition_id: &str) -> CreateLeagueDto {
    CreateLeagueDto {
        name: Some(name.to_string()),
        competition_id: Some(competition_id.to_string()),
        ..Default::default()
    }
}
