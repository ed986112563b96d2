use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// League lifecycle failures. The `Display` text is the message shown to the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LeagueError {
    #[error("Name and competition are required")]
    MissingRequiredFields,
    #[error("Competition not found")]
    CompetitionNotFound(String),
    #[error("League must allow at least 2 members")]
    InvalidMaxMembers(i32),
    #[error("Squad size must be at least 1")]
    InvalidSquadSize(i32),
    #[error("Budget and entry fee cannot be negative")]
    NegativeAmount,
    #[error("League not found")]
    NotFound(i32),
    #[error("League is full")]
    Full(i32),
    #[error("League is no longer accepting new members")]
    NotAcceptingMembers(i32),
    #[error("You are already a member of this league")]
    AlreadyMember(i32),
    #[error("You are not a member of this league")]
    NotMember(i32),
    #[error("Only the league creator can start the draft")]
    NotCreator(i32),
    #[error("League is not in draft status")]
    NotInDraftStatus(i32),
    #[error("League needs at least 2 members to start draft")]
    NotEnoughMembers(i32),
    #[error("Only league admins can send invitations")]
    NotAdmin(i32),
    #[error("Username is required")]
    UsernameRequired,
    #[error("Email is required")]
    InviteEmailRequired,
    #[error("User not found")]
    InviteeNotFound,
    #[error("User is already in this league")]
    InviteeAlreadyMember,
    #[error("Invalid invitation type")]
    InvalidInviteType,
}

impl LeagueError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::CompetitionNotFound(_) | Self::NotFound(_) | Self::InviteeNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::NotMember(_) | Self::NotCreator(_) | Self::NotAdmin(_) => StatusCode::FORBIDDEN,
            Self::MissingRequiredFields
            | Self::InvalidMaxMembers(_)
            | Self::InvalidSquadSize(_)
            | Self::NegativeAmount
            | Self::Full(_)
            | Self::NotAcceptingMembers(_)
            | Self::AlreadyMember(_)
            | Self::NotInDraftStatus(_)
            | Self::NotEnoughMembers(_)
            | Self::UsernameRequired
            | Self::InviteEmailRequired
            | Self::InviteeAlreadyMember
            | Self::InvalidInviteType => StatusCode::BAD_REQUEST,
        }
    }

    fn league_id(&self) -> Option<i32> {
        match self {
            Self::NotFound(id)
            | Self::Full(id)
            | Self::NotAcceptingMembers(id)
            | Self::AlreadyMember(id)
            | Self::NotMember(id)
            | Self::NotCreator(id)
            | Self::NotInDraftStatus(id)
            | Self::NotEnoughMembers(id)
            | Self::NotAdmin(id) => Some(*id),
            _ => None,
        }
    }
}

impl IntoResponse for LeagueError {
    fn into_response(self) -> Response {
        match self.league_id() {
            Some(league_id) => tracing::debug!(league_id = %league_id, "{}", self),
            None => tracing::debug!("{}", self),
        }

        error_response(self.status(), self.to_string())
    }
}
