use crate::{
    model::league::{InviteDetailsDto, InviteRequestDto},
    server::{
        data::{
            league::LeagueRepository,
            membership::MembershipRepository,
            notification::{LeagueInvite, NotificationRepository},
            reference::CompetitionRepository,
            user::UserRepository,
        },
        error::{league::LeagueError, Error},
        identity::Principal,
        model::db::{FantasyLeagueModel, UserModel},
        service::user::UserService,
    },
};

use super::LeagueService;

/// Who an invitation is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteTarget {
    Username(String),
    Email(String),
}

impl InviteTarget {
    /// Reads the target from a request body
    ///
    /// # Returns
    /// - `Err(LeagueError::UsernameRequired)` - `type` is `username` without a username
    /// - `Err(LeagueError::InviteEmailRequired)` - `type` is `email` without an email
    /// - `Err(LeagueError::InvalidInviteType)` - Missing or unknown `type`
    pub fn from_request(request: InviteRequestDto) -> Result<Self, LeagueError> {
        let value = |v: Option<String>| v.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        match request.kind.as_deref() {
            Some("username") => value(request.username)
                .map(Self::Username)
                .ok_or(LeagueError::UsernameRequired),
            Some("email") => value(request.email)
                .map(Self::Email)
                .ok_or(LeagueError::InviteEmailRequired),
            _ => Err(LeagueError::InvalidInviteType),
        }
    }
}

/// Result of a successful invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteOutcome {
    /// A league invite notification was stored for an existing user
    Notified { user_id: i32 },
    /// No account uses the email yet; delivery is left to an out-of-band mailer
    PendingEmailDelivery { email: String },
}

impl InviteOutcome {
    pub fn message(&self, target: &InviteTarget) -> String {
        match target {
            InviteTarget::Username(username) => format!("Invitation sent to {}", username),
            InviteTarget::Email(email) => format!("Invitation sent to {}", email),
        }
    }
}

impl<'a> LeagueService<'a> {
    /// Invites a user to a league on behalf of one of its admins
    ///
    /// The caller must be a league admin and the league must have room. Username invites
    /// require an existing user; email invites to unknown addresses succeed without storing
    /// anything.
    pub async fn invite(
        &self,
        principal: &Principal,
        league_id: i32,
        request: InviteRequestDto,
    ) -> Result<(InviteTarget, InviteOutcome), Error> {
        let inviter = UserService::new(self.db).require_user(principal).await?;

        let league = LeagueRepository::new(self.db)
            .find_by_id(league_id)
            .await?
            .ok_or(LeagueError::NotFound(league_id))?;

        let is_admin = MembershipRepository::new(self.db)
            .find(league_id, inviter.id)
            .await?
            .is_some_and(|m| m.is_admin);
        if !is_admin {
            return Err(LeagueError::NotAdmin(league_id).into());
        }
        if league.current_members >= league.max_members {
            return Err(LeagueError::Full(league_id).into());
        }

        let target = InviteTarget::from_request(request)?;
        let user_repo = UserRepository::new(self.db);

        let outcome = match &target {
            InviteTarget::Username(username) => {
                let invitee = user_repo
                    .find_by_username(username)
                    .await?
                    .ok_or(LeagueError::InviteeNotFound)?;

                self.notify_invitee(&league, &inviter, &invitee).await?
            }
            InviteTarget::Email(email) => match user_repo.find_by_email(email).await? {
                Some(invitee) => self.notify_invitee(&league, &inviter, &invitee).await?,
                None => {
                    tracing::info!(
                        league_id = %league_id,
                        inviter_id = %inviter.id,
                        "Invitation to unregistered email awaiting delivery"
                    );

                    InviteOutcome::PendingEmailDelivery {
                        email: email.clone(),
                    }
                }
            },
        };

        Ok((target, outcome))
    }

    async fn notify_invitee(
        &self,
        league: &FantasyLeagueModel,
        inviter: &UserModel,
        invitee: &UserModel,
    ) -> Result<InviteOutcome, Error> {
        if MembershipRepository::new(self.db)
            .find(league.id, invitee.id)
            .await?
            .is_some()
        {
            return Err(LeagueError::InviteeAlreadyMember.into());
        }

        NotificationRepository::new(self.db)
            .create_league_invite(LeagueInvite {
                user_id: invitee.id,
                league_id: league.id,
                inviter_id: inviter.id,
                title: "League Invitation".to_string(),
                content: format!("You've been invited to join \"{}\"", league.name),
                action_url: format!("/leagues/{}/join?invite=true", league.id),
            })
            .await?;

        tracing::debug!(league_id = %league.id, invitee_id = %invitee.id, "League invite stored");

        Ok(InviteOutcome::Notified {
            user_id: invitee.id,
        })
    }

    /// Public summary of a league shown on an invitation link
    ///
    /// # Returns
    /// - `Err(LeagueError::NotFound)` - No league with `league_id`
    /// - `Err(LeagueError::Full)` - No member slot left
    /// - `Err(LeagueError::NotAcceptingMembers)` - Draft already started or league completed
    pub async fn invite_details(&self, league_id: i32) -> Result<InviteDetailsDto, Error> {
        let league = LeagueRepository::new(self.db)
            .find_by_id(league_id)
            .await?
            .ok_or(LeagueError::NotFound(league_id))?;

        if league.current_members >= league.max_members {
            return Err(LeagueError::Full(league_id).into());
        }
        if !league.status.accepts_members() {
            return Err(LeagueError::NotAcceptingMembers(league_id).into());
        }

        let creator = UserRepository::new(self.db)
            .find_by_id(league.creator_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Creator user ID {} of league ID {} not found",
                    league.creator_id, league.id
                ))
            })?;
        let competition = CompetitionRepository::new(self.db)
            .find_by_id(&league.competition_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Competition {} of league ID {} not found",
                    league.competition_id, league.id
                ))
            })?;

        Ok(InviteDetailsDto {
            id: league.id,
            name: league.name,
            description: league.description,
            competition: (&competition).into(),
            creator: (&creator).into(),
            current_members: league.current_members,
            max_members: league.max_members,
            status: league.status,
            league_type: league.league_type,
        })
    }
}
