use super::*;

use crate::{
    model::league::InviteRequestDto,
    server::data::notification::NotificationRepository,
};

fn by_username(username: &str) -> InviteRequestDto {
    InviteRequestDto {
        kind: Some("username".to_string()),
        username: Some(username.to_string()),
        email: None,
    }
}

fn by_email(email: &str) -> InviteRequestDto {
    InviteRequestDto {
        kind: Some("email".to_string()),
        username: None,
        email: Some(email.to_string()),
    }
}

mod invite {
    use super::*;

    /// Expect a league invitation notification for the invited user
    #[tokio::test]
    async fn notifies_user_by_username() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_competition("premier-league")
            .build()
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let invitee = test
            .user()
            .insert_user_with_username("bob@example.com", "bobby")
            .await?;
        let league = test.league().insert_league(owner.id, "premier-league", 4).await?;

        let (target, outcome) = LeagueService::new(&test.db)
            .invite(&principal("owner@example.com"), league.id, by_username("bobby"))
            .await
            .unwrap();

        assert_eq!(outcome, InviteOutcome::Notified { user_id: invitee.id });
        assert_eq!(outcome.message(&target), "Invitation sent to bobby");

        let notifications = NotificationRepository::new(&test.db)
            .find_for_user(invitee.id)
            .await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "League Invitation");
        assert_eq!(
            notifications[0].action_url.as_deref(),
            Some(format!("/leagues/{}/join?invite=true", league.id).as_str())
        );
        assert_eq!(notifications[0].related_user_id, Some(owner.id));

        Ok(())
    }

    /// Expect an unregistered email to succeed without storing a notification
    #[tokio::test]
    async fn accepts_unregistered_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_competition("premier-league")
            .build()
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let league = test.league().insert_league(owner.id, "premier-league", 4).await?;

        let (target, outcome) = LeagueService::new(&test.db)
            .invite(
                &principal("owner@example.com"),
                league.id,
                by_email("friend@example.com"),
            )
            .await
            .unwrap();

        assert_eq!(
            outcome,
            InviteOutcome::PendingEmailDelivery {
                email: "friend@example.com".to_string()
            }
        );
        assert_eq!(
            outcome.message(&target),
            "Invitation sent to friend@example.com"
        );

        Ok(())
    }

    /// Expect NotAdmin for a regular member
    #[tokio::test]
    async fn rejects_non_admin() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_competition("premier-league")
            .build()
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let member = test.user().insert_user("member@example.com").await?;
        let league = test.league().insert_league(owner.id, "premier-league", 4).await?;
        test.league().insert_member(league.id, member.id).await?;

        let result = LeagueService::new(&test.db)
            .invite(
                &principal("member@example.com"),
                league.id,
                by_email("friend@example.com"),
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::LeagueError(LeagueError::NotAdmin(_)))
        ));

        Ok(())
    }

    /// Expect InviteeAlreadyMember when the invited user already plays in the league
    #[tokio::test]
    async fn rejects_existing_member() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_competition("premier-league")
            .build()
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let member = test.user().insert_user("member@example.com").await?;
        let league = test.league().insert_league(owner.id, "premier-league", 4).await?;
        test.league().insert_member(league.id, member.id).await?;

        let result = LeagueService::new(&test.db)
            .invite(
                &principal("owner@example.com"),
                league.id,
                by_email("member@example.com"),
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::LeagueError(LeagueError::InviteeAlreadyMember))
        ));

        Ok(())
    }

    /// Expect InviteeNotFound for an unknown username
    #[tokio::test]
    async fn rejects_unknown_username() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_competition("premier-league")
            .build()
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let league = test.league().insert_league(owner.id, "premier-league", 4).await?;

        let result = LeagueService::new(&test.db)
            .invite(&principal("owner@example.com"), league.id, by_username("ghost"))
            .await;

        assert!(matches!(
            result,
            Err(Error::LeagueError(LeagueError::InviteeNotFound))
        ));

        Ok(())
    }

    /// Expect Full to take precedence over the invitation type
    #[tokio::test]
    async fn rejects_full_league_before_type() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_competition("premier-league")
            .build()
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let member = test.user().insert_user("member@example.com").await?;
        let league = test.league().insert_league(owner.id, "premier-league", 2).await?;
        test.league().insert_member(league.id, member.id).await?;

        let result = LeagueService::new(&test.db)
            .invite(
                &principal("owner@example.com"),
                league.id,
                InviteRequestDto::default(),
            )
            .await;

        assert!(matches!(result, Err(Error::LeagueError(LeagueError::Full(_)))));

        Ok(())
    }
}

mod invite_target {
    use super::*;

    #[test]
    fn parses_request_types() {
        assert_eq!(
            InviteTarget::from_request(by_username(" bobby ")),
            Ok(InviteTarget::Username("bobby".to_string()))
        );
        assert_eq!(
            InviteTarget::from_request(InviteRequestDto {
                kind: Some("email".to_string()),
                ..Default::default()
            }),
            Err(LeagueError::InviteEmailRequired)
        );
        assert_eq!(
            InviteTarget::from_request(InviteRequestDto {
                kind: Some("sms".to_string()),
                ..Default::default()
            }),
            Err(LeagueError::InvalidInviteType)
        );
    }
}

mod invite_details {
    use super::*;

    /// Expect the public summary of an open league
    #[tokio::test]
    async fn returns_open_league_summary() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_competition("premier-league")
            .build()
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let league = test.league().insert_league(owner.id, "premier-league", 4).await?;

        let details = LeagueService::new(&test.db)
            .invite_details(league.id)
            .await
            .unwrap();

        assert_eq!(details.id, league.id);
        assert_eq!(details.creator.id, owner.id);
        assert_eq!(details.competition.id, "premier-league");

        Ok(())
    }

    /// Expect NotAcceptingMembers for a completed league
    #[tokio::test]
    async fn rejects_completed_league() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_competition("premier-league")
            .build()
            .await?;
        let owner = test.user().insert_user("owner@example.com").await?;
        let league = test
            .league()
            .insert_league_with(
                owner.id,
                "premier-league",
                4,
                LeagueType::Private,
                LeagueStatus::Completed,
            )
            .await?;

        let result = LeagueService::new(&test.db).invite_details(league.id).await;

        assert!(matches!(
            result,
            Err(Error::LeagueError(LeagueError::NotAcceptingMembers(_)))
        ));

        Ok(())
    }
}
