use super::*;

use crate::server::data::{
    activity_log::ActivityLogRepository, league::ScoringRuleRepository,
    membership::MembershipRepository,
};

/// Expect defaults applied and the creator set up as admin with the full budget
#[tokio::test]
async fn creates_league_with_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_competition("premier-league")
        .build()
        .await?;

    let league_service = LeagueService::new(&test.db);
    let league = league_service
        .create_league(
            &principal("alice@example.com"),
            create_request("Sunday Legends", "premier-league"),
        )
        .await
        .unwrap();

    assert_eq!(league.league_type, LeagueType::Private);
    assert_eq!(league.status, LeagueStatus::Draft);
    assert_eq!(league.max_members, 12);
    assert_eq!(league.current_members, 1);
    assert_eq!(league.budget_limit, 100_000_000);
    assert_eq!(league.squad_size, 15);
    assert!(league.has_playoffs);
    assert_eq!(league.creator.email, "alice@example.com");
    assert_eq!(league.competition.id, "premier-league");

    let membership = MembershipRepository::new(&test.db)
        .find(league.id, league.creator_id)
        .await?
        .unwrap();
    assert!(membership.is_admin);
    assert_eq!(membership.team_name, "alice's Team");
    assert_eq!(membership.remaining_budget, 100_000_000);

    let rules = ScoringRuleRepository::new(&test.db)
        .find_by_league(league.id)
        .await?
        .unwrap();
    assert_eq!(rules.goal_points, 5);
    assert_eq!(rules.red_card_points, -3);

    let activity = ActivityLogRepository::new(&test.db)
        .find_by_league(league.id)
        .await?;
    assert_eq!(activity.len(), 1);

    Ok(())
}

/// Expect MissingRequiredFields when the name is blank
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_competition("premier-league")
        .build()
        .await?;

    let result = LeagueService::new(&test.db)
        .create_league(
            &principal("alice@example.com"),
            create_request("   ", "premier-league"),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::LeagueError(LeagueError::MissingRequiredFields))
    ));

    Ok(())
}

/// Expect InvalidMaxMembers for a league capped below two members
#[tokio::test]
async fn rejects_single_member_cap() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_competition("premier-league")
        .build()
        .await?;

    let result = LeagueService::new(&test.db)
        .create_league(
            &principal("alice@example.com"),
            CreateLeagueDto {
                max_members: Some(1),
                ..create_request("Solo", "premier-league")
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::LeagueError(LeagueError::InvalidMaxMembers(1)))
    ));

    Ok(())
}

/// Expect CompetitionNotFound and no user row created for an unknown competition
#[tokio::test]
async fn rejects_unknown_competition() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;

    let result = LeagueService::new(&test.db)
        .create_league(
            &principal("alice@example.com"),
            create_request("Sunday Legends", "mls"),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::LeagueError(LeagueError::CompetitionNotFound(_)))
    ));
    let user = crate::server::data::user::UserRepository::new(&test.db)
        .find_by_email("alice@example.com")
        .await?;
    assert!(user.is_none());

    Ok(())
}

/// Expect NegativeAmount for a negative entry fee
#[tokio::test]
async fn rejects_negative_entry_fee() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_competition("premier-league")
        .build()
        .await?;

    let result = LeagueService::new(&test.db)
        .create_league(
            &principal("alice@example.com"),
            CreateLeagueDto {
                entry_fee: Some(-500),
                ..create_request("Sunday Legends", "premier-league")
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::LeagueError(LeagueError::NegativeAmount))
    ));

    Ok(())
}
