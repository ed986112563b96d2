use chrono::Utc;
use entity::sea_orm_active_enums::{ActivityType, LeagueStatus};
use sea_orm::TransactionTrait;
use serde_json::json;

use crate::{
    model::league::StartDraftResponseDto,
    server::{
        data::{
            activity_log::ActivityLogRepository, league::LeagueRepository,
            membership::MembershipRepository, notification::NotificationRepository,
        },
        error::{league::LeagueError, Error},
        identity::Principal,
        service::user::UserService,
    },
};

use super::LeagueService;

impl<'a> LeagueService<'a> {
    /// Moves a league out of draft status on behalf of its creator
    ///
    /// Auction leagues move to `AUCTION`, draft leagues to `ACTIVE`. The status change only
    /// applies while the league is still in `DRAFT`, so two concurrent starts cannot both
    /// succeed. Every other member is notified.
    pub async fn start_draft(
        &self,
        principal: &Principal,
        league_id: i32,
    ) -> Result<StartDraftResponseDto, Error> {
        let user = UserService::new(self.db).require_user(principal).await?;

        let league = LeagueRepository::new(self.db)
            .find_by_id(league_id)
            .await?
            .ok_or(LeagueError::NotFound(league_id))?;

        if league.creator_id != user.id {
            return Err(LeagueError::NotCreator(league_id).into());
        }
        if league.status != LeagueStatus::Draft {
            return Err(LeagueError::NotInDraftStatus(league_id).into());
        }
        if league.current_members < 2 {
            return Err(LeagueError::NotEnoughMembers(league_id).into());
        }

        let new_status = league.selection_method.started_status();
        let now = Utc::now().naive_utc();

        let txn = self.db.begin().await?;

        if !LeagueRepository::new(&txn)
            .start_draft(league_id, new_status, now)
            .await?
        {
            txn.rollback().await?;

            return Err(LeagueError::NotInDraftStatus(league_id).into());
        }

        ActivityLogRepository::new(&txn)
            .record(
                user.id,
                Some(league_id),
                ActivityType::DraftStart,
                format!("Draft started for {}", league.name),
                json!({ "action": "draft_start", "status": new_status }),
            )
            .await?;

        let member_ids: Vec<i32> = MembershipRepository::new(&txn)
            .roster(league_id)
            .await?
            .into_iter()
            .map(|(membership, _)| membership.user_id)
            .filter(|member_id| *member_id != user.id)
            .collect();

        NotificationRepository::new(&txn)
            .notify_draft_started(&member_ids, league_id, &league.name, user.id)
            .await?;

        txn.commit().await?;

        tracing::info!(league_id = %league_id, status = ?new_status, "Draft started");

        Ok(StartDraftResponseDto {
            success: true,
            message: format!(
                "Draft started successfully! League status updated to {}",
                status_label(new_status)
            ),
            league_status: new_status,
        })
    }
}

fn status_label(status: LeagueStatus) -> &'static str {
    match status {
        LeagueStatus::Draft => "DRAFT",
        LeagueStatus::Auction => "AUCTION",
        LeagueStatus::Active => "ACTIVE",
        LeagueStatus::Completed => "COMPLETED",
    }
}
