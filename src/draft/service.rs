use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

use crate::domain::nomination::{Nomination, NominationStatus};
use crate::domain::registration::Registration;
use crate::domain::repositories::{
    NominationRepository, RegistrationRepository, TeamMemberRepository, TeamRepository,
    TournamentRepository,
};
use crate::domain::team::Team;
use crate::domain::tournament::{DraftStatus, Tournament};
use crate::draft::errors::{DraftError, DraftResult};
use crate::draft::resolution::{self, Resolution};
use crate::draft::tie_break::TieBreak;

/// What the caller gets back from a recorded nomination
///
/// Resolution can run within the same call, so the returned status may
/// already be confirmed or cancelled rather than pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NominationReceipt {
    pub id: Uuid,
    pub status: NominationStatus,
}

/// Orchestrates the draft across tournaments, teams, memberships, and
/// nominations
///
/// The only component that touches multiple aggregates in one operation.
/// Every public operation serializes on a per-tournament async lock, so two
/// concurrent nominations for the same tournament cannot both observe "all
/// captains have nominated" and trigger a double resolution pass. Operations
/// on different tournaments do not contend.
pub struct DraftService {
    tournaments: Arc<dyn TournamentRepository>,
    teams: Arc<dyn TeamRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    nominations: Arc<dyn NominationRepository>,
    team_members: Arc<dyn TeamMemberRepository>,
    tie_break: Arc<dyn TieBreak>,
    locks: TournamentLocks,
}

impl DraftService {
    pub fn new(
        tournaments: Arc<dyn TournamentRepository>,
        teams: Arc<dyn TeamRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        nominations: Arc<dyn NominationRepository>,
        team_members: Arc<dyn TeamMemberRepository>,
        tie_break: Arc<dyn TieBreak>,
    ) -> Self {
        Self {
            tournaments,
            teams,
            registrations,
            nominations,
            team_members,
            tie_break,
            locks: TournamentLocks::new(),
        }
    }

    /// Starts the tournament's draft
    ///
    /// Forms one team per registered captain (idempotent: captains who
    /// already have a team are skipped), writes each team's id back onto the
    /// captain's membership, then transitions the draft to in-progress.
    /// Re-invoking after a partial failure completes the missing teams and
    /// assignments before attempting the transition again.
    pub async fn start_draft(&self, tournament_id: Uuid) -> DraftResult<DraftStatus> {
        let lock = self.locks.acquire(tournament_id);
        let _guard = lock.lock().await;

        let mut tournament = self.load_tournament(tournament_id).await?;

        let memberships = self
            .registrations
            .find_by_tournament(tournament_id)
            .await
            .map_err(DraftError::Storage)?;
        let participant_count = memberships.len();

        let captains: Vec<&Registration> =
            memberships.iter().filter(|m| m.is_captain()).collect();
        if captains.is_empty() {
            return Err(DraftError::NoCaptainsRegistered);
        }

        for captain in &captains {
            let team_id = self.ensure_team(tournament_id, captain).await?;

            if captain.team_id() != Some(team_id) {
                let mut updated = (*captain).clone();
                updated.assign_team(team_id);
                self.registrations
                    .save(&updated)
                    .await
                    .map_err(DraftError::Storage)?;
            }
        }

        let team_count = self
            .teams
            .find_by_tournament(tournament_id)
            .await
            .map_err(DraftError::Storage)?
            .len();

        tournament
            .start_draft(participant_count, team_count)
            .map_err(DraftError::PreconditionNotMet)?;
        self.tournaments
            .save(&tournament)
            .await
            .map_err(DraftError::Storage)?;

        tracing::info!(
            %tournament_id,
            captains = captains.len(),
            participants = participant_count,
            "draft started"
        );
        Ok(tournament.draft_status())
    }

    /// Records a captain's nomination and runs the resolution check
    ///
    /// The nomination is stamped with the tournament's current round and
    /// turn. If it completes the round (every captain now has a pending
    /// nomination), resolution runs before this call returns and the receipt
    /// carries the resolved status.
    pub async fn nominate(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
        participant_id: Uuid,
    ) -> DraftResult<NominationReceipt> {
        if tournament_id.is_nil() || captain_id.is_nil() || participant_id.is_nil() {
            return Err(DraftError::InvalidInput(
                "tournament, captain, and participant ids are required".to_string(),
            ));
        }

        let lock = self.locks.acquire(tournament_id);
        let _guard = lock.lock().await;

        let mut tournament = self.load_tournament(tournament_id).await?;
        if !tournament.draft_status().is_in_progress() {
            return Err(DraftError::DraftNotInProgress);
        }

        let memberships = self
            .registrations
            .find_by_tournament(tournament_id)
            .await
            .map_err(DraftError::Storage)?;

        let captain = memberships
            .iter()
            .find(|m| m.participant_id() == captain_id && m.is_captain())
            .ok_or_else(|| {
                DraftError::InvalidInput(format!(
                    "{} is not a registered captain of this tournament",
                    captain_id
                ))
            })?;
        // Captains are seated with their team at draft start; a flag that
        // appeared later has no seat in this draft
        if captain.team_id().is_none() {
            return Err(DraftError::InvalidInput(format!(
                "{} has no team in this draft",
                captain_id
            )));
        }

        let nominee = memberships
            .iter()
            .find(|m| m.participant_id() == participant_id)
            .ok_or_else(|| {
                DraftError::InvalidInput(format!(
                    "{} is not registered for this tournament",
                    participant_id
                ))
            })?;
        if nominee.team_id().is_some() {
            return Err(DraftError::InvalidInput(format!(
                "{} is already assigned to a team",
                participant_id
            )));
        }

        let existing = self
            .nominations
            .find_by_tournament_captain_participant(tournament_id, captain_id, participant_id)
            .await
            .map_err(DraftError::Storage)?;
        if existing.is_some() {
            return Err(DraftError::AlreadyNominated {
                captain_id,
                participant_id,
            });
        }

        let status = tournament.draft_status();
        let nomination = Nomination::propose(
            tournament_id,
            captain_id,
            participant_id,
            status.round(),
            status.turn(),
        );
        let nomination_id = nomination.id();
        self.nominations
            .save(&nomination)
            .await
            .map_err(DraftError::Storage)?;

        tracing::info!(
            %tournament_id,
            %captain_id,
            %participant_id,
            round = status.round(),
            turn = status.turn(),
            "nomination recorded"
        );

        let outcome = self.run_resolution(&mut tournament, &memberships).await?;

        let final_status = outcome
            .as_ref()
            .and_then(|resolution| {
                resolution
                    .confirmed
                    .iter()
                    .chain(resolution.cancelled.iter())
                    .find(|n| n.id() == nomination_id)
                    .map(|n| n.status())
            })
            .unwrap_or(NominationStatus::Pending);

        Ok(NominationReceipt {
            id: nomination_id,
            status: final_status,
        })
    }

    /// Wipes all draft state for the tournament
    ///
    /// Clears the member links of every team, soft-deleted ones included,
    /// before deleting the teams, then clears membership team assignments,
    /// purges nominations, and finally resets the tournament's status. Each
    /// step is re-runnable, so a failed reset never reports success and a
    /// retry picks up where it left off. Resetting a never-started
    /// tournament succeeds.
    pub async fn reset_draft(&self, tournament_id: Uuid) -> DraftResult<bool> {
        let lock = self.locks.acquire(tournament_id);
        let _guard = lock.lock().await;

        let mut tournament = self.load_tournament(tournament_id).await?;

        self.team_members
            .delete_by_tournament(tournament_id)
            .await
            .map_err(DraftError::ResetFailure)?;
        self.teams
            .delete_by_tournament(tournament_id)
            .await
            .map_err(DraftError::ResetFailure)?;
        self.registrations
            .clear_team_assignments(tournament_id)
            .await
            .map_err(DraftError::ResetFailure)?;
        self.nominations
            .delete_by_tournament(tournament_id)
            .await
            .map_err(DraftError::ResetFailure)?;

        tournament.reset_draft();
        self.tournaments
            .save(&tournament)
            .await
            .map_err(DraftError::ResetFailure)?;

        tracing::info!(%tournament_id, "draft reset");
        Ok(true)
    }

    /// Returns the tournament's current draft status
    pub async fn status(&self, tournament_id: Uuid) -> DraftResult<DraftStatus> {
        let tournament = self.load_tournament(tournament_id).await?;
        Ok(tournament.draft_status())
    }

    /// Runs a resolution pass if the current round is complete
    ///
    /// Returns `None` when captains are still outstanding. Otherwise applies
    /// the resolved outcome: confirmed nominees join their captain's team
    /// and membership, losers are recorded as cancelled, and the round/turn
    /// counters advance.
    async fn run_resolution(
        &self,
        tournament: &mut Tournament,
        memberships: &[Registration],
    ) -> DraftResult<Option<Resolution>> {
        let tournament_id = tournament.id();
        let current_round = tournament.draft_status().round();

        // Only seated captains count toward the round; a captain flag added
        // mid-draft carries no team assignment and stays out of the loop
        let captain_ids: Vec<Uuid> = memberships
            .iter()
            .filter(|m| m.is_captain() && m.team_id().is_some())
            .map(|m| m.participant_id())
            .collect();

        let pending: Vec<Nomination> = self
            .nominations
            .find_by_tournament(tournament_id)
            .await
            .map_err(DraftError::Storage)?
            .into_iter()
            .filter(|n| n.is_pending() && n.round() == current_round)
            .collect();

        if !resolution::all_captains_nominated(&captain_ids, &pending) {
            return Ok(None);
        }

        let outcome =
            resolution::resolve(pending, self.tie_break.as_ref()).map_err(DraftError::Storage)?;

        for nomination in &outcome.confirmed {
            self.place_on_team(tournament_id, nomination, memberships)
                .await?;
            self.nominations
                .save(nomination)
                .await
                .map_err(DraftError::Storage)?;
        }
        for nomination in &outcome.cancelled {
            self.nominations
                .save(nomination)
                .await
                .map_err(DraftError::Storage)?;
        }

        let mut status = tournament.draft_status();
        resolution::advance(&mut status, captain_ids.len(), outcome.had_conflict)
            .map_err(DraftError::Storage)?;
        tournament.set_draft_status(status);
        self.tournaments
            .save(tournament)
            .await
            .map_err(DraftError::Storage)?;

        tracing::info!(
            %tournament_id,
            confirmed = outcome.confirmed.len(),
            cancelled = outcome.cancelled.len(),
            had_conflict = outcome.had_conflict,
            round = status.round(),
            turn = status.turn(),
            "resolution pass applied"
        );
        Ok(Some(outcome))
    }

    /// Adds a confirmed nominee to the winning captain's team and membership
    async fn place_on_team(
        &self,
        tournament_id: Uuid,
        nomination: &Nomination,
        memberships: &[Registration],
    ) -> DraftResult<()> {
        let mut team = self
            .teams
            .find_by_tournament_and_captain(tournament_id, nomination.captain_id())
            .await
            .map_err(DraftError::Storage)?
            .ok_or_else(|| {
                DraftError::Storage(format!(
                    "No team found for captain {}",
                    nomination.captain_id()
                ))
            })?;

        team.add_member(nomination.participant_id())
            .map_err(DraftError::Storage)?;
        self.teams.save(&team).await.map_err(DraftError::Storage)?;

        let membership = memberships
            .iter()
            .find(|m| m.participant_id() == nomination.participant_id())
            .ok_or_else(|| {
                DraftError::Storage(format!(
                    "No membership found for participant {}",
                    nomination.participant_id()
                ))
            })?;
        let mut updated = membership.clone();
        updated.assign_team(team.id());
        self.registrations
            .save(&updated)
            .await
            .map_err(DraftError::Storage)?;

        Ok(())
    }

    /// Finds or creates the captain's team, returning its id
    async fn ensure_team(
        &self,
        tournament_id: Uuid,
        captain: &Registration,
    ) -> DraftResult<Uuid> {
        let existing = self
            .teams
            .find_by_tournament_and_captain(tournament_id, captain.participant_id())
            .await
            .map_err(DraftError::Storage)?;

        match existing {
            Some(team) => Ok(team.id()),
            None => {
                let name = format!("Team {}", captain.display_name());
                let team = Team::new(tournament_id, captain.participant_id(), name)
                    .map_err(DraftError::PreconditionNotMet)?;
                self.teams.save(&team).await.map_err(DraftError::Storage)?;
                Ok(team.id())
            }
        }
    }

    async fn load_tournament(&self, tournament_id: Uuid) -> DraftResult<Tournament> {
        self.tournaments
            .find_by_id(tournament_id)
            .await
            .map_err(DraftError::Storage)?
            .ok_or(DraftError::TournamentNotFound(tournament_id))
    }
}

/// Per-tournament serialization locks, created on first use
///
/// An entry whose lock no task currently holds is pruned on the next
/// acquire, so the registry does not grow with every tournament ever
/// touched.
struct TournamentLocks {
    entries: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl TournamentLocks {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn acquire(&self, tournament_id: Uuid) -> Arc<AsyncMutex<()>> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, lock| Arc::strong_count(lock) > 1);
        entries
            .entry(tournament_id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}
