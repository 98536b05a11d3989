use super::draft_status::{DraftState, DraftStatus};
use super::events::TournamentEvent;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fewest registered participants required before a draft may start.
pub const MIN_PARTICIPANTS: usize = 2;

/// Tournament aggregate root
///
/// Represents one tournament and the progress of its team-formation draft.
/// Enforces the business rules around starting, completing, and resetting
/// the draft.
///
/// # Invariants
/// - Name cannot be empty
/// - The draft enters in-progress only with enough participants and at
///   least one formed team (the captain requirement is checked by the
///   draft service, which owns the membership view)
/// - The embedded status only moves through defined transitions
///
/// # Example
/// ```
/// use draftday_api::domain::tournament::Tournament;
///
/// let (tournament, events) = Tournament::new("Spring Invitational".to_string())
///     .expect("valid tournament");
///
/// assert_eq!(tournament.name(), "Spring Invitational");
/// assert!(!events.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Tournament {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    draft_status: DraftStatus,
}

impl Tournament {
    /// Creates a new Tournament aggregate
    ///
    /// # Arguments
    /// * `name` - The tournament's display name (cannot be empty)
    ///
    /// # Returns
    /// * `Ok((Tournament, Vec<TournamentEvent>))` - New tournament and events generated
    /// * `Err(String)` - If any invariant is violated
    ///
    /// # Business Rules Enforced
    /// - Name must not be empty or whitespace
    /// - Drafts always begin in the not-started state at round 0, turn 0
    pub fn new(name: String) -> Result<(Self, Vec<TournamentEvent>), String> {
        if name.trim().is_empty() {
            return Err("Tournament name cannot be empty".to_string());
        }

        let tournament = Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            draft_status: DraftStatus::new(),
        };

        let events = vec![TournamentEvent::Created {
            tournament_id: tournament.id,
            name: tournament.name.clone(),
        }];

        Ok((tournament, events))
    }

    /// Starts the draft (transitions from NotStarted to InProgress)
    ///
    /// # Arguments
    /// * `participant_count` - Number of registered memberships
    /// * `team_count` - Number of teams formed for this tournament
    ///
    /// # Returns
    /// * `Ok(TournamentEvent)` - DraftStarted event generated
    /// * `Err(String)` - If preconditions or the state transition fail
    ///
    /// # Business Rules
    /// - At least `MIN_PARTICIPANTS` participants must be registered
    /// - At least one team must exist
    /// - The draft must currently be in the not-started state
    pub fn start_draft(
        &mut self,
        participant_count: usize,
        team_count: usize,
    ) -> Result<TournamentEvent, String> {
        if participant_count < MIN_PARTICIPANTS {
            return Err(format!(
                "Draft requires at least {} participants, found {}",
                MIN_PARTICIPANTS, participant_count
            ));
        }

        if team_count == 0 {
            return Err("Draft requires at least one team".to_string());
        }

        self.draft_status.start()?;

        Ok(TournamentEvent::DraftStarted {
            tournament_id: self.id,
        })
    }

    /// Explicitly completes the draft
    ///
    /// # Returns
    /// * `Ok(TournamentEvent)` - DraftCompleted event generated
    /// * `Err(String)` - If the draft is not in progress
    pub fn complete_draft(&mut self) -> Result<TournamentEvent, String> {
        self.draft_status.complete()?;

        Ok(TournamentEvent::DraftCompleted {
            tournament_id: self.id,
        })
    }

    /// Wipes the draft back to its initial state
    ///
    /// Valid from any state; resetting an idle draft is a no-op that still
    /// reports success.
    pub fn reset_draft(&mut self) -> TournamentEvent {
        self.draft_status.reset();

        TournamentEvent::DraftReset {
            tournament_id: self.id,
        }
    }

    /// True while captain flags may be toggled on memberships
    ///
    /// Captaincy is frozen for the duration of a running draft; changing the
    /// captain set mid-draft would invalidate the round's nomination check.
    pub fn allows_captain_changes(&self) -> bool {
        self.draft_status.state() != DraftState::InProgress
    }

    // ===== Getters =====

    /// Returns the tournament's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the tournament's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the current draft status
    pub fn draft_status(&self) -> DraftStatus {
        self.draft_status
    }

    /// Replaces the draft status with an updated copy
    ///
    /// Used by the draft service after advancing round/turn through the
    /// status's own transition methods.
    pub fn set_draft_status(&mut self, status: DraftStatus) {
        self.draft_status = status;
    }

    /// Reconstructs a Tournament from persistence layer data
    ///
    /// Bypasses business rules validation since the data is already
    /// validated and stored in the database. Only to be used by repository
    /// implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        created_at: DateTime<Utc>,
        draft_status: DraftStatus,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            draft_status,
        }
    }
}
