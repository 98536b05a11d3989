use super::value_objects::NominationStatus;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A captain's recorded proposal to draft a participant
///
/// Stamped with the round and turn in which it was made. Nominations start
/// pending and are either confirmed or cancelled by the resolution pass;
/// they stay in the store as the draft's audit trail until a reset purges
/// them. While a row for a (tournament, captain, participant) triple exists,
/// the same captain cannot nominate the same participant again.
#[derive(Debug, Clone)]
pub struct Nomination {
    id: Uuid,
    tournament_id: Uuid,
    captain_id: Uuid,
    participant_id: Uuid,
    round: i32,
    turn: i32,
    status: NominationStatus,
    created_at: DateTime<Utc>,
}

impl Nomination {
    /// Records a new pending nomination stamped with the current round/turn
    pub fn propose(
        tournament_id: Uuid,
        captain_id: Uuid,
        participant_id: Uuid,
        round: i32,
        turn: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            captain_id,
            participant_id,
            round,
            turn,
            status: NominationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Resolves the nomination in the captain's favor
    ///
    /// # Errors
    /// Fails unless the nomination is still pending.
    pub fn confirm(&mut self) -> Result<(), String> {
        let next = NominationStatus::Confirmed;
        if !self.status.can_transition_to(next) {
            return Err(format!("Cannot confirm a {} nomination", self.status));
        }

        self.status = next;
        Ok(())
    }

    /// Resolves the nomination against the captain after a lost tie-break
    ///
    /// # Errors
    /// Fails unless the nomination is still pending.
    pub fn cancel(&mut self) -> Result<(), String> {
        let next = NominationStatus::Cancelled;
        if !self.status.can_transition_to(next) {
            return Err(format!("Cannot cancel a {} nomination", self.status));
        }

        self.status = next;
        Ok(())
    }

    // ===== Getters =====

    /// Returns the nomination's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the tournament this nomination belongs to
    pub fn tournament_id(&self) -> Uuid {
        self.tournament_id
    }

    /// Returns the nominating captain's participant ID
    pub fn captain_id(&self) -> Uuid {
        self.captain_id
    }

    /// Returns the nominated participant's ID
    pub fn participant_id(&self) -> Uuid {
        self.participant_id
    }

    /// Returns the round the nomination was made in
    pub fn round(&self) -> i32 {
        self.round
    }

    /// Returns the turn the nomination was made in
    pub fn turn(&self) -> i32 {
        self.turn
    }

    /// Returns the nomination's current status
    pub fn status(&self) -> NominationStatus {
        self.status
    }

    /// True while the nomination awaits resolution
    pub fn is_pending(&self) -> bool {
        self.status == NominationStatus::Pending
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Nomination from persistence layer data
    ///
    /// Only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        tournament_id: Uuid,
        captain_id: Uuid,
        participant_id: Uuid,
        round: i32,
        turn: i32,
        status: NominationStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tournament_id,
            captain_id,
            participant_id,
            round,
            turn,
            status,
            created_at,
        }
    }
}
