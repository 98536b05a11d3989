use serde::{Deserialize, Serialize};

/// Represents the lifecycle state of a tournament's draft
///
/// # State Transitions
/// ```text
/// NotStarted -> InProgress -> Completed
///      ^------------+-------------+   (reset)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "draft_state", rename_all = "snake_case")]
pub enum DraftState {
    /// Draft has not begun; teams do not exist yet
    NotStarted,
    /// Captains are actively nominating participants
    InProgress,
    /// Draft has finished
    Completed,
}

impl DraftState {
    /// Checks if a transition from the current state to the next is valid
    ///
    /// # Valid Transitions
    /// - NotStarted -> InProgress (draft start)
    /// - InProgress -> Completed (explicit completion)
    /// - any state -> NotStarted (reset)
    ///
    /// # Example
    /// ```
    /// use draftday_api::domain::tournament::draft_status::DraftState;
    ///
    /// assert!(DraftState::NotStarted.can_transition_to(DraftState::InProgress));
    /// assert!(!DraftState::Completed.can_transition_to(DraftState::InProgress));
    /// ```
    pub fn can_transition_to(&self, next: DraftState) -> bool {
        use DraftState::*;
        matches!(
            (self, next),
            (NotStarted, InProgress) | (InProgress, Completed) | (_, NotStarted)
        )
    }
}

impl std::fmt::Display for DraftState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftState::NotStarted => write!(f, "not_started"),
            DraftState::InProgress => write!(f, "in_progress"),
            DraftState::Completed => write!(f, "completed"),
        }
    }
}

/// Draft progress for a tournament: lifecycle state plus round/turn counters
///
/// Rounds and turns are 1-based while a draft is running and 0 when it is
/// not. Counters only move through the transition methods; arbitrary values
/// are accepted solely via `from_persistence`.
///
/// # Example
/// ```
/// use draftday_api::domain::tournament::draft_status::DraftStatus;
///
/// let mut status = DraftStatus::new();
/// status.start().expect("fresh draft can start");
/// assert_eq!(status.round(), 1);
/// assert_eq!(status.turn(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftStatus {
    state: DraftState,
    round: i32,
    turn: i32,
}

impl Default for DraftStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStatus {
    /// Creates the initial status: not started, round 0, turn 0
    pub fn new() -> Self {
        Self {
            state: DraftState::NotStarted,
            round: 0,
            turn: 0,
        }
    }

    /// Begins the draft, moving to round 1, turn 1
    ///
    /// # Errors
    /// Returns an error if the draft is already running or completed.
    pub fn start(&mut self) -> Result<(), String> {
        if !self.state.can_transition_to(DraftState::InProgress) {
            return Err(format!("Cannot start a draft in {:?} state", self.state));
        }

        self.state = DraftState::InProgress;
        self.round = 1;
        self.turn = 1;
        Ok(())
    }

    /// Moves to the next turn within the current round
    ///
    /// # Errors
    /// Returns an error unless the draft is in progress.
    pub fn advance_turn(&mut self) -> Result<(), String> {
        if self.state != DraftState::InProgress {
            return Err(format!("Cannot advance turn in {:?} state", self.state));
        }

        self.turn += 1;
        Ok(())
    }

    /// Moves to the next round, resetting the turn to 1
    ///
    /// # Errors
    /// Returns an error unless the draft is in progress.
    pub fn advance_round(&mut self) -> Result<(), String> {
        if self.state != DraftState::InProgress {
            return Err(format!("Cannot advance round in {:?} state", self.state));
        }

        self.round += 1;
        self.turn = 1;
        Ok(())
    }

    /// Marks the draft as completed, keeping the final counters
    ///
    /// # Errors
    /// Returns an error unless the draft is in progress.
    pub fn complete(&mut self) -> Result<(), String> {
        if !self.state.can_transition_to(DraftState::Completed) {
            return Err(format!("Cannot complete a draft in {:?} state", self.state));
        }

        self.state = DraftState::Completed;
        Ok(())
    }

    /// Returns the draft to its initial state, valid from any state
    pub fn reset(&mut self) {
        self.state = DraftState::NotStarted;
        self.round = 0;
        self.turn = 0;
    }

    /// Returns the current lifecycle state
    pub fn state(&self) -> DraftState {
        self.state
    }

    /// Returns the current round (0 while not started)
    pub fn round(&self) -> i32 {
        self.round
    }

    /// Returns the current turn within the round (0 while not started)
    pub fn turn(&self) -> i32 {
        self.turn
    }

    /// True while captains may nominate
    pub fn is_in_progress(&self) -> bool {
        self.state == DraftState::InProgress
    }

    /// Reconstructs a status from persistence layer data
    ///
    /// Bypasses transition rules; only repository implementations should
    /// call this.
    pub fn from_persistence(state: DraftState, round: i32, turn: i32) -> Self {
        Self { state, round, turn }
    }
}
