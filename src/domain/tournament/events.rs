use uuid::Uuid;

/// Domain events that occur within the Tournament aggregate
///
/// These events represent the business moments of a tournament's draft
/// lifecycle. They are used for:
/// - Structured logging of draft progress
/// - Publishing to external systems
/// - Auditing draft activity
///
/// # Example
/// ```
/// use draftday_api::domain::tournament::events::TournamentEvent;
/// use uuid::Uuid;
///
/// let event = TournamentEvent::Created {
///     tournament_id: Uuid::new_v4(),
///     name: "Spring Invitational".to_string(),
/// };
/// ```
#[derive(Debug, Clone)]
pub enum TournamentEvent {
    /// Fired when a tournament is created
    Created {
        /// ID of the newly created tournament
        tournament_id: Uuid,
        /// Display name of the tournament
        name: String,
    },
    /// Fired when the draft begins and teams have been formed
    DraftStarted {
        /// ID of the tournament whose draft started
        tournament_id: Uuid,
    },
    /// Fired when the draft is explicitly completed
    DraftCompleted {
        /// ID of the tournament whose draft completed
        tournament_id: Uuid,
    },
    /// Fired when the draft is wiped back to its initial state
    DraftReset {
        /// ID of the tournament whose draft was reset
        tournament_id: Uuid,
    },
}

impl TournamentEvent {
    /// Returns the tournament_id for this event
    pub fn tournament_id(&self) -> Uuid {
        match self {
            TournamentEvent::Created { tournament_id, .. } => *tournament_id,
            TournamentEvent::DraftStarted { tournament_id } => *tournament_id,
            TournamentEvent::DraftCompleted { tournament_id } => *tournament_id,
            TournamentEvent::DraftReset { tournament_id } => *tournament_id,
        }
    }
}
