use serde::{Deserialize, Serialize};

/// Lifecycle status of a nomination
///
/// # Status Transitions
/// ```text
/// Pending -> Confirmed   (sole nominee, or won the tie-break)
///      \---> Cancelled   (lost the tie-break)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "nomination_status", rename_all = "lowercase")]
pub enum NominationStatus {
    /// Recorded but not yet resolved
    Pending,
    /// Resolved in the captain's favor; the participant joined their team
    Confirmed,
    /// Lost a conflict; no team effects
    Cancelled,
}

impl NominationStatus {
    /// Checks if a transition from the current status to the next is valid
    ///
    /// Only pending nominations move; confirmed and cancelled are terminal.
    pub fn can_transition_to(&self, next: NominationStatus) -> bool {
        use NominationStatus::*;
        matches!((self, next), (Pending, Confirmed) | (Pending, Cancelled))
    }
}

impl std::fmt::Display for NominationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NominationStatus::Pending => write!(f, "pending"),
            NominationStatus::Confirmed => write!(f, "confirmed"),
            NominationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}
