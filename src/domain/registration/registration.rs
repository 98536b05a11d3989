use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Membership record linking a participant to a tournament
///
/// Carries the captain flag and the participant's current team assignment.
/// The two are deliberately independent: toggling captaincy never assigns or
/// removes a team, and assigning a team never changes captaincy. The
/// membership store enforces at most one record per (tournament,
/// participant) pair.
#[derive(Debug, Clone)]
pub struct Registration {
    id: Uuid,
    tournament_id: Uuid,
    participant_id: Uuid,
    display_name: String,
    is_captain: bool,
    team_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Registration {
    /// Creates a new membership for a participant joining a tournament
    ///
    /// # Arguments
    /// * `tournament_id` - The tournament being joined
    /// * `participant_id` - Externally assigned participant identity
    /// * `display_name` - Name shown in rosters and used for team naming
    ///   (cannot be empty)
    /// * `is_captain` - Whether the participant joins as a captain
    ///
    /// # Returns
    /// * `Ok(Registration)` - New membership with no team assignment
    /// * `Err(String)` - If any invariant is violated
    pub fn new(
        tournament_id: Uuid,
        participant_id: Uuid,
        display_name: String,
        is_captain: bool,
    ) -> Result<Self, String> {
        if display_name.trim().is_empty() {
            return Err("Participant display name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            tournament_id,
            participant_id,
            display_name,
            is_captain,
            team_id: None,
            created_at: Utc::now(),
        })
    }

    /// Records which team the participant was drafted onto
    pub fn assign_team(&mut self, team_id: Uuid) {
        self.team_id = Some(team_id);
    }

    /// Clears the team assignment, used when the draft is reset
    pub fn clear_team(&mut self) {
        self.team_id = None;
    }

    /// Toggles the captain flag
    ///
    /// Whether a toggle is currently allowed depends on the tournament's
    /// draft state, which the caller checks via
    /// `Tournament::allows_captain_changes`.
    pub fn set_captain(&mut self, is_captain: bool) {
        self.is_captain = is_captain;
    }

    // ===== Getters =====

    /// Returns the membership's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the tournament this membership belongs to
    pub fn tournament_id(&self) -> Uuid {
        self.tournament_id
    }

    /// Returns the participant's external ID
    pub fn participant_id(&self) -> Uuid {
        self.participant_id
    }

    /// Returns the participant's display name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// True if the participant is currently a captain
    pub fn is_captain(&self) -> bool {
        self.is_captain
    }

    /// Returns the assigned team, if the participant has been drafted
    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Registration from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        tournament_id: Uuid,
        participant_id: Uuid,
        display_name: String,
        is_captain: bool,
        team_id: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tournament_id,
            participant_id,
            display_name,
            is_captain,
            team_id,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(is_captain: bool) -> Registration {
        Registration::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Alice".to_string(),
            is_captain,
        )
        .expect("valid membership")
    }

    #[test]
    fn new_membership_has_no_team() {
        let membership = registration(false);

        assert_eq!(membership.team_id(), None);
        assert!(!membership.is_captain());
        assert_eq!(membership.display_name(), "Alice");
    }

    #[test]
    fn new_membership_with_empty_name_fails() {
        let result = Registration::new(Uuid::new_v4(), Uuid::new_v4(), " ".to_string(), false);

        assert!(result.is_err());
    }

    #[test]
    fn assign_and_clear_team() {
        let mut membership = registration(false);
        let team_id = Uuid::new_v4();

        membership.assign_team(team_id);
        assert_eq!(membership.team_id(), Some(team_id));

        membership.clear_team();
        assert_eq!(membership.team_id(), None);
    }

    #[test]
    fn toggling_captain_does_not_touch_team_assignment() {
        let mut membership = registration(false);
        let team_id = Uuid::new_v4();
        membership.assign_team(team_id);

        membership.set_captain(true);
        assert!(membership.is_captain());
        assert_eq!(membership.team_id(), Some(team_id));

        membership.set_captain(false);
        assert!(!membership.is_captain());
        assert_eq!(membership.team_id(), Some(team_id));
    }

    #[test]
    fn assigning_team_does_not_touch_captain_flag() {
        let mut membership = registration(true);

        membership.assign_team(Uuid::new_v4());
        assert!(membership.is_captain());

        membership.clear_team();
        assert!(membership.is_captain());
    }

    #[test]
    fn from_persistence_restores_assignment() {
        let id = Uuid::new_v4();
        let team_id = Uuid::new_v4();

        let membership = Registration::from_persistence(
            id,
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Bob".to_string(),
            true,
            Some(team_id),
            Utc::now(),
        );

        assert_eq!(membership.id(), id);
        assert!(membership.is_captain());
        assert_eq!(membership.team_id(), Some(team_id));
    }
}
