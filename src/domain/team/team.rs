use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team aggregate root
///
/// A captain's roster within one tournament, formed when the draft starts
/// and filled as the captain's nominations are confirmed.
///
/// # Invariants
/// - Name cannot be empty
/// - The captain is always a member and cannot be removed through ordinary
///   member removal
/// - Members are an ordered set: insertion order is kept, duplicates are
///   rejected
///
/// # Example
/// ```
/// use draftday_api::domain::team::Team;
/// use uuid::Uuid;
///
/// let captain_id = Uuid::new_v4();
/// let team = Team::new(Uuid::new_v4(), captain_id, "Team Alice".to_string())
///     .expect("valid team");
///
/// assert!(team.contains_member(captain_id));
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    captain_id: Uuid,
    tournament_id: Uuid,
    members: Vec<Uuid>,
    created_at: DateTime<Utc>,
    is_deleted: bool,
}

impl Team {
    /// Creates a new Team with the captain as its sole member
    ///
    /// # Arguments
    /// * `tournament_id` - The tournament this team belongs to
    /// * `captain_id` - The captain's participant ID
    /// * `name` - Display name (cannot be empty)
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with the captain as first member
    /// * `Err(String)` - If any invariant is violated
    pub fn new(tournament_id: Uuid, captain_id: Uuid, name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            captain_id,
            tournament_id,
            members: vec![captain_id],
            created_at: Utc::now(),
            is_deleted: false,
        })
    }

    /// Appends a participant to the roster
    ///
    /// # Errors
    /// Fails if the team is soft-deleted or the participant is already a
    /// member.
    pub fn add_member(&mut self, participant_id: Uuid) -> Result<(), String> {
        if self.is_deleted {
            return Err(format!("Team {} is deleted", self.id));
        }

        if self.members.contains(&participant_id) {
            return Err(format!(
                "Participant {} is already a member of team {}",
                participant_id, self.id
            ));
        }

        self.members.push(participant_id);
        Ok(())
    }

    /// Removes a non-captain participant from the roster
    ///
    /// # Errors
    /// Fails when asked to remove the captain or a participant who is not a
    /// member.
    pub fn remove_member(&mut self, participant_id: Uuid) -> Result<(), String> {
        if participant_id == self.captain_id {
            return Err("The captain cannot be removed from their team".to_string());
        }

        let before = self.members.len();
        self.members.retain(|m| *m != participant_id);

        if self.members.len() == before {
            return Err(format!(
                "Participant {} is not a member of team {}",
                participant_id, self.id
            ));
        }

        Ok(())
    }

    /// Marks the team as deleted without removing the row
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the captain's participant ID
    pub fn captain_id(&self) -> Uuid {
        self.captain_id
    }

    /// Returns the tournament this team belongs to
    pub fn tournament_id(&self) -> Uuid {
        self.tournament_id
    }

    /// Returns the roster in draft order, captain first
    pub fn members(&self) -> &[Uuid] {
        &self.members
    }

    /// True if the participant is on this team's roster
    pub fn contains_member(&self, participant_id: Uuid) -> bool {
        self.members.contains(&participant_id)
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True once the team has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses business rules validation since the data is already
    /// validated and stored in the database. Only to be used by repository
    /// implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        captain_id: Uuid,
        tournament_id: Uuid,
        members: Vec<Uuid>,
        created_at: DateTime<Utc>,
        is_deleted: bool,
    ) -> Self {
        Self {
            id,
            name,
            captain_id,
            tournament_id,
            members,
            created_at,
            is_deleted,
        }
    }
}
