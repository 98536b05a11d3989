//! Shared test fixtures: in-memory implementations of the store contracts
//!
//! These back the draft scenario tests so they run without a database. Each
//! store mirrors the behavior the Postgres adapters provide, including the
//! uniqueness rules the schema enforces.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use draftday_api::domain::nomination::Nomination;
use draftday_api::domain::registration::Registration;
use draftday_api::domain::repositories::{
    NominationRepository, RegistrationRepository, TeamMemberRepository, TeamRepository,
    TournamentRepository,
};
use draftday_api::domain::team::Team;
use draftday_api::domain::tournament::Tournament;
use draftday_api::draft::{DraftService, RandomTieBreak, TieBreak};

/// Tie-break that always picks the first contender, for deterministic
/// conflict outcomes
pub struct FirstContenderWins;

impl TieBreak for FirstContenderWins {
    fn pick(&self, _contenders: &[Nomination]) -> usize {
        0
    }
}

#[derive(Default)]
pub struct InMemoryTournamentRepository {
    rows: RwLock<HashMap<Uuid, Tournament>>,
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn save(&self, tournament: &Tournament) -> Result<(), String> {
        self.rows
            .write()
            .await
            .insert(tournament.id(), tournament.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tournament>, String> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tournament>, String> {
        let mut all: Vec<Tournament> = self.rows.read().await.values().cloned().collect();
        all.sort_by_key(|t| std::cmp::Reverse(t.created_at()));
        Ok(all)
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| format!("Tournament not found: {}", id))
    }
}

#[derive(Default)]
pub struct InMemoryTeamRepository {
    rows: RwLock<HashMap<Uuid, Team>>,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        self.rows.write().await.insert(team.id(), team.clone());
        Ok(())
    }

    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Team>, String> {
        let mut teams: Vec<Team> = self
            .rows
            .read()
            .await
            .values()
            .filter(|t| t.tournament_id() == tournament_id && !t.is_deleted())
            .cloned()
            .collect();
        teams.sort_by_key(|t| t.created_at());
        Ok(teams)
    }

    async fn find_by_tournament_and_captain(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
    ) -> Result<Option<Team>, String> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|t| {
                t.tournament_id() == tournament_id
                    && t.captain_id() == captain_id
                    && !t.is_deleted()
            })
            .cloned())
    }

    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String> {
        self.rows
            .write()
            .await
            .retain(|_, t| t.tournament_id() != tournament_id);
        Ok(())
    }
}

/// Records which teams had their member links cleared, snapshotted from the
/// team store at call time, so reset tests can assert the links went before
/// the teams did
pub struct InMemoryTeamMemberRepository {
    teams: Arc<InMemoryTeamRepository>,
    cleared: RwLock<Vec<Uuid>>,
}

impl InMemoryTeamMemberRepository {
    pub fn new(teams: Arc<InMemoryTeamRepository>) -> Self {
        Self {
            teams,
            cleared: RwLock::new(Vec::new()),
        }
    }

    pub async fn cleared_teams(&self) -> Vec<Uuid> {
        self.cleared.read().await.clone()
    }
}

#[async_trait]
impl TeamMemberRepository for InMemoryTeamMemberRepository {
    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String> {
        // Soft-deleted teams are included, like the SQL subquery
        let team_ids: Vec<Uuid> = self
            .teams
            .rows
            .read()
            .await
            .values()
            .filter(|t| t.tournament_id() == tournament_id)
            .map(|t| t.id())
            .collect();
        self.cleared.write().await.extend(team_ids);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRegistrationRepository {
    rows: RwLock<HashMap<Uuid, Registration>>,
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn save(&self, registration: &Registration) -> Result<(), String> {
        let mut rows = self.rows.write().await;

        let duplicate = rows.values().any(|r| {
            r.id() != registration.id()
                && r.tournament_id() == registration.tournament_id()
                && r.participant_id() == registration.participant_id()
        });
        if duplicate {
            return Err(format!(
                "Participant {} is already registered",
                registration.participant_id()
            ));
        }

        rows.insert(registration.id(), registration.clone());
        Ok(())
    }

    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Registration>, String> {
        let mut memberships: Vec<Registration> = self
            .rows
            .read()
            .await
            .values()
            .filter(|r| r.tournament_id() == tournament_id)
            .cloned()
            .collect();
        memberships.sort_by_key(|r| r.created_at());
        Ok(memberships)
    }

    async fn find_by_tournament_and_participant(
        &self,
        tournament_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Option<Registration>, String> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|r| r.tournament_id() == tournament_id && r.participant_id() == participant_id)
            .cloned())
    }

    async fn clear_team_assignments(&self, tournament_id: Uuid) -> Result<(), String> {
        for registration in self.rows.write().await.values_mut() {
            if registration.tournament_id() == tournament_id {
                registration.clear_team();
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryNominationRepository {
    rows: RwLock<HashMap<Uuid, Nomination>>,
}

#[async_trait]
impl NominationRepository for InMemoryNominationRepository {
    async fn save(&self, nomination: &Nomination) -> Result<(), String> {
        let mut rows = self.rows.write().await;

        let duplicate = rows.values().any(|n| {
            n.id() != nomination.id()
                && n.tournament_id() == nomination.tournament_id()
                && n.captain_id() == nomination.captain_id()
                && n.participant_id() == nomination.participant_id()
        });
        if duplicate {
            return Err(format!(
                "Captain {} already nominated participant {}",
                nomination.captain_id(),
                nomination.participant_id()
            ));
        }

        rows.insert(nomination.id(), nomination.clone());
        Ok(())
    }

    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Nomination>, String> {
        let mut nominations: Vec<Nomination> = self
            .rows
            .read()
            .await
            .values()
            .filter(|n| n.tournament_id() == tournament_id)
            .cloned()
            .collect();
        nominations.sort_by_key(|n| n.created_at());
        Ok(nominations)
    }

    async fn find_by_tournament_captain_participant(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Option<Nomination>, String> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|n| {
                n.tournament_id() == tournament_id
                    && n.captain_id() == captain_id
                    && n.participant_id() == participant_id
            })
            .cloned())
    }

    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String> {
        self.rows
            .write()
            .await
            .retain(|_, n| n.tournament_id() != tournament_id);
        Ok(())
    }
}

/// The five in-memory stores plus builders for a service wired against them
pub struct TestStores {
    pub tournaments: Arc<InMemoryTournamentRepository>,
    pub teams: Arc<InMemoryTeamRepository>,
    pub registrations: Arc<InMemoryRegistrationRepository>,
    pub nominations: Arc<InMemoryNominationRepository>,
    pub team_members: Arc<InMemoryTeamMemberRepository>,
}

impl TestStores {
    pub fn new() -> Self {
        let teams = Arc::new(InMemoryTeamRepository::default());
        Self {
            tournaments: Arc::new(InMemoryTournamentRepository::default()),
            registrations: Arc::new(InMemoryRegistrationRepository::default()),
            nominations: Arc::new(InMemoryNominationRepository::default()),
            team_members: Arc::new(InMemoryTeamMemberRepository::new(teams.clone())),
            teams,
        }
    }

    /// Service with the production random tie-break
    pub fn service(&self) -> DraftService {
        self.service_with_tie_break(Arc::new(RandomTieBreak))
    }

    pub fn service_with_tie_break(&self, tie_break: Arc<dyn TieBreak>) -> DraftService {
        DraftService::new(
            self.tournaments.clone(),
            self.teams.clone(),
            self.registrations.clone(),
            self.nominations.clone(),
            self.team_members.clone(),
            tie_break,
        )
    }

    /// Creates and stores a tournament, returning its id
    pub async fn create_tournament(&self) -> Uuid {
        let (tournament, _events) =
            Tournament::new("Test Cup".to_string()).expect("valid tournament");
        self.tournaments
            .save(&tournament)
            .await
            .expect("tournament saved");
        tournament.id()
    }

    /// Registers a participant, returning their id
    pub async fn register(
        &self,
        tournament_id: Uuid,
        display_name: &str,
        is_captain: bool,
    ) -> Uuid {
        let registration = Registration::new(
            tournament_id,
            Uuid::new_v4(),
            display_name.to_string(),
            is_captain,
        )
        .expect("valid registration");
        self.registrations
            .save(&registration)
            .await
            .expect("registration saved");
        registration.participant_id()
    }
}
