// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_nomination_repository;
pub mod postgres_registration_repository;
pub mod postgres_team_member_repository;
pub mod postgres_team_repository;
pub mod postgres_tournament_repository;

pub use postgres_nomination_repository::PostgresNominationRepository;
pub use postgres_registration_repository::PostgresRegistrationRepository;
pub use postgres_team_member_repository::PostgresTeamMemberRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_tournament_repository::PostgresTournamentRepository;
