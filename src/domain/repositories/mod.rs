// Repository contracts (ports)
// The domain depends on these traits; infrastructure provides the adapters

pub mod nomination_repository;
pub mod registration_repository;
pub mod team_member_repository;
pub mod team_repository;
pub mod tournament_repository;

pub use nomination_repository::NominationRepository;
pub use registration_repository::RegistrationRepository;
pub use team_member_repository::TeamMemberRepository;
pub use team_repository::TeamRepository;
pub use tournament_repository::TournamentRepository;
