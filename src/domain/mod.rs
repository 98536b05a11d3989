// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod nomination;
pub mod registration;
pub mod repositories;
pub mod team;
pub mod tournament;
