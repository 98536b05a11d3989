// Tournament domain module
// Contains the tournament aggregate root, draft status value object, and
// domain events

#![allow(clippy::module_inception)]

pub mod draft_status;
pub mod events;
pub mod tournament;

// Re-export main types for convenience
pub use draft_status::{DraftState, DraftStatus};
pub use tournament::{Tournament, MIN_PARTICIPANTS};
