// Draft orchestration subsystem
// State machine transitions live on the domain types; this module owns the
// cross-aggregate choreography: team formation at start, nomination
// recording, conflict resolution, and reset

pub mod errors;
pub mod resolution;
pub mod service;
pub mod tie_break;

pub use errors::{DraftError, DraftResult};
pub use service::{DraftService, NominationReceipt};
pub use tie_break::{RandomTieBreak, TieBreak};
