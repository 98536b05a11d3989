// Nomination domain module
// Contains the nomination entity and its status value object

#![allow(clippy::module_inception)]

pub mod nomination;
pub mod value_objects;

// Re-export main types for convenience
pub use nomination::Nomination;
pub use value_objects::NominationStatus;
