// Registration domain module
// Contains the tournament membership record

#![allow(clippy::module_inception)]

pub mod registration;

// Re-export main types for convenience
pub use registration::Registration;
