//! Draftday API Library
//!
//! This library provides the core functionality for the Draftday API:
//! tournament and membership management, the draft orchestration subsystem,
//! and the persistence and HTTP adapters around them.

pub mod api;
pub mod domain;
pub mod draft;
pub mod infrastructure;
