//! Relboard Common - shared error types and constants
//!
//! This crate provides the foundational types used across all Relboard components:
//! - Error types and error codes
//! - Entity names used in API alerts and error bodies

pub mod error;

pub use error::{ErrorCode, RelboardError};

/// Application name used as the prefix of alert headers
pub const APPLICATION_NAME: &str = "relboardApp";

/// Entity names as they appear in alert headers and error bodies
pub const ENTITY_RELEASE: &str = "release";
pub const ENTITY_SPR: &str = "spr";
pub const ENTITY_TEAM_EVENT: &str = "teamEvent";
pub const ENTITY_OUT_OF_OFFICE: &str = "outOfOffice";
pub const ENTITY_USER: &str = "user";
