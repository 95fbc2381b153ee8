//! Relboard Core - domain types and business rules
//!
//! This crate holds everything that does not touch I/O:
//! - Entity model types (`Release`, `Spr`, `TeamEvent`, `OutOfOffice`, `User`)
//! - Statically typed list criteria for each entity
//! - The release promotion guard
//! - Open-SPR filtering and per-user statistics

pub mod model;
pub mod promotion;
pub mod query;
pub mod spr_stats;

pub use model::*;
pub use promotion::{PromotionDecision, RejectionKind, evaluate_promotion};
pub use query::{OutOfOfficeQuery, ReleaseQuery, SprQuery, TeamEventQuery};
