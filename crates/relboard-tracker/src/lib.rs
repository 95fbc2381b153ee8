//! Relboard Tracker - release board services and REST API
//!
//! This crate provides:
//! - Services orchestrating persistence, the promotion rule and the search mirror
//! - actix-web handlers for releases, SPRs, team events, absences and users

pub mod api;
pub mod service;

pub use service::TrackerServices;
