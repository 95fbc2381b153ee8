//! Statically typed list criteria
//!
//! Each struct maps directly onto URL query parameters of the matching list
//! and count endpoints. Unset fields do not filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Priority, Resolution, Territory};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseQuery {
    pub territory: Option<Territory>,
    pub current: Option<bool>,
    pub build: Option<i32>,
    pub release_letter: Option<String>,
    /// Inclusive lower bound on the release date
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the release date
    pub date_to: Option<DateTime<Utc>>,
}

impl ReleaseQuery {
    pub fn current_in(territory: Territory) -> Self {
        Self {
            territory: Some(territory),
            current: Some(true),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprQuery {
    pub territory: Option<Territory>,
    pub resolution: Option<Resolution>,
    pub priority: Option<Priority>,
    pub user_id: Option<i64>,
    pub release_id: Option<i64>,
    pub number: Option<i32>,
}

impl SprQuery {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }

    pub fn for_release(release_id: i64) -> Self {
        Self {
            release_id: Some(release_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEventQuery {
    pub start_from: Option<DateTime<Utc>>,
    pub start_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfOfficeQuery {
    pub user_id: Option<i64>,
    pub start_from: Option<DateTime<Utc>>,
    pub start_to: Option<DateTime<Utc>>,
}
