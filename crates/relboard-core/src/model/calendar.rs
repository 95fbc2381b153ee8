use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Team-wide calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamEvent {
    #[serde(default)]
    pub id: Option<i64>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

/// Absence of one staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OutOfOffice {
    #[serde(default)]
    pub id: Option<i64>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}
