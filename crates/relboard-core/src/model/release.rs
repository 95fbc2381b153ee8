use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Territory;

/// A software build shipped, or to be shipped, to one territory.
///
/// At most one release per territory carries `current = true`; that release
/// is the build live in production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    #[serde(default)]
    pub id: Option<i64>,
    /// Effective instant of the release
    pub date: DateTime<Utc>,
    pub territory: Territory,
    pub build: i32,
    #[validate(length(min = 1, max = 16))]
    pub release_letter: String,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub prefix_letter: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub database_version: String,
    #[serde(default)]
    pub ws_version: Option<String>,
    #[serde(default)]
    pub tma_version: Option<String>,
    #[serde(default)]
    pub port: Option<i32>,
    #[serde(default)]
    pub new_features: Option<String>,
    #[serde(default)]
    pub updated_features: Option<String>,
    pub current: bool,
}

impl Release {
    /// Display name such as `B42` or `XB42`.
    pub fn version_name(&self) -> String {
        format!(
            "{}{}{}",
            self.prefix_letter.as_deref().unwrap_or_default(),
            self.release_letter,
            self.build
        )
    }
}
