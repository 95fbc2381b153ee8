use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Priority, Resolution, Territory};

/// Software problem report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Spr {
    #[serde(default)]
    pub id: Option<i64>,
    pub territory: Territory,
    pub number: i32,
    #[validate(length(min = 1, max = 64))]
    pub full_number: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub resolution: Option<Resolution>,
    #[serde(default)]
    pub jira_link: Option<String>,
    #[serde(default)]
    pub reviewer_id: Option<i64>,
    /// Owning user
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Release the fix ships in
    #[serde(default)]
    pub release_id: Option<i64>,
}

impl Spr {
    /// An SPR without a resolution has not been worked yet and counts as open.
    pub fn is_open(&self) -> bool {
        !self.resolution.is_some_and(Resolution::is_closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spr(resolution: Option<Resolution>) -> Spr {
        Spr {
            id: None,
            territory: Territory::Ned,
            number: 1001,
            full_number: "NED-1001".to_string(),
            description: None,
            priority: Some(Priority::High),
            resolution,
            jira_link: None,
            reviewer_id: None,
            user_id: None,
            release_id: None,
        }
    }

    #[test]
    fn test_is_open() {
        assert!(spr(None).is_open());
        assert!(spr(Some(Resolution::New)).is_open());
        assert!(spr(Some(Resolution::Duplicate)).is_open());
        assert!(!spr(Some(Resolution::Tested)).is_open());
        assert!(!spr(Some(Resolution::CannotReproduce)).is_open());
    }

    #[test]
    fn test_spr_json_shape() {
        let value = serde_json::to_value(spr(Some(Resolution::PartiallyFixed))).unwrap();
        assert_eq!(value["fullNumber"], "NED-1001");
        assert_eq!(value["resolution"], "PARTIALLY_FIXED");
        assert_eq!(value["territory"], "NED");
    }
}
