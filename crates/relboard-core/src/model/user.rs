use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_activated() -> bool {
    true
}

/// Staff member that owns SPRs and absences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 50))]
    pub login: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default = "default_activated")]
    pub activated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_to_activated() {
        let user: User = serde_json::from_str(r#"{"login":"jdoe"}"#).unwrap();
        assert!(user.activated);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_user_rejects_bad_email() {
        let user: User =
            serde_json::from_str(r#"{"login":"jdoe","email":"not-an-address"}"#).unwrap();
        assert!(user.validate().is_err());
    }
}
