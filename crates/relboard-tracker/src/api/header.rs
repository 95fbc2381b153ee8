//! Response headers carrying entity alerts and error keys

use relboard_common::APPLICATION_NAME;

pub const ALERT_HEADER: &str = "X-Relboard-Alert";
pub const ERROR_HEADER: &str = "X-Relboard-Error";
pub const PARAMS_HEADER: &str = "X-Relboard-Params";

/// Alert headers for a create, update or delete of `entity`.
///
/// The alert value is a message key such as `relboardApp.release.created`.
pub fn entity_alert(entity: &str, action: &str, param: impl ToString) -> [(&'static str, String); 2] {
    [
        (ALERT_HEADER, format!("{}.{}.{}", APPLICATION_NAME, entity, action)),
        (PARAMS_HEADER, param.to_string()),
    ]
}
