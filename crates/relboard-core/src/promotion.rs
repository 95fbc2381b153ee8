//! Release promotion guard
//!
//! Decides whether a release may be stored with `current = true`. Only one
//! release per territory may be in production, and a production release
//! cannot take effect after the moment it is promoted. An existing current
//! release is never demoted automatically; the newcomer is rejected instead.

use chrono::{DateTime, Utc};
use relboard_common::RelboardError;
use relboard_common::error::{CURRENT_EXISTS, PROD_RELEASE_BAD};

use crate::model::Release;

/// Reason a promotion was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// The territory already has a current release.
    ProductionReleaseExists,
    /// The candidate is dated after the promotion instant.
    ProductionIsFuture,
}

impl RejectionKind {
    /// Key reported to API clients.
    pub fn error_key(self) -> &'static str {
        match self {
            RejectionKind::ProductionReleaseExists => CURRENT_EXISTS.key,
            RejectionKind::ProductionIsFuture => PROD_RELEASE_BAD.key,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RejectionKind::ProductionReleaseExists => CURRENT_EXISTS.message,
            RejectionKind::ProductionIsFuture => PROD_RELEASE_BAD.message,
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<RejectionKind> for RelboardError {
    fn from(kind: RejectionKind) -> Self {
        match kind {
            RejectionKind::ProductionReleaseExists => {
                RelboardError::ProductionReleaseExists(kind.message().to_string())
            }
            RejectionKind::ProductionIsFuture => {
                RelboardError::ProductionIsFuture(kind.message().to_string())
            }
        }
    }
}

/// Outcome of [`evaluate_promotion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionDecision {
    Accept,
    Reject {
        kind: RejectionKind,
        message: &'static str,
    },
}

impl PromotionDecision {
    fn reject(kind: RejectionKind) -> Self {
        PromotionDecision::Reject {
            kind,
            message: kind.message(),
        }
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, PromotionDecision::Accept)
    }

    pub fn rejection(&self) -> Option<RejectionKind> {
        match self {
            PromotionDecision::Accept => None,
            PromotionDecision::Reject { kind, .. } => Some(*kind),
        }
    }
}

/// Evaluates a candidate release against the current releases of its territory.
///
/// `existing_current` must hold the releases already marked current for the
/// candidate's territory. The existence check runs before the date check, so
/// a future-dated candidate for an occupied territory reports
/// [`RejectionKind::ProductionReleaseExists`].
pub fn evaluate_promotion(
    candidate: &Release,
    existing_current: &[Release],
    now: DateTime<Utc>,
) -> PromotionDecision {
    if !candidate.current {
        return PromotionDecision::Accept;
    }

    if !existing_current.is_empty() {
        return PromotionDecision::reject(RejectionKind::ProductionReleaseExists);
    }

    if candidate.date > now {
        return PromotionDecision::reject(RejectionKind::ProductionIsFuture);
    }

    PromotionDecision::Accept
}
