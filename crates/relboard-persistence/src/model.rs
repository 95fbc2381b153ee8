//! Result types returned by the persistence traits

use relboard_core::{Release, RejectionKind};

/// Outcome of a guarded release insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseCreateOutcome {
    /// The release was stored and carries its assigned id.
    Created(Release),
    /// The promotion rule refused the release; nothing was written.
    Rejected(RejectionKind),
}
