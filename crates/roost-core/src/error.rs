// ── Version assessment errors ──
//
// The resolver has no error conditions; everything that can go wrong in
// this crate goes wrong while classifying a software version. Messages
// are user-facing; callers display them as-is.

use thiserror::Error;

use crate::model::AppType;

/// Errors raised by the version feedback engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The input string cannot be coerced into a semantic version.
    #[error("Couldn't parse valid semver from given {version} version!")]
    UnparsableVersion { version: String },

    /// The release metadata is structurally inconsistent: an empty
    /// stable-release list, an entry with a missing or unparsable range
    /// or version, or an empty sorted-stable fallback list.
    #[error("Invalid syntax of the software versions metadata received from the server.")]
    InvalidMetadata,

    /// No classification branch applies (e.g. a development version with
    /// no known development release to compare against).
    #[error("Couldn't assess the software version for {} {version}!", .app.display_name())]
    CannotAssess { app: AppType, version: String },
}
