// ── Version feedback and alerting model ──

use serde::{Deserialize, Serialize};

/// Urgency of a version assessment, most urgent first.
///
/// The derived `Ord` makes `Error` the smallest value, so `min` picks the
/// more urgent of two severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
    Secondary,
    Success,
}

impl Severity {
    /// Whether this severity is serious enough to raise a version alert.
    pub fn is_alerting(self) -> bool {
        self <= Self::Warn
    }
}

/// Result of assessing a single software version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFeedback {
    pub severity: Severity,
    /// Details of the assessment, ready for display.
    pub messages: Vec<String>,
}

impl VersionFeedback {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            messages: vec![message.into()],
        }
    }
}

/// Whether the user should be notified about a version problem, and how
/// urgent it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionAlert {
    pub detected: bool,
    pub severity: Severity,
}

impl VersionAlert {
    /// The quiescent state: nothing detected.
    pub fn none() -> Self {
        Self {
            detected: false,
            severity: Severity::Success,
        }
    }
}
