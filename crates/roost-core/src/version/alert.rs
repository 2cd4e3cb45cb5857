// ── Alert emission state machine ──
//
// Deduplicates version alerts so consumers are only notified when the
// detected flag flips or the severity becomes strictly more urgent.
// State is the last emitted alert; everything else is a no-op.

use crate::model::{Severity, VersionAlert};

/// Tracks the last emitted alert and decides whether a candidate is
/// worth emitting.
#[derive(Debug)]
pub struct AlertStream {
    last: VersionAlert,
    dismissed: bool,
}

impl AlertStream {
    pub fn new() -> Self {
        Self {
            last: VersionAlert::none(),
            dismissed: false,
        }
    }

    /// Offer a candidate alert. Returns the alert when it must be
    /// emitted; `None` when it is a no-op re-emission or the stream was
    /// dismissed.
    pub fn offer(&mut self, candidate: VersionAlert) -> Option<VersionAlert> {
        if self.dismissed {
            return None;
        }
        let same_detected = candidate.detected == self.last.detected;
        let not_more_urgent = candidate.severity >= self.last.severity;
        if same_detected && not_more_urgent {
            return None;
        }
        self.last = candidate;
        Some(candidate)
    }

    /// Offer a detection for the given severity, if it is serious enough
    /// to alert on.
    pub fn detect(&mut self, severity: Severity) -> Option<VersionAlert> {
        if !severity.is_alerting() {
            return None;
        }
        self.offer(VersionAlert {
            detected: true,
            severity,
        })
    }

    /// Clear the alert and re-enable emissions (new snapshot arrived).
    pub fn reset(&mut self) -> Option<VersionAlert> {
        self.dismissed = false;
        self.offer(VersionAlert::none())
    }

    /// Silence the stream until the next [`reset`](Self::reset).
    pub fn dismiss(&mut self) {
        self.last = VersionAlert::none();
        self.dismissed = true;
    }

    /// The most recently emitted alert.
    pub fn current(&self) -> VersionAlert {
        self.last
    }
}

impl Default for AlertStream {
    fn default() -> Self {
        Self::new()
    }
}
