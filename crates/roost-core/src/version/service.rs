// ── Version service ──
//
// Owns the mutable state around the pure classifier: the current
// release-metadata snapshot, the per-(version, app) feedback cache, the
// alert stream, and the tracked server version. One value per
// application; tests construct isolated instances.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use super::alert::AlertStream;
use super::assess::{assess, sanitize_semver};
use crate::error::AssessmentError;
use crate::model::{AppType, DataSource, VersionAlert, VersionFeedback, VersionSnapshot};

/// Tuning knobs for the service. Built by the caller; the core reads no
/// config files.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// How long a delivered snapshot is considered up to date.
    pub outdated_threshold: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            outdated_threshold: Duration::hours(24),
        }
    }
}

/// Version assessment with caching and alerting.
///
/// The feedback cache and the alert state live exactly as long as one
/// snapshot: [`refresh`](Self::refresh) replaces everything wholesale.
#[derive(Debug)]
pub struct VersionService {
    config: ServiceConfig,
    snapshot: Option<VersionSnapshot>,
    fetched_at: Option<DateTime<Utc>>,
    cache: HashMap<String, VersionFeedback>,
    alert: AlertStream,
    server_version: Option<String>,
}

impl VersionService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            snapshot: None,
            fetched_at: None,
            cache: HashMap::new(),
            alert: AlertStream::new(),
            server_version: None,
        }
    }

    // ── Snapshot lifecycle ───────────────────────────────────────────

    /// Replace the release-metadata snapshot.
    ///
    /// Clears the feedback cache and resets the alert stream; returns
    /// the all-clear emission when the previous state had a detected
    /// alert.
    pub fn refresh(&mut self, snapshot: VersionSnapshot) -> Option<VersionAlert> {
        info!(date = %snapshot.date, "refreshing software release metadata");
        self.cache.clear();
        self.snapshot = Some(snapshot);
        self.fetched_at = Some(Utc::now());
        self.alert.reset()
    }

    /// Whether a (re-)fetch should be triggered: no snapshot delivered
    /// yet, or the current one exceeded the staleness threshold.
    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh_at(Utc::now())
    }

    pub fn needs_refresh_at(&self, now: DateTime<Utc>) -> bool {
        match self.fetched_at {
            None => true,
            Some(fetched_at) => now - fetched_at > self.config.outdated_threshold,
        }
    }

    pub fn snapshot(&self) -> Option<&VersionSnapshot> {
        self.snapshot.as_ref()
    }

    /// Manufacture date of the current snapshot.
    pub fn snapshot_date(&self) -> Option<&str> {
        self.snapshot.as_ref().map(|s| s.date.as_str())
    }

    pub fn data_source(&self) -> Option<DataSource> {
        self.snapshot.as_ref().and_then(|s| s.data_source)
    }

    /// Whether the current snapshot came from live release feeds rather
    /// than the baked-in offline file.
    pub fn is_online_data(&self) -> bool {
        self.data_source() == Some(DataSource::Online)
    }

    // ── Assessment ───────────────────────────────────────────────────

    /// Assess a version, serving repeated queries from the cache.
    ///
    /// Alert detection runs on every call, including cache hits, so a
    /// problem found before a consumer subscribed is still surfaced.
    pub fn check_version(
        &mut self,
        version: &str,
        app: AppType,
    ) -> Result<VersionFeedback, AssessmentError> {
        let cache_key = format!("{version}{app}");
        if let Some(cached) = self.cache.get(&cache_key) {
            let feedback = cached.clone();
            let _ = self.alert.detect(feedback.severity);
            return Ok(feedback);
        }

        let snapshot = self
            .snapshot
            .as_ref()
            .ok_or_else(|| AssessmentError::CannotAssess {
                app,
                version: version.to_owned(),
            })?;
        let feedback = assess(version, app, snapshot, self.server_version.as_deref())?;
        debug!(%version, %app, severity = ?feedback.severity, "caching version feedback");
        self.cache.insert(cache_key, feedback.clone());
        let _ = self.alert.detect(feedback.severity);
        Ok(feedback)
    }

    /// Whether the latest development release is more recent than the
    /// most recent stable release. `None` when the snapshot lacks either
    /// reference.
    pub fn dev_more_recent_than_stable(&self, app: AppType) -> Option<bool> {
        let releases = self.snapshot.as_ref()?.releases(app)?;
        let last_stable = sanitize_semver(releases.sorted_stable_versions.as_ref()?.last()?)?;
        let dev = sanitize_semver(&releases.latest_dev.as_ref()?.version)?;
        Some(dev > last_stable)
    }

    // ── Alerting ─────────────────────────────────────────────────────

    /// The most recently emitted alert.
    pub fn current_alert(&self) -> VersionAlert {
        self.alert.current()
    }

    /// Silence alert emissions until the next refresh.
    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }

    // ── Server version tracking ──────────────────────────────────────

    /// Record the server's own version for the server/agent consistency
    /// check.
    pub fn set_server_version(&mut self, version: impl Into<String>) {
        self.server_version = Some(version.into());
    }
}

impl Default for VersionService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}
