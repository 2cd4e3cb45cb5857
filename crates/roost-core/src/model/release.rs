// ── Release metadata model ──
//
// A `VersionSnapshot` is the read-only release-metadata document the
// server assembles from release feeds (or from its baked-in offline
// copy). The feedback engine treats one snapshot as an immutable value
// for the lifetime of its cache.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Monitored software kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppType {
    Kea,
    Bind9,
    Stork,
}

impl AppType {
    /// Human-facing name used in feedback messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Kea => "Kea",
            Self::Bind9 => "BIND9",
            Self::Stork => "Stork agent",
        }
    }
}

/// Metadata of a single published release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    pub version: String,
    /// Semver range the release line covers (e.g. `"2.6.x"`). Present on
    /// stable entries, absent on dev/secure pointers.
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub eol_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ReleaseInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            range: None,
            release_date: None,
            eol_date: None,
            status: None,
        }
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }
}

/// Release references for one monitored app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppReleases {
    /// Currently supported stable release lines, one entry per line.
    #[serde(default)]
    pub current_stable: Option<Vec<ReleaseInfo>>,
    #[serde(default)]
    pub latest_dev: Option<ReleaseInfo>,
    #[serde(default)]
    pub latest_secure: Option<ReleaseInfo>,
    /// All stable versions, sorted ascending.
    #[serde(default)]
    pub sorted_stable_versions: Option<Vec<String>>,
}

/// Where the snapshot content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Live release feeds.
    Online,
    /// The versions file shipped with the server.
    Offline,
}

/// Immutable release-metadata snapshot for all monitored apps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    /// Manufacture date of the metadata, as reported by the producer.
    pub date: String,
    #[serde(default)]
    pub data_source: Option<DataSource>,
    #[serde(default)]
    pub kea: Option<AppReleases>,
    #[serde(default)]
    pub bind9: Option<AppReleases>,
    #[serde(default)]
    pub stork: Option<AppReleases>,
}

impl VersionSnapshot {
    /// Release references for the given app, if the snapshot carries any.
    pub fn releases(&self, app: AppType) -> Option<&AppReleases> {
        match app {
            AppType::Kea => self.kea.as_ref(),
            AppType::Bind9 => self.bind9.as_ref(),
            AppType::Stork => self.stork.as_ref(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn app_type_round_trips_through_strings() {
        assert_eq!(AppType::Bind9.to_string(), "bind9");
        assert_eq!("kea".parse::<AppType>().unwrap(), AppType::Kea);
    }

    #[test]
    fn snapshot_deserializes_partial_document() {
        let snapshot: VersionSnapshot = serde_json::from_str(
            r#"{
                "date": "2026-08-01",
                "dataSource": "offline",
                "kea": {
                    "currentStable": [
                        {"version": "2.6.1", "range": "2.6.x", "releaseDate": "2026-05-28"}
                    ],
                    "latestDev": {"version": "2.7.3"},
                    "sortedStableVersions": ["2.4.1", "2.6.1"]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.data_source, Some(DataSource::Offline));
        let kea = snapshot.releases(AppType::Kea).unwrap();
        assert_eq!(kea.current_stable.as_ref().unwrap().len(), 1);
        assert_eq!(kea.latest_dev.as_ref().unwrap().version, "2.7.3");
        assert!(kea.latest_secure.is_none());
        assert!(snapshot.releases(AppType::Bind9).is_none());
    }
}
