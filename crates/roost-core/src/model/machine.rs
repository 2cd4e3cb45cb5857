// ── Monitored fleet model ──
//
// The slice of the machines listing the version report needs: one agent
// version per machine plus the versions of the apps (and their daemons)
// it supervises.

use serde::{Deserialize, Serialize};

use super::release::AppType;

/// A single daemon of a monitored app (e.g. Kea's `dhcp4` / `ddns`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Daemon {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// One monitored app instance running on a machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredApp {
    pub app_type: AppType,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub daemons: Vec<Daemon>,
}

/// A machine running a monitoring agent and zero or more apps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: i64,
    pub address: String,
    #[serde(default)]
    pub agent_version: Option<String>,
    #[serde(default)]
    pub apps: Vec<MonitoredApp>,
}
