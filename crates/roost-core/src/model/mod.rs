// ── Domain model ──
//
// Canonical representations of everything the core transforms: cascaded
// configuration parameters, release metadata snapshots, version feedback,
// and the monitored fleet. All wire-shaped types deserialize from the
// JSON produced by the REST collaborator.

pub mod feedback;
pub mod machine;
pub mod params;
pub mod release;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use roost_core::model::*` gives you everything.

// Parameter cascade
pub use params::{NamedParameterSet, ParameterBag, ParameterValue};

// Release metadata
pub use release::{AppReleases, AppType, DataSource, ReleaseInfo, VersionSnapshot};

// Feedback / alerting
pub use feedback::{Severity, VersionAlert, VersionFeedback};

// Fleet
pub use machine::{Daemon, Machine, MonitoredApp};
