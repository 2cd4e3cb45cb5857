// roost-core: data-transformation core of the roost DHCP/DNS fleet console.
//
// Two independent components live here: the cascaded parameter resolver
// (inheritance-aware display rows for multi-server configuration) and the
// software version feedback engine (release-metadata classification with
// caching and alerting). Transport, rendering, and persistence are the
// embedding application's concern.

pub mod cascade;
pub mod convert;
pub mod error;
pub mod model;
pub mod version;

// ── Primary re-exports ──────────────────────────────────────────────
pub use cascade::{ParameterRow, ResolvedParameter, resolve};
pub use error::AssessmentError;
pub use version::{
    AlertStream, ComplianceReport, MachineCompliance, ReportGroup, ServiceConfig, VersionService,
    assess, sanitize_semver,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Parameter cascade
    NamedParameterSet, ParameterBag, ParameterValue,
    // Release metadata
    AppReleases, AppType, DataSource, ReleaseInfo, VersionSnapshot,
    // Feedback / alerting
    Severity, VersionAlert, VersionFeedback,
    // Fleet
    Daemon, Machine, MonitoredApp,
};
