// ── Software version assessment ──
//
// `assess` is the pure classifier; `VersionService` wraps it with the
// snapshot lifecycle, feedback cache, and alert stream; `report` builds
// the fleet-wide compliance summary on top.

mod alert;
mod assess;
mod report;
mod service;

pub use alert::AlertStream;
pub use assess::{assess, sanitize_semver};
pub use report::{
    ComplianceReport, MachineCompliance, ReportGroup, compliance_report, daemon_versions_mismatch,
    machine_severity,
};
pub use service::{ServiceConfig, VersionService};
