// End-to-end flow over the version engine: a snapshot as the server
// serializes it, driven through the service the way the UI drives it.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;

use roost_core::{
    AppType, Machine, ReportGroup, Severity, VersionService, VersionSnapshot,
    version::compliance_report,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn wire_snapshot() -> VersionSnapshot {
    serde_json::from_value(json!({
        "date": "2026-08-01",
        "dataSource": "online",
        "kea": {
            "currentStable": [
                {"version": "2.6.1", "range": "2.6.x", "releaseDate": "2026-05-28",
                 "eolDate": "2027-06-30", "status": "Current Stable"},
                {"version": "2.4.1", "range": "2.4.x", "releaseDate": "2025-07-26",
                 "eolDate": "2026-06-30", "status": "Current Stable"}
            ],
            "latestDev": {"version": "2.7.3", "releaseDate": "2026-06-26", "status": "Development"},
            "sortedStableVersions": ["2.4.1", "2.6.1"]
        },
        "bind9": {
            "currentStable": [
                {"version": "9.18.33", "range": "9.18.x", "status": "ESV"}
            ],
            "latestSecure": {"version": "9.18.33", "status": "Security update"},
            "sortedStableVersions": ["9.18.33"]
        },
        "stork": {
            "latestDev": {"version": "1.19.0", "status": "Development"},
            "latestSecure": {"version": "1.15.1", "status": "Security update"}
        }
    }))
    .unwrap()
}

fn fleet() -> Vec<Machine> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "address": "dhcp-primary.example.net",
            "agentVersion": "1.19.0",
            "apps": [
                {"appType": "kea", "version": "2.6.1", "daemons": [
                    {"name": "dhcp4", "version": "2.6.1"},
                    {"name": "dhcp6", "version": "2.6.1"}
                ]}
            ]
        },
        {
            "id": 2,
            "address": "dns-1.example.net",
            "agentVersion": "1.19.0",
            "apps": [
                {"appType": "bind9", "version": "9.18.30", "daemons": [{"name": "named"}]}
            ]
        },
        {
            "id": 3,
            "address": "lab.example.net",
            "agentVersion": "1.15.0",
            "apps": []
        }
    ]))
    .unwrap()
}

// ── Tests ───────────────────────────────────────────────────────────

#[test]
fn snapshot_drives_assessment_and_alerting() {
    let mut service = VersionService::default();
    assert!(service.needs_refresh());

    let _ = service.refresh(wire_snapshot());
    assert!(!service.needs_refresh());
    assert!(service.is_online_data());

    // Kea stable, up to date.
    let feedback = service.check_version("2.6.1", AppType::Kea).unwrap();
    assert_eq!(feedback.severity, Severity::Success);
    assert!(!service.current_alert().detected);

    // BIND9 below the security release raises the alert.
    let feedback = service.check_version("9.18.30", AppType::Bind9).unwrap();
    assert_eq!(feedback.severity, Severity::Error);
    assert_eq!(
        feedback.messages,
        vec![
            "Security update 9.18.33 was released for BIND9. \
             Please update as soon as possible!"
        ]
    );
    assert!(service.current_alert().detected);
    assert_eq!(service.current_alert().severity, Severity::Error);

    // Refresh replaces the snapshot and clears the alert wholesale.
    let _ = service.refresh(wire_snapshot());
    assert!(!service.current_alert().detected);
}

#[test]
fn fleet_report_over_wire_shaped_machines() {
    let mut service = VersionService::default();
    let _ = service.refresh(wire_snapshot());
    service.set_server_version("1.19.0");

    let report = compliance_report(&mut service, &fleet());

    // Machine 3 runs an agent below the secure release; machine 2 runs
    // BIND9 below it; machine 1 is clean.
    assert_eq!(report.machines.len(), 3);
    assert_eq!(report.machines[0].severity, Severity::Error);
    assert_eq!(
        report.machines_in(ReportGroup::Error).count(),
        2,
        "machines 2 and 3 both carry security-level findings"
    );
    assert_eq!(report.machines_in(ReportGroup::Success).count(), 1);
    assert_eq!(report.data_date.as_deref(), Some("2026-08-01"));
}

#[test]
fn feedback_survives_reserialization() {
    let mut service = VersionService::default();
    let _ = service.refresh(wire_snapshot());

    let feedback = service.check_version("2.4.1", AppType::Kea).unwrap();
    let json = serde_json::to_string(&feedback).unwrap();
    let back: roost_core::VersionFeedback = serde_json::from_str(&json).unwrap();
    assert_eq!(back, feedback);
}
