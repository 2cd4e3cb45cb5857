// ── Fleet version-compliance report ──
//
// Summarizes version feedback across a machines listing for the
// software-versions page: one worst-case severity per machine, machines
// bucketed into display groups with a subheader each.

use crate::model::{AppType, Machine, MonitoredApp, Severity};

use super::service::VersionService;

/// Display bucket for the report. `Secondary` feedback is presentation
/// noise at fleet level and folds into `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportGroup {
    Error,
    Warn,
    Info,
    Success,
}

impl ReportGroup {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Error,
            Severity::Warn => Self::Warn,
            Severity::Info => Self::Info,
            Severity::Secondary | Severity::Success => Self::Success,
        }
    }

    /// Subheader displayed above the group's machines.
    pub fn subheader(self, data_date: &str) -> String {
        match self {
            Self::Error => {
                "Security updates were found for ISC software used on those machines!".to_owned()
            }
            Self::Warn => "Those machines use ISC software versions that require your attention. \
                           Software updates are available."
                .to_owned(),
            Self::Info => "ISC software updates are available for those machines.".to_owned(),
            Self::Success => {
                format!("Those machines use up-to-date ISC software (known as of {data_date}).")
            }
        }
    }
}

/// Per-machine outcome of the fleet scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineCompliance {
    pub machine_id: i64,
    pub address: String,
    /// Most urgent severity across the agent and every app on the machine.
    pub severity: Severity,
    pub group: ReportGroup,
}

/// The whole fleet, most urgent machines first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceReport {
    /// Manufacture date of the metadata the report was built against.
    pub data_date: Option<String>,
    pub machines: Vec<MachineCompliance>,
}

impl ComplianceReport {
    /// Machines belonging to the given display group.
    pub fn machines_in(&self, group: ReportGroup) -> impl Iterator<Item = &MachineCompliance> {
        self.machines.iter().filter(move |m| m.group == group)
    }
}

/// Whether the daemons of a Kea app report differing versions.
///
/// All daemons of one Kea install ship from the same release; a mismatch
/// means a partially upgraded install. Daemons without a known version
/// are skipped; non-Kea apps never mismatch.
pub fn daemon_versions_mismatch(app: &MonitoredApp) -> bool {
    if app.app_type != AppType::Kea {
        return false;
    }
    let mut versions = app.daemons.iter().filter_map(|d| d.version.as_deref());
    let Some(first) = versions.next() else {
        return false;
    };
    versions.any(|version| version != first)
}

/// Worst-case severity for one machine across its agent and app versions.
///
/// Unassessable versions (unparsable, missing metadata) are skipped;
/// a report over the whole fleet must not fail on one odd machine.
pub fn machine_severity(service: &mut VersionService, machine: &Machine) -> Severity {
    let mut severity = Severity::Success;

    if let Some(agent_version) = machine.agent_version.as_deref() {
        if let Ok(feedback) = service.check_version(agent_version, AppType::Stork) {
            severity = severity.min(feedback.severity);
        }
    }

    for app in &machine.apps {
        if daemon_versions_mismatch(app) {
            severity = severity.min(Severity::Warn);
        }
        if let Some(version) = app.version.as_deref() {
            if let Ok(feedback) = service.check_version(version, app.app_type) {
                severity = severity.min(feedback.severity);
            }
        }
    }

    severity
}

/// Scan the fleet and bucket every machine into a display group.
pub fn compliance_report(service: &mut VersionService, machines: &[Machine]) -> ComplianceReport {
    let mut entries: Vec<MachineCompliance> = machines
        .iter()
        .map(|machine| {
            let severity = machine_severity(service, machine);
            MachineCompliance {
                machine_id: machine.id,
                address: machine.address.clone(),
                severity,
                group: ReportGroup::from_severity(severity),
            }
        })
        .collect();
    entries.sort_by_key(|entry| entry.severity);

    ComplianceReport {
        data_date: service.snapshot_date().map(str::to_owned),
        machines: entries,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::model::{AppReleases, Daemon, ReleaseInfo, VersionSnapshot};
    use crate::version::service::ServiceConfig;

    fn service() -> VersionService {
        let mut service = VersionService::new(ServiceConfig::default());
        let _ = service.refresh(VersionSnapshot {
            date: "2026-08-01".to_owned(),
            data_source: None,
            kea: Some(AppReleases {
                current_stable: Some(vec![
                    ReleaseInfo::new("2.6.1").with_range("2.6.x"),
                    ReleaseInfo::new("2.4.1").with_range("2.4.x"),
                ]),
                latest_dev: Some(ReleaseInfo::new("2.7.3")),
                latest_secure: None,
                sorted_stable_versions: Some(vec!["2.4.1".to_owned(), "2.6.1".to_owned()]),
            }),
            bind9: None,
            stork: Some(AppReleases {
                latest_secure: Some(ReleaseInfo::new("1.15.1")),
                latest_dev: Some(ReleaseInfo::new("1.16.0")),
                ..AppReleases::default()
            }),
        });
        service
    }

    fn kea_machine(id: i64, agent: &str, kea: &str) -> Machine {
        Machine {
            id,
            address: format!("10.0.0.{id}"),
            agent_version: Some(agent.to_owned()),
            apps: vec![MonitoredApp {
                app_type: AppType::Kea,
                version: Some(kea.to_owned()),
                daemons: Vec::new(),
            }],
        }
    }

    #[test]
    fn kea_daemon_mismatch_detection() {
        let mismatching = MonitoredApp {
            app_type: AppType::Kea,
            version: Some("2.6.1".to_owned()),
            daemons: vec![
                Daemon {
                    name: "dhcp4".to_owned(),
                    version: Some("2.6.1".to_owned()),
                },
                Daemon {
                    name: "ddns".to_owned(),
                    version: Some("2.6.3".to_owned()),
                },
            ],
        };
        assert!(daemon_versions_mismatch(&mismatching));

        let uniform = MonitoredApp {
            daemons: vec![
                Daemon {
                    name: "dhcp4".to_owned(),
                    version: Some("2.6.1".to_owned()),
                },
                Daemon {
                    name: "dhcp6".to_owned(),
                    version: Some("2.6.1".to_owned()),
                },
                Daemon {
                    name: "netconf".to_owned(),
                    version: None,
                },
            ],
            ..mismatching.clone()
        };
        assert!(!daemon_versions_mismatch(&uniform));
    }

    #[test]
    fn non_kea_apps_never_mismatch() {
        let bind = MonitoredApp {
            app_type: AppType::Bind9,
            version: Some("9.18.19".to_owned()),
            daemons: vec![
                Daemon {
                    name: "named".to_owned(),
                    version: Some("9.18.19".to_owned()),
                },
                Daemon {
                    name: "named-worker".to_owned(),
                    version: Some("9.18.20".to_owned()),
                },
            ],
        };
        assert!(!daemon_versions_mismatch(&bind));
    }

    #[test]
    fn machine_severity_takes_the_worst_feedback() {
        let mut service = service();
        // Agent below the secure release (error), Kea up to date (success).
        let machine = kea_machine(1, "1.15.0", "2.6.1");
        assert_eq!(machine_severity(&mut service, &machine), Severity::Error);
    }

    #[test]
    fn daemon_mismatch_degrades_an_otherwise_clean_machine() {
        let mut service = service();
        let mut machine = kea_machine(1, "1.16.0", "2.6.1");
        machine.apps[0].daemons = vec![
            Daemon {
                name: "dhcp4".to_owned(),
                version: Some("2.6.1".to_owned()),
            },
            Daemon {
                name: "dhcp6".to_owned(),
                version: Some("2.6.0".to_owned()),
            },
        ];
        assert_eq!(machine_severity(&mut service, &machine), Severity::Warn);
    }

    #[test]
    fn unassessable_versions_are_skipped() {
        let mut service = service();
        let mut machine = kea_machine(1, "1.16.0", "2.6.1");
        machine.apps.push(MonitoredApp {
            app_type: AppType::Bind9,
            version: Some("unknown".to_owned()),
            daemons: Vec::new(),
        });
        // The unparsable BIND9 version does not fail the scan.
        assert_eq!(machine_severity(&mut service, &machine), Severity::Success);
    }

    #[test]
    fn report_buckets_machines_most_urgent_first() {
        let mut service = service();
        let machines = vec![
            kea_machine(1, "1.16.0", "2.6.1"), // success
            kea_machine(2, "1.15.0", "2.6.1"), // error (agent security)
            kea_machine(3, "1.16.0", "2.6.0"), // info (stable update available)
        ];
        let report = compliance_report(&mut service, &machines);

        let ids: Vec<i64> = report.machines.iter().map(|m| m.machine_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(report.machines_in(ReportGroup::Error).count(), 1);
        assert_eq!(report.machines_in(ReportGroup::Success).count(), 1);
        assert_eq!(report.data_date.as_deref(), Some("2026-08-01"));
    }

    #[test]
    fn secondary_feedback_lands_in_the_success_group() {
        assert_eq!(
            ReportGroup::from_severity(Severity::Secondary),
            ReportGroup::Success
        );
    }

    #[test]
    fn subheaders_carry_the_data_date_where_relevant() {
        assert!(ReportGroup::Success.subheader("2026-08-01").contains("2026-08-01"));
        assert!(ReportGroup::Error.subheader("2026-08-01").contains("Security updates"));
    }
}
