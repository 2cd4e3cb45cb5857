// ── Version classification ──
//
// Pure assessment of one software version against a release-metadata
// snapshot. Branches are evaluated in a fixed order; the first
// applicable branch wins. Caching and alerting live in the service, not
// here.

use semver::{Version, VersionReq};

use crate::error::AssessmentError;
use crate::model::{AppType, Severity, VersionFeedback, VersionSnapshot};

/// Coerce a version string into a canonical semantic version.
///
/// Mirrors npm-style coercion: the first digit run starts the major
/// component, up to three dot-separated numeric components are read and
/// missing ones are zero-filled. `"v2.6"` becomes `2.6.0`,
/// `"BIND 9.18.19-S1"` becomes `9.18.19`. Returns `None` when no digits
/// are found.
pub fn sanitize_semver(version: &str) -> Option<Version> {
    let start = version.find(|c: char| c.is_ascii_digit())?;
    let mut rest = &version[start..];

    let mut components = [0u64; 3];
    for (i, component) in components.iter_mut().enumerate() {
        if i > 0 {
            let Some(tail) = rest.strip_prefix('.') else {
                break;
            };
            if !tail.starts_with(|c: char| c.is_ascii_digit()) {
                break;
            }
            rest = tail;
        }
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        *component = rest[..digits].parse().ok()?;
        rest = &rest[digits..];
    }

    Some(Version::new(components[0], components[1], components[2]))
}

/// Whether a version is a development release: odd minor component, or
/// any pre-2.0 Stork release (all dev by convention).
pub(crate) fn is_development(version: &Version, app: AppType) -> bool {
    if app == AppType::Stork && *version < Version::new(2, 0, 0) {
        return true;
    }
    version.minor % 2 == 1
}

/// Parse a version string carried in the metadata itself; anything
/// unparsable there means the snapshot is malformed.
fn metadata_version(version: &str) -> Result<Version, AssessmentError> {
    sanitize_semver(version).ok_or(AssessmentError::InvalidMetadata)
}

/// Classify `version` of `app` against `snapshot`.
///
/// `server_version` is the separately tracked server version used for
/// the Stork server/agent consistency check; pass `None` when unknown.
pub fn assess(
    version: &str,
    app: AppType,
    snapshot: &VersionSnapshot,
    server_version: Option<&str>,
) -> Result<VersionFeedback, AssessmentError> {
    let semver = sanitize_semver(version).ok_or_else(|| AssessmentError::UnparsableVersion {
        version: version.to_owned(),
    })?;
    let app_name = app.display_name();
    let releases = snapshot.releases(app);

    // Security releases trump everything else.
    if let Some(secure) = releases.and_then(|r| r.latest_secure.as_ref()) {
        if semver < metadata_version(&secure.version)? {
            return Ok(VersionFeedback::new(
                Severity::Error,
                format!(
                    "Security update {} was released for {app_name}. \
                     Please update as soon as possible!",
                    secure.version
                ),
            ));
        }
    }

    let current_stable = releases.and_then(|r| r.current_stable.as_deref());

    let feedback = if is_development(&semver, app) {
        assess_development(&semver, app, snapshot, current_stable.is_some())?
    } else {
        assess_stable(&semver, app, snapshot, current_stable)?
    };

    Ok(server_consistency_check(app, &semver, feedback, server_version))
}

/// Stable branch: match against the supported release lines, fall back
/// to the full sorted-stable list when no line covers the version.
fn assess_stable(
    semver: &Version,
    app: AppType,
    snapshot: &VersionSnapshot,
    current_stable: Option<&[crate::model::ReleaseInfo]>,
) -> Result<VersionFeedback, AssessmentError> {
    let app_name = app.display_name();
    let data_date = snapshot.date.as_str();

    let Some(stable_entries) = current_stable else {
        return Ok(VersionFeedback::new(
            Severity::Secondary,
            format!("As of {data_date}, the {app_name} {semver} stable version is not known yet."),
        ));
    };
    if stable_entries.is_empty() {
        return Err(AssessmentError::InvalidMetadata);
    }

    for entry in stable_entries {
        let range = entry.range.as_deref().ok_or(AssessmentError::InvalidMetadata)?;
        let req = VersionReq::parse(range).map_err(|_| AssessmentError::InvalidMetadata)?;
        if !req.matches(semver) {
            continue;
        }
        let entry_version = metadata_version(&entry.version)?;
        let feedback = if *semver < entry_version {
            VersionFeedback::new(
                Severity::Info,
                format!(
                    "Stable {app_name} version update ({}) is available \
                     (known as of {data_date}).",
                    entry.version
                ),
            )
        } else if *semver > entry_version {
            VersionFeedback::new(
                Severity::Secondary,
                format!(
                    "Current stable {app_name} version (known as of {data_date}) is {}. \
                     You are using more recent version {semver}.",
                    entry.version
                ),
            )
        } else {
            VersionFeedback::new(
                Severity::Success,
                format!("{semver} is current {app_name} stable version (known as of {data_date})."),
            )
        };
        return Ok(feedback);
    }

    // No supported line covers this version; compare against the full
    // sorted stable list. An empty list here means the metadata is
    // inconsistent; there is no defined message for that case.
    let stable_versions = snapshot
        .releases(app)
        .and_then(|r| r.sorted_stable_versions.as_ref())
        .filter(|versions| !versions.is_empty())
        .ok_or(AssessmentError::InvalidMetadata)?;
    let oldest = metadata_version(&stable_versions[0])?;
    let versions_text = stable_versions.join(", ");
    let feedback = if *semver < oldest {
        VersionFeedback::new(
            Severity::Warn,
            format!(
                "{app_name} version {semver} is older than current stable \
                 version/s {versions_text}."
            ),
        )
    } else {
        VersionFeedback::new(
            Severity::Secondary,
            format!(
                "{app_name} version {semver} is more recent than current stable \
                 version/s {versions_text} (known as of {data_date})."
            ),
        )
    };
    Ok(feedback)
}

/// Development branch: compare against the latest known dev release.
fn assess_development(
    semver: &Version,
    app: AppType,
    snapshot: &VersionSnapshot,
    stable_alternative_exists: bool,
) -> Result<VersionFeedback, AssessmentError> {
    let app_name = app.display_name();
    let data_date = snapshot.date.as_str();

    let Some(dev) = snapshot.releases(app).and_then(|r| r.latest_dev.as_ref()) else {
        return Err(AssessmentError::CannotAssess {
            app,
            version: semver.to_string(),
        });
    };
    let dev_version = metadata_version(&dev.version)?;

    let mut feedback = if *semver < dev_version {
        VersionFeedback::new(
            Severity::Warn,
            format!(
                "Development {app_name} version update ({}) is available \
                 (known as of {data_date}).",
                dev.version
            ),
        )
    } else if *semver > dev_version {
        VersionFeedback::new(
            Severity::Secondary,
            format!(
                "Current development {app_name} version (known as of {data_date}) is {}. \
                 You are using more recent version {semver}.",
                dev.version
            ),
        )
    } else {
        VersionFeedback::new(
            Severity::Success,
            format!("{semver} is current {app_name} development version (known as of {data_date})."),
        )
    };

    // Running dev while a stable alternative exists warrants a warning.
    if stable_alternative_exists {
        feedback
            .messages
            .push("Please be advised that using development version in production is not recommended.".to_owned());
        feedback.severity = Severity::Warn.min(feedback.severity);
    }

    Ok(feedback)
}

/// Stork-only server/agent consistency check: a known server version
/// that differs from the assessed agent version forces at least `Warn`
/// and appends a mismatch message.
fn server_consistency_check(
    app: AppType,
    semver: &Version,
    mut feedback: VersionFeedback,
    server_version: Option<&str>,
) -> VersionFeedback {
    if app != AppType::Stork {
        return feedback;
    }
    let Some(server) = server_version else {
        return feedback;
    };
    if server == semver.to_string() {
        return feedback;
    }
    feedback.messages.push(format!(
        "Stork server {server} and Stork agent {semver} versions do not match! \
         Please install matching versions!"
    ));
    feedback.severity = Severity::Warn.min(feedback.severity);
    feedback
}
