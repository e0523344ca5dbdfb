use crate::changelog::Release;
use crate::constants::{NO_SUMMARY_PLACEHOLDER, UNKNOWN_VERSION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A detected upgrade that has not been applied yet.
///
/// Written by the notification hook, read and replaced by the upgrade flow.
///
/// # Serialization
///
/// ```json
/// {
///   "previousVersion": "1.0.0",
///   "latestVersion": "1.2.0",
///   "changelogs": [
///     { "version": "1.2.0", "changelog": "..." },
///     { "version": "1.1.0", "changelog": "..." }
///   ],
///   "detectedAt": "2025-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUpgrade {
    /// The installed version when the upgrade was detected.
    pub previous_version: String,
    /// The latest published version at detection time.
    pub latest_version: String,
    /// Releases in `(previous_version, latest_version]`, newest first.
    pub changelogs: Vec<Release>,
    /// UTC timestamp of detection.
    pub detected_at: DateTime<Utc>,
}

impl PendingUpgrade {
    /// Record an upgrade detected now.
    pub fn new(
        previous_version: impl Into<String>,
        latest_version: impl Into<String>,
        changelogs: Vec<Release>,
    ) -> Self {
        Self {
            previous_version: previous_version.into(),
            latest_version: latest_version.into(),
            changelogs,
            detected_at: Utc::now(),
        }
    }
}

/// A summary prepared by the upgrade flow, displayed once by the hook.
///
/// Fields that are missing, `null` or empty fall back to placeholders so a
/// partially written summary still displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpgradeSummary {
    /// Version before the upgrade.
    #[serde(default = "unknown_version", deserialize_with = "version_or_unknown")]
    pub previous_version: String,
    /// Version after the upgrade.
    #[serde(default = "unknown_version", deserialize_with = "version_or_unknown")]
    pub latest_version: String,
    /// Human-readable summary; may contain literal `\033` escape markers.
    #[serde(default = "missing_summary", deserialize_with = "summary_or_placeholder")]
    pub summary: String,
}

fn unknown_version() -> String {
    UNKNOWN_VERSION.to_string()
}

fn missing_summary() -> String {
    NO_SUMMARY_PLACEHOLDER.to_string()
}

/// A string field where `null` and `""` count as absent.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

fn version_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty(deserializer)?.unwrap_or_else(unknown_version))
}

fn summary_or_placeholder<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty(deserializer)?.unwrap_or_else(missing_summary))
}
