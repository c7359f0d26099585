use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subscribed product in the tenant, as of the current query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseSku {
    /// Opaque sku identifier (a GUID in the directory service).
    pub id: String,
    pub part_number: String,
    /// Resolved display name; empty when the part number is not in the table.
    pub friendly_name: String,
    pub total_units: i64,
    pub consumed_units: i64,
}

impl LicenseSku {
    /// Name to show an operator: the friendly name, or the part number when unresolved.
    pub fn label(&self) -> &str {
        if self.friendly_name.is_empty() {
            &self.part_number
        } else {
            &self.friendly_name
        }
    }
}

/// One entry of a user's license assignment state list.
///
/// A user holds one entry per contributing group plus at most one direct entry
/// for the same sku.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentState {
    pub sku_id: String,
    /// Group the license is inherited from; `None` for a direct assignment.
    pub assigned_by_group: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLicenseState {
    pub user_id: String,
    pub display_name: String,
    pub user_principal_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub sync_enabled: bool,
    pub account_enabled: bool,
    pub assigned_licenses: BTreeSet<String>,
    pub assignment_states: Vec<AssignmentState>,
}

/// How a license reached a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssignmentPath {
    Directly,
    FromGroup,
    DirectlyAndGroup,
}

impl AssignmentPath {
    /// Stable machine-readable name used in exports.
    pub fn code(self) -> &'static str {
        match self {
            AssignmentPath::Directly => "Directly",
            AssignmentPath::FromGroup => "FromGroup",
            AssignmentPath::DirectlyAndGroup => "DirectlyAndGroup",
        }
    }
}

impl std::fmt::Display for AssignmentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentPath::Directly => write!(f, "Directly"),
            AssignmentPath::FromGroup => write!(f, "From group"),
            AssignmentPath::DirectlyAndGroup => write!(f, "Directly and group"),
        }
    }
}

/// The subset of [`AssignmentPath`] a license can be removed from a user through.
///
/// Group-inherited licenses have to be removed from the group itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovablePath {
    Directly,
    DirectlyAndGroup,
}

impl From<RemovablePath> for AssignmentPath {
    fn from(path: RemovablePath) -> Self {
        match path {
            RemovablePath::Directly => AssignmentPath::Directly,
            RemovablePath::DirectlyAndGroup => AssignmentPath::DirectlyAndGroup,
        }
    }
}

/// One (user, sku) line of a classification report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub sku_id: String,
    pub sku_part_number: String,
    pub license_name: String,
    pub user_id: String,
    pub display_name: String,
    pub user_principal_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub sync_enabled: bool,
    pub account_enabled: bool,
    pub path: AssignmentPath,
    /// Groups contributing this sku, in assignment-state order.
    pub groups: Vec<String>,
    /// Most recent update among the matching assignment states.
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum RemovalStatus {
    Removed,
    /// Declined at the confirmation gate.
    Skipped,
    Failed(String),
}

impl std::fmt::Display for RemovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemovalStatus::Removed => write!(f, "removed"),
            RemovalStatus::Skipped => write!(f, "skipped"),
            RemovalStatus::Failed(msg) => write!(f, "failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemovalOutcome {
    pub row: ReportRow,
    #[serde(flatten)]
    pub status: RemovalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_codes_match_serialized_names() {
        for path in [
            AssignmentPath::Directly,
            AssignmentPath::FromGroup,
            AssignmentPath::DirectlyAndGroup,
        ] {
            let json = serde_json::to_string(&path).unwrap();
            assert_eq!(json, format!("\"{}\"", path.code()));
        }
    }

    #[test]
    fn test_label_falls_back_to_part_number() {
        let sku = LicenseSku {
            id: "id".into(),
            part_number: "CONTOSO_CUSTOM".into(),
            friendly_name: String::new(),
            total_units: 1,
            consumed_units: 0,
        };
        assert_eq!(sku.label(), "CONTOSO_CUSTOM");
    }
}
