use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AssignmentState, LicenseSku, UserLicenseState};
use crate::sku;

/// Properties requested for user listings.
pub const USER_SELECT: &str = "id,displayName,userPrincipalName,createdDateTime,onPremisesSyncEnabled,accountEnabled,assignedLicenses,licenseAssignmentStates";

/// One page of a collection response.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedSku {
    pub sku_id: String,
    pub sku_part_number: String,
    #[serde(default)]
    pub consumed_units: i64,
    #[serde(default)]
    pub prepaid_units: PrepaidUnits,
}

#[derive(Debug, Default, Deserialize)]
pub struct PrepaidUnits {
    #[serde(default)]
    pub enabled: i64,
}

impl From<SubscribedSku> for LicenseSku {
    fn from(raw: SubscribedSku) -> Self {
        LicenseSku {
            friendly_name: sku::friendly_name(&raw.sku_part_number),
            id: raw.sku_id,
            part_number: raw.sku_part_number,
            total_units: raw.prepaid_units.enabled,
            consumed_units: raw.consumed_units,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphUser {
    pub id: String,
    pub display_name: Option<String>,
    pub user_principal_name: Option<String>,
    pub created_date_time: Option<DateTime<Utc>>,
    pub on_premises_sync_enabled: Option<bool>,
    pub account_enabled: Option<bool>,
    #[serde(default)]
    pub assigned_licenses: Vec<AssignedLicense>,
    #[serde(default)]
    pub license_assignment_states: Vec<LicenseAssignmentState>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedLicense {
    pub sku_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseAssignmentState {
    pub sku_id: Option<String>,
    pub assigned_by_group: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub last_updated_date_time: Option<DateTime<Utc>>,
}

impl From<GraphUser> for UserLicenseState {
    fn from(raw: GraphUser) -> Self {
        UserLicenseState {
            user_id: raw.id,
            display_name: raw.display_name.unwrap_or_default(),
            user_principal_name: raw.user_principal_name.unwrap_or_default(),
            created_at: raw.created_date_time,
            sync_enabled: raw.on_premises_sync_enabled.unwrap_or(false),
            account_enabled: raw.account_enabled.unwrap_or(false),
            assigned_licenses: raw.assigned_licenses.into_iter().map(|l| l.sku_id).collect(),
            assignment_states: raw
                .license_assignment_states
                .into_iter()
                // Entries without a sku cannot be attributed to any license
                .filter_map(|s| {
                    Some(AssignmentState {
                        sku_id: s.sku_id?,
                        assigned_by_group: s.assigned_by_group.filter(|g| !g.is_empty()),
                        last_updated: s.last_updated_date_time,
                        state: s.state,
                        error: s.error,
                    })
                })
                .collect(),
        }
    }
}

/// Body of `POST /users/{id}/assignLicense`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignLicenseBody<'a> {
    pub add_licenses: Vec<AddLicense<'a>>,
    pub remove_licenses: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLicense<'a> {
    pub sku_id: &'a str,
    pub disabled_plans: Vec<String>,
}

impl<'a> AssignLicenseBody<'a> {
    pub fn new(add: &'a [String], remove: &'a [String]) -> Self {
        AssignLicenseBody {
            add_licenses: add
                .iter()
                .map(|sku_id| AddLicense {
                    sku_id: sku_id.as_str(),
                    disabled_plans: Vec::new(),
                })
                .collect(),
            remove_licenses: remove,
        }
    }
}

/// Error envelope returned on non-success responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_with_group_and_direct_states() {
        let json = r#"{
            "id": "u1",
            "displayName": "Ada Lovelace",
            "userPrincipalName": "ada@contoso.com",
            "createdDateTime": "2021-03-04T10:00:00Z",
            "onPremisesSyncEnabled": null,
            "accountEnabled": true,
            "assignedLicenses": [{"skuId": "e3", "disabledPlans": []}],
            "licenseAssignmentStates": [
                {"skuId": "e3", "assignedByGroup": null, "state": "Active", "error": "None",
                 "lastUpdatedDateTime": "2023-01-01T00:00:00Z"},
                {"skuId": "e3", "assignedByGroup": "g1", "state": "Active", "error": "None",
                 "lastUpdatedDateTime": null}
            ]
        }"#;

        let user: UserLicenseState = serde_json::from_str::<GraphUser>(json).unwrap().into();
        assert_eq!(user.display_name, "Ada Lovelace");
        assert!(!user.sync_enabled);
        assert!(user.assigned_licenses.contains("e3"));
        assert_eq!(user.assignment_states.len(), 2);
        assert_eq!(user.assignment_states[1].assigned_by_group.as_deref(), Some("g1"));
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_parse_subscribed_sku_resolves_name() {
        let json = r#"{
            "skuId": "6fd2c87f-b296-42f0-b197-1e91e994b900",
            "skuPartNumber": "ENTERPRISEPACK",
            "consumedUnits": 12,
            "prepaidUnits": {"enabled": 25, "suspended": 0, "warning": 0}
        }"#;

        let sku: LicenseSku = serde_json::from_str::<SubscribedSku>(json).unwrap().into();
        assert_eq!(sku.friendly_name, "Office 365 E3");
        assert_eq!(sku.total_units, 25);
        assert_eq!(sku.consumed_units, 12);
    }

    #[test]
    fn test_assign_license_body_shape() {
        let remove = vec!["e3".to_string()];
        let body = AssignLicenseBody::new(&[], &remove);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"addLicenses": [], "removeLicenses": ["e3"]})
        );
    }
}
