use std::collections::BTreeMap;

use anyhow::{bail, Result};

use crate::models::{AssignmentPath, LicenseSku, ReportRow, UserLicenseState};

/// Which subscribed skus a query or removal run covers.
#[derive(Debug, Clone, PartialEq)]
pub enum SkuScope {
    /// One sku, named by id, part number, or display name.
    Single(String),
    /// Every sku with at least one consumed unit.
    AllConsumed,
}

/// Classified rows keyed by assignment path.
pub type Classification = BTreeMap<AssignmentPath, Vec<ReportRow>>;

/// Pick the skus covered by `scope` from the tenant's subscribed inventory.
///
/// `AllConsumed` drops skus nobody consumes and orders the rest by display
/// name. `Single` fails when nothing in the inventory matches.
pub fn select_skus(skus: &[LicenseSku], scope: &SkuScope) -> Result<Vec<LicenseSku>> {
    match scope {
        SkuScope::Single(wanted) => {
            let wanted = wanted.trim();
            let found = skus.iter().find(|s| {
                s.id.eq_ignore_ascii_case(wanted)
                    || s.part_number == wanted
                    || (!s.friendly_name.is_empty() && s.friendly_name.eq_ignore_ascii_case(wanted))
            });
            match found {
                Some(sku) => Ok(vec![sku.clone()]),
                None => bail!("no subscribed license matches '{}'", wanted),
            }
        }
        SkuScope::AllConsumed => {
            let mut selected: Vec<LicenseSku> = skus
                .iter()
                .filter(|s| s.consumed_units > 0)
                .cloned()
                .collect();
            selected.sort_by(|a, b| {
                a.label()
                    .to_lowercase()
                    .cmp(&b.label().to_lowercase())
                    .then_with(|| a.part_number.cmp(&b.part_number))
            });
            Ok(selected)
        }
    }
}

/// Determine how `sku_id` reached `user`, looking at every matching assignment state.
///
/// A user with the sku assigned but no matching state entries is treated as
/// directly assigned: no group reference was observed.
pub fn path_for(user: &UserLicenseState, sku_id: &str) -> AssignmentPath {
    let mut direct = false;
    let mut from_group = false;

    for state in user.assignment_states.iter().filter(|s| s.sku_id == sku_id) {
        match state.assigned_by_group {
            Some(_) => from_group = true,
            None => direct = true,
        }
    }

    match (direct, from_group) {
        (true, true) => AssignmentPath::DirectlyAndGroup,
        (false, true) => AssignmentPath::FromGroup,
        _ => AssignmentPath::Directly,
    }
}

/// Partition every (user, sku) pair into its assignment path.
///
/// Skus are visited in the given order; within a sku, rows are ordered by
/// display name. Each user holding a sku lands in exactly one bucket.
pub fn classify(users: &[UserLicenseState], skus: &[LicenseSku]) -> Classification {
    let mut buckets = Classification::new();

    for sku in skus {
        let mut holders: Vec<&UserLicenseState> = users
            .iter()
            .filter(|u| u.assigned_licenses.contains(&sku.id))
            .collect();
        holders.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then_with(|| a.user_principal_name.cmp(&b.user_principal_name))
        });

        for user in holders {
            let row = report_row(user, sku);
            buckets.entry(row.path).or_default().push(row);
        }
    }

    buckets
}

fn report_row(user: &UserLicenseState, sku: &LicenseSku) -> ReportRow {
    let matching: Vec<_> = user
        .assignment_states
        .iter()
        .filter(|s| s.sku_id == sku.id)
        .collect();

    let groups = matching
        .iter()
        .filter_map(|s| s.assigned_by_group.clone())
        .collect();
    let last_updated = matching.iter().filter_map(|s| s.last_updated).max();

    ReportRow {
        sku_id: sku.id.clone(),
        sku_part_number: sku.part_number.clone(),
        license_name: sku.friendly_name.clone(),
        user_id: user.user_id.clone(),
        display_name: user.display_name.clone(),
        user_principal_name: user.user_principal_name.clone(),
        created_at: user.created_at,
        sync_enabled: user.sync_enabled,
        account_enabled: user.account_enabled,
        path: path_for(user, &sku.id),
        groups,
        last_updated,
    }
}
