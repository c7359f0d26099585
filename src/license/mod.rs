//! License assignment classification and removal.
//!
//! - [`classifier`] — selects target skus and partitions their holders by assignment path.
//! - [`removal`] — the throttled, confirmable removal driver.

pub mod classifier;
pub mod removal;

use anyhow::Result;

use crate::graph::DirectoryService;
use crate::models::LicenseSku;
use classifier::{classify, select_skus, Classification, SkuScope};

/// A fresh snapshot of the covered skus and their classified holders.
pub struct Snapshot {
    pub skus: Vec<LicenseSku>,
    pub classification: Classification,
}

/// Fetch the inventory, select the skus in `scope`, and classify every holder.
///
/// Any query failure aborts the whole snapshot; no partial result is returned.
pub async fn snapshot(service: &dyn DirectoryService, scope: &SkuScope) -> Result<Snapshot> {
    let inventory = service.list_subscribed_skus().await?;
    let skus = select_skus(&inventory, scope)?;

    let mut classification = Classification::new();
    for sku in &skus {
        let users = service.list_licensed_users(&sku.id).await?;
        for (path, rows) in classify(&users, std::slice::from_ref(sku)) {
            classification.entry(path).or_default().extend(rows);
        }
    }

    Ok(Snapshot {
        skus,
        classification,
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::graph::GraphError;
    use crate::license::classifier::tests::{sku, user};
    use crate::models::{AssignmentPath, UserLicenseState};

    struct StaticDirectory {
        fail_users: bool,
    }

    #[async_trait]
    impl DirectoryService for StaticDirectory {
        async fn list_subscribed_skus(&self) -> Result<Vec<LicenseSku>, GraphError> {
            Ok(vec![
                sku("e5", "SPE_E5", 1),
                sku("e3", "ENTERPRISEPACK", 2),
                sku("free", "FLOW_FREE", 0),
            ])
        }

        async fn list_licensed_users(&self, sku_id: &str) -> Result<Vec<UserLicenseState>, GraphError> {
            if self.fail_users {
                return Err(GraphError::RateLimited { retry_after: None });
            }
            Ok(match sku_id {
                "e3" => vec![
                    user("Bob", &[("e3", Some("g1"))]),
                    user("Ada", &[("e3", None), ("e5", None)]),
                ],
                "e5" => vec![user("Ada", &[("e3", None), ("e5", None)])],
                _ => vec![],
            })
        }

        async fn assign_license(&self, _: &str, _: &[String], _: &[String]) -> Result<(), GraphError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_snapshot_all_consumed() {
        let service = StaticDirectory { fail_users: false };
        let snap = snapshot(&service, &SkuScope::AllConsumed).await.unwrap();

        let labels: Vec<_> = snap.skus.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Microsoft 365 E5", "Office 365 E3"]);

        let direct: Vec<_> = snap.classification[&AssignmentPath::Directly]
            .iter()
            .map(|r| (r.sku_part_number.as_str(), r.display_name.as_str()))
            .collect();
        assert_eq!(direct, vec![("SPE_E5", "Ada"), ("ENTERPRISEPACK", "Ada")]);
        assert_eq!(snap.classification[&AssignmentPath::FromGroup].len(), 1);
    }

    #[tokio::test]
    async fn test_query_failure_aborts() {
        let service = StaticDirectory { fail_users: true };
        assert!(snapshot(&service, &SkuScope::AllConsumed).await.is_err());
    }
}
