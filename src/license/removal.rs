use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use colored::Colorize;
use dialoguer::Select;

use crate::graph::DirectoryService;
use crate::models::{AssignmentPath, RemovablePath, RemovalOutcome, RemovalStatus, ReportRow};

/// Waits out the delay placed in front of every mutating call.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn wait(&self, delay: Duration);
}

pub struct TokioThrottle;

#[async_trait]
impl Throttle for TokioThrottle {
    async fn wait(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Per-item gate consulted before each removal. Returning `false` skips the row.
pub trait Confirm {
    fn confirm(&mut self, row: &ReportRow) -> Result<bool>;
}

/// Approves every row (`--yes`).
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _row: &ReportRow) -> Result<bool> {
        Ok(true)
    }
}

/// Reports what would be removed and declines every row (`--what-if`).
pub struct WhatIf;

impl Confirm for WhatIf {
    fn confirm(&mut self, row: &ReportRow) -> Result<bool> {
        eprintln!(
            "  {} remove {} from {}",
            "What if:".cyan(),
            row_license(row),
            row.user_principal_name
        );
        Ok(false)
    }
}

/// Interactive yes / no / yes-to-all / no-to-all prompt.
#[derive(Default)]
pub struct PromptConfirm {
    answer_for_all: Option<bool>,
}

impl PromptConfirm {
    const CHOICES: [&'static str; 4] = ["Yes", "No", "Yes to all", "No to all"];

    /// Map a chosen item index to an answer, remembering the "to all" choices.
    fn apply(&mut self, choice: usize) -> bool {
        match choice {
            0 => true,
            2 => {
                self.answer_for_all = Some(true);
                true
            }
            3 => {
                self.answer_for_all = Some(false);
                false
            }
            _ => false,
        }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&mut self, row: &ReportRow) -> Result<bool> {
        if let Some(answer) = self.answer_for_all {
            return Ok(answer);
        }

        let choice = Select::new()
            .with_prompt(format!(
                "Remove {} from {}?",
                row_license(row),
                row.user_principal_name
            ))
            .items(&Self::CHOICES)
            .default(1)
            .interact()?;

        Ok(self.apply(choice))
    }
}

fn row_license(row: &ReportRow) -> &str {
    if row.license_name.is_empty() {
        &row.sku_part_number
    } else {
        &row.license_name
    }
}

/// Removes one sku per classified row, strictly in sequence.
pub struct RemovalDriver<'a> {
    service: &'a dyn DirectoryService,
    throttle: &'a dyn Throttle,
    delay: Duration,
}

impl<'a> RemovalDriver<'a> {
    pub fn new(service: &'a dyn DirectoryService, throttle: &'a dyn Throttle, delay: Duration) -> Self {
        Self {
            service,
            throttle,
            delay,
        }
    }

    /// Remove the row's sku from every row classified under `path`.
    ///
    /// Rows under any other path are ignored. A declined row is skipped
    /// without waiting; a failed call is recorded and the run moves on. Only a
    /// failing confirmation prompt aborts the run.
    pub async fn run(
        &self,
        rows: &[ReportRow],
        path: RemovablePath,
        confirm: &mut dyn Confirm,
    ) -> Result<Vec<RemovalOutcome>> {
        let wanted = AssignmentPath::from(path);
        let mut outcomes = Vec::new();

        for row in rows.iter().filter(|r| r.path == wanted) {
            if !confirm.confirm(row)? {
                tracing::debug!(user = %row.user_principal_name, sku = %row.sku_part_number, "declined");
                outcomes.push(RemovalOutcome {
                    row: row.clone(),
                    status: RemovalStatus::Skipped,
                });
                continue;
            }

            self.throttle.wait(self.delay).await;

            let remove = [row.sku_id.clone()];
            let status = match self.service.assign_license(&row.user_id, &[], &remove).await {
                Ok(()) => {
                    tracing::info!(
                        user = %row.user_principal_name,
                        license = row_license(row),
                        "removed license"
                    );
                    RemovalStatus::Removed
                }
                Err(e) => {
                    tracing::warn!(
                        user = %row.user_principal_name,
                        license = row_license(row),
                        error = %e,
                        "license removal failed"
                    );
                    RemovalStatus::Failed(e.to_string())
                }
            };

            outcomes.push(RemovalOutcome {
                row: row.clone(),
                status,
            });
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::graph::GraphError;
    use crate::license::classifier::classify;
    use crate::license::classifier::tests::{sku, user};
    use crate::models::{LicenseSku, UserLicenseState};

    /// Records every call; fails removal for user ids listed in `fail_for`.
    #[derive(Default)]
    struct FakeDirectory {
        calls: Mutex<Vec<(String, Vec<String>, Vec<String>)>>,
        fail_for: Vec<String>,
    }

    #[async_trait]
    impl DirectoryService for FakeDirectory {
        async fn list_subscribed_skus(&self) -> Result<Vec<LicenseSku>, GraphError> {
            Ok(Vec::new())
        }

        async fn list_licensed_users(&self, _sku_id: &str) -> Result<Vec<UserLicenseState>, GraphError> {
            Ok(Vec::new())
        }

        async fn assign_license(
            &self,
            user_id: &str,
            add: &[String],
            remove: &[String],
        ) -> Result<(), GraphError> {
            self.calls
                .lock()
                .unwrap()
                .push((user_id.to_string(), add.to_vec(), remove.to_vec()));
            if self.fail_for.iter().any(|id| id == user_id) {
                return Err(GraphError::NotFound(format!("user {}", user_id)));
            }
            Ok(())
        }
    }

    /// Records requested delays instead of sleeping.
    #[derive(Default)]
    struct RecordingThrottle {
        waits: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Throttle for RecordingThrottle {
        async fn wait(&self, delay: Duration) {
            self.waits.lock().unwrap().push(delay);
        }
    }

    /// Answers from a fixed list, in order.
    struct Scripted(Vec<bool>);

    impl Confirm for Scripted {
        fn confirm(&mut self, _row: &ReportRow) -> Result<bool> {
            Ok(self.0.remove(0))
        }
    }

    fn rows() -> Vec<ReportRow> {
        let users = vec![
            user("Ada", &[("E3", None)]),
            user("Bob", &[("E3", None), ("E3", Some("G1"))]),
            user("Cleo", &[("E3", Some("G1"))]),
            user("Dan", &[("E3", None), ("E5", None)]),
        ];
        classify(&users, &[sku("E3", "ENTERPRISEPACK", 4)])
            .into_values()
            .flatten()
            .collect()
    }

    #[tokio::test]
    async fn test_removes_only_target_sku_after_waiting() {
        let service = FakeDirectory::default();
        let throttle = RecordingThrottle::default();
        let driver = RemovalDriver::new(&service, &throttle, Duration::from_secs(2));

        let outcomes = driver
            .run(&rows(), RemovablePath::Directly, &mut AutoConfirm)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.status == RemovalStatus::Removed));

        let calls = service.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                ("id-ada".to_string(), Vec::<String>::new(), vec!["E3".to_string()]),
                ("id-dan".to_string(), Vec::<String>::new(), vec!["E3".to_string()]),
            ]
        );
        assert_eq!(*throttle.waits.lock().unwrap(), vec![Duration::from_secs(2); 2]);
    }

    #[tokio::test]
    async fn test_group_only_rows_are_never_touched() {
        let service = FakeDirectory::default();
        let throttle = RecordingThrottle::default();
        let driver = RemovalDriver::new(&service, &throttle, Duration::ZERO);

        let outcomes = driver
            .run(&rows(), RemovablePath::DirectlyAndGroup, &mut AutoConfirm)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].row.display_name, "Bob");
        let calls = service.calls.lock().unwrap();
        assert!(calls.iter().all(|(id, _, _)| id != "id-cleo"));
    }

    #[tokio::test]
    async fn test_declined_rows_are_skipped_without_waiting() {
        let service = FakeDirectory::default();
        let throttle = RecordingThrottle::default();
        let driver = RemovalDriver::new(&service, &throttle, Duration::from_secs(1));

        let outcomes = driver
            .run(&rows(), RemovablePath::Directly, &mut Scripted(vec![false, true]))
            .await
            .unwrap();

        assert_eq!(outcomes[0].status, RemovalStatus::Skipped);
        assert_eq!(outcomes[1].status, RemovalStatus::Removed);
        assert_eq!(service.calls.lock().unwrap().len(), 1);
        assert_eq!(throttle.waits.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_what_if_never_mutates() {
        let service = FakeDirectory::default();
        let throttle = RecordingThrottle::default();
        let driver = RemovalDriver::new(&service, &throttle, Duration::from_secs(1));

        let outcomes = driver
            .run(&rows(), RemovablePath::Directly, &mut WhatIf)
            .await
            .unwrap();

        assert!(outcomes.iter().all(|o| o.status == RemovalStatus::Skipped));
        assert!(service.calls.lock().unwrap().is_empty());
        assert!(throttle.waits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_later_rows() {
        let service = FakeDirectory {
            fail_for: vec!["id-ada".to_string()],
            ..Default::default()
        };
        let throttle = RecordingThrottle::default();
        let driver = RemovalDriver::new(&service, &throttle, Duration::ZERO);

        let outcomes = driver
            .run(&rows(), RemovablePath::Directly, &mut AutoConfirm)
            .await
            .unwrap();

        assert!(matches!(outcomes[0].status, RemovalStatus::Failed(_)));
        assert_eq!(outcomes[1].status, RemovalStatus::Removed);
        assert_eq!(service.calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_prompt_plain_answers_ask_again() {
        let mut prompt = PromptConfirm::default();
        assert!(prompt.apply(0));
        assert!(!prompt.apply(1));
        assert_eq!(prompt.answer_for_all, None);
    }

    #[test]
    fn test_prompt_yes_to_all_approves_later_rows() {
        let mut prompt = PromptConfirm::default();
        assert!(prompt.apply(2));

        for row in rows() {
            assert!(prompt.confirm(&row).unwrap());
        }
    }

    #[test]
    fn test_prompt_no_to_all_declines_later_rows() {
        let mut prompt = PromptConfirm::default();
        assert!(!prompt.apply(3));

        for row in rows() {
            assert!(!prompt.confirm(&row).unwrap());
        }
    }
}
