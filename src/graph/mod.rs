//! Directory service access.
//!
//! - [`DirectoryService`] — the query and mutation calls the rest of the tool depends on.
//! - [`client`] — [`GraphClient`](client::GraphClient), the reqwest-backed implementation.
//! - [`auth`] — client-credentials token acquisition.
//! - [`types`] — wire payloads and their conversion into [`crate::models`].

pub mod auth;
pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::models::{LicenseSku, UserLicenseState};

/// Errors surfaced by the directory service boundary.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("rate limited by the directory service (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("directory service returned {status}: {message}")]
    Service { status: u16, message: String },
}

/// Query and mutation surface of the directory service.
///
/// Every call is a fresh read of remote state; nothing is cached between calls.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Subscribed license inventory of the tenant.
    async fn list_subscribed_skus(&self) -> Result<Vec<LicenseSku>, GraphError>;

    /// Every user that has `sku_id` in their assigned licenses, across all pages.
    async fn list_licensed_users(&self, sku_id: &str) -> Result<Vec<UserLicenseState>, GraphError>;

    /// Add and remove licenses on one user in a single call.
    async fn assign_license(
        &self,
        user_id: &str,
        add: &[String],
        remove: &[String],
    ) -> Result<(), GraphError>;
}
