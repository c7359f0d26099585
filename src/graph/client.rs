use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::auth::acquire_token;
use super::types::{AssignLicenseBody, ErrorEnvelope, GraphUser, Page, SubscribedSku, USER_SELECT};
use super::{DirectoryService, GraphError};
use crate::config::{Credentials, GraphConfig};
use crate::models::{LicenseSku, UserLicenseState};

/// HTTP client for the directory service REST API.
pub struct GraphClient {
    client: Client,
    base_url: String,
    token: String,
    page_size: u32,
}

impl GraphClient {
    /// Build a client from config, acquiring a token when only client credentials are set.
    pub async fn connect(config: &GraphConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("license-assignr/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let token = match config.credentials()? {
            Credentials::Token(token) => token,
            Credentials::ClientSecret {
                tenant_id,
                client_id,
                client_secret,
            } => {
                tracing::debug!(tenant = %tenant_id, "acquiring app-only token");
                acquire_token(
                    &client,
                    &config.authority,
                    &tenant_id,
                    &client_id,
                    &client_secret,
                    &config.scope,
                )
                .await?
            }
        };

        Ok(Self::with_client(client, &config.base_url, token, config.page_size))
    }

    pub fn with_client(client: Client, base_url: &str, token: String, page_size: u32) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            page_size,
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }

    /// Fetch a collection, following `@odata.nextLink` until the last page.
    async fn get_all<T: DeserializeOwned>(&self, first: RequestBuilder) -> Result<Vec<T>, GraphError> {
        let mut items = Vec::new();
        let mut page: Page<T> = check(first.send().await?).await?.json().await?;
        items.append(&mut page.value);

        while let Some(next) = page.next_link.take() {
            tracing::debug!(url = %next, "following next page");
            let response = self
                .request(Method::GET, &next)
                .header("ConsistencyLevel", "eventual")
                .send()
                .await?;
            page = check(response).await?.json().await?;
            items.append(&mut page.value);
        }

        Ok(items)
    }
}

#[async_trait]
impl DirectoryService for GraphClient {
    async fn list_subscribed_skus(&self) -> Result<Vec<LicenseSku>, GraphError> {
        let url = format!("{}/subscribedSkus", self.base_url);
        let skus: Vec<SubscribedSku> = self.get_all(self.request(Method::GET, &url)).await?;
        Ok(skus.into_iter().map(Into::into).collect())
    }

    async fn list_licensed_users(&self, sku_id: &str) -> Result<Vec<UserLicenseState>, GraphError> {
        let url = format!("{}/users", self.base_url);
        let filter = format!("assignedLicenses/any(x:x/skuId eq {})", sku_id);
        let top = self.page_size.to_string();

        let first = self
            .request(Method::GET, &url)
            .header("ConsistencyLevel", "eventual")
            .query(&[
                ("$filter", filter.as_str()),
                ("$select", USER_SELECT),
                ("$top", top.as_str()),
                ("$count", "true"),
            ]);

        let users: Vec<GraphUser> = self.get_all(first).await?;
        tracing::debug!(sku = sku_id, count = users.len(), "fetched licensed users");
        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn assign_license(
        &self,
        user_id: &str,
        add: &[String],
        remove: &[String],
    ) -> Result<(), GraphError> {
        let url = format!("{}/users/{}/assignLicense", self.base_url, user_id);
        let response = self
            .request(Method::POST, &url)
            .json(&AssignLicenseBody::new(add, remove))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Map a non-success response onto [`GraphError`].
async fn check(response: Response) -> Result<Response, GraphError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get("Retry-After")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok());
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) if !envelope.error.code.is_empty() => {
            format!("{}: {}", envelope.error.code, envelope.error.message)
        }
        Ok(envelope) => envelope.error.message,
        Err(_) => body,
    };

    Err(match status {
        StatusCode::NOT_FOUND => GraphError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => GraphError::RateLimited { retry_after },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GraphError::Unauthorized(message),
        _ => GraphError::Service {
            status: status.as_u16(),
            message,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GraphClient {
        GraphClient::with_client(Client::new(), &server.uri(), "test-token".into(), 2)
    }

    #[tokio::test]
    async fn test_list_subscribed_skus() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/subscribedSkus"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [
                    {"skuId": "s1", "skuPartNumber": "SPE_E3", "consumedUnits": 3,
                     "prepaidUnits": {"enabled": 10}},
                    {"skuId": "s2", "skuPartNumber": "CONTOSO_CUSTOM", "consumedUnits": 0,
                     "prepaidUnits": {"enabled": 5}}
                ]
            })))
            .mount(&server)
            .await;

        let skus = client_for(&server).list_subscribed_skus().await.unwrap();
        assert_eq!(skus.len(), 2);
        assert_eq!(skus[0].friendly_name, "Microsoft 365 E3");
        assert_eq!(skus[1].friendly_name, "");
    }

    #[tokio::test]
    async fn test_list_licensed_users_follows_next_link() {
        let server = MockServer::start().await;
        let next = format!("{}/users?$skiptoken=page2", server.uri());

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("$skiptoken", "page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"id": "u3", "displayName": "Cleo", "assignedLicenses": [{"skuId": "s1"}]}]
            })))
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("$filter", "assignedLicenses/any(x:x/skuId eq s1)"))
            .and(query_param("$top", "2"))
            .and(header("ConsistencyLevel", "eventual"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [
                    {"id": "u1", "displayName": "Ada", "assignedLicenses": [{"skuId": "s1"}]},
                    {"id": "u2", "displayName": "Bob", "assignedLicenses": [{"skuId": "s1"}]}
                ],
                "@odata.nextLink": next
            })))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server).list_licensed_users("s1").await.unwrap();
        let ids: Vec<_> = users.iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2", "u3"]);
    }

    #[tokio::test]
    async fn test_assign_license_sends_remove_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/u1/assignLicense"))
            .and(body_json(serde_json::json!({"addLicenses": [], "removeLicenses": ["s1"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "u1"})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .assign_license("u1", &[], &["s1".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/missing/assignLicense"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": "Request_ResourceNotFound", "message": "Resource 'missing' does not exist"}
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users/busy/assignLicense"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let remove = vec!["s1".to_string()];

        match client.assign_license("missing", &[], &remove).await {
            Err(GraphError::NotFound(msg)) => assert!(msg.starts_with("Request_ResourceNotFound")),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            client.assign_license("busy", &[], &remove).await,
            Err(GraphError::RateLimited { retry_after: Some(7) })
        ));
    }

    #[tokio::test]
    async fn test_query_failure_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/subscribedSkus"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_subscribed_skus().await.unwrap_err();
        assert!(matches!(err, GraphError::Service { status: 503, .. }));
    }
}
