use reqwest::Client;
use serde::Deserialize;

use super::GraphError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Acquire an app-only access token with the OAuth client-credentials grant.
pub async fn acquire_token(
    client: &Client,
    authority: &str,
    tenant_id: &str,
    client_id: &str,
    client_secret: &str,
    scope: &str,
) -> Result<String, GraphError> {
    let url = format!(
        "{}/{}/oauth2/v2.0/token",
        authority.trim_end_matches('/'),
        tenant_id
    );

    let response = client
        .post(&url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("scope", scope),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, %body, "token request rejected");
        return Err(GraphError::Unauthorized(format!(
            "token request for tenant {} failed with {}",
            tenant_id, status
        )));
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_acquire_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contoso/oauth2/v2.0/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token_type": "Bearer",
                "expires_in": 3599,
                "access_token": "abc123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = acquire_token(&Client::new(), &server.uri(), "contoso", "app", "secret", "s/.default")
            .await
            .unwrap();
        assert_eq!(token, "abc123");
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
            .mount(&server)
            .await;

        let err = acquire_token(&Client::new(), &server.uri(), "contoso", "app", "bad", "s")
            .await
            .unwrap_err();
        assert!(matches!(err, GraphError::Unauthorized(_)));
    }
}
