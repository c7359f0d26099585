use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-assignr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory service endpoint and credentials.
    #[serde(default)]
    pub graph: GraphConfig,
    /// Defaults for the `remove` command.
    #[serde(default)]
    pub removal: RemovalConfig,
}

#[derive(Debug, Deserialize)]
pub struct GraphConfig {
    /// API root, e.g. `https://graph.microsoft.com/v1.0`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Token authority, e.g. `https://login.microsoftonline.com`.
    #[serde(default = "default_authority")]
    pub authority: String,
    /// OAuth scope requested with client credentials.
    #[serde(default = "default_scope")]
    pub scope: String,
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Pre-acquired bearer token; takes precedence over client credentials.
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// `$top` page size for user listings.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct RemovalConfig {
    /// Seconds to wait before each removal call.
    #[serde(default = "default_throttle_delay")]
    pub throttle_delay_seconds: u64,
}

fn default_base_url() -> String {
    "https://graph.microsoft.com/v1.0".to_string()
}

fn default_authority() -> String {
    "https://login.microsoftonline.com".to_string()
}

fn default_scope() -> String {
    "https://graph.microsoft.com/.default".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    999
}

fn default_throttle_delay() -> u64 {
    1
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            base_url: default_base_url(),
            authority: default_authority(),
            scope: default_scope(),
            tenant_id: None,
            client_id: None,
            client_secret: None,
            access_token: None,
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl Default for RemovalConfig {
    fn default() -> Self {
        RemovalConfig {
            throttle_delay_seconds: default_throttle_delay(),
        }
    }
}

/// How the client authenticates against the directory service.
#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    Token(String),
    ClientSecret {
        tenant_id: String,
        client_id: String,
        client_secret: String,
    },
}

impl GraphConfig {
    /// Pick credentials: an explicit access token wins, otherwise all three
    /// client-credential fields must be present.
    pub fn credentials(&self) -> Result<Credentials> {
        if let Some(token) = self.access_token.as_ref().filter(|t| !t.is_empty()) {
            return Ok(Credentials::Token(token.clone()));
        }

        match (&self.tenant_id, &self.client_id, &self.client_secret) {
            (Some(tenant_id), Some(client_id), Some(client_secret)) => Ok(Credentials::ClientSecret {
                tenant_id: tenant_id.clone(),
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            }),
            _ => bail!(
                "no directory credentials configured: set GRAPH_ACCESS_TOKEN, or tenant_id, client_id and client_secret under [graph]"
            ),
        }
    }
}

/// Load configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<working_dir>/.license-assignr/config.toml`
/// 3. `~/.config/license-assignr/config.toml`
/// 4. Built-in [`Config::default`]
///
/// Environment variables are applied on top of whichever file is found.
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    let mut config = read_config_file(working_dir, config_override)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = working_dir.join(".license-assignr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-assignr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

/// Overlay `GRAPH_*` environment variables onto the loaded config.
fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let graph = &mut config.graph;
    let fields: [(&str, &mut Option<String>); 4] = [
        ("GRAPH_ACCESS_TOKEN", &mut graph.access_token),
        ("GRAPH_TENANT_ID", &mut graph.tenant_id),
        ("GRAPH_CLIENT_ID", &mut graph.client_id),
        ("GRAPH_CLIENT_SECRET", &mut graph.client_secret),
    ];
    for (key, field) in fields {
        if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
            *field = Some(value);
        }
    }

    if let Some(url) = lookup("GRAPH_BASE_URL").filter(|v| !v.is_empty()) {
        graph.base_url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.graph.base_url, "https://graph.microsoft.com/v1.0");
        assert_eq!(cfg.graph.page_size, 999);
        assert_eq!(cfg.removal.throttle_delay_seconds, 1);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[graph]
tenant_id = "contoso"

[removal]
throttle_delay_seconds = 5
"#,
        )
        .unwrap();
        assert_eq!(cfg.graph.tenant_id.as_deref(), Some("contoso"));
        assert_eq!(cfg.graph.authority, "https://login.microsoftonline.com");
        assert_eq!(cfg.removal.throttle_delay_seconds, 5);
    }

    #[test]
    fn test_project_config_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join(".license-assignr");
        std::fs::create_dir_all(&cfg_dir).unwrap();
        std::fs::write(
            cfg_dir.join("config.toml"),
            "[graph]\nbase_url = \"http://localhost:9000\"\n",
        )
        .unwrap();

        let cfg = read_config_file(dir.path(), None).unwrap();
        assert_eq!(cfg.graph.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_override_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[removal]\nthrottle_delay_seconds = 0\n").unwrap();

        let cfg = read_config_file(dir.path(), Some(&path)).unwrap();
        assert_eq!(cfg.removal.throttle_delay_seconds, 0);
    }

    #[test]
    fn test_env_overrides() {
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg, |key| match key {
            "GRAPH_ACCESS_TOKEN" => Some("tok".to_string()),
            "GRAPH_TENANT_ID" => Some(String::new()),
            _ => None,
        });
        assert_eq!(cfg.graph.access_token.as_deref(), Some("tok"));
        assert_eq!(cfg.graph.tenant_id, None);
    }

    #[test]
    fn test_credentials() {
        let mut graph = GraphConfig::default();
        assert!(graph.credentials().is_err());

        graph.tenant_id = Some("t".into());
        graph.client_id = Some("c".into());
        graph.client_secret = Some("s".into());
        assert!(matches!(graph.credentials().unwrap(), Credentials::ClientSecret { .. }));

        graph.access_token = Some("tok".into());
        assert_eq!(graph.credentials().unwrap(), Credentials::Token("tok".into()));
    }
}
