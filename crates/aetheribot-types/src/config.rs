//! Global configuration types for AetheriBot.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! HTTP listener and the GitHub upstream.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.aetheribot/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub github: GitHubConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built chat UI. Served as the router fallback
    /// when it exists.
    #[serde(default)]
    pub web_dir: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: None,
        }
    }
}

/// GitHub upstream settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the REST API (no trailing slash).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Name of the environment variable holding the access token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-call timeout. Absent means outbound calls never time out.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_token_env() -> String {
    "GITHUB_API_KEY".to_string()
}

fn default_user_agent() -> String {
    concat!("aetheribot/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            token_env: default_token_env(),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}
