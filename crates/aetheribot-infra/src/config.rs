//! Global configuration loader for AetheriBot.
//!
//! Reads `config.toml` from the data directory (`~/.aetheribot/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed, then applies environment overrides.

use std::path::Path;

use aetheribot_types::config::GlobalConfig;

/// Overrides `github.api_base_url`.
pub const ENV_GITHUB_API_URL: &str = "AETHERIBOT_GITHUB_API_URL";

/// Overrides `server.web_dir`.
pub const ENV_WEB_DIR: &str = "AETHERIBOT_WEB_DIR";

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
///
/// Environment overrides are applied in every case.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config = read_config_file(data_dir).await;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

async fn read_config_file(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Apply `AETHERIBOT_*` overrides on top of a loaded config.
///
/// `lookup` resolves an environment variable name; empty values are ignored.
pub fn apply_env_overrides<F>(mut config: GlobalConfig, lookup: F) -> GlobalConfig
where
    F: Fn(&str) -> Option<String>,
{
    let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = value(ENV_GITHUB_API_URL) {
        tracing::debug!(url = %url, "GitHub API base URL overridden from environment");
        config.github.api_base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(dir) = value(ENV_WEB_DIR) {
        config.server.web_dir = Some(dir);
    }
    config
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[tokio::test]
    async fn read_config_file_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_file(tmp.path()).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.github.api_base_url, "https://api.github.com");
        assert_eq!(config.github.token_env, "GITHUB_API_KEY");
    }

    #[tokio::test]
    async fn read_config_file_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[server]
port = 8080
web_dir = "web/dist"

[github]
token_env = "MY_GH_TOKEN"
request_timeout_secs = 30
"#,
        )
        .await
        .unwrap();

        let config = read_config_file(tmp.path()).await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.web_dir.as_deref(), Some("web/dist"));
        assert_eq!(config.github.token_env, "MY_GH_TOKEN");
        assert_eq!(config.github.request_timeout_secs, Some(30));
    }

    #[tokio::test]
    async fn read_config_file_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = read_config_file(tmp.path()).await;
        assert_eq!(config.server.port, 3000);
        assert!(config.github.request_timeout_secs.is_none());
    }

    #[test]
    fn env_overrides_replace_api_url_and_web_dir() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_GITHUB_API_URL, "http://127.0.0.1:9999/"),
            (ENV_WEB_DIR, "/srv/aetheribot"),
        ]);

        let config = apply_env_overrides(GlobalConfig::default(), |key| {
            env.get(key).map(|v| v.to_string())
        });

        assert_eq!(config.github.api_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.server.web_dir.as_deref(), Some("/srv/aetheribot"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config = apply_env_overrides(GlobalConfig::default(), |_| Some("  ".to_string()));
        assert_eq!(config.github.api_base_url, "https://api.github.com");
        assert!(config.server.web_dir.is_none());
    }

    #[test]
    fn no_overrides_leave_config_untouched() {
        let config = apply_env_overrides(GlobalConfig::default(), no_env);
        assert_eq!(config.server.port, 3000);
        assert!(config.server.web_dir.is_none());
    }
}
