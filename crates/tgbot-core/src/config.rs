use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable consulted when the config carries no token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("bot_token is empty. Set it in the config file or the TELEGRAM_BOT_TOKEN env var")]
    MissingToken,
}

/// Top-level tgbot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
}

/// Bot API endpoint and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    /// Base URL, without the `/bot<token>` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TelegramConfig {
    /// Fail early when no token is available.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        if self.bot_token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(&self.bot_token)
    }
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

/// Load config from a TOML file, falling back to defaults when the file
/// does not exist. An empty token is filled from `TELEGRAM_BOT_TOKEN`.
pub fn load(path: &str) -> Result<Config, ConfigError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        tracing::info!("loaded config from {}", path.display());
        config
    } else {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Config::default()
    };

    apply_token_override(&mut config, std::env::var(TOKEN_ENV).ok());
    Ok(config)
}

fn apply_token_override(config: &mut Config, env_token: Option<String>) {
    if !config.telegram.bot_token.is_empty() {
        return;
    }
    if let Some(token) = env_token.filter(|t| !t.is_empty()) {
        config.telegram.bot_token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_section_missing() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.telegram.api_url, "https://api.telegram.org");
        assert_eq!(cfg.telegram.timeout_secs, 30);
        assert!(cfg.telegram.bot_token.is_empty());
    }

    #[test]
    fn test_from_toml() {
        let toml_str = r#"
            [telegram]
            bot_token = "123:abc"
            api_url = "http://localhost:8081"
            timeout_secs = 5
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.telegram.bot_token, "123:abc");
        assert_eq!(cfg.telegram.api_url, "http://localhost:8081");
        assert_eq!(cfg.telegram.timeout_secs, 5);
    }

    #[test]
    fn test_env_token_fills_empty_token() {
        let mut cfg = Config::default();
        apply_token_override(&mut cfg, Some("999:env".into()));
        assert_eq!(cfg.telegram.bot_token, "999:env");
    }

    #[test]
    fn test_env_token_does_not_override_file_token() {
        let mut cfg = Config::default();
        cfg.telegram.bot_token = "1:file".into();
        apply_token_override(&mut cfg, Some("2:env".into()));
        assert_eq!(cfg.telegram.bot_token, "1:file");
    }

    #[test]
    fn test_require_token() {
        let cfg = TelegramConfig::default();
        assert!(matches!(cfg.require_token(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let cfg = load("/nonexistent/__tgbot_test__/config.toml").unwrap();
        assert_eq!(cfg.telegram.timeout_secs, 30);
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = std::env::temp_dir().join("__tgbot_test_bad_config__.toml");
        std::fs::write(&tmp, "telegram = [").unwrap();
        let err = load(tmp.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let _ = std::fs::remove_file(&tmp);
    }
}
