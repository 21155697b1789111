use std::{sync::Arc, time::Duration};

use clap::Parser;

use crate::{
    upstream::{ChatClient, DEFAULT_GATEWAY_URL, DEFAULT_MODEL},
    AppState,
};

/// Service settings, read from flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Bearer token for the AI gateway.
    #[arg(long, env = "AI_GATEWAY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Older name of the gateway token, used when `api_key` is unset.
    #[arg(long, env = "LOVABLE_API_KEY", hide = true, hide_env_values = true)]
    pub lovable_api_key: Option<String>,

    #[arg(long, env = "AI_GATEWAY_URL", default_value = DEFAULT_GATEWAY_URL)]
    pub gateway_url: String,

    #[arg(long, env = "AI_GATEWAY_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Upstream request timeout; the transport default applies when unset.
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().or(self.lovable_api_key.as_deref())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some_and(|key| !key.trim().is_empty())
    }

    pub fn into_state(self) -> Result<Arc<AppState>, reqwest::Error> {
        let api_key = self.api_key().unwrap_or_default().to_string();
        let chat = ChatClient::new(
            self.gateway_url,
            api_key,
            self.model,
            self.timeout_ms.map(Duration::from_millis),
        )?;
        Ok(Arc::new(AppState { chat }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::parse_from([
            "study-proxy",
            "--port",
            "8080",
            "--api-key",
            "secret",
            "--timeout-ms",
            "1500",
        ]);
        assert_eq!(config.port, 8080);
        assert!(config.has_api_key());
        assert_eq!(config.timeout_ms, Some(1500));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = AppConfig::parse_from(["study-proxy", "--api-key", " "]);
        assert!(!config.has_api_key());
    }

    #[test]
    fn legacy_key_is_a_fallback() {
        let config = AppConfig::parse_from(["study-proxy", "--lovable-api-key", "legacy"]);
        assert!(config.has_api_key());

        let config = AppConfig::parse_from([
            "study-proxy",
            "--api-key",
            "primary",
            "--lovable-api-key",
            "legacy",
        ]);
        assert_eq!(config.api_key(), Some("primary"));
    }

    #[test]
    fn state_uses_configured_model() {
        let config = AppConfig::parse_from(["study-proxy", "--api-key", "k", "--model", "m-1"]);
        let state = config.into_state().unwrap();
        assert_eq!(state.chat.model(), "m-1");
    }
}
