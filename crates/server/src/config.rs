//! Server configuration

const DEFAULT_RATE_LIMIT_RPS: u32 = 100;
const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    /// PostgreSQL profile store; in-memory sessions when unset
    pub database_url: Option<String>,
    /// Idle lifetime of in-memory sessions
    pub session_ttl_secs: u64,
    pub api_key: Option<String>,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub anthropic_max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            database_url: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            api_key: None,
            cors_origins: vec!["*".to_string()],
            rate_limit_rps: DEFAULT_RATE_LIMIT_RPS,
            anthropic_api_key: None,
            anthropic_model: DEFAULT_MODEL.to_string(),
            anthropic_max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            bind_address: get("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            database_url: get("DATABASE_URL"),
            session_ttl_secs: get("SESSION_TTL_SECS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_SESSION_TTL_SECS),
            api_key: get("API_KEY"),
            cors_origins: get("CORS_ORIGINS")
                .map(|v| parse_list(&v))
                .unwrap_or(defaults.cors_origins),
            rate_limit_rps: get("RATE_LIMIT_RPS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|rps| *rps > 0)
                .unwrap_or(DEFAULT_RATE_LIMIT_RPS),
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            anthropic_model: get("ANTHROPIC_MODEL").unwrap_or(defaults.anthropic_model),
            anthropic_max_tokens: get("ANTHROPIC_MAX_TOKENS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_TOKENS),
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = config_from(&[]);
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert!(config.database_url.is_none());
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.cors_origins, vec!["*"]);
        assert_eq!(config.rate_limit_rps, DEFAULT_RATE_LIMIT_RPS);
        assert_eq!(config.anthropic_max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.session_ttl_secs, DEFAULT_SESSION_TTL_SECS);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("RATE_LIMIT_RPS", "5"),
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_MODEL", "claude-haiku"),
            ("SESSION_TTL_SECS", "600"),
        ]);
        assert_eq!(config.session_ttl_secs, 600);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.rate_limit_rps, 5);
        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.anthropic_model, "claude-haiku");
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = config_from(&[("RATE_LIMIT_RPS", "0"), ("ANTHROPIC_MAX_TOKENS", "lots")]);
        assert_eq!(config.rate_limit_rps, DEFAULT_RATE_LIMIT_RPS);
        assert_eq!(config.anthropic_max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("API_KEY", "  "), ("DATABASE_URL", "")]);
        assert!(config.api_key.is_none());
        assert!(config.database_url.is_none());
    }
}
