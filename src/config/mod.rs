mod types;

pub use types::*;

use std::env;
use tracing::debug;

/// Builds the configuration from the process environment. Every value has a
/// default; a malformed numeric variable falls back to its default instead
/// of aborting startup.
pub fn load() -> Config {
    let config = Config {
        llm: LlmConfig {
            base_url: env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| default_base_url()),
            api_key: env::var("OPENROUTER_API_KEY").unwrap_or_default(),
            model: env::var("MODEL").unwrap_or_else(|_| default_model()),
            timeout_secs: env_parsed("UPSTREAM_TIMEOUT_SECS", default_timeout_secs()),
        },
        server: ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port: env_parsed("PORT", default_port()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir()),
            logs: LogsConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
            },
        },
    };

    debug!(
        "Configuration loaded: base_url={}, model={}",
        config.llm.base_url, config.llm.model
    );

    config
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config: Config = serde_json::from_str(r#"{"llm": {}, "server": {}}"#).unwrap();

        assert_eq!(config.llm.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.llm.api_key, "");
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "static");
        assert_eq!(config.server.logs.level, "info");
    }

    #[test]
    fn env_parsed_falls_back_on_garbage() {
        // Variable unset
        assert_eq!(env_parsed::<u16>("AI_TUTOR_TEST_UNSET_VAR", 42), 42);
    }
}
