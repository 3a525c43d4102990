use crate::error::AppError;
use std::env;

/// Default listen port matching the original deployment.
const DEFAULT_PORT: &str = "5000";

/// Default Wikipedia request timeout in seconds.
const DEFAULT_WIKI_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct HeritageConfig {
    pub server: ServerConfig,
    pub groq: GroqSettings,
    pub wiki: WikiConfig,
    /// Map-provider credential passed through to detail pages. Not used by
    /// any core logic, so it stays optional.
    pub maps_api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub debug: bool,
}

#[derive(Debug, Clone)]
pub struct GroqSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct WikiConfig {
    pub api_base: String,
    pub timeout_secs: u64,
}

impl HeritageConfig {
    /// Load configuration from the environment, once at startup.
    ///
    /// `GROQ_API_KEY` has no default: startup fails without it.
    pub fn load() -> Result<Self, AppError> {
        Ok(HeritageConfig {
            server: ServerConfig {
                port: get_env("PORT", Some(DEFAULT_PORT))?.parse().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("PORT is not a valid port number: {}", e))
                })?,
                debug: env::var("APP_DEBUG")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
            },
            groq: GroqSettings {
                api_key: get_env("GROQ_API_KEY", None)?,
                model: get_env("GROQ_MODEL", Some("llama-3.1-8b-instant"))?,
                api_base: get_env("GROQ_API_BASE", Some("https://api.groq.com/openai/v1"))?,
            },
            wiki: WikiConfig {
                api_base: get_env("WIKI_API_BASE", Some("https://en.wikipedia.org"))?,
                timeout_secs: get_env(
                    "WIKI_TIMEOUT_SECS",
                    Some(&DEFAULT_WIKI_TIMEOUT_SECS.to_string()),
                )?
                .parse()
                .map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "WIKI_TIMEOUT_SECS is not a valid number of seconds: {}",
                        e
                    ))
                })?,
            },
            maps_api_key: env::var("GOOGLE_MAPS_API_KEY").ok(),
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
