use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default Gemini model for short text generations.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Gemini REST API base URL.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default upper bound for a single outbound generation call.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct WellnessConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Clone)]
pub struct GoogleConfig {
    /// `None` when `GEMINI_API_KEY` is unset or empty. The service still
    /// starts; every generation then falls back.
    pub api_key: Option<String>,
    pub api_base: String,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model used for all three categories (e.g., gemini-2.5-flash)
    pub text_model: String,
}

impl WellnessConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(WellnessConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: get_optional_env("GEMINI_API_KEY"),
                api_base: get_env("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                request_timeout_secs: parse_or_default(
                    get_optional_env("GENAI_REQUEST_TIMEOUT_SECS").as_deref(),
                    DEFAULT_REQUEST_TIMEOUT_SECS,
                ),
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            },
        })
    }

    /// Configuration for tests and embedding: no credential, default model,
    /// random port.
    pub fn for_port(port: u16) -> Self {
        WellnessConfig {
            common: core_config::Config { port },
            google: GoogleConfig {
                api_key: None,
                api_base: DEFAULT_GEMINI_API_BASE.to_string(),
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            models: ModelConfig {
                text_model: DEFAULT_TEXT_MODEL.to_string(),
            },
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

fn get_optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or_default(raw: Option<&str>, default: u64) -> u64 {
    match raw {
        Some(value) => match value.parse::<u64>() {
            Ok(parsed) if parsed > 0 => parsed,
            _ => {
                tracing::warn!(value = %value, default, "Invalid timeout value, using default");
                default
            }
        },
        None => default,
    }
}
