//! Application Config
//!
//! Resolved once at startup from, in order of precedence:
//! a runtime object the hosting page injects (`window.__FRUIT_BASKET_CONFIG__`),
//! build-time `FRUIT_API_URL` / `FRUIT_LOG_LEVEL`, then defaults.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
const RUNTIME_CONFIG_KEY: &str = "__FRUIT_BASKET_CONFIG__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("api url is empty")]
    EmptyApiUrl,
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
    #[error("invalid runtime config: {0}")]
    Runtime(String),
}

/// Values a hosting page may inject before the app loads
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub api_url: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base url, without a trailing slash
    pub api_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Load config from the browser window and build environment.
    ///
    /// Bad values fall back to their defaults. The errors are returned
    /// alongside so they can be logged once logging is up.
    pub fn load() -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let runtime = match read_runtime_config() {
            Ok(runtime) => runtime,
            Err(e) => {
                errors.push(e);
                None
            }
        };
        let build = RuntimeConfig {
            api_url: option_env!("FRUIT_API_URL").map(str::to_string),
            log_level: option_env!("FRUIT_LOG_LEVEL").map(str::to_string),
        };
        let config = Self::resolve(runtime, build, &mut errors);
        (config, errors)
    }

    /// Merge runtime and build-time layers over the defaults
    pub fn resolve(
        runtime: Option<RuntimeConfig>,
        build: RuntimeConfig,
        errors: &mut Vec<ConfigError>,
    ) -> Self {
        let runtime = runtime.unwrap_or_default();
        let mut config = Self::default();

        if let Some(url) = runtime.api_url.or(build.api_url) {
            match normalize_api_url(&url) {
                Ok(url) => config.api_url = url,
                Err(e) => errors.push(e),
            }
        }

        if let Some(level) = runtime.log_level.or(build.log_level) {
            match level.parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => errors.push(ConfigError::UnknownLogLevel(level)),
            }
        }

        config
    }
}

fn normalize_api_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyApiUrl);
    }
    Ok(trimmed.to_string())
}

fn read_runtime_config() -> Result<Option<RuntimeConfig>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY))
        .map_err(|e| ConfigError::Runtime(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ConfigError::Runtime(e.to_string()))
}
