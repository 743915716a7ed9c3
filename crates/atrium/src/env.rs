//! Application environment surface.
//!
//! The app shell reads its deploy-time knobs (API endpoint, timeout,
//! payment key, build identity) from this one typed struct instead of
//! scattering `std::env` reads across screens. Values come from process
//! environment variables or a TOML settings file; the shell loads the
//! environment once at startup and passes it down.
//!
//! | Key                     | Meaning                                   |
//! |-------------------------|-------------------------------------------|
//! | `API_BASE_URL`          | Default API endpoint                      |
//! | `API_BASE_URL_ANDROID`  | Android-specific endpoint override        |
//! | `API_BASE_URL_IOS`      | iOS-specific endpoint override            |
//! | `API_TIMEOUT`           | Request timeout in milliseconds           |
//! | `APP_NAME`              | Display name of the build                 |
//! | `APP_VERSION`           | Version string of the build               |
//! | `STRIPE_PUBLISHABLE_KEY`| Publishable key for the payment provider  |
//!
//! This module only *exposes* the surface. Nothing here performs network
//! calls or payment processing.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading the environment.
#[derive(Error, Debug)]
pub enum EnvError {
    /// `API_TIMEOUT` was present but not a non-negative integer.
    #[error("API_TIMEOUT must be an integer millisecond count, got {value:?}")]
    InvalidTimeout { value: String },

    /// The settings file failed to parse.
    #[error("failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),
}

/// Result type for environment loading.
pub type EnvResult<T> = Result<T, EnvError>;

/// Mobile platform the app shell is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    /// Web preview, desktop harness, tests.
    Other,
}

/// Deploy-time configuration consumed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppEnvironment {
    /// Default API endpoint.
    pub api_base_url: String,
    /// Android-specific endpoint override (emulators cannot reach
    /// `localhost` of the host machine).
    pub api_base_url_android: Option<String>,
    /// iOS-specific endpoint override.
    pub api_base_url_ios: Option<String>,
    /// Request timeout in milliseconds.
    pub api_timeout_ms: u64,
    /// Display name of the build.
    pub app_name: String,
    /// Version string of the build.
    pub app_version: String,
    /// Publishable key for the payment provider; absent in builds
    /// without payments enabled.
    pub stripe_publishable_key: Option<String>,
}

impl Default for AppEnvironment {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            api_base_url_android: None,
            api_base_url_ios: None,
            api_timeout_ms: 30_000,
            app_name: "Atrium".to_string(),
            app_version: "1.0.0".to_string(),
            stripe_publishable_key: None,
        }
    }
}

impl AppEnvironment {
    /// Load from the process environment. Missing keys keep their
    /// defaults; see the module table for the recognized keys.
    pub fn from_env() -> EnvResult<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load from an explicit key/value sequence.
    ///
    /// This is what [`from_env`](Self::from_env) delegates to; tests feed
    /// it directly instead of mutating process state.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> EnvResult<Self> {
        let mut env = Self::default();
        for (key, value) in vars {
            match key.as_str() {
                "API_BASE_URL" => env.api_base_url = value,
                "API_BASE_URL_ANDROID" => env.api_base_url_android = Some(value),
                "API_BASE_URL_IOS" => env.api_base_url_ios = Some(value),
                "API_TIMEOUT" => {
                    env.api_timeout_ms = value
                        .parse()
                        .map_err(|_| EnvError::InvalidTimeout { value })?;
                }
                "APP_NAME" => env.app_name = value,
                "APP_VERSION" => env.app_version = value,
                "STRIPE_PUBLISHABLE_KEY" => env.stripe_publishable_key = Some(value),
                _ => {}
            }
        }
        debug!(app = %env.app_name, version = %env.app_version, "environment loaded");
        Ok(env)
    }

    /// Load from TOML settings text.
    pub fn from_toml_str(text: &str) -> EnvResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The API endpoint for a platform, honoring per-platform overrides.
    pub fn api_base_url_for(&self, platform: Platform) -> &str {
        let overridden = match platform {
            Platform::Android => self.api_base_url_android.as_deref(),
            Platform::Ios => self.api_base_url_ios.as_deref(),
            Platform::Other => None,
        };
        overridden.unwrap_or(&self.api_base_url)
    }

    /// Whether this build has the payment provider configured.
    pub fn payments_configured(&self) -> bool {
        self.stripe_publishable_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let env = AppEnvironment::from_vars(vars(&[])).unwrap();
        assert_eq!(env, AppEnvironment::default());
        assert_eq!(env.api_timeout_ms, 30_000);
        assert!(!env.payments_configured());
    }

    #[test]
    fn test_from_vars_reads_known_keys() {
        let env = AppEnvironment::from_vars(vars(&[
            ("API_BASE_URL", "https://api.example.com"),
            ("API_TIMEOUT", "5000"),
            ("APP_NAME", "Atrium Beta"),
            ("STRIPE_PUBLISHABLE_KEY", "pk_test_123"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(env.api_base_url, "https://api.example.com");
        assert_eq!(env.api_timeout_ms, 5000);
        assert_eq!(env.app_name, "Atrium Beta");
        assert!(env.payments_configured());
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let err = AppEnvironment::from_vars(vars(&[("API_TIMEOUT", "soon")])).unwrap_err();
        assert!(matches!(err, EnvError::InvalidTimeout { ref value } if value == "soon"));
    }

    #[test]
    fn test_platform_override_resolution() {
        let env = AppEnvironment::from_vars(vars(&[
            ("API_BASE_URL", "http://localhost:3000"),
            ("API_BASE_URL_ANDROID", "http://10.0.2.2:3000"),
        ]))
        .unwrap();

        assert_eq!(
            env.api_base_url_for(Platform::Android),
            "http://10.0.2.2:3000"
        );
        assert_eq!(env.api_base_url_for(Platform::Ios), "http://localhost:3000");
        assert_eq!(
            env.api_base_url_for(Platform::Other),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_from_toml_str() {
        let env = AppEnvironment::from_toml_str(
            r#"
            api_base_url = "https://api.example.com"
            api_timeout_ms = 10000
            app_version = "2.4.0"
            "#,
        )
        .unwrap();

        assert_eq!(env.api_base_url, "https://api.example.com");
        assert_eq!(env.api_timeout_ms, 10_000);
        assert_eq!(env.app_version, "2.4.0");
        // Unset keys keep defaults.
        assert_eq!(env.app_name, "Atrium");
    }

    #[test]
    fn test_from_toml_str_rejects_bad_settings() {
        assert!(AppEnvironment::from_toml_str("api_timeout_ms = \"soon\"").is_err());
    }
}
