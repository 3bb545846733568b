//! # Frontend configuration: `billdesk.toml`
//!
//! Defines the TOML configuration the web launcher embeds at build time
//! (filename: [`AppConfig::filename`] = `"billdesk.toml"`). It tells the
//! frontend where the billing API lives and how long route guards may wait for
//! the setup-status query before falling back to their default decision.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"
//!
//! [onboarding]
//! status_timeout_ms = 8000   # 0 disables the timeout
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. Builder helpers (`with_base_url`, `with_status_timeout_ms`), TOML (de)serialisation, canonical filename. |
//! | [`ApiConfig`] | Remote API section: `base_url`. |
//! | [`OnboardingConfig`] | Guard section: `status_timeout_ms` with a default of **8 seconds**. |
//!
//! All structs derive or implement `Default`, so a missing or empty config file
//! is equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `billdesk.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub onboarding: OnboardingConfig,
}

/// Remote billing API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Route guard configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    /// Upper bound for the setup-status query, in milliseconds. 0 disables it.
    #[serde(default = "default_status_timeout_ms")]
    pub status_timeout_ms: u64,
}

fn default_status_timeout_ms() -> u64 {
    8_000
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            status_timeout_ms: default_status_timeout_ms(),
        }
    }
}

impl OnboardingConfig {
    pub fn status_timeout(&self) -> Option<Duration> {
        (self.status_timeout_ms > 0).then(|| Duration::from_millis(self.status_timeout_ms))
    }
}

impl AppConfig {
    /// Builder method to point at another API deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the status query timeout.
    pub fn with_status_timeout_ms(mut self, ms: u64) -> Self {
        self.onboarding.status_timeout_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "billdesk.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.onboarding.status_timeout_ms, 8_000);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://billing.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://billing.example.com/api");
        assert_eq!(
            config.onboarding.status_timeout(),
            Some(Duration::from_secs(8))
        );
    }

    #[test]
    fn test_zero_timeout_disables_bound() {
        let config = AppConfig::from_toml("[onboarding]\nstatus_timeout_ms = 0\n").unwrap();
        assert_eq!(config.onboarding.status_timeout(), None);
    }

    #[test]
    fn test_builders_and_toml_output() {
        let config = AppConfig::default()
            .with_base_url("https://api.test")
            .with_status_timeout_ms(250);
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url = \"https://api.test\""));
        assert!(text.contains("status_timeout_ms = 250"));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(AppConfig::from_toml("[api]\nbase_url = 42\n").is_err());
    }
}
