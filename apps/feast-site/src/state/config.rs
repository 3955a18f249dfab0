//! # Configuration State
//!
//! Stores site configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FEAST_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Business name (navbar, footer, contact page)
    pub business_name: String,

    /// Phone number shown on the contact page and footer
    pub contact_phone: String,

    /// Email shown on the contact page and footer
    pub contact_email: String,

    /// Build mode. Only decides how chatty logging is.
    pub build_mode: BuildMode,
}

/// Which kind of build is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Diagnostic logging on
    Development,

    /// Warnings and errors only
    Production,
}

impl BuildMode {
    /// Mode of the compiled binary: debug builds are development builds.
    pub const fn compiled() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(BuildMode::Development),
            "production" | "prod" => Some(BuildMode::Production),
            _ => None,
        }
    }

    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub const fn default_log_filter(self) -> &'static str {
        match self {
            BuildMode::Development => "info,feast_site=debug,feast_core=debug",
            BuildMode::Production => "warn",
        }
    }
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            business_name: "Festive Feast Catering".to_string(),
            contact_phone: "+91 98765 43210".to_string(),
            contact_email: "hello@festivefeast.in".to_string(),
            build_mode: BuildMode::compiled(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FEAST_BUSINESS_NAME`: Override business name
    /// - `FEAST_CONTACT_PHONE`: Override contact phone
    /// - `FEAST_CONTACT_EMAIL`: Override contact email
    /// - `FEAST_MODE`: `development` or `production`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("FEAST_BUSINESS_NAME") {
            config.business_name = name;
        }

        if let Some(phone) = lookup("FEAST_CONTACT_PHONE") {
            config.contact_phone = phone;
        }

        if let Some(email) = lookup("FEAST_CONTACT_EMAIL") {
            config.contact_email = email;
        }

        if let Some(mode) = lookup("FEAST_MODE").as_deref().and_then(BuildMode::parse) {
            config.build_mode = mode;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_follow_compiled_mode() {
        let config = ConfigState::default();
        assert_eq!(config.build_mode, BuildMode::compiled());
        assert!(!config.business_name.is_empty());
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FEAST_BUSINESS_NAME", "Amma's Kitchen"),
            ("FEAST_CONTACT_EMAIL", "amma@example.com"),
            ("FEAST_MODE", "Production"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.business_name, "Amma's Kitchen");
        assert_eq!(config.contact_email, "amma@example.com");
        assert_eq!(config.contact_phone, ConfigState::default().contact_phone);
        assert_eq!(config.build_mode, BuildMode::Production);
    }

    #[test]
    fn test_unknown_mode_keeps_default() {
        let config = ConfigState::from_lookup(|key| {
            (key == "FEAST_MODE").then(|| "staging".to_string())
        });
        assert_eq!(config.build_mode, BuildMode::compiled());
    }

    #[test]
    fn test_log_filter_by_mode() {
        assert_eq!(BuildMode::Production.default_log_filter(), "warn");
        assert!(BuildMode::Development
            .default_log_filter()
            .contains("feast_site=debug"));
    }
}
