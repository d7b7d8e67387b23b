//! Client configuration, read from the environment.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing::info;

use storefront_products::{DigitGrouping, PriceFormat};

use crate::session::{AdminGate, BearerGate, StaticCodeGate};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_ADMIN_CODE: &str = "9999";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// How admin entry is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Compare against `admin_code` on the client.
    #[default]
    Static,
    /// Treat the entered code as a bearer token for the backend.
    Bearer,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "bearer" => Ok(Self::Bearer),
            other => Err(format!("expected one of: static, bearer (got {other:?})")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub admin_code: String,
    pub auth_mode: AuthMode,
    pub price_format: PriceFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            admin_code: DEFAULT_ADMIN_CODE.to_string(),
            auth_mode: AuthMode::Static,
            price_format: PriceFormat::default(),
        }
    }
}

impl ClientConfig {
    /// Read `STOREFRONT_*` variables; unset ones fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let load = |key: &'static str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| {
                info!("{}", default_notice(key, default));
                default.to_string()
            })
        };

        let api_base_url = load("STOREFRONT_API_URL", &defaults.api_base_url);
        if api_base_url.trim().is_empty() {
            return Err(ConfigError::Empty("STOREFRONT_API_URL"));
        }

        let admin_code = load("STOREFRONT_ADMIN_CODE", &defaults.admin_code);

        let auth_mode = load("STOREFRONT_AUTH_MODE", "static")
            .parse::<AuthMode>()
            .map_err(|reason| ConfigError::Invalid {
                key: "STOREFRONT_AUTH_MODE",
                reason,
            })?;

        if auth_mode == AuthMode::Static && admin_code.is_empty() {
            return Err(ConfigError::Empty("STOREFRONT_ADMIN_CODE"));
        }

        let grouping = load("STOREFRONT_PRICE_GROUPING", "western")
            .parse::<DigitGrouping>()
            .map_err(|e| ConfigError::Invalid {
                key: "STOREFRONT_PRICE_GROUPING",
                reason: e.to_string(),
            })?;
        let symbol = load("STOREFRONT_CURRENCY", &defaults.price_format.symbol);

        Ok(Self {
            api_base_url,
            admin_code,
            auth_mode,
            price_format: PriceFormat::new(symbol, grouping),
        })
    }

    /// The admin gate matching `auth_mode`.
    pub fn gate(&self) -> Box<dyn AdminGate> {
        match self.auth_mode {
            AuthMode::Static => Box::new(StaticCodeGate::new(self.admin_code.clone())),
            AuthMode::Bearer => Box::new(BearerGate),
        }
    }
}

/// Log line for an unset variable. The admin code is never echoed.
fn default_notice(key: &str, default: &str) -> String {
    if key == "STOREFRONT_ADMIN_CODE" {
        format!("{key} not set, using default")
    } else {
        format!("{key} not set, using default: {default}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(config.gate().admit("9999").is_ok());
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("STOREFRONT_API_URL", "http://shop:9000/api"),
            ("STOREFRONT_AUTH_MODE", "Bearer"),
            ("STOREFRONT_PRICE_GROUPING", "indian"),
            ("STOREFRONT_CURRENCY", "$"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://shop:9000/api");
        assert_eq!(config.auth_mode, AuthMode::Bearer);
        assert_eq!(config.price_format, PriceFormat::new("$", DigitGrouping::Indian));
        assert!(config.gate().admit("any-token").is_ok());
    }

    #[test]
    fn rejects_malformed_values() {
        let err = ClientConfig::from_lookup(lookup(&[("STOREFRONT_AUTH_MODE", "oauth")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "STOREFRONT_AUTH_MODE", .. }));

        let err = ClientConfig::from_lookup(lookup(&[("STOREFRONT_PRICE_GROUPING", "metric")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "STOREFRONT_PRICE_GROUPING", .. }));

        let err = ClientConfig::from_lookup(lookup(&[("STOREFRONT_API_URL", " ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty("STOREFRONT_API_URL"));
    }

    #[test]
    fn default_notice_hides_admin_code() {
        let notice = default_notice("STOREFRONT_ADMIN_CODE", DEFAULT_ADMIN_CODE);
        assert!(!notice.contains(DEFAULT_ADMIN_CODE));

        let notice = default_notice("STOREFRONT_API_URL", DEFAULT_API_URL);
        assert!(notice.ends_with(DEFAULT_API_URL));
    }
}
