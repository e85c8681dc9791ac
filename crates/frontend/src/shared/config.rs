//! Runtime configuration.
//!
//! An embedded default is always available; `/sellout.toml` served next to
//! the app may override any subset of keys.

use serde::Deserialize;
use std::cell::RefCell;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub upload: UploadConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
    pub identity: IdentityConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means same origin
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    pub timeout_ms: u32,
    pub max_template_mb: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LimitsConfig {
    pub sales_selection: usize,
    pub delete_batch: usize,
    pub product_delete_batch: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IdentityConfig {
    pub login_url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[upload]
timeout_ms = 1800000
max_template_mb = 10

[limits]
sales_selection = 5000
delete_batch = 2000
product_delete_batch = 1000

[logging]
level = "debug"

[identity]
login_url = "/identity/login"
"#;

const OVERRIDE_PATH: &str = "/sellout.toml";

thread_local! {
    static CURRENT: RefCell<Option<AppConfig>> = const { RefCell::new(None) };
}

impl Default for AppConfig {
    /// Same values as `DEFAULT_CONFIG`
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            upload: UploadConfig {
                timeout_ms: 1_800_000,
                max_template_mb: 10,
            },
            limits: LimitsConfig {
                sales_selection: 5000,
                delete_batch: 2000,
                product_delete_batch: 1000,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            identity: IdentityConfig {
                login_url: "/identity/login".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> log::LevelFilter {
        self.logging.level.parse().unwrap_or(log::LevelFilter::Debug)
    }
}

/// Recursively lays `overlay` over `base`
fn merge(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Default merged with an override document
pub fn parse_with_override(override_text: &str) -> anyhow::Result<AppConfig> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG)?;
    let overlay: toml::Value = toml::from_str(override_text)?;
    merge(&mut base, overlay);
    Ok(base.try_into()?)
}

/// Fetches the optional override; any failure falls back to the default
pub async fn load_config() -> AppConfig {
    let response = gloo_net::http::Request::get(OVERRIDE_PATH).send().await;
    let config = match response {
        Ok(resp) if resp.ok() => match resp.text().await {
            Ok(text) => match parse_with_override(&text) {
                Ok(config) => {
                    log::info!("Loaded config override from {}", OVERRIDE_PATH);
                    config
                }
                Err(e) => {
                    log::warn!("Invalid {}: {}. Using default configuration", OVERRIDE_PATH, e);
                    AppConfig::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", OVERRIDE_PATH, e);
                AppConfig::default()
            }
        },
        _ => {
            log::info!("Using default embedded configuration");
            AppConfig::default()
        }
    };
    set_current(config.clone());
    config
}

pub fn set_current(config: AppConfig) {
    CURRENT.with(|c| *c.borrow_mut() = Some(config));
}

/// Configuration for code running outside the component tree
pub fn current() -> AppConfig {
    CURRENT.with(|c| c.borrow().clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_override_replaces_only_given_keys() {
        let config = parse_with_override(
            r#"
            [api]
            base_url = "https://sellout.example.com"
            [limits]
            delete_batch = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://sellout.example.com");
        assert_eq!(config.limits.delete_batch, 500);
        assert_eq!(config.limits.product_delete_batch, 1000);
        assert_eq!(config.upload.max_template_mb, 10);
    }

    #[test]
    fn test_broken_override_is_an_error() {
        assert!(parse_with_override("[limits\nx=").is_err());
        assert!(parse_with_override("[limits]\ndelete_batch = \"many\"").is_err());
    }

    #[test]
    fn test_log_level_falls_back_to_debug() {
        let mut config = AppConfig::default();
        config.logging.level = "warn".into();
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
        config.logging.level = "loud".into();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }
}
