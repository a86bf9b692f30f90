//! The configuration structs used to build the AppConfig, and their impls.
use std::{
    collections::{hash_map::Entry, HashMap},
    io::Read,
};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;
use toml::Value;

use crate::config::{ConfigError, ConfigResult};

// ###################################
// ->   STRUCTS
// ###################################
/// Accumulates the raw TOML tables of the layered source files before the
/// final typed deserialization.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AppConfigBuilder(HashMap<String, HashMap<String, Value>>);

#[derive(AsRefStr)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub health_config: HealthDbConfig,
    pub newsletter_config: NewsletterConfig,
    pub blog_config: BlogConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

/// The hosted GraphQL database holding the daily health entries.
#[derive(Deserialize, Clone, Debug)]
pub struct HealthDbConfig {
    pub url: String,
    pub auth_token: SecretString,
    pub timeout_millis: u64,
}

/// The transactional-email provider the newsletter signups get relayed to.
#[derive(Deserialize, Clone, Debug)]
pub struct NewsletterConfig {
    pub url: String,
    pub auth_token: SecretString,
    /// Tag attached to every subscriber so the provider can tell where the
    /// signup originated.
    pub tag: String,
    pub timeout_millis: u64,
}

/// The blog-platform publication with its own subscriber list.
#[derive(Deserialize, Clone, Debug)]
pub struct BlogConfig {
    pub base_url: String,
    pub timeout_millis: u64,
}

// ###################################
// ->   IMPLs
// ###################################
impl HealthDbConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_millis)
    }
}

impl NewsletterConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_millis)
    }
}

impl BlogConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_millis)
    }
}

impl AppConfig {
    pub fn init() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Pulls the provider secrets from the process environment, replacing
    /// whatever placeholders the config files contained.
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.health_config.auth_token = SecretString::from(require_env("HEALTH_DB_TOKEN")?);
        self.newsletter_config.auth_token =
            SecretString::from(require_env("NEWSLETTER_API_TOKEN")?);
        self.blog_config.base_url = require_env("BLOG_BASE_URL")?;
        Ok(())
    }
}

fn require_env(name: &str) -> ConfigResult<String> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

impl AppConfigBuilder {
    /// Extends this `AppConfigBuilder` with the contents of `other` builder.
    fn extend_builder(&mut self, other: Self) {
        for (entry, entry_hm) in other.0 {
            if let Entry::Vacant(e) = self.0.entry(entry.clone()) {
                e.insert(entry_hm);
            } else {
                let target_hm = self.0.get_mut(&entry).expect("Checked above!");
                for (inner_entry, inner_value) in entry_hm {
                    target_hm.insert(inner_entry, inner_value);
                }
            }
        }
    }

    /// Panics if file reading or deserialization goes wrong.
    pub fn add_source_file(mut self, mut file: std::fs::File) -> Self {
        let mut file_content = String::new();

        if let Err(e) = file.read_to_string(&mut file_content) {
            panic!("Fatal Error: Building config: {e}");
        }

        let app_conf_builder: AppConfigBuilder = toml::from_str(&file_content)
            .unwrap_or_else(|e| panic!("Fatal Error: Building config: {e}"));

        self.extend_builder(app_conf_builder);

        self
    }

    pub fn build(self) -> ConfigResult<AppConfig> {
        let serialized = toml::to_string(&self)?;
        let app_config = toml::from_str(&serialized)?;
        Ok(app_config)
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail),
        }
    }
}

// ###################################
// ->   TESTS
// ###################################
