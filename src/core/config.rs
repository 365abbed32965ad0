use std::rc::Rc;

use serde::Deserialize;

use super::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, config::ConfigError> {
        let base_path = std::env::current_dir().map_err(|e| {
            config::ConfigError::Message(format!("Failed to find the current dir: {}", e))
        })?;
        let config_dir = base_path.join("src/core/configurations");

        let app_environment: Environment = std::env::var("SAMITY_APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(config::ConfigError::Message)?;

        let configurations = config::Config::builder()
            .add_source(
                config::File::from(config_dir.join(app_environment.as_str())).required(true),
            )
            .add_source(
                config::Environment::with_prefix("SAMITY").separator("__"),
            )
            .build()?;

        configurations.try_deserialize()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationConfig {
    pub name: String,
    pub log_level: String,
    pub log_directory: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: String,
}

impl StorageConfig {
    pub fn connect(&self) -> Result<Rc<dyn KeyValueStore>, StorageError> {
        let provider: Rc<dyn KeyValueStore> = match self.backend {
            StorageBackend::Memory => Rc::new(MemoryStore::new()),
            StorageBackend::File => Rc::new(FileStore::open(&self.data_dir)?),
        };
        Ok(provider)
    }
}

pub enum Environment {
    Local,
    Sandbox,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "sandbox" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not supported environment. Use either `local`, `sandbox` or `production` ",
                other
            )),
        }
    }
}
