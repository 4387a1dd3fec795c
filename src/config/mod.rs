use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub static_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Barangay San Agustin".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

/// The identity provider in front of the service forwards the signed-in
/// user's id in this header.
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub user_header: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            user_header: "x-user-id".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.base_url", "http://localhost:3000")?
            .set_default("database.url", "sqlite://barangay.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("site.name", "Barangay San Agustin")?
            .set_default("site.static_dir", "static")?
            .set_default("uploads.user_header", "x-user-id")?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Add environment variables (with BARANGAY__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("BARANGAY").separator("__"))

            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                base_url: "http://localhost:3000".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite://barangay.db?mode=rwc".to_string(),
                max_connections: 10,
            },
            site: SiteConfig::default(),
            uploads: UploadConfig::default(),
        }
    }
}
