//! Runtime configuration for services built on generated modules
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDGEN_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/crudgen/{service}/config.toml` (user config, XDG)
//! 4. `/etc/crudgen/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Example: `CRUDGEN_DATABASE__MAX_CONNECTIONS=10`
//!
//! # Example Configuration
//!
//! ```toml
//! [service]
//! name = "rooms"
//! bind_address = "127.0.0.1:3000"
//!
//! [database]
//! url = "sqlite://./rooms.db"
//! max_connections = 5
//! create_if_missing = true
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Service identity and listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name, used in logs
    pub name: String,

    /// Address the HTTP listener binds to
    pub bind_address: String,
}

impl ServiceSettings {
    /// Parse [`Self::bind_address`] for the HTTP listener
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_address.parse()
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "crudgen".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// `SQLite` connection URL
    pub url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// Create the database file when it does not exist
    pub create_if_missing: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./crudgen.db".to_string(),
            max_connections: 5,
            create_if_missing: true,
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrudgenConfig {
    /// Service settings
    pub service: ServiceSettings,

    /// Database settings
    pub database: DatabaseSettings,
}

impl CrudgenConfig {
    /// Load configuration for a specific service
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value has
    /// the wrong type.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use crudgen::config::CrudgenConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = CrudgenConfig::load_for_service("rooms")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let system_config = PathBuf::from("/etc/crudgen")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config = figment
            .merge(Env::prefixed("CRUDGEN_").split("__").lowercase(true))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CRUDGEN_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// ```rust
    /// use crudgen::config::CrudgenConfig;
    ///
    /// let path = CrudgenConfig::recommended_path("rooms");
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("crudgen")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }
}
