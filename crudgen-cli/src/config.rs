//! Generator configuration
//!
//! Loaded from, in increasing priority:
//!
//! 1. Built-in defaults
//! 2. `./crudgen.toml`, or the file passed with `--config`
//! 3. Environment variables `CRUDGEN_GENERATOR__*`
//!
//! ```toml
//! [generator]
//! output_dir = "src/modules"
//! template_dir = "templates/crudgen"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Default project-local configuration file
pub const DEFAULT_CONFIG_FILE: &str = "crudgen.toml";

/// Where modules are written and which templates render them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory that receives one sub-directory per module
    pub output_dir: PathBuf,

    /// Directory of `<template>.rs.jinja` overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("src/modules"),
            template_dir: None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    generator: GeneratorConfig,
}

impl GeneratorConfig {
    /// Load configuration, reading `path` or `./crudgen.toml` when present
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file does not exist, a file
    /// contains invalid TOML, or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment =
            Figment::new().merge(Toml::string(&toml::to_string(&ConfigFile::default())?));

        match path {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let local_config = PathBuf::from(DEFAULT_CONFIG_FILE);
                if local_config.exists() {
                    figment = figment.merge(Toml::file(local_config));
                }
            }
        }

        let config: ConfigFile = figment
            .merge(Env::prefixed("CRUDGEN_").split("__").lowercase(true))
            .extract()?;
        Ok(config.generator)
    }
}
