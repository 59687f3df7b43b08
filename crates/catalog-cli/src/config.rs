//! Optional TOML configuration.
//!
//! ```toml
//! device_list_stem = "DeviceList"
//!
//! [aliases]
//! en = "primary"
//! ja = "secondary"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use catalog_ingest::DEVICE_LIST_STEM;
use catalog_validate::{LocaleRegistry, ValidateError};
use serde::{Deserialize, Serialize};

/// Looked up in the catalog root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "catalog-validator.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid locale alias in {path}: {source}")]
    Alias {
        path: PathBuf,
        #[source]
        source: ValidateError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// File stem routed to the device-list check.
    pub device_list_stem: String,
    /// Directory name -> built-in locale tag.
    pub aliases: BTreeMap<String, String>,
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            device_list_stem: DEVICE_LIST_STEM.to_string(),
            aliases: BTreeMap::new(),
            source: None,
        }
    }
}

impl CatalogConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Use `explicit` when given, else `ROOT/catalog-validator.toml` if it
    /// exists, else defaults.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Built-in locales plus the configured aliases.
    pub fn registry(&self) -> Result<LocaleRegistry, ConfigError> {
        let mut registry = LocaleRegistry::builtin();
        for (alias, target) in &self.aliases {
            registry
                .add_alias(alias.clone(), target.clone())
                .map_err(|source| ConfigError::Alias {
                    path: self.source.clone().unwrap_or_default(),
                    source,
                })?;
        }
        Ok(registry)
    }
}
