//! Configuration types.
//!
//! Storefront view defaults are read from `config.toml` in the Tilth config
//! directory. Every field is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::item::CatalogKind;
use crate::selection::LayoutMode;
use crate::sort::SortKey;

/// View defaults for every storefront section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Initial sort for catalogs that support it. Unset means each catalog's
    /// own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortKey>,

    /// Initial result layout.
    #[serde(default)]
    pub layout: LayoutMode,

    /// Items per page, per catalog. Must stay last: TOML tables follow
    /// plain values.
    #[serde(default)]
    pub page_size: PageSizes,
}

/// Page sizes per catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSizes {
    pub products: usize,
    pub rentals: usize,
    pub inventory: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            products: 6,
            rentals: 6,
            inventory: 5,
        }
    }
}

impl StorefrontConfig {
    /// Page size for a catalog. Zero in the file degrades to one.
    pub fn page_size_for(&self, kind: CatalogKind) -> usize {
        let size = match kind {
            CatalogKind::Products => self.page_size.products,
            CatalogKind::Rentals => self.page_size.rentals,
            CatalogKind::Inventory => self.page_size.inventory,
        };
        size.max(1)
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: StorefrontConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tilth"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}
