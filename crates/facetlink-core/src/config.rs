use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::filter::FilterLabels;

/// Chip labels for the availability filter (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsConfig {
    pub in_stock: String,
    pub out_of_stock: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        let defaults = FilterLabels::default();
        Self {
            in_stock: defaults.in_stock,
            out_of_stock: defaults.out_of_stock,
        }
    }
}

/// Global configuration loaded from `~/.config/facetlink/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetlinkConfig {
    /// Collection path used when a command gets no `--url`, or only a query.
    pub default_path: String,
    /// Prefix of the "Min:"/"Max:" price chips.
    pub currency_symbol: String,
    /// Optional availability chip labels; built-in English labels otherwise.
    #[serde(default)]
    pub labels: Option<LabelsConfig>,
}

impl Default for FacetlinkConfig {
    fn default() -> Self {
        Self {
            default_path: "/collections/all".to_string(),
            currency_symbol: "$".to_string(),
            labels: None,
        }
    }
}

impl FacetlinkConfig {
    pub fn filter_labels(&self) -> FilterLabels {
        let labels = self.labels.clone().unwrap_or_default();
        FilterLabels {
            in_stock: labels.in_stock,
            out_of_stock: labels.out_of_stock,
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("facetlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FacetlinkConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FacetlinkConfig> {
    if !path.exists() {
        let default_cfg = FacetlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FacetlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
