use anyhow::{Context, Result};
use indent_rainbow_core::{LayoutMetrics, PaletteConfig, MAX_TAB_WIDTH};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tab width used when neither the command line nor the config names one
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Indent unit assumed for files without any indented line
pub const FALLBACK_INDENT_SIZE: usize = 4;

/// Contents of the `--config` TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Columns per tab stop
    pub tab_width: Option<usize>,

    pub palette: PaletteConfig,

    /// Pixel metrics used by `guides --pixels`
    pub metrics: LayoutMetrics,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::parse(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.palette.validate()?;
        config.metrics.validate()?;
        if let Some(tab_width) = config.tab_width {
            if tab_width == 0 || tab_width > MAX_TAB_WIDTH {
                anyhow::bail!("tab_width must be between 1 and {MAX_TAB_WIDTH}, got {tab_width}");
            }
        }
        Ok(config)
    }
}
