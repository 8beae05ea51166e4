use crate::error::{GuideError, Result};
use crate::types::ColorRole;
use serde::{Deserialize, Serialize};

/// Colors used to paint indentation guides
///
/// Every field falls back to its default when missing, so a partial table
/// in a config file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Fill colors per indentation depth, cycled when depth exceeds the list
    pub colors: Vec<String>,

    /// Whole-indent block for lines whose level is not a multiple of the unit
    pub error_color: String,

    /// Whole-indent block for lines mixing tabs and spaces (empty = disabled)
    pub tabmix_color: String,

    /// Plain vertical guide drawn at every unit boundary
    pub marker_color: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                "rgba(255,255,64,0.07)".to_string(),
                "rgba(127,255,127,0.07)".to_string(),
                "rgba(255,127,255,0.07)".to_string(),
                "rgba(79,236,236,0.07)".to_string(),
            ],
            error_color: "rgba(128,32,32,0.6)".to_string(),
            tabmix_color: "rgba(128,32,96,0.6)".to_string(),
            marker_color: "rgba(255,255,255,0.1)".to_string(),
        }
    }
}

impl PaletteConfig {
    /// Palette with the given fill colors and default error/tab-mix colors
    pub fn with_colors<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Builder: disable tab-mix coloring
    #[must_use]
    pub fn without_tabmix(mut self) -> Self {
        self.tabmix_color.clear();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(GuideError::invalid_config("palette must have at least one color"));
        }

        if self.error_color.trim().is_empty() {
            return Err(GuideError::invalid_config("error_color must not be empty"));
        }

        Ok(())
    }

    /// Whether mixed-indentation lines get a tab-mix block
    #[must_use]
    pub fn tabmix_enabled(&self) -> bool {
        !self.tabmix_color.trim().is_empty()
    }

    /// Number of fill colors
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve a segment's role to the configured color
    #[must_use]
    pub fn color_for(&self, role: ColorRole) -> Option<&str> {
        match role {
            ColorRole::Palette(index) => {
                if self.colors.is_empty() {
                    None
                } else {
                    Some(self.colors[index % self.colors.len()].as_str())
                }
            }
            ColorRole::Error => Some(self.error_color.as_str()),
            ColorRole::TabMix => self
                .tabmix_enabled()
                .then_some(self.tabmix_color.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_valid() {
        let config = PaletteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.len(), 4);
        assert!(config.tabmix_enabled());
    }

    #[test]
    fn test_empty_palette_rejected() {
        let config = PaletteConfig::with_colors(Vec::<String>::new());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GuideError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_blank_error_color_rejected() {
        let config = PaletteConfig {
            error_color: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_lookup() {
        let config = PaletteConfig::with_colors(["red", "green"]);
        assert_eq!(config.color_for(ColorRole::Palette(0)), Some("red"));
        assert_eq!(config.color_for(ColorRole::Palette(3)), Some("green"));
        assert_eq!(config.color_for(ColorRole::Error), Some("rgba(128,32,32,0.6)"));
        assert_eq!(config.color_for(ColorRole::TabMix), Some("rgba(128,32,96,0.6)"));

        let disabled = config.without_tabmix();
        assert!(!disabled.tabmix_enabled());
        assert_eq!(disabled.color_for(ColorRole::TabMix), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PaletteConfig = toml::from_str(
            r##"
            colors = ["#111", "#222", "#333"]
            tabmix_color = ""
            "##,
        )
        .unwrap();

        assert_eq!(config.colors, vec!["#111", "#222", "#333"]);
        assert_eq!(config.error_color, PaletteConfig::default().error_color);
        assert!(!config.tabmix_enabled());
    }
}
