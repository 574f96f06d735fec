//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`DRIFT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use driftfield_core::{DrawStyle, FieldMode, FieldParams};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Particle field configuration
    #[serde(default)]
    pub field: FieldConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`DRIFT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // DRIFT_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("DRIFT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Driftfield".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Particle field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Which effect to animate
    pub mode: FieldMode,
    /// Population override; omit to use the mode's preset count
    pub count: Option<usize>,
    /// RNG seed; omit for entropy seeding
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mode: FieldMode::Snow,
            count: None,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Build generation parameters from the configured mode and overrides
    pub fn to_params(&self) -> FieldParams {
        let params = FieldParams::for_mode(self.mode);
        match self.count {
            Some(count) => params.with_count(count),
            None => params,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Point particle color [r, g, b]
    pub point_color: [f32; 3],
    /// Trace stroke color [r, g, b]
    pub trace_color: [f32; 3],
    /// Trace stroke width in pixels
    pub line_width: f32,
    /// Triangles per tessellated circle
    pub circle_segments: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let style = DrawStyle::default();
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
            point_color: style.point_color,
            trace_color: style.trace_color,
            line_width: style.line_width,
            circle_segments: 12,
        }
    }
}

impl RenderingConfig {
    /// Build the field's draw style
    pub fn to_style(&self) -> DrawStyle {
        DrawStyle {
            point_color: self.point_color,
            trace_color: self.trace_color,
            line_width: self.line_width,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.field.mode, FieldMode::Snow);
        assert!(config.field.count.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("mode"));
        assert!(toml.contains("background_color"));
    }

    #[test]
    fn test_to_params_uses_preset_count() {
        let config = FieldConfig {
            mode: FieldMode::Circuit,
            count: None,
            seed: None,
        };
        let params = config.to_params();
        assert_eq!(params.count, 40);
        assert_eq!(params.mode(), FieldMode::Circuit);
    }

    #[test]
    fn test_to_params_count_override() {
        let config = FieldConfig {
            mode: FieldMode::Snow,
            count: Some(250),
            seed: None,
        };
        assert_eq!(config.to_params().count, 250);
    }

    #[test]
    fn test_to_style() {
        let config = RenderingConfig {
            trace_color: [0.5, 0.5, 0.5],
            line_width: 2.0,
            ..RenderingConfig::default()
        };
        let style = config.to_style();
        assert_eq!(style.trace_color, [0.5, 0.5, 0.5]);
        assert_eq!(style.line_width, 2.0);
    }

    #[test]
    fn test_mode_roundtrip() {
        let config = AppConfig {
            field: FieldConfig {
                mode: FieldMode::Circuit,
                count: Some(10),
                seed: Some(42),
            },
            ..AppConfig::default()
        };
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("circuit"));

        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.field.mode, FieldMode::Circuit);
        assert_eq!(parsed.field.count, Some(10));
        assert_eq!(parsed.field.seed, Some(42));
    }
}
