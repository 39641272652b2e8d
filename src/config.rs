//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`STARFIELD_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use starfield_core::StarfieldParams;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Starting (and reset) starfield parameters
    #[serde(default)]
    pub starfield: StarfieldParams,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Keyboard control configuration
    #[serde(default)]
    pub controls: ControlsConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`STARFIELD_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // STARFIELD_STARFIELD__SPEED=12 -> starfield.speed = 12
        figment = figment.merge(Env::prefixed("STARFIELD_").split("__"));

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
            title: "Starfield".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed seed for star placement (random per run when unset)
    pub seed: Option<u64>,
    /// Start with the animation paused
    pub start_paused: bool,
}

/// Keyboard control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Stars added/removed per Up/Down press
    pub star_count_step: i32,
    /// Speed change per Left/Right press
    pub speed_step: f32,
    /// Star size change per [ / ] press
    pub star_size_step: f32,
    /// Trail length change per , / . press
    pub trail_step: f32,
    /// Depth change per - / = press
    pub depth_step: f32,
    /// Colors cycled by the C key
    pub palette: Vec<String>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            star_count_step: 50,
            speed_step: 1.0,
            star_size_step: 0.5,
            trail_step: 0.1,
            depth_step: 1.0,
            palette: vec![
                "#ffffff".to_string(),
                "#9bb0ff".to_string(),
                "#ffd2a1".to_string(),
                "#ff6b6b".to_string(),
                "#6bffb8".to_string(),
            ],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show star count and frame number in the window title
    pub show_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_stats: true,
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
    use starfield_core::LateralPlacement;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.starfield.star_count, 300);
        assert_eq!(config.starfield.star_color, "#ffffff");
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("trail_length"));
        assert!(toml.contains("palette"));
    }

    #[test]
    fn test_partial_starfield_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [starfield]
            speed = 12.0
            placement = "uniform"
            "#,
        )
        .unwrap();
        assert_eq!(config.starfield.speed, 12.0);
        assert_eq!(config.starfield.placement, LateralPlacement::Uniform);
        // Unspecified keys keep their defaults
        assert_eq!(config.starfield.star_count, 300);
        assert_eq!(config.window.title, "Starfield");
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.controls.star_count_step, 50);
    }
}
