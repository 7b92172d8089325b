//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PONG_SECTION__KEY`)
//!
//! Every value has a built-in default, so all three sources are optional.

use figment::{Figment, providers::{Format, Toml, Env}};
use pong_core::{
    CircleStyle, Color, FrameClock, LoopState, DEFAULT_FPS, DEFAULT_RADIUS, DEFAULT_SPEED,
};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Circle size and movement
    #[serde(default)]
    pub circle: CircleConfig,
    /// Background and foreground colors
    #[serde(default)]
    pub colors: ColorConfig,
    /// Frame pacing
    #[serde(default)]
    pub timing: TimingConfig,
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
    /// 3. Environment variables (`PONG_*`)
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

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PONG_CIRCLE__SPEED=10 -> circle.speed = 10
        figment = figment.merge(Env::prefixed("PONG_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Initial loop state: centered in the window, running
    pub fn loop_state(&self) -> LoopState {
        LoopState::new(self.window.width, self.window.height).with_speed(self.circle.speed)
    }

    /// Frame clock for the configured rate
    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.timing.target_fps)
    }

    /// How the circle is drawn
    pub fn circle_style(&self) -> CircleStyle {
        CircleStyle {
            radius: self.circle.radius,
            background: Color::from(self.colors.background),
            foreground: Color::from(self.colors.foreground),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Let the display's vsync pace presents as well as the frame clock
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            width: 800,
            height: 600,
            vsync: false,
        }
    }
}

/// Circle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Radius in pixels
    pub radius: u32,
    /// Pixels moved per key press
    pub speed: i32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            speed: DEFAULT_SPEED,
        }
    }
}

/// Color configuration, `[r, g, b, a]` in `0.0..=1.0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: [f32; 4],
    pub foreground: [f32; 4],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK.to_array(),
            foreground: Color::WHITE.to_array(),
        }
    }
}

/// Frame pacing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Maximum frames per second (0 = uncapped)
    pub target_fps: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { target_fps: DEFAULT_FPS }
    }
}

/// Debug configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Default log filter (error, warn, info, debug, trace); `RUST_LOG` wins
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
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
