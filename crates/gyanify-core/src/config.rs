use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::animation::EasingType;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (settings store and log file live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while anything is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Theme used when nothing has been persisted yet
    #[serde(default)]
    pub default_theme: ThemeMode,
    /// Smooth scrolling of the page body
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Optional hex overrides applied on top of the active palette
    #[serde(default)]
    pub theme_colors: ThemeColorOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            default_theme: ThemeMode::default(),
            scroll: ScrollConfig::default(),
            theme_colors: ThemeColorOverrides::default(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Frame interval while animating; falls back to ~60fps when unset
    pub fn animation_tick(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            // never poll with a zero timeout
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Rows moved per line-scroll key press
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

impl ScrollConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

/// Hex color overrides, e.g. "#ff0000" or "f00"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub progress: Option<String>,
}

/// Timing parameters for the scroll-driven animations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Fraction of a section that must be on screen before it counts as visible
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    /// Latch sections visible after their first reveal
    #[serde(default = "default_true")]
    pub trigger_once: bool,
    #[serde(default = "default_typewriter_interval")]
    pub typewriter_interval_ms: u64,
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,
    #[serde(default = "default_counter_steps")]
    pub counter_steps: u32,
    #[serde(default = "default_entrance_duration")]
    pub entrance_duration_ms: u64,
    /// Delay between consecutive cards of one section
    #[serde(default = "default_entrance_stagger")]
    pub entrance_stagger_ms: u64,
    #[serde(default)]
    pub entrance_easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: default_reveal_threshold(),
            trigger_once: default_true(),
            typewriter_interval_ms: default_typewriter_interval(),
            counter_duration_ms: default_counter_duration(),
            counter_steps: default_counter_steps(),
            entrance_duration_ms: default_entrance_duration(),
            entrance_stagger_ms: default_entrance_stagger(),
            entrance_easing: EasingType::default(),
        }
    }
}

impl AnimationConfig {
    pub fn typewriter_interval(&self) -> Duration {
        Duration::from_millis(self.typewriter_interval_ms)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn entrance_duration(&self) -> Duration {
        Duration::from_millis(self.entrance_duration_ms)
    }

    pub fn entrance_stagger(&self) -> Duration {
        Duration::from_millis(self.entrance_stagger_ms)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gyanify")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_typewriter_interval() -> u64 {
    50
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_counter_steps() -> u32 {
    60
}

fn default_entrance_duration() -> u64 {
    800
}

fn default_entrance_stagger() -> u64 {
    200
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Reject values the animation primitives would refuse at construction
    pub fn validate(&self) -> crate::Result<()> {
        let anim = &self.animation;
        let threshold = anim.reveal_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(crate::Error::Config(format!(
                "animation.reveal_threshold must be in (0, 1], got {}",
                threshold
            )));
        }
        if anim.typewriter_interval_ms == 0 {
            return Err(crate::Error::Config(
                "animation.typewriter_interval_ms must be positive".to_string(),
            ));
        }
        if anim.counter_steps == 0 || anim.counter_duration_ms == 0 {
            return Err(crate::Error::Config(
                "animation.counter_steps and animation.counter_duration_ms must be positive"
                    .to_string(),
            ));
        }
        if (anim.counter_duration() / anim.counter_steps).is_zero() {
            return Err(crate::Error::Config(
                "animation.counter_duration_ms is too short for the configured steps".to_string(),
            ));
        }
        if self.ui.animation_fps > 1000 {
            return Err(crate::Error::Config(format!(
                "ui.animation_fps must be at most 1000, got {}",
                self.ui.animation_fps
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(crate::Error::Config(
                "ui.tick_rate_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/gyanify/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("gyanify")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Path of the key-value settings store holding the persisted theme
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    /// Path of the log file written while the terminal UI is running
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("gyanify.log")
    }
}
