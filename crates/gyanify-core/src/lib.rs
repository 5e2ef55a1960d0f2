pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod settings;
pub mod theme;

pub use config::{AppConfig, ScrollConfig};
pub use error::{Error, Result};
pub use page::{Page, SectionId};
pub use settings::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
pub use theme::{ThemeMode, ThemeState};
