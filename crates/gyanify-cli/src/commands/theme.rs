use anyhow::Result;

use gyanify_core::{AppConfig, JsonSettingsStore, ThemeMode, ThemeState};

fn load(config: &AppConfig) -> ThemeState {
    let store = JsonSettingsStore::new(config.settings_path());
    ThemeState::initialize(Box::new(store), config.ui.default_theme)
}

pub fn show(config: &AppConfig) -> Result<()> {
    println!("{}", load(config).mode());
    Ok(())
}

pub fn set(config: &AppConfig, mode: ThemeMode) -> Result<()> {
    let mut state = load(config);
    state.set(mode)?;
    println!("Theme set to {}", mode);
    Ok(())
}

pub fn toggle(config: &AppConfig) -> Result<()> {
    let mut state = load(config);
    let mode = state.toggle()?;
    println!("Theme set to {}", mode);
    Ok(())
}
