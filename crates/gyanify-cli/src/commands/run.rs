use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use gyanify_core::{AppConfig, JsonSettingsStore, ThemeState};
use gyanify_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    ui,
};

pub fn run(config: AppConfig) -> Result<()> {
    let store = JsonSettingsStore::new(config.settings_path());
    let theme = ThemeState::initialize(Box::new(store), config.ui.default_theme);

    let event_handler = EventHandler::new(config.ui.tick_rate(), config.ui.animation_tick());
    let mut app = App::new(config, theme, Instant::now())?;
    info!("Starting pitch page with {} theme", app.theme.mode());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Gyanify"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &event_handler);
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        // Use the fast frame rate while scrolling or while anything animates
        let event = if app.needs_animation(Instant::now()) {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    handle_action(app, action, Instant::now());
                }
                AppEvent::Wheel(notches) => app.scroll_wheel(notches),
                // the next draw re-measures the page for the new size
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_action(app: &mut App, action: Action, now: Instant) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if action != Action::None {
        app.status_message = None;
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::ScrollPageDown => app.scroll_page_down(),
        Action::ScrollPageUp => app.scroll_page_up(),
        Action::JumpToTop => app.jump_to_top(now),
        Action::JumpToBottom => app.jump_to_bottom(now),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextSection => app.next_section(now),
        Action::PrevSection => app.prev_section(now),
        Action::ToggleTheme => app.toggle_theme(),
        Action::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyanify_core::{MemorySettingsStore, ThemeMode};

    fn app(now: Instant) -> App {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let theme = ThemeState::initialize(Box::new(MemorySettingsStore::new()), ThemeMode::Dark);
        let mut app = App::new(config, theme, now).unwrap();
        app.ensure_layout(80, 22, now);
        app
    }

    #[test]
    fn test_pending_g_is_cleared_by_other_keys() {
        let now = Instant::now();
        let mut app = app(now);
        handle_action(&mut app, Action::PendingG, now);
        assert_eq!(app.pending_key, Some('g'));
        handle_action(&mut app, Action::ScrollDown, now);
        assert_eq!(app.pending_key, None);
    }

    #[test]
    fn test_jump_to_bottom_then_top() {
        let now = Instant::now();
        let mut app = app(now);
        handle_action(&mut app, Action::JumpToBottom, now);
        assert_eq!(app.scroller.current(), app.max_scroll());
        handle_action(&mut app, Action::JumpToTop, now);
        assert_eq!(app.scroller.current(), 0);
    }

    #[test]
    fn test_toggle_theme_then_status_clears() {
        let now = Instant::now();
        let mut app = app(now);
        handle_action(&mut app, Action::ToggleTheme, now);
        assert_eq!(app.theme.mode(), ThemeMode::Light);
        assert!(app.status_message.is_some());
        handle_action(&mut app, Action::ScrollDown, now);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_quit() {
        let now = Instant::now();
        let mut app = app(now);
        handle_action(&mut app, Action::Quit, now);
        assert!(app.should_quit);
    }
}
