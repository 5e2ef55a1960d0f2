//! Frame layout: progress bar on top, the page column, status bar at the bottom.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::widgets::{PageViewWidget, ProgressBarWidget, StatusBarWidget};

/// Widest the page column gets on large terminals
pub const MAX_COLUMN_WIDTH: u16 = 96;

/// Centered page column inside the body area
pub fn page_column(body: Rect) -> Rect {
    let width = body.width.min(MAX_COLUMN_WIDTH);
    let x = body.x + (body.width - width) / 2;
    Rect::new(x, body.y, width, body.height)
}

pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    let column = page_column(rows[1]);

    app.ensure_layout(column.width, column.height, now);

    frame.render_widget(
        Block::default().style(Style::default().bg(app.palette.background)),
        area,
    );
    ProgressBarWidget::render(frame, rows[0], app.page.scroll_progress(), &app.palette);
    let ctx = app.render_context(now);
    PageViewWidget::render(frame, column, app, &ctx);
    StatusBarWidget::render(frame, rows[2], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyanify_core::{AppConfig, MemorySettingsStore, ThemeMode, ThemeState};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(now: Instant) -> App {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let theme = ThemeState::initialize(Box::new(MemorySettingsStore::new()), ThemeMode::Dark);
        App::new(config, theme, now).unwrap()
    }

    #[test]
    fn test_page_column_is_centered_and_capped() {
        let column = page_column(Rect::new(0, 1, 120, 30));
        assert_eq!(column.width, MAX_COLUMN_WIDTH);
        assert_eq!(column.x, 12);
        let narrow = page_column(Rect::new(0, 1, 60, 30));
        assert_eq!(narrow, Rect::new(0, 1, 60, 30));
    }

    #[test]
    fn test_first_frame_shows_hero_and_status() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app, t0)).unwrap();

        let buffer = terminal.backend().buffer();
        let text = screen_text(buffer);
        assert!(text.contains("Smart India Hackathon 2025"));
        assert!(row_text(buffer, 23).contains("GYANIFY | Home | 0%"));
        assert!(row_text(buffer, 0).chars().all(|c| c == '─'));
        assert_eq!(app.body_height, 22);
    }

    #[test]
    fn test_title_types_in_over_frames() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app, t0)).unwrap();
        assert!(!screen_text(terminal.backend().buffer()).contains("Gyanify –"));

        let later = t0 + Duration::from_secs(4);
        app.tick(later);
        terminal.draw(|f| draw(f, &mut app, later)).unwrap();
        assert!(screen_text(terminal.backend().buffer()).contains("Gyanify – AI-Powered"));
    }

    #[test]
    fn test_bottom_of_page_fills_progress_bar() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app, t0)).unwrap();

        app.jump_to_bottom(t0);
        app.tick(t0);
        terminal.draw(|f| draw(f, &mut app, t0)).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 0).chars().all(|c| c == '━'));
        assert!(row_text(buffer, 23).contains("Contact | 100%"));
        assert!(screen_text(buffer).contains("Empowering education"));
    }

    #[test]
    fn test_counters_finish_after_impact_is_seen() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app, t0)).unwrap();

        app.jump_to_section(gyanify_core::SectionId::Impact, t0);
        app.tick(t0);
        let done = t0 + Duration::from_secs(3);
        app.tick(done);
        terminal.draw(|f| draw(f, &mut app, done)).unwrap();
        assert!(screen_text(terminal.backend().buffer()).contains("500,000+"));
    }
}
