use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn status_text(app: &App) -> String {
        if let Some(msg) = &app.status_message {
            return format!(" {}", msg);
        }
        let percent = (app.page.scroll_progress() * 100.0).round() as u32;
        format!(
            " GYANIFY | {} | {}%",
            app.page.current_section().label(),
            percent
        )
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let palette = &app.palette;
        let status_text = Self::status_text(app);

        let theme_icon = if app.theme.mode().is_dark() { "☾" } else { "☀" };
        let help_hint = format!(
            " {} {} | q:quit j/k:scroll n/p:section t:theme ",
            theme_icon,
            app.theme.mode()
        );
        let padding_len = usize::from(area.width)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(palette.text).bg(palette.surface),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(palette.surface)),
            Span::styled(
                help_hint,
                Style::default().fg(palette.muted).bg(palette.surface),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
