use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{blend, Palette};

const FILLED: &str = "━";
const TRACK: &str = "─";

/// Thin bar across the top row showing how far the page has been read
pub struct ProgressBarWidget;

impl ProgressBarWidget {
    /// Number of filled cells for `progress` on a bar `width` cells wide
    pub fn filled_cells(progress: f64, width: u16) -> u16 {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        (progress * f64::from(width)).round() as u16
    }

    pub fn render(frame: &mut Frame, area: Rect, progress: f64, palette: &Palette) {
        let filled = Self::filled_cells(progress, area.width);
        let span_len = f64::from(area.width.saturating_sub(1).max(1));

        let mut spans: Vec<Span> = (0..filled)
            .map(|x| {
                let color = blend(palette.progress, palette.accent, f64::from(x) / span_len);
                Span::styled(FILLED, Style::default().fg(color))
            })
            .collect();
        spans.push(Span::styled(
            TRACK.repeat(usize::from(area.width - filled)),
            Style::default().fg(palette.track),
        ));

        let bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette.background));
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells() {
        assert_eq!(ProgressBarWidget::filled_cells(0.0, 80), 0);
        assert_eq!(ProgressBarWidget::filled_cells(0.5, 80), 40);
        assert_eq!(ProgressBarWidget::filled_cells(1.0, 80), 80);
        assert_eq!(ProgressBarWidget::filled_cells(f64::NAN, 80), 0);
        assert_eq!(ProgressBarWidget::filled_cells(3.0, 80), 80);
    }
}
