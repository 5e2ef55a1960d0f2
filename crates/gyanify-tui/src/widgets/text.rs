//! Word wrapping and styled span helpers shared by the section renderers.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::blend;

/// Columns a block slides in from while its entrance plays
pub const SLIDE_COLUMNS: f64 = 4.0;

/// A wrapped line together with the char offset it starts at in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub start: usize,
    pub text: String,
}

impl WrappedLine {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_with_offsets(text: &str, width: usize) -> Vec<WrappedLine> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_start = 0;
    let mut current_width = 0;
    let mut pos = 0;

    for word in text.split(' ') {
        let word_chars = word.chars().count();
        if word.is_empty() {
            pos += 1;
            continue;
        }
        let word_width = word.width();

        if current.is_empty() {
            current_start = pos;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current_width += 1;
        } else {
            lines.push(WrappedLine {
                start: current_start,
                text: std::mem::take(&mut current),
            });
            current_width = 0;
            current_start = pos;
        }

        if word_width > width {
            for (k, ch) in word.chars().enumerate() {
                let w = ch.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(WrappedLine {
                        start: current_start,
                        text: std::mem::take(&mut current),
                    });
                    current_width = 0;
                    current_start = pos + k;
                }
                current.push(ch);
                current_width += w;
            }
        } else {
            current.push_str(word);
            current_width += word_width;
        }
        pos += word_chars + 1;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(WrappedLine {
            start: current_start,
            text: current,
        });
    }
    lines
}

pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_with_offsets(text, width)
        .into_iter()
        .map(|line| line.text)
        .collect()
}

/// Color faded in from the background by entrance progress
#[inline]
pub fn faded(background: Color, color: Color, progress: f64) -> Color {
    blend(background, color, progress)
}

/// Leading spaces for a block that is still sliding in
pub fn slide_indent(progress: f64) -> String {
    let offset = ((1.0 - progress.clamp(0.0, 1.0)) * SLIDE_COLUMNS).round() as usize;
    " ".repeat(offset)
}

/// One span per char, colored along a two-stop gradient. `offset` and `total`
/// place the chars within a longer run so wrapped lines continue the sweep.
pub fn gradient_spans(
    text: &str,
    (from, to): (Color, Color),
    background: Color,
    progress: f64,
    offset: usize,
    total: usize,
) -> Vec<Span<'static>> {
    let span_len = total.saturating_sub(1).max(1) as f64;
    text.chars()
        .enumerate()
        .map(|(k, ch)| {
            let t = (offset + k) as f64 / span_len;
            let color = faded(background, blend(from, to, t), progress);
            Span::styled(
                ch.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_spaces() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_offsets_track_source_chars() {
        let lines = wrap_with_offsets("Gyanify – AI-Powered Engine", 12);
        assert_eq!(lines[0].text, "Gyanify –");
        assert_eq!(lines[0].start, 0);
        assert_eq!(lines[1].text, "AI-Powered");
        assert_eq!(lines[1].start, 10);
        assert_eq!(lines[2].start, 21);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_with_offsets("abcdefgh ij", 3);
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["abc", "def", "gh", "ij"]);
        assert_eq!(lines[1].start, 3);
        assert_eq!(lines[3].start, 9);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn test_slide_indent() {
        assert_eq!(slide_indent(0.0), "    ");
        assert_eq!(slide_indent(1.0), "");
    }

    #[test]
    fn test_gradient_spans_fade_from_background() {
        let bg = Color::Rgb(0, 0, 0);
        let stops = (Color::Rgb(200, 0, 0), Color::Rgb(0, 0, 200));
        let hidden = gradient_spans("ab", stops, bg, 0.0, 0, 2);
        assert!(hidden.iter().all(|s| s.style.fg == Some(bg)));

        let shown = gradient_spans("ab", stops, bg, 1.0, 0, 2);
        assert_eq!(shown[0].style.fg, Some(Color::Rgb(200, 0, 0)));
        assert_eq!(shown[1].style.fg, Some(Color::Rgb(0, 0, 200)));
    }
}
