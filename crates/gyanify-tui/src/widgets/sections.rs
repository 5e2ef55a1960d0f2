//! Turns each section into styled lines.
//!
//! Line counts never depend on animation state: entrances only change colors
//! and indentation, and the typewriter pads unrevealed characters with
//! blanks. The page can therefore be laid out once per terminal size.

use std::time::Instant;

use gyanify_core::content::{
    self, format_metric, section_copy, ColorToken, IconRef, SectionId, HERO_TITLE,
};
use gyanify_core::page::SectionInstance;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::text::{faded, gradient_spans, slide_indent, wrap, wrap_with_offsets};
use crate::theme::{gradient, Palette};

/// Everything a section renderer needs besides the section itself
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    /// Width of the page column
    pub width: u16,
    /// The hero is padded to at least this many rows
    pub min_height: u16,
    pub now: Instant,
}

const CARD_INDENT: &str = "  ";
const BODY_INDENT: &str = "    ";
const TECH_CELL_WIDTH: usize = 22;
const CARET: &str = "▌";

pub fn icon_glyph(icon: IconRef) -> &'static str {
    match icon {
        IconRef::Globe => "◍",
        IconRef::Play => "▶",
        IconRef::ArrowRight => "→",
        IconRef::AlertTriangle => "⚠",
        IconRef::DollarSign => "$",
        IconRef::Users => "☺",
        IconRef::Brain => "✺",
        IconRef::BookOpen => "❑",
        IconRef::CheckCircle => "✓",
        IconRef::Smartphone => "▯",
        IconRef::Volume => "♪",
        IconRef::Refresh => "↻",
        IconRef::Accessibility => "⚇",
        IconRef::Code => "λ",
        IconRef::Database => "≡",
        IconRef::Cpu => "▣",
        IconRef::Cloud => "☁",
        IconRef::Mic => "◉",
        IconRef::Clock => "◷",
        IconRef::TrendingUp => "↗",
        IconRef::Palette => "✎",
        IconRef::Github => "⎇",
        IconRef::Linkedin => "◈",
        IconRef::Mail => "✉",
        IconRef::Trophy => "★",
        IconRef::ExternalLink => "⇱",
        IconRef::Earth => "◎",
        IconRef::Money => "¤",
        IconRef::Rocket => "➚",
    }
}

/// Render one section at its current animation state
pub fn section_lines(section: &SectionInstance, ctx: &RenderContext) -> Vec<Line<'static>> {
    let mut b = SectionBuilder::new(section, ctx);
    match section.id() {
        SectionId::Hero => b.hero(),
        SectionId::Problem => b.cards(&content::PROBLEMS),
        SectionId::Solution => b.cards(&content::SOLUTIONS),
        SectionId::Features => b.features(),
        SectionId::Technical => b.technical(),
        SectionId::Impact => b.impact(),
        SectionId::Team => b.team(),
        SectionId::Contact => b.contact(),
    }
    b.lines
}

struct SectionBuilder<'a> {
    section: &'a SectionInstance,
    ctx: &'a RenderContext<'a>,
    lines: Vec<Line<'static>>,
}

impl<'a> SectionBuilder<'a> {
    fn new(section: &'a SectionInstance, ctx: &'a RenderContext<'a>) -> Self {
        Self {
            section,
            ctx,
            lines: Vec::new(),
        }
    }

    fn width(&self) -> usize {
        usize::from(self.ctx.width).max(8)
    }

    fn bg(&self) -> Color {
        self.ctx.palette.background
    }

    fn heading_progress(&self) -> f64 {
        self.section.heading_progress(self.ctx.now)
    }

    fn block(&self, index: usize) -> f64 {
        self.section.block_progress(index, self.ctx.now)
    }

    fn fg(&self, color: Color, progress: f64) -> Style {
        Style::default().fg(faded(self.bg(), color, progress))
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Section heading plus subtitle, sharing the heading entrance
    fn header(&mut self) {
        let copy = section_copy(self.section.id());
        let p = self.heading_progress();
        self.blank();
        self.gradient_centered(copy.heading, copy.color, p);
        self.blank();
        self.centered(copy.subtitle, self.ctx.palette.muted, p);
        self.blank();
    }

    fn gradient_centered(&mut self, text: &str, token: ColorToken, progress: f64) {
        let total = text.chars().count();
        for line in wrap_with_offsets(text, self.width().saturating_sub(4)) {
            let spans = gradient_spans(
                &line.text,
                gradient(token),
                self.bg(),
                progress,
                line.start,
                total,
            );
            self.lines.push(Line::from(spans).centered());
        }
    }

    fn centered(&mut self, text: &str, color: Color, progress: f64) {
        let style = self.fg(color, progress);
        for line in wrap(text, self.width().saturating_sub(8)) {
            self.lines.push(Line::styled(line, style).centered());
        }
    }

    /// Icon and bold title, then wrapped body paragraphs
    fn card(&mut self, icon: IconRef, title: &str, token: ColorToken, body: &[&str], progress: f64) {
        let indent = slide_indent(progress);
        let (from, _) = gradient(token);
        let mut head = vec![
            Span::raw(format!("{}{}", CARD_INDENT, indent)),
            Span::styled(
                format!("{} ", icon_glyph(icon)),
                self.fg(from, progress),
            ),
        ];
        let title_len = title.chars().count();
        head.extend(gradient_spans(
            title,
            gradient(token),
            self.bg(),
            progress,
            0,
            title_len,
        ));
        self.lines.push(Line::from(head));

        let style = self.fg(self.ctx.palette.muted, progress);
        let body_width = self.width().saturating_sub(BODY_INDENT.len() + 6);
        for paragraph in body {
            for line in wrap(paragraph, body_width) {
                self.lines.push(Line::from(vec![
                    Span::raw(format!("{}{}", BODY_INDENT, indent)),
                    Span::styled(line, style),
                ]));
            }
        }
        self.blank();
    }

    fn hero(&mut self) {
        let palette = self.ctx.palette;
        let badge = self.block(0);
        self.lines.push(
            Line::styled(
                format!("◆ {}", content::EVENT_BADGE),
                self.fg(palette.accent, badge).add_modifier(Modifier::BOLD),
            )
            .centered(),
        );
        self.blank();
        self.typed_title();
        self.blank();
        let tagline = self.block(1);
        self.centered(content::HERO_TAGLINE, palette.muted, tagline);
        self.blank();

        let actions = self.block(2);
        let mut buttons = Vec::new();
        for (i, (label, icon)) in content::HERO_ACTIONS.iter().enumerate() {
            if i > 0 {
                buttons.push(Span::raw("   "));
            }
            let text = match icon {
                IconRef::Play => format!("[ {} {} ]", icon_glyph(*icon), label),
                _ => format!("[ {} {} ]", label, icon_glyph(*icon)),
            };
            let color = if i == 0 { palette.accent } else { palette.text };
            buttons.push(Span::styled(
                text,
                self.fg(color, actions).add_modifier(Modifier::BOLD),
            ));
        }
        self.lines.push(Line::from(buttons).centered());
        self.blank();
        self.lines.push(Line::styled("↓ scroll to explore", self.fg(palette.muted, actions)).centered());

        let content_rows = self.lines.len();
        let min_rows = usize::from(self.ctx.min_height);
        let spare = min_rows.saturating_sub(content_rows);
        let top = (spare / 2).max(1);
        let mut padded: Vec<Line<'static>> = std::iter::repeat_with(Line::default).take(top).collect();
        padded.append(&mut self.lines);
        padded.extend(std::iter::repeat_with(Line::default).take(spare - spare / 2 + 1));
        self.lines = padded;
    }

    /// The hero title as far as the typewriter has got, with a blinking caret.
    /// Unrevealed characters are blanks so centering does not shift.
    fn typed_title(&mut self) {
        let progress = self.heading_progress();
        let (visible, caret_on) = match self.section.revealer() {
            Some(revealer) => (
                revealer.visible_text().chars().count(),
                revealer.caret_visible(self.ctx.now),
            ),
            None => (HERO_TITLE.chars().count(), false),
        };
        let total = HERO_TITLE.chars().count();
        let wrapped = wrap_with_offsets(HERO_TITLE, self.width().saturating_sub(6));
        let caret_line = wrapped
            .iter()
            .position(|l| visible <= l.start + l.char_len())
            .unwrap_or(wrapped.len().saturating_sub(1));

        for (idx, line) in wrapped.iter().enumerate() {
            let len = line.char_len();
            let shown = visible.saturating_sub(line.start).min(len);
            let revealed: String = line.text.chars().take(shown).collect();
            let mut spans = gradient_spans(
                &revealed,
                gradient(ColorToken::BlueViolet),
                self.bg(),
                progress,
                line.start,
                total,
            );
            let caret = if idx == caret_line && caret_on { CARET } else { " " };
            spans.push(Span::styled(caret, self.fg(self.ctx.palette.accent, progress)));
            let rest: String = line.text.chars().skip(shown).collect();
            spans.push(Span::raw(" ".repeat(rest.width())));
            self.lines.push(Line::from(spans).centered());
        }
    }

    fn cards(&mut self, cards: &[content::ContentCard]) {
        self.header();
        for (i, card) in cards.iter().enumerate() {
            let p = self.block(i);
            self.card(card.icon, card.title, card.color, &[card.description], p);
        }
    }

    fn features(&mut self) {
        self.header();
        for (i, feature) in content::FEATURES.iter().enumerate() {
            let p = self.block(i);
            let details = format!("› {}", feature.details);
            let c = feature.card;
            self.card(c.icon, c.title, c.color, &[c.description, details.as_str()], p);
        }
    }

    fn technical(&mut self) {
        let palette = self.ctx.palette;
        self.header();

        let pipeline = self.block(0);
        self.lines.push(
            Line::styled(
                content::PIPELINE_TITLE,
                self.fg(palette.text, pipeline).add_modifier(Modifier::BOLD),
            )
            .centered(),
        );
        self.centered(&content::PIPELINE_STEPS.join(" → "), palette.accent, pipeline);
        self.blank();

        let columns = (self.width().saturating_sub(CARD_INDENT.len()) / TECH_CELL_WIDTH).max(1);
        for (row, chunk) in content::TECH_STACK.chunks(columns).enumerate() {
            let mut spans = vec![Span::raw(CARD_INDENT)];
            for (col, item) in chunk.iter().enumerate() {
                let p = self.block(1 + row * columns + col);
                let (from, _) = gradient(item.color);
                let cell = format!("{} {}", icon_glyph(item.icon), item.name);
                let pad = TECH_CELL_WIDTH.saturating_sub(cell.width());
                spans.push(Span::styled(
                    format!("{}{}", cell, " ".repeat(pad)),
                    self.fg(from, p).add_modifier(Modifier::BOLD),
                ));
            }
            self.lines.push(Line::from(spans));
        }
        self.blank();

        let panel = self.block(1 + content::TECH_STACK.len());
        self.lines.push(
            Line::styled(
                content::INTEGRATION_TITLE,
                self.fg(palette.text, panel).add_modifier(Modifier::BOLD),
            )
            .centered(),
        );
        self.centered(content::INTEGRATION_SUBTITLE, palette.muted, panel);
        let chips = content::INTEGRATIONS
            .iter()
            .map(|name| format!("[{}]", name))
            .collect::<Vec<_>>()
            .join(" ");
        self.centered(&chips, palette.accent, panel);
        self.blank();
    }

    fn impact(&mut self) {
        self.header();
        let counters = self.section.counters();
        for (i, metric) in content::METRICS.iter().enumerate() {
            let p = self.block(i);
            let value = counters
                .and_then(|group| group.get(i))
                .map(|counter| counter.current())
                .unwrap_or(0);
            // reserve room for the final value so the label does not jump
            let shown = format_metric(value, metric.suffix);
            let final_width = format_metric(metric.target.max(0) as u64, metric.suffix).width();
            let padded = format!("{:>width$}", shown, width = final_width);
            let (from, _) = gradient(metric.color);

            let mut spans = vec![
                Span::raw(format!("{}{}", CARD_INDENT, slide_indent(p))),
                Span::styled(format!("{} ", icon_glyph(metric.icon)), self.fg(from, p)),
            ];
            let len = padded.chars().count();
            spans.extend(gradient_spans(&padded, gradient(metric.color), self.bg(), p, 0, len));
            spans.push(Span::styled(
                format!("  {}", metric.label),
                self.fg(self.ctx.palette.muted, p),
            ));
            self.lines.push(Line::from(spans));
        }
        self.blank();

        let offset = content::METRICS.len();
        for (i, card) in content::IMPACT_HIGHLIGHTS.iter().enumerate() {
            let p = self.block(offset + i);
            self.card(card.icon, card.title, card.color, &[card.description], p);
        }
    }

    fn team(&mut self) {
        self.header();
        let p = self.heading_progress();
        self.lines.push(
            Line::styled(
                format!("◆ {}", content::TEAM_NAME),
                self.fg(self.ctx.palette.accent, p).add_modifier(Modifier::BOLD),
            )
            .centered(),
        );
        self.blank();
        for (i, member) in content::TEAM.iter().enumerate() {
            let p = self.block(i);
            let title = format!("{} · {}", member.name, member.role);
            self.card(member.icon, &title, member.color, &[member.description], p);
        }

        let p = self.block(content::TEAM.len());
        for stat in content::TEAM_STATS.iter() {
            let mut spans = gradient_spans(
                stat.value,
                gradient(ColorToken::BlueViolet),
                self.bg(),
                p,
                0,
                stat.value.chars().count(),
            );
            spans.push(Span::styled(
                format!(" {}", stat.label),
                self.fg(self.ctx.palette.muted, p),
            ));
            self.lines.push(Line::from(spans).centered());
        }
        self.blank();
    }

    fn contact(&mut self) {
        let palette = self.ctx.palette;
        self.header();

        let panel = self.block(0);
        self.gradient_centered(content::CONTACT_TITLE, ColorToken::BlueViolet, panel);
        self.centered(content::CONTACT_PITCH, palette.muted, panel);
        self.blank();
        for item in content::CONTACT_ITEMS.iter() {
            self.lines.push(Line::from(vec![
                Span::raw(format!("{}{}", BODY_INDENT, slide_indent(panel))),
                Span::styled(
                    format!("{} ", icon_glyph(IconRef::CheckCircle)),
                    self.fg(palette.accent, panel),
                ),
                Span::styled(item.to_string(), self.fg(palette.text, panel)),
            ]));
        }
        self.blank();
        self.lines.push(
            Line::styled(
                format!(
                    "{} {} · {}",
                    icon_glyph(IconRef::Trophy),
                    content::EVENT_BADGE,
                    content::COMPETITION_NOTE
                ),
                self.fg(palette.accent, panel).add_modifier(Modifier::BOLD),
            )
            .centered(),
        );
        self.blank();

        for (i, link) in content::SOCIAL_LINKS.iter().enumerate() {
            let p = self.block(1 + i);
            self.lines.push(Line::from(vec![
                Span::raw(format!("{}{}", CARD_INDENT, slide_indent(p))),
                Span::styled(format!("{} ", icon_glyph(link.icon)), self.fg(palette.accent, p)),
                Span::styled(
                    link.label.to_string(),
                    self.fg(palette.text, p).add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
        self.blank();

        let footer = self.block(1 + content::SOCIAL_LINKS.len());
        for line in content::FOOTER.iter() {
            self.centered(line, palette.muted, footer);
        }
        self.blank();
    }
}
