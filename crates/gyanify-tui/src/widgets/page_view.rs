use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Paragraph},
    Frame,
};

use gyanify_core::Page;

use super::sections::{section_lines, RenderContext};
use crate::app::App;

/// Section heights in page order, as fed to `Page::layout`
pub fn measure(page: &Page, ctx: &RenderContext) -> [u32; 8] {
    let mut heights = [0u32; 8];
    for (slot, section) in heights.iter_mut().zip(page.sections()) {
        *slot = section_lines(section, ctx).len() as u32;
    }
    heights
}

/// Every section's lines, top to bottom
pub fn document_lines(page: &Page, ctx: &RenderContext) -> Vec<Line<'static>> {
    page.sections()
        .flat_map(|section| section_lines(section, ctx))
        .collect()
}

pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, ctx: &RenderContext) {
        let style = Style::default()
            .bg(ctx.palette.background)
            .fg(ctx.palette.text);
        frame.render_widget(Block::default().style(style), area);

        let paragraph = Paragraph::new(Text::from(document_lines(&app.page, ctx)))
            .style(style)
            .scroll((app.scroller.current(), 0));
        frame.render_widget(paragraph, area);
    }
}
