use std::time::Instant;

use anyhow::Result;
use tracing::{debug, warn};

use gyanify_core::animation::Viewport;
use gyanify_core::{AppConfig, Page, SectionId, ThemeState};

use crate::scroll::PageScroller;
use crate::theme::Palette;
use crate::widgets::{measure, RenderContext};

/// Runtime state of the pitch page viewer
pub struct App {
    pub config: AppConfig,
    pub page: Page,
    pub theme: ThemeState,
    pub palette: Palette,
    pub scroller: PageScroller,
    /// Size of the page column the document was last laid out for
    pub body_width: u16,
    pub body_height: u16,
    pub should_quit: bool,
    /// First key of a two-key sequence (`gg`)
    pub pending_key: Option<char>,
    pub status_message: Option<String>,
    /// Offset the page last heard about
    notified_offset: Option<u16>,
}

impl App {
    /// Mount the page; the hero entrance and typewriter start at `now`
    pub fn new(config: AppConfig, theme: ThemeState, now: Instant) -> Result<Self> {
        let page = Page::mount(&config.animation, now)?;
        let palette = Palette::load(theme.mode(), &config.ui.theme_colors);
        let scroller = PageScroller::new(config.ui.scroll.clone());
        Ok(Self {
            config,
            page,
            theme,
            palette,
            scroller,
            body_width: 0,
            body_height: 0,
            should_quit: false,
            pending_key: None,
            status_message: None,
            notified_offset: None,
        })
    }

    pub fn render_context(&self, now: Instant) -> RenderContext<'_> {
        RenderContext {
            palette: &self.palette,
            width: self.body_width,
            min_height: self.body_height,
            now,
        }
    }

    /// Re-measure every section when the page column changes size
    pub fn ensure_layout(&mut self, width: u16, height: u16, now: Instant) {
        if width == self.body_width && height == self.body_height && self.page.document_height() > 0 {
            return;
        }
        self.body_width = width;
        self.body_height = height;
        let heights = measure(&self.page, &self.render_context(now));
        self.page.layout(&heights);
        debug!(width, height, document = self.page.document_height(), "Page laid out");

        self.scroller.clamp_to(self.max_scroll());
        self.notify_scroll(now);
    }

    pub fn max_scroll(&self) -> u16 {
        let max = self.page.max_scroll(u32::from(self.body_height));
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    /// Advance the scroll animation and every page timer. Returns whether
    /// anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let offset = self.scroller.update(self.max_scroll(), now);
        let moved = self.notified_offset != Some(offset);
        if moved {
            self.notify_scroll(now);
        }
        let timers = self.page.update(now);
        timers || moved
    }

    /// Whether the event loop should poll at the animation frame rate
    pub fn needs_animation(&self, now: Instant) -> bool {
        self.scroller.needs_update() || self.page.is_animating(now)
    }

    /// Hand the current viewport to the page so visibility and progress follow
    fn notify_scroll(&mut self, now: Instant) {
        let offset = self.scroller.current();
        self.notified_offset = Some(offset);
        let viewport = Viewport::new(u32::from(offset), u32::from(self.body_height));
        for change in self.page.on_scroll(viewport, &viewport, now) {
            debug!(section = change.section.label(), visible = change.visible, "Visibility");
        }
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    pub fn scroll_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.line_down(max);
    }

    pub fn scroll_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.line_up(max);
    }

    /// Mouse wheel notches, three rows each
    pub fn scroll_wheel(&mut self, notches: i32) {
        let max = self.max_scroll();
        self.scroller.scroll_by(notches * 3, max);
    }

    pub fn scroll_half_page_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.half_page_down(self.body_height, max);
    }

    pub fn scroll_half_page_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.half_page_up(self.body_height, max);
    }

    pub fn scroll_page_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.page_down(self.body_height, max);
    }

    pub fn scroll_page_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.page_up(self.body_height, max);
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        let max = self.max_scroll();
        self.scroller.scroll_to(0, max, now);
    }

    pub fn jump_to_bottom(&mut self, now: Instant) {
        let max = self.max_scroll();
        self.scroller.scroll_to(max, max, now);
    }

    /// Scroll so `id` starts at the top of the view
    pub fn jump_to_section(&mut self, id: SectionId, now: Instant) {
        let top = u16::try_from(self.page.section_top(id)).unwrap_or(u16::MAX);
        let max = self.max_scroll();
        self.scroller.scroll_to(top, max, now);
    }

    pub fn next_section(&mut self, now: Instant) {
        let current = self.section_at_target();
        if let Some(&next) = SectionId::ALL.get(current.index() + 1) {
            self.jump_to_section(next, now);
        } else {
            self.jump_to_bottom(now);
        }
    }

    /// Back to the start of the current section, or the previous one when
    /// already there
    pub fn prev_section(&mut self, now: Instant) {
        let target = u32::from(self.scroller.target());
        let current = self.section_at_target();
        if target > self.page.section_top(current) {
            self.jump_to_section(current, now);
        } else if current.index() > 0 {
            self.jump_to_section(SectionId::ALL[current.index() - 1], now);
        }
    }

    /// Section containing the row the scroller is heading to
    fn section_at_target(&self) -> SectionId {
        let target = u32::from(self.scroller.target());
        self.page
            .sections()
            .filter(|s| s.region().top <= target)
            .last()
            .map(|s| s.id())
            .unwrap_or(SectionId::Hero)
    }

    /// Flip between light and dark. A failed write is reported in the status
    /// bar; the new theme stays in effect either way.
    pub fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(mode) => {
                self.status_message = Some(format!("Theme: {}", mode));
            }
            Err(e) => {
                warn!("Failed to persist theme: {}", e);
                self.status_message = Some(format!(
                    "Theme: {} (not saved: {})",
                    self.theme.mode(),
                    e
                ));
            }
        }
        self.palette = Palette::load(self.theme.mode(), &self.config.ui.theme_colors);
    }

    /// Stop every timer and release every observation
    pub fn shutdown(&mut self) {
        self.scroller.cancel();
        self.page.unmount();
    }
}
