//! The pitch page: one instance per section, indexed by `SectionId`.
//!
//! Each section owns its own visibility detector and entrance timelines.
//! The hero additionally owns the typewriter and the impact section owns the
//! metric counters. Nothing is shared between sections.

use std::time::Instant;

use tracing::debug;

use crate::animation::{
    CounterGroup, Entrance, Region, ScrollMetrics, ScrollProgressTracker, TextRevealer, Viewport,
    ViewportObserver, VisibilityDetector, VisibilityState,
};
use crate::config::AnimationConfig;
use crate::content::{self, HERO_TITLE};
use crate::Result;

pub use crate::content::SectionId;

/// Number of staggered blocks (cards, rows) each section reveals after its heading
pub fn block_count(id: SectionId) -> usize {
    match id {
        // badge, tagline, call-to-action buttons
        SectionId::Hero => 3,
        SectionId::Problem => content::PROBLEMS.len(),
        SectionId::Solution => content::SOLUTIONS.len(),
        SectionId::Features => content::FEATURES.len(),
        // pipeline, tech cards, integration panel
        SectionId::Technical => 1 + content::TECH_STACK.len() + 1,
        SectionId::Impact => content::METRICS.len() + content::IMPACT_HIGHLIGHTS.len(),
        // members, stats row
        SectionId::Team => content::TEAM.len() + 1,
        // mission panel, social links, footer
        SectionId::Contact => 1 + content::SOCIAL_LINKS.len() + 1,
    }
}

/// A visibility change reported by `Page::on_scroll`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub section: SectionId,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct SectionInstance {
    id: SectionId,
    region: Region,
    detector: VisibilityDetector,
    heading: Entrance,
    blocks: Vec<Entrance>,
    revealer: Option<TextRevealer>,
    counters: Option<CounterGroup>,
}

impl SectionInstance {
    fn new(id: SectionId, config: &AnimationConfig) -> Result<Self> {
        let detector = VisibilityDetector::new(config.reveal_threshold, config.trigger_once)?;
        let duration = config.entrance_duration();
        let stagger = config.entrance_stagger();
        let easing = config.entrance_easing;

        let heading = Entrance::new(duration, std::time::Duration::ZERO, easing);
        let blocks = (0..block_count(id) as u32)
            .map(|i| Entrance::staggered(duration, stagger, stagger, i, easing))
            .collect();

        let revealer = match id {
            SectionId::Hero => Some(TextRevealer::new(HERO_TITLE, config.typewriter_interval())?),
            _ => None,
        };
        let counters = match id {
            SectionId::Impact => Some(CounterGroup::new(
                &content::metric_targets(),
                config.counter_duration(),
                config.counter_steps,
            )?),
            _ => None,
        };

        Ok(Self {
            id,
            region: Region::default(),
            detector,
            heading,
            blocks,
            revealer,
            counters,
        })
    }

    fn start_entrance(&mut self, now: Instant) {
        self.heading.start(now);
        for block in &mut self.blocks {
            block.start(now);
        }
    }

    fn reset_entrance(&mut self) {
        self.heading.reset();
        for block in &mut self.blocks {
            block.reset();
        }
    }

    fn on_visibility(&mut self, visible: bool, now: Instant) {
        if visible {
            self.start_entrance(now);
        } else if !self.detector.trigger_once() {
            self.reset_entrance();
        }
        if let Some(counters) = self.counters.as_mut() {
            counters.on_visibility(visible, now);
        }
    }

    fn update(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(revealer) = self.revealer.as_mut() {
            changed |= revealer.update(now).is_some();
        }
        if let Some(counters) = self.counters.as_mut() {
            changed |= counters.update(now);
        }
        changed
    }

    fn teardown(&mut self) {
        self.detector.release();
        if let Some(revealer) = self.revealer.as_mut() {
            revealer.teardown();
        }
        if let Some(counters) = self.counters.as_mut() {
            counters.teardown();
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        let timers = self.revealer.as_ref().is_some_and(TextRevealer::is_active)
            || self.counters.as_ref().is_some_and(CounterGroup::is_running);
        let entering = std::iter::once(&self.heading)
            .chain(self.blocks.iter())
            .any(|e| e.has_started() && !e.is_settled(now));
        timers || entering
    }

    #[inline]
    pub fn id(&self) -> SectionId {
        self.id
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.detector.is_visible()
    }

    #[inline]
    pub fn visibility(&self) -> VisibilityState {
        self.detector.state()
    }

    /// Entrance progress of the section heading, in [0, 1]
    pub fn heading_progress(&self, now: Instant) -> f64 {
        self.heading.progress(now)
    }

    /// Entrance progress of the `index`-th block; out-of-range blocks are fully shown
    pub fn block_progress(&self, index: usize, now: Instant) -> f64 {
        self.blocks
            .get(index)
            .map(|block| block.progress(now))
            .unwrap_or(1.0)
    }

    pub fn revealer(&self) -> Option<&TextRevealer> {
        self.revealer.as_ref()
    }

    pub fn counters(&self) -> Option<&CounterGroup> {
        self.counters.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<SectionInstance>,
    progress: ScrollProgressTracker,
    document_height: u32,
    viewport: Viewport,
    mounted: bool,
    /// Regions are unknown until the first `layout`
    laid_out: bool,
}

impl Page {
    /// Build every section and start the mount-time animations (hero entrance
    /// and typewriter)
    pub fn mount(config: &AnimationConfig, now: Instant) -> Result<Self> {
        let sections = SectionId::ALL
            .iter()
            .map(|&id| SectionInstance::new(id, config))
            .collect::<Result<Vec<_>>>()?;

        let mut page = Self {
            sections,
            progress: ScrollProgressTracker::new(),
            document_height: 0,
            viewport: Viewport::default(),
            mounted: true,
            laid_out: false,
        };

        let hero = page.section_mut(SectionId::Hero);
        hero.start_entrance(now);
        if let Some(revealer) = hero.revealer.as_mut() {
            revealer.start(now);
        }
        debug!("Page mounted with {} sections", page.sections.len());
        Ok(page)
    }

    /// Assign each section its region from rendered heights, in page order
    pub fn layout(&mut self, heights: &[u32; 8]) {
        let mut top = 0u32;
        for (section, &height) in self.sections.iter_mut().zip(heights.iter()) {
            section.region = Region::new(top, height);
            top = top.saturating_add(height);
        }
        self.document_height = top;
        self.laid_out = true;
    }

    /// Scroll notification: recompute progress and feed every detector.
    /// Returns the visibility changes in page order. Before the first
    /// `layout` only progress is tracked.
    pub fn on_scroll(
        &mut self,
        viewport: Viewport,
        observer: &dyn ViewportObserver,
        now: Instant,
    ) -> Vec<VisibilityChange> {
        if !self.mounted {
            return Vec::new();
        }
        self.viewport = viewport;
        self.progress.on_scroll(ScrollMetrics::new(
            f64::from(viewport.offset),
            f64::from(self.document_height),
            f64::from(viewport.height),
        ));
        if !self.laid_out {
            return Vec::new();
        }

        let mut changes = Vec::new();
        for section in &mut self.sections {
            if let Some(visible) = section.detector.observe_region(observer, section.region) {
                section.on_visibility(visible, now);
                debug!(section = ?section.id, visible, "Section visibility changed");
                changes.push(VisibilityChange {
                    section: section.id,
                    visible,
                });
            }
        }
        changes
    }

    /// Advance all timers; returns whether any displayed value changed
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let mut changed = false;
        for section in &mut self.sections {
            changed |= section.update(now);
        }
        changed
    }

    /// Whether any timer or entrance is still in flight
    pub fn is_animating(&self, now: Instant) -> bool {
        self.mounted && self.sections.iter().any(|s| s.is_animating(now))
    }

    /// Release every observation handle and stop every timer
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        for section in &mut self.sections {
            section.teardown();
        }
        self.mounted = false;
        debug!("Page unmounted");
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn section(&self, id: SectionId) -> &SectionInstance {
        &self.sections[id.index()]
    }

    fn section_mut(&mut self, id: SectionId) -> &mut SectionInstance {
        &mut self.sections[id.index()]
    }

    pub fn sections(&self) -> impl Iterator<Item = &SectionInstance> {
        self.sections.iter()
    }

    #[inline]
    pub fn scroll_progress(&self) -> f64 {
        self.progress.current_progress()
    }

    #[inline]
    pub fn document_height(&self) -> u32 {
        self.document_height
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn max_scroll(&self, viewport_height: u32) -> u32 {
        self.document_height.saturating_sub(viewport_height)
    }

    /// Section under the middle row of the viewport
    pub fn current_section(&self) -> SectionId {
        let probe = self.viewport.offset.saturating_add(self.viewport.height / 2);
        self.sections
            .iter()
            .find(|s| probe < s.region.bottom())
            .or_else(|| self.sections.last())
            .map(|s| s.id)
            .unwrap_or(SectionId::Hero)
    }

    /// First row of `id`
    pub fn section_top(&self, id: SectionId) -> u32 {
        self.section(id).region.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::UnsupportedObserver;
    use std::time::Duration;

    const HEIGHTS: [u32; 8] = [30, 20, 20, 20, 30, 25, 30, 25];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mounted(t0: Instant) -> Page {
        let mut page = Page::mount(&AnimationConfig::default(), t0).unwrap();
        page.layout(&HEIGHTS);
        page
    }

    fn scroll_to(page: &mut Page, offset: u32, now: Instant) -> Vec<VisibilityChange> {
        let viewport = Viewport::new(offset, 30);
        page.on_scroll(viewport, &viewport, now)
    }

    #[test]
    fn test_layout_stacks_regions() {
        let page = mounted(Instant::now());
        assert_eq!(page.document_height(), 200);
        assert_eq!(page.section(SectionId::Problem).region(), Region::new(30, 20));
        assert_eq!(page.section_top(SectionId::Impact), 120);
    }

    #[test]
    fn test_hero_types_from_mount() {
        let t0 = Instant::now();
        let mut page = mounted(t0);
        let hero = page.section(SectionId::Hero);
        assert_eq!(hero.revealer().unwrap().visible_text(), "");
        assert!(hero.heading_progress(t0 + ms(800)) > 0.99);

        assert!(page.update(t0 + ms(100)));
        assert_eq!(
            page.section(SectionId::Hero).revealer().unwrap().visible_text(),
            "Gy"
        );
    }

    #[test]
    fn test_scroll_before_layout_reveals_nothing() {
        let t0 = Instant::now();
        let mut page = Page::mount(&AnimationConfig::default(), t0).unwrap();
        assert!(scroll_to(&mut page, 0, t0).is_empty());
        assert!(page.sections().all(|s| !s.is_visible()));

        page.update(t0 + ms(2_000));
        let counters = page.section(SectionId::Impact).counters().unwrap();
        assert_eq!(counters.values(), vec![0, 0, 0, 0]);

        page.layout(&HEIGHTS);
        let changes = scroll_to(&mut page, 0, t0 + ms(2_000));
        let revealed: Vec<_> = changes.iter().map(|c| c.section).collect();
        assert_eq!(revealed, vec![SectionId::Hero]);
        assert!(!page.section(SectionId::Impact).is_visible());
    }

    #[test]
    fn test_initial_scroll_reveals_only_top_sections() {
        let t0 = Instant::now();
        let mut page = mounted(t0);
        let changes = scroll_to(&mut page, 0, t0);
        let revealed: Vec<_> = changes.iter().map(|c| c.section).collect();
        assert_eq!(revealed, vec![SectionId::Hero]);
        assert!(!page.section(SectionId::Impact).is_visible());
        assert_eq!(page.scroll_progress(), 0.0);
    }

    #[test]
    fn test_counters_wait_for_impact_section() {
        let t0 = Instant::now();
        let mut page = mounted(t0);
        scroll_to(&mut page, 0, t0);
        page.update(t0 + ms(3_000));
        let counters = page.section(SectionId::Impact).counters().unwrap();
        assert_eq!(counters.values(), vec![0, 0, 0, 0]);

        // Impact spans rows 120..145; 3 rows of 25 is above the 10% threshold
        let t1 = t0 + ms(3_000);
        let changes = scroll_to(&mut page, 93, t1);
        assert!(changes.contains(&VisibilityChange {
            section: SectionId::Impact,
            visible: true
        }));

        page.update(t1 + ms(2_000));
        let counters = page.section(SectionId::Impact).counters().unwrap();
        assert_eq!(counters.values(), vec![500_000, 80, 22, 95]);
    }

    #[test]
    fn test_scrolling_away_and_back_does_not_restart_counters() {
        let t0 = Instant::now();
        let mut page = mounted(t0);
        scroll_to(&mut page, 140, t0);
        page.update(t0 + ms(2_000));

        scroll_to(&mut page, 0, t0 + ms(2_100));
        scroll_to(&mut page, 140, t0 + ms(2_200));
        page.update(t0 + ms(2_300));
        let counters = page.section(SectionId::Impact).counters().unwrap();
        assert!(!counters.is_running());
        assert_eq!(counters.values(), vec![500_000, 80, 22, 95]);
        assert!(page.section(SectionId::Impact).is_visible());
    }

    #[test]
    fn test_progress_follows_scroll() {
        let t0 = Instant::now();
        let mut page = mounted(t0);
        scroll_to(&mut page, 85, t0);
        assert!((page.scroll_progress() - 0.5).abs() < 1e-9);
        scroll_to(&mut page, 170, t0);
        assert_eq!(page.scroll_progress(), 1.0);
        assert_eq!(page.current_section(), SectionId::Contact);
    }

    #[test]
    fn test_entrance_blocks_are_staggered() {
        let t0 = Instant::now();
        let mut page = mounted(t0);
        scroll_to(&mut page, 30, t0);
        let problem = page.section(SectionId::Problem);
        let at = t0 + ms(300);
        assert!(problem.heading_progress(at) > 0.0);
        assert!(problem.block_progress(0, at) > 0.0);
        assert_eq!(problem.block_progress(2, at), 0.0);
        assert_eq!(problem.block_progress(99, at), 1.0);
        assert!(page.is_animating(at));
    }

    #[test]
    fn test_continuous_mode_replays_entrance() {
        let t0 = Instant::now();
        let config = AnimationConfig {
            trigger_once: false,
            ..Default::default()
        };
        let mut page = Page::mount(&config, t0).unwrap();
        page.layout(&HEIGHTS);
        scroll_to(&mut page, 30, t0);
        assert!(page.section(SectionId::Problem).heading_progress(t0 + ms(900)) > 0.99);

        let changes = scroll_to(&mut page, 170, t0 + ms(1_000));
        assert!(changes.contains(&VisibilityChange {
            section: SectionId::Problem,
            visible: false
        }));
        assert_eq!(
            page.section(SectionId::Problem).heading_progress(t0 + ms(1_100)),
            0.0
        );
    }

    #[test]
    fn test_unmount_stops_every_timer() {
        let t0 = Instant::now();
        let mut page = mounted(t0);
        scroll_to(&mut page, 140, t0);
        page.update(t0 + ms(500));

        let hero_text = page
            .section(SectionId::Hero)
            .revealer()
            .unwrap()
            .visible_text()
            .to_string();
        let values = page.section(SectionId::Impact).counters().unwrap().values();

        page.unmount();
        assert!(!page.update(t0 + ms(60_000)));
        assert!(scroll_to(&mut page, 0, t0 + ms(60_000)).is_empty());
        assert!(!page.is_animating(t0 + ms(60_000)));

        assert_eq!(
            page.section(SectionId::Hero).revealer().unwrap().visible_text(),
            hero_text
        );
        assert_eq!(page.section(SectionId::Impact).counters().unwrap().values(), values);
    }

    #[test]
    fn test_unsupported_observation_shows_everything() {
        let t0 = Instant::now();
        let mut page = mounted(t0);
        let changes = page.on_scroll(Viewport::new(0, 30), &UnsupportedObserver, t0);
        assert_eq!(changes.len(), 8);
        assert!(page.sections().all(SectionInstance::is_visible));
    }

    #[test]
    fn test_invalid_config_rejected_at_mount() {
        let config = AnimationConfig {
            counter_steps: 0,
            ..Default::default()
        };
        assert!(Page::mount(&config, Instant::now()).is_err());
    }
}
