//! # Compass Session
//!
//! Controller for the compass page. Owns the document, the provider list
//! with overrides applied, the category filter, the slider position and the
//! access mode. Every render is a full recompute from that state:
//!
//! ```text
//! providers ─▶ filter ─▶ score(slider) ─▶ rank ─▶ chart / results / legend
//! ```
//!
//! Slider input is coalesced through a [`FrameScheduler`]; category toggles
//! and storage events re-render immediately.

use std::sync::mpsc::Receiver;

use scc_core::dataset::legend;
use scc_core::{
    anonymize, apply_overrides, base_providers, rank_providers, scoring::strategy_text, CategoryFilter,
    OverrideMap, Provider, ProviderCategory, RankedProvider, SliderValue,
};
use scc_render::{ids, Document};
use scc_store::{keys, StorageEvent, StorageManager};

use crate::access::AccessMode;
use crate::config::CompassConfig;
use crate::frame::FrameScheduler;
use crate::theme::{Theme, ThemeManager};

/// Key name that closes open panels.
pub const ESCAPE_KEY: &str = "Escape";

/// State and rendering for one compass page.
#[derive(Debug)]
pub struct CompassSession {
    doc: Document,
    storage: StorageManager,
    events: Option<Receiver<StorageEvent>>,
    base: Vec<Provider>,
    providers: Vec<Provider>,
    overrides: OverrideMap,
    filter: CategoryFilter,
    slider: SliderValue,
    mode: AccessMode,
    theme: ThemeManager,
    frames: FrameScheduler<SliderValue>,
    results_limit: usize,
    selected: Option<String>,
    render_count: u64,
}

impl CompassSession {
    /// Build the page from the dataset and stored overrides, and render it.
    pub fn new(storage: StorageManager, mode: AccessMode, config: &CompassConfig) -> Self {
        Self::with_providers(base_providers(), storage, mode, config)
    }

    /// Build the page over an explicit provider list.
    pub fn with_providers(
        base: Vec<Provider>,
        storage: StorageManager,
        mode: AccessMode,
        config: &CompassConfig,
    ) -> Self {
        let overrides = storage.load_custom_scores();
        let providers = apply_overrides(&base, &overrides);
        let theme = ThemeManager::load(storage.clone());
        let mut session = Self {
            doc: scc_render::compass_page(),
            storage,
            events: None,
            base,
            providers,
            overrides,
            filter: CategoryFilter::all(),
            slider: config.initial_slider,
            mode,
            theme,
            frames: FrameScheduler::new(),
            results_limit: config.results_limit,
            selected: None,
            render_count: 0,
        };
        scc_render::apply_theme(&mut session.doc, session.theme.current().as_str());
        tracing::info!(
            providers = session.providers.len(),
            overrides = session.overrides.len(),
            mode = %mode,
            "compass session started"
        );
        session.render();
        session
    }

    /// Attach a receiver of change notifications from other handles.
    pub fn listen(&mut self, events: Receiver<StorageEvent>) {
        self.events = Some(events);
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Serialized page.
    pub fn html(&self) -> String {
        self.doc.to_html()
    }

    pub fn slider(&self) -> SliderValue {
        self.slider
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Providers with overrides applied, real names.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn overrides(&self) -> &OverrideMap {
        &self.overrides
    }

    /// Completed renders since the session started.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Whether slider input is waiting for a frame.
    pub fn frame_pending(&self) -> bool {
        self.frames.is_pending()
    }

    /// Providers as displayed in the current mode.
    pub fn display_providers(&self) -> Vec<Provider> {
        if self.mode.anonymized() {
            anonymize(&self.providers)
        } else {
            self.providers.clone()
        }
    }

    /// The current ranking.
    pub fn ranked(&self) -> Vec<RankedProvider> {
        rank_providers(&self.display_providers(), self.slider, &self.filter)
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Slider moved. The render happens at the next [`animation_frame`].
    ///
    /// [`animation_frame`]: Self::animation_frame
    pub fn slider_input(&mut self, raw: i64) {
        self.frames.request(SliderValue::clamped(raw));
    }

    /// Run the pending frame, if any. Returns whether it rendered.
    pub fn animation_frame(&mut self) -> bool {
        let Some((_, slider)) = self.frames.take() else {
            return false;
        };
        self.slider = slider;
        self.render();
        true
    }

    /// Flip one category filter and re-render.
    pub fn toggle_category(&mut self, category: ProviderCategory) -> bool {
        let enabled = self.filter.toggle(category);
        tracing::debug!(category = category.as_str(), enabled, "category toggled");
        self.render();
        enabled
    }

    /// Set one category filter and re-render.
    pub fn set_category_enabled(&mut self, category: ProviderCategory, enabled: bool) {
        self.filter.set_enabled(category, enabled);
        self.render();
    }

    /// Replace the whole category filter and re-render.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.render();
    }

    /// Switch the access mode and re-render names, legend and panel.
    pub fn set_mode(&mut self, mode: AccessMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.render();
    }

    /// Toggle the color theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        scc_render::apply_theme(&mut self.doc, theme.as_str());
        theme
    }

    /// Open the detail panel for a provider id.
    ///
    /// Unknown ids open the panel with the no-data placeholder.
    pub fn select_provider(&mut self, id: &str) -> bool {
        self.selected = Some(id.to_string());
        self.refresh_panel()
    }

    /// Close the detail panel.
    pub fn close_panel(&mut self) {
        self.selected = None;
        scc_render::close_sov_panel(&mut self.doc);
    }

    /// Keyboard input. Escape closes the detail panel.
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && scc_render::results::sov_panel_visible(&self.doc) {
            self.close_panel();
            return true;
        }
        false
    }

    // ── Storage ─────────────────────────────────────────────────────────

    /// React to a change made by another tab.
    pub fn on_storage_event(&mut self, event: &StorageEvent) -> bool {
        let mut changed = false;
        if event.affects(keys::CUSTOM_SCORES) {
            self.overrides = self.storage.load_custom_scores();
            self.providers = apply_overrides(&self.base, &self.overrides);
            tracing::info!(overrides = self.overrides.len(), "custom scores changed in another tab");
            changed = true;
        }
        if event.affects(keys::THEME) {
            self.theme = ThemeManager::load(self.storage.clone());
            scc_render::apply_theme(&mut self.doc, self.theme.current().as_str());
        }
        if changed {
            self.render();
        }
        changed
    }

    /// Drain pending notifications from [`listen`](Self::listen). Returns
    /// how many were handled.
    pub fn poll_storage_events(&mut self) -> usize {
        let Some(events) = self.events.as_ref() else {
            return 0;
        };
        let pending: Vec<StorageEvent> = events.try_iter().collect();
        for event in &pending {
            self.on_storage_event(event);
        }
        pending.len()
    }

    // ── Rendering ───────────────────────────────────────────────────────

    /// Recompute and redraw the whole page.
    pub fn render(&mut self) {
        let display = self.display_providers();
        let ranked = rank_providers(&display, self.slider, &self.filter);

        scc_render::render_chart(&mut self.doc, ids::CHART, &ranked);
        scc_render::render_results(&mut self.doc, ids::RESULTS_GRID, &ranked, self.results_limit);
        scc_render::render_legend(&mut self.doc, ids::LEGEND_GRID, &legend(&display));
        scc_render::results::render_strategy(&mut self.doc, &strategy_text(self.slider), self.slider.value());
        scc_render::render_category_filters(&mut self.doc, &self.filter);
        scc_render::render_access_mode(&mut self.doc, self.mode.label());
        if self.selected.is_some() {
            self.refresh_panel();
        }

        self.render_count += 1;
        tracing::debug!(
            slider = self.slider.value(),
            shown = ranked.len(),
            render = self.render_count,
            "compass rendered"
        );
    }

    fn refresh_panel(&mut self) -> bool {
        let display = self.display_providers();
        let provider = self
            .selected
            .as_deref()
            .and_then(|id| display.iter().find(|p| p.id.as_str() == id));
        scc_render::open_sov_panel(&mut self.doc, provider)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use scc_render::chart::MARKER_CLASS;
    use scc_store::MemoryStore;

    use super::*;

    fn session(mode: AccessMode) -> CompassSession {
        let storage = StorageManager::new(Arc::new(MemoryStore::new()));
        CompassSession::new(storage, mode, &CompassConfig::default())
    }

    fn markers(session: &CompassSession) -> usize {
        session
            .document()
            .get(ids::CHART)
            .map_or(0, |c| c.find_by_class(MARKER_CLASS).len())
    }

    #[test]
    fn initial_render_shows_every_provider() {
        let s = session(AccessMode::Full);
        assert_eq!(s.render_count(), 1);
        assert_eq!(markers(&s), 14);
        assert_eq!(s.document().get(ids::RESULTS_GRID).unwrap().child_elements().count(), 8);
        assert_eq!(
            s.document().get(ids::VALUE_DISPLAY).unwrap().text_content(),
            "Balanced (50:50)"
        );
    }

    #[test]
    fn slider_input_waits_for_frame() {
        let mut s = session(AccessMode::Full);
        s.slider_input(0);
        assert!(s.frame_pending());
        assert_eq!(s.render_count(), 1);
        assert_eq!(s.slider().value(), 50);

        assert!(s.animation_frame());
        assert_eq!(s.render_count(), 2);
        assert_eq!(s.slider().value(), 0);
        assert!(!s.animation_frame());
    }

    #[test]
    fn slider_input_is_clamped() {
        let mut s = session(AccessMode::Full);
        s.slider_input(250);
        s.animation_frame();
        assert_eq!(s.slider(), SliderValue::PERFORMANCE);
    }

    #[test]
    fn category_toggle_renders_immediately() {
        let mut s = session(AccessMode::Full);
        assert!(!s.toggle_category(ProviderCategory::Hyperscaler));
        assert_eq!(s.render_count(), 2);
        assert_eq!(markers(&s), 10);
        let checkbox = s
            .document()
            .get(&ids::category_filter(ProviderCategory::Hyperscaler))
            .unwrap();
        assert_eq!(checkbox.attr("checked"), None);
    }

    #[test]
    fn disabling_everything_empties_the_page() {
        let mut s = session(AccessMode::Full);
        for c in ProviderCategory::all() {
            s.set_category_enabled(*c, false);
        }
        assert!(s.ranked().is_empty());
        assert_eq!(markers(&s), 0);
        assert_eq!(s.document().get(ids::RESULTS_GRID).unwrap().child_elements().count(), 0);
    }

    #[test]
    fn public_mode_hides_names() {
        let s = session(AccessMode::Public);
        let html = s.html();
        assert!(!html.contains("OpenStack Private Cloud"));
        assert!(html.contains("H1"));
        assert!(html.contains("Public mode"));
    }

    #[test]
    fn switching_mode_restores_names() {
        let mut s = session(AccessMode::Public);
        s.set_mode(AccessMode::Full);
        assert!(s.html().contains("OpenStack Private Cloud"));
    }

    #[test]
    fn panel_opens_and_escape_closes() {
        let mut s = session(AccessMode::Full);
        assert!(s.select_provider("stackit"));
        assert!(scc_render::results::sov_panel_visible(s.document()));
        assert!(s.key_down(ESCAPE_KEY));
        assert!(!scc_render::results::sov_panel_visible(s.document()));
        assert!(!s.key_down(ESCAPE_KEY));
    }

    #[test]
    fn unknown_provider_shows_placeholder() {
        let mut s = session(AccessMode::Full);
        assert!(s.select_provider("nope"));
        let content = s.document().get(ids::SOV_PANEL_CONTENT).unwrap().text_content();
        assert_eq!(content, scc_render::results::NO_SOV_DATA);
    }

    #[test]
    fn theme_toggle_updates_root() {
        let mut s = session(AccessMode::Full);
        assert_eq!(s.toggle_theme(), Theme::Dark);
        assert_eq!(s.document().root().attr("data-theme"), Some("dark"));
    }
}
