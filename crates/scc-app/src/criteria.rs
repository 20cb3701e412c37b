//! # Criteria Session
//!
//! Controller for the criteria page: the three score tables, the edit
//! modal that writes overrides, and the two-step reset. Tables always show
//! effective scores (override when present, else the dataset value).

use std::cmp::Reverse;
use std::sync::mpsc::Receiver;

use scc_core::overrides::{effective, sanitize_score_str};
use scc_core::{base_providers, OverrideMap, Provider, ScoreOverride};
use scc_render::criteria::{
    self as view, ScoreRow, ScoreTable, EDIT_CONTROL_INPUT, EDIT_PERFORMANCE_INPUT,
};
use scc_render::Document;
use scc_store::{keys, StorageEvent, StorageManager};

use crate::theme::{Theme, ThemeManager};

/// Toast shown after a successful save.
pub const SAVED_MESSAGE: &str = "Provider scores saved.";
/// Toast shown after a reset.
pub const RESET_MESSAGE: &str = "All customizations were reset.";

/// Score input of the edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Control,
    Performance,
}

impl EditField {
    fn input_id(self) -> &'static str {
        match self {
            Self::Control => EDIT_CONTROL_INPUT,
            Self::Performance => EDIT_PERFORMANCE_INPUT,
        }
    }

    fn value_id(self) -> &'static str {
        match self {
            Self::Control => "controlValue",
            Self::Performance => "performanceValue",
        }
    }
}

/// State and rendering for the criteria page.
#[derive(Debug)]
pub struct CriteriaSession {
    doc: Document,
    storage: StorageManager,
    events: Option<Receiver<StorageEvent>>,
    providers: Vec<Provider>,
    overrides: OverrideMap,
    theme: ThemeManager,
    editing: Option<String>,
}

impl CriteriaSession {
    /// Build the page from the dataset and stored overrides, and render it.
    pub fn new(storage: StorageManager) -> Self {
        let overrides = storage.load_custom_scores();
        let theme = ThemeManager::load(storage.clone());
        let mut session = Self {
            doc: scc_render::criteria_page(),
            storage,
            events: None,
            providers: base_providers(),
            overrides,
            theme,
            editing: None,
        };
        scc_render::apply_theme(&mut session.doc, session.theme.current().as_str());
        view::render_reference_sections(&mut session.doc);
        session.render_tables();
        session
    }

    /// Attach a receiver of change notifications from other handles.
    pub fn listen(&mut self, events: Receiver<StorageEvent>) {
        self.events = Some(events);
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Serialized page.
    pub fn html(&self) -> String {
        self.doc.to_html()
    }

    pub fn overrides(&self) -> &OverrideMap {
        &self.overrides
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Id of the provider in the edit modal.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    // ── Effective scores ────────────────────────────────────────────────

    /// Effective control score; 0 for unknown ids.
    pub fn effective_control(&self, id: &str) -> u8 {
        self.provider(id)
            .map_or(0, |p| effective_scores(p, &self.overrides).0)
    }

    /// Effective performance score; 0 for unknown ids.
    pub fn effective_performance(&self, id: &str) -> u8 {
        self.provider(id)
            .map_or(0, |p| effective_scores(p, &self.overrides).1)
    }

    fn provider(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id.as_str() == id)
    }

    /// Rows of one table in display order.
    pub fn table_rows(&self, table: ScoreTable) -> Vec<ScoreRow<'_>> {
        table_rows(&self.providers, &self.overrides, table)
    }

    /// Redraw the three tables and the reset button.
    pub fn render_tables(&mut self) {
        for table in [ScoreTable::Control, ScoreTable::Performance, ScoreTable::Details] {
            let rows = table_rows(&self.providers, &self.overrides, table);
            view::render_score_table(&mut self.doc, table, &rows);
        }
        view::set_reset_button_visible(&mut self.doc, !self.overrides.is_empty());
    }

    // ── Edit modal ──────────────────────────────────────────────────────

    /// Open the edit modal pre-filled with effective scores. Unknown ids
    /// are ignored.
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(provider) = self.provider(id).cloned() else {
            tracing::warn!(provider = id, "edit requested for unknown provider");
            return false;
        };
        let control = self.effective_control(id);
        let performance = self.effective_performance(id);
        if !view::open_edit_modal(&mut self.doc, &provider, control, performance) {
            return false;
        }
        self.editing = Some(id.to_string());
        true
    }

    /// Type into one of the modal inputs.
    pub fn edit_input(&mut self, field: EditField, raw: &str) {
        if let Some(input) = self.doc.require_mut(field.input_id()) {
            input.set_attr("value", raw);
        }
        if let Some(display) = self.doc.get_mut(field.value_id()) {
            display.set_text(raw);
        }
    }

    /// Save the modal inputs as the provider's override.
    ///
    /// Both fields are written; each is sanitized into 0..=100. Returns
    /// whether an override was recorded.
    pub fn save_edit(&mut self) -> bool {
        let Some(id) = self.editing.clone() else {
            return false;
        };
        let raw = |doc: &Document, field: EditField| {
            doc.get(field.input_id())
                .map(|e| e.attr("value").unwrap_or_default().to_string())
        };
        let (Some(control), Some(performance)) = (
            raw(&self.doc, EditField::Control),
            raw(&self.doc, EditField::Performance),
        ) else {
            tracing::error!("score inputs not found");
            return false;
        };

        let value = ScoreOverride::both(sanitize_score_str(&control), sanitize_score_str(&performance));
        tracing::info!(provider = %id, control = ?value.control, performance = ?value.performance, "saving override");
        self.overrides.insert(id, value);
        self.storage.save_custom_scores(&self.overrides);

        self.close_edit();
        self.render_tables();
        view::show_toast(&mut self.doc, SAVED_MESSAGE);
        true
    }

    /// Close the modal without saving.
    pub fn close_edit(&mut self) {
        self.editing = None;
        view::close_edit_modal(&mut self.doc);
    }

    // ── Reset ───────────────────────────────────────────────────────────

    /// First reset step: ask for confirmation.
    pub fn request_reset(&mut self) {
        view::set_reset_confirmation_visible(&mut self.doc, true);
    }

    /// Dismiss the confirmation.
    pub fn cancel_reset(&mut self) {
        view::set_reset_confirmation_visible(&mut self.doc, false);
    }

    /// Drop every override and remove the stored key.
    pub fn confirm_reset(&mut self) {
        let cleared = self.overrides.len();
        self.overrides.clear();
        self.storage.clear_custom_scores();
        tracing::info!(cleared, "custom scores reset");

        self.render_tables();
        view::set_reset_confirmation_visible(&mut self.doc, false);
        view::show_toast(&mut self.doc, RESET_MESSAGE);
    }

    // ── Theme & storage ─────────────────────────────────────────────────

    /// Toggle the color theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        scc_render::apply_theme(&mut self.doc, theme.as_str());
        theme
    }

    /// React to a change made by another tab.
    pub fn on_storage_event(&mut self, event: &StorageEvent) -> bool {
        if event.affects(keys::THEME) {
            self.theme = ThemeManager::load(self.storage.clone());
            scc_render::apply_theme(&mut self.doc, self.theme.current().as_str());
        }
        if !event.affects(keys::CUSTOM_SCORES) {
            return false;
        }
        self.overrides = self.storage.load_custom_scores();
        self.render_tables();
        true
    }

    /// Drain pending notifications. Returns how many were handled.
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
}

fn effective_scores(provider: &Provider, overrides: &OverrideMap) -> (u8, u8) {
    let o = overrides.for_provider(provider);
    (
        effective(provider.control, o.and_then(|o| o.control)),
        effective(provider.performance, o.and_then(|o| o.performance)),
    )
}

fn table_rows<'a>(providers: &'a [Provider], overrides: &OverrideMap, table: ScoreTable) -> Vec<ScoreRow<'a>> {
    let mut rows: Vec<ScoreRow<'a>> = providers
        .iter()
        .map(|provider| {
            let (control, performance) = effective_scores(provider, overrides);
            ScoreRow {
                provider,
                control,
                performance,
                custom: overrides.for_provider(provider).is_some(),
            }
        })
        .collect();
    match table {
        ScoreTable::Control => rows.sort_by_key(|r| Reverse(r.control)),
        ScoreTable::Performance => rows.sort_by_key(|r| Reverse(r.performance)),
        ScoreTable::Details => rows.sort_by_cached_key(|r| r.provider.name.to_lowercase()),
    }
    rows
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use scc_render::ids;
    use scc_store::{KeyValueStore, MemoryStore};

    use super::*;

    fn session() -> (CriteriaSession, MemoryStore) {
        let store = MemoryStore::new();
        let s = CriteriaSession::new(StorageManager::new(Arc::new(store.clone())));
        (s, store)
    }

    fn first_row_id(s: &CriteriaSession, table: ScoreTable) -> String {
        s.table_rows(table)[0].provider.id.as_str().to_string()
    }

    #[test]
    fn tables_are_ordered() {
        let (s, _) = session();
        assert_eq!(first_row_id(&s, ScoreTable::Control), "openstack-private-cloud");

        let perf: Vec<u8> = s.table_rows(ScoreTable::Performance).iter().map(|r| r.performance).collect();
        assert!(perf.windows(2).all(|w| w[0] >= w[1]));

        let names: Vec<String> = s
            .table_rows(ScoreTable::Details)
            .iter()
            .map(|r| r.provider.name.to_lowercase())
            .collect();
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn unknown_provider_is_ignored() {
        let (mut s, _) = session();
        assert!(!s.open_edit("nope"));
        assert!(!view::edit_modal_visible(s.document()));
        assert_eq!(s.effective_control("nope"), 0);
        assert_eq!(s.effective_performance("nope"), 0);
    }

    #[test]
    fn edit_prefills_effective_scores() {
        let (mut s, _) = session();
        assert!(s.open_edit("stackit"));
        let input = s.document().get(EDIT_CONTROL_INPUT).unwrap();
        assert_eq!(input.attr("value"), Some("90"));
        assert_eq!(s.editing(), Some("stackit"));
    }

    #[test]
    fn save_sanitizes_and_persists() {
        let (mut s, store) = session();
        s.open_edit("aws");
        s.edit_input(EditField::Control, "150");
        s.edit_input(EditField::Performance, "42abc");
        assert!(s.save_edit());

        assert_eq!(s.effective_control("aws"), 100);
        assert_eq!(s.effective_performance("aws"), 42);
        assert!(!view::edit_modal_visible(s.document()));
        assert!(view::reset_button_visible(s.document()));
        assert!(s.html().contains(SAVED_MESSAGE));

        let stored = store.get_item(keys::CUSTOM_SCORES).unwrap().unwrap();
        let map = OverrideMap::from_json(&stored).unwrap();
        assert_eq!(map.get("aws"), Some(&ScoreOverride::both(100, 42)));
        assert_eq!(first_row_id(&s, ScoreTable::Control), "aws");
    }

    #[test]
    fn cancel_discards() {
        let (mut s, store) = session();
        s.open_edit("aws");
        s.edit_input(EditField::Control, "0");
        s.close_edit();
        assert!(!s.save_edit());
        assert_eq!(store.get_item(keys::CUSTOM_SCORES).unwrap(), None);
        assert_eq!(s.effective_control("aws"), 42);
    }

    #[test]
    fn custom_rows_are_marked() {
        let (mut s, _) = session();
        s.open_edit("ionos-cloud");
        assert!(s.save_edit());
        let rows = s.table_rows(ScoreTable::Details);
        let ionos = rows.iter().find(|r| r.provider.id.as_str() == "ionos-cloud").unwrap();
        assert!(ionos.custom);
        assert_eq!(rows.iter().filter(|r| r.custom).count(), 1);
    }

    #[test]
    fn reset_requires_confirmation() {
        let (mut s, store) = session();
        s.open_edit("aws");
        s.edit_input(EditField::Control, "0");
        s.save_edit();

        s.request_reset();
        assert!(view::reset_confirmation_visible(s.document()));
        s.cancel_reset();
        assert!(!view::reset_confirmation_visible(s.document()));
        assert_eq!(s.overrides().len(), 1);

        s.request_reset();
        s.confirm_reset();
        assert!(s.overrides().is_empty());
        assert_eq!(store.get_item(keys::CUSTOM_SCORES).unwrap(), None);
        assert_eq!(s.effective_control("aws"), 42);
        assert!(!view::reset_button_visible(s.document()));
        assert!(s.html().contains(RESET_MESSAGE));
    }

    #[test]
    fn reference_sections_rendered() {
        let (s, _) = session();
        assert_eq!(s.document().get(ids::SOV_CRITERIA_LIST).unwrap().child_elements().count(), 8);
        assert_eq!(s.document().get(ids::SEAL_LEVELS_LIST).unwrap().child_elements().count(), 5);
    }
}
