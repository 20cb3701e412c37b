//! # scc-render — Compass Rendering
//!
//! Renderers for both compass pages over an owned element tree
//! ([`dom::Document`]). Renderers never compute scores; they draw what the
//! page controllers in `scc-app` hand them. A missing container is logged
//! with `tracing::warn!` and the step is skipped.

pub mod chart;
pub mod criteria;
pub mod dom;
pub mod legend;
pub mod page;
pub mod results;
pub mod style;

pub use chart::render_chart;
pub use dom::{Document, Element, Node};
pub use legend::render_legend;
pub use page::{compass_page, criteria_page};
pub use results::{close_sov_panel, open_sov_panel, render_results};

/// Element ids used by the page skeletons and renderers.
pub mod ids {
    // Compass page.
    pub const CHART: &str = "chartCanvas";
    pub const RESULTS_GRID: &str = "resultsGrid";
    pub const LEGEND_GRID: &str = "legendGrid";
    pub const SLIDER: &str = "weightSlider";
    pub const SLIDER_THUMB: &str = "sliderThumb";
    pub const VALUE_DISPLAY: &str = "valueDisplay";
    pub const CATEGORY_FILTERS: &str = "categoryFilters";
    pub const SOV_PANEL: &str = "sovPanel";
    pub const SOV_PANEL_OVERLAY: &str = "sovPanelOverlay";
    pub const SOV_PANEL_PROVIDER_NAME: &str = "sovPanelProviderName";
    pub const SOV_PANEL_SEAL_BADGE: &str = "sovPanelSealBadge";
    pub const SOV_PANEL_CONTENT: &str = "sovPanelContent";
    pub const SOV_PANEL_CLOSE: &str = "sovPanelClose";
    pub const ACCESS_MODE: &str = "accessMode";

    // Shared.
    pub const THEME_TOGGLE: &str = "themeToggle";

    // Criteria page.
    pub const CONTROL_TABLE: &str = "controlScoresTable";
    pub const PERFORMANCE_TABLE: &str = "performanceScoresTable";
    pub const DETAILS_TABLE: &str = "providerDetailsTable";
    pub const SOV_CRITERIA_LIST: &str = "sovCriteriaList";
    pub const SEAL_LEVELS_LIST: &str = "sealLevelsList";
    pub const EDIT_MODAL_OVERLAY: &str = "editModalOverlay";
    pub const EDIT_MODAL_TITLE: &str = "editModalTitle";
    pub const EDIT_MODAL_CONTENT: &str = "editModalContent";
    pub const EDIT_MODAL_SAVE: &str = "editModalSave";
    pub const EDIT_MODAL_CANCEL: &str = "editModalCancel";
    pub const RESET_CONFIRMATION_OVERLAY: &str = "resetConfirmationOverlay";
    pub const RESET_CONFIRM: &str = "resetConfirm";
    pub const RESET_CANCEL: &str = "resetCancel";
    pub const FLOATING_RESET_BUTTON: &str = "floatingResetBtn";

    /// Id of the filter checkbox for a category.
    pub fn category_filter(category: scc_core::ProviderCategory) -> String {
        format!("filter-{}", category.as_str())
    }
}

/// Set the page theme attribute on `<html>`.
pub fn apply_theme(doc: &mut Document, theme: &str) {
    doc.root_mut().set_attr("data-theme", theme);
}

/// Show the access mode in the page footer.
pub fn render_access_mode(doc: &mut Document, label: &str) {
    if let Some(e) = doc.get_mut(ids::ACCESS_MODE) {
        e.set_text(label);
    }
}

/// Reflect the enabled categories in the filter checkboxes.
pub fn render_category_filters(doc: &mut Document, enabled: &scc_core::CategoryFilter) {
    for category in scc_core::ProviderCategory::all() {
        if let Some(input) = doc.get_mut(&ids::category_filter(*category)) {
            if enabled.is_enabled(*category) {
                input.set_attr("checked", "checked");
            } else {
                input.remove_attr("checked");
            }
        }
    }
}
