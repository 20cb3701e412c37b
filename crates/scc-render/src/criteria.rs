//! # Criteria Page Rendering
//!
//! Score tables, the edit modal, the reset controls and the success toast of
//! the criteria page. Ordering and effective-score resolution happen in the
//! page controller; these functions draw rows in the order given.

use scc_core::seal::seal_levels;
use scc_core::{Provider, SovCriterion};

use crate::dom::{Document, Element};
use crate::ids;
use crate::results::seal_badge;

/// One table row: a provider with its effective scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRow<'a> {
    /// Dataset provider.
    pub provider: &'a Provider,
    /// Effective control score.
    pub control: u8,
    /// Effective performance score.
    pub performance: u8,
    /// Whether an override exists for the provider.
    pub custom: bool,
}

/// Which score table to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTable {
    /// Ranked by control.
    Control,
    /// Ranked by performance.
    Performance,
    /// All providers with descriptions, by name.
    Details,
}

impl ScoreTable {
    /// Container id of the table.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Control => ids::CONTROL_TABLE,
            Self::Performance => ids::PERFORMANCE_TABLE,
            Self::Details => ids::DETAILS_TABLE,
        }
    }
}

fn cell(child: Element) -> Element {
    Element::new("div").with_class("scores-table-cell").with_child(child)
}

fn text_cell(text: &str) -> Element {
    Element::new("div").with_class("scores-table-cell").with_text(text)
}

fn name_cell(row: &ScoreRow<'_>, with_description: bool) -> Element {
    let mut label = Element::new("div").with_child(Element::new("span").with_text(&row.provider.name));
    if with_description {
        label.append_child(
            Element::new("div")
                .with_class("provider-description")
                .with_text(&row.provider.description),
        );
    }
    if row.custom {
        label.append_child(Element::new("span").with_class("custom-badge").with_text("Customized"));
    }
    Element::new("div")
        .with_class("provider-name-cell")
        .with_child(
            Element::new("div")
                .with_class("provider-color-dot")
                .with_style("background", row.provider.color()),
        )
        .with_child(label)
}

fn score_cell(score: u8, color: &str) -> Element {
    Element::new("div")
        .with_class("score-display")
        .with_child(Element::new("span").with_class("score-value").with_text(score.to_string()))
        .with_child(
            Element::new("div").with_class("score-bar-mini").with_child(
                Element::new("div")
                    .with_class("score-bar-mini-fill")
                    .with_style("width", format!("{score}%"))
                    .with_style("background", color),
            ),
        )
}

fn category_badge(provider: &Provider) -> Element {
    Element::new("span")
        .with_class(&format!("category-badge category-{}", provider.category))
        .with_text(provider.category.badge_label())
}

fn edit_button(provider: &Provider) -> Element {
    Element::new("button")
        .with_class("btn-edit-small")
        .with_attr("data-provider-id", provider.id.as_str())
        .with_text("Edit")
}

fn table_row(table: ScoreTable, index: usize, row: &ScoreRow<'_>) -> Element {
    let color = row.provider.color();
    let mut el = Element::new("div")
        .with_class("scores-table-row")
        .with_attr("data-provider-id", row.provider.id.as_str());
    if row.custom {
        el.add_class("custom");
    }
    match table {
        ScoreTable::Control => el
            .with_child(text_cell(&format!("{}", index + 1)))
            .with_child(cell(name_cell(row, false)))
            .with_child(cell(category_badge(row.provider)))
            .with_child(cell(score_cell(row.control, color)))
            .with_child(cell(edit_button(row.provider))),
        ScoreTable::Performance => el
            .with_child(text_cell(&format!("{}", index + 1)))
            .with_child(cell(name_cell(row, false)))
            .with_child(cell(category_badge(row.provider)))
            .with_child(cell(score_cell(row.performance, color)))
            .with_child(cell(edit_button(row.provider))),
        ScoreTable::Details => el
            .with_child(cell(name_cell(row, true)))
            .with_child(cell(category_badge(row.provider)))
            .with_child(cell(score_cell(row.control, color)))
            .with_child(cell(score_cell(row.performance, color)))
            .with_child(cell(edit_button(row.provider))),
    }
}

fn header(table: ScoreTable) -> Element {
    let titles: &[&str] = match table {
        ScoreTable::Control => &["#", "Provider", "Category", "Control", "Actions"],
        ScoreTable::Performance => &["#", "Provider", "Category", "Performance", "Actions"],
        ScoreTable::Details => &["Provider", "Category", "Control", "Performance", "Actions"],
    };
    Element::new("div")
        .with_class("scores-table-header")
        .with_children(titles.iter().map(|t| text_cell(t)))
}

/// Draw a score table from rows already in display order.
pub fn render_score_table(doc: &mut Document, table: ScoreTable, rows: &[ScoreRow<'_>]) -> bool {
    let Some(container) = doc.require_mut(table.container_id()) else {
        return false;
    };
    let body = Element::new("div")
        .with_class("scores-table")
        .with_child(header(table))
        .with_children(rows.iter().enumerate().map(|(i, r)| table_row(table, i, r)));
    container.replace_children([body]);
    true
}

/// Fill the static reference sections: SOV criteria with weights and the
/// SEAL levels.
pub fn render_reference_sections(doc: &mut Document) {
    if let Some(list) = doc.get_mut(ids::SOV_CRITERIA_LIST) {
        list.replace_children(SovCriterion::all().iter().map(|c| {
            Element::new("div")
                .with_class("criteria-card")
                .with_attr("data-criterion", c.as_str())
                .with_child(Element::new("div").with_class("criteria-short").with_text(c.short_name()))
                .with_child(Element::new("h3").with_text(c.name()))
                .with_child(
                    Element::new("div")
                        .with_class("criteria-weight")
                        .with_text(format!("Weight: {} %", c.weight_percent())),
                )
                .with_child(Element::new("p").with_text(c.description()))
        }));
    }
    if let Some(list) = doc.get_mut(ids::SEAL_LEVELS_LIST) {
        list.replace_children(seal_levels().map(|seal| {
            Element::new("div")
                .with_class("seal-level-card")
                .with_child(seal_badge(seal))
                .with_child(Element::new("span").with_class("seal-level-label").with_text(seal.label))
                .with_child(
                    Element::new("span")
                        .with_class("seal-level-threshold")
                        .with_text(format!("Control ≥ {}", seal.min_control)),
                )
        }));
    }
}

// ---------------------------------------------------------------------------
// Edit modal, reset and toast
// ---------------------------------------------------------------------------

/// Control input of the edit modal.
pub const EDIT_CONTROL_INPUT: &str = "editControlScore";
/// Performance input of the edit modal.
pub const EDIT_PERFORMANCE_INPUT: &str = "editPerformanceScore";

fn slider_group(label: &str, input_id: &str, value_id: &str, value: u8, hint: &str) -> Element {
    Element::new("div")
        .with_class("form-group")
        .with_child(Element::new("label").with_attr("for", input_id).with_text(label))
        .with_child(
            Element::new("div")
                .with_class("slider-group")
                .with_child(
                    Element::new("input")
                        .with_id(input_id)
                        .with_attr("type", "range")
                        .with_attr("min", "0")
                        .with_attr("max", "100")
                        .with_attr("value", value.to_string()),
                )
                .with_child(
                    Element::new("span")
                        .with_id(value_id)
                        .with_class("slider-value")
                        .with_text(value.to_string()),
                ),
        )
        .with_child(Element::new("p").with_class("form-hint").with_text(hint))
}

/// Fill and show the edit modal.
pub fn open_edit_modal(doc: &mut Document, provider: &Provider, control: u8, performance: u8) -> bool {
    if doc.get(ids::EDIT_MODAL_OVERLAY).is_none() {
        tracing::warn!("edit modal not found");
        return false;
    }
    if let Some(title) = doc.get_mut(ids::EDIT_MODAL_TITLE) {
        title.set_text(format!("Edit {}", provider.name));
    }
    if let Some(content) = doc.get_mut(ids::EDIT_MODAL_CONTENT) {
        content.replace_children([Element::new("div")
            .with_class("edit-form")
            .with_attr("data-provider-id", provider.id.as_str())
            .with_child(
                Element::new("div")
                    .with_class("provider-info")
                    .with_child(
                        Element::new("div")
                            .with_class("provider-color-dot")
                            .with_style("background", provider.color()),
                    )
                    .with_child(
                        Element::new("div")
                            .with_child(Element::new("h4").with_text(&provider.name))
                            .with_child(Element::new("p").with_text(&provider.description)),
                    ),
            )
            .with_child(slider_group(
                "Control & sovereignty",
                EDIT_CONTROL_INPUT,
                "controlValue",
                control,
                "Data sovereignty, jurisdiction, GDPR compliance",
            ))
            .with_child(slider_group(
                "Performance",
                EDIT_PERFORMANCE_INPUT,
                "performanceValue",
                performance,
                "Service portfolio, innovation, scalability",
            ))]);
    }
    set_visible(doc, ids::EDIT_MODAL_OVERLAY, true);
    true
}

/// Hide the edit modal.
pub fn close_edit_modal(doc: &mut Document) {
    set_visible(doc, ids::EDIT_MODAL_OVERLAY, false);
}

/// Whether the edit modal is shown.
pub fn edit_modal_visible(doc: &Document) -> bool {
    is_visible(doc, ids::EDIT_MODAL_OVERLAY)
}

/// Show or hide the reset confirmation.
pub fn set_reset_confirmation_visible(doc: &mut Document, visible: bool) {
    set_visible(doc, ids::RESET_CONFIRMATION_OVERLAY, visible);
}

/// Whether the reset confirmation is shown.
pub fn reset_confirmation_visible(doc: &Document) -> bool {
    is_visible(doc, ids::RESET_CONFIRMATION_OVERLAY)
}

/// Show the floating reset button iff overrides exist.
pub fn set_reset_button_visible(doc: &mut Document, visible: bool) {
    if let Some(btn) = doc.get_mut(ids::FLOATING_RESET_BUTTON) {
        btn.set_style("display", if visible { "block" } else { "none" });
    }
}

/// Whether the floating reset button is shown.
pub fn reset_button_visible(doc: &Document) -> bool {
    doc.get(ids::FLOATING_RESET_BUTTON)
        .is_some_and(|b| b.style("display") == Some("block"))
}

/// Append a success toast to the body.
pub fn show_toast(doc: &mut Document, message: &str) {
    if let Some(body) = doc.body_mut() {
        body.remove_children_with_class("success-toast");
        body.append_child(
            Element::new("div")
                .with_class("success-toast show")
                .with_attr("role", "status")
                .with_text(message),
        );
    }
}

fn set_visible(doc: &mut Document, id: &str, visible: bool) {
    if let Some(e) = doc.require_mut(id) {
        e.set_class("visible", visible);
    }
}

fn is_visible(doc: &Document, id: &str) -> bool {
    doc.get(id).is_some_and(|e| e.has_class("visible"))
}
