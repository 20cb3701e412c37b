//! # Page Skeletons
//!
//! Static structure of the compass page and the criteria page. Renderers
//! fill the containers identified in [`crate::ids`].

use scc_core::ProviderCategory;

use crate::dom::{Document, Element};
use crate::ids;
use crate::style::STYLESHEET;

fn header(title: &str, nav_target: (&str, &str)) -> Element {
    Element::new("header")
        .with_class("site-header")
        .with_child(Element::new("h1").with_text(title))
        .with_child(
            Element::new("nav")
                .with_child(
                    Element::new("a")
                        .with_attr("href", nav_target.0)
                        .with_text(nav_target.1),
                )
                .with_child(
                    Element::new("button")
                        .with_id(ids::THEME_TOGGLE)
                        .with_class("theme-toggle")
                        .with_attr("aria-label", "Toggle theme")
                        .with_text("Theme"),
                ),
        )
}

fn category_filters() -> Element {
    Element::new("div")
        .with_id(ids::CATEGORY_FILTERS)
        .with_class("category-filters")
        .with_children(ProviderCategory::all().iter().map(|c| {
            Element::new("label")
                .with_class("category-filter")
                .with_child(
                    Element::new("input")
                        .with_id(ids::category_filter(*c))
                        .with_attr("type", "checkbox")
                        .with_attr("data-category", c.as_str())
                        .with_attr("checked", "checked"),
                )
                .with_child(
                    Element::new("span")
                        .with_class("legend-dot")
                        .with_style("background", c.color()),
                )
                .with_child(Element::new("span").with_text(c.label()))
        }))
}

fn sov_panel() -> [Element; 2] {
    [
        Element::new("div")
            .with_id(ids::SOV_PANEL_OVERLAY)
            .with_class("sov-panel-overlay"),
        Element::new("aside")
            .with_id(ids::SOV_PANEL)
            .with_class("sov-panel")
            .with_attr("role", "dialog")
            .with_attr("aria-modal", "true")
            .with_child(
                Element::new("div")
                    .with_class("sov-panel-header")
                    .with_child(Element::new("h2").with_id(ids::SOV_PANEL_PROVIDER_NAME))
                    .with_child(Element::new("div").with_id(ids::SOV_PANEL_SEAL_BADGE))
                    .with_child(
                        Element::new("button")
                            .with_id(ids::SOV_PANEL_CLOSE)
                            .with_class("sov-panel-close")
                            .with_attr("aria-label", "Close")
                            .with_text("×"),
                    ),
            )
            .with_child(Element::new("div").with_id(ids::SOV_PANEL_CONTENT).with_class("sov-panel-content")),
    ]
}

/// The compass page.
pub fn compass_page() -> Document {
    let body = Element::new("body")
        .with_child(header("Sovereign Cloud Compass", ("criteria.html", "Criteria")))
        .with_child(
            Element::new("main")
                .with_class("compass")
                .with_child(
                    Element::new("section")
                        .with_class("slider-section")
                        .with_child(
                            Element::new("div")
                                .with_class("slider-labels")
                                .with_child(Element::new("span").with_text("Control"))
                                .with_child(Element::new("span").with_text("Performance")),
                        )
                        .with_child(
                            Element::new("div")
                                .with_class("slider-track")
                                .with_child(
                                    Element::new("input")
                                        .with_id(ids::SLIDER)
                                        .with_attr("type", "range")
                                        .with_attr("min", "0")
                                        .with_attr("max", "100")
                                        .with_attr("value", "50"),
                                )
                                .with_child(Element::new("div").with_id(ids::SLIDER_THUMB).with_class("slider-thumb")),
                        )
                        .with_child(Element::new("div").with_id(ids::VALUE_DISPLAY).with_class("value-display")),
                )
                .with_child(category_filters())
                .with_child(
                    Element::new("section").with_class("chart-section").with_child(
                        Element::new("div")
                            .with_id(ids::CHART)
                            .with_class("chart-canvas")
                            .with_child(Element::new("div").with_class("axis-label axis-x").with_text("Performance →"))
                            .with_child(Element::new("div").with_class("axis-label axis-y").with_text("Control →")),
                    ),
                )
                .with_child(
                    Element::new("section")
                        .with_class("legend-section")
                        .with_child(Element::new("div").with_id(ids::LEGEND_GRID).with_class("legend-grid")),
                )
                .with_child(
                    Element::new("section")
                        .with_class("results-section")
                        .with_child(Element::new("h2").with_text("Top providers"))
                        .with_child(Element::new("div").with_id(ids::RESULTS_GRID).with_class("results-grid")),
                ),
        )
        .with_children(sov_panel())
        .with_child(
            Element::new("footer")
                .with_class("site-footer")
                .with_child(Element::new("span").with_id(ids::ACCESS_MODE).with_class("access-mode")),
        );
    Document::new("Sovereign Cloud Compass", STYLESHEET, body)
}

fn overlay(id: &str, inner: Element) -> Element {
    Element::new("div")
        .with_id(id)
        .with_class("modal-overlay")
        .with_child(inner)
}

/// The criteria page.
pub fn criteria_page() -> Document {
    let section = |id: &str, title: &str, container: &str| {
        Element::new("section")
            .with_id(id)
            .with_class("criteria-section")
            .with_child(Element::new("h2").with_text(title))
            .with_child(Element::new("div").with_id(container))
    };
    let body = Element::new("body")
        .with_child(header("Compass Criteria", ("index.html", "Compass")))
        .with_child(
            Element::new("main")
                .with_class("criteria")
                .with_child(section("sov-criteria", "SOV criteria", ids::SOV_CRITERIA_LIST))
                .with_child(section("seal-levels", "SEAL levels", ids::SEAL_LEVELS_LIST))
                .with_child(section("control-scores", "Control scores", ids::CONTROL_TABLE))
                .with_child(section("performance-scores", "Performance scores", ids::PERFORMANCE_TABLE))
                .with_child(section("provider-details", "Provider details", ids::DETAILS_TABLE)),
        )
        .with_child(overlay(
            ids::EDIT_MODAL_OVERLAY,
            Element::new("div")
                .with_class("modal")
                .with_attr("role", "dialog")
                .with_child(Element::new("h3").with_id(ids::EDIT_MODAL_TITLE))
                .with_child(Element::new("div").with_id(ids::EDIT_MODAL_CONTENT))
                .with_child(
                    Element::new("div")
                        .with_class("modal-actions")
                        .with_child(Element::new("button").with_id(ids::EDIT_MODAL_CANCEL).with_text("Cancel"))
                        .with_child(
                            Element::new("button")
                                .with_id(ids::EDIT_MODAL_SAVE)
                                .with_class("btn-primary")
                                .with_text("Save"),
                        ),
                ),
        ))
        .with_child(overlay(
            ids::RESET_CONFIRMATION_OVERLAY,
            Element::new("div")
                .with_class("modal")
                .with_attr("role", "alertdialog")
                .with_child(Element::new("h3").with_text("Reset all customizations?"))
                .with_child(Element::new("p").with_text("Every customized score returns to its dataset value."))
                .with_child(
                    Element::new("div")
                        .with_class("modal-actions")
                        .with_child(Element::new("button").with_id(ids::RESET_CANCEL).with_text("Cancel"))
                        .with_child(
                            Element::new("button")
                                .with_id(ids::RESET_CONFIRM)
                                .with_class("btn-danger")
                                .with_text("Reset"),
                        ),
                ),
        ))
        .with_child(
            Element::new("button")
                .with_id(ids::FLOATING_RESET_BUTTON)
                .with_class("floating-reset")
                .with_style("display", "none")
                .with_text("Reset scores"),
        );
    Document::new("Compass Criteria", STYLESHEET, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_page_has_every_container() {
        let doc = compass_page();
        for id in [
            ids::CHART,
            ids::RESULTS_GRID,
            ids::LEGEND_GRID,
            ids::VALUE_DISPLAY,
            ids::SLIDER,
            ids::SLIDER_THUMB,
            ids::SOV_PANEL,
            ids::SOV_PANEL_OVERLAY,
            ids::SOV_PANEL_CONTENT,
            ids::THEME_TOGGLE,
            ids::ACCESS_MODE,
        ] {
            assert!(doc.get(id).is_some(), "{id}");
        }
        assert_eq!(
            doc.get(ids::CATEGORY_FILTERS).unwrap().child_elements().count(),
            5
        );
    }

    #[test]
    fn criteria_page_has_every_container() {
        let doc = criteria_page();
        for id in [
            ids::CONTROL_TABLE,
            ids::PERFORMANCE_TABLE,
            ids::DETAILS_TABLE,
            ids::EDIT_MODAL_OVERLAY,
            ids::EDIT_MODAL_TITLE,
            ids::EDIT_MODAL_CONTENT,
            ids::RESET_CONFIRMATION_OVERLAY,
            ids::FLOATING_RESET_BUTTON,
            ids::SOV_CRITERIA_LIST,
            ids::SEAL_LEVELS_LIST,
        ] {
            assert!(doc.get(id).is_some(), "{id}");
        }
    }

    #[test]
    fn pages_serialize_as_documents() {
        let html = compass_page().to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sovereign Cloud Compass</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
