//! # Results Renderer
//!
//! The top-N summary cards under the chart and the sovereignty detail panel
//! opened from a card.

use scc_core::dataset::sov_explanation;
use scc_core::seal::{classify, SealLevel};
use scc_core::{score_class, Provider, RankedProvider, SovCriterion};

use crate::dom::{Document, Element};
use crate::ids;

/// Cards shown by default.
pub const DEFAULT_RESULTS_LIMIT: usize = 8;

/// Placeholder shown when a provider has no sub-scores.
pub const NO_SOV_DATA: &str = "No sovereignty data available";

/// A SEAL badge element.
pub fn seal_badge(seal: &SealLevel) -> Element {
    Element::new("span")
        .with_class(&format!("seal-badge seal-badge-{}", seal.level))
        .with_attr("title", seal.label)
        .with_style("color", seal.color)
        .with_style("background", seal.background)
        .with_text(seal.short_label)
}

fn result_card(ranked: &RankedProvider) -> Element {
    let p = &ranked.provider;
    let seal = classify(i64::from(p.control));
    let mut card = Element::new("div")
        .with_class("result-card")
        .with_attr("data-provider-id", p.id.as_str())
        .with_attr("role", "button")
        .with_attr("tabindex", "0")
        .with_child(
            Element::new("div")
                .with_class("result-header")
                .with_child(
                    Element::new("div")
                        .with_class("result-rank")
                        .with_text(format!("#{}", ranked.rank)),
                )
                .with_child(seal_badge(seal)),
        )
        .with_child(Element::new("div").with_class("result-name").with_text(&p.name))
        .with_child(
            Element::new("div")
                .with_class("result-description")
                .with_text(&p.description),
        )
        .with_child(
            Element::new("div")
                .with_class("result-metrics")
                .with_child(Element::new("span").with_text(format!("Control: {}", p.control)))
                .with_child(
                    Element::new("span").with_text(format!("Performance: {}", p.performance)),
                ),
        )
        .with_child(
            Element::new("div")
                .with_class("result-score")
                .with_text(format!("Score: {:.1}", ranked.score)),
        )
        .with_child(
            Element::new("div").with_class("score-bar").with_child(
                Element::new("div")
                    .with_class("score-fill")
                    .with_style("width", format!("{}%", ranked.score)),
            ),
        )
        .with_child(
            Element::new("div")
                .with_class("result-card-hint")
                .with_text("Select for SOV details"),
        );
    if ranked.rank == 1 {
        card.add_class("winner");
    }
    card
}

/// Render the first `limit` ranked providers as cards.
///
/// Ranks shown are the tie-aware ranks computed by the scoring engine.
pub fn render_results(
    doc: &mut Document,
    container_id: &str,
    ranked: &[RankedProvider],
    limit: usize,
) -> bool {
    let Some(grid) = doc.require_mut(container_id) else {
        return false;
    };
    grid.replace_children(ranked.iter().take(limit).map(result_card));
    true
}

/// The strategy text next to the slider.
pub fn render_strategy(doc: &mut Document, text: &str, slider: u8) {
    if let Some(display) = doc.get_mut(ids::VALUE_DISPLAY) {
        display.set_text(text);
    }
    if let Some(thumb) = doc.get_mut(ids::SLIDER_THUMB) {
        thumb.set_style("left", format!("{slider}%"));
    }
    if let Some(input) = doc.get_mut(ids::SLIDER) {
        input.set_attr("value", slider.to_string());
    }
}

// ---------------------------------------------------------------------------
// Sovereignty detail panel
// ---------------------------------------------------------------------------

fn sov_item(provider: &Provider, criterion: SovCriterion) -> Element {
    let score = provider.sovereignty.get(criterion);
    Element::new("div")
        .with_class(&format!("sov-item sov-score-{}", score_class(score)))
        .with_attr("data-criterion", criterion.as_str())
        .with_child(
            Element::new("div")
                .with_class("sov-item-header")
                .with_child(
                    Element::new("div")
                        .with_class("sov-item-label")
                        .with_child(
                            Element::new("div")
                                .with_class("sov-item-name")
                                .with_text(criterion.name()),
                        )
                        .with_child(
                            Element::new("div")
                                .with_class("sov-item-shortname")
                                .with_text(criterion.short_name()),
                        ),
                )
                .with_child(
                    Element::new("div")
                        .with_class("sov-item-score")
                        .with_text(score.to_string()),
                ),
        )
        .with_child(
            Element::new("div").with_class("sov-item-bar").with_child(
                Element::new("div")
                    .with_class("sov-item-bar-fill")
                    .with_style("width", format!("{score}%")),
            ),
        )
        .with_child(
            Element::new("div")
                .with_class("sov-item-description")
                .with_text(sov_explanation(provider.id.as_str(), criterion)),
        )
}

/// Fill and show the detail panel for a provider.
///
/// `None` or a provider without sub-scores shows the placeholder.
pub fn open_sov_panel(doc: &mut Document, provider: Option<&Provider>) -> bool {
    if doc.get(ids::SOV_PANEL).is_none() || doc.get(ids::SOV_PANEL_OVERLAY).is_none() {
        tracing::warn!("sovereignty panel not found");
        return false;
    }

    if let Some(name) = doc.get_mut(ids::SOV_PANEL_PROVIDER_NAME) {
        name.set_text(provider.map(|p| p.name.as_str()).unwrap_or_default());
    }
    if let Some(badge) = doc.get_mut(ids::SOV_PANEL_SEAL_BADGE) {
        badge.replace_children(
            provider
                .map(|p| seal_badge(classify(i64::from(p.control))))
                .into_iter(),
        );
    }

    let content: Vec<Element> = match provider.filter(|p| !p.sovereignty.is_empty()) {
        Some(p) => std::iter::once(
            Element::new("div")
                .with_class("sov-average")
                .with_child(
                    Element::new("span")
                        .with_class("sov-average-label")
                        .with_text("Control (weighted)"),
                )
                .with_child(
                    Element::new("span")
                        .with_class("sov-average-value")
                        .with_text(p.control.to_string()),
                ),
        )
        .chain(SovCriterion::all().iter().map(|c| sov_item(p, *c)))
        .collect(),
        None => vec![Element::new("p").with_class("sov-empty").with_text(NO_SOV_DATA)],
    };
    if let Some(body) = doc.get_mut(ids::SOV_PANEL_CONTENT) {
        body.replace_children(content);
    }

    set_panel_visible(doc, true);
    true
}

/// Hide the detail panel.
pub fn close_sov_panel(doc: &mut Document) {
    set_panel_visible(doc, false);
}

/// Whether the detail panel is shown.
pub fn sov_panel_visible(doc: &Document) -> bool {
    doc.get(ids::SOV_PANEL).is_some_and(|p| p.has_class("visible"))
}

fn set_panel_visible(doc: &mut Document, visible: bool) {
    for id in [ids::SOV_PANEL, ids::SOV_PANEL_OVERLAY] {
        if let Some(e) = doc.get_mut(id) {
            e.set_class("visible", visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::compass_page;
    use scc_core::{base_providers, provider_by_id, rank_providers, CategoryFilter, SliderValue};

    fn ranked(slider: i64) -> Vec<RankedProvider> {
        rank_providers(
            &base_providers(),
            SliderValue::new(slider).unwrap(),
            &CategoryFilter::all(),
        )
    }

    #[test]
    fn renders_at_most_limit_cards() {
        let mut doc = compass_page();
        assert!(render_results(&mut doc, ids::RESULTS_GRID, &ranked(50), DEFAULT_RESULTS_LIMIT));
        let cards = doc.get(ids::RESULTS_GRID).unwrap().find_by_class("result-card");
        assert_eq!(cards.len(), 8);
    }

    #[test]
    fn tied_cards_share_rank_and_winner_class() {
        let mut doc = compass_page();
        render_results(&mut doc, ids::RESULTS_GRID, &ranked(100), DEFAULT_RESULTS_LIMIT);
        let cards = doc.get(ids::RESULTS_GRID).unwrap().find_by_class("result-card");
        let ranks: Vec<String> = cards
            .iter()
            .map(|c| c.find_by_class("result-rank")[0].text_content())
            .collect();
        assert_eq!(&ranks[..4], &["#1", "#1", "#1", "#4"]);
        assert!(cards[..3].iter().all(|c| c.has_class("winner")));
        assert!(!cards[3].has_class("winner"));
    }

    #[test]
    fn card_content() {
        let mut doc = compass_page();
        render_results(&mut doc, ids::RESULTS_GRID, &ranked(0), DEFAULT_RESULTS_LIMIT);
        let grid = doc.get(ids::RESULTS_GRID).unwrap();
        let first = grid.find_by_class("result-card")[0];
        assert_eq!(first.attr("data-provider-id"), Some("openstack-private-cloud"));
        assert_eq!(first.find_by_class("result-score")[0].text_content(), "Score: 100.0");
        assert_eq!(first.find_by_class("seal-badge")[0].text_content(), "SEAL-4");
    }

    #[test]
    fn empty_ranking_clears_cards() {
        let mut doc = compass_page();
        render_results(&mut doc, ids::RESULTS_GRID, &ranked(50), 8);
        render_results(&mut doc, ids::RESULTS_GRID, &[], 8);
        assert!(doc.get(ids::RESULTS_GRID).unwrap().find_by_class("result-card").is_empty());
    }

    #[test]
    fn panel_lists_eight_criteria_with_classes() {
        let mut doc = compass_page();
        let aws = provider_by_id("aws").unwrap();
        assert!(open_sov_panel(&mut doc, Some(&aws)));
        assert!(sov_panel_visible(&doc));
        let content = doc.get(ids::SOV_PANEL_CONTENT).unwrap();
        let items = content.find_by_class("sov-item");
        assert_eq!(items.len(), 8);
        // SOV-2 legal 15 → low; SOV-4 operational 55 → medium; SOV-7 security 75 → high.
        assert!(items[1].has_class("sov-score-low"));
        assert!(items[3].has_class("sov-score-medium"));
        assert!(items[6].has_class("sov-score-high"));
        assert_eq!(content.find_by_class("sov-average-value")[0].text_content(), "42");
        assert_eq!(items[0].find_by_class("sov-item-shortname")[0].text_content(), "SOV-1");
    }

    #[test]
    fn panel_placeholder_without_data() {
        let mut doc = compass_page();
        assert!(open_sov_panel(&mut doc, None));
        let content = doc.get(ids::SOV_PANEL_CONTENT).unwrap();
        assert_eq!(content.text_content(), NO_SOV_DATA);
        close_sov_panel(&mut doc);
        assert!(!sov_panel_visible(&doc));
    }
}
