//! # Chart Renderer
//!
//! Draws the provider scatter chart into a container element: one marker per
//! ranked provider on top of five SEAL zone bands.
//!
//! Rendering is idempotent. Every call removes the previous markers and
//! inserts the new ones as a single batch; zone bands are drawn on the first
//! call and left in place afterwards.

use scc_core::layout::{marker_size, position, z_index, ZONE_BANDS};
use scc_core::seal::{classify, seal_levels};
use scc_core::RankedProvider;

use crate::dom::{Document, Element};

/// Class carried by every provider marker.
pub const MARKER_CLASS: &str = "provider-point";
/// Class carried by every zone band.
pub const ZONE_CLASS: &str = "seal-zone";

/// Tooltip text for a marker.
pub fn tooltip_text(ranked: &RankedProvider) -> String {
    let seal = classify(i64::from(ranked.provider.control));
    format!(
        "{} (Score: {:.1}) · {}",
        ranked.provider.name, ranked.score, seal.short_label
    )
}

fn zone_bands() -> Vec<Element> {
    ZONE_BANDS
        .iter()
        .zip(seal_levels())
        .map(|(band, seal)| {
            Element::new("div")
                .with_class(&format!("{ZONE_CLASS} {ZONE_CLASS}-{}", band.level))
                .with_attr("data-seal-level", band.level.to_string())
                .with_style("top", format!("{}%", band.top))
                .with_style("height", format!("{}%", band.height))
                .with_style("background", seal.background)
                .with_style("border-color", seal.color)
                .with_child(
                    Element::new("span")
                        .with_class("seal-zone-label")
                        .with_attr("title", seal.label)
                        .with_text(seal.short_label),
                )
        })
        .collect()
}

fn marker(ranked: &RankedProvider, index: usize) -> Element {
    let pos = position(&ranked.provider);
    let size = marker_size(index);
    let mut point = Element::new("div")
        .with_class(MARKER_CLASS)
        .with_attr("data-provider-id", ranked.provider.id.as_str())
        .with_style("left", format!("{}%", pos.x))
        .with_style("top", format!("{}%", pos.y))
        .with_style("background-color", ranked.provider.color())
        .with_style("width", format!("{size}px"))
        .with_style("height", format!("{size}px"))
        .with_style("z-index", z_index(index).to_string())
        .with_child(
            Element::new("div")
                .with_class("provider-tooltip")
                .with_text(tooltip_text(ranked)),
        );
    if index == 0 {
        point.add_class("winner");
    }
    point
}

/// Render the ranked providers into `container_id`.
///
/// Returns `false` (after logging a warning) when the container is missing.
pub fn render_chart(doc: &mut Document, container_id: &str, ranked: &[RankedProvider]) -> bool {
    let Some(container) = doc.get_mut(container_id) else {
        tracing::warn!(container_id, "chart container not found");
        return false;
    };

    container.remove_children_with_class(MARKER_CLASS);
    if container.find_by_class(ZONE_CLASS).is_empty() {
        container.append_children(zone_bands());
    }
    container.append_children(ranked.iter().enumerate().map(|(i, r)| marker(r, i)));

    metrics::counter!("scc_chart_renders_total").increment(1);
    tracing::trace!(markers = ranked.len(), "rendered chart");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use scc_core::{base_providers, rank_providers, CategoryFilter, SliderValue};

    fn doc() -> Document {
        Document::new(
            "t",
            "",
            Element::new("body").with_child(Element::new("div").with_id("chart")),
        )
    }

    fn ranked(slider: u8) -> Vec<RankedProvider> {
        rank_providers(
            &base_providers(),
            SliderValue::clamped(i64::from(slider)),
            &CategoryFilter::all(),
        )
    }

    #[test]
    fn draws_one_marker_per_provider_and_five_zones() {
        let mut d = doc();
        assert!(render_chart(&mut d, "chart", &ranked(50)));
        let chart = d.get("chart").unwrap();
        assert_eq!(chart.find_by_class(MARKER_CLASS).len(), 14);
        assert_eq!(chart.find_by_class(ZONE_CLASS).len(), 5);
    }

    #[test]
    fn repeated_renders_are_idempotent() {
        let mut d = doc();
        render_chart(&mut d, "chart", &ranked(0));
        render_chart(&mut d, "chart", &ranked(100));
        render_chart(&mut d, "chart", &ranked(30));
        let once = d.clone();
        render_chart(&mut d, "chart", &ranked(30));
        assert_eq!(d, once);
        let chart = d.get("chart").unwrap();
        assert_eq!(chart.find_by_class(MARKER_CLASS).len(), 14);
        assert_eq!(chart.find_by_class(ZONE_CLASS).len(), 5);
    }

    #[test]
    fn first_marker_is_winner_and_largest() {
        let mut d = doc();
        let r = ranked(0);
        render_chart(&mut d, "chart", &r);
        let markers = d.get("chart").unwrap().find_by_class(MARKER_CLASS);
        assert!(markers[0].has_class("winner"));
        assert!(!markers[1].has_class("winner"));
        assert_eq!(markers[0].style("width"), Some("36px"));
        assert_eq!(markers[0].style("z-index"), Some("50"));
        assert_eq!(markers[0].attr("data-provider-id"), Some("openstack-private-cloud"));
    }

    #[test]
    fn tooltip_shows_score_and_seal() {
        let r = ranked(0);
        assert_eq!(tooltip_text(&r[0]), "OpenStack Private Cloud (Score: 100.0) · SEAL-4");
    }

    #[test]
    fn zones_are_ordered_top_down() {
        let mut d = doc();
        render_chart(&mut d, "chart", &[]);
        let zones = d.get("chart").unwrap().find_by_class(ZONE_CLASS);
        let levels: Vec<_> = zones.iter().map(|z| z.attr("data-seal-level").unwrap()).collect();
        assert_eq!(levels, vec!["4", "3", "2", "1", "0"]);
        assert_eq!(zones[0].style("top"), Some("10%"));
    }

    #[test]
    fn missing_container_is_a_no_op() {
        let mut d = doc();
        let before = d.clone();
        assert!(!render_chart(&mut d, "nope", &ranked(50)));
        assert_eq!(d, before);
    }
}
