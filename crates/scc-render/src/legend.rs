//! # Legend Renderer

use scc_core::LegendEntry;

use crate::dom::{Document, Element};

/// Legend text for one entry: `"{label}: {member}, {member}, …"`.
pub fn legend_text(entry: &LegendEntry) -> String {
    format!("{}: {}", entry.label, entry.members.join(", "))
}

/// Replace the legend contents with one item per category.
pub fn render_legend(doc: &mut Document, container_id: &str, entries: &[LegendEntry]) -> bool {
    let Some(grid) = doc.require_mut(container_id) else {
        return false;
    };
    grid.replace_children(entries.iter().map(|entry| {
        Element::new("div")
            .with_class("legend-item")
            .with_attr("data-category", entry.category.as_str())
            .with_child(
                Element::new("div")
                    .with_class("legend-dot")
                    .with_style("background", entry.color),
            )
            .with_child(
                Element::new("span")
                    .with_class("legend-text")
                    .with_text(legend_text(entry)),
            )
    }));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids;
    use crate::page::compass_page;
    use scc_core::dataset::legend;
    use scc_core::{anonymize, base_providers};

    #[test]
    fn anonymous_legend_lists_codes() {
        let mut doc = compass_page();
        let entries = legend(&anonymize(&base_providers()));
        assert!(render_legend(&mut doc, ids::LEGEND_GRID, &entries));
        let texts: Vec<String> = doc
            .get(ids::LEGEND_GRID)
            .unwrap()
            .find_by_class("legend-text")
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(texts.len(), 5);
        assert_eq!(texts[0], "Hyperscaler: H1, H2, H3, H4");
        assert_eq!(texts[2], "EU / German providers: E1, E2, E3");
    }

    #[test]
    fn full_legend_lists_names() {
        let mut doc = compass_page();
        render_legend(&mut doc, ids::LEGEND_GRID, &legend(&base_providers()));
        let first = doc.get(ids::LEGEND_GRID).unwrap().find_by_class("legend-text")[0].text_content();
        assert_eq!(first, "Hyperscaler: AWS, Microsoft Azure, Google Cloud, Oracle Cloud");
    }
}
