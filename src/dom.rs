//! Small shared helpers over the scraper DOM used by both page parsers.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::SiteConfig;

pub(crate) static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
pub(crate) static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
pub(crate) static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
pub(crate) static STRONG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("strong").unwrap());
pub(crate) static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
pub(crate) static META: LazyLock<Selector> = LazyLock::new(|| Selector::parse("meta").unwrap());
pub(crate) static DIV: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div").unwrap());

/// Trims the ends and collapses inner newlines to single spaces.
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().replace('\n', " ")
}

/// All text under `el`, normalized into one line.
pub(crate) fn clean_text(el: ElementRef<'_>) -> String {
    normalize(&el.text().collect::<String>())
}

/// Normalized text of the node immediately following `el`, whether it is a
/// bare text node or a wrapped element. This is where the site keeps the
/// episode label, right after the emphasized show name.
pub(crate) fn next_sibling_text(el: ElementRef<'_>) -> Option<String> {
    let node = el.next_sibling()?;
    if let Some(text) = node.value().as_text() {
        return Some(normalize(text));
    }
    ElementRef::wrap(node).map(clean_text)
}

/// The results table, identified by its fixed `id` token. `None` means the
/// page is not rendered in table form at all.
pub(crate) fn find_results_table<'a>(
    document: &'a Html,
    config: &SiteConfig,
) -> Option<ElementRef<'a>> {
    document
        .select(&TABLE)
        .find(|table| table.value().attr("id") == Some(config.results_table_id.as_str()))
}

pub(crate) fn id_starts_with(el: ElementRef<'_>, prefix: &str) -> bool {
    el.value().attr("id").is_some_and(|id| id.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_sibling_text_reads_the_text_node_after_an_element() {
        let html = Html::parse_fragment("<td><strong>Name</strong>\n [S01E03]\n</td>");
        let strong = html.select(&STRONG).next().unwrap();
        assert_eq!(next_sibling_text(strong).as_deref(), Some("[S01E03]"));
    }

    #[test]
    fn normalize_joins_wrapped_lines() {
        assert_eq!(normalize("  The\nOffice  "), "The Office");
    }
}
