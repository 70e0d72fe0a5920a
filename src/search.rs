//! Disambiguation parser: turns a search-results page into candidate shows.

use scraper::{ElementRef, Html};
use tracing::warn;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::ScrapeError;
use crate::model::Show;

/// Extracts the candidate shows from a results page, in document order.
///
/// A page without the results table fails with
/// [`ScrapeError::UnparsableResults`]; a single malformed row is logged and
/// skipped so the rest of the result set survives. An empty list is not an
/// error, it means the query matched nothing.
pub fn parse_disambiguation(body: &str, config: &SiteConfig) -> Result<Vec<Show>, ScrapeError> {
    let document = Html::parse_document(body);
    let table =
        dom::find_results_table(&document, config).ok_or(ScrapeError::UnparsableResults)?;

    let mut shows = Vec::new();
    for row in table.select(&dom::ROW) {
        if !dom::id_starts_with(row, &config.row_id_prefix) {
            continue; // decorative or header row
        }
        for cell in row.select(&dom::CELL) {
            if !dom::id_starts_with(cell, &config.main_cell_prefix) {
                continue;
            }
            match parse_candidate(cell, config) {
                Some(show) => shows.push(show),
                None => warn!(row = %dom::clean_text(row), "skipping unparsable result row"),
            }
        }
    }
    Ok(shows)
}

/// One candidate from the main cell of a result row: the name comes from the
/// marked anchor inside the emphasized element, the episode label from the
/// text right after it.
fn parse_candidate(cell: ElementRef<'_>, config: &SiteConfig) -> Option<Show> {
    let emphasized = cell.select(&dom::STRONG).next()?;
    let anchor = emphasized
        .select(&dom::ANCHOR)
        .find(|a| a.value().classes().any(|c| c == config.name_anchor_class))?;
    let href = anchor.value().attr("href")?.to_string();
    let name = dom::clean_text(anchor);
    let episode = dom::next_sibling_text(emphasized).unwrap_or_default();
    Some(Show {
        name,
        href,
        episode,
        subtitle_files: Vec::new(),
    })
}
