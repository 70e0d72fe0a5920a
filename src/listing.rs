//! Subtitle listing parser: classifies a show detail page and extracts its
//! downloadable subtitle entries.
//!
//! The site renders a detail page in one of three shapes and gives no
//! out-of-band hint about which; the markup alone decides. All the shape
//! detection sits in [`classify_show_page`] so that upstream markup drift
//! breaks exactly one seam, which the fixture tests pin down.

use scraper::{ElementRef, Html};
use tracing::warn;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::ScrapeError;
use crate::model::SubtitleFile;

/// The three recognized shapes of a show detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A movie, or a TV episode with exactly one subtitle file: no results
    /// table, just the schema.org item container.
    SingleItem,
    /// A complete TV season: per-episode rows grouped under season headers.
    SeasonListing,
    /// One show with several subtitle files listed as plain rows.
    EpisodeListing,
}

/// Decides which of the three layouts a fetched detail page uses.
pub fn classify_show_page(
    document: &Html,
    config: &SiteConfig,
) -> Result<PageKind, ScrapeError> {
    match dom::find_results_table(document, config) {
        None => {
            let has_item = document
                .select(&dom::DIV)
                .any(|div| div.value().attr("itemtype") == Some(config.movie_item_type.as_str()));
            if has_item {
                Ok(PageKind::SingleItem)
            } else {
                Err(ScrapeError::UnparsableShowPage)
            }
        }
        Some(table)
            if table.value().attr("itemprop") == Some(config.season_marker.as_str()) =>
        {
            Ok(PageKind::SeasonListing)
        }
        Some(_) => Ok(PageKind::EpisodeListing),
    }
}

/// Extracts the subtitle entries from a detail page, in document order.
pub fn parse_subtitle_listing(
    body: &str,
    config: &SiteConfig,
) -> Result<Vec<SubtitleFile>, ScrapeError> {
    let document = Html::parse_document(body);
    match classify_show_page(&document, config)? {
        PageKind::SingleItem => parse_single_item(&document, config).map(|file| vec![file]),
        PageKind::SeasonListing => {
            let table = dom::find_results_table(&document, config)
                .ok_or(ScrapeError::UnparsableShowPage)?;
            Ok(parse_season_listing(table, config))
        }
        PageKind::EpisodeListing => {
            let table = dom::find_results_table(&document, config)
                .ok_or(ScrapeError::UnparsableShowPage)?;
            Ok(parse_episode_listing(table, config))
        }
    }
}

/// Single-item pages carry exactly one download link inside the schema.org
/// item container.
fn parse_single_item(document: &Html, config: &SiteConfig) -> Result<SubtitleFile, ScrapeError> {
    let container = document
        .select(&dom::DIV)
        .find(|div| div.value().attr("itemtype") == Some(config.movie_item_type.as_str()))
        .ok_or(ScrapeError::UnparsableShowPage)?;
    let anchor = container
        .select(&dom::ANCHOR)
        .find(|a| a.value().attr("itemprop") == Some("url"))
        .ok_or(ScrapeError::UnparsableShowPage)?;
    let href = anchor.value().attr("href").unwrap_or_default().to_string();
    Ok(SubtitleFile {
        name: dom::clean_text(anchor),
        href,
    })
}

fn parse_episode_listing(table: ElementRef<'_>, config: &SiteConfig) -> Vec<SubtitleFile> {
    let mut files = Vec::new();
    for row in table.select(&dom::ROW) {
        if !dom::id_starts_with(row, &config.row_id_prefix) {
            continue;
        }
        let cells: Vec<_> = row.select(&dom::CELL).collect();
        let Some(first) = cells.first() else {
            continue;
        };
        files.push(SubtitleFile {
            name: episode_title(*first),
            href: cell_anchor_href(&cells, config.episode_href_column),
        });
    }
    files
}

/// Season listings interleave two row kinds: a header row is a single cell
/// spanning the table whose text starts with "season"; everything else with
/// cells is an episode row. Emission order follows the document so headers
/// stay next to their episodes.
fn parse_season_listing(table: ElementRef<'_>, config: &SiteConfig) -> Vec<SubtitleFile> {
    let mut files = Vec::new();
    for row in table.select(&dom::ROW) {
        let cells: Vec<_> = row.select(&dom::CELL).collect();
        match cells.as_slice() {
            [] => continue,
            [single]
                if dom::clean_text(*single)
                    .to_lowercase()
                    .starts_with("season") =>
            {
                files.push(parse_season_header(*single));
            }
            _ => files.push(SubtitleFile {
                name: episode_title(cells[0]),
                href: cell_anchor_href(&cells, config.season_href_column),
            }),
        }
    }
    files
}

/// A header row bundles the whole season into one selectable entry. An
/// itemprop anchor holds the episode count in a nested meta element; the
/// plain anchor holds the download href.
fn parse_season_header(cell: ElementRef<'_>) -> SubtitleFile {
    let mut name = dom::clean_text(cell);
    let mut href = String::new();
    for anchor in cell.select(&dom::ANCHOR) {
        if anchor.value().attr("itemprop").is_some() {
            if let Some(count) = anchor
                .select(&dom::META)
                .next()
                .and_then(|meta| meta.value().attr("content"))
            {
                name = format!("{name} ({count} episodes)");
            }
        } else if let Some(h) = anchor.value().attr("href") {
            href = h.to_string();
        }
    }
    if href.is_empty() {
        warn!(header = %name, "season header row has no download anchor");
    }
    SubtitleFile { name, href }
}

/// Cell text with the appended "Watch ..." promo suffix dropped. Titles on
/// this site end in a trailer link whose text runs straight into the title.
fn episode_title(cell: ElementRef<'_>) -> String {
    let text = dom::clean_text(cell);
    match text.to_lowercase().find("watch") {
        Some(i) if text.is_char_boundary(i) => text[..i].to_string(),
        _ => text,
    }
}

/// Href of the anchor nested in the cell at `index`. A missing anchor (or
/// missing cell) is a soft failure: the entry survives with an empty href.
fn cell_anchor_href(cells: &[ElementRef<'_>], index: usize) -> String {
    let Some(cell) = cells.get(index) else {
        warn!(index, "row has no cell at the subtitle column");
        return String::new();
    };
    match cell
        .select(&dom::ANCHOR)
        .next()
        .and_then(|a| a.value().attr("href"))
    {
        Some(href) => href.to_string(),
        None => {
            warn!("subtitle cell has no anchor");
            String::new()
        }
    }
}
