//! Drives the resolver end-to-end through a fetcher that serves saved
//! fixture pages, so the whole search → pick → list → download flow runs
//! without touching the network.

use std::collections::HashMap;

use async_trait::async_trait;

use subscrape::{
    CatalogResolver, Fetch, ScrapeError, SiteConfig, SubtitleFile, resolve_url,
};

const SEARCH_RESULTS: &str = include_str!("fixtures/search_results.html");
const SEASON_LISTING: &str = include_str!("fixtures/season_listing.html");

struct FixtureFetcher {
    pages: HashMap<String, &'static str>,
}

impl FixtureFetcher {
    fn new(pages: &[(String, &'static str)]) -> Self {
        Self {
            pages: pages.iter().cloned().collect(),
        }
    }
}

#[async_trait]
impl Fetch for FixtureFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        self.pages
            .get(url)
            .map(|body| body.to_string())
            .ok_or_else(|| ScrapeError::RemoteFetch {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        self.fetch_text(url).await.map(String::into_bytes)
    }
}

fn resolver() -> CatalogResolver {
    let config = SiteConfig::default();
    let search_url = format!("{}the+office", config.search_url);
    let detail_url = format!("{}/en/ssearch/3-70045", config.domain);
    let fetcher = FixtureFetcher::new(&[
        (search_url, SEARCH_RESULTS),
        (detail_url, SEASON_LISTING),
    ]);
    CatalogResolver::with_fetcher(config, Box::new(fetcher))
}

#[tokio::test]
async fn search_skips_the_malformed_row() {
    let resolver = resolver();
    let shows = resolver.search_show("the office").await.unwrap();

    // Four candidate rows in the fixture, one without a name anchor.
    assert_eq!(shows.len(), 3);
    assert_eq!(shows[0].name, "The Office");
    assert_eq!(shows[0].episode, "[US] (2005)");
    assert_eq!(shows[1].name, "The Office");
    assert_eq!(shows[1].episode, "[UK] (2001)");
    assert_eq!(shows[1].href, "/en/ssearch/3-70045");
    assert_eq!(shows[2].name, "Office Space");
}

#[tokio::test]
async fn chosen_show_yields_the_full_season_listing_in_order() {
    let resolver = resolver();
    let shows = resolver.search_show("the office").await.unwrap();

    let mut chosen = shows[1].clone();
    let url = resolve_url(&resolver.config().domain, &chosen.href);
    chosen.subtitle_files = resolver.get_subtitles_for_show(&url).await.unwrap();

    // 2 season headers + 6 episode rows, interleaved in document order.
    assert_eq!(chosen.subtitle_files.len(), 8);
    let names: Vec<&str> = chosen
        .subtitle_files
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Season 1 (6 episodes)",
            "The Office S01E01",
            "The Office S01E02",
            "The Office S01E03",
            "The Office S01E04",
            "Season 2 (6 episodes)",
            "The Office S02E01",
            "The Office S02E02",
        ]
    );
    assert_eq!(
        chosen.subtitle_files[0],
        SubtitleFile {
            name: "Season 1 (6 episodes)".to_string(),
            href: "/en/ssearch/3-70045/season-1".to_string(),
        }
    );
    // Last episode row has no anchor in the subtitle column: soft failure.
    assert_eq!(chosen.subtitle_files[7].href, "");
}

#[tokio::test]
async fn fetch_failures_surface_with_status_and_url() {
    let resolver = resolver();
    let err = resolver
        .get_subtitles_for_show("https://www.opensubtitles.org/en/ssearch/3-404")
        .await
        .unwrap_err();
    match err {
        ScrapeError::RemoteFetch { url, status } => {
            assert_eq!(url, "https://www.opensubtitles.org/en/ssearch/3-404");
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        }
        other => panic!("expected RemoteFetch, got {other:?}"),
    }
}

#[tokio::test]
async fn download_appends_the_archive_extension_and_reports_size() {
    let dir = tempfile::tempdir().unwrap();
    let config = SiteConfig::default();
    let url = format!("{}/en/subtitleserve/sub/3429018", config.domain);
    let fetcher = FixtureFetcher::new(&[(url.clone(), "PK fake zip payload")]);
    let resolver = CatalogResolver::with_fetcher(config, Box::new(fetcher));

    let target = dir.path().join("The Office S01E01");
    let size = resolver.download_archive(&url, &target).await.unwrap();

    let written = dir.path().join("The Office S01E01.zip");
    assert!(written.exists());
    assert_eq!(size, "PK fake zip payload".len() as u64);
}
