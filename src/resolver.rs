//! Public surface of the engine: search, listing, and archive retrieval.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::SiteConfig;
use crate::error::ScrapeError;
use crate::fetch::{Fetch, HttpFetcher};
use crate::listing;
use crate::model::{ARCHIVE_EXTENSION, Show, SubtitleFile};
use crate::search;

/// Composes the fetcher with the page parsers. Stateless across calls: no
/// caching, no shared mutable state, one request in flight at a time.
pub struct CatalogResolver {
    fetcher: Box<dyn Fetch>,
    config: SiteConfig,
}

impl CatalogResolver {
    pub fn new(config: SiteConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher: Box::new(HttpFetcher::new()?),
            config,
        })
    }

    /// Swaps the HTTP layer out; tests use this to serve saved pages.
    pub fn with_fetcher(config: SiteConfig, fetcher: Box<dyn Fetch>) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Searches the site for `query` and returns the candidate shows in page
    /// order. An empty list means no matches, not a failure.
    pub async fn search_show(&self, query: &str) -> Result<Vec<Show>, ScrapeError> {
        let url = format!("{}{}", self.config.search_url, query.replace(' ', "+"));
        info!(%url, "searching");
        let body = self.fetcher.fetch_text(&url).await?;
        search::parse_disambiguation(&body, &self.config)
    }

    /// Returns the subtitle archives listed on a show detail page. Does not
    /// touch any [`Show`]; attaching the result to one is the caller's call.
    pub async fn get_subtitles_for_show(
        &self,
        show_url: &str,
    ) -> Result<Vec<SubtitleFile>, ScrapeError> {
        let body = self.fetcher.fetch_text(show_url).await?;
        listing::parse_subtitle_listing(&body, &self.config)
    }

    /// Downloads a subtitle archive to `local_path` and returns its size in
    /// bytes. A path without an extension gets [`ARCHIVE_EXTENSION`]
    /// appended before writing.
    pub async fn download_archive(
        &self,
        url: &str,
        local_path: &Path,
    ) -> Result<u64, ScrapeError> {
        let path = ensure_archive_extension(local_path);
        info!(%url, path = %path.display(), "retrieving archive");
        let bytes = self.fetcher.fetch_bytes(url).await?;
        let write_err = |source| ScrapeError::ArchiveWrite {
            path: path.display().to_string(),
            source,
        };
        std::fs::write(&path, &bytes).map_err(write_err)?;
        Ok(std::fs::metadata(&path).map_err(write_err)?.len())
    }
}

fn ensure_archive_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        let mut with_ext = path.as_os_str().to_owned();
        with_ext.push(ARCHIVE_EXTENSION);
        PathBuf::from(with_ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_appended_only_when_missing() {
        assert_eq!(
            ensure_archive_extension(Path::new("/tmp/The Office S01")),
            Path::new("/tmp/The Office S01.zip")
        );
        assert_eq!(
            ensure_archive_extension(Path::new("/tmp/subs.rar")),
            Path::new("/tmp/subs.rar")
        );
    }
}
