//! Scraper engine for a subtitle-aggregator website.
//!
//! The site exposes no structured API, so everything comes from its HTML: a
//! free-text search yields a disambiguation page of candidate shows, and a
//! show's detail page lists the downloadable subtitle archives. The detail
//! page comes in several layouts depending on content type; [`listing`]
//! classifies the shape and picks the right parser.
//!
//! The engine keeps no state across calls: one request at a time, no
//! caching, no retries. Parsing is pure over the fetched document, so the
//! parsers are unit-tested against saved fixture pages.

pub mod config;
mod dom;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod model;
pub mod resolver;
pub mod search;

pub use config::SiteConfig;
pub use error::ScrapeError;
pub use fetch::{Fetch, HttpFetcher};
pub use listing::PageKind;
pub use model::{ARCHIVE_EXTENSION, Show, SubtitleFile, resolve_url};
pub use resolver::CatalogResolver;
