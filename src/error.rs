use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds surfaced by the engine.
///
/// Parsing failures are deliberately narrow so a caller can tell "nothing
/// found" apart from "the site changed its markup" apart from "network down".
/// Row-level defects inside an otherwise recognizable page are not errors;
/// they are logged and the row is skipped.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The server answered with a non-success HTTP status. Never retried
    /// internally.
    #[error("request for {url} failed with status {status}")]
    RemoteFetch { url: String, status: StatusCode },

    /// Transport-level failure before any status was received.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The search-results page carries no recognizable results table,
    /// either because the query matched nothing or the markup changed.
    #[error("unable to parse search results")]
    UnparsableResults,

    /// The show detail page matches none of the known layouts.
    #[error("unable to parse show page")]
    UnparsableShowPage,

    /// The downloaded archive could not be written or stat'd.
    #[error("failed to store archive at {path}: {source}")]
    ArchiveWrite {
        path: String,
        source: std::io::Error,
    },
}
