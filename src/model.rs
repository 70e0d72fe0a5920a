use std::fmt;

use serde::Serialize;

/// Extension appended to downloaded subtitle archives when the caller gives
/// none.
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// One downloadable subtitle archive entry found on a show detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleFile {
    pub name: String,
    /// Relative path or absolute URL; see [`resolve_url`].
    pub href: String,
}

/// A candidate show or movie from one row of the search-results page.
///
/// `subtitle_files` starts empty; the caller attaches the result of
/// [`crate::CatalogResolver::get_subtitles_for_show`] once the user has
/// picked this candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Show {
    pub name: String,
    pub href: String,
    /// Episode label, e.g. `"[S01E03]"`. Empty for movies.
    #[serde(skip)]
    pub episode: String,
    #[serde(rename = "srtfiles")]
    pub subtitle_files: Vec<SubtitleFile>,
}

impl Show {
    /// Local filename for this show's subtitle archive, derived from name
    /// and episode with everything but alphanumerics and spaces stripped.
    /// Deterministic: the same show always maps to the same filename, which
    /// is how the downloaded archive is found again later.
    pub fn archive_filename(&self) -> String {
        let label = format!("{} {}", self.name.trim(), self.episode.trim());
        let kept: String = label
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect();
        format!("{}{}", kept.trim_end(), ARCHIVE_EXTENSION)
    }
}

/// The label shown when the user picks a show from the candidate list.
impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.episode.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} - {}", self.name, self.episode)
        }
    }
}

/// Resolves `href` against `domain` unless it is already an absolute URL.
pub fn resolve_url(domain: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{domain}{href}")
    }
}
