use serde::Deserialize;

/// Markup tokens and layout parameters for the scraped site.
///
/// Every marker the parsers key on lives here, so when the site shuffles its
/// markup the fix is a configuration edit rather than a hunt through the
/// parsers. The defaults match the site's current layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Domain that relative hrefs are resolved against.
    pub domain: String,
    /// Search root URL. The query text is appended with spaces turned into
    /// `+`. Any language filter rides inside this URL as an opaque component.
    pub search_url: String,
    /// `id` attribute of the results table on search and listing pages.
    pub results_table_id: String,
    /// Candidate rows carry an `id` starting with this prefix; rows without
    /// it are decorative.
    pub row_id_prefix: String,
    /// The main cell of a candidate row carries an `id` starting with this.
    pub main_cell_prefix: String,
    /// CSS class on the anchor holding a show's name.
    pub name_anchor_class: String,
    /// `itemprop` value marking a results table as a full-season listing.
    pub season_marker: String,
    /// `itemtype` of the container element on single-item pages.
    pub movie_item_type: String,
    /// Column holding the subtitle anchor on episode-listing pages.
    pub episode_href_column: usize,
    /// Column holding the subtitle anchor on season-listing episode rows.
    /// The site lays these two modes out differently, hence two indices.
    pub season_href_column: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: "https://www.opensubtitles.org".to_string(),
            search_url: "https://www.opensubtitles.org/en/search2/sublanguageid-eng/moviename-"
                .to_string(),
            results_table_id: "search_results".to_string(),
            row_id_prefix: "name".to_string(),
            main_cell_prefix: "main".to_string(),
            name_anchor_class: "bnone".to_string(),
            season_marker: "season".to_string(),
            movie_item_type: "http://schema.org/Movie".to_string(),
            episode_href_column: 4,
            season_href_column: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_file_keeps_defaults_for_the_rest() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"domain": "https://mirror.example.org"}"#).unwrap();
        assert_eq!(config.domain, "https://mirror.example.org");
        assert_eq!(config.results_table_id, "search_results");
        assert_eq!(config.episode_href_column, 4);
    }
}
