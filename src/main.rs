use std::path::PathBuf;

use clap::{Parser, Subcommand};

use subscrape::{ARCHIVE_EXTENSION, CatalogResolver, SiteConfig, resolve_url};

#[derive(Parser)]
#[command(name = "subscrape", about = "Find and download subtitle archives")]
struct Cli {
    /// JSON file overriding the site defaults (domain, marker tokens,
    /// column indices)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of a numbered list
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the site for shows matching a free-text query
    Search { query: String },
    /// List the subtitle archives available on a show page
    Subs {
        /// Show href from a search result, or a full URL
        href: String,
    },
    /// Download one subtitle archive
    Get {
        /// Archive href from a listing, or a full URL
        href: String,
        /// Target file; a missing extension gets ".zip" appended
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "subscrape=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config: SiteConfig = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => SiteConfig::default(),
    };
    let resolver = CatalogResolver::new(config)?;

    match cli.command {
        Command::Search { query } => {
            let shows = resolver.search_show(&query).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&shows)?);
            } else if shows.is_empty() {
                println!("No shows found");
            } else {
                for (i, show) in shows.iter().enumerate() {
                    println!("{} - {}  [{}]", i + 1, show, show.href);
                }
            }
        }
        Command::Subs { href } => {
            let url = resolve_url(&resolver.config().domain, &href);
            let files = resolver.get_subtitles_for_show(&url).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else if files.is_empty() {
                println!("No subtitle files found");
            } else {
                for (i, file) in files.iter().enumerate() {
                    println!("{} - {}  [{}]", i + 1, file.name, file.href);
                }
            }
        }
        Command::Get { href, out } => {
            let url = resolve_url(&resolver.config().domain, &href);
            let out = out.unwrap_or_else(|| default_archive_name(&url));
            let size = resolver.download_archive(&url, &out).await?;
            println!("Retrieved {} ({} bytes)", out.display(), size);
        }
    }

    Ok(())
}

/// Fallback target filename taken from the last URL path segment.
fn default_archive_name(url: &str) -> PathBuf {
    let segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("subtitles");
    PathBuf::from(format!("{segment}{ARCHIVE_EXTENSION}"))
}
