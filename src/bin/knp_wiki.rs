//! CLI binary for knp-wiki.
//!
//! Loads the search index once, renders the default view, then treats every
//! stdin line as the new value of the search input. With `--query` a single
//! evaluation is rendered instead.
//!
//! All tracing output goes to stderr so that stdout carries only results.

use clap::Parser;
use knp_wiki::config::default_config_path;
use knp_wiki::{JsonLinesView, OutputFormat, ResultView, SearchBox, TextView, WikiConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wiki_search::{DocumentSet, IndexSource};

/// Search the KNP Guide wiki index from the terminal.
#[derive(Parser)]
#[command(name = "knp-wiki", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Index source: URL or path of search-index.json. Overrides the config file.
    #[arg(short, long)]
    index: Option<String>,

    /// Run a single query instead of reading queries from stdin.
    #[arg(short, long)]
    query: Option<String>,

    /// Output format. Overrides the config file.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("knp_wiki=info,wiki_search=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => WikiConfig::from_file(path)?,
        None => WikiConfig::load_or_default(&default_config_path())?,
    };

    let Some(raw_source) = cli.index.or_else(|| config.index.source.clone()) else {
        anyhow::bail!("no index source: pass --index or set [index] source in the config file");
    };
    let source: IndexSource = raw_source.parse()?;

    let index = wiki_search::load_index(&source, &config.loader_config()).await;

    let stdout = std::io::stdout().lock();
    match cli.format.unwrap_or(config.output.format) {
        OutputFormat::Text => run(index, TextView::new(stdout), cli.query.as_deref()),
        OutputFormat::Json => run(index, JsonLinesView::new(stdout), cli.query.as_deref()),
    }
}

fn run<V: ResultView>(
    index: Option<DocumentSet>,
    mut view: V,
    query: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(query) = query {
        // A single evaluation: skip the default view.
        if let Some(index) = index {
            view.index_loaded(&index)?;
            view.replace(&wiki_search::search(&index, query))?;
        }
        return Ok(());
    }

    let mut search_box = SearchBox::bind(index, view)?;
    search_box.listen(std::io::stdin().lock())?;
    Ok(())
}
