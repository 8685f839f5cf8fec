use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ungaa_engine::{Catalog, MatcherConfig, Recommender, RecommendationKind, SynonymTable, SAMPLE_QUERIES};

#[derive(Parser)]
#[command(name = "ungaa-cli")]
#[command(about = "Ungaa content matcher CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog JSON file (defaults to the bundled sample catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Synonym table JSON file (defaults to the bundled sample table)
    #[arg(long, global = true)]
    synonyms: Option<PathBuf>,

    /// Config YAML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend items for a query
    Recommend {
        /// Search query (blank for default picks)
        #[arg(default_value = "")]
        query: String,

        /// Override the number of default picks
        #[arg(short, long)]
        default_count: Option<usize>,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every sample suggestion query and show its top pick
    Suggest,

    /// List catalog items
    Catalog,
}

fn build_engine(cli: &Cli, default_count: Option<usize>) -> anyhow::Result<Recommender> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample(),
    };
    let synonyms = match &cli.synonyms {
        Some(path) => SynonymTable::load(path)?,
        None => SynonymTable::sample(),
    };
    let mut config = match &cli.config {
        Some(path) => MatcherConfig::load(path)?,
        None => MatcherConfig::default(),
    };
    if let Some(count) = default_count {
        config = config.with_default_count(count);
    }

    Ok(Recommender::with_config(catalog, synonyms, config))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "ungaa_engine=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Recommend { query, default_count, json } => {
            let engine = build_engine(&cli, *default_count)?;
            let rec = engine.recommend(query);

            if *json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
                return Ok(());
            }

            match rec.kind {
                RecommendationKind::Default => println!("⭐ Default picks:"),
                RecommendationKind::Scored => println!("🔍 Results for: {}", query),
                RecommendationKind::NoResults => {
                    println!(
                        "No results. Try simpler phrases (e.g., \"calculus\", \"biology\")."
                    );
                    return Ok(());
                }
            }

            for (i, entry) in rec.entries.iter().enumerate() {
                match entry.score {
                    Some(score) => println!("   {}. {} (score {})", i + 1, entry.item.title, score),
                    None => println!("   {}. {}", i + 1, entry.item.title),
                }
                println!("      {}", entry.item.description);
            }

            if let Some(top) = rec.top() {
                println!("\n▶ Preview: {}", top.item.title);
            }
            println!("   Latency: {:.3}ms", rec.latency_ms);
        }

        Commands::Suggest => {
            let engine = build_engine(&cli, None)?;

            println!("💡 Suggestions:");
            for query in SAMPLE_QUERIES {
                let rec = engine.recommend(query);
                match rec.top() {
                    Some(top) => println!(
                        "   {:<18} → {} ({} results)",
                        query,
                        top.item.title,
                        rec.len()
                    ),
                    None => println!("   {:<18} → no results", query),
                }
            }
        }

        Commands::Catalog => {
            let engine = build_engine(&cli, None)?;

            println!("📋 Catalog ({} items):", engine.catalog().len());
            for item in engine.catalog().items() {
                println!("   {} [{}]", item.display_name(), item.tags.join(", "));
            }
        }
    }

    Ok(())
}
