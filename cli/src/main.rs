//! Command-line interface for the recsys recommendation engine.
//!
//! Loads a product catalog once (CSV file, inline JSON, or stdin), fits
//! the engine, and prints ranked matches for an application, a power
//! tier, and a free-text description. When the three query fields are
//! not all supplied as flags, the tool falls back to prompting for them
//! interactively.
//!
//! Configuration via environment:
//! - PRODUCTS_CSV_PATH: default catalog file when no source flag is given

mod input;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use recsys_core::Query;
use recsys_engine::{HybridDiversityStrategy, RecommendationEngine};

use input::CatalogSource;

/// Default catalog file when neither a flag nor the environment names one.
const DEFAULT_CSV_PATH: &str = "products.csv";

/// Default number of recommendations.
const DEFAULT_COUNT: usize = 5;

/// Product recommendation from the command line
///
/// Ranks catalog products for a query using hybrid scoring: exact
/// application and power-tier matches weighted together with description
/// similarity.
#[derive(Parser)]
#[command(name = "recsys")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Application type (e.g., Packaging, Woodworking)
    #[arg(long)]
    application: Option<String>,

    /// Desired power usage (High, Medium, or Low)
    #[arg(long)]
    power: Option<String>,

    /// Description requirements (e.g., quiet, high flow)
    #[arg(long)]
    description: Option<String>,

    /// Number of recommendations
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Output a JSON object instead of ranked text
    #[arg(long)]
    json: bool,

    /// Path to a CSV catalog file
    #[arg(long, value_name = "PATH", env = "PRODUCTS_CSV_PATH")]
    data_csv: Option<PathBuf>,

    /// Product data as an inline JSON array
    #[arg(long, value_name = "JSON")]
    data_json: Option<String>,

    /// Read product data as JSON from stdin
    #[arg(long)]
    data_stdin: bool,
}

impl Cli {
    /// Resolves the catalog source from the flags. Stdin wins over
    /// inline JSON, which wins over a CSV path; the CSV path falls back
    /// to the environment and then to `products.csv`.
    fn catalog_source(&self) -> CatalogSource {
        if self.data_stdin {
            CatalogSource::Stdin
        } else if let Some(data) = &self.data_json {
            CatalogSource::Json(data.clone())
        } else {
            let path = self
                .data_csv
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));
            CatalogSource::Csv(path)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let records = input::load_records(&cli.catalog_source())?;

    let engine = RecommendationEngine::new();
    let loaded = engine.load_products(&records);
    eprintln!("Loaded {loaded} products");

    // Interactive fallback: prompt for everything unless all three query
    // fields came in as flags.
    let (application, power, description) =
        match (&cli.application, &cli.power, &cli.description) {
            (Some(app), Some(power), Some(desc)) => (app.clone(), power.clone(), desc.clone()),
            _ => input::prompt_query()?,
        };

    let query = Query::new(application, power, description, cli.count);
    let results = engine.recommend(&query, &HybridDiversityStrategy::new())?;

    if cli.json {
        output::print_json(&results)?;
    } else {
        output::print_human(&results);
    }

    Ok(())
}
