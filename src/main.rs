use clap::Parser;
use pawmatch_algo::catalog::JsonCatalog;
use pawmatch_algo::config::Settings;
use pawmatch_algo::core::Ranker;
use pawmatch_algo::models::{BreedProfile, RankRequest, RankResponse};
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info};
use validator::Validate;

/// Rank the breed catalog against a set of owner preferences.
///
/// Reads a RankRequest JSON document (a preferences object plus options)
/// and prints the ranked breeds as JSON on stdout.
#[derive(Debug, Parser)]
#[command(name = "pawmatch-algo", version, about)]
struct Cli {
    /// Path to the rank request JSON file; reads stdin when omitted
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Override the configured breed catalog path
    #[arg(long, env = "PAWMATCH_CATALOG__PATH")]
    catalog: Option<PathBuf>,

    /// Override the result limit from the request
    #[arg(long)]
    limit: Option<u16>,
}

fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    let catalog_path = cli
        .catalog
        .unwrap_or_else(|| PathBuf::from(&settings.catalog.path));

    let catalog = JsonCatalog::load(&catalog_path).map_err(|e| {
        error!("Failed to load catalog from {}: {}", catalog_path.display(), e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "Loaded {} breeds from {}",
        catalog.len(),
        catalog_path.display()
    );

    // Read the rank request (file or stdin)
    let raw = match &cli.request {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request: RankRequest = serde_json::from_str(&raw).map_err(|e| {
        error!("Invalid rank request JSON: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    if let Err(errors) = request.validate() {
        error!("Validation failed for rank request: {}", errors);
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            errors.to_string(),
        ));
    }

    // Cap the limit to keep output bounded
    let max_limit = settings.ranking.max_limit.unwrap_or(100);
    let limit = cli
        .limit
        .unwrap_or(request.limit)
        .min(max_limit) as usize;

    let breeds: Vec<BreedProfile> = catalog
        .into_breeds()
        .into_iter()
        .filter(|b| !request.exclude_breed_ids.contains(&b.breed_id))
        .collect();

    let ranker = Ranker::new();
    let result = ranker.rank(&request.preferences, breeds);

    info!(
        "Returning {} of {} ranked breeds",
        limit.min(result.ranked.len()),
        result.total_candidates
    );

    let mut matches = result.ranked;
    matches.truncate(limit);

    let response = RankResponse {
        matches,
        total_candidates: result.total_candidates,
        generated_at: chrono::Utc::now(),
    };

    let body = serde_json::to_string_pretty(&response)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    println!("{}", body);

    Ok(())
}
