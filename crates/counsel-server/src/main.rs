//! Counsel: psychologist response corpus and NLP demo server.

use std::path::PathBuf;
use std::sync::Arc;

use counsel_core::{CounselConfig, LoadMode};
use counsel_server::{build_router, AppState};
use counsel_store::Corpus;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Load the dataset with both loader variants and print what each keeps.
fn check_dataset(path: PathBuf) -> bool {
    let all = match Corpus::try_load(&path, LoadMode::All) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };
    let unique = Corpus::from_records(all.records().to_vec(), LoadMode::Unique);

    println!("Dataset: {}", path.display());
    println!("  records:         {}", all.stats().read);
    println!("  indexed ids:     {}", all.stats().indexed);
    println!("  unique outputs:  {}", unique.stats().retained);
    println!("  duplicates:      {}", unique.stats().dropped);
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CounselConfig::from_env()?;
    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--check" | "check" => {
                let path = args
                    .get(2)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| config.dataset.clone());
                std::process::exit(if check_dataset(path) { 0 } else { 1 });
            }
            "--help" | "-h" | "help" => {
                println!("Counsel: psychologist responses and NLP demo API");
                println!();
                println!("Usage: counsel [command]");
                println!();
                println!("Commands:");
                println!("  (none)             Start the server");
                println!("  check [dataset]    Load a dataset and report record counts");
                println!("  help               Show this help message");
                println!();
                println!("Environment:");
                println!("  PORT, COUNSEL_HOST, COUNSEL_DATASET, COUNSEL_LOAD_MODE (all|unique),");
                println!("  COUNSEL_DEFAULT_LIMIT, COUNSEL_RNG_SEED, COUNSEL_NER_BACKEND (heuristic|none),");
                println!("  COUNSEL_NER_GAZETTEER");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'counsel help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let addr = config.bind_addr();

    // Build application state
    let state = Arc::new(AppState::from_config(config));

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Counsel server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
