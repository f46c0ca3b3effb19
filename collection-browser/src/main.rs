use clap::{Parser, Subcommand};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use collection_browser::{error_chain, App, AppConfig, AppError};
use collection_browser_shared::Collection;

#[derive(Parser)]
#[command(name = "collection-browser")]
#[command(about = "Browse the collections and documents of a Typesense server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Typesense server URL (overrides TYPESENSE_URL)
    #[arg(long, global = true)]
    url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all collections with their fields and document counts
    Collections {
        /// Print the collections as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the documents of a collection as JSON
    Data {
        /// Collection name
        name: String,
    },
    /// Print the id and title of each document in a collection
    Entries {
        /// Collection name
        name: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries command output
    if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let chain = error_chain(&e);
        error!(error = %chain.join(": "), "Command failed");
        eprintln!("Error: {}", chain[0]);
        for cause in &chain[1..] {
            eprintln!("  Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::from_env();
    if let Some(url) = cli.url {
        config = config.with_url(url);
    }

    let app = App::new(&config)?;

    match cli.command {
        Commands::Collections { json } => {
            let collections = app.get_collections().await?;
            info!(count = collections.len(), "Retrieved collections");
            if json {
                println!("{}", serde_json::to_string_pretty(&collections)?);
            } else {
                print_collections(&collections);
            }
        }
        Commands::Data { name } => {
            let data = app.get_collection_data(&name).await?;
            println!("{}", data);
        }
        Commands::Entries { name } => {
            let entries = app.get_collection_entries(&name).await?;
            info!(collection = %name, count = entries.len(), "Retrieved entries");
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

fn print_collections(collections: &[Collection]) {
    if collections.is_empty() {
        println!("No collections");
        return;
    }

    for collection in collections {
        println!("{} ({} documents)", collection.name, collection.num_documents);
        for field in &collection.fields {
            println!("  - {}: {}", field.name, field.field_type);
        }
    }
}
