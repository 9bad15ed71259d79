use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use meddir_core::{ActiveFilters, DirectoryService, Listing};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dataset;

#[derive(Parser)]
#[command(name = "meddir")]
#[command(about = "Provider directory search and filter CLI")]
struct Cli {
    /// Path to the listings dataset (JSON array). Falls back to
    /// MEDDIR_DATA_FILE, then listings.json.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all listings
    List,
    /// Show the selectable filter values
    Options,
    /// Search listings by free text
    Search {
        /// Space-separated keywords; every keyword must match
        query: String,
    },
    /// Search and filter in one pass
    Query {
        /// Space-separated keywords (optional)
        #[arg(default_value = "")]
        query: String,
        /// Specialty to filter by (repeatable)
        #[arg(long = "specialty")]
        specialties: Vec<String>,
        /// State to filter by (repeatable)
        #[arg(long = "state")]
        states: Vec<String>,
        /// Filter selections as a JSON object, e.g. '{"states": ["NY"]}'
        #[arg(long, conflicts_with_all = ["specialties", "states"])]
        filters: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("meddir_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let data_path = config::resolve_dataset_path(cli.data, std::env::var("MEDDIR_DATA_FILE").ok());
    let listings = dataset::load_listings(&data_path)?;
    let service = DirectoryService::new(listings);

    match cli.command {
        Some(Commands::List) => {
            print_listings(service.listings());
        }
        Some(Commands::Options) => {
            let options = service.filter_options();
            println!("Specialties:");
            for specialty in &options.specialties {
                println!("  {specialty}");
            }
            println!("States:");
            for state in &options.states {
                println!("  {state}");
            }
        }
        Some(Commands::Search { query }) => {
            let results = service.query(&query, &ActiveFilters::none());
            print_listings(&results);
        }
        Some(Commands::Query {
            query,
            specialties,
            states,
            filters,
        }) => {
            let active = match filters {
                Some(json) => {
                    serde_json::from_str(&json).context("invalid --filters JSON")?
                }
                None => ActiveFilters {
                    specialties,
                    states,
                },
            };
            let results = service.query(&query, &active);
            print_listings(&results);
        }
        None => {
            println!("Use 'meddir --help' for commands");
        }
    }

    Ok(())
}

fn print_listings(listings: &[Listing]) {
    if listings.is_empty() {
        println!("No listings found.");
        return;
    }
    for listing in listings {
        let state = listing
            .region
            .as_ref()
            .map(|region| region.state.as_str())
            .unwrap_or("-");
        println!(
            "ID: {}, Name: {}, Specialty: {}, State: {}",
            listing.id, listing.name, listing.primary_specialty, state
        );
    }
}
