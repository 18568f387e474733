//! Terminal adapter over the park routing engine.
//!
//! The second thin UI surface next to the HTTP server: resolves a wait
//! snapshot, calls the planner, prints the itinerary. No planning logic.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use parkway_core::feed::{CachedFeed, CsvWaitFeed};
use parkway_core::loading::{ParkModelConfig, create_park_model};
use parkway_core::routing::plan;
use parkway_core::scene::WaitBand;

#[derive(Debug, Parser)]
#[command(name = "parkway", about = "Park route optimization")]
struct Cli {
    /// TOML configuration with the catalog and feed paths
    #[arg(long, default_value = "demos/park/parkway.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan the cheapest walk+wait route between two attractions
    Route {
        #[arg(long, default_value = "Entrance")]
        from: String,
        #[arg(long, default_value = "Harry Potter Diagon Alley")]
        to: String,
        /// Print the route as JSON instead of a step list
        #[arg(long)]
        json: bool,
    },
    /// Show current wait times for every attraction
    Waits,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(&cli.config)?;
    let config: ParkModelConfig = toml::from_str(&raw)?;

    let model = create_park_model(&config)?;
    let feed = CachedFeed::new(
        CsvWaitFeed::new(&config.wait_times_path),
        model.meta.feed_ttl,
        model.meta.default_wait,
    );
    let snapshot = feed.snapshot(model.graph.attraction_names());

    match cli.command {
        Command::Route { from, to, json } => {
            let route = plan(&model, &snapshot, &from, &to)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&route)?);
            } else {
                println!("Route: {}", route.path.join(" -> "));
                println!("Est. total time: {} min", route.total_minutes);
                for (idx, step) in route.steps.iter().enumerate() {
                    println!(
                        "  {}. Walk to {} (walk {} min, wait {} min)",
                        idx + 1,
                        step.to,
                        step.walk_minutes,
                        step.wait_minutes
                    );
                }
            }
        }
        Command::Waits => {
            let mut names: Vec<&str> = model.graph.attraction_names().collect();
            names.sort_unstable();
            for name in names {
                let wait = snapshot.wait_for(name);
                let band = match WaitBand::from_wait(wait) {
                    WaitBand::Low => "low",
                    WaitBand::Medium => "medium",
                    WaitBand::High => "high",
                };
                println!("{name:<40} {wait:>3} min  [{band}]");
            }
        }
    }

    Ok(())
}
