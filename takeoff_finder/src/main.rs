use algorithm::{
    runways_of_airports,
    takeoff::{
        DEFAULT_DISTANCE_THRESHOLD_METERS, DEFAULT_SPEED_THRESHOLD_MPS, TakeoffThresholds,
        find_takeoffs, takeoff_histories,
    },
};
use clap::{Parser, Subcommand};
use common::runway::Runway;
use dirs::cache_dir;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};
use storage::{
    LocationCache, StorageError, TakeoffStorage,
    runway_lines::{load_airport_ids, load_runway_lines},
    runways::{load_runways, save_runways},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Builds the runway table from runway lines and an airport list
    Runways {
        /// GeoJSON file with one LineString per runway
        #[arg(short = 'l', long)]
        runway_lines: PathBuf,
        /// Tab separated airport list with a FAA column
        #[arg(short, long)]
        airports: PathBuf,
        /// Runway table to write, tab separated for .tsv files
        #[arg(short, long, default_value = "data/runways.csv")]
        output: PathBuf,
    },
    /// Finds users taking off and writes their location history
    Takeoffs {
        /// CSV file with user_id, client_utc_sec, latitude, longitude and speed
        #[arg(short, long)]
        locations: PathBuf,
        /// Runway table, tab separated for .tsv files
        #[arg(short, long)]
        runways: PathBuf,
        /// Only users whose id starts with this prefix are processed
        #[arg(short, long, default_value = "0")]
        prefix: String,
        /// Samples must be faster than this (m/s)
        #[arg(short, long, default_value_t = DEFAULT_SPEED_THRESHOLD_MPS)]
        speed_threshold: f64,
        /// Samples must be closer to a runway than this (m)
        #[arg(short, long, default_value_t = DEFAULT_DISTANCE_THRESHOLD_METERS)]
        distance_threshold: f64,
        /// Folder of the prefix filtered location cache
        #[arg(short, long)]
        cache_dir: Option<PathBuf>,
        /// Folder for the per-user takeoff files
        #[arg(short = 'o', long, default_value = "takeoffs")]
        output_dir: PathBuf,
    },
}

fn get_cache_dir(cli_dir: Option<PathBuf>) -> PathBuf {
    cli_dir.unwrap_or_else(|| match cache_dir() {
        Some(mut dir) => {
            dir.push("takeoff_finder");
            dir
        }
        None => PathBuf::from("data"),
    })
}

fn build_runway_table(
    runway_lines: &Path,
    airports: &Path,
    output: &Path,
) -> Result<(), StorageError> {
    let airports: HashSet<String> = load_airport_ids(airports)?;
    info!("{} airports", airports.len());

    let lines = load_runway_lines(runway_lines)?;
    let before: HashSet<&str> = lines.iter().map(|l| l.airport_id.as_str()).collect();
    info!(
        "before filtering: {} runways from {} airports",
        lines.len(),
        before.len()
    );

    let runways: Vec<Runway> = runways_of_airports(&lines, &airports);
    let after: HashSet<&str> = runways.iter().map(|r| r.airport_id.as_str()).collect();
    info!(
        "after filtering: {} runways from {} airports",
        runways.len(),
        after.len()
    );

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    save_runways(output, &runways)?;
    info!("Wrote runway table {}", output.to_string_lossy());
    Ok(())
}

async fn find_and_store_takeoffs(
    locations: &Path,
    runways: &Path,
    prefix: &str,
    thresholds: &TakeoffThresholds,
    cache_dir: &Path,
    output_dir: &Path,
) -> Result<(), StorageError> {
    let samples = LocationCache::new(cache_dir)?.load(locations, prefix)?;
    let runways = load_runways(runways)?;

    let takeoffs = find_takeoffs(&samples, &runways, thresholds);
    info!("Found takeoffs of {} users", takeoffs.len());

    let histories = takeoff_histories(&samples, &takeoffs);
    TakeoffStorage::new(output_dir)?.save_all(&histories).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let result = match cli.command {
        Command::Runways {
            runway_lines,
            airports,
            output,
        } => build_runway_table(&runway_lines, &airports, &output),
        Command::Takeoffs {
            locations,
            runways,
            prefix,
            speed_threshold,
            distance_threshold,
            cache_dir,
            output_dir,
        } => {
            let thresholds = TakeoffThresholds {
                speed_mps: speed_threshold,
                distance_m: distance_threshold,
            };
            find_and_store_takeoffs(
                &locations,
                &runways,
                &prefix,
                &thresholds,
                &get_cache_dir(cache_dir),
                &output_dir,
            )
            .await
        }
    };

    result.map_err(|e| {
        error!("Failed to run command. Error: {}", e);
    })
}
