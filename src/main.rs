use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use radest::config::Config;
use radest::output;
use radest::radiation::profile::{latitude_profile, longitude_profile};
use radest::radiation::radiation_samples;
use radest::radiation::time_equation::time_equation;
use radest::site::SiteParameters;

#[derive(Parser)]
#[command(name = "radest")]
#[command(author, version, about = "Clear-sky solar radiation estimates", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Global radiation time series for the run described in a JSON config
    Series {
        /// JSON run configuration
        #[arg(short, long)]
        config: PathBuf,
        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Offset of the daily radiation maximum from noon, for each day of a year
    TimeEquation {
        /// Latitude, decimal degrees, positive northwards
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude, decimal degrees, positive eastwards
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Hours displacement from GMT
        #[arg(long, allow_hyphen_values = true)]
        zone: i32,
        #[arg(long)]
        year: i32,
        /// Sampling step within each day (s)
        #[arg(long, default_value_t = 1)]
        step: u32,
        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Noon global radiation by latitude on equinoxes and solstices
    LatitudeProfile {
        #[arg(long)]
        year: i32,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        zone: i32,
        /// Height above mean sea level (m)
        #[arg(long, default_value_t = 0.0)]
        height: f64,
        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Global radiation around the equator at local midnight on equinoxes and solstices
    LongitudeProfile {
        #[arg(long)]
        year: i32,
        /// Height above mean sea level (m)
        #[arg(long, default_value_t = 0.0)]
        height: f64,
        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let start = Instant::now();

    match cli.command {
        Commands::Series { config, output } => {
            let config = Config::from_file(&config)?;
            let window = config.averaging_window()?;
            let site = *config.site();
            let height = config.height();

            let time_stamps: Vec<NaiveDateTime> = config.collect();
            let samples = radiation_samples(&time_stamps, &window, &site, height)?;

            let mut file = output::create(&output)?;
            output::write_series(&mut file, &samples)?;

            if let Some(peak) = samples.iter().max_by(|a, b| a.rg.total_cmp(&b.rg)) {
                info!(
                    samples = samples.len(),
                    peak_rg = peak.rg,
                    peak_time = %peak.time_stamp,
                    "series written to {}",
                    output.display()
                );
            }
        }
        Commands::TimeEquation {
            lat,
            lon,
            zone,
            year,
            step,
            output,
        } => {
            let site = SiteParameters::new(lat, lon, zone)?;
            let samples = time_equation(year, &site, step)?;

            let mut file = output::create(&output)?;
            output::write_time_equation(&mut file, &samples)?;
            info!(days = samples.len(), "time equation written to {}", output.display());
        }
        Commands::LatitudeProfile {
            year,
            lon,
            zone,
            height,
            output,
        } => {
            let rows = latitude_profile(year, lon, zone, height)?;

            let mut file = output::create(&output)?;
            output::write_latitude_profile(&mut file, &rows)?;
            info!(rows = rows.len(), "latitude profile written to {}", output.display());
        }
        Commands::LongitudeProfile {
            year,
            height,
            output,
        } => {
            let rows = longitude_profile(year, height)?;

            let mut file = output::create(&output)?;
            output::write_longitude_profile(&mut file, &rows)?;
            info!(rows = rows.len(), "longitude profile written to {}", output.display());
        }
    }

    info!("Done in {:.2?}", start.elapsed());

    Ok(())
}
