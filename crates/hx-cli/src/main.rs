//! CLI frontend for hexcast: draw and inspect I Ching readings.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::draw::DrawOptions;

#[derive(Parser)]
#[command(
    name = "hx",
    about = "hexcast: I Ching readings from battery noise and the clock",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample entropy and draw a reading
    Draw {
        /// Return the seed without the artificial pause
        #[arg(long)]
        no_delay: bool,

        /// Pause before the seed is returned, in milliseconds
        #[arg(long, conflicts_with = "no_delay")]
        latency_ms: Option<u64>,

        /// Use this battery fraction (0-1) instead of reading the system
        #[arg(long, value_parser = parse_battery_level)]
        battery: Option<f64>,

        /// Power-supply directory to scan for a battery
        #[arg(long)]
        sysfs_root: Option<PathBuf>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the reading for a fixed seed
    Cast {
        /// Seed value (any integer)
        #[arg(allow_negative_numbers = true)]
        seed: i64,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a reading from six line values (6-9), bottom line first
    Lines {
        /// Six values: 6 old yin, 7 young yang, 8 young yin, 9 old yang
        #[arg(num_args = 6, required = true)]
        values: Vec<u8>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all 64 hexagrams
    Table,

    /// Verify the hexagram table resolves every pattern both ways
    Check,

    /// Show the interpretation of a hexagram
    Meaning {
        /// Hexagram number (1-64)
        number: u8,
    },
}

/// A battery fraction: a finite number in `[0, 1]`.
fn parse_battery_level(raw: &str) -> Result<f64, String> {
    let level: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !level.is_finite() || !(0.0..=1.0).contains(&level) {
        return Err(format!("`{raw}` is not a fraction between 0 and 1"));
    }
    Ok(level)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw {
            no_delay,
            latency_ms,
            battery,
            sysfs_root,
            json,
        } => {
            let latency = if no_delay {
                Some(Duration::ZERO)
            } else {
                latency_ms.map(Duration::from_millis)
            };
            commands::draw::run(DrawOptions {
                latency,
                battery,
                sysfs_root,
                json,
            })
        }
        Commands::Cast { seed, json } => commands::cast::run(seed, json),
        Commands::Lines { values, json } => commands::lines::run(&values, json),
        Commands::Table => commands::table::run(),
        Commands::Check => commands::check::run(),
        Commands::Meaning { number } => commands::meaning::run(number),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
