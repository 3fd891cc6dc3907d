use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use spacetravel_cli::commands::planets::handle_planets_command;
use spacetravel_cli::commands::scout::{handle_scout_command, ScoutCommandArgs};
use spacetravel_cli::commands::trip::{handle_trip_command, TripCommandArgs};
use spacetravel_cli::commands::voyage::{handle_voyage_command, VoyageCommandArgs};
use spacetravel_cli::output::OutputFormat;
use spacetravel_lib::Starmap;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solar-system trip planning utilities")]
struct Cli {
    /// Override the starmap configuration file path.
    #[arg(long)]
    starmap: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the configured planets, marking refuelling stations.
    Planets,
    /// Assess a single trip between two planets.
    Trip {
        /// Starting planet name.
        #[arg(long = "from")]
        from: String,
        /// Destination planet name.
        #[arg(long = "to")]
        to: String,
        /// Fuel on board in litres; defaults to a full tank.
        #[arg(long)]
        fuel: Option<f64>,
        /// Fly through a wormhole (double fuel burn).
        #[arg(long)]
        wormhole: bool,
    },
    /// Report strandedness, the nearest refuelling station, and reachable
    /// planets.
    Scout {
        /// Planet to scout from.
        #[arg(long = "at")]
        at: String,
        /// Fuel on board in litres; defaults to a full tank.
        #[arg(long)]
        fuel: Option<f64>,
    },
    /// Replay an itinerary through an in-memory travel ledger.
    ///
    /// Steps are planet names or the directives `undo`, `refuel`, and
    /// `restart`. The voyage starts at the default origin with a full tank.
    Voyage {
        /// Itinerary steps.
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let starmap = load_starmap(cli.starmap.as_deref())?;

    match cli.command {
        Command::Planets => handle_planets_command(&starmap, cli.format),
        Command::Trip {
            from,
            to,
            fuel,
            wormhole,
        } => handle_trip_command(
            &starmap,
            cli.format,
            &TripCommandArgs {
                from,
                to,
                fuel,
                wormhole,
            },
        ),
        Command::Scout { at, fuel } => {
            handle_scout_command(&starmap, cli.format, &ScoutCommandArgs { at, fuel })
        }
        Command::Voyage { steps } => {
            handle_voyage_command(&starmap, cli.format, &VoyageCommandArgs { steps })
        }
    }
}

fn load_starmap(path: Option<&Path>) -> Result<Starmap> {
    match path {
        Some(path) => Starmap::from_path(path)
            .with_context(|| format!("failed to load starmap from {}", path.display())),
        None => Ok(Starmap::builtin().clone()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
