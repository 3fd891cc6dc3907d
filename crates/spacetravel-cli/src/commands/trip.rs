//! Trip command handler: one-shot feasibility assessment.

use anyhow::{ensure, Result};
use spacetravel_lib::{assess_trip, FuelPolicy, Starmap, TravelMode};

use crate::output::{self, OutputFormat};

/// Arguments for the trip command.
#[derive(Debug, Clone)]
pub struct TripCommandArgs {
    /// Starting planet name.
    pub from: String,
    /// Destination planet name.
    pub to: String,
    /// Fuel on board in litres; a full tank when absent.
    pub fuel: Option<f64>,
    /// Fly through a wormhole instead of a standard transit.
    pub wormhole: bool,
}

/// Handle the trip subcommand.
///
/// Sizes a single trip between two planets against the available fuel and
/// renders the assessment; the verdict is informational, so an impossible
/// trip still exits successfully.
pub fn handle_trip_command(
    starmap: &Starmap,
    format: OutputFormat,
    args: &TripCommandArgs,
) -> Result<()> {
    let policy = FuelPolicy::default();
    let available_fuel = args.fuel.unwrap_or(policy.tank_capacity);
    ensure!(
        available_fuel.is_finite() && available_fuel >= 0.0,
        "fuel must be a non-negative number, got {available_fuel}"
    );

    let mode = if args.wormhole {
        TravelMode::Wormhole
    } else {
        TravelMode::Standard
    };

    let assessment = assess_trip(starmap, &policy, &args.from, &args.to, available_fuel, mode)?;
    output::render_assessment(&assessment, format)
}
