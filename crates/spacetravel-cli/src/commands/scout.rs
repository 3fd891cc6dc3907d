//! Scout command handler: strandedness and refuelling outlook for a planet.

use anyhow::{ensure, Result};
use serde::Serialize;
use spacetravel_lib::{
    is_stranded, nearest_refuel_station, reachable_planets, resolve_planet, FuelPolicy,
    ReachablePlanet, Starmap, StationDistance,
};

use crate::output::{self, OutputFormat};

/// Arguments for the scout command.
#[derive(Debug, Clone)]
pub struct ScoutCommandArgs {
    /// Planet to scout from.
    pub at: String,
    /// Fuel on board in litres; a full tank when absent.
    pub fuel: Option<f64>,
}

/// Survey of the travel options from one planet.
#[derive(Debug, Clone, Serialize)]
pub struct ScoutReport {
    pub at: String,
    pub available_fuel: f64,
    pub is_stranded: bool,
    pub nearest_refuel_station: Option<StationDistance>,
    pub reachable_planets: Vec<ReachablePlanet>,
}

/// Handle the scout subcommand.
pub fn handle_scout_command(
    starmap: &Starmap,
    format: OutputFormat,
    args: &ScoutCommandArgs,
) -> Result<()> {
    let policy = FuelPolicy::default();
    let available_fuel = args.fuel.unwrap_or(policy.tank_capacity);
    ensure!(
        available_fuel.is_finite() && available_fuel >= 0.0,
        "fuel must be a non-negative number, got {available_fuel}"
    );

    let planet = resolve_planet(starmap, &args.at)?;

    let report = ScoutReport {
        at: planet.name.clone(),
        available_fuel,
        is_stranded: is_stranded(starmap, &policy, &planet.name, available_fuel),
        nearest_refuel_station: nearest_refuel_station(starmap, &planet.name),
        reachable_planets: reachable_planets(starmap, &policy, &planet.name, available_fuel),
    };

    output::render_scout(&report, format)
}
