//! Pure trip feasibility calculations.
//!
//! Every function here is a pure mapping from (starmap, fuel policy, current
//! position, available fuel) to derived values. Uncharted pairs count as
//! unreachable, so scans simply skip them.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fuel::{FuelPolicy, TravelMode};
use crate::starmap::{resolve_planet, Starmap};

/// Outcome of sizing a single trip against the available fuel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripAssessment {
    pub from: String,
    pub to: String,
    pub mode: TravelMode,
    pub distance_km: f64,
    pub required_fuel: f64,
    pub available_fuel: f64,
    pub is_possible: bool,
}

/// A refuelling station with its charted distance from a given origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationDistance {
    pub name: String,
    pub distance_km: f64,
}

/// A planet reachable with the current fuel budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachablePlanet {
    pub name: String,
    pub distance_km: f64,
    pub required_fuel: f64,
}

/// Fuel required to fly from `from` to `destination` in the given mode.
///
/// An absent destination costs nothing. Unknown planets and uncharted pairs
/// are errors.
pub fn required_fuel(
    starmap: &Starmap,
    policy: &FuelPolicy,
    from: &str,
    destination: Option<&str>,
    mode: TravelMode,
) -> Result<f64> {
    let from = resolve_planet(starmap, from)?;
    let Some(destination) = destination else {
        return Ok(0.0);
    };
    let destination = resolve_planet(starmap, destination)?;

    let distance = starmap
        .distance_km(&from.name, &destination.name)
        .ok_or_else(|| Error::UnchartedRoute {
            from: from.name.clone(),
            to: destination.name.clone(),
        })?;

    Ok(policy.required_fuel(distance, mode))
}

/// Size a trip between two planets against the available fuel.
pub fn assess_trip(
    starmap: &Starmap,
    policy: &FuelPolicy,
    from: &str,
    to: &str,
    available_fuel: f64,
    mode: TravelMode,
) -> Result<TripAssessment> {
    let from = resolve_planet(starmap, from)?;
    let to = resolve_planet(starmap, to)?;

    let distance_km = starmap
        .distance_km(&from.name, &to.name)
        .ok_or_else(|| Error::UnchartedRoute {
            from: from.name.clone(),
            to: to.name.clone(),
        })?;

    let required_fuel = policy.required_fuel(distance_km, mode);

    Ok(TripAssessment {
        from: from.name.clone(),
        to: to.name.clone(),
        mode,
        distance_km,
        required_fuel,
        available_fuel,
        is_possible: available_fuel >= required_fuel,
    })
}

/// Whether the traveller is stranded at `current` with `available_fuel`.
///
/// Stranded means no refuelling station and no other planet is reachable
/// under the standard consumption ratio.
pub fn is_stranded(
    starmap: &Starmap,
    policy: &FuelPolicy,
    current: &str,
    available_fuel: f64,
) -> bool {
    let within_budget = |target: &str| {
        starmap
            .distance_km(current, target)
            .map(|distance| {
                available_fuel >= policy.required_fuel(distance, TravelMode::Standard)
            })
            .unwrap_or(false)
    };

    let can_reach_station = starmap
        .refueling_stations()
        .iter()
        .any(|station| within_budget(station));

    let can_reach_planet = starmap
        .planets()
        .iter()
        .filter(|planet| !planet.name.eq_ignore_ascii_case(current))
        .any(|planet| within_budget(&planet.name));

    !(can_reach_station || can_reach_planet)
}

/// The closest refuelling station to `current`, excluding `current` itself.
///
/// Ties resolve to the station listed first in the configuration; stations
/// with no charted distance are skipped.
pub fn nearest_refuel_station(starmap: &Starmap, current: &str) -> Option<StationDistance> {
    let mut nearest: Option<StationDistance> = None;

    for station in starmap.refueling_stations() {
        if station.eq_ignore_ascii_case(current) {
            continue;
        }
        let Some(distance_km) = starmap.distance_km(current, station) else {
            continue;
        };
        let closer = match &nearest {
            None => true,
            Some(best) => distance_km < best.distance_km,
        };
        if closer {
            nearest = Some(StationDistance {
                name: station.clone(),
                distance_km,
            });
        }
    }

    nearest
}

/// Every other planet reachable from `current` with `available_fuel`, in
/// configuration order, with the per-planet fuel cost.
pub fn reachable_planets(
    starmap: &Starmap,
    policy: &FuelPolicy,
    current: &str,
    available_fuel: f64,
) -> Vec<ReachablePlanet> {
    starmap
        .planets()
        .iter()
        .filter(|planet| !planet.name.eq_ignore_ascii_case(current))
        .filter_map(|planet| {
            let distance_km = starmap.distance_km(current, &planet.name)?;
            let required_fuel = policy.required_fuel(distance_km, TravelMode::Standard);
            (available_fuel >= required_fuel).then(|| ReachablePlanet {
                name: planet.name.clone(),
                distance_km,
                required_fuel,
            })
        })
        .collect()
}
