//! Travel ledger: the mutable trip state and its append/undo history.
//!
//! The ledger is an explicit value owning the whole travel state; there is
//! no global store. Mutations happen only through the operations below, and
//! every derived value is recomputed on demand from the current state.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::fuel::{FuelPolicy, TravelMode};
use crate::starmap::{resolve_planet, Starmap};
use crate::trip::{self, StationDistance};

/// A completed trip, immutable once appended to the history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    /// Planet the trip departed from.
    pub from: String,
    /// Planet the trip arrived at.
    pub to: String,
    /// Fuel on board before departure, in litres.
    pub fuel_before: f64,
    /// Fuel spent on the trip, in litres.
    pub fuel_spent: f64,
    pub created_at: DateTime<Utc>,
}

/// Success receipt returned by [`TravelLedger::submit_trip`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReceipt {
    pub from: String,
    pub to: String,
    pub fuel_spent: f64,
    pub fuel_remaining: f64,
}

/// The single source of truth for the traveller's position and fuel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelState {
    pub current_planet: String,
    /// Selected destination; `None` while idle.
    pub destination: Option<String>,
    pub available_fuel: f64,
}

/// Read-only derived view recomputed from the ledger on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelSnapshot {
    pub current_planet: String,
    pub destination_planet: Option<String>,
    pub available_fuel: f64,
    /// Fuel needed for the selected destination; zero while idle, absent
    /// when the selected pair is uncharted.
    pub required_fuel: Option<f64>,
    pub is_trip_possible: bool,
    pub is_stranded: bool,
    pub nearest_refuel_station: Option<StationDistance>,
    pub travel_history: Vec<TripRecord>,
}

/// Trip ledger owning the travel state and history.
#[derive(Debug, Clone)]
pub struct TravelLedger {
    starmap: Starmap,
    policy: FuelPolicy,
    state: TravelState,
    history: Vec<TripRecord>,
}

impl TravelLedger {
    /// Create a ledger at the starmap's default origin with a full tank.
    pub fn new(starmap: Starmap, policy: FuelPolicy) -> Result<Self> {
        policy.validate()?;
        let state = TravelState {
            current_planet: starmap.default_origin().to_string(),
            destination: None,
            available_fuel: policy.tank_capacity,
        };
        Ok(Self {
            starmap,
            policy,
            state,
            history: Vec::new(),
        })
    }

    /// The current travel state.
    pub fn state(&self) -> &TravelState {
        &self.state
    }

    /// Completed trips in append order.
    pub fn history(&self) -> &[TripRecord] {
        &self.history
    }

    /// The starmap this ledger travels on.
    pub fn starmap(&self) -> &Starmap {
        &self.starmap
    }

    /// The fuel policy in effect.
    pub fn policy(&self) -> &FuelPolicy {
        &self.policy
    }

    /// Select a destination planet, moving the ledger out of the idle state.
    ///
    /// Unknown planets are rejected with fuzzy suggestions; so is the
    /// current planet.
    pub fn select_destination(&mut self, name: &str) -> Result<()> {
        let planet = resolve_planet(&self.starmap, name)?;
        if planet.name.eq_ignore_ascii_case(&self.state.current_planet) {
            return Err(Error::DestinationIsCurrent {
                name: planet.name.clone(),
            });
        }
        self.state.destination = Some(planet.name.clone());
        Ok(())
    }

    /// Drop the selected destination, returning to the idle state.
    pub fn clear_destination(&mut self) {
        self.state.destination = None;
    }

    /// Fly to the selected destination.
    ///
    /// On success the current planet moves, fuel is decremented, a record is
    /// appended, and the destination is cleared. On failure (no destination,
    /// uncharted pair, or insufficient fuel) the state is left untouched.
    pub fn submit_trip(&mut self) -> Result<TripReceipt> {
        let destination = self
            .state
            .destination
            .clone()
            .ok_or(Error::NoDestinationSelected)?;

        let assessment = trip::assess_trip(
            &self.starmap,
            &self.policy,
            &self.state.current_planet,
            &destination,
            self.state.available_fuel,
            TravelMode::Standard,
        )?;

        if !assessment.is_possible {
            warn!(
                from = %assessment.from,
                to = %assessment.to,
                required_fuel = assessment.required_fuel,
                available_fuel = assessment.available_fuel,
                "trip rejected: not enough fuel"
            );
            return Err(Error::InsufficientFuel {
                from: assessment.from,
                to: assessment.to,
                required_fuel: assessment.required_fuel,
                available_fuel: assessment.available_fuel,
            });
        }

        self.history.push(TripRecord {
            from: assessment.from.clone(),
            to: assessment.to.clone(),
            fuel_before: self.state.available_fuel,
            fuel_spent: assessment.required_fuel,
            created_at: Utc::now(),
        });
        self.state.current_planet = assessment.to.clone();
        self.state.available_fuel -= assessment.required_fuel;
        self.state.destination = None;

        info!(
            from = %assessment.from,
            to = %assessment.to,
            fuel_spent = assessment.required_fuel,
            fuel_remaining = self.state.available_fuel,
            "trip completed"
        );

        Ok(TripReceipt {
            from: assessment.from,
            to: assessment.to,
            fuel_spent: assessment.required_fuel,
            fuel_remaining: self.state.available_fuel,
        })
    }

    /// Undo the most recent trip, restoring the position and fuel recorded
    /// at its start.
    ///
    /// "Most recent" is decided by `created_at`; ties resolve to the latest
    /// appended record. Returns the undone record, or `None` when the
    /// history is empty.
    pub fn undo_last_trip(&mut self) -> Option<TripRecord> {
        let index = self
            .history
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.created_at.cmp(&b.created_at))
            .map(|(index, _)| index)?;

        let record = self.history.remove(index);
        self.state.current_planet = record.from.clone();
        self.state.available_fuel = record.fuel_before;

        info!(
            from = %record.from,
            to = %record.to,
            fuel_restored = record.fuel_before,
            "trip undone"
        );

        Some(record)
    }

    /// Restore the fuel tank to capacity.
    pub fn refuel(&mut self) {
        self.state.available_fuel = self.policy.tank_capacity;
        info!(
            at = %self.state.current_planet,
            available_fuel = self.state.available_fuel,
            "refuelled"
        );
    }

    /// Reset to the default origin with a full tank, clearing the selected
    /// destination and the whole history.
    pub fn restart(&mut self) {
        self.state.current_planet = self.starmap.default_origin().to_string();
        self.state.destination = None;
        self.state.available_fuel = self.policy.tank_capacity;
        self.history.clear();
        info!(origin = %self.state.current_planet, "travel ledger restarted");
    }

    /// Compute the read-only derived view of the current state.
    pub fn snapshot(&self) -> TravelSnapshot {
        let (required_fuel, is_trip_possible) = match &self.state.destination {
            None => (Some(0.0), true),
            Some(destination) => {
                match self
                    .starmap
                    .distance_km(&self.state.current_planet, destination)
                {
                    Some(distance) => {
                        let required =
                            self.policy.required_fuel(distance, TravelMode::Standard);
                        (Some(required), self.state.available_fuel >= required)
                    }
                    None => (None, false),
                }
            }
        };

        TravelSnapshot {
            current_planet: self.state.current_planet.clone(),
            destination_planet: self.state.destination.clone(),
            available_fuel: self.state.available_fuel,
            required_fuel,
            is_trip_possible,
            is_stranded: trip::is_stranded(
                &self.starmap,
                &self.policy,
                &self.state.current_planet,
                self.state.available_fuel,
            ),
            nearest_refuel_station: trip::nearest_refuel_station(
                &self.starmap,
                &self.state.current_planet,
            ),
            travel_history: self.history.clone(),
        }
    }
}
