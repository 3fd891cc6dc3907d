//! Spacetravel library entry points.
//!
//! This crate exposes the starmap model and loaders, the fuel policy, the
//! pure trip calculator, and the travel ledger that records completed trips.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod fuel;
pub mod ledger;
pub mod starmap;
pub mod trip;

pub use error::{Error, Result};
pub use fuel::{
    FuelPolicy, TravelMode, FUEL_CONSUMPTION_RATIO, FUEL_TANK_CAPACITY,
    WORMHOLE_FUEL_CONSUMPTION_RATIO,
};
pub use ledger::{TravelLedger, TravelSnapshot, TravelState, TripReceipt, TripRecord};
pub use starmap::{resolve_planet, Planet, Starmap};
pub use trip::{
    assess_trip, is_stranded, nearest_refuel_station, reachable_planets, required_fuel,
    ReachablePlanet, StationDistance, TripAssessment,
};
