//! Fuel policy and consumption calculations.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fuel tank capacity in litres.
pub const FUEL_TANK_CAPACITY: f64 = 90_000.0;

/// Standard fuel consumption in litres per kilometre.
pub const FUEL_CONSUMPTION_RATIO: f64 = 0.0001;

/// Wormhole transits burn fuel at twice the standard rate.
pub const WORMHOLE_FUEL_CONSUMPTION_RATIO: f64 = 0.0002;

/// How a trip is flown; selects the consumption ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Standard,
    Wormhole,
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            TravelMode::Standard => "standard",
            TravelMode::Wormhole => "wormhole",
        };
        f.write_str(value)
    }
}

/// Fuel calculation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPolicy {
    /// Tank capacity in litres.
    pub tank_capacity: f64,
    /// Litres burned per kilometre on a standard transit.
    pub consumption_ratio: f64,
    /// Litres burned per kilometre through a wormhole.
    pub wormhole_consumption_ratio: f64,
}

impl Default for FuelPolicy {
    fn default() -> Self {
        Self {
            tank_capacity: FUEL_TANK_CAPACITY,
            consumption_ratio: FUEL_CONSUMPTION_RATIO,
            wormhole_consumption_ratio: WORMHOLE_FUEL_CONSUMPTION_RATIO,
        }
    }
}

impl FuelPolicy {
    /// Validate the fuel policy.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.tank_capacity, "tank_capacity"),
            (self.consumption_ratio, "consumption_ratio"),
            (
                self.wormhole_consumption_ratio,
                "wormhole_consumption_ratio",
            ),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::FuelPolicyValidation {
                    message: format!("{field} must be a finite positive number, got {value}"),
                });
            }
        }

        Ok(())
    }

    /// Consumption ratio for the given travel mode, in litres per kilometre.
    pub fn ratio_for(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Standard => self.consumption_ratio,
            TravelMode::Wormhole => self.wormhole_consumption_ratio,
        }
    }

    /// Fuel required to cover `distance_km` in the given mode, in litres.
    pub fn required_fuel(&self, distance_km: f64, mode: TravelMode) -> f64 {
        distance_km * self.ratio_for(mode)
    }

    /// Maximum distance coverable with `available_fuel` in the given mode.
    pub fn max_range_km(&self, available_fuel: f64, mode: TravelMode) -> f64 {
        available_fuel / self.ratio_for(mode)
    }
}
