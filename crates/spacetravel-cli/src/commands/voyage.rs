//! Voyage command handler: replays an itinerary through a travel ledger.

use anyhow::{Context, Result};
use serde::Serialize;
use spacetravel_lib::{FuelPolicy, Starmap, TravelLedger, TravelSnapshot};

use crate::output::{self, OutputFormat};

const UNDO: &str = "undo";
const REFUEL: &str = "refuel";
const RESTART: &str = "restart";

/// Arguments for the voyage command.
#[derive(Debug, Clone)]
pub struct VoyageCommandArgs {
    /// Itinerary steps: planet names or the `undo`/`refuel`/`restart`
    /// directives.
    pub steps: Vec<String>,
}

/// One applied itinerary step.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VoyageEvent {
    Trip {
        from: String,
        to: String,
        fuel_spent: f64,
        fuel_remaining: f64,
    },
    Undo {
        from: String,
        to: String,
        fuel_restored: f64,
    },
    NothingToUndo,
    Refuel {
        at: String,
        available_fuel: f64,
    },
    Restart {
        origin: String,
    },
}

/// Full replay result: applied events plus the final derived state.
#[derive(Debug, Clone, Serialize)]
pub struct VoyageReport {
    pub events: Vec<VoyageEvent>,
    pub snapshot: TravelSnapshot,
}

/// Handle the voyage subcommand.
///
/// The ledger starts at the default origin with a full tank. A step that
/// cannot be applied (unknown planet, uncharted pair, insufficient fuel)
/// stops the voyage and surfaces the rejection.
pub fn handle_voyage_command(
    starmap: &Starmap,
    format: OutputFormat,
    args: &VoyageCommandArgs,
) -> Result<()> {
    let mut ledger = TravelLedger::new(starmap.clone(), FuelPolicy::default())?;
    let mut events = Vec::with_capacity(args.steps.len());

    for step in &args.steps {
        match step.to_lowercase().as_str() {
            UNDO => match ledger.undo_last_trip() {
                Some(record) => events.push(VoyageEvent::Undo {
                    from: record.from,
                    to: record.to,
                    fuel_restored: record.fuel_before,
                }),
                None => events.push(VoyageEvent::NothingToUndo),
            },
            REFUEL => {
                ledger.refuel();
                events.push(VoyageEvent::Refuel {
                    at: ledger.state().current_planet.clone(),
                    available_fuel: ledger.state().available_fuel,
                });
            }
            RESTART => {
                ledger.restart();
                events.push(VoyageEvent::Restart {
                    origin: ledger.state().current_planet.clone(),
                });
            }
            _ => {
                ledger
                    .select_destination(step)
                    .with_context(|| format!("cannot plot a course to '{step}'"))?;
                let receipt = ledger.submit_trip().with_context(|| {
                    format!("voyage stopped at {}", ledger.state().current_planet)
                })?;
                events.push(VoyageEvent::Trip {
                    from: receipt.from,
                    to: receipt.to,
                    fuel_spent: receipt.fuel_spent,
                    fuel_remaining: receipt.fuel_remaining,
                });
            }
        }
    }

    let report = VoyageReport {
        events,
        snapshot: ledger.snapshot(),
    };
    output::render_voyage(&report, format)
}
