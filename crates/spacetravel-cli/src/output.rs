//! Output formatting for the CLI.
//!
//! Text renderers for the library's summary types plus a JSON mode that
//! serialises them unchanged.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use spacetravel_lib::{Starmap, TripAssessment};

use crate::commands::scout::ScoutReport;
use crate::commands::voyage::{VoyageEvent, VoyageReport};

/// Rendering mode selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, Serialize)]
struct PlanetRow<'a> {
    name: &'a str,
    icon: &'a str,
    description: &'a str,
    refueling_station: bool,
}

/// Render the planet listing.
pub fn render_planets(starmap: &Starmap, format: OutputFormat) -> Result<()> {
    let rows: Vec<PlanetRow<'_>> = starmap
        .planets()
        .iter()
        .map(|planet| PlanetRow {
            name: &planet.name,
            icon: &planet.icon,
            description: &planet.description,
            refueling_station: starmap.is_refueling_station(&planet.name),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            println!("Planets:");
            for row in rows {
                let marker = if row.refueling_station {
                    " [station]"
                } else {
                    ""
                };
                println!("- {}{}: {}", row.name, marker, row.description);
            }
            Ok(())
        }
    }
}

/// Render a single trip assessment.
pub fn render_assessment(assessment: &TripAssessment, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(assessment),
        OutputFormat::Text => {
            println!(
                "Trip from {} to {} ({} transit):",
                assessment.from, assessment.to, assessment.mode
            );
            println!("  distance: {}", format_km(assessment.distance_km));
            println!(
                "  required fuel: {}",
                format_litres(assessment.required_fuel)
            );
            println!(
                "  available fuel: {}",
                format_litres(assessment.available_fuel)
            );
            if assessment.is_possible {
                println!("  verdict: possible");
            } else {
                println!(
                    "  verdict: not possible (short {})",
                    format_litres(assessment.required_fuel - assessment.available_fuel)
                );
            }
            Ok(())
        }
    }
}

/// Render a scout report.
pub fn render_scout(report: &ScoutReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            println!(
                "Scout report for {} ({} on board):",
                report.at,
                format_litres(report.available_fuel)
            );
            println!(
                "  stranded: {}",
                if report.is_stranded { "yes" } else { "no" }
            );
            render_station_line(&report.nearest_refuel_station);
            if report.reachable_planets.is_empty() {
                println!("  reachable planets: none");
            } else {
                println!("  reachable planets:");
                for planet in &report.reachable_planets {
                    println!(
                        "  - {} ({}, {})",
                        planet.name,
                        format_km(planet.distance_km),
                        format_litres(planet.required_fuel)
                    );
                }
            }
            Ok(())
        }
    }
}

/// Render a voyage replay.
pub fn render_voyage(report: &VoyageReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            println!("Voyage log:");
            for (index, event) in report.events.iter().enumerate() {
                println!("  {}. {}", index + 1, describe_voyage_event(event));
            }
            let snapshot = &report.snapshot;
            println!(
                "Final position: {} with {}",
                snapshot.current_planet,
                format_litres(snapshot.available_fuel)
            );
            println!(
                "  stranded: {}",
                if snapshot.is_stranded { "yes" } else { "no" }
            );
            render_station_line(&snapshot.nearest_refuel_station);
            println!("  trips recorded: {}", snapshot.travel_history.len());
            Ok(())
        }
    }
}

fn render_station_line(station: &Option<spacetravel_lib::StationDistance>) {
    match station {
        Some(station) => println!(
            "  nearest refuelling station: {} ({})",
            station.name,
            format_km(station.distance_km)
        ),
        None => println!("  nearest refuelling station: none"),
    }
}

fn describe_voyage_event(event: &VoyageEvent) -> String {
    match event {
        VoyageEvent::Trip {
            from,
            to,
            fuel_spent,
            fuel_remaining,
        } => format!(
            "{from} -> {to}: spent {}, {} remaining",
            format_litres(*fuel_spent),
            format_litres(*fuel_remaining)
        ),
        VoyageEvent::Undo {
            from,
            to,
            fuel_restored,
        } => format!(
            "undid {from} -> {to}: back at {from} with {}",
            format_litres(*fuel_restored)
        ),
        VoyageEvent::NothingToUndo => "nothing to undo".to_string(),
        VoyageEvent::Refuel {
            at,
            available_fuel,
        } => format!("refuelled at {at} ({})", format_litres(*available_fuel)),
        VoyageEvent::Restart { origin } => format!("restarted at {origin}"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a whole number with thousands separators.
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Litres with separators; falls back to two decimals for fractional values.
#[must_use]
pub fn format_litres(value: f64) -> String {
    if value >= 0.0 && value.fract() == 0.0 {
        format!("{}L", format_with_separators(value as u64))
    } else {
        format!("{value:.2}L")
    }
}

/// Kilometres with separators; falls back to two decimals for fractional
/// values.
#[must_use]
pub fn format_km(value: f64) -> String {
    if value >= 0.0 && value.fract() == 0.0 {
        format!("{}km", format_with_separators(value as u64))
    } else {
        format!("{value:.2}km")
    }
}
