//! Integration tests for the planets, trip, and scout subcommands.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("spacetravel-cli").expect("binary exists")
}

#[test]
fn planets_lists_every_planet_and_marks_stations() {
    cli()
        .arg("planets")
        .assert()
        .success()
        .stdout(predicate::str::contains("- earth [station]:"))
        .stdout(predicate::str::contains("- venus:"))
        .stdout(predicate::str::contains("- uranus [station]:"));
}

#[test]
fn planets_json_output_is_parseable() {
    let output = cli().args(["--format", "json", "planets"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let rows = rows.as_array().expect("array of planets");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[2]["name"], "earth");
    assert_eq!(rows[2]["refueling_station"], true);
}

#[test]
fn trip_assesses_the_worked_example() {
    cli()
        .args(["trip", "--from", "earth", "--to", "mars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 60,000,000km"))
        .stdout(predicate::str::contains("required fuel: 6,000L"))
        .stdout(predicate::str::contains("verdict: possible"));
}

#[test]
fn trip_reports_the_fuel_shortfall() {
    cli()
        .args(["trip", "--from", "earth", "--to", "mars", "--fuel", "5999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("verdict: not possible (short 1L)"));
}

#[test]
fn trip_through_a_wormhole_doubles_the_cost() {
    cli()
        .args(["trip", "--from", "earth", "--to", "mars", "--wormhole"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wormhole transit"))
        .stdout(predicate::str::contains("required fuel: 12,000L"));
}

#[test]
fn trip_rejects_an_unknown_planet_with_a_suggestion() {
    cli()
        .args(["trip", "--from", "eath", "--to", "mars"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown planet: eath"))
        .stderr(predicate::str::contains("Did you mean 'earth'?"));
}

#[test]
fn trip_rejects_an_uncharted_pair() {
    cli()
        .args(["trip", "--from", "earth", "--to", "saturn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no charted route between earth and saturn",
        ));
}

#[test]
fn trip_rejects_negative_fuel() {
    cli()
        .args(["trip", "--from", "earth", "--to", "mars", "--fuel=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fuel must be a non-negative"));
}

#[test]
fn trip_json_output_carries_the_assessment() {
    let output = cli()
        .args(["--format", "json", "trip", "--from", "earth", "--to", "mars"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let assessment: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(assessment["from"], "earth");
    assert_eq!(assessment["to"], "mars");
    assert_eq!(assessment["required_fuel"], 6000.0);
    assert_eq!(assessment["is_possible"], true);
}

#[test]
fn scout_reports_reachable_planets_and_nearest_station() {
    cli()
        .args(["scout", "--at", "venus", "--fuel", "4500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stranded: no"))
        .stdout(predicate::str::contains(
            "nearest refuelling station: earth (40,000,000km)",
        ))
        .stdout(predicate::str::contains("- earth (40,000,000km, 4,000L)"));
}

#[test]
fn scout_reports_a_stranded_traveller() {
    cli()
        .args(["scout", "--at", "uranus", "--fuel", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stranded: yes"))
        .stdout(predicate::str::contains("reachable planets: none"));
}

#[test]
fn custom_starmap_overrides_the_builtin() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(
        br#"{
            "default_origin": "alpha",
            "planets": [
                { "name": "alpha", "icon": "alpha.svg", "description": "First." },
                { "name": "beta", "icon": "beta.svg", "description": "Second." }
            ],
            "refueling_stations": ["beta"],
            "distances_km": [
                { "from": "alpha", "to": "beta", "km": 1000000.0 }
            ]
        }"#,
    )
    .expect("write map");

    cli()
        .args(["--starmap", file.path().to_str().unwrap()])
        .args(["trip", "--from", "alpha", "--to", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("required fuel: 100L"))
        .stdout(predicate::str::contains("verdict: possible"));
}

#[test]
fn missing_starmap_file_fails_with_context() {
    cli()
        .args(["--starmap", "/nonexistent/starmap.json"])
        .arg("planets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load starmap"));
}
