use std::io::Write;

use spacetravel_lib::{Error, Starmap};

fn custom_map_json() -> &'static str {
    r#"{
        "default_origin": "alpha",
        "planets": [
            { "name": "alpha", "icon": "alpha.svg", "description": "First." },
            { "name": "beta", "icon": "beta.svg", "description": "Second." },
            { "name": "gamma", "icon": "gamma.svg", "description": "Third." }
        ],
        "refueling_stations": ["beta"],
        "distances_km": [
            { "from": "alpha", "to": "beta", "km": 1000.0 },
            { "from": "beta", "to": "gamma", "km": 2000.0 }
        ]
    }"#
}

#[test]
fn builtin_has_seven_planets_and_four_stations() {
    let starmap = Starmap::builtin();
    assert_eq!(starmap.planets().len(), 7);
    assert_eq!(starmap.refueling_stations().len(), 4);
    assert_eq!(starmap.default_origin(), "earth");
    assert!(starmap.is_refueling_station("saturn"));
    assert!(!starmap.is_refueling_station("venus"));
    assert!(starmap.source_path().is_none());
}

#[test]
fn builtin_planet_order_follows_configuration() {
    let names: Vec<&str> = Starmap::builtin()
        .planets()
        .iter()
        .map(|planet| planet.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus"]
    );
}

#[test]
fn loads_custom_map_from_reader() {
    let starmap = Starmap::from_reader(custom_map_json().as_bytes()).expect("valid map");
    assert_eq!(starmap.planets().len(), 3);
    assert_eq!(starmap.default_origin(), "alpha");
    assert_eq!(starmap.distance_km("gamma", "beta"), Some(2000.0));
}

#[test]
fn loads_custom_map_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(custom_map_json().as_bytes())
        .expect("write map");
    let starmap = Starmap::from_path(file.path()).expect("valid map");
    assert_eq!(starmap.source_path(), Some(file.path()));
    assert_eq!(starmap.distance_km("alpha", "beta"), Some(1000.0));
}

#[test]
fn rejects_station_that_is_not_a_planet() {
    let json = custom_map_json().replace("\"beta\"]", "\"omega\"]");
    let err = Starmap::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::StarmapValidation { .. }));
}

#[test]
fn rejects_distance_to_unknown_planet() {
    let json = custom_map_json().replace("\"to\": \"gamma\"", "\"to\": \"omega\"");
    let err = Starmap::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::StarmapValidation { .. }));
}

#[test]
fn rejects_non_positive_distance() {
    let json = custom_map_json().replace("2000.0", "-1.0");
    let err = Starmap::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::StarmapValidation { .. }));
}

#[test]
fn rejects_duplicate_planet_names() {
    let json = custom_map_json().replace("\"name\": \"gamma\"", "\"name\": \"Alpha\"");
    let err = Starmap::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::DuplicatePlanet { .. }));
}

#[test]
fn rejects_unknown_default_origin() {
    let json = custom_map_json().replace("\"default_origin\": \"alpha\"", "\"default_origin\": \"omega\"");
    let err = Starmap::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::StarmapValidation { .. }));
}

#[test]
fn rejects_malformed_json() {
    let err = Starmap::from_reader("not json".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn fuzzy_matches_rank_the_closest_name_first() {
    let starmap = Starmap::builtin();
    let matches = starmap.fuzzy_planet_matches("mercur", 3);
    assert_eq!(matches.first().map(String::as_str), Some("mercury"));
}
