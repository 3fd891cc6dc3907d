//! Starmap model and configuration loading.
//!
//! The starmap is static data: the planet list, the symmetric distance table,
//! the refuelling stations, and the default origin. A built-in solar-system
//! configuration is embedded in the crate; alternative maps can be loaded
//! from JSON files with the same shape.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A planet as described by the static configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct DistanceEntry {
    from: String,
    to: String,
    km: f64,
}

#[derive(Debug, Deserialize)]
struct StarmapConfig {
    default_origin: String,
    planets: Vec<Planet>,
    refueling_stations: Vec<String>,
    distances_km: Vec<DistanceEntry>,
}

static BUILTIN: Lazy<Starmap> = Lazy::new(|| {
    Starmap::from_json_str(include_str!("../assets/solar_system.json"))
        .expect("embedded solar-system configuration is valid")
});

/// In-memory starmap with its symmetric distance table.
///
/// Planet order follows the configuration; scans that break ties by
/// iteration order rely on it.
#[derive(Debug, Clone)]
pub struct Starmap {
    planets: Vec<Planet>,
    index: HashMap<String, usize>,
    distances: HashMap<(String, String), f64>,
    refueling_stations: Vec<String>,
    default_origin: String,
    source: Option<PathBuf>,
}

impl Starmap {
    /// The built-in solar-system configuration.
    pub fn builtin() -> &'static Starmap {
        &BUILTIN
    }

    /// Load a starmap from a JSON file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut starmap = Self::from_reader(file)?;
        starmap.source = Some(path.to_path_buf());
        Ok(starmap)
    }

    /// Load a starmap from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: StarmapConfig = serde_json::from_reader(reader)?;
        Self::from_config(config)
    }

    /// Load a starmap from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StarmapConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    fn from_config(config: StarmapConfig) -> Result<Self> {
        let mut planets = Vec::with_capacity(config.planets.len());
        let mut index = HashMap::new();

        for mut planet in config.planets {
            planet.name = planet.name.trim().to_string();
            let key = normalize_name(&planet.name);
            if key.is_empty() {
                return Err(Error::StarmapValidation {
                    message: "planet name must not be empty".to_string(),
                });
            }
            if index.contains_key(&key) {
                return Err(Error::DuplicatePlanet { name: key });
            }
            index.insert(key, planets.len());
            planets.push(planet);
        }

        let mut distances = HashMap::new();
        let mut duplicate_pairs = 0usize;
        for entry in config.distances_km {
            let from = normalize_name(&entry.from);
            let to = normalize_name(&entry.to);
            for endpoint in [&from, &to] {
                if !index.contains_key(endpoint) {
                    return Err(Error::StarmapValidation {
                        message: format!(
                            "distance entry references unknown planet '{endpoint}'"
                        ),
                    });
                }
            }
            if from == to {
                return Err(Error::StarmapValidation {
                    message: format!("distance entry from '{from}' to itself"),
                });
            }
            if !entry.km.is_finite() || entry.km <= 0.0 {
                return Err(Error::StarmapValidation {
                    message: format!(
                        "distance between '{from}' and '{to}' must be finite and positive, got {}",
                        entry.km
                    ),
                });
            }
            let key = (from, to);
            let mirrored = (key.1.clone(), key.0.clone());
            if distances.contains_key(&key) || distances.contains_key(&mirrored) {
                duplicate_pairs += 1;
                continue;
            }
            distances.insert(key, entry.km);
        }

        if duplicate_pairs > 0 {
            warn!(duplicate_pairs, "ignored duplicate distance entries");
        }

        let mut refueling_stations = Vec::with_capacity(config.refueling_stations.len());
        for station in config.refueling_stations {
            let station = normalize_name(&station);
            if !index.contains_key(&station) {
                return Err(Error::StarmapValidation {
                    message: format!("refuelling station '{station}' is not a known planet"),
                });
            }
            refueling_stations.push(station);
        }

        let default_origin = normalize_name(&config.default_origin);
        if !index.contains_key(&default_origin) {
            return Err(Error::StarmapValidation {
                message: format!("default origin '{default_origin}' is not a known planet"),
            });
        }

        debug!(
            planets = planets.len(),
            distances = distances.len(),
            stations = refueling_stations.len(),
            "loaded starmap"
        );

        Ok(Self {
            planets,
            index,
            distances,
            refueling_stations,
            default_origin,
            source: None,
        })
    }

    /// All planets in configuration order.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Lookup a planet by name (case-insensitive).
    pub fn planet(&self, name: &str) -> Option<&Planet> {
        self.index
            .get(&normalize_name(name))
            .map(|&idx| &self.planets[idx])
    }

    /// Whether the starmap knows a planet by this name.
    pub fn contains_planet(&self, name: &str) -> bool {
        self.index.contains_key(&normalize_name(name))
    }

    /// Symmetric distance lookup; tries both orderings of the pair.
    ///
    /// Returns `None` for an uncharted pair.
    pub fn distance_km(&self, a: &str, b: &str) -> Option<f64> {
        let a = normalize_name(a);
        let b = normalize_name(b);
        self.distances
            .get(&(a.clone(), b.clone()))
            .or_else(|| self.distances.get(&(b, a)))
            .copied()
    }

    /// Refuelling stations in configuration order.
    pub fn refueling_stations(&self) -> &[String] {
        &self.refueling_stations
    }

    /// Whether the named planet hosts a refuelling station.
    pub fn is_refueling_station(&self, name: &str) -> bool {
        let name = normalize_name(name);
        self.refueling_stations.iter().any(|s| *s == name)
    }

    /// The configured default origin planet.
    pub fn default_origin(&self) -> &str {
        &self.default_origin
    }

    /// Get the source path if the starmap was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Return up to `limit` planet names similar to `name`, best match first.
    pub fn fuzzy_planet_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = normalize_name(name);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &str)> = self
            .planets
            .iter()
            .map(|planet| {
                let score = strsim::jaro_winkler(&needle, &normalize_name(&planet.name));
                (score, planet.name.as_str())
            })
            .filter(|(score, _)| *score >= 0.7)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Resolve a planet name, returning an error with fuzzy suggestions for
/// unknown names.
pub fn resolve_planet<'a>(starmap: &'a Starmap, name: &str) -> Result<&'a Planet> {
    starmap.planet(name).ok_or_else(|| Error::UnknownPlanet {
        name: name.to_string(),
        suggestions: starmap.fuzzy_planet_matches(name, 3),
    })
}

/// Normalize a planet name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        let starmap = Starmap::builtin();
        assert!(starmap.planet("Earth").is_some());
        assert!(starmap.planet(" MARS ").is_some());
        assert!(starmap.planet("pluto").is_none());
    }

    #[test]
    fn distance_lookup_tries_both_orderings() {
        let starmap = Starmap::builtin();
        assert_eq!(starmap.distance_km("earth", "mars"), Some(60_000_000.0));
        assert_eq!(starmap.distance_km("mars", "earth"), Some(60_000_000.0));
        assert_eq!(starmap.distance_km("earth", "saturn"), None);
    }

    #[test]
    fn fuzzy_matches_suggest_similar_names() {
        let starmap = Starmap::builtin();
        let matches = starmap.fuzzy_planet_matches("eath", 3);
        assert!(matches.contains(&"earth".to_string()));
    }
}
