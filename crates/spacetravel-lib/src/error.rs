use thiserror::Error;

/// Convenient result alias for the spacetravel library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a planet name could not be found in the starmap.
    #[error("unknown planet: {name}{}", format_suggestions(.suggestions))]
    UnknownPlanet {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no distance is charted between two planets.
    #[error("no charted route between {from} and {to}")]
    UnchartedRoute { from: String, to: String },

    /// Raised when submitting a trip while no destination is selected.
    #[error("no destination selected")]
    NoDestinationSelected,

    /// Raised when selecting the current planet as the destination.
    #[error("already at {name}; pick a different destination")]
    DestinationIsCurrent { name: String },

    /// Raised when the available fuel does not cover the trip. The fields
    /// carry everything a front end needs for a user-facing notice.
    #[error(
        "trip from {from} to {to} is not possible: requires {required_fuel}L, {available_fuel}L available"
    )]
    InsufficientFuel {
        from: String,
        to: String,
        required_fuel: f64,
        available_fuel: f64,
    },

    /// Raised when duplicate planet names are encountered during starmap load.
    #[error("duplicate planet name encountered: {name}")]
    DuplicatePlanet { name: String },

    /// Raised when the starmap configuration fails validation.
    #[error("invalid starmap configuration: {message}")]
    StarmapValidation { message: String },

    /// Raised when the fuel policy fails validation.
    #[error("invalid fuel policy: {message}")]
    FuelPolicyValidation { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_planet_renders_suggestions() {
        let err = Error::UnknownPlanet {
            name: "eath".to_string(),
            suggestions: vec!["earth".to_string()],
        };
        assert_eq!(err.to_string(), "unknown planet: eath. Did you mean 'earth'?");
    }

    #[test]
    fn unknown_planet_without_suggestions_is_bare() {
        let err = Error::UnknownPlanet {
            name: "pluto".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown planet: pluto");
    }
}
