//! Subcommand handlers for the spacetravel CLI.

pub mod planets;
pub mod scout;
pub mod trip;
pub mod voyage;
