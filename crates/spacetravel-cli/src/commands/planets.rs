//! Planets command handler: lists the configured planets.

use anyhow::Result;
use spacetravel_lib::Starmap;

use crate::output::{self, OutputFormat};

/// Handle the planets subcommand.
pub fn handle_planets_command(starmap: &Starmap, format: OutputFormat) -> Result<()> {
    output::render_planets(starmap, format)
}
