//! Command-line interface over offline region definition documents.
//!
//! The `offline-regions` binary reads a region definition from disk and
//! either lists the tiles it needs from a source (`cover`), totals them
//! (`count`), or prints the document in canonical form (`normalise`).
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod document;
mod error;
mod normalise;
mod tiles;

pub use error::CliError;

use normalise::{NormaliseArgs, run_normalise};
use tiles::{TilesArgs, run_count, run_cover};

pub(crate) const ARG_DEFINITION: &str = "definition";
pub(crate) const ARG_SOURCE_KIND: &str = "source-kind";
pub(crate) const ARG_TILE_SIZE: &str = "tile-size";
pub(crate) const ARG_MIN_SOURCE_ZOOM: &str = "min-source-zoom";
pub(crate) const ARG_MAX_SOURCE_ZOOM: &str = "max-source-zoom";
pub(crate) const ENV_TILES_DEFINITION: &str = "OFFLINE_REGIONS_CMDS_TILES_DEFINITION";
pub(crate) const ENV_NORMALISE_DEFINITION: &str = "OFFLINE_REGIONS_CMDS_NORMALISE_DEFINITION";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// definition cannot be read or decoded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Cover(args) => run_cover(args),
        Command::Count(args) => run_count(args),
        Command::Normalise(args) => run_normalise(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "offline-regions",
    about = "Inspect offline map region definitions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every tile a region needs from a source, one `z/x/y` per line.
    Cover(TilesArgs),
    /// Print how many tiles a region needs from a source.
    Count(TilesArgs),
    /// Decode a region document and print its canonical encoding.
    Normalise(NormaliseArgs),
}

#[cfg(test)]
mod tests;
