//! `normalise` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use offline_regions_core::{RegionDefinition, encode};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::document::load_definition;
use crate::{ARG_DEFINITION, CliError, ENV_NORMALISE_DEFINITION};

/// CLI arguments for the `normalise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "normalise",
    long_about = "Decode a region definition document, validating it, and \
                 print the canonical encoding. An unbounded maximum zoom is \
                 written by omitting `max_zoom`.",
    about = "Print a region definition in canonical form"
)]
#[ortho_config(prefix = "OFFLINE_REGIONS")]
pub(crate) struct NormaliseArgs {
    /// Path to a JSON region definition document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) definition: Option<Utf8PathBuf>,
}

impl NormaliseArgs {
    fn into_config(self) -> Result<NormaliseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NormaliseConfig::try_from(merged)
    }
}

/// Resolved `normalise` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormaliseConfig {
    /// Path to the region definition document.
    pub(crate) definition: Utf8PathBuf,
}

impl TryFrom<NormaliseArgs> for NormaliseConfig {
    type Error = CliError;

    fn try_from(args: NormaliseArgs) -> Result<Self, Self::Error> {
        let definition = args.definition.ok_or(CliError::MissingArgument {
            field: ARG_DEFINITION,
            env: ENV_NORMALISE_DEFINITION,
        })?;
        Ok(Self { definition })
    }
}

pub(crate) fn run_normalise(args: NormaliseArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let definition = load_definition(&config.definition)?;
    let mut stdout = std::io::stdout().lock();
    write_normalised(&definition, &mut stdout)
}

pub(crate) fn write_normalised(
    definition: &RegionDefinition,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let text = encode(definition)?;
    writeln!(writer, "{text}").map_err(CliError::WriteOutput)
}
