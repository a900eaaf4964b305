//! `cover` and `count` command implementations.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use offline_regions_core::{RegionDefinition, SourceKind, TileSource, ZoomRange};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::document::load_definition;
use crate::{
    ARG_DEFINITION, ARG_MAX_SOURCE_ZOOM, ARG_MIN_SOURCE_ZOOM, ARG_SOURCE_KIND, ARG_TILE_SIZE,
    CliError, ENV_TILES_DEFINITION,
};

const DEFAULT_TILE_SIZE: u16 = 512;

/// CLI arguments shared by the `cover` and `count` subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "tiles",
    long_about = "Enumerate the tiles a region definition needs from one \
                 source. The source is described by its kind, tile size and \
                 the zoom levels it serves. Values can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Describe a region definition and the source to enumerate"
)]
#[ortho_config(prefix = "OFFLINE_REGIONS")]
pub(crate) struct TilesArgs {
    /// Path to a JSON region definition document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) definition: Option<Utf8PathBuf>,
    /// Kind of source the tiles come from (defaults to `vector`).
    #[arg(long = ARG_SOURCE_KIND, value_name = "kind")]
    #[serde(default)]
    pub(crate) source_kind: Option<String>,
    /// Source tile size in pixels (defaults to 512).
    #[arg(long = ARG_TILE_SIZE, value_name = "pixels")]
    #[serde(default)]
    pub(crate) tile_size: Option<u16>,
    /// Lowest zoom level the source serves (defaults to 0).
    #[arg(long = ARG_MIN_SOURCE_ZOOM, value_name = "zoom")]
    #[serde(default)]
    pub(crate) min_source_zoom: Option<u8>,
    /// Highest zoom level the source serves (defaults to 22).
    #[arg(long = ARG_MAX_SOURCE_ZOOM, value_name = "zoom")]
    #[serde(default)]
    pub(crate) max_source_zoom: Option<u8>,
}

impl TilesArgs {
    pub(crate) fn into_config(self) -> Result<TilesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TilesConfig::try_from(merged)
    }
}

/// Resolved configuration for `cover` and `count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TilesConfig {
    /// Path to the region definition document.
    pub(crate) definition: Utf8PathBuf,
    /// Source the tiles are enumerated against.
    pub(crate) source: TileSource,
}

impl TryFrom<TilesArgs> for TilesConfig {
    type Error = CliError;

    fn try_from(args: TilesArgs) -> Result<Self, Self::Error> {
        let definition = args.definition.ok_or(CliError::MissingArgument {
            field: ARG_DEFINITION,
            env: ENV_TILES_DEFINITION,
        })?;
        let kind = match args.source_kind {
            Some(value) => value
                .parse::<SourceKind>()
                .map_err(|_| CliError::UnknownSourceKind { value })?,
            None => SourceKind::Vector,
        };
        let tile_size = args.tile_size.unwrap_or(DEFAULT_TILE_SIZE);
        if tile_size == 0 {
            return Err(CliError::ZeroTileSize);
        }
        let defaults = ZoomRange::default();
        let zoom_range = ZoomRange::new(
            args.min_source_zoom.unwrap_or(defaults.min),
            args.max_source_zoom.unwrap_or(defaults.max),
        );
        Ok(Self {
            definition,
            source: TileSource::new(kind, tile_size, zoom_range),
        })
    }
}

pub(crate) fn run_cover(args: TilesArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let definition = load_definition(&config.definition)?;
    let mut stdout = std::io::stdout().lock();
    write_cover(&definition, &config.source, &mut stdout)
}

pub(crate) fn run_count(args: TilesArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let definition = load_definition(&config.definition)?;
    let mut stdout = std::io::stdout().lock();
    write_count(&definition, &config.source, &mut stdout)
}

/// Write one `z/x/y` line per tile the definition needs from `source`.
pub(crate) fn write_cover(
    definition: &RegionDefinition,
    source: &TileSource,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let tiles = definition.tile_cover(source);
    info!("listing {} tiles for {} source", tiles.len(), source.kind);
    for tile in &tiles {
        writeln!(writer, "{tile}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

/// Write the number of tiles the definition needs from `source`.
pub(crate) fn write_count(
    definition: &RegionDefinition,
    source: &TileSource,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let count = definition.tile_count(source);
    writeln!(writer, "{count}").map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<TilesConfig, CliError> {
    let merged = TilesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    TilesConfig::try_from(merged)
}
