//! Loading region definition documents from disk.

use std::io::Read;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::File};
use log::debug;
use offline_regions_core::{RegionDefinition, decode};

use crate::CliError;

/// Read and decode the region definition stored at `path`.
pub(crate) fn load_definition(path: &Utf8Path) -> Result<RegionDefinition, CliError> {
    let mut file =
        File::open_ambient(path, ambient_authority()).map_err(|source| CliError::OpenDefinition {
            path: path.to_path_buf(),
            source,
        })?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| CliError::ReadDefinition {
            path: path.to_path_buf(),
            source,
        })?;
    let definition = decode(&text).map_err(|source| CliError::DecodeDefinition {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded region definition from {path}");
    Ok(definition)
}
