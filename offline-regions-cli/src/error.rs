//! Error types emitted by the offline regions CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use offline_regions_core::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors emitted by the offline regions CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The source kind is not one the enumerator knows.
    #[error(
        "unknown source kind {value:?} (expected vector, raster, raster-dem, geojson, \
         video, image, annotations or custom-vector)"
    )]
    UnknownSourceKind {
        /// Value as supplied.
        value: String,
    },
    /// Tiles must be at least one pixel across.
    #[error("tile-size must be positive")]
    ZeroTileSize,
    /// Opening the definition document failed.
    #[error("failed to open region definition at {path:?}: {source}")]
    OpenDefinition {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the definition document failed.
    #[error("failed to read region definition at {path:?}: {source}")]
    ReadDefinition {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The definition document was malformed or invalid.
    #[error("failed to decode region definition at {path:?}: {source}")]
    DecodeDefinition {
        /// Path of the offending document.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: DecodeError,
    },
    /// Encoding the canonical document failed.
    #[error("failed to encode region definition: {0}")]
    EncodeDefinition(#[from] EncodeError),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
