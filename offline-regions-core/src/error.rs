//! Error types for constructing, decoding and encoding region definitions.

use thiserror::Error;

use crate::UnsupportedGeometry;

/// Reasons a region definition cannot be constructed.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum DefinitionError {
    /// `min_zoom` is below zero.
    #[error("min_zoom must not be negative (got {0})")]
    NegativeMinZoom(f64),
    /// `min_zoom` is NaN or infinite.
    #[error("min_zoom must be finite (got {0})")]
    NonFiniteMinZoom(f64),
    /// `max_zoom` is below zero.
    #[error("max_zoom must not be negative (got {0})")]
    NegativeMaxZoom(f64),
    /// `max_zoom` is NaN. Positive infinity is allowed and means unbounded.
    #[error("max_zoom must not be NaN")]
    NanMaxZoom,
    /// `max_zoom` lies below `min_zoom`.
    #[error("max_zoom {max_zoom} is below min_zoom {min_zoom}")]
    MaxBelowMin {
        /// Declared lower bound.
        min_zoom: f64,
        /// Declared upper bound.
        max_zoom: f64,
    },
    /// `pixel_ratio` is below zero.
    #[error("pixel_ratio must not be negative (got {0})")]
    NegativePixelRatio(f32),
    /// `pixel_ratio` is NaN or infinite.
    #[error("pixel_ratio must be finite (got {0})")]
    NonFinitePixelRatio(f32),
    /// A bounds latitude lies outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// A bounds side or geometry coordinate is NaN or infinite.
    #[error("region coordinates must be finite")]
    NonFiniteCoordinate,
}

/// Structural problems found while decoding a region document.
#[derive(Debug, Error)]
pub enum MalformedDocument {
    /// The text is not valid JSON.
    #[error("region document is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    /// The top-level value is not a JSON object.
    #[error("region document must be a JSON object")]
    NotAnObject,
    /// A required member is absent.
    #[error("region document is missing `{field}`")]
    MissingField {
        /// Name of the absent member.
        field: &'static str,
    },
    /// A member holds the wrong JSON type.
    #[error("`{field}` must be {expected}")]
    WrongType {
        /// Name of the offending member.
        field: &'static str,
        /// Description of the accepted type.
        expected: &'static str,
    },
    /// Neither a usable `bounds` nor a usable `geometry` is present.
    #[error("region document needs `bounds` as four numbers or `geometry` as an object")]
    MissingArea,
    /// `geometry` is an object but not a valid GeoJSON geometry.
    ///
    /// Boxed because some GeoJSON errors carry a whole feature.
    #[error("region geometry is not valid GeoJSON: {0}")]
    InvalidGeometry(#[source] Box<geojson::Error>),
    /// `geometry` is valid GeoJSON of a kind regions cannot use.
    #[error(transparent)]
    UnsupportedGeometry(#[from] UnsupportedGeometry),
}

/// Errors returned by [`crate::decode`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document failed structural validation.
    #[error(transparent)]
    Malformed(#[from] MalformedDocument),
    /// The document was well formed but describes an invalid definition.
    #[error("region document describes an invalid definition: {0}")]
    InvalidDefinition(#[from] DefinitionError),
}

/// Errors returned by [`crate::encode`].
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The JSON writer failed.
    #[error("failed to write region document: {0}")]
    Json(#[from] serde_json::Error),
}
