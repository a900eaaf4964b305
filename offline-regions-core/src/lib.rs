//! Offline map region definitions and tile enumeration.
//!
//! A region definition names a style, an area and a zoom interval. This
//! crate validates definitions, works out which tiles a definition needs
//! from a given source, and persists definitions as JSON documents.
//!
//! # Examples
//!
//! ```
//! use offline_regions_core::{SourceKind, TileSource, ZoomRange, decode};
//!
//! # fn main() -> Result<(), offline_regions_core::DecodeError> {
//! let definition = decode(
//!     r#"{"style_url":"style.json","min_zoom":0,"max_zoom":0,"pixel_ratio":1,"bounds":[-90,-180,90,180]}"#,
//! )?;
//! let raster = TileSource::new(SourceKind::Raster, 256, ZoomRange::new(0, 22));
//! assert_eq!(definition.tile_count(&raster), 4);
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod bounds;
mod codec;
pub mod cover;
mod definition;
pub mod enumerate;
mod error;
mod geometry;
mod region;
mod tile;
mod zoom;

pub use bounds::LatLngBounds;
pub use codec::{decode, decode_value, encode, encode_value};
pub use cover::TileCoverage;
pub use definition::{GeometryRegionDefinition, RegionDefinition, TilePyramidRegionDefinition};
pub use enumerate::{TileSource, tile_count, tile_cover};
pub use error::{DecodeError, DefinitionError, EncodeError, MalformedDocument};
pub use geometry::{RegionGeometry, UnsupportedGeometry};
pub use region::{Region, RegionMetadata};
pub use tile::TileId;
pub use zoom::{
    ClampedZoomRange, MAX_TILE_ZOOM, SourceKind, ZoomRange, clamp_zoom_range,
    covering_zoom_level,
};
