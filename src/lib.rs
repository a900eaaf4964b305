//! Facade crate for offline map regions.
//!
//! This crate re-exports the region definition types, the tile enumerator and
//! the JSON document codec from `offline-regions-core`.

#![forbid(unsafe_code)]

pub use offline_regions_core::{
    ClampedZoomRange, DecodeError, DefinitionError, EncodeError, GeometryRegionDefinition,
    LatLngBounds, MAX_TILE_ZOOM, MalformedDocument, Region, RegionDefinition, RegionGeometry,
    RegionMetadata, SourceKind, TileCoverage, TileId, TilePyramidRegionDefinition, TileSource,
    UnsupportedGeometry, ZoomRange, clamp_zoom_range, covering_zoom_level, decode, decode_value,
    encode, encode_value, tile_count, tile_cover,
};
