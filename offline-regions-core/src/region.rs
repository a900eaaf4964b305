//! Persisted offline regions.

use crate::RegionDefinition;

/// Opaque application data stored alongside a region.
pub type RegionMetadata = Vec<u8>;

/// An offline region as recorded by the persistence layer.
///
/// The identifier is assigned when the region is stored. A region never
/// changes after construction; to alter one, build a new value.
///
/// # Examples
/// ```
/// use offline_regions_core::{LatLngBounds, Region, TilePyramidRegionDefinition};
///
/// # fn main() -> Result<(), offline_regions_core::DefinitionError> {
/// let definition =
///     TilePyramidRegionDefinition::new("style.json", LatLngBounds::world(), 0.0, 4.0, 1.0)?;
/// let region = Region::new(7, definition.into(), b"home".to_vec());
/// assert_eq!(region.id(), 7);
/// assert_eq!(region.metadata(), b"home");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: i64,
    definition: RegionDefinition,
    metadata: RegionMetadata,
}

impl Region {
    /// Pair a stored identifier with its definition and metadata.
    #[must_use]
    pub const fn new(id: i64, definition: RegionDefinition, metadata: RegionMetadata) -> Self {
        Self {
            id,
            definition,
            metadata,
        }
    }

    /// Identifier assigned by the persistence layer.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// What the region downloads.
    #[must_use]
    pub const fn definition(&self) -> &RegionDefinition {
        &self.definition
    }

    /// Application data attached to the region.
    #[must_use]
    pub fn metadata(&self) -> &[u8] {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LatLngBounds, TilePyramidRegionDefinition};

    #[test]
    fn exposes_its_parts() {
        let definition = RegionDefinition::from(
            TilePyramidRegionDefinition::new("style.json", LatLngBounds::world(), 0.0, 1.0, 1.0)
                .expect("valid definition"),
        );
        let region = Region::new(-3, definition.clone(), vec![0, 1, 2]);
        assert_eq!(region.id(), -3);
        assert_eq!(region.definition(), &definition);
        assert_eq!(region.metadata(), &[0, 1, 2]);
    }
}
