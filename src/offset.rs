// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Conversion between a signed, origin-centred [`SectorIndex`] and the flat
//! linear offset the class hash and class codecs operate on.
//!
//! `base_sector_coords` (the midpoint of each class' galaxy box, see
//! `tables::GalaxySize::midpoint`) is the single recentring constant used
//! in both directions: [`offset_from_sector`] adds it to un-centre the
//! index before flattening; [`sector_from_offset`] subtracts it after
//! unflattening. An index that, once un-centred, falls outside
//! `[0, galaxy_size)` on any axis cannot be flattened at all — that's
//! [`GalaxyError::OutOfGalaxy`], not a silent wraparound.

use crate::error::GalaxyError;
use crate::position::SectorIndex;
use crate::tables::GalaxySize;

/// Flatten a signed sector index into a linear offset within a galaxy box
/// of the given size, recentred by `base`.
pub fn offset_from_sector(
    index: SectorIndex,
    base: SectorIndex,
    size: GalaxySize,
) -> Result<i64, GalaxyError> {
    let unshifted = index + base;
    if unshifted.x < 0
        || unshifted.x >= size.x
        || unshifted.y < 0
        || unshifted.y >= size.y
        || unshifted.z < 0
        || unshifted.z >= size.z
    {
        return Err(GalaxyError::OutOfGalaxy);
    }
    Ok(unshifted.z * size.y * size.x + unshifted.y * size.x + unshifted.x)
}

/// Unflatten a linear offset back into a signed, recentred sector index.
pub fn sector_from_offset(offset: i64, base: SectorIndex, size: GalaxySize) -> SectorIndex {
    let x = offset.rem_euclid(size.x);
    let y = offset.div_euclid(size.x).rem_euclid(size.y);
    let z = offset.div_euclid(size.x * size.y).rem_euclid(size.z);
    SectorIndex::new(x, y, z) - base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> GalaxySize {
        GalaxySize { x: 40, y: 38, z: 42 }
    }

    fn base() -> SectorIndex {
        size().midpoint()
    }

    #[test]
    fn round_trips_in_range_indices() {
        let size = size();
        let base = base();
        for x in -5..5 {
            for y in -5..5 {
                for z in -5..5 {
                    let idx = SectorIndex::new(x, y, z);
                    let offset = offset_from_sector(idx, base, size).unwrap();
                    assert_eq!(sector_from_offset(offset, base, size), idx);
                }
            }
        }
    }

    #[test]
    fn out_of_box_index_is_rejected() {
        let size = size();
        let base = base();
        let idx = SectorIndex::new(1000, 0, 0);
        assert_eq!(
            offset_from_sector(idx, base, size),
            Err(GalaxyError::OutOfGalaxy)
        );
    }

    #[test]
    fn distinct_offsets_in_range_are_distinct() {
        let size = size();
        let base = base();
        let mut seen = std::collections::HashSet::new();
        for x in 0..size.x {
            for y in 0..size.y {
                let offset = offset_from_sector(SectorIndex::new(x, y, 0), base, size).unwrap();
                assert!(seen.insert(offset));
            }
        }
    }
}
