// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sector identity: the signed grid index a position falls into, and the
//! two kinds of sector a name can resolve to.

use crate::hash::SectorClass;
use crate::ha::HaSector;
use crate::position::{Position, SectorIndex};
use crate::tables::FragmentTables;

/// A procedurally-generated sector: its signed 1280 Ly grid index, its
/// formatted name, and which of the two name grammars it uses.
#[derive(Debug, Clone, PartialEq)]
pub struct PgSector {
    pub index: SectorIndex,
    pub name: String,
    pub class: SectorClass,
}

impl PgSector {
    /// The corner of this sector's 1280 Ly cube nearest the galactic origin.
    pub fn corner(&self, tables: &FragmentTables) -> Position {
        Position::new(
            tables.base_coords.x + self.index.x as f64 * tables.cube_size,
            tables.base_coords.y + self.index.y as f64 * tables.cube_size,
            tables.base_coords.z + self.index.z as f64 * tables.cube_size,
        )
    }
}

/// Either a procedurally-generated sector or a named hand-authored region.
#[derive(Debug, Clone, PartialEq)]
pub enum Sector {
    Procedural(PgSector),
    HandAuthored(HaSector),
}

impl Sector {
    pub fn name(&self) -> &str {
        match self {
            Sector::Procedural(p) => &p.name,
            Sector::HandAuthored(h) => &h.name,
        }
    }

    /// The corner of the mass-code sub-cube grid this sector's systems are
    /// addressed against, at the given sub-cube width.
    ///
    /// Procedural sectors are always aligned to their own 1280 Ly corner, so
    /// flooring it to `cube_width` is a no-op (every mass code's width
    /// divides 1280 evenly). Hand-authored regions carry no grid index of
    /// their own — the retrieved source doesn't include the module that
    /// would define one (see `DESIGN.md`) — so this floors the region's
    /// centre to the same grid instead, which is the natural reading of
    /// "this region's systems sit on the procedural grid, just named
    /// differently."
    pub fn grid_origin(&self, tables: &FragmentTables, cube_width: f64) -> Position {
        let reference = match self {
            Sector::Procedural(p) => p.corner(tables),
            Sector::HandAuthored(h) => h.region.centre,
        };
        floor_to_grid(reference, tables.base_coords, cube_width)
    }
}

fn floor_to_grid(pos: Position, base: Position, width: f64) -> Position {
    Position::new(
        base.x + ((pos.x - base.x) / width).floor() * width,
        base.y + ((pos.y - base.y) / width).floor() * width,
        base.z + ((pos.z - base.z) / width).floor() * width,
    )
}

/// The signed sector index a position falls within.
pub fn sector_index_from_position(tables: &FragmentTables, pos: Position) -> SectorIndex {
    SectorIndex::new(
        ((pos.x - tables.base_coords.x) / tables.cube_size).floor() as i64,
        ((pos.y - tables.base_coords.y) / tables.cube_size).floor() as i64,
        ((pos.z - tables.base_coords.z) / tables.cube_size).floor() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::FragmentData;

    fn tables() -> FragmentTables {
        FragmentTables::build(&FragmentData::embedded())
    }

    #[test]
    fn corner_is_a_multiple_of_cube_size_from_base() {
        let t = tables();
        let index = SectorIndex::new(3, -2, 5);
        let sector = PgSector {
            index,
            name: "Test".to_string(),
            class: SectorClass::One,
        };
        let corner = sector.corner(&t);
        assert_eq!(corner.x, t.base_coords.x + 3.0 * t.cube_size);
        assert_eq!(corner.y, t.base_coords.y - 2.0 * t.cube_size);
        assert_eq!(corner.z, t.base_coords.z + 5.0 * t.cube_size);
    }

    #[test]
    fn sector_index_round_trips_through_corner() {
        let t = tables();
        let index = SectorIndex::new(10, 0, -4);
        let sector = PgSector {
            index,
            name: "Test".to_string(),
            class: SectorClass::One,
        };
        let corner = sector.corner(&t);
        assert_eq!(sector_index_from_position(&t, corner), index);
    }

    #[test]
    fn grid_origin_of_procedural_sector_equals_its_corner() {
        let t = tables();
        let index = SectorIndex::new(1, 1, 1);
        let sector = Sector::Procedural(PgSector {
            index,
            name: "Test".to_string(),
            class: SectorClass::One,
        });
        let corner = PgSector {
            index,
            name: "Test".to_string(),
            class: SectorClass::One,
        }
        .corner(&t);
        assert_eq!(sector.grid_origin(&t, 10.0), corner);
    }
}
