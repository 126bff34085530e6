// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts: debug-mode assertions for invariants this crate's
//! correctness depends on but that aren't convenient to re-check on every
//! call in release builds.
//!
//! Zero-cost in release (`debug_assert!`), early failure detection in
//! debug and test builds.

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

use crate::position::MassCode;

const _: () = {
    // INVARIANT: mass codes strictly widen from A to H, each exactly double
    // the one before, bottoming out at cube_size for H.
    assert!(MassCode::A.depth() < MassCode::H.depth());
    assert!(MassCode::H.depth() - MassCode::A.depth() == 7);
};

use crate::position::{Position, SectorIndex};
use crate::system::SystemId;
use crate::tables::{FragmentTables, GalaxySize, RunSeries};

// ============================================================================
// RUN SERIES CONTRACTS
// ============================================================================

/// Check that a [`RunSeries`]'s entries tile its offset space exactly once:
/// each entry's run starts where the previous one's ends, and the sum of
/// run lengths matches the series' own cached total.
#[inline]
pub fn check_run_series_well_formed(series: &RunSeries) {
    let mut expected_offset = 0i64;
    let mut summed = 0i64;
    for (i, entry) in series.entries.iter().enumerate() {
        debug_assert_eq!(
            entry.base_offset, expected_offset,
            "Contract violation: RunSeries tiling - entry[{}] ('{}') base_offset {} != expected {}",
            i, entry.name, entry.base_offset, expected_offset
        );
        debug_assert!(
            entry.run_length > 0,
            "Contract violation: RunSeries tiling - entry[{}] ('{}') has non-positive run_length {}",
            i, entry.name, entry.run_length
        );
        expected_offset += entry.run_length;
        summed += entry.run_length;
    }
    debug_assert_eq!(
        summed, series.total_run_length,
        "Contract violation: RunSeries total - summed entries {} != total_run_length {}",
        summed, series.total_run_length
    );
}

/// Check every run series in a built [`FragmentTables`].
#[inline]
pub fn check_tables_well_formed(tables: &FragmentTables) {
    check_run_series_well_formed(&tables.prefixes);
    check_run_series_well_formed(&tables.c1_infixes_s1);
    check_run_series_well_formed(&tables.c1_infixes_s2);
    debug_assert!(
        !tables.fragment_alphabet.is_empty(),
        "Contract violation: fragment_alphabet is empty"
    );
    debug_assert!(
        tables
            .fragment_alphabet
            .windows(2)
            .all(|w| w[0].len() >= w[1].len()),
        "Contract violation: fragment_alphabet is not sorted longest-first"
    );
}

// ============================================================================
// GALAXY BOX CONTRACTS
// ============================================================================

/// Check that a sector index, once recentred by `base`, lands inside the
/// galaxy box — the precondition [`crate::offset::offset_from_sector`]
/// itself enforces, re-checked here for callers that bypass it.
#[inline]
pub fn check_sector_in_bounds(index: SectorIndex, base: SectorIndex, size: GalaxySize) {
    let shifted = index + base;
    debug_assert!(
        shifted.x >= 0 && shifted.x < size.x,
        "Contract violation: sector index x {} out of [0, {})",
        shifted.x,
        size.x
    );
    debug_assert!(
        shifted.y >= 0 && shifted.y < size.y,
        "Contract violation: sector index y {} out of [0, {})",
        shifted.y,
        size.y
    );
    debug_assert!(
        shifted.z >= 0 && shifted.z < size.z,
        "Contract violation: sector index z {} out of [0, {})",
        shifted.z,
        size.z
    );
}

// ============================================================================
// SYSTEM ID / RELATIVE POSITION CONTRACTS
// ============================================================================

/// Check that a parsed [`SystemId`]'s letter fields and numbers are in the
/// ranges [`SystemId::new`] is supposed to guarantee.
#[inline]
pub fn check_system_id_well_formed(id: &SystemId) {
    for c in [id.prefix, id.centre, id.suffix] {
        debug_assert!(
            c.is_ascii_uppercase(),
            "Contract violation: SystemId field '{}' is not an uppercase ASCII letter",
            c
        );
    }
    debug_assert!(
        id.number1 >= 0 && id.number2 >= 0,
        "Contract violation: SystemId numbers must be non-negative (number1={}, number2={})",
        id.number1,
        id.number2
    );
}

/// Check that a relative position falls within its addressed sub-cube, give
/// or take the half-cube uncertainty every cell carries.
#[inline]
pub fn check_relative_position_in_cube(pos: Position, cube_size: f64, uncertainty: f64) {
    let tolerance = cube_size + uncertainty;
    debug_assert!(
        pos.x >= -uncertainty && pos.x <= tolerance,
        "Contract violation: relative position x {} outside cube [0, {}] (+/- {})",
        pos.x,
        cube_size,
        uncertainty
    );
    debug_assert!(
        pos.y >= -uncertainty && pos.y <= tolerance,
        "Contract violation: relative position y {} outside cube [0, {}] (+/- {})",
        pos.y,
        cube_size,
        uncertainty
    );
    debug_assert!(
        pos.z >= -uncertainty && pos.z <= tolerance,
        "Contract violation: relative position z {} outside cube [0, {}] (+/- {})",
        pos.z,
        cube_size,
        uncertainty
    );
}
