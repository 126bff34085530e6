// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relative-position codec: packing/unpacking a system's six-field
//! identifier against a position within its sector's mass-code cube.
//!
//! Grounded on `pgnames.py`'s `_get_relpos_from_sysid()` /
//! `_get_sysid_from_relpos()`. The six fields pack into a single base-26
//! integer (`number1` is the most significant "digit", then suffix, centre,
//! prefix), which is then decomposed into `row`/`stack`/`column` against a
//! 128-wide grid — `number2` never participates in the packing: it labels
//! which star within the addressed cell this is, and is carried through
//! unchanged rather than computed.

use crate::error::GalaxyError;
use crate::position::{MassCode, Position};

const LETTERS: i64 = 26;
const ROW_LENGTH: i64 = 128;
const ROW_AREA: i64 = ROW_LENGTH * ROW_LENGTH;

/// The six fields of a parsed system identifier, `<P><C>-<S> <m>[<N1>-]<N2>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemId {
    pub prefix: char,
    pub centre: char,
    pub suffix: char,
    pub mass_code: MassCode,
    pub number1: i64,
    pub number2: i64,
}

impl SystemId {
    /// Construct a system identifier, validating that `prefix`/`centre`/
    /// `suffix` are each a single `A..=Z` letter and that both numbers are
    /// non-negative.
    pub fn new(
        prefix: char,
        centre: char,
        suffix: char,
        mass_code: MassCode,
        number1: i64,
        number2: i64,
    ) -> Result<Self, GalaxyError> {
        for c in [prefix, centre, suffix] {
            if !c.is_ascii_alphabetic() {
                return Err(GalaxyError::NotPg);
            }
        }
        if number1 < 0 || number2 < 0 {
            return Err(GalaxyError::NotPg);
        }
        Ok(SystemId {
            prefix: prefix.to_ascii_uppercase(),
            centre: centre.to_ascii_uppercase(),
            suffix: suffix.to_ascii_uppercase(),
            mass_code,
            number1,
            number2,
        })
    }
}

fn letter_index(c: char) -> i64 {
    i64::from(c.to_ascii_uppercase() as u8 - b'A')
}

fn letter_at(index: i64) -> char {
    (b'A' + (index.rem_euclid(LETTERS)) as u8) as char
}

/// A position within a sector's mass-code cube, plus the half-cube
/// uncertainty inherent in addressing a cell rather than a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativePosition {
    pub position: Position,
    pub uncertainty: f64,
}

/// `SystemId` → the position of its cell within the sector cube (origin at
/// the sector's own corner), and the half-cube uncertainty.
///
/// Mirrors `_get_relpos_from_sysid`: always computes a position, even one
/// whose `row` falls outside the 128-row grid (`number1` addressing a cell
/// beyond the sector boundary). Whether that overflow is acceptable depends
/// on whether the enclosing sector is hand-authored, which this function has
/// no way to know — that decision, and the warning it logs, belongs to the
/// caller (`Galaxy::system_from_name`).
pub fn relative_position(cube_size: f64, id: &SystemId) -> RelativePosition {
    let packed = LETTERS.pow(3) * id.number1
        + LETTERS.pow(2) * letter_index(id.suffix)
        + LETTERS * letter_index(id.centre)
        + letter_index(id.prefix);

    let row = packed.div_euclid(ROW_AREA);
    let remainder = packed.rem_euclid(ROW_AREA);
    let stack = remainder.div_euclid(ROW_LENGTH);
    let column = remainder.rem_euclid(ROW_LENGTH);

    let cube_width = id.mass_code.sub_cube_size(cube_size);
    let half = cube_width / 2.0;

    RelativePosition {
        position: Position::new(
            column as f64 * cube_width + half,
            stack as f64 * cube_width + half,
            row as f64 * cube_width + half,
        ),
        uncertainty: half,
    }
}

/// A position within a sector cube → the system identifier whose cell
/// contains it. `number2` is always `0` (this codec has no way to recover
/// which star within the cell a bare position refers to).
///
/// Mirrors `_get_sysid_from_relpos`.
pub fn system_id_from_position(
    cube_size: f64,
    relative: Position,
    mass_code: MassCode,
) -> SystemId {
    let cube_width = mass_code.sub_cube_size(cube_size);
    let column = (relative.x / cube_width).floor() as i64;
    let stack = (relative.y / cube_width).floor() as i64;
    let row = (relative.z / cube_width).floor() as i64;

    let packed = column + ROW_LENGTH * stack + ROW_AREA * row;

    let prefix = letter_at(packed.rem_euclid(LETTERS));
    let centre = letter_at(packed.div_euclid(LETTERS).rem_euclid(LETTERS));
    let suffix = letter_at(packed.div_euclid(LETTERS.pow(2)).rem_euclid(LETTERS));
    let number1 = packed.div_euclid(LETTERS.pow(3));

    SystemId {
        prefix,
        centre,
        suffix,
        mass_code,
        number1,
        number2: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_relative_position() {
        for number1 in 0..4i64 {
            for p in [0, 5, 25] {
                for c in [0, 12, 25] {
                    for s in [0, 1, 25] {
                        let id = SystemId::new(
                            letter_at(p),
                            letter_at(c),
                            letter_at(s),
                            MassCode::D,
                            number1,
                            7,
                        )
                        .unwrap();
                        let rel = relative_position(1280.0, &id);
                        let back = system_id_from_position(1280.0, rel.position, MassCode::D);
                        assert_eq!(back.prefix, id.prefix);
                        assert_eq!(back.centre, id.centre);
                        assert_eq!(back.suffix, id.suffix);
                        assert_eq!(back.number1, id.number1);
                    }
                }
            }
        }
    }

    #[test]
    fn overflowing_number1_is_computed_not_rejected() {
        // `relative_position` itself never rejects an out-of-cube row: that
        // decision (and its HA leeway) belongs to the caller.
        let id = SystemId::new('A', 'A', 'A', MassCode::H, 10_000_000, 0).unwrap();
        let rel = relative_position(1280.0, &id);
        assert!(rel.position.z > 1280.0);
    }

    #[test]
    fn rejects_non_letter_fields() {
        assert_eq!(
            SystemId::new('1', 'A', 'A', MassCode::A, 0, 0),
            Err(GalaxyError::NotPg)
        );
    }
}
