// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hand-authored (HA) sectors: named spherical regions that overlay the
//! procedural grid and take naming precedence over it.
//!
//! Grounded on `pgnames.py`'s `_ha_get_name()` and the `ha_sectors` data
//! table it reads from `pgdata`.

use crate::fragments::HaSectorData;
use crate::position::{MassCode, Position};
use std::collections::HashMap;

/// A spherical hand-authored region: every point within `radius` light-years
/// of `centre` belongs to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaRegion {
    pub centre: Position,
    pub radius: f64,
    pub mass_code: MassCode,
}

impl HaRegion {
    pub fn contains(&self, pos: Position) -> bool {
        self.centre.distance(&pos) <= self.radius
    }
}

/// A named hand-authored sector.
#[derive(Debug, Clone, PartialEq)]
pub struct HaSector {
    pub name: String,
    pub region: HaRegion,
}

/// The full set of hand-authored sectors, indexed by lowercase name for
/// case-insensitive lookup.
#[derive(Debug, Clone)]
pub struct HaTable {
    by_lower_name: HashMap<String, HaSector>,
}

impl HaTable {
    pub fn build(data: &HashMap<String, HaSectorData>) -> Self {
        let mut by_lower_name = HashMap::with_capacity(data.len());
        for (key, region_data) in data {
            let mass_code = region_data
                .mass_code
                .chars()
                .next()
                .and_then(|c| MassCode::from_char(c).ok())
                .unwrap_or(MassCode::A);
            let region = HaRegion {
                centre: Position::new(
                    region_data.centre[0],
                    region_data.centre[1],
                    region_data.centre[2],
                ),
                radius: region_data.radius,
                mass_code,
            };
            by_lower_name.insert(
                key.to_lowercase(),
                HaSector {
                    name: title_case_words(key),
                    region,
                },
            );
        }
        HaTable { by_lower_name }
    }

    /// The first HA sector whose region contains `pos`, mirroring
    /// `_ha_get_name`. HA regions are assumed not to overlap — if the data
    /// ever violated that, which one "wins" would be unspecified, same as
    /// the original `dict` iteration it's grounded on.
    pub fn find_containing(&self, pos: Position) -> Option<&HaSector> {
        self.by_lower_name.values().find(|s| s.region.contains(pos))
    }

    /// Look up an HA sector by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&HaSector> {
        self.by_lower_name.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.by_lower_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_lower_name.is_empty()
    }
}

fn title_case_words(raw: &str) -> String {
    raw.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::FragmentData;

    fn table() -> HaTable {
        HaTable::build(&FragmentData::embedded().ha_sectors)
    }

    #[test]
    fn finds_sol_at_origin() {
        let t = table();
        let found = t.find_containing(Position::ORIGIN).unwrap();
        assert_eq!(found.name, "Sol");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let t = table();
        assert!(t.get("SOL").is_some());
        assert!(t.get("sol").is_some());
    }

    #[test]
    fn position_far_away_is_not_ha() {
        let t = table();
        assert!(t
            .find_containing(Position::new(100_000.0, 100_000.0, 100_000.0))
            .is_none());
    }
}
