// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw fragment/override data, as shipped in a data file.
//!
//! `FragmentData` is the direct `serde_json` deserialization of the data
//! file; it is deliberately dumb (no derived totals, no lookup indices) so
//! that swapping in the authoritative table is a one-file change. All the
//! derived structure — offset tables, reverse lookups, total run lengths —
//! lives in [`crate::tables::FragmentTables`], built once from this.

use serde::Deserialize;
use std::collections::HashMap;

/// Default fixture data, standing in for the authoritative ~3000-entry
/// table shipped with the game (excluded from this crate as a data input,
/// not a code concern — see `DESIGN.md`).
pub const DEFAULT_FRAGMENT_DATA_JSON: &str = include_str!("data/fragments.json");

#[derive(Debug, Clone, Deserialize)]
pub struct FragmentData {
    pub cube_size: f64,
    pub base_coords: [f64; 3],

    pub c1_galaxy_size: [i64; 3],
    pub c2_galaxy_size: [i64; 3],

    pub prefixes: Vec<String>,
    pub prefix_length_default: u32,
    pub prefix_length_overrides: HashMap<String, u32>,

    pub c1_infixes_s1: Vec<String>,
    pub c1_infixes_s2: Vec<String>,
    pub c1_infix_s1_length_default: u32,
    pub c1_infix_s2_length_default: u32,
    pub c1_infix_length_overrides: HashMap<String, u32>,

    pub c1_suffixes_1: Vec<String>,
    pub c1_suffixes_2: Vec<String>,
    pub c2_suffixes_1: Vec<String>,
    pub c2_suffixes_2: Vec<String>,

    /// Prefixes whose default infix series (1) is overridden to use series 2.
    pub c1_prefix_infix_override_map: HashMap<String, u32>,
    /// Prefixes whose default suffix series (1) is overridden to use series 2.
    pub c2_prefix_suffix_override_map: HashMap<String, u32>,

    pub c2_vouter_states: Vec<(i64, i64)>,
    pub c2_outer_states: Vec<(i64, i64)>,
    pub c2_run_states: Vec<(i64, i64)>,
    pub c2_run_diff: i64,
    pub c2_outer_diff: i64,
    pub c2_vouter_diff: i64,
    pub c2_f0_step: i64,
    pub c2_f2_step: i64,

    pub c1_arbitrary_index_offset: i64,

    pub ha_sectors: HashMap<String, HaSectorData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HaSectorData {
    pub centre: [f64; 3],
    pub radius: f64,
    pub mass_code: String,
}

impl FragmentData {
    /// Load the fixture data embedded in this crate.
    pub fn embedded() -> Self {
        Self::from_json(DEFAULT_FRAGMENT_DATA_JSON)
            .expect("embedded fragment data must parse: this is a build-time invariant")
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
