// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one-time offset-accumulation pass over [`FragmentData`].
//!
//! Every total run length used elsewhere in the crate (`total_prefix_run`,
//! `total_infix_s1_run`, `total_infix_s2_run`) is *derived* here by summing
//! the table's own per-member run lengths, rather than stored anywhere as a
//! second, independently-maintained constant.

use crate::fragments::FragmentData;
use crate::position::Position;
use std::collections::HashMap;

/// A single member of a run-length-partitioned series (a prefix, or an
/// infix within one of the two class-1 series): how long a run it owns,
/// and where that run starts within the series' flat offset space.
#[derive(Debug, Clone)]
pub struct RunEntry {
    pub name: String,
    pub run_length: i64,
    pub base_offset: i64,
}

/// A run-length-partitioned series: an ordered list of [`RunEntry`] plus an
/// index from fragment name back to its position, and the total run length
/// (the sum of every member's run length — the single source of truth the
/// rest of the crate reads from instead of a hardcoded total).
#[derive(Debug, Clone)]
pub struct RunSeries {
    pub entries: Vec<RunEntry>,
    by_name: HashMap<String, usize>,
    pub total_run_length: i64,
}

impl RunSeries {
    fn build(names: &[String], default_len: u32, overrides: &HashMap<String, u32>) -> Self {
        let mut entries = Vec::with_capacity(names.len());
        let mut by_name = HashMap::with_capacity(names.len());
        let mut offset = 0i64;
        for (i, name) in names.iter().enumerate() {
            let run_length = i64::from(*overrides.get(name).unwrap_or(&default_len));
            entries.push(RunEntry {
                name: name.clone(),
                run_length,
                base_offset: offset,
            });
            by_name.insert(name.clone(), i);
            offset += run_length;
        }
        let total_run_length = offset;
        RunSeries {
            entries,
            by_name,
            total_run_length,
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn entry(&self, index: usize) -> &RunEntry {
        &self.entries[index]
    }

    /// Find the member whose run contains `offset` (taken modulo the
    /// series' total run length), returning its index and the offset
    /// within that member's own run.
    pub fn locate(&self, offset: i64) -> (usize, i64) {
        let offset = offset.rem_euclid(self.total_run_length);
        for (i, entry) in self.entries.iter().enumerate() {
            if offset < entry.base_offset + entry.run_length {
                return (i, offset - entry.base_offset);
            }
        }
        unreachable!(
            "RunSeries::locate: offset {offset} not covered by any run, total {}",
            self.total_run_length
        )
    }
}

/// Galaxy-box dimensions, sectors per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalaxySize {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl GalaxySize {
    fn from_array(a: [i64; 3]) -> Self {
        GalaxySize { x: a[0], y: a[1], z: a[2] }
    }

    /// The sector index `base_sector_coords` recentres offset arithmetic
    /// around: the midpoint of the box, so a signed index can legally range
    /// roughly `[-size/2, size/2)` on each axis. See `DESIGN.md`.
    pub fn midpoint(&self) -> crate::position::SectorIndex {
        crate::position::SectorIndex::new(self.x / 2, self.y / 2, self.z / 2)
    }
}

/// The fully-built fragment tables: every series' offsets, totals, and
/// lookup indices, plus the class-2 layered state tables, all derived once
/// from a loaded [`FragmentData`].
#[derive(Debug, Clone)]
pub struct FragmentTables {
    pub cube_size: f64,
    pub base_coords: Position,

    pub c1_galaxy_size: GalaxySize,
    pub c2_galaxy_size: GalaxySize,
    pub c1_base_sector_coords: crate::position::SectorIndex,
    pub c2_base_sector_coords: crate::position::SectorIndex,

    pub prefixes: RunSeries,
    pub c1_infixes_s1: RunSeries,
    pub c1_infixes_s2: RunSeries,

    pub c1_suffixes_1: Vec<String>,
    pub c1_suffixes_2: Vec<String>,
    pub c2_suffixes_1: Vec<String>,
    pub c2_suffixes_2: Vec<String>,

    c1_prefix_infix_override_map: HashMap<String, u32>,
    c2_prefix_suffix_override_map: HashMap<String, u32>,

    pub c2_vouter_states: Vec<(i64, i64)>,
    pub c2_outer_states: Vec<(i64, i64)>,
    pub c2_run_states: Vec<(i64, i64)>,
    pub c2_run_diff: i64,
    pub c2_outer_diff: i64,
    pub c2_vouter_diff: i64,
    pub c2_f0_step: i64,
    pub c2_f2_step: i64,

    pub c1_arbitrary_index_offset: i64,

    /// Every fragment string across every series, sorted longest-first
    /// (ties broken lexicographically) for longest-match-first tokenizing.
    pub fragment_alphabet: Vec<String>,
}

impl FragmentTables {
    pub fn build(data: &FragmentData) -> Self {
        let prefixes = RunSeries::build(
            &data.prefixes,
            data.prefix_length_default,
            &data.prefix_length_overrides,
        );
        let c1_infixes_s1 = RunSeries::build(
            &data.c1_infixes_s1,
            data.c1_infix_s1_length_default,
            &data.c1_infix_length_overrides,
        );
        let c1_infixes_s2 = RunSeries::build(
            &data.c1_infixes_s2,
            data.c1_infix_s2_length_default,
            &data.c1_infix_length_overrides,
        );

        let c1_galaxy_size = GalaxySize::from_array(data.c1_galaxy_size);
        let c2_galaxy_size = GalaxySize::from_array(data.c2_galaxy_size);

        let mut fragment_alphabet: Vec<String> = data
            .prefixes
            .iter()
            .chain(data.c1_infixes_s1.iter())
            .chain(data.c1_infixes_s2.iter())
            .chain(data.c1_suffixes_1.iter())
            .chain(data.c1_suffixes_2.iter())
            .chain(data.c2_suffixes_1.iter())
            .chain(data.c2_suffixes_2.iter())
            .cloned()
            .collect();
        fragment_alphabet.sort();
        fragment_alphabet.dedup();
        fragment_alphabet.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        FragmentTables {
            cube_size: data.cube_size,
            base_coords: Position::new(
                data.base_coords[0],
                data.base_coords[1],
                data.base_coords[2],
            ),
            c1_galaxy_size,
            c2_galaxy_size,
            c1_base_sector_coords: c1_galaxy_size.midpoint(),
            c2_base_sector_coords: c2_galaxy_size.midpoint(),
            prefixes,
            c1_infixes_s1,
            c1_infixes_s2,
            c1_suffixes_1: data.c1_suffixes_1.clone(),
            c1_suffixes_2: data.c1_suffixes_2.clone(),
            c2_suffixes_1: data.c2_suffixes_1.clone(),
            c2_suffixes_2: data.c2_suffixes_2.clone(),
            c1_prefix_infix_override_map: data.c1_prefix_infix_override_map.clone(),
            c2_prefix_suffix_override_map: data.c2_prefix_suffix_override_map.clone(),
            c2_vouter_states: data.c2_vouter_states.clone(),
            c2_outer_states: data.c2_outer_states.clone(),
            c2_run_states: data.c2_run_states.clone(),
            c2_run_diff: data.c2_run_diff,
            c2_outer_diff: data.c2_outer_diff,
            c2_vouter_diff: data.c2_vouter_diff,
            c2_f0_step: data.c2_f0_step,
            c2_f2_step: data.c2_f2_step,
            c1_arbitrary_index_offset: data.c1_arbitrary_index_offset,
            fragment_alphabet,
        }
    }

    /// Which class-1 infix series (1 or 2) a prefix uses by default.
    pub fn c1_infix_series_for_prefix(&self, prefix: &str) -> u32 {
        *self.c1_prefix_infix_override_map.get(prefix).unwrap_or(&1)
    }

    /// Which class-2 suffix series (1 or 2) a prefix uses by default.
    pub fn c2_suffix_series_for_prefix(&self, prefix: &str) -> u32 {
        *self.c2_prefix_suffix_override_map.get(prefix).unwrap_or(&1)
    }

    /// The suffix list that follows a class-1 name whose last fragment was
    /// drawn from `c1_infixes_s2` (consonant-ish): the vowel-ish series.
    pub fn c1_suffixes_after_s2(&self) -> &[String] {
        &self.c1_suffixes_1
    }

    /// The suffix list that follows a class-1 name whose last fragment was
    /// drawn from `c1_infixes_s1` (vowel-ish): the consonant-ish series.
    pub fn c1_suffixes_after_s1(&self) -> &[String] {
        &self.c1_suffixes_2
    }

    /// The run length of a known prefix.
    pub fn prefix_run_length(&self, prefix: &str) -> Option<i64> {
        self.prefixes
            .index_of(prefix)
            .map(|i| self.prefixes.entry(i).run_length)
    }

    /// Which class-1 infix series (1 or 2) continues a fragment sequence
    /// ending in `last`, mirroring `_c1_get_infixes`: a prefix starts
    /// series 1 (or its override); a series-1 infix continues with series
    /// 2, and vice versa.
    pub fn c1_infixes_after(&self, last: &str) -> Option<(&RunSeries, u32)> {
        if self.prefixes.index_of(last).is_some() {
            let series = self.c1_infix_series_for_prefix(last);
            return Some((self.c1_series(series), series));
        }
        if self.c1_infixes_s1.index_of(last).is_some() {
            return Some((&self.c1_infixes_s2, 2));
        }
        if self.c1_infixes_s2.index_of(last).is_some() {
            return Some((&self.c1_infixes_s1, 1));
        }
        None
    }

    /// The run length of a class-1 infix, wherever in either series it
    /// lives.
    pub fn c1_infix_run_length(&self, infix: &str) -> Option<i64> {
        if let Some(i) = self.c1_infixes_s1.index_of(infix) {
            return Some(self.c1_infixes_s1.entry(i).run_length);
        }
        self.c1_infixes_s2
            .index_of(infix)
            .map(|i| self.c1_infixes_s2.entry(i).run_length)
    }

    /// The total run length of whichever infix series `infix` belongs to.
    pub fn c1_infix_total_run_length(&self, infix: &str) -> Option<i64> {
        if self.c1_infixes_s1.index_of(infix).is_some() {
            return Some(self.c1_infixes_s1.total_run_length);
        }
        if self.c1_infixes_s2.index_of(infix).is_some() {
            return Some(self.c1_infixes_s2.total_run_length);
        }
        None
    }

    /// The base offset of a class-1 infix within its own series.
    pub fn c1_infix_base_offset(&self, infix: &str) -> Option<i64> {
        if let Some(i) = self.c1_infixes_s1.index_of(infix) {
            return Some(self.c1_infixes_s1.entry(i).base_offset);
        }
        self.c1_infixes_s2
            .index_of(infix)
            .map(|i| self.c1_infixes_s2.entry(i).base_offset)
    }

    fn c1_series(&self, series: u32) -> &RunSeries {
        if series == 1 {
            &self.c1_infixes_s1
        } else {
            &self.c1_infixes_s2
        }
    }

    /// The candidate suffix list and the "word start" fragment (whose
    /// prefix run length bounds the truncated list) for a fragment
    /// sequence missing only its trailing suffix. Mirrors `_get_suffixes`:
    /// shared between the class-1 and class-2 codecs since both end a word
    /// in a suffix drawn from one of four lists (two per class).
    pub fn suffixes_for<'a>(
        &'a self,
        frags_without_suffix: &[String],
    ) -> Option<(&'a [String], &'a str)> {
        let last = frags_without_suffix.last()?;
        if self.prefixes.index_of(last).is_some() {
            let series = self.c2_suffix_series_for_prefix(last);
            let list: &[String] = if series == 1 {
                &self.c2_suffixes_1
            } else {
                &self.c2_suffixes_2
            };
            return Some((list, last.as_str()));
        }
        let wordstart = frags_without_suffix[0].as_str();
        if self.c1_infixes_s2.index_of(last).is_some() {
            return Some((self.c1_suffixes_after_s2(), wordstart));
        }
        if self.c1_infixes_s1.index_of(last).is_some() {
            return Some((self.c1_suffixes_after_s1(), wordstart));
        }
        None
    }
}
