// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Class-2 sector-name codec: two two-fragment words, `Prefix0 Suffix0
//! Prefix1 Suffix1`.
//!
//! Grounded on `pgnames.py`'s `_c2_get_name_from_offset()` /
//! `_c2_get_offset_from_name()`: both prefix/suffix streams are addressed by
//! a four-layer packed-state-pair system (`c2_run_states`,
//! `c2_outer_states`, `c2_vouter_states`), each layer pairing the two
//! streams' positions so the whole linear offset space factors as
//! `((vo1 * len(vouter) + vo2) * len(outer) + oo1) * len(run) + off`.

use crate::error::GalaxyError;
use crate::tables::FragmentTables;

/// `[prefix0, suffix0, prefix1, suffix1]` → linear offset in the class-2
/// galaxy's coordinate space.
pub fn offset_from_name(tables: &FragmentTables, frags: &[String; 4]) -> Result<i64, GalaxyError> {
    let idx0 = prefix_suffix_index(tables, &frags[0], &frags[1])?;
    let idx1 = prefix_suffix_index(tables, &frags[2], &frags[3])?;

    let off0 = idx0.rem_euclid(tables.c2_f0_step);
    let off1 = idx1.rem_euclid(tables.c2_f2_step);
    let base0 = idx0 - off0;
    let base1 = idx1 - off1;

    let (ors0, rem0) = (
        base0.div_euclid(tables.c2_vouter_diff),
        base0.rem_euclid(tables.c2_vouter_diff),
    );
    let (oos0, rem0b) = (
        rem0.div_euclid(tables.c2_outer_diff),
        rem0.rem_euclid(tables.c2_outer_diff),
    );
    let os0 = rem0b.div_euclid(tables.c2_run_diff);

    let (ors1, rem1) = (
        base1.div_euclid(tables.c2_vouter_diff),
        base1.rem_euclid(tables.c2_vouter_diff),
    );
    let (oos1, rem1b) = (
        rem1.div_euclid(tables.c2_outer_diff),
        rem1.rem_euclid(tables.c2_outer_diff),
    );
    let os1 = rem1b.div_euclid(tables.c2_run_diff);

    let state_lookup_failed = || {
        log::warn!("failed to get run state indexes for {frags:?}; bad sector name?");
        GalaxyError::UnknownSector
    };
    let vo1 = tables
        .c2_vouter_states
        .iter()
        .position(|&p| p == (ors0, ors1))
        .ok_or_else(state_lookup_failed)?;
    let vo2 = tables
        .c2_vouter_states
        .iter()
        .position(|&p| p == (oos0, oos1))
        .ok_or_else(state_lookup_failed)?;
    let oo1 = tables
        .c2_outer_states
        .iter()
        .position(|&p| p == (os0, os1))
        .ok_or_else(state_lookup_failed)?;
    let off = tables
        .c2_run_states
        .iter()
        .position(|&p| p == (off0, off1))
        .ok_or_else(state_lookup_failed)?;

    let vouter_len = tables.c2_vouter_states.len() as i64;
    let outer_len = tables.c2_outer_states.len() as i64;
    let run_len = tables.c2_run_states.len() as i64;

    let mut offset = (vo1 as i64) * vouter_len * outer_len;
    offset += (vo2 as i64) * outer_len;
    offset += oo1 as i64;
    offset *= run_len;
    offset += off as i64;
    Ok(offset)
}

/// Linear offset in the class-2 galaxy's coordinate space → `[prefix0,
/// suffix0, prefix1, suffix1]`.
pub fn name_from_offset(tables: &FragmentTables, offset: i64) -> Result<[String; 4], GalaxyError> {
    let run_len = tables.c2_run_states.len() as i64;
    let vouter_len = tables.c2_vouter_states.len() as i64;
    let outer_len = tables.c2_outer_states.len() as i64;

    let (line, off) = (offset.div_euclid(run_len), offset.rem_euclid(run_len));
    let (vo1, line2) = (
        line.div_euclid(vouter_len * outer_len),
        line.rem_euclid(vouter_len * outer_len),
    );
    let (vo2, oo1) = (line2.div_euclid(outer_len), line2.rem_euclid(outer_len));

    let vo1 = usize::try_from(vo1).map_err(|_| GalaxyError::UnknownSector)?;
    let vo2 = usize::try_from(vo2).map_err(|_| GalaxyError::UnknownSector)?;
    let oo1 = usize::try_from(oo1).map_err(|_| GalaxyError::UnknownSector)?;
    let off = usize::try_from(off).map_err(|_| GalaxyError::UnknownSector)?;

    let &(ors0, ors1) = tables
        .c2_vouter_states
        .get(vo1)
        .ok_or(GalaxyError::UnknownSector)?;
    let &(oos0, oos1) = tables
        .c2_vouter_states
        .get(vo2)
        .ok_or(GalaxyError::UnknownSector)?;
    let &(os0, os1) = tables
        .c2_outer_states
        .get(oo1)
        .ok_or(GalaxyError::UnknownSector)?;
    let &(run0, run1) = tables
        .c2_run_states
        .get(off)
        .ok_or(GalaxyError::UnknownSector)?;

    let idx0 = ors0 * tables.c2_vouter_diff
        + oos0 * tables.c2_outer_diff
        + os0 * tables.c2_run_diff
        + run0;
    let idx1 = ors1 * tables.c2_vouter_diff
        + oos1 * tables.c2_outer_diff
        + os1 * tables.c2_run_diff
        + run1;

    let (p0, s0) = prefix_suffix_from_index(tables, idx0)?;
    let (p1, s1) = prefix_suffix_from_index(tables, idx1)?;
    Ok([p0, s0, p1, s1])
}

/// `prefix_offsets[prefix].base + suffixes(prefix)[..run_length].index(suffix)`.
fn prefix_suffix_index(
    tables: &FragmentTables,
    prefix: &str,
    suffix: &str,
) -> Result<i64, GalaxyError> {
    let idx = tables.prefixes.index_of(prefix).ok_or_else(|| {
        log::warn!("'{prefix}' is not a known class-2 prefix; bad sector name?");
        GalaxyError::UnknownSector
    })?;
    let entry = tables.prefixes.entry(idx);
    let series = tables.c2_suffix_series_for_prefix(prefix);
    let list: &[String] = if series == 1 {
        &tables.c2_suffixes_1
    } else {
        &tables.c2_suffixes_2
    };
    let bound = (entry.run_length as usize).min(list.len());
    let sidx = list[..bound].iter().position(|s| s == suffix).ok_or_else(|| {
        log::warn!("'{suffix}' is not a known suffix for prefix '{prefix}'; bad sector name?");
        GalaxyError::UnknownSector
    })?;
    Ok(entry.base_offset + sidx as i64)
}

fn prefix_suffix_from_index(
    tables: &FragmentTables,
    idx: i64,
) -> Result<(String, String), GalaxyError> {
    let (prefix_idx, within) = tables.prefixes.locate(idx);
    let entry = tables.prefixes.entry(prefix_idx);
    if within < 0 || within >= entry.run_length {
        return Err(GalaxyError::UnknownSector);
    }
    let series = tables.c2_suffix_series_for_prefix(&entry.name);
    let list: &[String] = if series == 1 {
        &tables.c2_suffixes_1
    } else {
        &tables.c2_suffixes_2
    };
    let suffix = list
        .get(within as usize)
        .cloned()
        .ok_or(GalaxyError::UnknownSector)?;
    Ok((entry.name.clone(), suffix))
}
