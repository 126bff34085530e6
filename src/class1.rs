// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Class-1 sector-name codec: `Prefix Infix1 (Infix2) Suffix`.
//!
//! Grounded on `pgnames.py`'s `_c1_get_offset_from_name()` / `_c1_get_name()`
//! — a nested divmod/multiply chain that walks from a linear galaxy offset
//! down through the prefix run, then the infix1 run, then (for 4-fragment
//! names) the infix2 run, bottoming out at a suffix index. Encoding walks
//! the same chain in reverse.

use crate::error::GalaxyError;
use crate::tables::FragmentTables;

/// `[prefix, infix1, suffix]` or `[prefix, infix1, infix2, suffix]` → linear
/// offset in the class-1 galaxy's coordinate space.
pub fn offset_from_name(tables: &FragmentTables, frags: &[String]) -> Result<i64, GalaxyError> {
    if frags.len() != 3 && frags.len() != 4 {
        return Err(GalaxyError::NotPg);
    }

    let prefix = frags[0].as_str();
    let (all_suffixes, _wordstart) = tables
        .suffixes_for(&frags[..frags.len() - 1])
        .ok_or_else(|| {
            log::warn!("failed to resolve a suffix list for {frags:?}; bad sector name?");
            GalaxyError::UnknownSector
        })?;
    let suffix = frags.last().expect("length checked above");
    let suf_index = all_suffixes
        .iter()
        .position(|s| s == suffix)
        .ok_or_else(|| {
            log::warn!("'{suffix}' is not a known suffix for {frags:?}; bad sector name?");
            GalaxyError::UnknownSector
        })? as i64;

    let f2_offset = if frags.len() == 4 {
        let infix2 = frags[2].as_str();
        let infix1 = frags[1].as_str();

        let i2_run = tables
            .c1_infix_run_length(infix2)
            .ok_or(GalaxyError::UnknownSector)?;
        let i2_total = tables
            .c1_infix_total_run_length(infix2)
            .ok_or(GalaxyError::UnknownSector)?;
        let i2_base = tables
            .c1_infix_base_offset(infix2)
            .ok_or(GalaxyError::UnknownSector)?;

        // STEP 1: jump forward by every infix2-run we've already passed over.
        let mut suf_offset = suf_index;
        suf_offset += (suf_index / i2_run) * i2_total;

        // STEP 2: suffix-space -> infix2-space.
        let f3_offset = (suf_offset.div_euclid(i2_run)) * i2_total
            + suf_offset.rem_euclid(i2_run)
            + i2_base;

        let i1_run = tables
            .c1_infix_run_length(infix1)
            .ok_or(GalaxyError::UnknownSector)?;
        let i1_total = tables
            .c1_infix_total_run_length(infix1)
            .ok_or(GalaxyError::UnknownSector)?;
        let i1_base = tables
            .c1_infix_base_offset(infix1)
            .ok_or(GalaxyError::UnknownSector)?;

        // STEP 3: infix2-space -> infix1-space.
        (f3_offset.div_euclid(i1_run)) * i1_total + f3_offset.rem_euclid(i1_run) + i1_base
    } else {
        let infix1 = frags[1].as_str();
        let i1_run = tables
            .c1_infix_run_length(infix1)
            .ok_or(GalaxyError::UnknownSector)?;
        let i1_total = tables
            .c1_infix_total_run_length(infix1)
            .ok_or(GalaxyError::UnknownSector)?;
        let i1_base = tables
            .c1_infix_base_offset(infix1)
            .ok_or(GalaxyError::UnknownSector)?;

        (suf_index.div_euclid(i1_run)) * i1_total + suf_index.rem_euclid(i1_run) + i1_base
    };

    let prefix_run = tables
        .prefix_run_length(prefix)
        .ok_or(GalaxyError::UnknownSector)?;
    let prefix_base = tables.prefixes.entry(
        tables
            .prefixes
            .index_of(prefix)
            .ok_or(GalaxyError::UnknownSector)?,
    );

    let offset = (f2_offset.div_euclid(prefix_run)) * tables.prefixes.total_run_length
        - tables.c1_arbitrary_index_offset
        + f2_offset.rem_euclid(prefix_run)
        + prefix_base.base_offset;

    Ok(offset)
}

/// Linear offset in the class-1 galaxy's coordinate space → fragment
/// sequence (`[prefix, infix1, suffix]` or `[prefix, infix1, infix2,
/// suffix]`).
pub fn name_from_offset(tables: &FragmentTables, offset: i64) -> Vec<String> {
    let shifted = offset + tables.c1_arbitrary_index_offset;
    let total_prefix_run = tables.prefixes.total_run_length;
    let prefix_cnt = shifted.div_euclid(total_prefix_run);
    let cur_offset_in_galaxy = shifted.rem_euclid(total_prefix_run);

    let (prefix_idx, mut cur_offset) = tables.prefixes.locate(cur_offset_in_galaxy);
    let prefix_entry = tables.prefixes.entry(prefix_idx);
    let prefix = prefix_entry.name.clone();
    let prefix_run_len = prefix_entry.run_length;

    let (infix1_series, _) = tables
        .c1_infixes_after(&prefix)
        .expect("every loaded prefix has an infix series");
    let infix1_total = infix1_series.total_run_length;

    let combined = prefix_cnt * prefix_run_len + cur_offset;
    let infix1_cnt = combined.div_euclid(infix1_total);
    cur_offset = combined.rem_euclid(infix1_total);

    let (infix1_idx, within1) = infix1_series.locate(cur_offset);
    let infix1_entry = infix1_series.entry(infix1_idx);
    let infix1 = infix1_entry.name.clone();
    let infix1_run_len = infix1_entry.run_length;
    cur_offset = within1;

    let frags_so_far_1 = vec![prefix.clone(), infix1.clone()];
    let suffixes_after_infix1 = tables
        .suffixes_for(&frags_so_far_1)
        .expect("prefix+infix1 always resolves a suffix list")
        .0;
    let mut next_idx = infix1_run_len * infix1_cnt + cur_offset;

    let mut frags = vec![prefix.clone(), infix1.clone()];

    let suffixes_final: &[String] = if next_idx >= suffixes_after_infix1.len() as i64 {
        let (infix2_series, _) = tables
            .c1_infixes_after(&infix1)
            .expect("every class-1 infix1 has a continuing infix2 series");
        let infix2_total = infix2_series.total_run_length;

        let combined2 = infix1_cnt * infix1_run_len + cur_offset;
        let infix2_cnt = combined2.div_euclid(infix2_total);
        let cur_offset2 = combined2.rem_euclid(infix2_total);

        let (infix2_idx, within2) = infix2_series.locate(cur_offset2);
        let infix2_entry = infix2_series.entry(infix2_idx);
        let infix2 = infix2_entry.name.clone();
        let infix2_run_len = infix2_entry.run_length;

        let frags_so_far = vec![prefix.clone(), infix1.clone(), infix2.clone()];
        let suffixes_after_infix2 = tables
            .suffixes_for(&frags_so_far)
            .expect("prefix+infix1+infix2 always resolves a suffix list")
            .0;
        next_idx = infix2_run_len * infix2_cnt + within2;

        frags.push(infix2);
        suffixes_after_infix2
    } else {
        suffixes_after_infix1
    };

    frags.push(suffixes_final[next_idx as usize].clone());
    frags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::FragmentData;

    fn tables() -> FragmentTables {
        FragmentTables::build(&FragmentData::embedded())
    }

    #[test]
    fn round_trips_three_fragment_names() {
        let t = tables();
        for offset in -200..200i64 {
            let frags = name_from_offset(&t, offset);
            assert!(frags.len() == 3 || frags.len() == 4);
            let back = offset_from_name(&t, &frags).unwrap();
            assert_eq!(back, offset, "frags {frags:?} didn't round-trip");
        }
    }

    #[test]
    fn unknown_suffix_is_rejected() {
        let t = tables();
        let frags = vec!["Dr".to_string(), "au".to_string(), "zzzz".to_string()];
        assert_eq!(offset_from_name(&t, &frags), Err(GalaxyError::UnknownSector));
    }
}
