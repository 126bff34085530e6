// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full system-name parsing, fragment formatting, and sector-name grammar
//! validation.
//!
//! Grounded on `pgnames.py`'s `pg_system_regex`, `format_name()`, and
//! `is_valid_sector_name()`.

use crate::error::GalaxyError;
use crate::position::MassCode;
use crate::system::SystemId;
use crate::tables::FragmentTables;
use crate::tokenizer;
use regex::Regex;
use std::sync::OnceLock;

/// `^(?P<sector>[\w\s'.()/-]+) (?P<prefix>[A-Za-z])(?P<centre>[A-Za-z])-(?P<suffix>[A-Za-z])
///  (?P<mcode>[A-Za-z])(?:(?P<number1>\d+)-)?(?P<number2>\d+)$`, bit-exact per spec section 6.
fn system_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<sector>[\w\s'.()/-]+) (?P<prefix>[A-Za-z])(?P<centre>[A-Za-z])-(?P<suffix>[A-Za-z]) (?P<mcode>[A-Za-z])(?:(?P<number1>\d+)-)?(?P<number2>\d+)$",
        )
        .expect("system-id regex is a fixed, compile-time-checked pattern")
    })
}

/// A full system name split into its raw sector-name text and parsed
/// six-field system identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSystemName {
    pub sector_name: String,
    pub id: SystemId,
    /// Whether the source text carried an explicit `number1-` group.
    pub had_number1: bool,
}

/// Parse a full `<sector> <P><C>-<S> <m>[<N1>-]<N2>` system name.
pub fn parse_system_name(input: &str) -> Result<ParsedSystemName, GalaxyError> {
    let caps = system_regex().captures(input).ok_or(GalaxyError::NotPg)?;
    let sector_name = caps["sector"].to_string();
    let prefix = caps["prefix"].chars().next().ok_or(GalaxyError::NotPg)?;
    let centre = caps["centre"].chars().next().ok_or(GalaxyError::NotPg)?;
    let suffix = caps["suffix"].chars().next().ok_or(GalaxyError::NotPg)?;
    let mcode = caps["mcode"].chars().next().ok_or(GalaxyError::NotPg)?;
    let mass_code = MassCode::from_char(mcode)?;

    let number1_match = caps.name("number1");
    let number1: i64 = number1_match
        .map(|m| m.as_str().parse().map_err(|_| GalaxyError::NotPg))
        .transpose()?
        .unwrap_or(0);
    let number2: i64 = caps["number2"].parse().map_err(|_| GalaxyError::NotPg)?;

    let id = SystemId::new(prefix, centre, suffix, mass_code, number1, number2)?;
    Ok(ParsedSystemName {
        sector_name,
        id,
        had_number1: number1_match.is_some() && number1 != 0,
    })
}

/// Format the trailing `<P><C>-<S> <m>[<N1>-]<N2>` system-id suffix.
pub fn format_system_id(id: &SystemId) -> String {
    if id.number1 != 0 {
        format!(
            "{}{}-{} {}{}-{}",
            id.prefix,
            id.centre,
            id.suffix,
            id.mass_code.to_char(),
            id.number1,
            id.number2
        )
    } else {
        format!(
            "{}{}-{} {}{}",
            id.prefix,
            id.centre,
            id.suffix,
            id.mass_code.to_char(),
            id.number2
        )
    }
}

/// Render a fragment sequence back into its surface form: class-2 names
/// (four fragments, the first and third both prefixes) get a space between
/// their two words; everything else is joined with no separator.
pub fn format_name(tables: &FragmentTables, frags: &[String]) -> Option<String> {
    if frags.is_empty() {
        return None;
    }
    if frags.len() == 4 && tables.prefixes.index_of(&frags[2]).is_some() {
        Some(format!(
            "{}{} {}{}",
            frags[0], frags[1], frags[2], frags[3]
        ))
    } else {
        Some(frags.concat())
    }
}

/// Tokenize `name` and reformat it through [`format_name`] — this is what
/// case-corrects a sector name against the fragment alphabet.
pub fn canonicalize_sector_fragments(tables: &FragmentTables, name: &str) -> Option<String> {
    let frags = tokenizer::get_fragments(tables, name, false).ok()?;
    format_name(tables, &frags)
}

/// Whether `name` tokenizes into a grammatically valid class-1 or class-2
/// sector name.
///
/// Mirrors `is_valid_sector_name`: a class-2 shape is four fragments whose
/// first and third are both prefixes, each followed by a suffix drawn from
/// that prefix's class-2 suffix series; a class-1 shape is three or four
/// fragments alternating infix series, terminated by the class-1 suffix
/// series the last infix implies.
pub fn is_valid_sector_name(tables: &FragmentTables, name: &str) -> bool {
    let frags = match tokenizer::get_fragments(tables, name, false) {
        Ok(f) => f,
        Err(_) => return false,
    };
    if frags.is_empty() || tables.prefixes.index_of(&frags[0]).is_none() {
        return false;
    }

    if frags.len() == 4 && tables.prefixes.index_of(&frags[2]).is_some() {
        let series0 = tables.c2_suffix_series_for_prefix(&frags[0]);
        let series2 = tables.c2_suffix_series_for_prefix(&frags[2]);
        let list0: &[String] = if series0 == 1 {
            &tables.c2_suffixes_1
        } else {
            &tables.c2_suffixes_2
        };
        let list2: &[String] = if series2 == 1 {
            &tables.c2_suffixes_1
        } else {
            &tables.c2_suffixes_2
        };
        return list0.contains(&frags[1]) && list2.contains(&frags[3]);
    }

    if frags.len() != 3 && frags.len() != 4 {
        return false;
    }

    let mut series = tables.c1_infix_series_for_prefix(&frags[0]);
    let infix1_ok = if series == 1 {
        tables.c1_infixes_s1.index_of(&frags[1]).is_some()
    } else {
        tables.c1_infixes_s2.index_of(&frags[1]).is_some()
    };
    if !infix1_ok {
        return false;
    }

    if frags.len() == 4 {
        series = if series == 1 { 2 } else { 1 };
        let infix2_ok = if series == 1 {
            tables.c1_infixes_s1.index_of(&frags[2]).is_some()
        } else {
            tables.c1_infixes_s2.index_of(&frags[2]).is_some()
        };
        if !infix2_ok {
            return false;
        }
    }

    let last_series = if series == 1 { 2 } else { 1 };
    let suffix_list: &[String] = if last_series == 1 {
        &tables.c1_suffixes_1
    } else {
        &tables.c1_suffixes_2
    };
    suffix_list.contains(frags.last().expect("non-empty, checked above"))
}
