// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting a sector-name string into its phoneme fragments.
//!
//! Mirrors `pgnames.py`'s `get_fragments()`: title-case the whole input
//! (capitalizing only the first letter of each whitespace-separated word,
//! same as Python's `str.title()`), strip the spaces that created those
//! word boundaries, then greedily consume the longest fragment from the
//! alphabet that matches at the current position.

use crate::error::GalaxyError;
use crate::tables::FragmentTables;

/// Title-case each whitespace-separated word (first letter up, rest
/// untouched) the way Python's `str.title()` does for a single-word-per-
/// token string, then remove the spaces.
fn title_case_and_strip(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            continue;
        }
        if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// The number of fragments a sector name is expected to tokenize into,
/// unless `allow_long` is set. Mirrors `pgnames.py`'s `_expected_fragment_limit`.
pub const EXPECTED_FRAGMENT_LIMIT: usize = 4;

/// Split `name` into its ordered phoneme fragments.
///
/// Returns [`GalaxyError::NotPg`] if any suffix of the normalized string
/// fails to match a fragment from the alphabet (i.e. the string isn't
/// entirely composed of known fragments), or if the resulting fragment
/// count exceeds [`EXPECTED_FRAGMENT_LIMIT`] and `allow_long` is `false`.
pub fn get_fragments(
    tables: &FragmentTables,
    name: &str,
    allow_long: bool,
) -> Result<Vec<String>, GalaxyError> {
    let normalized = title_case_and_strip(name);
    let mut fragments = Vec::new();
    let mut rest = normalized.as_str();
    'outer: while !rest.is_empty() {
        for frag in &tables.fragment_alphabet {
            if rest.starts_with(frag.as_str()) {
                fragments.push(frag.clone());
                rest = &rest[frag.len()..];
                continue 'outer;
            }
        }
        return Err(GalaxyError::NotPg);
    }
    if fragments.is_empty() {
        return Err(GalaxyError::NotPg);
    }
    if !allow_long && fragments.len() > EXPECTED_FRAGMENT_LIMIT {
        return Err(GalaxyError::NotPg);
    }
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::FragmentData;

    fn tables() -> FragmentTables {
        FragmentTables::build(&FragmentData::embedded())
    }

    #[test]
    fn title_case_only_capitalizes_word_starts() {
        assert_eq!(title_case_and_strip("dryau aowsy"), "DryauAowsy");
    }

    #[test]
    fn tokenizes_known_prefix_alone() {
        let t = tables();
        let prefix = &t.prefixes.entries[0].name;
        let got = get_fragments(&t, prefix, false).unwrap();
        assert_eq!(got, vec![prefix.clone()]);
    }

    #[test]
    fn rejects_unknown_garbage() {
        let t = tables();
        assert_eq!(
            get_fragments(&t, "Zzzzzqqqq", false),
            Err(GalaxyError::NotPg)
        );
    }

    #[test]
    fn longest_match_wins_over_shorter_prefix_of_same_alphabet() {
        let t = tables();
        // every fragment in the alphabet must tokenize back to itself alone
        for frag in &t.fragment_alphabet {
            assert_eq!(get_fragments(&t, frag, false).unwrap(), vec![frag.clone()]);
        }
    }

    #[test]
    fn rejects_long_sequences_unless_allowed() {
        let t = tables();
        let prefix = t.prefixes.entries[0].name.clone();
        let long_name = prefix.repeat(6);
        assert_eq!(
            get_fragments(&t, &long_name, false),
            Err(GalaxyError::NotPg)
        );
        assert!(get_fragments(&t, &long_name, true).is_ok());
    }
}
