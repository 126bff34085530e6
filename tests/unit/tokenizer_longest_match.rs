//! Longest-match-first tokenizing: a short fragment that is itself a prefix
//! of a longer one must never shadow it, per spec.md section 9's warning
//! about `"Eo"` vs `"Eoch"`.

use starname::fragments::FragmentData;
use starname::tables::FragmentTables;

#[test]
fn longer_fragment_wins_over_its_own_prefix() {
    let tables = FragmentTables::build(&FragmentData::embedded());

    for short in &tables.fragment_alphabet {
        for long in &tables.fragment_alphabet {
            if long.len() > short.len() && long.starts_with(short.as_str()) {
                let first_match = tables
                    .fragment_alphabet
                    .iter()
                    .find(|f| long.starts_with(f.as_str()))
                    .unwrap();
                assert_eq!(
                    first_match, long,
                    "alphabet is not sorted longest-first: {short} shadows {long}"
                );
            }
        }
    }
}

#[test]
fn alphabet_has_no_duplicate_entries() {
    let tables = FragmentTables::build(&FragmentData::embedded());
    let mut sorted = tables.fragment_alphabet.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), tables.fragment_alphabet.len());
}
