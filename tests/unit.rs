//! Per-component unit tests that don't fit naturally inside their module's
//! own `#[cfg(test)]` block (cross-module known-answer checks).

#[path = "unit/hash_known_answers.rs"]
mod hash_known_answers;

#[path = "unit/tokenizer_longest_match.rs"]
mod tokenizer_longest_match;

#[path = "unit/ha_precedence.rs"]
mod ha_precedence;
