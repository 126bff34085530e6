//! Property-based tests for the codec's round-trip and grammar invariants.

#[path = "property/roundtrip.rs"]
mod roundtrip;
