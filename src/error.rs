// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The error taxonomy shared by every fallible operation in this crate.

use crate::position::Position;
use thiserror::Error;

/// Everything that can go wrong translating between a galactic position and
/// a procedural name.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GalaxyError {
    /// The input name does not follow the procedural grammar at all (wrong
    /// fragment count, unparsable system-id suffix, etc).
    #[error("name is not a procedurally-generated identifier")]
    NotPg,

    /// The name parses as a procedural shape but no fragment sequence in the
    /// loaded tables produces it.
    #[error("sector name not found in the loaded fragment tables")]
    UnknownSector,

    /// A decoded sector index lies outside the galaxy-size box configured
    /// for its class.
    #[error("sector index lies outside the galaxy bounding box")]
    OutOfGalaxy,

    /// The relative-position packing overflowed the addressable range for
    /// the requested mass code.
    #[error(
        "relative position overflowed the mass-code sub-cube (relpos {relpos:?}, tolerance {tolerance} Ly)"
    )]
    RelPosOverflow { relpos: Position, tolerance: f64 },

    /// The mass-code letter is not one of `A..=H`.
    #[error("mass code must be one of A..=H")]
    BadMassCode,
}
