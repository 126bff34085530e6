// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A bidirectional codec between galactic positions and Elite Dangerous'
//! procedural sector/system names.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌────────────┐   ┌───────────┐   ┌──────────┐
//! │ fragments.rs│──▶│ tables.rs  │──▶│ class1.rs │   │ hash.rs  │
//! │ (raw data)  │   │(run series,│   │ class2.rs │◀──│(sector   │
//! └─────────────┘   │ state maps)│   │ (name <-> │   │ class)   │
//!                   └────────────┘   │  offset)  │   └──────────┘
//!                         │          └───────────┘        │
//!                         ▼                │               │
//!                   ┌────────────┐         ▼               ▼
//!                   │ offset.rs  │◀──────────────── sector.rs / galaxy.rs
//!                   │(index <->  │                  (top-level dispatch)
//!                   │  linear)   │                         ▲
//!                   └────────────┘                         │
//!                                          ┌────────────┐  │
//!                                          │   ha.rs    │──┘
//!                                          │(overlay)   │
//!                                          └────────────┘
//!                   ┌─────────────┐   ┌────────────┐
//!                   │tokenizer.rs │──▶│canonical.rs│
//!                   │(name frags) │   │(validation,│
//!                   └─────────────┘   │ formatting)│
//!                                      └────────────┘
//!                   ┌─────────────┐
//!                   │  system.rs  │ (relative position <-> system id)
//!                   └─────────────┘
//! ```
//!
//! # Module correspondence
//!
//! | Rust module      | Concern                                              |
//! |-------------------|------------------------------------------------------|
//! | `error`           | The shared `GalaxyError` taxonomy                     |
//! | `position`        | `Position`, `SectorIndex`, `MassCode`                 |
//! | `fragments`       | Raw fragment/override/HA data, as shipped in JSON     |
//! | `tables`          | Derived run-length series, totals, lookup indices     |
//! | `hash`            | The class-1/class-2 hash used when starting from a position |
//! | `offset`          | Signed sector index <-> flat linear offset            |
//! | `tokenizer`       | Sector-name string -> ordered phoneme fragments       |
//! | `class1`          | Class-1 name <-> offset codec                         |
//! | `class2`          | Class-2 name <-> offset codec                         |
//! | `canonical`       | Full system-name parsing, formatting, validation      |
//! | `system`          | Relative-position <-> system-id codec                 |
//! | `ha`              | The hand-authored sector overlay                      |
//! | `sector`          | Sector identity (procedural or hand-authored)         |
//! | `galaxy`          | The public `Galaxy` API tying everything together     |
//! | `contracts`       | Debug-only invariant checks                           |
//!
//! # Usage
//!
//! ```
//! use starname::Galaxy;
//! use starname::position::Position;
//!
//! let galaxy = Galaxy::embedded();
//! let name = galaxy.sector_name(Position::ORIGIN, true).unwrap();
//! assert_eq!(name, "Sol");
//! ```

pub mod canonical;
pub mod class1;
pub mod class2;
pub mod contracts;
pub mod error;
pub mod fragments;
pub mod galaxy;
pub mod ha;
pub mod hash;
pub mod offset;
pub mod position;
pub mod sector;
pub mod system;
pub mod tables;
pub mod tokenizer;

pub use error::GalaxyError;
pub use galaxy::{Galaxy, ResolvedSystem};
pub use position::{MassCode, Position, SectorIndex};
pub use sector::{PgSector, Sector};
pub use system::SystemId;
