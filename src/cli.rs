// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "starname",
    about = "Bidirectional codec between galactic positions and Elite Dangerous procedural names",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a galactic position into its sector or system name
    Name {
        /// X coordinate, light-years from Sol
        x: f64,
        /// Y coordinate, light-years from Sol
        y: f64,
        /// Z coordinate, light-years from Sol
        z: f64,

        /// Resolve the full system name (at this mass code) instead of just the sector
        #[arg(short, long)]
        mass_code: Option<char>,

        /// Don't consult the hand-authored sector overlay
        #[arg(long)]
        no_ha: bool,
    },

    /// Translate a sector or full system name into its galactic position
    Locate {
        /// A sector name, or a full `<sector> <P><C>-<S> <m>[<N1>-]<N2>` system name
        name: String,

        /// Don't consult the hand-authored sector overlay
        #[arg(long)]
        no_ha: bool,
    },

    /// Print the correctly-cased form of a sector or system name
    Canon {
        /// The name to canonicalize
        name: String,

        /// Canonicalize only the sector-name portion, ignoring any trailing system-id suffix
        #[arg(long)]
        sector_only: bool,
    },

    /// Check whether a string is a grammatically valid sector name
    Validate {
        /// The sector name to check
        name: String,
    },
}
