// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `starname` CLI: translate between galactic positions and Elite Dangerous
//! procedural names.
//!
//! ```bash
//! starname name 0 0 0
//! starname name 0 0 0 --mass-code d
//! starname locate "Dryau Aowsy AB-C d3-45"
//! starname validate "Dryau Aowsy"
//! starname canon "dryau aowsy"
//! ```

use clap::Parser;
use starname::position::{MassCode, Position};
use starname::Galaxy;

mod cli;
use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let galaxy = Galaxy::embedded();

    let result = match cli.command {
        Commands::Name {
            x,
            y,
            z,
            mass_code,
            no_ha,
        } => name(&galaxy, x, y, z, mass_code, !no_ha),
        Commands::Locate { name, no_ha } => locate(&galaxy, &name, !no_ha),
        Commands::Canon { name, sector_only } => canon(&galaxy, &name, sector_only),
        Commands::Validate { name } => {
            println!("{}", galaxy.is_valid_sector_name(&name));
            Ok(())
        }
    };

    if let Err(message) = result {
        log::error!("{message}");
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn name(
    galaxy: &Galaxy,
    x: f64,
    y: f64,
    z: f64,
    mass_code: Option<char>,
    allow_ha: bool,
) -> Result<(), String> {
    let pos = Position::new(x, y, z);
    match mass_code {
        Some(c) => {
            let mass_code = MassCode::from_char(c).map_err(|e| e.to_string())?;
            let resolved = galaxy
                .system_at(pos, mass_code)
                .map_err(|e| e.to_string())?;
            println!("{}", resolved.name);
        }
        None => {
            let name = galaxy.sector_name(pos, allow_ha).map_err(|e| e.to_string())?;
            println!("{name}");
        }
    }
    Ok(())
}

fn locate(galaxy: &Galaxy, name: &str, allow_ha: bool) -> Result<(), String> {
    if let Ok(resolved) = galaxy.system_from_name(name) {
        println!(
            "{} {} {} (+/- {} Ly)",
            resolved.position.x, resolved.position.y, resolved.position.z, resolved.uncertainty
        );
        return Ok(());
    }

    let sector = galaxy.sector_by_name(name, allow_ha).map_err(|e| e.to_string())?;
    let corner = sector.grid_origin(&galaxy.tables, galaxy.tables.cube_size);
    println!("{} {} {}", corner.x, corner.y, corner.z);
    Ok(())
}

fn canon(galaxy: &Galaxy, name: &str, sector_only: bool) -> Result<(), String> {
    let canonical = if sector_only {
        galaxy.canonical_sector_name(name)
    } else {
        galaxy.canonical_name(name)
    };
    match canonical {
        Some(canonical) => {
            println!("{canonical}");
            Ok(())
        }
        None => Err(format!("'{name}' is not a recognized name")),
    }
}
