// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The top-level codec: wires the fragment tables and the hand-authored
//! overlay together into the five public operations a caller actually
//! wants — sector lookup, system lookup, canonicalisation, tokenizing, and
//! validation — each dispatching to the name-direction or position-direction
//! module as appropriate.
//!
//! Grounded on `pgnames.py`'s public functions: `get_sector_name`,
//! `get_sector`, `get_system`, `get_canonical_name`, `get_fragments`,
//! `is_valid_sector_name`, `format_name`.

use crate::canonical::{self, ParsedSystemName};
use crate::class1;
use crate::class2;
use crate::error::GalaxyError;
use crate::fragments::FragmentData;
use crate::ha::HaTable;
use crate::hash::{self, SectorClass};
use crate::offset;
use crate::position::{MassCode, Position};
use crate::sector::{self, PgSector, Sector};
use crate::system;
use crate::tables::FragmentTables;
use crate::tokenizer;

/// A fully resolved system: its absolute position, the uncertainty radius
/// that position carries (half the addressed mass-code sub-cube, zero when
/// derived directly from a position), and its canonical full name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSystem {
    pub position: Position,
    pub uncertainty: f64,
    pub name: String,
}

/// The fragment tables plus the hand-authored overlay: everything needed to
/// translate between galactic positions and procedural names.
#[derive(Debug, Clone)]
pub struct Galaxy {
    pub tables: FragmentTables,
    pub ha: HaTable,
}

impl Galaxy {
    /// Build a galaxy from the fixture data embedded in this crate.
    pub fn embedded() -> Self {
        Self::from_data(&FragmentData::embedded())
    }

    pub fn from_data(data: &FragmentData) -> Self {
        Galaxy {
            tables: FragmentTables::build(data),
            ha: HaTable::build(&data.ha_sectors),
        }
    }

    /// The sector a position falls within.
    pub fn sector_at(&self, pos: Position, allow_ha: bool) -> Result<Sector, GalaxyError> {
        if allow_ha {
            if let Some(ha) = self.ha.find_containing(pos) {
                log::debug!("{pos:?} resolved to hand-authored sector {}", ha.name);
                return Ok(Sector::HandAuthored(ha.clone()));
            }
        }

        let index = sector::sector_index_from_position(&self.tables, pos);
        let c1_offset = offset::offset_from_sector(
            index,
            self.tables.c1_base_sector_coords,
            self.tables.c1_galaxy_size,
        )?;

        let class = hash::classify(c1_offset, self.tables.c1_arbitrary_index_offset);
        log::debug!("{index:?} (c1 offset {c1_offset}) classified as {class:?}");
        match class {
            SectorClass::One => {
                let frags = class1::name_from_offset(&self.tables, c1_offset);
                let name = canonical::format_name(&self.tables, &frags)
                    .ok_or(GalaxyError::UnknownSector)?;
                Ok(Sector::Procedural(PgSector {
                    index,
                    name,
                    class: SectorClass::One,
                }))
            }
            SectorClass::Two => {
                let c2_offset = offset::offset_from_sector(
                    index,
                    self.tables.c2_base_sector_coords,
                    self.tables.c2_galaxy_size,
                )?;
                let frags = class2::name_from_offset(&self.tables, c2_offset)?;
                let name = canonical::format_name(&self.tables, &frags)
                    .ok_or(GalaxyError::UnknownSector)?;
                Ok(Sector::Procedural(PgSector {
                    index,
                    name,
                    class: SectorClass::Two,
                }))
            }
        }
    }

    /// The formatted name of the sector containing `pos`.
    pub fn sector_name(&self, pos: Position, allow_ha: bool) -> Result<String, GalaxyError> {
        self.sector_at(pos, allow_ha).map(|s| s.name().to_string())
    }

    /// The sector a (canonicalised) name refers to.
    pub fn sector_by_name(&self, name: &str, allow_ha: bool) -> Result<Sector, GalaxyError> {
        let sector_name = self.canonical_sector_name(name).ok_or(GalaxyError::NotPg)?;

        if allow_ha {
            if let Some(ha) = self.ha.get(&sector_name) {
                log::debug!("'{sector_name}' resolved to hand-authored sector {}", ha.name);
                return Ok(Sector::HandAuthored(ha.clone()));
            }
        }

        let frags = tokenizer::get_fragments(&self.tables, &sector_name, false)?;
        let formatted =
            canonical::format_name(&self.tables, &frags).ok_or(GalaxyError::UnknownSector)?;

        if frags.len() == 4 && self.tables.prefixes.index_of(&frags[2]).is_some() {
            log::debug!("'{sector_name}' tokenized as class 2");
            let frags4: [String; 4] = frags
                .clone()
                .try_into()
                .map_err(|_| GalaxyError::NotPg)?;
            let offset = class2::offset_from_name(&self.tables, &frags4)?;
            let index = offset::sector_from_offset(
                offset,
                self.tables.c2_base_sector_coords,
                self.tables.c2_galaxy_size,
            );
            Ok(Sector::Procedural(PgSector {
                index,
                name: formatted,
                class: SectorClass::Two,
            }))
        } else if frags.len() == 3 || frags.len() == 4 {
            log::debug!("'{sector_name}' tokenized as class 1");
            let offset = class1::offset_from_name(&self.tables, &frags)?;
            let index = offset::sector_from_offset(
                offset,
                self.tables.c1_base_sector_coords,
                self.tables.c1_galaxy_size,
            );
            Ok(Sector::Procedural(PgSector {
                index,
                name: formatted,
                class: SectorClass::One,
            }))
        } else {
            Err(GalaxyError::NotPg)
        }
    }

    /// The correctly-cased form of a sector name, checking the hand-authored
    /// overlay before falling back to the fragment alphabet.
    pub fn canonical_sector_name(&self, raw: &str) -> Option<String> {
        if let Some(ha) = self.ha.get(raw) {
            return Some(ha.name.clone());
        }
        canonical::canonicalize_sector_fragments(&self.tables, raw)
    }

    /// The correctly-cased form of a sector name or a full system name.
    pub fn canonical_name(&self, raw: &str) -> Option<String> {
        match canonical::parse_system_name(raw) {
            Ok(parsed) => {
                let sector_name = self.canonical_sector_name(&parsed.sector_name)?;
                Some(format!(
                    "{} {}",
                    sector_name,
                    canonical::format_system_id(&parsed.id)
                ))
            }
            Err(_) => self.canonical_sector_name(raw),
        }
    }

    /// Tokenize a sector name into its ordered phoneme fragments.
    pub fn fragments(&self, name: &str, allow_long: bool) -> Result<Vec<String>, GalaxyError> {
        tokenizer::get_fragments(&self.tables, name, allow_long)
    }

    /// Whether `name` tokenizes into a grammatically valid sector name.
    pub fn is_valid_sector_name(&self, name: &str) -> bool {
        canonical::is_valid_sector_name(&self.tables, name)
    }

    /// Render a fragment sequence back into its surface form.
    pub fn format_name(&self, frags: &[String]) -> Option<String> {
        canonical::format_name(&self.tables, frags)
    }

    /// The system whose addressed cell contains `pos`, at the resolution
    /// `mass_code` implies. Exact: a position carries no uncertainty.
    pub fn system_at(&self, pos: Position, mass_code: MassCode) -> Result<ResolvedSystem, GalaxyError> {
        let sector = self.sector_at(pos, true)?;
        let cube_width = mass_code.sub_cube_size(self.tables.cube_size);
        let origin = sector.grid_origin(&self.tables, cube_width);
        let relative = pos - origin;
        let id = system::system_id_from_position(self.tables.cube_size, relative, mass_code);
        let name = format!("{} {}", sector.name(), canonical::format_system_id(&id));
        Ok(ResolvedSystem {
            position: pos,
            uncertainty: 0.0,
            name,
        })
    }

    /// The approximate position of a named system, with the uncertainty
    /// radius inherent in addressing a mass-code cell rather than a point.
    pub fn system_from_name(&self, name: &str) -> Result<ResolvedSystem, GalaxyError> {
        let canonical_full = self.canonical_name(name).ok_or(GalaxyError::NotPg)?;
        let ParsedSystemName { sector_name, id, .. } =
            canonical::parse_system_name(&canonical_full)?;

        let sector = self.sector_by_name(&sector_name, true)?;
        let cube_width = id.mass_code.sub_cube_size(self.tables.cube_size);
        let origin = sector.grid_origin(&self.tables, cube_width);

        let rel = system::relative_position(self.tables.cube_size, &id);
        let leeway = if matches!(sector, Sector::HandAuthored(_)) {
            rel.uncertainty
        } else {
            0.0
        };
        let tolerance = self.tables.cube_size + leeway;
        if rel.position.x > tolerance || rel.position.y > tolerance || rel.position.z > tolerance
        {
            log::warn!(
                "RelPos for input {name} was invalid: {:?}, uncertainty {}",
                rel.position,
                rel.uncertainty
            );
            return Err(GalaxyError::RelPosOverflow {
                relpos: rel.position,
                tolerance: rel.uncertainty,
            });
        }

        Ok(ResolvedSystem {
            position: origin + rel.position,
            uncertainty: rel.uncertainty,
            name: canonical_full,
        })
    }
}
