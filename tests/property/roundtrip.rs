//! Properties 1, 2, 4, 6 from spec.md section 8, run against this crate's
//! own fixture `FragmentData` rather than the authoritative game table (see
//! `DESIGN.md`'s Open Question on fragment/override table content).

use proptest::prelude::*;
use starname::position::{MassCode, Position, SectorIndex};
use starname::system::{relative_position, system_id_from_position, SystemId};
use starname::Galaxy;

fn galaxy() -> Galaxy {
    Galaxy::embedded()
}

fn mass_code_strategy() -> impl Strategy<Value = MassCode> {
    prop_oneof![
        Just(MassCode::A),
        Just(MassCode::B),
        Just(MassCode::C),
        Just(MassCode::D),
        Just(MassCode::E),
        Just(MassCode::F),
        Just(MassCode::G),
        Just(MassCode::H),
    ]
}

fn letter_strategy() -> impl Strategy<Value = char> {
    (b'A'..=b'Z').prop_map(|b| b as char)
}

proptest! {
    /// Property 1: round-trip name <-> position for procedural sectors.
    /// `sector_at` then `sector_by_name` on the resulting name recovers the
    /// same sector index (HA regions are excluded — they don't carry a
    /// procedural index at all).
    #[test]
    fn procedural_sector_round_trips(
        sx in -15i64..15,
        sy in -15i64..15,
        sz in -15i64..15,
    ) {
        let g = galaxy();
        let index = SectorIndex::new(sx, sy, sz);
        let corner = Position::new(
            g.tables.base_coords.x + sx as f64 * g.tables.cube_size,
            g.tables.base_coords.y + sy as f64 * g.tables.cube_size,
            g.tables.base_coords.z + sz as f64 * g.tables.cube_size,
        );

        let Ok(sector) = g.sector_at(corner, false) else { return Ok(()) };
        let starname::Sector::Procedural(pg) = &sector else { return Ok(()) };
        prop_assert_eq!(pg.index, index);

        let Ok(back) = g.sector_by_name(&pg.name, false) else {
            prop_assert!(false, "sector name {} did not round-trip", pg.name);
            return Ok(());
        };
        prop_assert_eq!(back.name(), sector.name());
    }

    /// Property 2: round-trip system-id <-> relative position.
    #[test]
    fn system_id_round_trips(
        p in letter_strategy(),
        c in letter_strategy(),
        s in letter_strategy(),
        mass_code in mass_code_strategy(),
        number1 in 0i64..8,
        number2 in 0i64..17576,
    ) {
        let id = SystemId::new(p, c, s, mass_code, number1, number2).unwrap();
        let rel = relative_position(1280.0, &id);

        prop_assert!(rel.position.x >= 0.0 && rel.position.x <= 1280.0 + rel.uncertainty);
        prop_assert!(rel.position.y >= 0.0 && rel.position.y <= 1280.0 + rel.uncertainty);
        prop_assert!(rel.position.z >= 0.0 && rel.position.z <= 1280.0 + rel.uncertainty);

        let back = system_id_from_position(1280.0, rel.position, mass_code);
        prop_assert_eq!(back.prefix, id.prefix);
        prop_assert_eq!(back.centre, id.centre);
        prop_assert_eq!(back.suffix, id.suffix);
        prop_assert_eq!(back.number1, id.number1);
    }

    /// Property 4: grammar exclusivity — a name generated by the class-1
    /// codec never also validates as a class-2 shape, and vice versa.
    #[test]
    fn class1_and_class2_shapes_are_disjoint(offset in -300i64..300) {
        let g = galaxy();
        let frags = starname::class1::name_from_offset(&g.tables, offset);
        let name = starname::canonical::format_name(&g.tables, &frags).unwrap();

        let is_class2_shape = frags.len() == 4
            && g.tables.prefixes.index_of(&frags[2]).is_some();
        prop_assert!(!is_class2_shape, "class-1 output {name} looked like class 2");
    }

    /// Property 6: canonicalisation is idempotent.
    #[test]
    fn canonicalisation_is_idempotent(offset in -300i64..300) {
        let g = galaxy();
        let frags = starname::class1::name_from_offset(&g.tables, offset);
        let name = starname::canonical::format_name(&g.tables, &frags).unwrap();

        let Some(once) = g.canonical_sector_name(&name) else { return Ok(()) };
        let twice = g.canonical_sector_name(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}
