//! Property 3: class hash stability — the class a reference set of sector
//! positions hashes to agrees whether the offset fed to `classify` came
//! straight from the position (forward direction) or was recovered by
//! tokenizing the name that position produced and re-encoding it back to an
//! offset (reverse direction).

use starname::class1;
use starname::class2;
use starname::hash::{classify, SectorClass};
use starname::offset::offset_from_sector;
use starname::Galaxy;

#[test]
fn reference_sectors_hash_the_same_class_both_directions() {
    let g = Galaxy::embedded();
    let reference_indices = [(0, 0, 0), (1, -2, 3), (-5, 5, -5), (10, 10, 10), (0, 0, -1)];

    for (x, y, z) in reference_indices {
        let index = starname::SectorIndex::new(x, y, z);
        let Ok(c1_offset) = offset_from_sector(
            index,
            g.tables.c1_base_sector_coords,
            g.tables.c1_galaxy_size,
        ) else {
            continue;
        };

        let position_derived_class = classify(c1_offset, g.tables.c1_arbitrary_index_offset);

        match position_derived_class {
            SectorClass::One => {
                let frags = class1::name_from_offset(&g.tables, c1_offset);
                let name_derived_offset = class1::offset_from_name(&g.tables, &frags)
                    .unwrap_or_else(|e| {
                        panic!("class-1 name {frags:?} for offset {c1_offset} didn't re-encode: {e:?}")
                    });
                assert_eq!(
                    name_derived_offset, c1_offset,
                    "sector at {index:?}: name {frags:?} re-encoded to a different offset"
                );
                let name_derived_class =
                    classify(name_derived_offset, g.tables.c1_arbitrary_index_offset);
                assert_eq!(
                    name_derived_class, position_derived_class,
                    "sector at {index:?} hashed to {position_derived_class:?} from its \
                     position but {name_derived_class:?} once re-encoded from its own name"
                );
            }
            SectorClass::Two => {
                let Ok(c2_offset) = offset_from_sector(
                    index,
                    g.tables.c2_base_sector_coords,
                    g.tables.c2_galaxy_size,
                ) else {
                    continue;
                };
                let Ok(frags) = class2::name_from_offset(&g.tables, c2_offset) else {
                    continue;
                };
                let name_derived_offset =
                    class2::offset_from_name(&g.tables, &frags).unwrap_or_else(|e| {
                        panic!("class-2 name {frags:?} for offset {c2_offset} didn't re-encode: {e:?}")
                    });
                assert_eq!(
                    name_derived_offset, c2_offset,
                    "sector at {index:?}: name {frags:?} re-encoded to a different offset"
                );
            }
        }
    }
}
