//! Property 5: HA precedence — inside an HA region, `allow_ha=true` returns
//! the hand-authored name; `allow_ha=false` returns the procedural name for
//! the same position, and the two differ (Sol's procedural neighborhood
//! isn't itself named "Sol").

use starname::position::Position;
use starname::Galaxy;

#[test]
fn ha_name_wins_when_allowed() {
    let g = Galaxy::embedded();
    let name = g.sector_name(Position::ORIGIN, true).unwrap();
    assert_eq!(name, "Sol");
}

#[test]
fn procedural_name_is_used_when_ha_is_disallowed() {
    let g = Galaxy::embedded();
    let procedural = g.sector_name(Position::ORIGIN, false).unwrap();
    assert_ne!(procedural, "Sol");
}
