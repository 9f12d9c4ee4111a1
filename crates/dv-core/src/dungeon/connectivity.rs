//! Connectivity enforcement
//!
//! After all carving, flood-fills from the entry room's center and
//! stitches any room whose center was left unreachable straight back
//! to the entry with a direct L-corridor. Stitching always succeeds by
//! construction: a corridor between two interior points can always be
//! carved, so the loop terminates with every room reachable.

use super::corridor::carve_l;
use super::map::Map;
use super::room::Room;

/// Force-connect every room to room 0
pub fn enforce_connectivity(map: &mut Map, rooms: &[Room]) {
    if rooms.is_empty() {
        return;
    }

    let entry = rooms[0].center();
    let mut visited = map.flood_fill(entry);

    for room in &rooms[1..] {
        let (cx, cy) = room.center();
        if !visited[map.idx(cx, cy)] {
            carve_l(map, entry, (cx, cy), true);
            visited = map.flood_fill(entry);
        }
    }
}
