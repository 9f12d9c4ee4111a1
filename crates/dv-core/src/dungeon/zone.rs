//! Thematic zone assignment
//!
//! Splits the depth range into five fixed-width bands with alternating
//! kinds. The last band always carries the boss; the boss room is
//! force-assigned to it regardless of its own depth. Empty bands are
//! dropped and the survivors' intensities renormalized so they
//! strictly increase with zone order.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::graph::RoomGraph;
use super::room::Room;
use crate::consts::ZONE_BAND_COUNT;
use crate::rng::GenRng;

/// Zone flavor, drives the tile palette
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ZoneKind {
    #[default]
    Overworld = 0,
    Dungeon = 1,
}

/// Band kinds in depth order
const BAND_KINDS: [ZoneKind; ZONE_BAND_COUNT] = [
    ZoneKind::Overworld,
    ZoneKind::Dungeon,
    ZoneKind::Overworld,
    ZoneKind::Dungeon,
    ZoneKind::Dungeon,
];

const OVERWORLD_NAMES: [&str; 4] = [
    "Verdant Approach",
    "Mossy Clearing",
    "Wildwood Fringe",
    "Sunlit Hollow",
];

const DUNGEON_NAMES: [&str; 4] = [
    "Sunken Halls",
    "Collapsed Galleries",
    "Buried Vaults",
    "Silent Depths",
];

const BOSS_NAMES: [&str; 3] = [
    "Throne of the Depths",
    "The Last Sanctum",
    "Heart of the Delve",
];

/// An ordered, named band of rooms sharing a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    /// Strictly increasing with zone order after renormalization
    pub intensity: f64,
    pub has_boss: bool,
    /// Room indices belonging to this zone
    pub rooms: Vec<usize>,
    pub name: String,
}

/// Partition rooms into depth-banded zones and stamp their zone_index
pub fn assign_zones(
    rooms: &mut [Room],
    graph: &RoomGraph,
    boss: Option<usize>,
    rng: &mut GenRng,
) -> Vec<Zone> {
    if rooms.is_empty() {
        return Vec::new();
    }

    let max_depth = graph.max_depth();
    if max_depth == 0 || graph.critical_path.is_empty() {
        // Degenerate dungeon: one zone holds everything
        let zone = Zone {
            kind: ZoneKind::Overworld,
            intensity: 1.0,
            has_boss: boss.is_some(),
            rooms: (0..rooms.len()).collect(),
            name: pick_name(ZoneKind::Overworld, boss.is_some(), rng),
        };
        for room in rooms.iter_mut() {
            room.zone_index = 0;
        }
        return vec![zone];
    }

    let mut bands: Vec<Vec<usize>> = vec![Vec::new(); ZONE_BAND_COUNT];
    for room in rooms.iter() {
        let band = if Some(room.id) == boss {
            ZONE_BAND_COUNT - 1
        } else {
            band_for_depth(graph.depth(room.id), max_depth)
        };
        bands[band].push(room.id);
    }

    let mut zones = Vec::new();
    for (band, members) in bands.into_iter().enumerate() {
        if members.is_empty() {
            continue;
        }
        let has_boss = band == ZONE_BAND_COUNT - 1;
        zones.push(Zone {
            kind: BAND_KINDS[band],
            intensity: 0.0,
            has_boss,
            rooms: members,
            name: pick_name(BAND_KINDS[band], has_boss, rng),
        });
    }

    let count = zones.len();
    for (i, zone) in zones.iter_mut().enumerate() {
        zone.intensity = (i + 1) as f64 / count as f64;
        for &room_id in &zone.rooms {
            rooms[room_id].zone_index = i;
        }
    }

    zones
}

/// Fixed-width band lookup; the last band catches `depth == max_depth`
fn band_for_depth(depth: u32, max_depth: u32) -> usize {
    let idx = (depth as usize * ZONE_BAND_COUNT) / max_depth.max(1) as usize;
    idx.min(ZONE_BAND_COUNT - 1)
}

fn pick_name(kind: ZoneKind, has_boss: bool, rng: &mut GenRng) -> String {
    let pool: &[&str] = if has_boss {
        &BOSS_NAMES
    } else {
        match kind {
            ZoneKind::Overworld => &OVERWORLD_NAMES,
            ZoneKind::Dungeon => &DUNGEON_NAMES,
        }
    };
    (*rng.pick(pool)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::corridor::carve_l;
    use crate::dungeon::graph::build_graph;
    use crate::dungeon::map::Map;
    use crate::dungeon::room::RoomShape;

    fn chain_fixture(n: usize) -> (Map, Vec<Room>) {
        let mut map = Map::new(30 + n * 21, 20);
        let mut rng = GenRng::new(8);
        let rooms: Vec<Room> = (0..n)
            .map(|i| {
                Room::new(i, 2 + i as i32 * 21, 2, 6, 6, RoomShape::Rectangular, &mut rng)
            })
            .collect();
        for room in &rooms {
            for &(fx, fy) in &room.floor {
                map.carve_floor(fx, fy);
            }
        }
        for pair in rooms.windows(2) {
            carve_l(&mut map, pair[0].center(), pair[1].center(), true);
        }
        (map, rooms)
    }

    #[test]
    fn test_partition_is_exact() {
        let (map, mut rooms) = chain_fixture(10);
        let graph = build_graph(&map, &rooms);
        let mut rng = GenRng::new(1);
        let zones = assign_zones(&mut rooms, &graph, Some(9), &mut rng);

        let mut seen = vec![0usize; rooms.len()];
        for zone in &zones {
            for &r in &zone.rooms {
                seen[r] += 1;
            }
        }
        assert!(seen.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_intensity_strictly_increases() {
        let (map, mut rooms) = chain_fixture(10);
        let graph = build_graph(&map, &rooms);
        let mut rng = GenRng::new(2);
        let zones = assign_zones(&mut rooms, &graph, Some(9), &mut rng);

        for pair in zones.windows(2) {
            assert!(pair[0].intensity < pair[1].intensity);
        }
        assert_eq!(zones.last().unwrap().intensity, 1.0);
    }

    #[test]
    fn test_boss_zone_holds_boss() {
        let (map, mut rooms) = chain_fixture(10);
        let graph = build_graph(&map, &rooms);
        let mut rng = GenRng::new(3);
        // Force a shallow boss; it must still land in the last band
        let zones = assign_zones(&mut rooms, &graph, Some(2), &mut rng);

        let boss_zone = zones.iter().find(|z| z.has_boss).unwrap();
        assert!(boss_zone.rooms.contains(&2));
        assert_eq!(zones.iter().filter(|z| z.has_boss).count(), 1);
    }

    #[test]
    fn test_zone_index_matches_membership() {
        let (map, mut rooms) = chain_fixture(8);
        let graph = build_graph(&map, &rooms);
        let mut rng = GenRng::new(4);
        let zones = assign_zones(&mut rooms, &graph, Some(7), &mut rng);

        for room in &rooms {
            assert!(zones[room.zone_index].rooms.contains(&room.id));
        }
    }

    #[test]
    fn test_degenerate_single_zone() {
        let (map, mut rooms) = chain_fixture(1);
        let graph = build_graph(&map, &rooms);
        let mut rng = GenRng::new(5);
        let zones = assign_zones(&mut rooms, &graph, None, &mut rng);

        assert_eq!(zones.len(), 1);
        assert!(!zones[0].has_boss);
        assert_eq!(zones[0].rooms, vec![0]);
        assert_eq!(zones[0].intensity, 1.0);
    }

    #[test]
    fn test_band_lookup() {
        assert_eq!(band_for_depth(0, 10), 0);
        assert_eq!(band_for_depth(10, 10), 4);
        assert_eq!(band_for_depth(5, 10), 2);
        // depth == max_depth always lands in the last band
        assert_eq!(band_for_depth(3, 3), 4);
    }
}
