//! Random room placement
//!
//! Attempts up to 50 placements per requested room. Each attempt rolls
//! a size category, a concrete size, a position inside the map border,
//! and a shape; candidates whose gap-expanded bounding box overlaps an
//! accepted room are rejected. Accepted rooms are carved immediately.
//! Exhausting the budget returns fewer rooms than requested, which is
//! graceful degradation rather than failure.

use super::generation::DungeonConfig;
use super::map::Map;
use super::room::{Room, RoomShape};
use crate::consts::{PLACEMENT_ATTEMPTS_PER_ROOM, ROOM_GAP};
use crate::rng::GenRng;

/// Place non-overlapping rooms of varied size and shape
pub fn place_rooms(map: &mut Map, config: &DungeonConfig, rng: &mut GenRng) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::with_capacity(config.room_count);
    let mut attempts = config.room_count * PLACEMENT_ATTEMPTS_PER_ROOM;

    while rooms.len() < config.room_count && attempts > 0 {
        attempts -= 1;

        let (min, max) = size_category(config, rng);
        let width = rng.range(min, max);
        let height = rng.range(min, max);

        let max_x = map.width() as i32 - width - 1;
        let max_y = map.height() as i32 - height - 1;
        if max_x < 1 || max_y < 1 {
            continue;
        }
        let x = rng.range(1, max_x);
        let y = rng.range(1, max_y);

        let shape = roll_shape(rng);
        let candidate = Room::new(rooms.len(), x, y, width, height, shape, rng);

        // A 2-wide ellipse has no tile inside it; such candidates
        // would panic later when their center is queried.
        if candidate.floor.is_empty() {
            continue;
        }
        if rooms.iter().any(|r| candidate.overlaps(r, ROOM_GAP)) {
            continue;
        }

        for &(fx, fy) in &candidate.floor {
            map.carve_floor(fx, fy);
        }
        rooms.push(candidate);
    }

    rooms
}

/// Roll a size category: small 40%, medium 40%, large 20%
///
/// Categories split the configured size span into thirds.
fn size_category(config: &DungeonConfig, rng: &mut GenRng) -> (i32, i32) {
    let min = config.room_min_size as i32;
    let max = config.room_max_size as i32;
    let span = max - min;

    let roll = rng.rn2(10);
    if roll < 4 {
        (min, min + span / 3)
    } else if roll < 8 {
        (min + span / 3, min + 2 * span / 3)
    } else {
        (min + 2 * span / 3, max)
    }
}

/// Roll a shape: rectangular 50%, L-shaped 20%, circular 20%, cross 10%
fn roll_shape(rng: &mut GenRng) -> RoomShape {
    let roll = rng.rn2(10);
    if roll < 5 {
        RoomShape::Rectangular
    } else if roll < 7 {
        RoomShape::LShaped
    } else if roll < 9 {
        RoomShape::Circular
    } else {
        RoomShape::Cross
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::tile::TileKind;

    #[test]
    fn test_rooms_respect_gap() {
        let mut map = Map::new(150, 100);
        let config = DungeonConfig::default();
        let mut rng = GenRng::new(42);
        let rooms = place_rooms(&mut map, &config, &mut rng);

        assert!(rooms.len() >= 3);
        assert!(rooms.len() <= config.room_count);
        for a in 0..rooms.len() {
            for b in a + 1..rooms.len() {
                assert!(
                    !rooms[a].overlaps(&rooms[b], ROOM_GAP),
                    "rooms {a} and {b} violate the gap"
                );
            }
        }
    }

    #[test]
    fn test_rooms_leave_border() {
        let mut map = Map::new(80, 50);
        let config = DungeonConfig {
            width: 80,
            height: 50,
            ..DungeonConfig::default()
        };
        let mut rng = GenRng::new(7);
        let rooms = place_rooms(&mut map, &config, &mut rng);

        for room in &rooms {
            assert!(room.x >= 1 && room.y >= 1);
            assert!(room.x + room.width <= 79);
            assert!(room.y + room.height <= 49);
        }
        for x in 0..80 {
            assert_eq!(map.tile(x, 0).kind, TileKind::Wall);
            assert_eq!(map.tile(x, 49).kind, TileKind::Wall);
        }
    }

    #[test]
    fn test_carved_floors_match_room_lists() {
        let mut map = Map::new(100, 80);
        let config = DungeonConfig {
            width: 100,
            height: 80,
            ..DungeonConfig::default()
        };
        let mut rng = GenRng::new(3);
        let rooms = place_rooms(&mut map, &config, &mut rng);

        for room in &rooms {
            for &(x, y) in &room.floor {
                assert_eq!(map.tile(x, y).kind, TileKind::Floor);
            }
        }
    }

    #[test]
    fn test_cramped_map_degrades_gracefully() {
        let mut map = Map::new(20, 20);
        let config = DungeonConfig {
            width: 20,
            height: 20,
            room_count: 16,
            ..DungeonConfig::default()
        };
        let mut rng = GenRng::new(1);
        let rooms = place_rooms(&mut map, &config, &mut rng);
        assert!(rooms.len() < 16);
    }

    #[test]
    fn test_tiny_size_bounds_never_yield_empty_rooms() {
        for seed in 0..50 {
            let mut map = Map::new(60, 40);
            let config = DungeonConfig {
                width: 60,
                height: 40,
                room_count: 8,
                room_min_size: 2,
                room_max_size: 4,
            };
            let mut rng = GenRng::new(seed);
            let rooms = place_rooms(&mut map, &config, &mut rng);
            for room in &rooms {
                assert!(!room.floor.is_empty(), "seed {seed} room {}", room.id);
                let (cx, cy) = room.center();
                assert!(room.contains(cx, cy));
            }
        }
    }

    #[test]
    fn test_ids_are_stable_indices() {
        let mut map = Map::new(150, 100);
        let mut rng = GenRng::new(5);
        let rooms = place_rooms(&mut map, &DungeonConfig::default(), &mut rng);
        for (i, room) in rooms.iter().enumerate() {
            assert_eq!(room.id, i);
        }
    }
}
