//! Corridor carving
//!
//! Connects rooms in placement order with a per-edge corridor style:
//! a single L-bend, a winding path through jittered waypoints, or a
//! wide L carved several tiles thick. Afterwards a few dead-end
//! branches with small terminal chambers are added for texture.

use super::map::{CARDINALS, Map};
use super::room::Room;
use crate::rng::GenRng;

/// Waypoint jitter for winding corridors, in tiles
const WINDING_JITTER: i32 = 4;

/// Connect consecutive rooms and add dead-end branches
pub fn carve_corridors(map: &mut Map, rooms: &[Room], rng: &mut GenRng) {
    for pair in rooms.windows(2) {
        let from = pair[0].center();
        let to = pair[1].center();

        let roll = rng.rn2(100);
        if roll < 40 {
            carve_l(map, from, to, rng.one_in(2));
        } else if roll < 75 {
            carve_winding(map, from, to, rng);
        } else {
            carve_wide(map, from, to, rng);
        }
    }

    if !rooms.is_empty() {
        carve_dead_ends(map, rooms, rng);
    }
}

/// Carve a single-tile L-bend corridor between two points
pub(crate) fn carve_l(map: &mut Map, from: (i32, i32), to: (i32, i32), horizontal_first: bool) {
    let (x0, y0) = from;
    let (x1, y1) = to;
    if horizontal_first {
        carve_h_run(map, x0, x1, y0);
        carve_v_run(map, y0, y1, x1);
    } else {
        carve_v_run(map, y0, y1, x0);
        carve_h_run(map, x0, x1, y1);
    }
}

fn carve_h_run(map: &mut Map, x0: i32, x1: i32, y: i32) {
    for x in x0.min(x1)..=x0.max(x1) {
        map.carve_corridor(x, y);
    }
}

fn carve_v_run(map: &mut Map, y0: i32, y1: i32, x: i32) {
    for y in y0.min(y1)..=y0.max(y1) {
        map.carve_corridor(x, y);
    }
}

/// Carve through 1-2 jittered waypoints, each hop an L-bend
fn carve_winding(map: &mut Map, from: (i32, i32), to: (i32, i32), rng: &mut GenRng) {
    let hops = 1 + rng.rn2(2) as i32;
    let mut prev = from;

    for k in 1..=hops {
        let t = k as f64 / (hops + 1) as f64;
        let base_x = from.0 + ((to.0 - from.0) as f64 * t).round() as i32;
        let base_y = from.1 + ((to.1 - from.1) as f64 * t).round() as i32;
        let wx = clamp_interior_x(map, base_x + rng.range(-WINDING_JITTER, WINDING_JITTER));
        let wy = clamp_interior_y(map, base_y + rng.range(-WINDING_JITTER, WINDING_JITTER));

        carve_l(map, prev, (wx, wy), rng.one_in(2));
        prev = (wx, wy);
    }

    carve_l(map, prev, to, rng.one_in(2));
}

/// Carve an L-bend 2-3 tiles thick
fn carve_wide(map: &mut Map, from: (i32, i32), to: (i32, i32), rng: &mut GenRng) {
    let thickness = 2 + rng.rn2(2) as i32;
    let horizontal_first = rng.one_in(2);

    for off in 0..thickness {
        let shifted_from = (from.0, from.1 + off);
        let shifted_to = (to.0 + off, to.1);
        if horizontal_first {
            carve_h_run(map, shifted_from.0, shifted_to.0, shifted_from.1);
            carve_v_run(map, shifted_from.1, shifted_to.1, shifted_to.0);
        } else {
            carve_v_run(map, from.1, to.1, from.0 + off);
            carve_h_run(map, from.0, to.0, to.1 + off);
        }
    }
}

/// Add 1-3 dead-end branches ending in a small square chamber
fn carve_dead_ends(map: &mut Map, rooms: &[Room], rng: &mut GenRng) {
    let branches = 1 + rng.rn2(3);

    for _ in 0..branches {
        let room = &rooms[rng.rn2(rooms.len() as u32) as usize];
        let (dx, dy) = CARDINALS[rng.rn2(4) as usize];
        let length = 4 + rng.rn2(5) as i32;

        let (mut x, mut y) = room.center();
        for _ in 0..length {
            let (nx, ny) = (x + dx, y + dy);
            if !map.in_interior(nx, ny) {
                break;
            }
            map.carve_corridor(nx, ny);
            x = nx;
            y = ny;
        }

        // Terminal chamber, centered on the branch end
        let side = 3 + rng.rn2(2) as i32;
        for cy in y - side / 2..y - side / 2 + side {
            for cx in x - side / 2..x - side / 2 + side {
                map.carve_corridor(cx, cy);
            }
        }
    }
}

fn clamp_interior_x(map: &Map, x: i32) -> i32 {
    x.clamp(1, map.width() as i32 - 2)
}

fn clamp_interior_y(map: &Map, y: i32) -> i32 {
    y.clamp(1, map.height() as i32 - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::room::RoomShape;
    use crate::dungeon::tile::TileKind;

    fn carved_room(map: &mut Map, id: usize, x: i32, y: i32, w: i32, h: i32) -> Room {
        let mut rng = GenRng::new(77);
        let room = Room::new(id, x, y, w, h, RoomShape::Rectangular, &mut rng);
        for &(fx, fy) in &room.floor {
            map.carve_floor(fx, fy);
        }
        room
    }

    #[test]
    fn test_l_corridor_connects() {
        let mut map = Map::new(40, 30);
        let a = carved_room(&mut map, 0, 2, 2, 5, 5);
        let b = carved_room(&mut map, 1, 30, 20, 5, 5);
        carve_l(&mut map, a.center(), b.center(), true);

        let visited = map.flood_fill(a.center());
        let (bx, by) = b.center();
        assert!(visited[map.idx(bx, by)]);
    }

    #[test]
    fn test_all_styles_connect_consecutive_rooms() {
        for seed in 0..30 {
            let mut map = Map::new(60, 40);
            let a = carved_room(&mut map, 0, 2, 2, 6, 6);
            let b = carved_room(&mut map, 1, 40, 8, 6, 6);
            let c = carved_room(&mut map, 2, 20, 28, 6, 6);
            let rooms = vec![a, b, c];
            let mut rng = GenRng::new(seed);
            carve_corridors(&mut map, &rooms, &mut rng);

            let visited = map.flood_fill(rooms[0].center());
            for room in &rooms[1..] {
                let (cx, cy) = room.center();
                assert!(visited[map.idx(cx, cy)], "seed {seed} left a room unreached");
            }
        }
    }

    #[test]
    fn test_border_stays_wall() {
        for seed in 0..10 {
            let mut map = Map::new(50, 30);
            let a = carved_room(&mut map, 0, 2, 2, 5, 5);
            let b = carved_room(&mut map, 1, 40, 22, 6, 6);
            let rooms = vec![a, b];
            let mut rng = GenRng::new(seed);
            carve_corridors(&mut map, &rooms, &mut rng);

            for x in 0..50 {
                assert_eq!(map.tile(x, 0).kind, TileKind::Wall);
                assert_eq!(map.tile(x, 29).kind, TileKind::Wall);
            }
            for y in 0..30 {
                assert_eq!(map.tile(0, y).kind, TileKind::Wall);
                assert_eq!(map.tile(49, y).kind, TileKind::Wall);
            }
        }
    }

    #[test]
    fn test_dead_ends_add_corridor_tiles() {
        let mut map = Map::new(60, 40);
        let a = carved_room(&mut map, 0, 25, 15, 8, 8);
        let rooms = vec![a];
        let before = corridor_count(&map);
        let mut rng = GenRng::new(21);
        carve_dead_ends(&mut map, &rooms, &mut rng);
        assert!(corridor_count(&map) > before);
    }

    fn corridor_count(map: &Map) -> usize {
        let mut n = 0;
        for y in 0..map.height() as i32 {
            for x in 0..map.width() as i32 {
                if map.tile(x, y).kind == TileKind::Corridor {
                    n += 1;
                }
            }
        }
        n
    }
}
