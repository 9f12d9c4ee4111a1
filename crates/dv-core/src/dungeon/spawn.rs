//! Spawn marker placement
//!
//! Drops typed spawn markers (player/enemy/item) into each room,
//! driven by the room's tag and intensity. Positions are picked with a
//! greedy farthest-point heuristic over interior floor tiles so spawns
//! spread apart instead of clumping.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::map::{CARDINALS, Map};
use super::room::{Room, RoomTag};
use crate::consts::SPAWN_SAMPLES;
use crate::rng::GenRng;

/// Spawn marker type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum SpawnKind {
    Player = 0,
    Enemy = 1,
    Item = 2,
}

/// A typed coordinate marker consumed by the external populator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: i32,
    pub y: i32,
    pub kind: SpawnKind,
}

/// Generate spawn markers for every room
pub fn generate_spawns(map: &Map, rooms: &mut [Room], rng: &mut GenRng) {
    for room in rooms.iter_mut() {
        let candidates = candidate_pool(map, room);
        if candidates.is_empty() {
            continue;
        }

        let mut points = Vec::new();
        let mut chosen = Vec::new();
        let intensity = room.intensity;

        match room.tag {
            RoomTag::Entry => {
                let center = room.center();
                push_at(center, SpawnKind::Player, &mut points, &mut chosen);
                for _ in 0..1 + rng.rn2(2) {
                    push_spread(SpawnKind::Item, &candidates, &mut points, &mut chosen, rng);
                }
            }
            RoomTag::Boss => {
                let center = room.center();
                push_at(center, SpawnKind::Enemy, &mut points, &mut chosen);
                for _ in 0..1 + rng.rn2(2) {
                    push_spread(SpawnKind::Item, &candidates, &mut points, &mut chosen, rng);
                }
            }
            RoomTag::Combat => {
                let (enemies, item_pct) = if intensity < 0.33 {
                    (1 + rng.rn2(2), 60)
                } else if intensity < 0.66 {
                    (1 + rng.rn2(3), 40)
                } else {
                    (2 + rng.rn2(2), 20)
                };
                for _ in 0..enemies {
                    push_spread(SpawnKind::Enemy, &candidates, &mut points, &mut chosen, rng);
                }
                if rng.percent(item_pct) {
                    push_spread(SpawnKind::Item, &candidates, &mut points, &mut chosen, rng);
                }
            }
            RoomTag::Loot => {
                // Lower intensity means more treasure
                let count = 2 + ((1.0 - intensity) * 2.0).round() as u32;
                for _ in 0..count {
                    push_spread(SpawnKind::Item, &candidates, &mut points, &mut chosen, rng);
                }
                if rng.percent(30) {
                    push_spread(SpawnKind::Enemy, &candidates, &mut points, &mut chosen, rng);
                }
            }
            RoomTag::Transition | RoomTag::Empty => {
                if rng.percent(30) {
                    push_spread(SpawnKind::Item, &candidates, &mut points, &mut chosen, rng);
                }
            }
        }

        room.spawn_points = points;
    }
}

/// Interior floor tiles of a room (all 4 neighbors walkable), falling
/// back to the full floor set when fewer than 3 interior tiles exist
fn candidate_pool(map: &Map, room: &Room) -> Vec<(i32, i32)> {
    let interior: Vec<(i32, i32)> = room
        .floor
        .iter()
        .copied()
        .filter(|&(x, y)| {
            CARDINALS
                .iter()
                .all(|&(dx, dy)| map.is_walkable(x + dx, y + dy))
        })
        .collect();

    if interior.len() < 3 {
        room.floor.clone()
    } else {
        interior
    }
}

fn push_at(
    pos: (i32, i32),
    kind: SpawnKind,
    points: &mut Vec<SpawnPoint>,
    chosen: &mut Vec<(i32, i32)>,
) {
    points.push(SpawnPoint {
        x: pos.0,
        y: pos.1,
        kind,
    });
    chosen.push(pos);
}

/// Pick a position maximizing the minimum Manhattan distance to the
/// already-chosen points, sampling up to `SPAWN_SAMPLES` candidates
fn push_spread(
    kind: SpawnKind,
    candidates: &[(i32, i32)],
    points: &mut Vec<SpawnPoint>,
    chosen: &mut Vec<(i32, i32)>,
    rng: &mut GenRng,
) {
    let n = candidates.len() as u32;
    let pos = if chosen.is_empty() {
        candidates[rng.rn2(n) as usize]
    } else {
        let mut best = candidates[rng.rn2(n) as usize];
        let mut best_d = min_manhattan(best, chosen);
        for _ in 1..SPAWN_SAMPLES {
            let cand = candidates[rng.rn2(n) as usize];
            let d = min_manhattan(cand, chosen);
            if d > best_d {
                best_d = d;
                best = cand;
            }
        }
        best
    };
    push_at(pos, kind, points, chosen);
}

fn min_manhattan(pos: (i32, i32), chosen: &[(i32, i32)]) -> i32 {
    chosen
        .iter()
        .map(|&(x, y)| (pos.0 - x).abs() + (pos.1 - y).abs())
        .min()
        .unwrap_or(i32::MAX)
}
