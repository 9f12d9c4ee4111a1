//! Room tagging
//!
//! Assigns one gameplay tag per room. Room 0 is always the entry; the
//! room scoring highest on the boss heuristic is the single boss, and
//! the critical path is rebuilt against it before the remaining rooms
//! are tagged in index order by the first matching rule.

use super::graph::RoomGraph;
use super::room::{Room, RoomTag};
use crate::rng::GenRng;

/// Rooms below this fraction of the mean floor count are "small"
const SMALL_ROOM_FRACTION: f64 = 0.6;

/// Tag every room; returns the committed boss index (None when the
/// dungeon has fewer than two rooms)
pub fn assign_tags(rooms: &mut [Room], graph: &mut RoomGraph, rng: &mut GenRng) -> Option<usize> {
    if rooms.is_empty() {
        return None;
    }
    rooms[0].tag = RoomTag::Entry;

    let boss = graph.boss_candidate(rooms)?;
    rooms[boss].tag = RoomTag::Boss;
    graph.rebuild_critical_path(boss);

    let mean_area =
        rooms.iter().map(|r| r.area()).sum::<usize>() as f64 / rooms.len() as f64;
    let small_cutoff = mean_area * SMALL_ROOM_FRACTION;
    let mut loot_quota = loot_quota(rooms.len());

    for i in 1..rooms.len() {
        if i == boss {
            continue;
        }
        let on_path = graph.critical_path.contains(&i);
        let small = (rooms[i].area() as f64) < small_cutoff;
        let degree = graph.degree(i);
        let intensity = graph.intensity(i);

        rooms[i].tag = if on_path && small && degree >= 2 {
            RoomTag::Transition
        } else if on_path {
            RoomTag::Combat
        } else if degree <= 1 && loot_quota > 0 && intensity < 0.6 {
            loot_quota -= 1;
            RoomTag::Loot
        } else if intensity < 0.3 && loot_quota > 0 && rng.percent(40) {
            loot_quota -= 1;
            RoomTag::Loot
        } else if small && degree >= 2 {
            RoomTag::Transition
        } else if intensity < 0.2 && !on_path && rng.percent(30) {
            RoomTag::Empty
        } else {
            RoomTag::Combat
        };
    }

    Some(boss)
}

/// Loot rooms allowed per dungeon: `min(2, (n-2)/3 + 1)`
fn loot_quota(room_count: usize) -> usize {
    (room_count.saturating_sub(2) / 3 + 1).min(2)
}
