//! Dungeon generation pipeline
//!
//! Drives the eight stages in dependency order: place rooms, carve
//! corridors, enforce connectivity, build the room graph, tag rooms,
//! assign zones, drop spawn markers, and theme the tiles. The result
//! is a self-contained value; the pipeline itself never fails — a
//! placement shortfall just yields fewer rooms.

use serde::{Deserialize, Serialize};

use super::connectivity::enforce_connectivity;
use super::corridor::carve_corridors;
use super::graph::{RoomGraph, build_graph};
use super::map::Map;
use super::placement::place_rooms;
use super::room::Room;
use super::spawn::generate_spawns;
use super::tag::assign_tags;
use super::theme::apply_theme;
use super::zone::{Zone, assign_zones};
use crate::consts::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_ROOM_COUNT, DEFAULT_ROOM_MAX_SIZE,
    DEFAULT_ROOM_MIN_SIZE,
};
use crate::rng::GenRng;

/// Generation settings; `Default` carries the standard configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    pub width: usize,
    pub height: usize,
    /// Target room count; the result may hold fewer
    pub room_count: usize,
    pub room_min_size: usize,
    pub room_max_size: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            room_count: DEFAULT_ROOM_COUNT,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,
        }
    }
}

/// A complete generated level, handed to the populator and renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDungeon {
    pub map: Map,
    pub rooms: Vec<Room>,
    pub zones: Vec<Zone>,
    pub graph: RoomGraph,
}

/// Generate a dungeon with explicit settings and rng
pub fn generate_dungeon(config: &DungeonConfig, rng: &mut GenRng) -> GeneratedDungeon {
    let mut map = Map::new(config.width, config.height);

    let mut rooms = place_rooms(&mut map, config, rng);
    carve_corridors(&mut map, &rooms, rng);
    enforce_connectivity(&mut map, &rooms);

    let mut graph = build_graph(&map, &rooms);
    for room in &mut rooms {
        room.depth = graph.depth(room.id);
        room.intensity = graph.intensity(room.id);
    }

    let boss = assign_tags(&mut rooms, &mut graph, rng);
    let zones = assign_zones(&mut rooms, &graph, boss, rng);
    generate_spawns(&map, &mut rooms, rng);
    apply_theme(&mut map, &rooms, &zones, rng);

    GeneratedDungeon {
        map,
        rooms,
        zones,
        graph,
    }
}

/// Generate with the default configuration and a fresh seeded rng
pub fn generate_with_seed(seed: u64) -> GeneratedDungeon {
    generate_dungeon(&DungeonConfig::default(), &mut GenRng::new(seed))
}
