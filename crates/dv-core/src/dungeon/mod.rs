//! Dungeon generation pipeline
//!
//! Contains the tile grid, room placement, corridor carving,
//! connectivity enforcement, the room graph, tagging, zoning, spawn
//! markers, and tile theming.

mod connectivity;
mod corridor;
mod generation;
mod graph;
mod map;
mod placement;
mod room;
mod spawn;
mod tag;
mod theme;
mod tile;
mod zone;

pub use connectivity::enforce_connectivity;
pub use corridor::carve_corridors;
pub use generation::{DungeonConfig, GeneratedDungeon, generate_dungeon, generate_with_seed};
pub use graph::{RoomGraph, build_graph, room_intensity};
pub use map::Map;
pub use placement::place_rooms;
pub use room::{Room, RoomShape, RoomTag};
pub use spawn::{SpawnKind, SpawnPoint, generate_spawns};
pub use tag::assign_tags;
pub use theme::apply_theme;
pub use tile::{Color, Tile, TileFlags, TileKind};
pub use zone::{Zone, ZoneKind, assign_zones};
