//! dv-core: deterministic dungeon-level generation for Delve
//!
//! This crate contains the whole generation pipeline with no I/O
//! dependencies. It is pure and testable: every stage takes the seeded
//! rng explicitly, and identical rng streams produce structurally
//! identical dungeons.
//!
//! The pipeline runs once per new game. It places rooms of varied
//! shape on an all-wall grid, carves corridors, enforces full
//! connectivity, derives a room-adjacency graph with depth and
//! intensity metrics, tags rooms with gameplay roles, partitions them
//! into themed zones, drops typed spawn markers, and repaints tiles
//! per zone theme. The result is handed to external consumers (the
//! populator and the renderer) as a self-contained value.

pub mod dungeon;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GenRng;
