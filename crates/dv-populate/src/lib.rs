//! dv-populate: entity population from generated dungeon spawn markers
//!
//! Consumes the generator's output and turns its typed spawn markers
//! into concrete entities: the player, enemies scaled by difficulty
//! and room intensity, and weighted-random items. The generator always
//! places a player marker in the entry room, so a dungeon without one
//! is an invariant violation and population fails with a distinct
//! fatal error rather than degrading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dv_core::GenRng;
use dv_core::dungeon::{GeneratedDungeon, RoomTag, SpawnKind};

/// Population failures
///
/// `MissingPlayerSpawn` means an upstream generation invariant broke;
/// the run cannot proceed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopulateError {
    #[error("no player spawn point found in any room")]
    MissingPlayerSpawn,
}

/// Item categories with their spawn weights (total 100)
const ITEM_WEIGHTS: [(ItemKind, u32); 5] = [
    (ItemKind::Gold, 30),
    (ItemKind::Potion, 25),
    (ItemKind::Scroll, 20),
    (ItemKind::Weapon, 15),
    (ItemKind::Armor, 10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ItemKind {
    Gold = 0,
    Potion = 1,
    Scroll = 2,
    Weapon = 3,
    Armor = 4,
}

/// Weighted item roll, in the manner of shop inventory selection
fn roll_item_kind(rng: &mut GenRng) -> ItemKind {
    let roll = rng.rn2(100);
    let mut cumulative = 0;
    for (kind, weight) in ITEM_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return kind;
        }
    }
    ItemKind::Gold
}

/// The player entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

/// An enemy entity; stats scale with difficulty and room intensity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    pub attack: i32,
    /// Boss-room enemies are elites with doubled stats
    pub elite: bool,
    /// Intensity of the owning room at spawn time
    pub intensity: f64,
}

/// An item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub x: i32,
    pub y: i32,
    pub kind: ItemKind,
}

/// Everything population produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
}

/// Create entities for every spawn marker, rooms in index order
pub fn populate(
    dungeon: &GeneratedDungeon,
    difficulty: f64,
    rng: &mut GenRng,
) -> Result<Population, PopulateError> {
    let mut player = None;
    let mut enemies = Vec::new();
    let mut items = Vec::new();

    for room in &dungeon.rooms {
        for spawn in &room.spawn_points {
            match spawn.kind {
                SpawnKind::Player => {
                    player = Some(Player {
                        x: spawn.x,
                        y: spawn.y,
                    });
                }
                SpawnKind::Enemy => {
                    enemies.push(make_enemy(
                        spawn.x,
                        spawn.y,
                        difficulty,
                        room.intensity,
                        room.tag == RoomTag::Boss,
                        rng,
                    ));
                }
                SpawnKind::Item => {
                    items.push(Item {
                        x: spawn.x,
                        y: spawn.y,
                        kind: roll_item_kind(rng),
                    });
                }
            }
        }
    }

    let player = player.ok_or(PopulateError::MissingPlayerSpawn)?;
    Ok(Population {
        player,
        enemies,
        items,
    })
}

fn make_enemy(
    x: i32,
    y: i32,
    difficulty: f64,
    intensity: f64,
    elite: bool,
    rng: &mut GenRng,
) -> Enemy {
    let mut hp = (6.0 + difficulty * 4.0 + intensity * 10.0).round() as i32 + rng.rnd(4) as i32;
    let mut attack = (2.0 + difficulty * 2.0 + intensity * 4.0).round() as i32;
    if elite {
        hp *= 2;
        attack *= 2;
    }
    Enemy {
        x,
        y,
        hp,
        attack,
        elite,
        intensity,
    }
}
