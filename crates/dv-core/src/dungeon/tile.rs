//! Map tile types
//!
//! A tile carries its terrain kind, the renderer-facing glyph and
//! colors, bitflag state, and a movement cost. The themer repaints
//! glyph, colors, and cost; walkability and transparency are fixed at
//! carve time.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Tile terrain kind
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    /// Solid rock or built wall
    #[default]
    Wall = 0,
    /// Room floor
    Floor = 1,
    /// Corridor floor outside any room
    Corridor = 2,
}

impl TileKind {
    /// Check if this kind is passable
    pub const fn is_passable(&self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Corridor)
    }

    /// Get the default display character for this kind
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
            TileKind::Corridor => '.',
        }
    }
}

/// Renderer-facing named colors
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    White = 1,
    Gray = 2,
    DarkGray = 3,
    Green = 4,
    DarkGreen = 5,
    Brown = 6,
    Red = 7,
    DarkRed = 8,
    Blue = 9,
    Purple = 10,
    Yellow = 11,
}

bitflags! {
    /// Per-tile boolean state
    ///
    /// EXPLORED is owned by the external visibility system; the
    /// generation pipeline never sets or clears it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TileFlags: u8 {
        const WALKABLE = 0b0000_0001;
        const TRANSPARENT = 0b0000_0010;
        const EXPLORED = 0b0000_0100;
    }
}

// Manual serde impl for TileFlags
impl Serialize for TileFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(TileFlags::from_bits_truncate(bits))
    }
}

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
    pub flags: TileFlags,
    /// Movement cost for pathfinding consumers (0 for impassable)
    pub move_cost: u8,
}

impl Tile {
    /// A solid wall tile
    pub fn wall() -> Self {
        Self {
            kind: TileKind::Wall,
            glyph: TileKind::Wall.symbol(),
            fg: Color::Gray,
            bg: Color::Black,
            flags: TileFlags::empty(),
            move_cost: 0,
        }
    }

    /// A room floor tile
    pub fn floor() -> Self {
        Self {
            kind: TileKind::Floor,
            glyph: TileKind::Floor.symbol(),
            fg: Color::White,
            bg: Color::Black,
            flags: TileFlags::WALKABLE | TileFlags::TRANSPARENT,
            move_cost: 1,
        }
    }

    /// A corridor floor tile
    pub fn corridor() -> Self {
        Self {
            kind: TileKind::Corridor,
            glyph: TileKind::Corridor.symbol(),
            fg: Color::Gray,
            bg: Color::Black,
            flags: TileFlags::WALKABLE | TileFlags::TRANSPARENT,
            move_cost: 1,
        }
    }

    /// Check if this tile can be walked on
    pub fn is_walkable(&self) -> bool {
        self.flags.contains(TileFlags::WALKABLE)
    }

    /// Check if sight passes through this tile
    pub fn is_transparent(&self) -> bool {
        self.flags.contains(TileFlags::TRANSPARENT)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}
