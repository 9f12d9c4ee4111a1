//! Tile theming
//!
//! Repaints floor and wall tiles with zone-themed variants after the
//! structural stages finish. Room tiles take their zone's palette,
//! corridor tiles the palette of the nearest room, and walls the
//! palette of a neighboring themed floor. Only visual fields (glyph,
//! colors, movement cost) are touched; walkability never changes.

use super::map::Map;
use super::room::Room;
use super::tile::{Color, TileKind};
use super::zone::{Zone, ZoneKind};
use crate::rng::GenRng;

/// 8-directional neighbor offsets, cardinals first
const NEIGHBORS8: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A weighted floor variant: glyph, foreground, movement cost, weight
type FloorVariant = (char, Color, u8, u32);

struct Palette {
    floors: &'static [FloorVariant],
    wall_glyph: char,
    wall_fg: Color,
}

const FOREST: Palette = Palette {
    floors: &[
        ('.', Color::Green, 1, 5),
        (',', Color::DarkGreen, 1, 3),
        ('"', Color::Green, 2, 2),
    ],
    wall_glyph: '#',
    wall_fg: Color::DarkGreen,
};

const DUNGEON: Palette = Palette {
    floors: &[
        ('.', Color::Gray, 1, 6),
        (',', Color::DarkGray, 1, 3),
        ('~', Color::DarkGray, 2, 1),
    ],
    wall_glyph: '#',
    wall_fg: Color::Gray,
};

const BOSS: Palette = Palette {
    floors: &[('.', Color::DarkRed, 1, 6), (',', Color::Red, 1, 4)],
    wall_glyph: '#',
    wall_fg: Color::DarkRed,
};

/// Palette ids recorded per tile while painting floors
#[derive(Clone, Copy, PartialEq)]
enum PaletteId {
    Forest,
    Dungeon,
    Boss,
}

impl PaletteId {
    fn of(zone: &Zone) -> Self {
        if zone.has_boss {
            PaletteId::Boss
        } else {
            match zone.kind {
                ZoneKind::Overworld => PaletteId::Forest,
                ZoneKind::Dungeon => PaletteId::Dungeon,
            }
        }
    }

    fn palette(self) -> &'static Palette {
        match self {
            PaletteId::Forest => &FOREST,
            PaletteId::Dungeon => &DUNGEON,
            PaletteId::Boss => &BOSS,
        }
    }
}

/// Repaint the map per zone theme
pub fn apply_theme(map: &mut Map, rooms: &[Room], zones: &[Zone], rng: &mut GenRng) {
    if rooms.is_empty() || zones.is_empty() {
        return;
    }

    let mut themed: Vec<Option<PaletteId>> = vec![None; map.width() * map.height()];

    // Room floors take their zone's palette
    for room in rooms {
        let id = PaletteId::of(&zones[room.zone_index]);
        for &(x, y) in &room.floor {
            paint_floor(map, x, y, id, rng);
            themed[map.idx(x, y)] = Some(id);
        }
    }

    // Corridor floors take the palette of the nearest room centroid
    let centers: Vec<(i32, i32)> = rooms.iter().map(|r| r.center()).collect();
    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            if map.tile(x, y).kind != TileKind::Corridor {
                continue;
            }
            let nearest = nearest_room(&centers, x, y);
            let id = PaletteId::of(&zones[rooms[nearest].zone_index]);
            paint_floor(map, x, y, id, rng);
            themed[map.idx(x, y)] = Some(id);
        }
    }

    // Walls take the palette of their nearest themed floor neighbor
    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            if map.tile(x, y).kind != TileKind::Wall {
                continue;
            }
            let neighbor_id = NEIGHBORS8.iter().find_map(|&(dx, dy)| {
                let (nx, ny) = (x + dx, y + dy);
                if map.in_bounds(nx, ny) {
                    themed[map.idx(nx, ny)]
                } else {
                    None
                }
            });
            if let Some(id) = neighbor_id {
                let palette = id.palette();
                let tile = map.tile_mut(x, y);
                tile.glyph = palette.wall_glyph;
                tile.fg = palette.wall_fg;
            }
        }
    }
}

fn paint_floor(map: &mut Map, x: i32, y: i32, id: PaletteId, rng: &mut GenRng) {
    let (glyph, fg, cost) = roll_variant(id.palette(), rng);
    let tile = map.tile_mut(x, y);
    tile.glyph = glyph;
    tile.fg = fg;
    tile.move_cost = cost;
}

fn roll_variant(palette: &Palette, rng: &mut GenRng) -> (char, Color, u8) {
    let total: u32 = palette.floors.iter().map(|&(_, _, _, w)| w).sum();
    let mut roll = rng.rn2(total);
    for &(glyph, fg, cost, weight) in palette.floors {
        if roll < weight {
            return (glyph, fg, cost);
        }
        roll -= weight;
    }
    // Fallback (shouldn't happen, weights cover the roll range)
    let (glyph, fg, cost, _) = palette.floors[0];
    (glyph, fg, cost)
}

fn nearest_room(centers: &[(i32, i32)], x: i32, y: i32) -> usize {
    let mut best = 0;
    let mut best_d = i64::MAX;
    for (i, &(cx, cy)) in centers.iter().enumerate() {
        let d = ((cx - x) as i64).pow(2) + ((cy - y) as i64).pow(2);
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}
