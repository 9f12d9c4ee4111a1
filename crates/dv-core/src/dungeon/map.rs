//! Map grid structure
//!
//! A width x height grid of tiles, row-major. The map starts as solid
//! wall and is the sole mutable surface the pipeline carves into.
//! Border cells are never carved, so the map edge is always
//! non-walkable.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileKind};

/// 4-directional neighbor offsets
pub(crate) const CARDINALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The dungeon tile grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Map {
    /// Create a map filled with solid wall
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::wall(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index for a coordinate; callers must bounds-check first
    pub fn idx(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Check if a coordinate is on the map
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Check if a coordinate is strictly inside the 1-tile border
    pub fn in_interior(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && (x as usize) < self.width - 1 && (y as usize) < self.height - 1
    }

    /// Get the tile at a coordinate; panics when out of bounds
    pub fn tile(&self, x: i32, y: i32) -> &Tile {
        &self.tiles[self.idx(x, y)]
    }

    /// Get a mutable tile at a coordinate; panics when out of bounds
    pub fn tile_mut(&mut self, x: i32, y: i32) -> &mut Tile {
        let idx = self.idx(x, y);
        &mut self.tiles[idx]
    }

    /// Check if a coordinate is on the map and walkable
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.tile(x, y).is_walkable()
    }

    /// Carve a room floor tile; border cells are left untouched
    pub fn carve_floor(&mut self, x: i32, y: i32) {
        if self.in_interior(x, y) {
            *self.tile_mut(x, y) = Tile::floor();
        }
    }

    /// Carve a corridor tile; room floor and border cells are left untouched
    pub fn carve_corridor(&mut self, x: i32, y: i32) {
        if self.in_interior(x, y) && self.tile(x, y).kind == TileKind::Wall {
            *self.tile_mut(x, y) = Tile::corridor();
        }
    }

    /// 4-directional flood fill over walkable tiles
    ///
    /// Returns a per-tile visited mask. The start tile is only marked
    /// when it is itself walkable.
    pub fn flood_fill(&self, start: (i32, i32)) -> Vec<bool> {
        let mut visited = vec![false; self.width * self.height];
        if !self.is_walkable(start.0, start.1) {
            return visited;
        }

        let mut queue = std::collections::VecDeque::new();
        visited[self.idx(start.0, start.1)] = true;
        queue.push_back(start);

        while let Some((x, y)) = queue.pop_front() {
            for (dx, dy) in CARDINALS {
                let (nx, ny) = (x + dx, y + dy);
                if self.is_walkable(nx, ny) && !visited[self.idx(nx, ny)] {
                    visited[self.idx(nx, ny)] = true;
                    queue.push_back((nx, ny));
                }
            }
        }

        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_solid_wall() {
        let map = Map::new(10, 8);
        for y in 0..8 {
            for x in 0..10 {
                assert_eq!(map.tile(x, y).kind, TileKind::Wall);
            }
        }
    }

    #[test]
    fn test_border_never_carved() {
        let mut map = Map::new(10, 8);
        map.carve_floor(0, 0);
        map.carve_floor(9, 7);
        map.carve_corridor(5, 0);
        assert!(!map.is_walkable(0, 0));
        assert!(!map.is_walkable(9, 7));
        assert!(!map.is_walkable(5, 0));
    }

    #[test]
    fn test_corridor_carve_keeps_floor() {
        let mut map = Map::new(10, 8);
        map.carve_floor(3, 3);
        map.carve_corridor(3, 3);
        assert_eq!(map.tile(3, 3).kind, TileKind::Floor);
    }

    #[test]
    fn test_flood_fill_stops_at_walls() {
        let mut map = Map::new(12, 8);
        // Two floor pockets separated by wall
        for x in 2..4 {
            map.carve_floor(x, 3);
        }
        for x in 7..9 {
            map.carve_floor(x, 3);
        }
        let visited = map.flood_fill((2, 3));
        assert!(visited[map.idx(3, 3)]);
        assert!(!visited[map.idx(7, 3)]);
    }

    #[test]
    fn test_flood_fill_from_wall_is_empty() {
        let map = Map::new(6, 6);
        let visited = map.flood_fill((3, 3));
        assert!(visited.iter().all(|&v| !v));
    }
}
