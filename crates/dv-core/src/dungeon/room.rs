//! Room types and structures
//!
//! A room is a bounding box plus an explicit list of floor-tile
//! coordinates. Non-rectangular shapes are not dense rectangles, so
//! membership is enumerated rather than inferred from the box. The
//! shape set is closed: each variant dispatches to its own floor-set
//! generator at creation time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::spawn::SpawnPoint;
use crate::rng::GenRng;

/// Room footprint shape
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum RoomShape {
    #[default]
    Rectangular = 0,
    LShaped = 1,
    Circular = 2,
    Cross = 3,
}

/// Gameplay role tag, one per room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum RoomTag {
    /// Player start; always room 0
    Entry = 0,
    /// The single boss room
    Boss = 1,
    /// Ordinary fight room
    #[default]
    Combat = 2,
    /// Treasure room
    Loot = 3,
    /// Small connective room
    Transition = 4,
    /// Deliberately quiet room
    Empty = 5,
}

/// A generated room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable index into the room arena
    pub id: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub shape: RoomShape,
    /// Explicit floor-tile coordinates, sorted and deduplicated
    pub floor: Vec<(i32, i32)>,
    pub tag: RoomTag,
    pub spawn_points: Vec<SpawnPoint>,
    /// BFS hop distance from the entry room
    pub depth: u32,
    /// Danger signal in 0..1 derived from depth
    pub intensity: f64,
    /// Index into the zone list
    pub zone_index: usize,
}

impl Room {
    /// Create a room and generate its shape's floor set
    pub fn new(
        id: usize,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        shape: RoomShape,
        rng: &mut GenRng,
    ) -> Self {
        let mut floor = match shape {
            RoomShape::Rectangular => rectangular_floor(x, y, width, height),
            RoomShape::LShaped => l_shaped_floor(x, y, width, height, rng),
            RoomShape::Circular => circular_floor(x, y, width, height),
            RoomShape::Cross => cross_floor(x, y, width, height),
        };
        floor.sort_unstable();
        floor.dedup();

        Self {
            id,
            x,
            y,
            width,
            height,
            shape,
            floor,
            tag: RoomTag::default(),
            spawn_points: Vec::new(),
            depth: 0,
            intensity: 0.0,
            zone_index: 0,
        }
    }

    /// Floor-tile count
    pub fn area(&self) -> usize {
        self.floor.len()
    }

    /// The floor tile nearest the geometric centroid
    ///
    /// For non-rectangular shapes the centroid itself may not be
    /// floor, so the nearest actual floor tile is returned.
    pub fn center(&self) -> (i32, i32) {
        let n = self.floor.len() as f64;
        let cx = self.floor.iter().map(|&(x, _)| x as f64).sum::<f64>() / n;
        let cy = self.floor.iter().map(|&(_, y)| y as f64).sum::<f64>() / n;

        let mut best = self.floor[0];
        let mut best_d = f64::MAX;
        for &(x, y) in &self.floor {
            let d = (x as f64 - cx).powi(2) + (y as f64 - cy).powi(2);
            if d < best_d {
                best_d = d;
                best = (x, y);
            }
        }
        best
    }

    /// Check if the bounding boxes, expanded by `gap`, overlap
    pub fn overlaps(&self, other: &Room, gap: i32) -> bool {
        self.x - gap < other.x + other.width
            && self.x + self.width + gap > other.x
            && self.y - gap < other.y + other.height
            && self.y + self.height + gap > other.y
    }

    /// Check if a coordinate is one of this room's floor tiles
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.floor.binary_search(&(x, y)).is_ok()
    }
}

/// The full bounding box
fn rectangular_floor(x: i32, y: i32, width: i32, height: i32) -> Vec<(i32, i32)> {
    let mut floor = Vec::with_capacity((width * height) as usize);
    for fy in y..y + height {
        for fx in x..x + width {
            floor.push((fx, fy));
        }
    }
    floor
}

/// Union of a horizontal strip (full width, 40-60% height) and a
/// vertical strip (full height, 40-60% width)
fn l_shaped_floor(x: i32, y: i32, width: i32, height: i32, rng: &mut GenRng) -> Vec<(i32, i32)> {
    let strip_h = ((height as f64 * (0.4 + rng.next_f64() * 0.2)).round() as i32).max(1);
    let strip_w = ((width as f64 * (0.4 + rng.next_f64() * 0.2)).round() as i32).max(1);

    let mut floor = Vec::new();
    for fy in y..y + strip_h {
        for fx in x..x + width {
            floor.push((fx, fy));
        }
    }
    for fy in y..y + height {
        for fx in x..x + strip_w {
            floor.push((fx, fy));
        }
    }
    floor
}

/// Ellipse membership test over the bounding box
fn circular_floor(x: i32, y: i32, width: i32, height: i32) -> Vec<(i32, i32)> {
    let rx = (width - 1) as f64 / 2.0;
    let ry = (height - 1) as f64 / 2.0;
    let cx = x as f64 + rx;
    let cy = y as f64 + ry;

    let mut floor = Vec::new();
    for fy in y..y + height {
        for fx in x..x + width {
            let dx = (fx as f64 - cx) / rx.max(0.5);
            let dy = (fy as f64 - cy) / ry.max(0.5);
            if dx * dx + dy * dy <= 1.0 {
                floor.push((fx, fy));
            }
        }
    }
    floor
}

/// A centered vertical arm (width/3) unioned with a centered
/// horizontal arm (height/3)
fn cross_floor(x: i32, y: i32, width: i32, height: i32) -> Vec<(i32, i32)> {
    let arm_w = (width / 3).max(1);
    let arm_h = (height / 3).max(1);
    let arm_x = x + (width - arm_w) / 2;
    let arm_y = y + (height - arm_h) / 2;

    let mut floor = Vec::new();
    for fy in y..y + height {
        for fx in arm_x..arm_x + arm_w {
            floor.push((fx, fy));
        }
    }
    for fy in arm_y..arm_y + arm_h {
        for fx in x..x + width {
            floor.push((fx, fy));
        }
    }
    floor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_floor_is_dense() {
        let mut rng = GenRng::new(1);
        let room = Room::new(0, 2, 3, 4, 5, RoomShape::Rectangular, &mut rng);
        assert_eq!(room.area(), 20);
        assert!(room.contains(2, 3));
        assert!(room.contains(5, 7));
        assert!(!room.contains(6, 3));
    }

    #[test]
    fn test_l_shape_within_box_and_smaller() {
        let mut rng = GenRng::new(2);
        let room = Room::new(0, 0, 0, 10, 10, RoomShape::LShaped, &mut rng);
        assert!(room.area() < 100);
        for &(x, y) in &room.floor {
            assert!((0..10).contains(&x) && (0..10).contains(&y));
        }
        // Both strips share the top-left corner
        assert!(room.contains(0, 0));
    }

    #[test]
    fn test_circular_floor_drops_corners() {
        let mut rng = GenRng::new(3);
        let room = Room::new(0, 0, 0, 9, 9, RoomShape::Circular, &mut rng);
        assert!(!room.contains(0, 0));
        assert!(!room.contains(8, 8));
        assert!(room.contains(4, 4));
    }

    #[test]
    fn test_cross_floor_has_both_arms() {
        let mut rng = GenRng::new(4);
        let room = Room::new(0, 0, 0, 9, 9, RoomShape::Cross, &mut rng);
        // Vertical arm reaches top and bottom, horizontal arm the sides
        assert!(room.contains(4, 0));
        assert!(room.contains(4, 8));
        assert!(room.contains(0, 4));
        assert!(room.contains(8, 4));
        assert!(!room.contains(0, 0));
    }

    #[test]
    fn test_center_is_floor_tile() {
        let mut rng = GenRng::new(5);
        for shape in [
            RoomShape::Rectangular,
            RoomShape::LShaped,
            RoomShape::Circular,
            RoomShape::Cross,
        ] {
            let room = Room::new(0, 1, 1, 8, 7, shape, &mut rng);
            let (cx, cy) = room.center();
            assert!(room.contains(cx, cy), "center of {shape} must be floor");
        }
    }

    #[test]
    fn test_overlaps_with_gap() {
        let mut rng = GenRng::new(6);
        let a = Room::new(0, 5, 5, 5, 5, RoomShape::Rectangular, &mut rng);
        let b = Room::new(1, 10, 5, 5, 5, RoomShape::Rectangular, &mut rng);
        let c = Room::new(2, 11, 5, 5, 5, RoomShape::Rectangular, &mut rng);
        // b touches a's right edge: legal only without the gap
        assert!(!a.overlaps(&b, 0));
        assert!(a.overlaps(&b, 1));
        // c leaves one wall column after a's expanded box
        assert!(!a.overlaps(&c, 1));
        assert!(a.overlaps(&c, 2));
    }
}
