//! Room adjacency graph
//!
//! Rooms are identified by their stable index into the room arena;
//! adjacency is an index-keyed map of index sets. Adjacency is
//! discovered by flooding outward from each room's center: the fill
//! traverses corridor tiles freely but stops expanding when it enters
//! a different room's floor, recording an edge instead.

use std::cell::RefCell;
use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use super::map::{CARDINALS, Map};
use super::room::Room;

/// Intensity for a room at `depth` when the deepest room sits at
/// `max_depth`: clamped depth fraction, 0 for a depthless graph
pub fn room_intensity(depth: u32, max_depth: u32) -> f64 {
    if max_depth == 0 {
        0.0
    } else {
        (depth as f64 / max_depth as f64).min(1.0)
    }
}

/// The room adjacency graph with depth metrics and the critical path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomGraph {
    adjacency: HashMap<usize, HashSet<usize>>,
    /// Deduplicated undirected edges, each stored as (lo, hi)
    pub edges: Vec<(usize, usize)>,
    depths: Vec<u32>,
    /// Ordered room indices, entry to boss
    pub critical_path: Vec<usize>,
    #[serde(skip)]
    dist_cache: RefCell<HashMap<usize, Vec<Option<u32>>>>,
}

/// Build the adjacency graph, depths, and a provisional critical path
pub fn build_graph(map: &Map, rooms: &[Room]) -> RoomGraph {
    let mut owner: Vec<Option<usize>> = vec![None; map.width() * map.height()];
    for room in rooms {
        for &(x, y) in &room.floor {
            owner[map.idx(x, y)] = Some(room.id);
        }
    }

    let mut adjacency: HashMap<usize, HashSet<usize>> = HashMap::new();
    for room in rooms {
        adjacency.entry(room.id).or_default();
    }

    for room in rooms {
        discover_neighbors(map, room, &owner, &mut adjacency);
    }

    let mut edge_set: HashSet<(usize, usize)> = HashSet::new();
    for (&a, neighbors) in &adjacency {
        for &b in neighbors {
            edge_set.insert((a.min(b), a.max(b)));
        }
    }
    let mut edges: Vec<(usize, usize)> = edge_set.into_iter().collect();
    edges.sort_unstable();

    let mut graph = RoomGraph {
        adjacency,
        edges,
        depths: Vec::new(),
        critical_path: Vec::new(),
        dist_cache: RefCell::new(HashMap::new()),
    };
    graph.depths = graph.bfs_depths(rooms.len());

    // Provisional path against the pre-tagging boss heuristic; the
    // tagger rebuilds it once the boss room is committed.
    graph.critical_path = match graph.boss_candidate(rooms) {
        Some(boss) => graph.shortest_path(0, boss),
        None => {
            if rooms.is_empty() {
                Vec::new()
            } else {
                vec![0]
            }
        }
    };

    graph
}

/// Flood from a room's center; foreign room tiles become edges and are
/// not expanded through, corridor tiles are traversed freely
fn discover_neighbors(
    map: &Map,
    room: &Room,
    owner: &[Option<usize>],
    adjacency: &mut HashMap<usize, HashSet<usize>>,
) {
    let start = room.center();
    if !map.is_walkable(start.0, start.1) {
        return;
    }

    let mut visited = vec![false; map.width() * map.height()];
    let mut queue = VecDeque::new();
    visited[map.idx(start.0, start.1)] = true;
    queue.push_back(start);

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in CARDINALS {
            let (nx, ny) = (x + dx, y + dy);
            if !map.is_walkable(nx, ny) || visited[map.idx(nx, ny)] {
                continue;
            }
            visited[map.idx(nx, ny)] = true;

            match owner[map.idx(nx, ny)] {
                Some(other) if other != room.id => {
                    adjacency.entry(room.id).or_default().insert(other);
                    adjacency.entry(other).or_default().insert(room.id);
                }
                _ => queue.push_back((nx, ny)),
            }
        }
    }
}

impl RoomGraph {
    /// Number of rooms in the graph
    pub fn room_count(&self) -> usize {
        self.depths.len()
    }

    /// Sorted neighbor indices of a room
    pub fn neighbors(&self, room: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .adjacency
            .get(&room)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        out.sort_unstable();
        out
    }

    /// Neighbor count of a room
    pub fn degree(&self, room: usize) -> usize {
        self.adjacency.get(&room).map_or(0, |set| set.len())
    }

    /// BFS hop distance from room 0
    pub fn depth(&self, room: usize) -> u32 {
        self.depths.get(room).copied().unwrap_or(0)
    }

    /// The deepest BFS distance in the graph
    pub fn max_depth(&self) -> u32 {
        self.depths.iter().copied().max().unwrap_or(0)
    }

    /// Depth-derived danger signal in 0..1
    pub fn intensity(&self, room: usize) -> f64 {
        room_intensity(self.depth(room), self.max_depth())
    }

    /// Hop distance between two rooms, memoized per source
    pub fn distance(&self, from: usize, to: usize) -> Option<u32> {
        if from >= self.room_count() || to >= self.room_count() {
            return None;
        }
        {
            let cache = self.dist_cache.borrow();
            if let Some(dists) = cache.get(&from) {
                return dists[to];
            }
        }
        let dists = self.bfs_from(from);
        let result = dists[to];
        self.dist_cache.borrow_mut().insert(from, dists);
        result
    }

    /// The pre-tagging boss heuristic: the non-entry room maximizing
    /// `area*2 + depth*10`, ties broken toward the lower index
    pub fn boss_candidate(&self, rooms: &[Room]) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for room in rooms.iter().skip(1) {
            let score = room.area() as u64 * 2 + self.depth(room.id) as u64 * 10;
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((room.id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Recompute the critical path against the committed boss room
    pub fn rebuild_critical_path(&mut self, boss: usize) {
        self.critical_path = self.shortest_path(0, boss);
    }

    /// BFS shortest path between two rooms, inclusive of both ends;
    /// empty when no path exists
    pub fn shortest_path(&self, from: usize, to: usize) -> Vec<usize> {
        if from >= self.room_count() || to >= self.room_count() {
            return Vec::new();
        }
        if from == to {
            return vec![from];
        }

        let mut parent: HashMap<usize, usize> = HashMap::new();
        let mut queue = VecDeque::new();
        parent.insert(from, from);
        queue.push_back(from);

        while let Some(node) = queue.pop_front() {
            if node == to {
                break;
            }
            for next in self.neighbors(node) {
                if !parent.contains_key(&next) {
                    parent.insert(next, node);
                    queue.push_back(next);
                }
            }
        }

        if !parent.contains_key(&to) {
            return Vec::new();
        }

        let mut path = vec![to];
        let mut node = to;
        while node != from {
            node = parent[&node];
            path.push(node);
        }
        path.reverse();
        path
    }

    fn bfs_depths(&self, room_count: usize) -> Vec<u32> {
        if room_count == 0 {
            return Vec::new();
        }
        let mut depths = vec![0u32; room_count];
        let mut seen = vec![false; room_count];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(0usize);

        while let Some(node) = queue.pop_front() {
            for next in self.neighbors(node) {
                if next < room_count && !seen[next] {
                    seen[next] = true;
                    depths[next] = depths[node] + 1;
                    queue.push_back(next);
                }
            }
        }
        depths
    }

    fn bfs_from(&self, from: usize) -> Vec<Option<u32>> {
        let mut dists = vec![None; self.room_count()];
        let mut queue = VecDeque::new();
        dists[from] = Some(0);
        queue.push_back(from);

        while let Some(node) = queue.pop_front() {
            let d = dists[node].unwrap_or(0);
            for next in self.neighbors(node) {
                if next < dists.len() && dists[next].is_none() {
                    dists[next] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
        dists
    }
}
