//! Generation constants and default configuration values.

/// Default map dimensions
pub const DEFAULT_MAP_WIDTH: usize = 150;
pub const DEFAULT_MAP_HEIGHT: usize = 100;

/// Default room placement targets
pub const DEFAULT_ROOM_COUNT: usize = 16;
pub const DEFAULT_ROOM_MIN_SIZE: usize = 5;
pub const DEFAULT_ROOM_MAX_SIZE: usize = 14;

/// Placement attempt budget per requested room
pub const PLACEMENT_ATTEMPTS_PER_ROOM: usize = 50;

/// Required empty-tile gap between room bounding boxes
pub const ROOM_GAP: i32 = 1;

/// Number of fixed-width depth bands used for zoning
pub const ZONE_BAND_COUNT: usize = 5;

/// Candidate samples per spawn-point pick
pub const SPAWN_SAMPLES: usize = 8;
