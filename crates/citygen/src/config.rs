pub const MAX_GRID_DIM: u32 = 50;
pub const MAX_GRID_CELLS: u32 = 100;
pub const MAX_FLOORS_CAP: u32 = 100;
pub const MAX_BUILDINGS_PER_BLOCK: u32 = 9;

/// Hard performance guard: abort generation rather than silently shrink.
pub const MAX_GUARDED_BLOCKS: u32 = 25;
pub const MAX_GUARDED_BUILDINGS: u32 = 50;

/// World-space height of one building floor.
pub const FLOOR_HEIGHT: f32 = 3.0;

/// Block dimensions are clamped to [MIN_BLOCK_DIM, BLOCK_DIM_CAP_FACTOR * base].
pub const MIN_BLOCK_DIM: f32 = 2.0;
pub const BLOCK_DIM_CAP_FACTOR: f32 = 3.0;

/// Fine per-axis size multiplier range (non-square blocks).
pub const FINE_SIZE_MIN: f32 = 0.8;
pub const FINE_SIZE_MAX: f32 = 1.2;

/// Side of the super-cell sharing one coherent variation draw in DISTRICTS mode.
pub const SUPER_CELL: u32 = 3;

pub const DIAGONAL_WIDTH_FACTOR: f32 = 0.7;
pub const DEFAULT_INTERSECTION_FACTOR: f32 = 1.2;

/// Organic road sampling: points per centerline and offset shaping.
pub const ORGANIC_SAMPLES: usize = 12;
pub const ORGANIC_AMPLITUDE_FACTOR: f32 = 1.2;
pub const ORGANIC_JITTER_FACTOR: f32 = 0.4;

/// Inset applied to each sub-rectangle when a block holds more than one
/// building, as a fraction of the sub-rectangle's smaller dimension.
pub const SUBLOT_INSET_FRACTION: f32 = 0.05;

/// Slots narrower than this on either axis are skipped rather than built.
pub const MIN_FOOTPRINT_DIM: f32 = 1.0;
