//! Block sizing and prefix-sum grid layout.
//!
//! Every cell draws its own block size (variety mode x zone multiplier x
//! per-axis fine variation), then the grid is laid out additively: column
//! strides are the widest block in each column, row strides the deepest in
//! each row, with one road width between and around them. Blocks therefore
//! never overlap and road boundaries stay straight across the whole grid.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{
    BLOCK_DIM_CAP_FACTOR, FINE_SIZE_MAX, FINE_SIZE_MIN, MIN_BLOCK_DIM, SUPER_CELL,
};
use crate::grid::{GridPos, ZoneProfiles, ZoneType};
use crate::params::{GridConfig, VarietyMode};
use crate::sim_rng::{sub_rng, GenRng};

/// One grid cell's buildable land area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub grid_pos: GridPos,
    /// Corner (min-x, min-y), not center.
    pub origin: Vec2,
    pub size: Vec2,
    pub zone: ZoneType,
}

impl Block {
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Prefix-sum geometry of the whole grid: per-column/row strides and the
/// derived road centerline positions.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub road_width: f32,
    /// Column stride = widest block in that column.
    pub col_w: Vec<f32>,
    /// Row stride = deepest block in that row.
    pub row_d: Vec<f32>,
    /// Block origin X per column (east of the column's west road).
    pub col_x: Vec<f32>,
    /// Block origin Y per row.
    pub row_y: Vec<f32>,
    /// Vertical road centerline X, one per boundary (cols + 1 entries).
    pub v_road_x: Vec<f32>,
    /// Horizontal road centerline Y (rows + 1 entries).
    pub h_road_y: Vec<f32>,
    /// Total city extent including the outer road ring.
    pub extent: Vec2,
}

impl GridLayout {
    pub fn new(road_width: f32, col_w: Vec<f32>, row_d: Vec<f32>) -> Self {
        let (col_x, v_road_x, extent_x) = prefix_axis(road_width, &col_w);
        let (row_y, h_road_y, extent_y) = prefix_axis(road_width, &row_d);
        Self {
            road_width,
            col_w,
            row_d,
            col_x,
            row_y,
            v_road_x,
            h_road_y,
            extent: Vec2::new(extent_x, extent_y),
        }
    }

    pub fn block_origin(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(self.col_x[col as usize], self.row_y[row as usize])
    }
}

/// Walk one axis: road, stride, road, stride, ..., road. Returns block
/// origins per stride, road centerlines per boundary, and the total extent.
fn prefix_axis(road_width: f32, strides: &[f32]) -> (Vec<f32>, Vec<f32>, f32) {
    let mut origins = Vec::with_capacity(strides.len());
    let mut road_centers = Vec::with_capacity(strides.len() + 1);
    let mut cursor = 0.0_f32;
    for &stride in strides {
        road_centers.push(cursor + road_width * 0.5);
        cursor += road_width;
        origins.push(cursor);
        cursor += stride;
    }
    road_centers.push(cursor + road_width * 0.5);
    cursor += road_width;
    (origins, road_centers, cursor)
}

/// Draw per-cell block sizes and assemble the laid-out blocks.
pub fn generate_blocks(
    cfg: &GridConfig,
    zones: &[ZoneType],
    profiles: &ZoneProfiles,
    rng: &mut GenRng,
) -> (Vec<Block>, GridLayout) {
    let cols = cfg.width as usize;
    let rows = cfg.length as usize;
    let mut sizes: Vec<Vec2> = Vec::with_capacity(cols * rows);

    for idx in 0..cols * rows {
        let pos = (idx as u32 % cfg.width, idx as u32 / cfg.width);
        let zone_mult = profiles.get(zones[idx]).size_multiplier;
        sizes.push(draw_block_size(cfg, pos, zone_mult, rng));
    }

    let mut col_w = vec![0.0_f32; cols];
    let mut row_d = vec![0.0_f32; rows];
    for (idx, size) in sizes.iter().enumerate() {
        let (c, r) = (idx % cols, idx / cols);
        col_w[c] = col_w[c].max(size.x);
        row_d[r] = row_d[r].max(size.y);
    }

    let layout = GridLayout::new(cfg.road_width, col_w, row_d);
    let blocks = sizes
        .into_iter()
        .enumerate()
        .map(|(idx, size)| {
            let pos = (idx as u32 % cfg.width, idx as u32 / cfg.width);
            Block {
                grid_pos: pos,
                origin: layout.block_origin(pos.0, pos.1),
                size,
                zone: zones[idx],
            }
        })
        .collect();
    (blocks, layout)
}

/// One cell's width/depth draw.
///
/// DISTRICTS keys every size draw (variation and both fine multipliers) on
/// the cell's 3x3 super-cell, so blocks inside one super-cell share their
/// size while the ambient stream stays untouched. UNIFORM suppresses the
/// fine multipliers entirely, so a uniform city is exactly
/// `base * zone_multiplier` everywhere.
fn draw_block_size(cfg: &GridConfig, pos: GridPos, zone_mult: f32, rng: &mut GenRng) -> Vec2 {
    let (var_min, var_max) = cfg.variety.size_range();
    let (variation, fine_w, fine_d) = if cfg.variety == VarietyMode::Districts {
        let mut cell_rng = sub_rng(cfg.seed, pos.0 / SUPER_CELL, pos.1 / SUPER_CELL);
        (
            range_sample(&mut cell_rng, var_min, var_max),
            range_sample(&mut cell_rng, FINE_SIZE_MIN, FINE_SIZE_MAX),
            range_sample(&mut cell_rng, FINE_SIZE_MIN, FINE_SIZE_MAX),
        )
    } else {
        let (fine_min, fine_max) = if cfg.variety == VarietyMode::Uniform {
            (1.0, 1.0)
        } else {
            (FINE_SIZE_MIN, FINE_SIZE_MAX)
        };
        (
            range_sample(&mut rng.0, var_min, var_max),
            range_sample(&mut rng.0, fine_min, fine_max),
            range_sample(&mut rng.0, fine_min, fine_max),
        )
    };

    let cap = BLOCK_DIM_CAP_FACTOR * cfg.base_block_size;
    let w = (cfg.base_block_size * variation * zone_mult * fine_w).clamp(MIN_BLOCK_DIM, cap);
    let d = (cfg.base_block_size * variation * zone_mult * fine_d).clamp(MIN_BLOCK_DIM, cap);
    Vec2::new(w, d)
}

/// `gen_range` panics on an empty range; a pinned range returns the pin.
fn range_sample(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
