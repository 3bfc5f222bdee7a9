//! Road network planning.
//!
//! The orthogonal pass lays one street per column/row boundary at the
//! prefix-sum positions, each spanning the full perpendicular extent so the
//! grid closes with no gaps. Diagonal shortcuts, interior intersections and
//! organic curvature are all optional passes on top.

mod organic;

pub use organic::curved_centerline;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::blocks::{Block, GridLayout};
use crate::config::{DIAGONAL_WIDTH_FACTOR, ORGANIC_AMPLITUDE_FACTOR};
use crate::error::Warning;
use crate::params::GridConfig;
use crate::sim_rng::{sub_rng, GenRng};
use rand::Rng;

/// Salt mixed into the per-road sub-RNG key so road phases never collide
/// with the super-cell keys.
const ROAD_SALT: u32 = 0x524f_4144;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadKind {
    /// Interior grid street.
    Orthogonal,
    /// Block-center-to-block-center shortcut.
    Diagonal,
    /// Outer perimeter ring.
    Boundary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    /// At least 2 points; straight segments have exactly 2.
    pub centerline: Vec<Vec2>,
    pub width: f32,
    pub kind: RoadKind,
}

impl RoadSegment {
    /// Polyline length.
    pub fn length(&self) -> f32 {
        self.centerline
            .windows(2)
            .map(|w| (w[1] - w[0]).length())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub center: Vec2,
    pub size: f32,
}

/// Plan the full road network for one generation run.
pub fn plan_roads(
    cfg: &GridConfig,
    layout: &GridLayout,
    blocks: &[Block],
    rng: &mut GenRng,
    warnings: &mut Vec<Warning>,
) -> (Vec<RoadSegment>, Vec<Intersection>) {
    let mut roads = Vec::new();

    orthogonal_pass(cfg, layout, &mut roads, warnings);
    if cfg.diagonal_frequency > 0.0 {
        diagonal_pass(cfg, blocks, rng, &mut roads, warnings);
    }

    let mut intersections = Vec::new();
    if cfg.intersections {
        interior_intersections(cfg, layout, &mut intersections);
    }

    (roads, intersections)
}

fn orthogonal_pass(
    cfg: &GridConfig,
    layout: &GridLayout,
    roads: &mut Vec<RoadSegment>,
    warnings: &mut Vec<Warning>,
) {
    let organic = cfg.organic_roads && cfg.curve_intensity > 0.0;
    let amplitude = cfg.curve_intensity * cfg.base_block_size * ORGANIC_AMPLITUDE_FACTOR;

    let last_v = layout.v_road_x.len() - 1;
    for (i, &x) in layout.v_road_x.iter().enumerate() {
        let kind = if i == 0 || i == last_v {
            RoadKind::Boundary
        } else {
            RoadKind::Orthogonal
        };
        let start = Vec2::new(x, 0.0);
        let end = Vec2::new(x, layout.extent.y);
        push_street(cfg, organic, amplitude, start, end, kind, roads, warnings);
    }

    let last_h = layout.h_road_y.len() - 1;
    for (j, &y) in layout.h_road_y.iter().enumerate() {
        let kind = if j == 0 || j == last_h {
            RoadKind::Boundary
        } else {
            RoadKind::Orthogonal
        };
        let start = Vec2::new(0.0, y);
        let end = Vec2::new(layout.extent.x, y);
        push_street(cfg, organic, amplitude, start, end, kind, roads, warnings);
    }
}

/// Validate and append one grid street, curving it when organic mode is on.
/// A non-positive computed length or width drops this one road with a
/// warning; the rest of the network is unaffected.
#[allow(clippy::too_many_arguments)]
fn push_street(
    cfg: &GridConfig,
    organic: bool,
    amplitude: f32,
    start: Vec2,
    end: Vec2,
    kind: RoadKind,
    roads: &mut Vec<RoadSegment>,
    warnings: &mut Vec<Warning>,
) {
    let index = roads.len();
    let length = (end - start).length();
    if length <= 0.0 || cfg.road_width <= 0.0 {
        let detail = format!("length {length}, width {}", cfg.road_width);
        log::warn!("road {index} skipped: {detail}");
        warnings.push(Warning::DegenerateRoad { index, detail });
        return;
    }
    let centerline = if organic {
        let mut road_rng = sub_rng(cfg.seed, index as u32, ROAD_SALT);
        curved_centerline(start, end, amplitude, &mut road_rng)
    } else {
        vec![start, end]
    };
    roads.push(RoadSegment {
        centerline,
        width: cfg.road_width,
        kind,
    });
}

/// Diagonal shortcuts: each adjacent cell pair, in both diagonal
/// directions, rolls `diagonal_frequency`% once.
fn diagonal_pass(
    cfg: &GridConfig,
    blocks: &[Block],
    rng: &mut GenRng,
    roads: &mut Vec<RoadSegment>,
    warnings: &mut Vec<Warning>,
) {
    let w = cfg.width as usize;
    let l = cfg.length as usize;
    let width = cfg.road_width * DIAGONAL_WIDTH_FACTOR;

    let try_connect = |a: usize, b: usize, rng: &mut GenRng| {
        if rng.0.gen_range(0.0..100.0) >= cfg.diagonal_frequency {
            return None;
        }
        Some((blocks[a].center(), blocks[b].center()))
    };

    let mut pairs = Vec::new();
    for j in 0..l {
        for i in 0..w {
            let idx = j * w + i;
            // Up-right neighbor.
            if i + 1 < w && j + 1 < l {
                if let Some(p) = try_connect(idx, idx + w + 1, rng) {
                    pairs.push(p);
                }
            }
            // Down-right neighbor.
            if i + 1 < w && j >= 1 {
                if let Some(p) = try_connect(idx, idx - w + 1, rng) {
                    pairs.push(p);
                }
            }
        }
    }

    for (start, end) in pairs {
        let index = roads.len();
        let length = (end - start).length();
        if length <= 0.0 || width <= 0.0 {
            let detail = format!("diagonal length {length}, width {width}");
            log::warn!("road {index} skipped: {detail}");
            warnings.push(Warning::DegenerateRoad { index, detail });
            continue;
        }
        roads.push(RoadSegment {
            centerline: vec![start, end],
            width,
            kind: RoadKind::Diagonal,
        });
    }
}

/// One intersection pad per interior grid vertex.
fn interior_intersections(
    cfg: &GridConfig,
    layout: &GridLayout,
    intersections: &mut Vec<Intersection>,
) {
    let size = cfg.road_width * cfg.intersection_size_factor;
    if size <= 0.0 {
        return;
    }
    for j in 1..cfg.length as usize {
        for i in 1..cfg.width as usize {
            intersections.push(Intersection {
                center: Vec2::new(layout.v_road_x[i], layout.h_road_y[j]),
                size,
            });
        }
    }
}
