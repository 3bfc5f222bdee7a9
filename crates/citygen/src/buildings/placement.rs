//! Building placement: block subdivision, shape selection, height model.

use glam::Vec2;
use rand::Rng;

use crate::blocks::Block;
use crate::config::{FLOOR_HEIGHT, MIN_FOOTPRINT_DIM, SUBLOT_INSET_FRACTION};
use crate::error::Warning;
use crate::grid::{ZoneProfile, ZoneProfiles, ZoneType};
use crate::params::GridConfig;
use crate::sim_rng::GenRng;

use super::types::{
    pick_weighted, shape_weights, zone_preference, zone_weights, BuildingFootprint, BuildingShape,
};

/// Plan all buildings for one block. Degenerate geometry (no buildable
/// area, collapsed slot) is skipped with a warning; the rest of the block
/// still gets its buildings.
pub fn plan_block_buildings(
    cfg: &GridConfig,
    profiles: &ZoneProfiles,
    block: &Block,
    rng: &mut GenRng,
    warnings: &mut Vec<Warning>,
) -> Vec<BuildingFootprint> {
    let sidewalk = cfg.sidewalk();
    let buildable_size = block.size - Vec2::splat(2.0 * sidewalk);
    if buildable_size.x <= 0.0 || buildable_size.y <= 0.0 {
        log::warn!("block {:?} has no buildable area", block.grid_pos);
        warnings.push(Warning::DegenerateBlock {
            grid_pos: block.grid_pos,
        });
        return Vec::new();
    }
    let buildable_origin = block.origin + Vec2::splat(sidewalk);

    let profile = profiles.get(block.zone);
    let (_, zone_max) = floor_range(cfg, profile);

    let mut buildings = Vec::with_capacity(cfg.buildings_per_block as usize);
    let slots = subdivide(buildable_origin, buildable_size, cfg.buildings_per_block);
    for (slot_idx, (slot_origin, slot_size)) in slots.into_iter().enumerate() {
        let (origin, size) = if cfg.buildings_per_block > 1 {
            inset_slot(slot_origin, slot_size)
        } else {
            (slot_origin, slot_size)
        };
        if size.x < MIN_FOOTPRINT_DIM || size.y < MIN_FOOTPRINT_DIM {
            log::warn!(
                "building slot {slot_idx} in block {:?} is below the minimum footprint",
                block.grid_pos
            );
            warnings.push(Warning::DegenerateBuilding {
                grid_pos: block.grid_pos,
                slot: slot_idx,
            });
            continue;
        }

        let shape = select_shape(cfg, block.zone, zone_max, size, rng);
        let height = building_height(cfg, profile, shape, rng);
        buildings.push(BuildingFootprint {
            position: origin + size * 0.5,
            width: size.x,
            depth: size.y,
            height,
            shape,
            zone: block.zone,
        });
    }
    buildings
}

/// Fixed subdivision table: 1 whole, 2-3 along the longer axis, 4 as 2x2,
/// 5-6 from a 3x2 grid, 7-9 from a 3x3 grid (truncated to count).
fn subdivide(origin: Vec2, size: Vec2, count: u32) -> Vec<(Vec2, Vec2)> {
    let wide = size.x >= size.y;
    let (nx, ny) = match count {
        1 => (1, 1),
        2 => {
            if wide {
                (2, 1)
            } else {
                (1, 2)
            }
        }
        3 => {
            if wide {
                (3, 1)
            } else {
                (1, 3)
            }
        }
        4 => (2, 2),
        5 | 6 => {
            if wide {
                (3, 2)
            } else {
                (2, 3)
            }
        }
        _ => (3, 3),
    };
    grid_slots(origin, size, nx, ny, count as usize)
}

fn grid_slots(origin: Vec2, size: Vec2, nx: u32, ny: u32, count: usize) -> Vec<(Vec2, Vec2)> {
    let cell = Vec2::new(size.x / nx as f32, size.y / ny as f32);
    let mut slots = Vec::with_capacity(count);
    'outer: for row in 0..ny {
        for col in 0..nx {
            if slots.len() == count {
                break 'outer;
            }
            let corner = origin + Vec2::new(col as f32 * cell.x, row as f32 * cell.y);
            slots.push((corner, cell));
        }
    }
    slots
}

/// Shrink a multi-building slot so neighbors never touch.
fn inset_slot(origin: Vec2, size: Vec2) -> (Vec2, Vec2) {
    let inset = SUBLOT_INSET_FRACTION * size.x.min(size.y);
    (
        origin + Vec2::splat(inset),
        size - Vec2::splat(2.0 * inset),
    )
}

/// Floor range a zone reaches under the city-wide cap. The zone's minimum
/// is itself capped: a city capped at 1 floor holds every zone at 1 floor,
/// including zones whose profile asks for more.
fn floor_range(cfg: &GridConfig, profile: &ZoneProfile) -> (u32, u32) {
    let min = profile.min_floors.min(cfg.max_floors);
    let max = ((cfg.max_floors as f32 * profile.max_floors_multiplier).round() as u32)
        .clamp(min, cfg.max_floors);
    (min, max)
}

/// Draw from the variety bag, re-bias toward the zone, then downgrade to
/// the first fallback whose footprint/floor minimums the slot satisfies.
fn select_shape(
    cfg: &GridConfig,
    zone: ZoneType,
    zone_max: u32,
    slot: Vec2,
    rng: &mut GenRng,
) -> BuildingShape {
    let mut shape = pick_weighted(&mut rng.0, shape_weights(cfg.variety));
    if rng.0.gen::<f32>() < 1.0 - zone_preference(zone, shape) {
        shape = pick_weighted(&mut rng.0, &zone_weights(zone));
    }
    if shape_fits(shape, slot, zone_max) {
        return shape;
    }
    for fallback in [
        BuildingShape::Tower,
        BuildingShape::Stepped,
        BuildingShape::Rectangular,
    ] {
        if shape_fits(fallback, slot, zone_max) {
            return fallback;
        }
    }
    BuildingShape::Rectangular
}

fn shape_fits(shape: BuildingShape, slot: Vec2, zone_max: u32) -> bool {
    slot.x.min(slot.y) >= shape.min_dimension() && zone_max >= shape.min_floors()
}

/// Base floor draw from the zone range, spread by `height_variation`
/// within the zone/shape bounds, then clamped back into them.
fn building_height(
    cfg: &GridConfig,
    profile: &ZoneProfile,
    shape: BuildingShape,
    rng: &mut GenRng,
) -> f32 {
    let (zone_min, zone_max) = floor_range(cfg, profile);
    let base_floors = if zone_max > zone_min {
        rng.0.gen_range(zone_min..=zone_max)
    } else {
        zone_min
    };
    let base = base_floors as f32 * FLOOR_HEIGHT;

    let (min_mult, max_mult) = shape.height_multipliers();
    let min_h = zone_min as f32 * FLOOR_HEIGHT * min_mult;
    let max_h = (zone_max as f32 * FLOOR_HEIGHT * max_mult).max(min_h);
    let spread = (max_h - min_h) * cfg.height_variation * 0.5;
    let perturbed = if spread > 0.0 {
        base + rng.0.gen_range(-spread..=spread)
    } else {
        base
    };
    perturbed.clamp(min_h, max_h)
}

/// Height bounds for a zone/shape pair, exposed so callers (and tests) can
/// check every generated building against its envelope.
pub fn height_bounds(cfg: &GridConfig, profile: &ZoneProfile, shape: BuildingShape) -> (f32, f32) {
    let (zone_min, zone_max) = floor_range(cfg, profile);
    let (min_mult, max_mult) = shape.height_multipliers();
    let min_h = zone_min as f32 * FLOOR_HEIGHT * min_mult;
    let max_h = (zone_max as f32 * FLOOR_HEIGHT * max_mult).max(min_h);
    (min_h, max_h)
}
