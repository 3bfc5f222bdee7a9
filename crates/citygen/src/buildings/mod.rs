mod placement;
pub mod types;

pub use placement::{height_bounds, plan_block_buildings};
pub use types::{
    pick_weighted, shape_weights, zone_preference, zone_weights, BuildingFootprint, BuildingShape,
    ALL_SHAPES,
};

use crate::blocks::Block;
use crate::error::Warning;
use crate::grid::ZoneProfiles;
use crate::params::GridConfig;
use crate::sim_rng::GenRng;

/// Plan buildings for every block, in block order. The running building
/// count lives entirely inside this call.
pub fn plan_buildings(
    cfg: &GridConfig,
    profiles: &ZoneProfiles,
    blocks: &[Block],
    rng: &mut GenRng,
    warnings: &mut Vec<Warning>,
) -> Vec<BuildingFootprint> {
    let mut buildings = Vec::with_capacity(blocks.len() * cfg.buildings_per_block as usize);
    for block in blocks {
        buildings.extend(plan_block_buildings(cfg, profiles, block, rng, warnings));
    }
    buildings
}
