//! The generation pipeline: validate, zone, size, roads, buildings.
//!
//! `generate` is a pure function of the [`GridConfig`] (the seed included);
//! `regenerate_roads` runs the identical pipeline but stops before the
//! building pass, so callers can rebuild streets and sidewalks while
//! keeping the buildings they already hold. Road randomness draws strictly
//! before building randomness, which is what makes the two entry points
//! agree on the street network for the same seed.

use crate::blocks::generate_blocks;
use crate::buildings::plan_buildings;
use crate::config::{MAX_GUARDED_BLOCKS, MAX_GUARDED_BUILDINGS};
use crate::error::{GenError, Warning};
use crate::layout::CityLayout;
use crate::params::GridConfig;
use crate::roads::plan_roads;
use crate::sim_rng::GenRng;
use crate::validate::validate;
use crate::zoning::{assign_zones, zone_profiles};

/// A successful run: the layout plus every per-entity recovery that
/// happened along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub layout: CityLayout,
    pub warnings: Vec<Warning>,
}

/// Generate a complete city layout.
pub fn generate(raw: &GridConfig) -> Result<Generated, GenError> {
    run(raw, true)
}

/// Regenerate only roads and intersections: `buildings` stays empty and
/// the caller keeps whatever building data it already has. Blocks are
/// still produced (the street geometry depends on them).
pub fn regenerate_roads(raw: &GridConfig) -> Result<Generated, GenError> {
    run(raw, false)
}

fn run(raw: &GridConfig, with_buildings: bool) -> Result<Generated, GenError> {
    // Guard before validation so an oversized request fails the same way
    // from every entry point, before any generation work.
    let blocks = raw.width.saturating_mul(raw.length);
    let buildings = blocks.saturating_mul(raw.buildings_per_block.max(1));
    if blocks > MAX_GUARDED_BLOCKS || buildings > MAX_GUARDED_BUILDINGS {
        return Err(GenError::PerformanceLimit { blocks, buildings });
    }

    let validated = validate(raw)?;
    let cfg = &validated.config;

    let mut warnings = Vec::new();
    if validated.ratio_fallback {
        warnings.push(Warning::ZoneFallback {
            detail: "zone ratio sum was 0; using the default 0.2/0.6/0.2 split".into(),
        });
    }

    let mut rng = GenRng::from_seed_u64(cfg.seed);
    let profiles = zone_profiles(cfg);
    let zones = assign_zones(cfg, &mut rng);
    let (blocks, grid_layout) = generate_blocks(cfg, &zones, &profiles, &mut rng);
    let (roads, intersections) = plan_roads(cfg, &grid_layout, &blocks, &mut rng, &mut warnings);

    let buildings = if with_buildings {
        plan_buildings(cfg, &profiles, &blocks, &mut rng, &mut warnings)
    } else {
        Vec::new()
    };

    Ok(Generated {
        layout: CityLayout::new(blocks, roads, intersections, buildings),
        warnings,
    })
}
