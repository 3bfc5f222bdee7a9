//! Zone assignment: ratio-weighted nearest-center growth, or one fixed
//! zone per district preset.
//!
//! Ratio mode scatters a handful of commercial/industrial "zone centers"
//! and grows each zone outward by Manhattan distance under a running
//! budget, so the realized mix never exceeds the requested ratios.
//! Everything left over is residential.

use rand::Rng;

use crate::grid::{GridPos, ZoneProfiles, ZoneType};
use crate::params::GridConfig;
use crate::sim_rng::GenRng;

/// Blocks per commercial zone center.
const BLOCKS_PER_COMMERCIAL_CENTER: u32 = 8;
/// Blocks per industrial zone center.
const BLOCKS_PER_INDUSTRIAL_CENTER: u32 = 12;
/// Center rejection-sampling attempts before accepting a crowded spot.
const CENTER_ATTEMPTS: u32 = 3;

/// Profile set for this run: defaults, or the district preset override.
pub fn zone_profiles(cfg: &GridConfig) -> ZoneProfiles {
    let mut profiles = ZoneProfiles::default();
    if let Some(kind) = cfg.district {
        *profiles.get_mut(kind.zone()) = kind.profile();
    }
    profiles
}

/// Assign a zone to every cell, row-major. Deterministic for a given seed.
pub fn assign_zones(cfg: &GridConfig, rng: &mut GenRng) -> Vec<ZoneType> {
    let cells = cfg.cell_count() as usize;

    if let Some(kind) = cfg.district {
        return vec![kind.zone(); cells];
    }
    if !cfg.district_mode {
        return vec![ZoneType::Residential; cells];
    }

    let commercial_target = (cfg.zone_ratios.commercial * cells as f32).round() as u32;
    let industrial_target = (cfg.zone_ratios.industrial * cells as f32).round() as u32;

    let mut centers: Vec<(GridPos, ZoneType)> = Vec::new();
    if commercial_target > 0 {
        let n = (commercial_target / BLOCKS_PER_COMMERCIAL_CENTER).max(1);
        place_centers(cfg, n, ZoneType::Commercial, &mut centers, rng);
    }
    if industrial_target > 0 {
        let n = (industrial_target / BLOCKS_PER_INDUSTRIAL_CENTER).max(1);
        place_centers(cfg, n, ZoneType::Industrial, &mut centers, rng);
    }
    if centers.is_empty() {
        return vec![ZoneType::Residential; cells];
    }

    // Every cell's candidate is the zone of its nearest center; cells claim
    // their candidate in ascending-distance order while the zone's budget
    // lasts. Ties break commercial < industrial, then cell index, keeping
    // the pass fully deterministic.
    let mut claims: Vec<(u32, u8, usize, ZoneType)> = Vec::with_capacity(cells);
    for idx in 0..cells {
        let pos = (idx as u32 % cfg.width, idx as u32 / cfg.width);
        let (dist, zone) = nearest_center(pos, &centers);
        claims.push((dist, zone_precedence(zone), idx, zone));
    }
    claims.sort_unstable_by_key(|&(dist, prec, idx, _)| (dist, prec, idx));

    let mut commercial_budget = commercial_target;
    let mut industrial_budget = industrial_target;
    let mut zones = vec![ZoneType::Residential; cells];
    for (_, _, idx, zone) in claims {
        let budget = match zone {
            ZoneType::Commercial => &mut commercial_budget,
            ZoneType::Industrial => &mut industrial_budget,
            _ => continue,
        };
        if *budget > 0 {
            *budget -= 1;
            zones[idx] = zone;
        }
    }
    zones
}

/// Scatter `count` centers of one zone, keeping them at least
/// `min(2, grid_min / count)` cells from every already-accepted center.
/// After three crowded draws the last candidate is accepted anyway.
fn place_centers(
    cfg: &GridConfig,
    count: u32,
    zone: ZoneType,
    centers: &mut Vec<(GridPos, ZoneType)>,
    rng: &mut GenRng,
) {
    let grid_min = cfg.width.min(cfg.length);
    let min_sep = 2.min(grid_min / count);
    for _ in 0..count {
        let mut candidate = (0, 0);
        for _ in 0..CENTER_ATTEMPTS {
            candidate = (
                rng.0.gen_range(0..cfg.width),
                rng.0.gen_range(0..cfg.length),
            );
            let clear = centers
                .iter()
                .all(|&(pos, _)| manhattan(pos, candidate) >= min_sep);
            if clear {
                break;
            }
        }
        centers.push((candidate, zone));
    }
}

fn nearest_center(pos: GridPos, centers: &[(GridPos, ZoneType)]) -> (u32, ZoneType) {
    let mut best = (u32::MAX, ZoneType::Residential);
    for &(center, zone) in centers {
        let d = manhattan(center, pos);
        if d < best.0 || (d == best.0 && zone_precedence(zone) < zone_precedence(best.1)) {
            best = (d, zone);
        }
    }
    best
}

fn zone_precedence(zone: ZoneType) -> u8 {
    match zone {
        ZoneType::Commercial => 0,
        ZoneType::Industrial => 1,
        ZoneType::Business => 2,
        ZoneType::Residential => 3,
    }
}

fn manhattan(a: GridPos, b: GridPos) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DistrictKind;
    use crate::params::ZoneRatios;

    fn count(zones: &[ZoneType], zone: ZoneType) -> usize {
        zones.iter().filter(|&&z| z == zone).count()
    }

    #[test]
    fn test_non_district_mode_is_all_residential() {
        let cfg = GridConfig { district_mode: false, ..GridConfig::default() };
        let zones = assign_zones(&cfg, &mut GenRng::from_seed_u64(cfg.seed));
        assert_eq!(zones.len(), 25);
        assert_eq!(count(&zones, ZoneType::Residential), 25);
    }

    #[test]
    fn test_uniform_district_fixes_zone_and_profile() {
        let cfg = GridConfig {
            district: Some(DistrictKind::Downtown),
            ..GridConfig::default()
        };
        let zones = assign_zones(&cfg, &mut GenRng::from_seed_u64(cfg.seed));
        assert_eq!(count(&zones, ZoneType::Commercial), 25);
        let profiles = zone_profiles(&cfg);
        assert_eq!(profiles.get(ZoneType::Commercial).min_floors, 3);
    }

    #[test]
    fn test_realized_counts_respect_budgets() {
        let cfg = GridConfig {
            width: 6,
            length: 6,
            zone_ratios: ZoneRatios { commercial: 0.25, residential: 0.5, industrial: 0.25 },
            ..GridConfig::default()
        };
        let zones = assign_zones(&cfg, &mut GenRng::from_seed_u64(cfg.seed));
        // round(0.25 * 36) = 9 for each non-residential zone.
        assert!(count(&zones, ZoneType::Commercial) <= 9);
        assert!(count(&zones, ZoneType::Industrial) <= 9);
        assert!(count(&zones, ZoneType::Residential) >= 18);
    }

    #[test]
    fn test_zero_ratio_places_no_zone() {
        let cfg = GridConfig {
            zone_ratios: ZoneRatios { commercial: 0.0, residential: 0.7, industrial: 0.3 },
            ..GridConfig::default()
        };
        let zones = assign_zones(&cfg, &mut GenRng::from_seed_u64(cfg.seed));
        assert_eq!(count(&zones, ZoneType::Commercial), 0);
        assert!(count(&zones, ZoneType::Industrial) > 0);
    }

    #[test]
    fn test_pure_residential_ratios() {
        let cfg = GridConfig {
            zone_ratios: ZoneRatios { commercial: 0.0, residential: 1.0, industrial: 0.0 },
            ..GridConfig::default()
        };
        let zones = assign_zones(&cfg, &mut GenRng::from_seed_u64(cfg.seed));
        assert_eq!(count(&zones, ZoneType::Residential), 25);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let cfg = GridConfig::default();
        let a = assign_zones(&cfg, &mut GenRng::from_seed_u64(7));
        let b = assign_zones(&cfg, &mut GenRng::from_seed_u64(7));
        let c = assign_zones(&cfg, &mut GenRng::from_seed_u64(8));
        assert_eq!(a, b);
        // A different seed moves the centers; 25 cells make a collision
        // across the whole map vanishingly unlikely.
        assert_ne!(a, c);
    }

    #[test]
    fn test_commercial_cells_form_contiguous_clumps() {
        // Claimed in ascending-distance order, every commercial cell must
        // touch another commercial cell or sit on a center -- i.e. the zone
        // grows outward instead of scattering. With a budget of 30 cells
        // and 3 centers, at least one clump has more than one cell, so a
        // commercial cell with zero commercial neighbors 4-ways would mean
        // distance ordering was ignored.
        let cfg = GridConfig {
            width: 10,
            length: 10,
            zone_ratios: ZoneRatios { commercial: 0.3, residential: 0.6, industrial: 0.1 },
            ..GridConfig::default()
        };
        let zones = assign_zones(&cfg, &mut GenRng::from_seed_u64(cfg.seed));
        let commercial = count(&zones, ZoneType::Commercial);
        assert!(commercial >= 1 && commercial <= 30);
        let has_neighbor = |i: usize| {
            let (x, y) = (i % 10, i / 10);
            let mut n = Vec::new();
            if x > 0 { n.push(i - 1); }
            if x < 9 { n.push(i + 1); }
            if y > 0 { n.push(i - 10); }
            if y < 9 { n.push(i + 10); }
            n.into_iter().any(|j| zones[j] == ZoneType::Commercial)
        };
        let isolated = (0..zones.len())
            .filter(|&i| zones[i] == ZoneType::Commercial && !has_neighbor(i))
            .count();
        // Centers themselves may stand alone when their budget ran out;
        // allow one isolated cell per center.
        assert!(isolated <= 3, "{isolated} isolated commercial cells");
    }
}
