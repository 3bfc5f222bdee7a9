//! Whole-pipeline tests over the public API.

use glam::Vec2;

use crate::grid::ZoneType;
use crate::params::{GridConfig, VarietyMode, ZoneRatios};
use crate::roads::RoadKind;
use crate::{generate, regenerate_roads, DistrictKind};

fn uniform_3x3() -> GridConfig {
    GridConfig {
        width: 3,
        length: 3,
        variety: VarietyMode::Uniform,
        zone_ratios: ZoneRatios {
            commercial: 0.0,
            residential: 1.0,
            industrial: 0.0,
        },
        ..GridConfig::default()
    }
}

#[test]
fn test_same_config_same_layout() {
    let cfg = GridConfig {
        variety: VarietyMode::Extreme,
        diagonal_frequency: 40.0,
        organic_roads: true,
        curve_intensity: 2.0,
        intersections: true,
        buildings_per_block: 2,
        seed: 7,
        ..GridConfig::default()
    };
    let a = generate(&cfg).unwrap();
    let b = generate(&cfg).unwrap();
    assert_eq!(a, b);

    let ja = serde_json::to_string(&a.layout).unwrap();
    let jb = serde_json::to_string(&b.layout).unwrap();
    assert_eq!(ja, jb);
}

#[test]
fn test_different_seeds_differ() {
    let a = generate(&GridConfig { seed: 1, ..GridConfig::default() }).unwrap();
    let b = generate(&GridConfig { seed: 2, ..GridConfig::default() }).unwrap();
    assert_ne!(a.layout, b.layout);
}

#[test]
fn test_roads_only_matches_full_run() {
    let cfg = GridConfig {
        diagonal_frequency: 60.0,
        organic_roads: true,
        curve_intensity: 1.5,
        intersections: true,
        seed: 99,
        ..GridConfig::default()
    };
    let full = generate(&cfg).unwrap();
    let roads_only = regenerate_roads(&cfg).unwrap();

    assert_eq!(full.layout.roads, roads_only.layout.roads);
    assert_eq!(full.layout.intersections, roads_only.layout.intersections);
    assert_eq!(full.layout.blocks, roads_only.layout.blocks);
    assert!(roads_only.layout.buildings.is_empty());
    assert_eq!(roads_only.layout.stats.building_count, 0);
}

#[test]
fn test_uniform_grid_reference_scenario() {
    // 3x3 uniform residential grid, base 10, road 4.
    let city = generate(&uniform_3x3()).unwrap();
    let layout = &city.layout;

    assert_eq!(layout.blocks.len(), 9);
    for block in &layout.blocks {
        assert_eq!(block.size, Vec2::splat(10.0));
        assert_eq!(block.zone, ZoneType::Residential);
    }
    // Block (0,0) sits inside the outer road ring.
    assert_eq!(layout.blocks[0].origin, Vec2::splat(4.0));
    // Next column starts one block plus one road further east.
    assert_eq!(layout.blocks[1].origin, Vec2::new(18.0, 4.0));

    // 4 vertical + 4 horizontal streets, no diagonals by default.
    assert_eq!(layout.roads.len(), 8);
    let boundary = layout
        .roads
        .iter()
        .filter(|r| r.kind == RoadKind::Boundary)
        .count();
    assert_eq!(boundary, 4);

    // One building per block, centered, shrunk by the sidewalk margin.
    assert_eq!(layout.buildings.len(), 9);
    for (b, block) in layout.buildings.iter().zip(&layout.blocks) {
        assert_eq!(b.position, block.center());
        assert_eq!(b.width, 8.0);
        assert_eq!(b.depth, 8.0);
        assert_eq!(b.zone, ZoneType::Residential);
    }

    assert!(city.warnings.is_empty());
}

#[test]
fn test_block_count_matches_grid() {
    for (w, l) in [(1, 1), (2, 7), (5, 5), (4, 6)] {
        let cfg = GridConfig { width: w, length: l, ..GridConfig::default() };
        let city = generate(&cfg).unwrap();
        assert_eq!(city.layout.blocks.len(), (w * l) as usize);
    }
}

#[test]
fn test_blocks_never_overlap() {
    let cfg = GridConfig {
        variety: VarietyMode::Extreme,
        seed: 3141,
        ..GridConfig::default()
    };
    let blocks = generate(&cfg).unwrap().layout.blocks;
    for (i, a) in blocks.iter().enumerate() {
        for b in blocks.iter().skip(i + 1) {
            let sep_x = a.origin.x + a.size.x <= b.origin.x || b.origin.x + b.size.x <= a.origin.x;
            let sep_y = a.origin.y + a.size.y <= b.origin.y || b.origin.y + b.size.y <= a.origin.y;
            assert!(
                sep_x || sep_y,
                "blocks {:?} and {:?} overlap",
                a.grid_pos,
                b.grid_pos
            );
        }
    }
}

#[test]
fn test_buildings_stay_inside_their_blocks() {
    let cfg = GridConfig {
        width: 3,
        length: 4,
        variety: VarietyMode::High,
        buildings_per_block: 4,
        seed: 17,
        ..GridConfig::default()
    };
    let city = generate(&cfg).unwrap();
    for b in &city.layout.buildings {
        let block = city
            .layout
            .blocks
            .iter()
            .find(|bl| {
                b.position.x >= bl.origin.x
                    && b.position.x <= bl.origin.x + bl.size.x
                    && b.position.y >= bl.origin.y
                    && b.position.y <= bl.origin.y + bl.size.y
            })
            .unwrap_or_else(|| panic!("building at {:?} is outside every block", b.position));
        let eps = 1e-3;
        assert!(b.position.x - b.width * 0.5 >= block.origin.x - eps);
        assert!(b.position.x + b.width * 0.5 <= block.origin.x + block.size.x + eps);
        assert!(b.position.y - b.depth * 0.5 >= block.origin.y - eps);
        assert!(b.position.y + b.depth * 0.5 <= block.origin.y + block.size.y + eps);
    }
}

#[test]
fn test_heights_respect_floor_caps() {
    let cfg = GridConfig {
        max_floors: 12,
        height_variation: 1.0,
        seed: 5,
        ..GridConfig::default()
    };
    let city = generate(&cfg).unwrap();
    // Towers can exceed the nominal cap by their style multiplier (1.5x).
    let hard_cap = 12.0 * 3.0 * 1.5;
    for b in &city.layout.buildings {
        assert!(b.height >= 3.0, "height {} below one floor", b.height);
        assert!(b.height <= hard_cap + 1e-3, "height {} above cap", b.height);
    }
}

#[test]
fn test_district_preset_overrides_zoning() {
    let cfg = GridConfig {
        district: Some(DistrictKind::Industrial),
        ..GridConfig::default()
    };
    let city = generate(&cfg).unwrap();
    assert!(city
        .layout
        .blocks
        .iter()
        .all(|b| b.zone == ZoneType::Industrial));
}

#[test]
fn test_district_mode_off_is_all_residential() {
    let cfg = GridConfig { district_mode: false, ..GridConfig::default() };
    let city = generate(&cfg).unwrap();
    assert!(city
        .layout
        .blocks
        .iter()
        .all(|b| b.zone == ZoneType::Residential));
}

#[test]
fn test_seamless_mode_removes_sidewalk_margin() {
    let cfg = GridConfig { seamless_roads: true, ..uniform_3x3() };
    let city = generate(&cfg).unwrap();
    for (b, block) in city.layout.buildings.iter().zip(&city.layout.blocks) {
        assert_eq!(b.width, block.size.x);
        assert_eq!(b.depth, block.size.y);
    }
}

#[test]
fn test_layout_roundtrips_through_json() {
    let cfg = GridConfig {
        diagonal_frequency: 100.0,
        intersections: true,
        organic_roads: true,
        curve_intensity: 1.0,
        buildings_per_block: 2,
        ..GridConfig::default()
    };
    let city = generate(&cfg).unwrap();
    let json = serde_json::to_string(&city.layout).unwrap();
    let back: crate::CityLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(city.layout, back);
}

#[test]
fn test_diagonals_and_intersections_appear() {
    let cfg = GridConfig {
        diagonal_frequency: 100.0,
        intersections: true,
        ..GridConfig::default()
    };
    let city = generate(&cfg).unwrap();
    assert!(city
        .layout
        .roads
        .iter()
        .any(|r| r.kind == RoadKind::Diagonal));
    // Interior crossings only: (w - 1) * (l - 1).
    assert_eq!(city.layout.intersections.len(), 16);
}
