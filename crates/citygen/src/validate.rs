//! Parameter validation: hard range checks, soft clamps.
//!
//! Hard failures return a [`ValidationError`] before any generation work.
//! Recoverable oddities (ratio sum zero, out-of-range aesthetics knobs) are
//! clamped on the returned copy; ratio fallback is surfaced through the
//! warning channel by the assembler.

use crate::config::{MAX_BUILDINGS_PER_BLOCK, MAX_FLOORS_CAP, MAX_GRID_CELLS, MAX_GRID_DIM};
use crate::error::{Axis, ValidationError};
use crate::params::{GridConfig, ZoneRatios};

/// Outcome of validation: the sanitized config plus whether the zone ratios
/// had to fall back to the default split.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub config: GridConfig,
    pub ratio_fallback: bool,
}

pub fn validate(raw: &GridConfig) -> Result<Validated, ValidationError> {
    if raw.width < 1 || raw.width > MAX_GRID_DIM {
        return Err(ValidationError::GridDimension {
            axis: Axis::Width,
            value: raw.width,
        });
    }
    if raw.length < 1 || raw.length > MAX_GRID_DIM {
        return Err(ValidationError::GridDimension {
            axis: Axis::Length,
            value: raw.length,
        });
    }
    let cells = raw.width * raw.length;
    if cells > MAX_GRID_CELLS {
        return Err(ValidationError::TooManyBlocks { cells });
    }
    if !raw.road_width.is_finite() || raw.road_width <= 0.0 {
        return Err(ValidationError::RoadWidth(raw.road_width));
    }
    if !raw.base_block_size.is_finite() || raw.base_block_size <= 0.0 {
        return Err(ValidationError::BlockSize(raw.base_block_size));
    }
    if raw.max_floors < 1 || raw.max_floors > MAX_FLOORS_CAP {
        return Err(ValidationError::MaxFloors(raw.max_floors));
    }
    if raw.buildings_per_block < 1 || raw.buildings_per_block > MAX_BUILDINGS_PER_BLOCK {
        return Err(ValidationError::BuildingsPerBlock(raw.buildings_per_block));
    }

    let mut config = raw.clone();
    let (ratios, ratio_fallback) = normalize_ratios(&raw.zone_ratios);
    config.zone_ratios = ratios;
    config.height_variation = clamp_finite(raw.height_variation, 0.0, 1.0);
    config.diagonal_frequency = clamp_finite(raw.diagonal_frequency, 0.0, 100.0);
    config.curve_intensity = clamp_finite(raw.curve_intensity, 0.0, 4.0);
    config.sidewalk_width = clamp_finite(raw.sidewalk_width, 0.0, f32::MAX);
    config.intersection_size_factor = clamp_finite(raw.intersection_size_factor, 0.0, f32::MAX);

    Ok(Validated {
        config,
        ratio_fallback,
    })
}

/// Clamp each ratio to [0, 1] and renormalize to sum 1. A zero (or
/// non-finite) sum falls back to the default 0.2 / 0.6 / 0.2 split.
fn normalize_ratios(ratios: &ZoneRatios) -> (ZoneRatios, bool) {
    let c = clamp_finite(ratios.commercial, 0.0, 1.0);
    let r = clamp_finite(ratios.residential, 0.0, 1.0);
    let i = clamp_finite(ratios.industrial, 0.0, 1.0);
    let sum = c + r + i;
    if sum <= 0.0 {
        return (ZoneRatios::default(), true);
    }
    (
        ZoneRatios {
            commercial: c / sum,
            residential: r / sum,
            industrial: i / sum,
        },
        false,
    )
}

fn clamp_finite(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> GridConfig {
        GridConfig::default()
    }

    #[test]
    fn test_accepts_default_config() {
        let v = validate(&base()).unwrap();
        assert!(!v.ratio_fallback);
        assert_eq!(v.config.width, 5);
    }

    #[test]
    fn test_rejects_zero_width() {
        let cfg = GridConfig { width: 0, ..base() };
        assert_eq!(
            validate(&cfg).unwrap_err(),
            ValidationError::GridDimension { axis: Axis::Width, value: 0 }
        );
    }

    #[test]
    fn test_rejects_oversized_dimension() {
        let cfg = GridConfig { length: 51, ..base() };
        assert!(matches!(
            validate(&cfg).unwrap_err(),
            ValidationError::GridDimension { axis: Axis::Length, .. }
        ));
    }

    #[test]
    fn test_rejects_too_many_cells() {
        // Each dimension is in range but the product blows the cap.
        let cfg = GridConfig { width: 11, length: 10, ..base() };
        assert_eq!(
            validate(&cfg).unwrap_err(),
            ValidationError::TooManyBlocks { cells: 110 }
        );
    }

    #[test]
    fn test_rejects_bad_road_width() {
        for w in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let cfg = GridConfig { road_width: w, ..base() };
            assert!(matches!(validate(&cfg).unwrap_err(), ValidationError::RoadWidth(_)));
        }
    }

    #[test]
    fn test_rejects_bad_floor_and_building_counts() {
        let cfg = GridConfig { max_floors: 0, ..base() };
        assert!(matches!(validate(&cfg).unwrap_err(), ValidationError::MaxFloors(0)));
        let cfg = GridConfig { max_floors: 101, ..base() };
        assert!(matches!(validate(&cfg).unwrap_err(), ValidationError::MaxFloors(101)));
        let cfg = GridConfig { buildings_per_block: 10, ..base() };
        assert!(matches!(
            validate(&cfg).unwrap_err(),
            ValidationError::BuildingsPerBlock(10)
        ));
    }

    #[test]
    fn test_ratios_renormalized() {
        let cfg = GridConfig {
            zone_ratios: ZoneRatios { commercial: 2.0, residential: 1.0, industrial: -0.5 },
            ..base()
        };
        let v = validate(&cfg).unwrap();
        assert!(!v.ratio_fallback);
        // 2.0 clamps to 1.0, -0.5 clamps to 0.0, so the split is 0.5 / 0.5 / 0.
        assert!((v.config.zone_ratios.sum() - 1.0).abs() < 1e-6);
        assert!((v.config.zone_ratios.commercial - 0.5).abs() < 1e-6);
        assert_eq!(v.config.zone_ratios.industrial, 0.0);
    }

    #[test]
    fn test_zero_ratio_sum_falls_back() {
        let cfg = GridConfig {
            zone_ratios: ZoneRatios { commercial: 0.0, residential: 0.0, industrial: 0.0 },
            ..base()
        };
        let v = validate(&cfg).unwrap();
        assert!(v.ratio_fallback);
        assert_eq!(v.config.zone_ratios, ZoneRatios::default());
    }

    #[test]
    fn test_aesthetic_knobs_clamped() {
        let cfg = GridConfig {
            height_variation: 3.0,
            diagonal_frequency: 250.0,
            curve_intensity: -1.0,
            sidewalk_width: -2.0,
            ..base()
        };
        let v = validate(&cfg).unwrap();
        assert_eq!(v.config.height_variation, 1.0);
        assert_eq!(v.config.diagonal_frequency, 100.0);
        assert_eq!(v.config.curve_intensity, 0.0);
        assert_eq!(v.config.sidewalk_width, 0.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let cfg = GridConfig {
            zone_ratios: ZoneRatios { commercial: 5.0, residential: 0.0, industrial: 0.0 },
            ..base()
        };
        let before = cfg.clone();
        let _ = validate(&cfg).unwrap();
        assert_eq!(cfg, before);
    }
}
