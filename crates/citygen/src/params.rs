//! Data-driven generation parameters.
//!
//! Everything the surrounding tooling exposes as sliders/toggles lands in a
//! single [`GridConfig`] value; the engine is a pure function of it (plus
//! the embedded seed).

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_INTERSECTION_FACTOR;
use crate::grid::DistrictKind;

/// Global knob controlling how much block-size and building-shape diversity
/// is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VarietyMode {
    Uniform,
    Low,
    #[default]
    Medium,
    High,
    Extreme,
    /// Spatially-coherent variation: 3x3 super-cells share one draw.
    Districts,
}

impl VarietyMode {
    /// Block-size variation range for this mode.
    pub fn size_range(self) -> (f32, f32) {
        match self {
            VarietyMode::Uniform => (1.0, 1.0),
            VarietyMode::Low => (0.8, 1.2),
            VarietyMode::Medium => (0.6, 1.4),
            VarietyMode::High => (0.4, 1.6),
            VarietyMode::Extreme => (0.25, 2.0),
            VarietyMode::Districts => (0.7, 1.3),
        }
    }
}

/// Requested zone mix. Clamped and renormalized by the validator; whatever
/// is left after commercial + industrial goes to residential.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRatios {
    pub commercial: f32,
    pub residential: f32,
    pub industrial: f32,
}

impl ZoneRatios {
    pub fn sum(&self) -> f32 {
        self.commercial + self.residential + self.industrial
    }
}

impl Default for ZoneRatios {
    fn default() -> Self {
        Self {
            commercial: 0.2,
            residential: 0.6,
            industrial: 0.2,
        }
    }
}

/// Complete input to one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid cells along X.
    pub width: u32,
    /// Grid cells along Y.
    pub length: u32,
    /// Nominal block side before variation, world units.
    pub base_block_size: f32,
    /// Street width, world units.
    pub road_width: f32,
    /// City-wide floor cap.
    pub max_floors: u32,
    /// Sub-footprints per block, 1..=9.
    pub buildings_per_block: u32,
    pub variety: VarietyMode,
    pub zone_ratios: ZoneRatios,
    /// When false, every cell is residential with the default profile.
    pub district_mode: bool,
    /// Uniform-district override: one zone + preset profile everywhere.
    pub district: Option<DistrictKind>,
    /// Percent chance per adjacent diagonal cell pair of a shortcut road.
    pub diagonal_frequency: f32,
    /// Emit an `Intersection` at every interior grid vertex.
    pub intersections: bool,
    pub intersection_size_factor: f32,
    /// Replace straight centerlines with sine-harmonic curves.
    pub organic_roads: bool,
    pub curve_intensity: f32,
    /// Sidewalk margin is 0 when true: buildings and roads abut directly.
    pub seamless_roads: bool,
    pub sidewalk_width: f32,
    /// 0 = every building sits at its zone base height, 1 = full spread.
    pub height_variation: f32,
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 5,
            length: 5,
            base_block_size: 10.0,
            road_width: 4.0,
            max_floors: 20,
            buildings_per_block: 1,
            variety: VarietyMode::Medium,
            zone_ratios: ZoneRatios::default(),
            district_mode: true,
            district: None,
            diagonal_frequency: 0.0,
            intersections: false,
            intersection_size_factor: DEFAULT_INTERSECTION_FACTOR,
            organic_roads: false,
            curve_intensity: 0.0,
            seamless_roads: false,
            sidewalk_width: 1.0,
            height_variation: 0.5,
            seed: 42,
        }
    }
}

impl GridConfig {
    pub fn cell_count(&self) -> u32 {
        self.width * self.length
    }

    /// Effective sidewalk margin: zero in seamless mode.
    pub fn sidewalk(&self) -> f32 {
        if self.seamless_roads {
            0.0
        } else {
            self.sidewalk_width
        }
    }
}
