use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::ZoneType;
use crate::params::VarietyMode;

/// Footprint silhouette handed to the mesh builder. Selection is weighted
/// by variety level, then re-biased toward the zone's preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingShape {
    Rectangular,
    LShaped,
    UShaped,
    TShaped,
    Tower,
    Stepped,
    Circular,
    Elliptical,
    Pyramid,
    Complex,
}

pub const ALL_SHAPES: [BuildingShape; 10] = [
    BuildingShape::Rectangular,
    BuildingShape::LShaped,
    BuildingShape::UShaped,
    BuildingShape::TShaped,
    BuildingShape::Tower,
    BuildingShape::Stepped,
    BuildingShape::Circular,
    BuildingShape::Elliptical,
    BuildingShape::Pyramid,
    BuildingShape::Complex,
];

impl BuildingShape {
    /// Smallest footprint side this shape reads as itself at. Compound
    /// shapes need room for their cutouts.
    pub fn min_dimension(self) -> f32 {
        match self {
            BuildingShape::Rectangular => 0.0,
            BuildingShape::Tower => 3.0,
            BuildingShape::Stepped => 4.0,
            BuildingShape::Circular | BuildingShape::Elliptical => 4.0,
            BuildingShape::Pyramid => 5.0,
            BuildingShape::LShaped | BuildingShape::UShaped | BuildingShape::TShaped => 6.0,
            BuildingShape::Complex => 8.0,
        }
    }

    /// Floor count below which this shape degenerates (a 2-floor tower is
    /// just a box).
    pub fn min_floors(self) -> u32 {
        match self {
            BuildingShape::Tower => 8,
            BuildingShape::Complex => 5,
            BuildingShape::Stepped => 4,
            BuildingShape::Pyramid => 3,
            _ => 1,
        }
    }

    /// `(min, max)` multipliers applied to the zone's height bounds.
    /// Vertical shapes reach higher; sprawling compound shapes stay lower.
    pub fn height_multipliers(self) -> (f32, f32) {
        match self {
            BuildingShape::Tower => (1.2, 1.5),
            BuildingShape::Stepped => (1.1, 1.3),
            BuildingShape::Complex => (1.0, 1.25),
            BuildingShape::Pyramid => (1.0, 1.2),
            BuildingShape::Rectangular => (1.0, 1.0),
            BuildingShape::Circular | BuildingShape::Elliptical => (1.0, 0.9),
            BuildingShape::LShaped | BuildingShape::UShaped | BuildingShape::TShaped => (1.0, 0.8),
        }
    }
}

// ---------------------------------------------------------------------------
// Shape weight tables, percent per variety level
// ---------------------------------------------------------------------------

const SHAPE_WEIGHTS_LOW: &[(BuildingShape, u32)] = &[
    (BuildingShape::Rectangular, 50),
    (BuildingShape::Tower, 20),
    (BuildingShape::Stepped, 15),
    (BuildingShape::LShaped, 10),
    (BuildingShape::Circular, 5),
];

const SHAPE_WEIGHTS_MEDIUM: &[(BuildingShape, u32)] = &[
    (BuildingShape::Rectangular, 35),
    (BuildingShape::Tower, 15),
    (BuildingShape::Stepped, 12),
    (BuildingShape::LShaped, 10),
    (BuildingShape::UShaped, 8),
    (BuildingShape::TShaped, 6),
    (BuildingShape::Circular, 5),
    (BuildingShape::Complex, 4),
    (BuildingShape::Elliptical, 3),
    (BuildingShape::Pyramid, 2),
];

const SHAPE_WEIGHTS_HIGH: &[(BuildingShape, u32)] = &[
    (BuildingShape::Rectangular, 20),
    (BuildingShape::Tower, 15),
    (BuildingShape::Stepped, 12),
    (BuildingShape::LShaped, 11),
    (BuildingShape::UShaped, 9),
    (BuildingShape::TShaped, 8),
    (BuildingShape::Complex, 8),
    (BuildingShape::Circular, 7),
    (BuildingShape::Elliptical, 5),
    (BuildingShape::Pyramid, 5),
];

const SHAPE_WEIGHTS_EXTREME: &[(BuildingShape, u32)] = &[
    (BuildingShape::Rectangular, 10),
    (BuildingShape::LShaped, 10),
    (BuildingShape::UShaped, 10),
    (BuildingShape::TShaped, 10),
    (BuildingShape::Tower, 10),
    (BuildingShape::Stepped, 10),
    (BuildingShape::Circular, 10),
    (BuildingShape::Elliptical, 10),
    (BuildingShape::Pyramid, 10),
    (BuildingShape::Complex, 10),
];

/// Variety-level shape bag. `Uniform` and `Districts` use the default
/// (medium) bag: those modes flatten block sizes, not silhouettes.
pub fn shape_weights(variety: VarietyMode) -> &'static [(BuildingShape, u32)] {
    match variety {
        VarietyMode::Low => SHAPE_WEIGHTS_LOW,
        VarietyMode::Uniform | VarietyMode::Medium | VarietyMode::Districts => {
            SHAPE_WEIGHTS_MEDIUM
        }
        VarietyMode::High => SHAPE_WEIGHTS_HIGH,
        VarietyMode::Extreme => SHAPE_WEIGHTS_EXTREME,
    }
}

/// How much this zone likes this shape, in [0, 1]. A draw from the variety
/// bag survives with this probability; otherwise it is redrawn from the
/// zone's own bag.
pub fn zone_preference(zone: ZoneType, shape: BuildingShape) -> f32 {
    use BuildingShape::*;
    match zone {
        ZoneType::Residential => match shape {
            Rectangular => 0.9,
            LShaped => 0.7,
            UShaped => 0.6,
            TShaped => 0.5,
            Stepped => 0.4,
            Circular | Elliptical => 0.3,
            Tower | Complex => 0.2,
            Pyramid => 0.1,
        },
        ZoneType::Commercial => match shape {
            Tower => 0.9,
            Rectangular => 0.8,
            Stepped => 0.7,
            Complex => 0.6,
            Circular | Elliptical => 0.5,
            LShaped | UShaped | TShaped => 0.4,
            Pyramid => 0.3,
        },
        ZoneType::Industrial => match shape {
            Rectangular => 0.95,
            LShaped => 0.6,
            UShaped => 0.5,
            Complex | TShaped => 0.4,
            Stepped => 0.3,
            Circular | Elliptical => 0.15,
            Tower => 0.1,
            Pyramid => 0.05,
        },
        ZoneType::Business => match shape {
            Tower => 0.95,
            Stepped => 0.8,
            Complex | Rectangular => 0.7,
            Elliptical => 0.45,
            Circular => 0.4,
            Pyramid => 0.35,
            LShaped | UShaped | TShaped => 0.3,
        },
    }
}

/// The zone's own bag: preference factors scaled to integer weights.
pub fn zone_weights(zone: ZoneType) -> [(BuildingShape, u32); 10] {
    ALL_SHAPES.map(|shape| (shape, (zone_preference(zone, shape) * 100.0) as u32))
}

/// Cumulative-weight draw from a `(shape, weight)` table.
pub fn pick_weighted(rng: &mut impl Rng, table: &[(BuildingShape, u32)]) -> BuildingShape {
    let total: u32 = table.iter().map(|&(_, w)| w).sum();
    let mut roll = rng.gen_range(0..total);
    for &(shape, weight) in table {
        if roll < weight {
            return shape;
        }
        roll -= weight;
    }
    // Unreachable for a non-empty table; keep the sampler total.
    table[table.len() - 1].0
}

/// One planned building, positioned by its footprint center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingFootprint {
    pub position: Vec2,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub shape: BuildingShape,
    pub zone: ZoneType,
}
