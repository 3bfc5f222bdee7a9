//! The root aggregate a generation run produces. Immutable once returned;
//! the mesh-building collaborator walks it entity by entity.

use serde::{Deserialize, Serialize};

use crate::blocks::Block;
use crate::buildings::BuildingFootprint;
use crate::roads::{Intersection, RoadSegment};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CityStats {
    pub block_count: usize,
    pub building_count: usize,
    pub road_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLayout {
    pub blocks: Vec<Block>,
    pub roads: Vec<RoadSegment>,
    pub intersections: Vec<Intersection>,
    pub buildings: Vec<BuildingFootprint>,
    pub stats: CityStats,
}

impl CityLayout {
    pub fn new(
        blocks: Vec<Block>,
        roads: Vec<RoadSegment>,
        intersections: Vec<Intersection>,
        buildings: Vec<BuildingFootprint>,
    ) -> Self {
        let stats = CityStats {
            block_count: blocks.len(),
            building_count: buildings.len(),
            road_count: roads.len(),
        };
        Self {
            blocks,
            roads,
            intersections,
            buildings,
            stats,
        }
    }
}
