//! Deterministic procedural city layouts.
//!
//! The crate turns a [`GridConfig`] into a [`CityLayout`]: non-overlapping
//! zoned blocks on a road grid, plus intersections and building
//! footprints. Everything is pure computation over the config; the same
//! config (seed included) always produces the same layout, so callers can
//! ship the config instead of the geometry.
//!
//! ```
//! use citygen::{generate, GridConfig};
//!
//! let city = generate(&GridConfig::default()).unwrap();
//! assert_eq!(city.layout.stats.block_count, 25);
//! ```

pub mod blocks;
pub mod buildings;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod layout;
pub mod params;
pub mod roads;
pub mod sim_rng;
pub mod validate;
pub mod zoning;

#[cfg(test)]
mod integration_tests;

pub use blocks::Block;
pub use buildings::{BuildingFootprint, BuildingShape};
pub use error::{Axis, GenError, ValidationError, Warning};
pub use generator::{generate, regenerate_roads, Generated};
pub use grid::{DistrictKind, ZoneType};
pub use layout::{CityLayout, CityStats};
pub use params::{GridConfig, VarietyMode, ZoneRatios};
pub use roads::{Intersection, RoadKind, RoadSegment};
