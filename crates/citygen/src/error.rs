// ---------------------------------------------------------------------------
// Error taxonomy: fatal errors returned before generation, non-fatal warnings
// collected alongside a successful layout.
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which grid dimension an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Width,
    Length,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Length => write!(f, "length"),
        }
    }
}

/// Fatal input errors detected by the validator before any generation work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    /// A grid dimension is outside [1, 50].
    GridDimension { axis: Axis, value: u32 },
    /// `width * length` exceeds the hard cell cap.
    TooManyBlocks { cells: u32 },
    /// Road width must be positive and finite.
    RoadWidth(f32),
    /// Base block size must be positive and finite.
    BlockSize(f32),
    /// Max floors outside [1, 100].
    MaxFloors(u32),
    /// Buildings per block outside [1, 9].
    BuildingsPerBlock(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::GridDimension { axis, value } => {
                write!(f, "grid {axis} {value} outside [1, 50]")
            }
            ValidationError::TooManyBlocks { cells } => {
                write!(f, "grid of {cells} cells exceeds the 100-cell cap")
            }
            ValidationError::RoadWidth(w) => write!(f, "road width {w} must be > 0"),
            ValidationError::BlockSize(s) => write!(f, "base block size {s} must be > 0"),
            ValidationError::MaxFloors(n) => write!(f, "max floors {n} outside [1, 100]"),
            ValidationError::BuildingsPerBlock(n) => {
                write!(f, "buildings per block {n} outside [1, 9]")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Fatal generation errors. Returned before any zone/block computation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GenError {
    Validation(ValidationError),
    /// The request exceeds the performance guard. Rejecting is deliberate:
    /// the alternative of silently shrinking the grid hides the problem
    /// from the caller.
    PerformanceLimit { blocks: u32, buildings: u32 },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Validation(e) => write!(f, "invalid parameters: {e}"),
            GenError::PerformanceLimit { blocks, buildings } => write!(
                f,
                "performance limit exceeded: {blocks} blocks / {buildings} buildings \
                 (caps: 25 blocks, 50 buildings)"
            ),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Validation(e) => Some(e),
            GenError::PerformanceLimit { .. } => None,
        }
    }
}

impl From<ValidationError> for GenError {
    fn from(e: ValidationError) -> Self {
        GenError::Validation(e)
    }
}

/// Non-fatal, per-entity recoveries. The entity is skipped and generation
/// continues; callers receive the full list next to the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// A road computed a non-positive length or width and was dropped.
    DegenerateRoad { index: usize, detail: String },
    /// A block's buildable area vanished after the sidewalk margin.
    DegenerateBlock { grid_pos: (u32, u32) },
    /// One building slot inside a block came out below the minimum
    /// footprint after the inset.
    DegenerateBuilding { grid_pos: (u32, u32), slot: usize },
    /// Zone assignment fell back to a default (ratio sum zero, no usable
    /// centers, ...). Not an error to the caller.
    ZoneFallback { detail: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DegenerateRoad { index, detail } => {
                write!(f, "road {index} skipped: {detail}")
            }
            Warning::DegenerateBlock { grid_pos } => {
                write!(f, "block ({}, {}) has no buildable area", grid_pos.0, grid_pos.1)
            }
            Warning::DegenerateBuilding { grid_pos, slot } => write!(
                f,
                "building slot {slot} in block ({}, {}) skipped",
                grid_pos.0, grid_pos.1
            ),
            Warning::ZoneFallback { detail } => write!(f, "zone fallback: {detail}"),
        }
    }
}
