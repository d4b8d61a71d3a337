//! Enumeration of grid-cell centers surrounding query points
//!
//! For each query point, the crate finds every center of a regular square grid
//! with a given cell size that falls within a fixed 250x250-unit window around
//! the point, then returns the Cartesian product of the matching x and y
//! offsets paired with the originating coordinate.

#![forbid(unsafe_code)]

/// Error types for validation and enumeration operations
pub mod error;
/// Spatial lattice generation and grid-center enumeration
pub mod spatial;

pub use error::{Axis, GridError, Result};
pub use spatial::enumerate::{
    DEFAULT_CELL_SIZE, SEARCH_HALF_WIDTH, enumerate_grid_centers, enumerate_grid_centers_default,
};
pub use spatial::lattice::{axis_candidates, is_cell_center};
pub use spatial::table::{CenterRow, CenterTable};
