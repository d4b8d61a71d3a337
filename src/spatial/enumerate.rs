//! Grid-center enumeration around query points
//!
//! For each query point the enumerator collects the cell-center offsets of
//! both axes inside a fixed square window, then emits their Cartesian
//! product tagged with the originating coordinate. The computation is pure:
//! each call allocates its own output table and no state persists between
//! calls, so callers may shard the input across independent calls and
//! concatenate the results.

use crate::error::{Axis, GridError, Result};
use crate::spatial::lattice::axis_candidates;
use crate::spatial::table::{CenterRow, CenterTable};

/// Cell size used when the caller does not supply one
pub const DEFAULT_CELL_SIZE: f64 = 100.0;

/// Half-width of the square search window around each query point
///
/// Candidates are collected from the fixed 250x250-unit window
/// `[x - 125, x + 125] x [y - 125, y + 125]`.
pub const SEARCH_HALF_WIDTH: f64 = 125.0;

/// Per-point row estimate used to presize the output columns
const ROWS_PER_POINT_ESTIMATE: usize = 10;

/// Enumerate grid-cell centers around each query point
///
/// Returns a columnar table with one row per generated center across all
/// points, grouped by point in input order. Within a group, rows are ordered
/// by ascending x offset, then ascending y offset. A point whose window
/// contains no center on one axis contributes no rows.
///
/// # Errors
///
/// Returns [`GridError::LengthMismatch`] when `x` and `y` differ in length,
/// [`GridError::InvalidCellSize`] when `cell_size` is not finite and
/// positive, and [`GridError::NonFiniteCoordinate`] when any coordinate is
/// NaN or infinite. No partial table is produced on failure.
pub fn enumerate_grid_centers(x: &[f64], y: &[f64], cell_size: f64) -> Result<CenterTable> {
    validate(x, y, cell_size)?;

    let mut table = CenterTable::with_capacity(x.len().saturating_mul(ROWS_PER_POINT_ESTIMATE));

    for (&x_raw, &y_raw) in x.iter().zip(y.iter()) {
        let seq_x = axis_candidates(x_raw, SEARCH_HALF_WIDTH, cell_size);
        let seq_y = axis_candidates(y_raw, SEARCH_HALF_WIDTH, cell_size);

        for &x_center in &seq_x {
            for &y_center in &seq_y {
                table.push(CenterRow {
                    x_raw,
                    y_raw,
                    x_center,
                    y_center,
                });
            }
        }
    }

    Ok(table)
}

/// Enumerate grid-cell centers with the default cell size of 100 units
///
/// # Errors
///
/// Same error conditions as [`enumerate_grid_centers`].
pub fn enumerate_grid_centers_default(x: &[f64], y: &[f64]) -> Result<CenterTable> {
    enumerate_grid_centers(x, y, DEFAULT_CELL_SIZE)
}

/// Reject inputs the stepping formulation cannot handle
fn validate(x: &[f64], y: &[f64], cell_size: f64) -> Result<()> {
    if x.len() != y.len() {
        return Err(GridError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(GridError::InvalidCellSize { value: cell_size });
    }

    for (axis, values) in [(Axis::X, x), (Axis::Y, y)] {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(GridError::NonFiniteCoordinate { axis, index, value });
        }
    }

    Ok(())
}
