//! Columnar result table for enumerated grid centers

use ndarray::Array2;

/// One enumerated grid-cell center paired with its originating query point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterRow {
    /// x coordinate of the query point
    pub x_raw: f64,
    /// y coordinate of the query point
    pub y_raw: f64,
    /// x coordinate of the generated cell center
    pub x_center: f64,
    /// y coordinate of the generated cell center
    pub y_center: f64,
}

/// Columnar table of enumerated grid centers
///
/// Maintains four same-length columns in the order raw x, raw y, center x,
/// center y. Rows are grouped by query point in input order; within a group
/// the x offset varies slowest and the y offset fastest.
#[derive(Debug, Clone, Default)]
pub struct CenterTable {
    x_raw: Vec<f64>,
    y_raw: Vec<f64>,
    x_center: Vec<f64>,
    y_center: Vec<f64>,
}

impl CenterTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            x_raw: Vec::new(),
            y_raw: Vec::new(),
            x_center: Vec::new(),
            y_center: Vec::new(),
        }
    }

    /// Create an empty table with row capacity reserved in every column
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x_raw: Vec::with_capacity(capacity),
            y_raw: Vec::with_capacity(capacity),
            x_center: Vec::with_capacity(capacity),
            y_center: Vec::with_capacity(capacity),
        }
    }

    /// Append one row to the table
    pub fn push(&mut self, row: CenterRow) {
        self.x_raw.push(row.x_raw);
        self.y_raw.push(row.y_raw);
        self.x_center.push(row.x_center);
        self.y_center.push(row.y_center);
    }

    /// Number of rows in the table
    pub const fn len(&self) -> usize {
        self.x_raw.len()
    }

    /// Whether the table contains no rows
    pub const fn is_empty(&self) -> bool {
        self.x_raw.is_empty()
    }

    /// Raw x coordinates, one per row
    pub const fn x_raw(&self) -> &[f64] {
        self.x_raw.as_slice()
    }

    /// Raw y coordinates, one per row
    pub const fn y_raw(&self) -> &[f64] {
        self.y_raw.as_slice()
    }

    /// Generated center x coordinates, one per row
    pub const fn x_center(&self) -> &[f64] {
        self.x_center.as_slice()
    }

    /// Generated center y coordinates, one per row
    pub const fn y_center(&self) -> &[f64] {
        self.y_center.as_slice()
    }

    /// Iterate over the table row by row
    pub fn rows(&self) -> impl Iterator<Item = CenterRow> + '_ {
        self.x_raw
            .iter()
            .zip(&self.y_raw)
            .zip(&self.x_center)
            .zip(&self.y_center)
            .map(|(((&x_raw, &y_raw), &x_center), &y_center)| CenterRow {
                x_raw,
                y_raw,
                x_center,
                y_center,
            })
    }

    /// Export the table as a dense `(rows, 4)` array
    ///
    /// Columns follow the table order: raw x, raw y, center x, center y.
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.len(), 4), |(row, column)| {
            let values = match column {
                0 => &self.x_raw,
                1 => &self.y_raw,
                2 => &self.x_center,
                _ => &self.y_center,
            };
            values.get(row).copied().unwrap_or(f64::NAN)
        })
    }
}
