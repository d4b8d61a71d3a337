//! Error types for grid-center enumeration

use std::fmt;

/// Coordinate axis identifier used in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Main error type for enumeration operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Input coordinate vectors differ in length
    LengthMismatch {
        /// Number of x coordinates supplied
        x_len: usize,
        /// Number of y coordinates supplied
        y_len: usize,
    },

    /// Grid cell size is not a finite positive number
    ///
    /// The original stepping formulation loops forever for a zero or
    /// negative step, so the size is rejected up front instead.
    InvalidCellSize {
        /// Provided cell size that failed validation
        value: f64,
    },

    /// An input coordinate is NaN or infinite
    NonFiniteCoordinate {
        /// Axis the coordinate belongs to
        axis: Axis,
        /// Position of the coordinate in its input vector
        index: usize,
        /// The offending value
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { x_len, y_len } => {
                write!(
                    f,
                    "vectors must have the same length (x has {x_len} elements, y has {y_len})"
                )
            }
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be a finite positive number, got {value}")
            }
            Self::NonFiniteCoordinate { axis, index, value } => {
                write!(f, "coordinate {axis}[{index}] is not finite: {value}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for enumeration results
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message_names_both_lengths() {
        let error = GridError::LengthMismatch { x_len: 3, y_len: 2 };
        let message = error.to_string();
        assert!(
            message.contains("vectors must have the same length"),
            "unexpected message: {message}"
        );
        assert!(message.contains('3') && message.contains('2'));
    }

    #[test]
    fn test_non_finite_coordinate_message_names_axis_and_index() {
        let error = GridError::NonFiniteCoordinate {
            axis: Axis::Y,
            index: 7,
            value: f64::NAN,
        };
        let message = error.to_string();
        assert!(message.contains("y[7]"), "unexpected message: {message}");
    }
}
