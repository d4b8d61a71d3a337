//! Half-offset lattice candidate generation
//!
//! Grid-cell centers sit on odd multiples of half the cell size: even
//! multiples are the grid lines themselves, odd multiples fall halfway
//! between them. Candidates are reconstructed from integer lattice indices
//! rather than by repeated addition of the step, so long windows do not
//! accumulate rounding drift.

use num_traits::Float;

/// Candidate cell-center offsets along one axis
///
/// Enumerates every point of the half-offset sublattice inside
/// `[center - half_width, center + half_width]`, in ascending order. The
/// window bounds are converted to lattice indices with a single `ceil` and
/// `floor`, and each candidate is reconstructed as `index * half_step`.
/// Returns an empty vector when the window contains no cell center, or when
/// the bounds are not representable as lattice indices (non-finite inputs).
pub fn axis_candidates<F: Float>(center: F, half_width: F, cell_size: F) -> Vec<F> {
    let two = F::one() + F::one();
    let half_step = cell_size / two;

    let Some(first) = ((center - half_width) / half_step).ceil().to_i64() else {
        return Vec::new();
    };
    let Some(last) = ((center + half_width) / half_step).floor().to_i64() else {
        return Vec::new();
    };

    let capacity = usize::try_from(last.saturating_sub(first) / 2 + 1).unwrap_or(0);
    let mut candidates = Vec::with_capacity(capacity);

    // Odd indices are cell centers, even indices are grid lines
    for index in (first..=last).filter(|index| index.rem_euclid(2) == 1) {
        if let Some(scaled) = F::from(index) {
            candidates.push(scaled * half_step);
        }
    }

    candidates
}

/// Whether `value` lies on the half-offset sublattice of `cell_size`
///
/// Membership is tested through the Euclidean remainder, so negative values
/// classify symmetrically to positive ones. The comparison carries a small
/// relative tolerance to absorb rounding from reconstructed candidates.
pub fn is_cell_center<F: Float>(value: F, cell_size: F) -> bool {
    let two = F::one() + F::one();
    let half_step = cell_size / two;

    let mut remainder = value % cell_size;
    if remainder < F::zero() {
        remainder = remainder + cell_size;
    }

    let tolerance = value.abs().max(cell_size) * F::epsilon() * (two + two);
    (remainder - half_step).abs() <= tolerance
}
