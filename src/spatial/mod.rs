//! Spatial lattice structures and grid-center enumeration
//!
//! This module contains the spatial functionality of the crate:
//! - Half-offset lattice candidate generation per axis
//! - Enumeration of cell centers around query points
//! - Columnar result table construction

/// Grid-center enumeration around query points
pub mod enumerate;
/// Half-offset lattice candidate generation
pub mod lattice;
/// Columnar result table for enumerated centers
pub mod table;

pub use table::CenterTable;
