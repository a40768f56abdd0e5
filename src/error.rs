// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised when building a [`RasterGrid`](crate::RasterGrid).
//!
//! The solar-time arithmetic itself never fails; only grid construction
//! validates its input.

/// Error type for grid construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Longitude and latitude arrays have different shapes.
    #[error("longitude shape {lon:?} does not match latitude shape {lat:?}")]
    ShapeMismatch {
        /// Shape of the longitude array.
        lon: [usize; 2],
        /// Shape of the latitude array.
        lat: [usize; 2],
    },

    /// The grid has no cells.
    #[error("grid must have at least one cell, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// A cell size is zero or not finite.
    #[error("invalid cell size ({x}, {y}): must be finite and non-zero")]
    InvalidCellSize { x: f64, y: f64 },
}

/// Result alias for grid construction.
pub type Result<T> = std::result::Result<T, GridError>;
