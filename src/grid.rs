// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Spatial domains and grid-tagged results.
//!
//! A spatial domain is anything that can
//!
//! 1. hand out its longitudes as an array ([`LongitudeProvider`]), and
//! 2. wrap a same-shaped result array back up with its own grid metadata
//!    ([`GridTagger`]).
//!
//! The `*_for_area` functions only ever go through these two traits, so the
//! math in [`crate::offset`] and [`crate::solar_day`] stays independent of
//! any raster library. Two implementations ship with the crate:
//!
//! | Domain | `Tagged<T>` |
//! |--------|-------------|
//! | any `ndarray` array of `f64` | `Array<T, D>` (untagged) |
//! | [`RasterGrid`] | [`Raster<T>`] |

use crate::error::{GridError, Result};
use crate::offset::offset_hours_for_longitude;
use crate::solar_day::{solar_day_of_year_for_longitude, solar_hour_of_day_for_longitude};
use chrono::{DateTime, TimeZone};
use ndarray::{Array, Array2, ArrayBase, ArrayView, ArrayView2, Data, Dimension, Ix2};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Domain traits
// ═══════════════════════════════════════════════════════════════════════════

/// Source of per-cell longitudes, in degrees east.
pub trait LongitudeProvider {
    /// Dimensionality of the longitude array.
    type Dim: Dimension;

    /// Longitudes laid out on the domain's grid.
    fn lon(&self) -> ArrayView<'_, f64, Self::Dim>;
}

/// Attaches a computed array to the domain's grid metadata.
pub trait GridTagger: LongitudeProvider {
    /// Tagged output holding elements of type `T`.
    type Tagged<T>;

    /// Wrap `values`, which has the shape of [`LongitudeProvider::lon`].
    fn tag<T>(&self, values: Array<T, Self::Dim>) -> Self::Tagged<T>;
}

/// A complete spatial domain: longitudes in, tagged arrays out.
pub trait SpatialDomain: GridTagger {}

impl<G: GridTagger + ?Sized> SpatialDomain for G {}

impl<S, D> LongitudeProvider for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Dim = D;

    #[inline]
    fn lon(&self) -> ArrayView<'_, f64, D> {
        self.view()
    }
}

impl<S, D> GridTagger for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Tagged<T> = Array<T, D>;

    #[inline]
    fn tag<T>(&self, values: Array<T, D>) -> Self::Tagged<T> {
        values
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RasterGrid / Raster<T>
// ═══════════════════════════════════════════════════════════════════════════

/// Georeferencing of a north-up raster.
///
/// `origin_x`/`origin_y` locate the outer corner of cell `(0, 0)`;
/// `cell_width`/`cell_height` step to the next column/row and may be
/// negative (the usual north-up layout has `cell_height < 0`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridMetadata {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Free-form coordinate reference label, e.g. `"EPSG:4326"`.
    pub crs: Option<String>,
}

impl GridMetadata {
    /// Geographic (lon/lat degree) grid with no CRS label.
    pub fn geographic(origin_x: f64, origin_y: f64, cell_width: f64, cell_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_width,
            cell_height,
            crs: None,
        }
    }

    /// Set the CRS label.
    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = Some(crs.into());
        self
    }
}

/// A 2-D grid of cell-centre longitudes and latitudes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RasterGrid {
    lon: Array2<f64>,
    lat: Array2<f64>,
    metadata: Arc<GridMetadata>,
}

impl RasterGrid {
    /// Build a grid from explicit coordinate arrays.
    ///
    /// # Errors
    ///
    /// [`GridError::ShapeMismatch`] if `lon` and `lat` differ in shape,
    /// [`GridError::EmptyGrid`] if either dimension is zero.
    pub fn new(lon: Array2<f64>, lat: Array2<f64>, metadata: GridMetadata) -> Result<Self> {
        if lon.dim() != lat.dim() {
            let (lr, lc) = lon.dim();
            let (ar, ac) = lat.dim();
            return Err(GridError::ShapeMismatch {
                lon: [lr, lc],
                lat: [ar, ac],
            });
        }
        let (rows, cols) = lon.dim();
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            lon,
            lat,
            metadata: Arc::new(metadata),
        })
    }

    /// Build a `rows × cols` grid whose coordinates are the cell centres
    /// implied by `metadata`.
    ///
    /// ```
    /// use solar_apparent_time::{GridMetadata, RasterGrid};
    ///
    /// // Two 90° columns spanning the western and eastern hemispheres.
    /// let meta = GridMetadata::geographic(-180.0, 90.0, 180.0, -90.0);
    /// let grid = RasterGrid::regular(meta, 2, 2).unwrap();
    /// assert_eq!(grid.lon()[[0, 0]], -90.0);
    /// assert_eq!(grid.lat()[[1, 1]], -45.0);
    /// ```
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyGrid`] for a zero dimension and
    /// [`GridError::InvalidCellSize`] for zero or non-finite cell sizes.
    pub fn regular(metadata: GridMetadata, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        let (dx, dy) = (metadata.cell_width, metadata.cell_height);
        if !dx.is_finite() || !dy.is_finite() || dx == 0.0 || dy == 0.0 {
            return Err(GridError::InvalidCellSize { x: dx, y: dy });
        }

        let (x0, y0) = (metadata.origin_x, metadata.origin_y);
        let lon = Array2::from_shape_fn((rows, cols), |(_, c)| x0 + (c as f64 + 0.5) * dx);
        let lat = Array2::from_shape_fn((rows, cols), |(r, _)| y0 + (r as f64 + 0.5) * dy);
        tracing::trace!(rows, cols, "built regular grid");

        Ok(Self {
            lon,
            lat,
            metadata: Arc::new(metadata),
        })
    }

    #[inline]
    pub fn lon(&self) -> ArrayView2<'_, f64> {
        self.lon.view()
    }

    #[inline]
    pub fn lat(&self) -> ArrayView2<'_, f64> {
        self.lat.view()
    }

    #[inline]
    pub fn metadata(&self) -> &GridMetadata {
        &self.metadata
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.lon.dim()
    }
}

impl LongitudeProvider for RasterGrid {
    type Dim = Ix2;

    #[inline]
    fn lon(&self) -> ArrayView2<'_, f64> {
        self.lon.view()
    }
}

impl GridTagger for RasterGrid {
    type Tagged<T> = Raster<T>;

    #[inline]
    fn tag<T>(&self, values: Array2<T>) -> Self::Tagged<T> {
        debug_assert_eq!(values.dim(), self.shape());
        Raster {
            values,
            metadata: Arc::clone(&self.metadata),
        }
    }
}

/// Values laid out on a [`RasterGrid`], sharing its metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Raster<T> {
    values: Array2<T>,
    metadata: Arc<GridMetadata>,
}

impl<T> Raster<T> {
    #[inline]
    pub fn values(&self) -> ArrayView2<'_, T> {
        self.values.view()
    }

    #[inline]
    pub fn metadata(&self) -> &GridMetadata {
        &self.metadata
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.values.get((row, col))
    }

    /// Whether `self` and `other` were tagged from the same grid.
    #[inline]
    pub fn shares_grid_with<U>(&self, other: &Raster<U>) -> bool {
        Arc::ptr_eq(&self.metadata, &other.metadata)
    }

    pub fn into_values(self) -> Array2<T> {
        self.values
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Area operations
// ═══════════════════════════════════════════════════════════════════════════

/// Hour offset from UTC at every cell of `domain`.
#[tracing::instrument(level = "debug", skip_all, fields(shape = ?domain.lon().raw_dim()))]
pub fn offset_hours_for_area<G>(domain: &G) -> G::Tagged<f64>
where
    G: SpatialDomain + ?Sized,
{
    domain.tag(offset_hours_for_longitude(&domain.lon()))
}

/// Solar day-of-year at every cell of `domain`.
///
/// Cells agree exactly with
/// [`solar_day_of_year_for_longitude`](crate::solar_day_of_year_for_longitude)
/// on the same longitudes.
#[tracing::instrument(level = "debug", skip_all, fields(shape = ?domain.lon().raw_dim()))]
pub fn solar_day_of_year_for_area<Tz, G>(time_utc: &DateTime<Tz>, domain: &G) -> G::Tagged<i32>
where
    Tz: TimeZone,
    G: SpatialDomain + ?Sized,
{
    domain.tag(solar_day_of_year_for_longitude(time_utc, &domain.lon()))
}

/// Solar hour of day at every cell of `domain`, wrapped into [0, 24].
#[tracing::instrument(level = "debug", skip_all, fields(shape = ?domain.lon().raw_dim()))]
pub fn solar_hour_of_day_for_area<Tz, G>(time_utc: &DateTime<Tz>, domain: &G) -> G::Tagged<f64>
where
    Tz: TimeZone,
    G: SpatialDomain + ?Sized,
{
    domain.tag(solar_hour_of_day_for_longitude(time_utc, &domain.lon()))
}
