// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Longitude → hour offset.
//!
//! The Earth turns through 360° in 24 h, so a meridian `lon` degrees east
//! of Greenwich sees the Sun `lon / 15` hours earlier:
//!
//! ```text
//! offset_h = lon · (π / 180) / π · 12 = lon / 15
//! ```
//!
//! [`LongitudeField`] lets the same per-element kernel run over a single
//! longitude, a slice, or any `ndarray` array, so scalar and gridded
//! callers share one formula.

use chrono::TimeDelta;
use ndarray::{Array, ArrayBase, Data, Dimension};
use qtty::{Degrees, Hours, Second};

/// Degrees of longitude swept per hour of Earth rotation.
pub const DEGREES_PER_HOUR: f64 = 15.0;

const NANOS_PER_SECOND: f64 = 1e9;

// ═══════════════════════════════════════════════════════════════════════════
// Scalar kernels
// ═══════════════════════════════════════════════════════════════════════════

#[inline]
pub(crate) fn offset_hours_value(lon_deg: f64) -> f64 {
    lon_deg / DEGREES_PER_HOUR
}

/// Signed hour offset of local solar time from UTC at `lon`.
///
/// No range check is made: longitudes outside [-180°, 180°] give offsets
/// outside (-12 h, 12 h].
#[inline]
pub fn offset_hours(lon: Degrees) -> Hours {
    Hours::new(offset_hours_value(lon.value()))
}

/// The offset of [`offset_hours`] as a `chrono` duration, rounded to the
/// nearest nanosecond.
///
/// Non-finite longitudes saturate through the float → integer cast.
#[inline]
pub fn offset_duration(lon: Degrees) -> TimeDelta {
    let nanos = offset_hours(lon).to::<Second>().value() * NANOS_PER_SECOND;
    TimeDelta::nanoseconds(nanos.round() as i64)
}

// ═══════════════════════════════════════════════════════════════════════════
// LongitudeField
// ═══════════════════════════════════════════════════════════════════════════

/// A container of longitudes (in degrees) that can be mapped element-wise.
///
/// `Mapped<T>` is the same shape holding `T` instead of a longitude: `T`
/// itself for scalars, `Vec<T>` for slices and `Array<T, D>` for arrays.
pub trait LongitudeField {
    /// Output container for an element type `T`.
    type Mapped<T>;

    /// Apply `f` to every longitude, preserving shape.
    fn map_longitudes<T, F>(&self, f: F) -> Self::Mapped<T>
    where
        F: FnMut(f64) -> T;
}

impl LongitudeField for f64 {
    type Mapped<T> = T;

    #[inline]
    fn map_longitudes<T, F>(&self, mut f: F) -> Self::Mapped<T>
    where
        F: FnMut(f64) -> T,
    {
        f(*self)
    }
}

impl LongitudeField for Degrees {
    type Mapped<T> = T;

    #[inline]
    fn map_longitudes<T, F>(&self, mut f: F) -> Self::Mapped<T>
    where
        F: FnMut(f64) -> T,
    {
        f(self.value())
    }
}

impl LongitudeField for [f64] {
    type Mapped<T> = Vec<T>;

    fn map_longitudes<T, F>(&self, mut f: F) -> Self::Mapped<T>
    where
        F: FnMut(f64) -> T,
    {
        self.iter().map(|&lon| f(lon)).collect()
    }
}

impl LongitudeField for Vec<f64> {
    type Mapped<T> = Vec<T>;

    #[inline]
    fn map_longitudes<T, F>(&self, f: F) -> Self::Mapped<T>
    where
        F: FnMut(f64) -> T,
    {
        self.as_slice().map_longitudes(f)
    }
}

impl<S, D> LongitudeField for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Mapped<T> = Array<T, D>;

    #[inline]
    fn map_longitudes<T, F>(&self, mut f: F) -> Self::Mapped<T>
    where
        F: FnMut(f64) -> T,
    {
        self.map(|&lon| f(lon))
    }
}

/// Hour offset for every longitude in `lon`, same shape as the input.
///
/// ```
/// use ndarray::array;
/// use solar_apparent_time::offset_hours_for_longitude;
///
/// let lon = array![-180.0, 0.0, 90.0];
/// assert_eq!(offset_hours_for_longitude(&lon), array![-12.0, 0.0, 6.0]);
/// ```
pub fn offset_hours_for_longitude<L>(lon: &L) -> L::Mapped<f64>
where
    L: LongitudeField + ?Sized,
{
    lon.map_longitudes(offset_hours_value)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
