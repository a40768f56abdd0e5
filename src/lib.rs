// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Local apparent solar time
//!
//! Conversions between UTC and the mean solar clock of a meridian, plus the
//! solar day-of-year and hour-of-day seen at one or many longitudes.
//!
//! Every quantity derives from one relation:
//!
//! ```text
//! offset_h = lon_deg / 15          (east positive, no equation-of-time term)
//! ```
//!
//! # Operations
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`utc_to_solar`] | UTC `DateTime`, [`Degrees`](qtty::Degrees) | solar `NaiveDateTime` |
//! | [`solar_to_utc`] | solar `NaiveDateTime`, `Degrees` | `DateTime<Utc>` |
//! | [`offset_hours_for_longitude`] | any [`LongitudeField`] | offsets, same shape |
//! | [`offset_hours_for_area`] | any [`SpatialDomain`] | tagged offsets |
//! | [`solar_day_of_year_for_longitude`] | UTC, `LongitudeField` | day-of-year, same shape |
//! | [`solar_day_of_year_for_area`] | UTC, `SpatialDomain` | tagged day-of-year |
//! | [`solar_hour_of_day_for_longitude`] | UTC, `LongitudeField` | hour-of-day, same shape |
//! | [`solar_hour_of_day_for_area`] | UTC, `SpatialDomain` | tagged hour-of-day |
//!
//! Scalar, slice, `ndarray` and grid variants share the same per-element
//! kernels and agree bit-for-bit.
//!
//! # Boundaries
//!
//! The raw local hour `hour_utc + offset` is shifted by one day only when it
//! is strictly below 0 or strictly above 24. A raw value of exactly `24.0`
//! is reported as hour `24.0` of the *same* day. Day-of-year is never
//! renormalised across a year boundary, so values 0 and 367 can occur.

mod convert;
mod error;
mod grid;
mod offset;
mod solar_day;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use convert::{
    checked_solar_to_utc, checked_utc_to_solar, solar_to_utc, utc_hour_of_day, utc_to_solar,
};
pub use error::{GridError, Result};
pub use grid::{
    offset_hours_for_area, solar_day_of_year_for_area, solar_hour_of_day_for_area, GridMetadata,
    GridTagger, LongitudeProvider, Raster, RasterGrid, SpatialDomain,
};
pub use offset::{
    offset_duration, offset_hours, offset_hours_for_longitude, LongitudeField, DEGREES_PER_HOUR,
};
pub use solar_day::{
    solar_day_of_year, solar_day_of_year_for_longitude, solar_hour_of_day,
    solar_hour_of_day_for_longitude,
};
