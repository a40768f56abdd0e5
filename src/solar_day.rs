// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar day-of-year and hour-of-day.
//!
//! Both derive from the *raw* local hour
//!
//! ```text
//! raw = hour_utc + lon / 15        ∈ (-12, 36) for lon ∈ [-180, 180]
//! ```
//!
//! and step across at most one day boundary. The open intervals `raw < 0`
//! and `raw > 24` trigger the step; `raw == 24.0` exactly is left alone in
//! both derivers.
//!
//! Day-of-year is *not* renormalised across a year boundary: 1 January at a
//! far-western meridian before 12:00 UTC yields day 0, and 31 December of a
//! common year at a far-eastern meridian after 12:00 UTC yields day 366.

use crate::convert::utc_hour_of_day;
use crate::offset::{offset_hours_value, LongitudeField};
use chrono::{DateTime, Datelike, TimeZone};
use qtty::Degrees;

const HOURS_PER_DAY: f64 = 24.0;

// ── kernels ───────────────────────────────────────────────────────────────

#[inline]
fn raw_local_hour(hour_utc: f64, lon_deg: f64) -> f64 {
    hour_utc + offset_hours_value(lon_deg)
}

#[inline]
pub(crate) fn day_of_year_kernel(doy_utc: i32, hour_utc: f64, lon_deg: f64) -> i32 {
    let raw = raw_local_hour(hour_utc, lon_deg);
    if raw < 0.0 {
        doy_utc - 1
    } else if raw > HOURS_PER_DAY {
        doy_utc + 1
    } else {
        doy_utc
    }
}

#[inline]
pub(crate) fn hour_of_day_kernel(hour_utc: f64, lon_deg: f64) -> f64 {
    let raw = raw_local_hour(hour_utc, lon_deg);
    if raw < 0.0 {
        raw + HOURS_PER_DAY
    } else if raw > HOURS_PER_DAY {
        raw - HOURS_PER_DAY
    } else {
        raw
    }
}

/// UTC day-of-year and fractional UTC hour, the two inputs every deriver
/// needs from the timestamp.
#[inline]
pub(crate) fn utc_components<Tz: TimeZone>(time_utc: &DateTime<Tz>) -> (i32, f64) {
    let doy = time_utc.naive_utc().ordinal() as i32;
    (doy, utc_hour_of_day(time_utc))
}

// ── scalar API ────────────────────────────────────────────────────────────

/// Calendar day-of-year of local solar time at `lon`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use qtty::Degrees;
/// use solar_apparent_time::solar_day_of_year;
///
/// // 9 April 2024 is day 100; 23:00 UTC at the antimeridian is already the 10th.
/// let t = Utc.with_ymd_and_hms(2024, 4, 9, 23, 0, 0).unwrap();
/// assert_eq!(solar_day_of_year(&t, Degrees::new(180.0)), 101);
/// ```
pub fn solar_day_of_year<Tz: TimeZone>(time_utc: &DateTime<Tz>, lon: Degrees) -> i32 {
    let (doy, hour) = utc_components(time_utc);
    day_of_year_kernel(doy, hour, lon.value())
}

/// Local solar hour of day at `lon`, wrapped into [0, 24].
pub fn solar_hour_of_day<Tz: TimeZone>(time_utc: &DateTime<Tz>, lon: Degrees) -> f64 {
    let (_, hour) = utc_components(time_utc);
    hour_of_day_kernel(hour, lon.value())
}

// ── longitude-field API ───────────────────────────────────────────────────

/// [`solar_day_of_year`] for every longitude in `lon`.
pub fn solar_day_of_year_for_longitude<Tz, L>(time_utc: &DateTime<Tz>, lon: &L) -> L::Mapped<i32>
where
    Tz: TimeZone,
    L: LongitudeField + ?Sized,
{
    let (doy, hour) = utc_components(time_utc);
    lon.map_longitudes(|lon_deg| day_of_year_kernel(doy, hour, lon_deg))
}

/// [`solar_hour_of_day`] for every longitude in `lon`.
pub fn solar_hour_of_day_for_longitude<Tz, L>(time_utc: &DateTime<Tz>, lon: &L) -> L::Mapped<f64>
where
    Tz: TimeZone,
    L: LongitudeField + ?Sized,
{
    let (_, hour) = utc_components(time_utc);
    lon.map_longitudes(|lon_deg| hour_of_day_kernel(hour, lon_deg))
}
