// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC ↔ local apparent solar time.
//!
//! Solar time is returned as a [`NaiveDateTime`]: it is a wall-clock reading
//! tied to a meridian, not to any civil time zone, so it never carries a
//! `Utc` label. UTC inputs accept any `chrono` time zone and are normalised
//! to UTC first.
//!
//! Both directions add or subtract the *same* nanosecond [`TimeDelta`]
//! from [`offset_duration`], so
//! `solar_to_utc(utc_to_solar(t, lon), lon) == t` holds exactly.

use crate::offset::offset_duration;
use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
use qtty::Degrees;

/// Local apparent solar time at `lon` for the instant `time_utc`.
///
/// # Panics
///
/// When the shifted time leaves `chrono`'s representable range. Use
/// [`checked_utc_to_solar`] to get `None` instead.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use qtty::Degrees;
/// use solar_apparent_time::utc_to_solar;
///
/// let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
/// let solar = utc_to_solar(&noon, Degrees::new(90.0));
/// assert_eq!(solar.to_string(), "2024-06-21 18:00:00");
/// ```
pub fn utc_to_solar<Tz: TimeZone>(time_utc: &DateTime<Tz>, lon: Degrees) -> NaiveDateTime {
    time_utc.naive_utc() + offset_duration(lon)
}

/// UTC instant at which the solar clock at `lon` reads `time_solar`.
///
/// # Panics
///
/// When the shifted time leaves `chrono`'s representable range. Use
/// [`checked_solar_to_utc`] to get `None` instead.
pub fn solar_to_utc(time_solar: NaiveDateTime, lon: Degrees) -> DateTime<Utc> {
    (time_solar - offset_duration(lon)).and_utc()
}

/// Fallible [`utc_to_solar`]; `None` on datetime overflow.
pub fn checked_utc_to_solar<Tz: TimeZone>(
    time_utc: &DateTime<Tz>,
    lon: Degrees,
) -> Option<NaiveDateTime> {
    time_utc.naive_utc().checked_add_signed(offset_duration(lon))
}

/// Fallible [`solar_to_utc`]; `None` on datetime overflow.
pub fn checked_solar_to_utc(time_solar: NaiveDateTime, lon: Degrees) -> Option<DateTime<Utc>> {
    time_solar
        .checked_sub_signed(offset_duration(lon))
        .map(|naive| naive.and_utc())
}

/// Fractional UTC hour of day, `hour + minute/60 + second/3600`, in [0, 24).
///
/// Sub-second precision is dropped.
pub fn utc_hour_of_day<Tz: TimeZone>(time_utc: &DateTime<Tz>) -> f64 {
    let t = time_utc.naive_utc();
    t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0
}
