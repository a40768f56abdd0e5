use chrono::{DateTime, Datelike, TimeZone, Utc};
use ndarray::{array, Array1};
use qtty::{Degrees, Hours};
use solar_apparent_time::{
    offset_hours, offset_hours_for_area, offset_hours_for_longitude, solar_day_of_year,
    solar_day_of_year_for_area, solar_day_of_year_for_longitude, solar_hour_of_day,
    solar_hour_of_day_for_area, solar_hour_of_day_for_longitude, solar_to_utc, utc_to_solar,
    GridMetadata, RasterGrid,
};

fn day_100_at(hour: u32) -> DateTime<Utc> {
    let t = Utc.with_ymd_and_hms(2021, 4, 10, hour, 0, 0).unwrap();
    assert_eq!(t.ordinal(), 100);
    t
}

#[test]
fn round_trip_is_exact_over_longitudes_and_dates() {
    let instants = [
        Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap(),
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 34, 56).unwrap()
            + chrono::TimeDelta::nanoseconds(123_456_789),
        Utc.with_ymd_and_hms(2100, 7, 4, 4, 0, 1).unwrap(),
    ];
    let lons = Array1::linspace(-180.0, 180.0, 721);
    for t in instants {
        for &lon in &lons {
            let lon = Degrees::new(lon);
            assert_eq!(solar_to_utc(utc_to_solar(&t, lon), lon), t, "{t} @ {lon}");
        }
    }
}

#[test]
fn offset_is_linear_in_longitude() {
    assert_eq!(offset_hours(Degrees::new(0.0)), Hours::new(0.0));
    assert_eq!(offset_hours(Degrees::new(180.0)), Hours::new(12.0));
    assert_eq!(offset_hours(Degrees::new(-180.0)), Hours::new(-12.0));

    let lons = Array1::linspace(-180.0, 180.0, 97);
    let offsets = offset_hours_for_longitude(&lons);
    for (&lon, &h) in lons.iter().zip(offsets.iter()) {
        assert_eq!(h, lon / 15.0);
    }
}

#[test]
fn reference_cases() {
    assert_eq!(solar_hour_of_day(&day_100_at(23), Degrees::new(180.0)), 11.0);
    assert_eq!(solar_hour_of_day(&day_100_at(1), Degrees::new(-180.0)), 13.0);
    assert_eq!(solar_day_of_year(&day_100_at(1), Degrees::new(-180.0)), 99);
    assert_eq!(solar_day_of_year(&day_100_at(23), Degrees::new(180.0)), 101);
}

#[test]
fn exact_24_hours_is_left_unwrapped() {
    let t = day_100_at(12);
    let lon = Degrees::new(180.0);
    assert_eq!(solar_day_of_year(&t, lon), 100);
    assert_eq!(solar_hour_of_day(&t, lon), 24.0);

    let grid = array![[180.0]];
    assert_eq!(solar_day_of_year_for_area(&t, &grid), array![[100]]);
    assert_eq!(solar_hour_of_day_for_area(&t, &grid), array![[24.0]]);
}

#[test]
fn grid_and_longitude_variants_agree() {
    let meta = GridMetadata::geographic(-180.0, 90.0, 7.5, -7.5);
    let grid = RasterGrid::regular(meta, 24, 48).unwrap();
    let t = Utc.with_ymd_and_hms(2022, 9, 23, 19, 41, 7).unwrap();

    let flat: Vec<f64> = grid.lon().iter().copied().collect();
    let doy_vec = solar_day_of_year_for_longitude(&t, &flat);
    let hod_vec = solar_hour_of_day_for_longitude(&t, &flat);

    let doy_grid = solar_day_of_year_for_area(&t, &grid);
    let hod_grid = solar_hour_of_day_for_area(&t, &grid);
    let off_grid = offset_hours_for_area(&grid);

    assert_eq!(doy_grid.values().iter().copied().collect::<Vec<_>>(), doy_vec);
    assert_eq!(hod_grid.values().iter().copied().collect::<Vec<_>>(), hod_vec);
    assert_eq!(
        off_grid.values().iter().copied().collect::<Vec<_>>(),
        offset_hours_for_longitude(&flat)
    );
    assert_eq!(doy_grid.metadata(), grid.metadata());
}

#[test]
fn solar_clock_matches_hour_of_day_inside_the_day() {
    let t = Utc.with_ymd_and_hms(2022, 3, 20, 9, 15, 0).unwrap();
    for lon in [-120.0, -30.0, 0.0, 45.0, 150.0] {
        let lon = Degrees::new(lon);
        let solar = utc_to_solar(&t, lon);
        assert_eq!(solar.ordinal() as i32, solar_day_of_year(&t, lon));
        let clock = chrono::Timelike::hour(&solar) as f64
            + chrono::Timelike::minute(&solar) as f64 / 60.0;
        assert!((clock - solar_hour_of_day(&t, lon)).abs() < 1e-9);
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_raster_keeps_metadata() {
    let meta = GridMetadata::geographic(0.0, 10.0, 5.0, -5.0).with_crs("EPSG:4326");
    let grid = RasterGrid::regular(meta, 2, 2).unwrap();
    let offsets = offset_hours_for_area(&grid);
    let json = serde_json::to_string(&offsets).unwrap();
    assert!(json.contains("EPSG:4326"));
    let back: solar_apparent_time::Raster<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, offsets);
}
