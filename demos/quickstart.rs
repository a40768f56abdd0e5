use chrono::Utc;
use qtty::Degrees;
use solar_apparent_time::{
    solar_day_of_year_for_area, solar_hour_of_day_for_area, utc_to_solar, GridMetadata, RasterGrid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let tokyo = utc_to_solar(&now, Degrees::new(139.69));
    let lima = utc_to_solar(&now, Degrees::new(-77.04));

    println!("UTC:          {now}");
    println!("Solar Tokyo:  {tokyo}");
    println!("Solar Lima:   {lima}");

    // 30° world grid
    let grid = RasterGrid::regular(GridMetadata::geographic(-180.0, 90.0, 30.0, -30.0), 6, 12)?;
    let hours = solar_hour_of_day_for_area(&now, &grid);
    let days = solar_day_of_year_for_area(&now, &grid);

    println!("Solar hour along the 15°S row:");
    for (lon, (h, d)) in grid
        .lon()
        .row(3)
        .iter()
        .zip(hours.values().row(3).iter().zip(days.values().row(3).iter()))
    {
        println!("  {lon:>7.1}°  {h:>5.2} h  day {d}");
    }
    Ok(())
}
