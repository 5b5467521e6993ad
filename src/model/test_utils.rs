use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::earth::coordinate::Coordinate;
use crate::earth::solar::{SolarEventProvider, SolarWindow};
use crate::error::Result;

use super::airport::Airport;

pub fn make_airport(id: &str) -> Airport {
    Airport::new(id.to_string(), "SYD".to_string(), "Sydney".to_string(), 1.0, 1.0)
}

pub fn make_airport_at(id: &str, latitude: f64, longitude: f64) -> Airport {
    Airport::new(id.to_string(), id[1..].to_string(), "Test".to_string(), latitude, longitude)
}

pub fn utc(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
}

/// Sunrise and sunset that move linearly with longitude, so the terminator
/// crossing of an equatorial route can be worked out by hand.
pub struct LinearSun {
    pub sunrise: Duration,
    pub sunset: Duration,
    pub minutes_per_degree: f64,
}

impl LinearSun {
    pub fn new(sunrise_hour: i64, sunset_hour: i64, minutes_per_degree: f64) -> Self {
        Self {
            sunrise: Duration::hours(sunrise_hour),
            sunset: Duration::hours(sunset_hour),
            minutes_per_degree,
        }
    }
}

impl SolarEventProvider for LinearSun {
    fn solar_window(&self, point: &Coordinate, date: NaiveDate) -> Result<SolarWindow> {
        let midnight = utc(date, 0, 0);
        let shift = Duration::seconds((point.get_longitude() * self.minutes_per_degree * 60.0).round() as i64);
        Ok(SolarWindow::new(
            midnight + self.sunrise + shift,
            midnight + self.sunset + shift,
        ))
    }
}

/// The same window everywhere.
pub struct FixedSun {
    pub window: SolarWindow,
}

impl SolarEventProvider for FixedSun {
    fn solar_window(&self, _point: &Coordinate, _date: NaiveDate) -> Result<SolarWindow> {
        Ok(self.window)
    }
}
