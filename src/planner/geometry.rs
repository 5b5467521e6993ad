/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 */
use chrono::{DateTime, Duration, Utc};

use crate::earth::coordinate::Coordinate;
use crate::earth::geodesy::GeodesyProvider;
use crate::earth::solar::SolarWindow;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayNight {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTime {
    pub duration: Duration,
    /// Arrival was moved onto the following calendar day
    pub rolled: bool,
}

pub fn compute_distance(
    geodesy: &dyn GeodesyProvider,
    departure: &Coordinate,
    arrival: &Coordinate,
) -> Result<f64> {
    geodesy.distance(departure, arrival)
}

/// A negative raw block time means the arrival is on the next day. This
/// only holds while no flight is longer than 24 hours.
pub fn compute_block_duration(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> BlockTime {
    let duration = arrival - departure;
    if duration < Duration::zero() {
        BlockTime {
            duration: duration + Duration::days(1),
            rolled: true,
        }
    } else {
        BlockTime {
            duration,
            rolled: false,
        }
    }
}

/// Knots. Zero when there is no block time to spread the distance over.
pub fn ground_speed(distance: f64, block: Duration) -> f64 {
    let hours = block.num_milliseconds() as f64 / 3_600_000.0;
    if hours > 0.0 {
        distance / hours
    } else {
        0.0
    }
}

pub fn classify(window: &SolarWindow, instant: DateTime<Utc>) -> DayNight {
    if window.contains(instant) {
        DayNight::Day
    } else {
        DayNight::Night
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;
    use crate::earth::geodesy::SphericalEarth;

    #[test]
    fn test_block_duration_wraps() {
        let dep = Utc.with_ymd_and_hms(2024, 5, 1, 23, 50, 0).unwrap();
        let arr = Utc.with_ymd_and_hms(2024, 5, 1, 0, 10, 0).unwrap();
        let block = compute_block_duration(dep, arr);
        assert_eq!(block.duration, Duration::minutes(20));
        assert!(block.rolled);
    }

    #[test]
    fn test_block_duration_near_a_day() {
        let dep = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let arr = Utc.with_ymd_and_hms(2024, 5, 1, 9, 59, 0).unwrap();
        let block = compute_block_duration(dep, arr);
        assert_eq!(block.duration, Duration::minutes(23 * 60 + 59));
        assert!(block.rolled);
    }

    #[test]
    fn test_block_duration_same_day() {
        let dep = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let arr = Utc.with_ymd_and_hms(2024, 5, 1, 9, 15, 0).unwrap();
        let block = compute_block_duration(dep, arr);
        assert_eq!(block.duration, Duration::minutes(75));
        assert!(!block.rolled);
    }

    #[test]
    fn test_distance_zero_for_same_airport() {
        let p = Coordinate::new(51.47, -0.46);
        assert_eq!(compute_distance(&SphericalEarth, &p, &p).unwrap(), 0.0);
    }

    #[test]
    fn test_ground_speed() {
        assert_eq!(ground_speed(900.0, Duration::minutes(120)), 450.0);
        assert_eq!(ground_speed(900.0, Duration::zero()), 0.0);
    }

    #[test]
    fn test_classify_inclusive_and_pure() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let rise = Utc.from_utc_datetime(&date.and_hms_opt(5, 30, 0).unwrap());
        let set = Utc.from_utc_datetime(&date.and_hms_opt(19, 0, 0).unwrap());
        let window = SolarWindow::new(rise, set);

        assert_eq!(classify(&window, rise), DayNight::Day);
        assert_eq!(classify(&window, rise), classify(&window, rise));
        assert_eq!(classify(&window, set), DayNight::Day);
        assert_eq!(classify(&window, rise - Duration::minutes(1)), DayNight::Night);
        assert_eq!(classify(&window, set + Duration::minutes(1)), DayNight::Night);
    }
}
