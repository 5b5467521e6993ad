/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 */
use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::debug;
use solar_positioning::time::DeltaT;
use solar_positioning::{spa, Horizon, SunriseResult};

use crate::earth::coordinate::Coordinate;
use crate::earth::solar::{SolarEventProvider, SolarWindow, TWILIGHT_MARGIN_MINUTES};
use crate::error::{NightError, Result};

/// NREL SPA sunrise and sunset for the UTC day.
pub struct SpaEphemeris {
    margin: Duration,
}

impl SpaEphemeris {
    pub fn new() -> Self {
        Self {
            margin: Duration::minutes(TWILIGHT_MARGIN_MINUTES),
        }
    }
}

impl Default for SpaEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarEventProvider for SpaEphemeris {
    fn solar_window(&self, point: &Coordinate, date: NaiveDate) -> Result<SolarWindow> {
        let day = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| NightError::Ephemeris(format!("Invalid date {}", date)))?
            .and_utc();
        let delta_t = DeltaT::estimate_from_date_like(day)
            .map_err(|e| NightError::Ephemeris(e.to_string()))?;

        let result = spa::sunrise_sunset_for_horizon(
            day,
            point.get_latitude(),
            point.get_longitude(),
            delta_t,
            Horizon::SunriseSunset,
        )
        .map_err(|e| NightError::Ephemeris(e.to_string()))?;

        match result {
            SunriseResult::RegularDay { sunrise, transit, sunset } => {
                let (sunrise, sunset) = around_transit(sunrise, transit, sunset);
                debug!(
                    "Sun at {:.2} {:.2} on {}: rise {} set {}",
                    point.get_latitude(),
                    point.get_longitude(),
                    date,
                    sunrise,
                    sunset
                );
                Ok(SolarWindow::with_margin(sunrise, sunset, self.margin))
            }
            SunriseResult::AllDay { .. } | SunriseResult::AllNight { .. } => {
                Err(NightError::SolarDataUnavailable {
                    latitude: point.get_latitude(),
                    longitude: point.get_longitude(),
                    date,
                })
            }
        }
    }
}

/// Events are reported by their time of day on the UTC date, so away from
/// Greenwich one of them can belong to the neighbouring day. Move it so the
/// window is the daylight period holding the transit.
fn around_transit(
    sunrise: DateTime<Utc>,
    transit: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let sunrise = if sunrise > transit { sunrise - Duration::days(1) } else { sunrise };
    let sunset = if sunset < transit { sunset + Duration::days(1) } else { sunset };
    (sunrise, sunset)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike, Utc};

    use super::*;

    #[test]
    fn test_london_winter() {
        let sun = SpaEphemeris::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let window = sun.solar_window(&Coordinate::new(51.4706, -0.461941), date).unwrap();

        // Sunrise 08:00 and sunset 16:20 UTC, less and plus half an hour
        let rise = window.get_sunrise();
        let set = window.get_sunset();
        assert_eq!(rise.date_naive(), date);
        assert!(rise.hour() == 7 && rise.minute() >= 20 && rise.minute() <= 40, "sunrise {}", rise);
        assert!(set.hour() == 16 && set.minute() >= 40, "sunset {}", set);
    }

    fn assert_agrees_with_approximation(point: Coordinate, date: NaiveDate) {
        use crate::earth::solar::ApproximateSun;

        let precise = SpaEphemeris::new().solar_window(&point, date).unwrap();
        let rough = ApproximateSun::new().solar_window(&point, date).unwrap();
        assert!(precise.get_sunrise() < precise.get_sunset(), "{:?}", precise);
        assert!(
            (precise.get_sunrise() - rough.get_sunrise()).num_minutes().abs() < 10,
            "sunrise {} against {}",
            precise.get_sunrise(),
            rough.get_sunrise()
        );
        assert!(
            (precise.get_sunset() - rough.get_sunset()).num_minutes().abs() < 10,
            "sunset {} against {}",
            precise.get_sunset(),
            rough.get_sunset()
        );
    }

    #[test]
    fn test_agrees_with_approximation_sydney() {
        // Sunrise falls on the previous UTC date
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_agrees_with_approximation(Coordinate::new(-33.9461, 151.1772), date);
    }

    #[test]
    fn test_agrees_with_approximation_los_angeles() {
        // Sunset falls on the next UTC date
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_agrees_with_approximation(Coordinate::new(33.9425, -118.408), date);
    }

    #[test]
    fn test_los_angeles_window() {
        let sun = SpaEphemeris::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let window = sun.solar_window(&Coordinate::new(33.9425, -118.408), date).unwrap();
        // Roughly 07:00 to 17:10 PST, widened by half an hour
        assert_eq!(window.get_sunrise().date_naive(), date);
        assert_eq!(window.get_sunset().date_naive(), date.succ_opt().unwrap());
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 1, 15, 17, 0, 0).unwrap()));
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 1, 16, 1, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()));
    }

    #[test]
    fn test_around_transit() {
        let at = |d, h| Utc.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap();
        // West: sunset listed before the transit belongs to the next day
        assert_eq!(around_transit(at(15, 15), at(15, 20), at(15, 1)), (at(15, 15), at(16, 1)));
        // East: sunrise listed after the transit belongs to the previous day
        assert_eq!(around_transit(at(15, 21), at(15, 2), at(15, 7)), (at(14, 21), at(15, 7)));
        assert_eq!(around_transit(at(15, 6), at(15, 12), at(15, 18)), (at(15, 6), at(15, 18)));
    }

    #[test]
    fn test_polar_night_unavailable() {
        let sun = SpaEphemeris::new();
        let date = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();
        let result = sun.solar_window(&Coordinate::new(78.22, 15.65), date);
        assert!(matches!(result, Err(NightError::SolarDataUnavailable { .. })));
    }

    #[test]
    fn test_margin_applied() {
        let sun = SpaEphemeris::new();
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let window = sun.solar_window(&Coordinate::new(0.0, 0.0), date).unwrap();
        let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 7, 0).unwrap();
        let before = noon - window.get_sunrise();
        let after = window.get_sunset() - noon;
        // Half a day of sun plus the half hour margin either side
        assert!((before.num_minutes() - 393).abs() < 5, "before noon {}", before);
        assert!((after.num_minutes() - 393).abs() < 5, "after noon {}", after);
    }
}
