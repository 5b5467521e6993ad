/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 *
 * This file is part of Kelpie Night Time Calculator.
 *
 * Kelpie Night Time Calculator is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Night Time Calculator is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Night Time Calculator; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};

use crate::earth::coordinate::Coordinate;
use crate::earth::ephemeris::SpaEphemeris;
use crate::error::{NightError, Result};

/// Civil twilight allowance applied before sunrise and after sunset.
pub const TWILIGHT_MARGIN_MINUTES: i64 = 30;

// Apparent altitude of the sun's upper limb at rise and set
const SUNRISE_ALTITUDE_DEG: f64 = -0.833;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarEvent::Sunrise => write!(f, "sunrise"),
            SolarEvent::Sunset => write!(f, "sunset"),
        }
    }
}

/// Usable daylight at one place, twilight margin included. A provider returns
/// the daylight period whose solar noon falls on the requested UTC date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarWindow {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl SolarWindow {
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Self {
        Self { sunrise, sunset }
    }

    /// Widen raw sunrise/sunset instants by the margin on both sides.
    pub fn with_margin(sunrise: DateTime<Utc>, sunset: DateTime<Utc>, margin: Duration) -> Self {
        Self::new(sunrise - margin, sunset + margin)
    }

    pub fn get_sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    pub fn get_sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    pub fn get(&self, event: SolarEvent) -> DateTime<Utc> {
        match event {
            SolarEvent::Sunrise => self.sunrise,
            SolarEvent::Sunset => self.sunset,
        }
    }

    /// Both ends inclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.sunrise <= instant && instant <= self.sunset
    }
}

pub trait SolarEventProvider {
    fn solar_window(&self, point: &Coordinate, date: NaiveDate) -> Result<SolarWindow>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EphemerisType {
    Spa,
    Approximate,
}

impl EphemerisType {
    pub fn provider(&self) -> Box<dyn SolarEventProvider> {
        match self {
            EphemerisType::Spa => Box::new(SpaEphemeris::new()),
            EphemerisType::Approximate => Box::new(ApproximateSun::new()),
        }
    }
}

impl FromStr for EphemerisType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spa" => Ok(EphemerisType::Spa),
            "approx" | "approximate" => Ok(EphemerisType::Approximate),
            _ => Err(format!("Unknown ephemeris {}", s)),
        }
    }
}

impl fmt::Display for EphemerisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EphemerisType::Spa => write!(f, "spa"),
            EphemerisType::Approximate => write!(f, "approx"),
        }
    }
}

/// Sunrise and sunset from the sub-solar point. Good to a few minutes,
/// which is plenty for a night time estimate.
pub struct ApproximateSun {
    margin: Duration,
}

impl ApproximateSun {
    pub fn new() -> Self {
        Self {
            margin: Duration::minutes(TWILIGHT_MARGIN_MINUTES),
        }
    }

    fn solar_noon(point: &Coordinate, date: NaiveDate) -> Option<DateTime<Utc>> {
        let midday = date.and_hms_opt(12, 0, 0)?.and_utc();
        let (_, subsolar_lon) = subsolar_point(midday);

        // The sub-solar point travels west at 15 degrees an hour
        let mut offset = subsolar_lon - point.get_longitude();
        if offset >= 180.0 {
            offset -= 360.0;
        } else if offset < -180.0 {
            offset += 360.0;
        }
        Some(midday + Duration::seconds((offset / 15.0 * 3600.0).round() as i64))
    }
}

impl Default for ApproximateSun {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarEventProvider for ApproximateSun {
    fn solar_window(&self, point: &Coordinate, date: NaiveDate) -> Result<SolarWindow> {
        let unavailable = || NightError::SolarDataUnavailable {
            latitude: point.get_latitude(),
            longitude: point.get_longitude(),
            date,
        };

        let noon = Self::solar_noon(point, date).ok_or_else(unavailable)?;
        let (declination, _) = subsolar_point(noon);

        let lat = point.get_latitude().to_radians();
        let decl = declination.to_radians();
        let cos_h = (SUNRISE_ALTITUDE_DEG.to_radians().sin() - lat.sin() * decl.sin())
            / (lat.cos() * decl.cos());
        if !(-1.0..=1.0).contains(&cos_h) {
            return Err(unavailable());
        }

        let half_day = Duration::seconds((cos_h.acos().to_degrees() / 15.0 * 3600.0).round() as i64);
        Ok(SolarWindow::with_margin(noon - half_day, noon + half_day, self.margin))
    }
}

pub(crate) fn subsolar_point(datetime: DateTime<Utc>) -> (f64, f64) {
    let timestamp = datetime.timestamp() as f64;

    // Days since J2000 epoch (Jan 1, 2000, 12:00 UTC)
    let days_since_j2000 = (timestamp - 946728000.0) / 86400.0;

    // Mean longitude of the Sun (deg)
    let mean_long = (280.460 + 0.9856474 * days_since_j2000) % 360.0;

    // Mean anomaly of the Sun (deg)
    let mean_anom = (357.528 + 0.9856003 * days_since_j2000) % 360.0;
    let mean_anom_rad = mean_anom.to_radians();

    // Ecliptic longitude (deg)
    let eclip_long = (mean_long + 1.915 * mean_anom_rad.sin() + 0.020 * (2.0 * mean_anom_rad).sin()) % 360.0;
    let eclip_long_rad = eclip_long.to_radians();

    let obliquity = 23.439_f64.to_radians();

    // Subsolar latitude = solar declination
    let decl = (eclip_long_rad.sin() * obliquity.sin()).asin().to_degrees();

    let eot = equation_of_time(datetime.ordinal());
    let time = datetime.time() + Duration::seconds((eot * 60.0) as i64);
    let minutes_from_noon = 720.0 - (time.hour() * 60 + time.minute()) as f64;
    let subsolar_lon = ((minutes_from_noon / 1440.0) * 360.0) % 360.0;

    let lon = if subsolar_lon > 180.0 {
        subsolar_lon - 360.0
    } else if subsolar_lon < -180.0 {
        subsolar_lon + 360.0
    } else {
        subsolar_lon
    };

    (decl, lon)
}

/// Minutes, positive when the sundial is ahead of the clock.
fn equation_of_time(day_of_year: u32) -> f64 {
    let b_rad = (360.0 / 365.0 * (day_of_year as f64 - 81.0)).to_radians();

    9.87 * (2.0 * b_rad).sin() - 7.53 * b_rad.cos() - 1.5 * b_rad.sin()
}
