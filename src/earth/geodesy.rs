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
use std::str::FromStr;

use geo::{Distance, Geodesic, InterpolatePoint, Point};

use crate::earth::coordinate::Coordinate;
use crate::error::{NightError, Result};

pub const METRES_PER_NM: f64 = 1852.0;

/// Distance and midpoint along the route between two points.
pub trait GeodesyProvider {
    /// Distance in nautical miles
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64>;
    fn midpoint(&self, a: &Coordinate, b: &Coordinate) -> Result<Coordinate>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarthModel {
    Wgs84,
    Sphere,
}

impl EarthModel {
    pub fn provider(&self) -> Box<dyn GeodesyProvider> {
        match self {
            EarthModel::Wgs84 => Box::new(Wgs84Earth),
            EarthModel::Sphere => Box::new(SphericalEarth),
        }
    }
}

impl FromStr for EarthModel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wgs84" => Ok(EarthModel::Wgs84),
            "sphere" | "spherical" => Ok(EarthModel::Sphere),
            _ => Err(format!("Unknown earth model {}", s)),
        }
    }
}

impl std::fmt::Display for EarthModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EarthModel::Wgs84 => write!(f, "wgs84"),
            EarthModel::Sphere => write!(f, "sphere"),
        }
    }
}

/// Great circle on a sphere of `Coordinate::EARTH_RADIUS`.
pub struct SphericalEarth;

impl GeodesyProvider for SphericalEarth {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64> {
        Ok(a.distance_to(b))
    }

    fn midpoint(&self, a: &Coordinate, b: &Coordinate) -> Result<Coordinate> {
        a.midpoint_with(b).ok_or_else(|| {
            NightError::Geodesy(format!(
                "No unique midpoint between antipodal points {:.4} {:.4} and {:.4} {:.4}",
                a.get_latitude(),
                a.get_longitude(),
                b.get_latitude(),
                b.get_longitude()
            ))
        })
    }
}

/// Geodesics on the WGS84 ellipsoid.
pub struct Wgs84Earth;

impl Wgs84Earth {
    fn to_point(c: &Coordinate) -> Point<f64> {
        Point::new(c.get_longitude(), c.get_latitude())
    }
}

impl GeodesyProvider for Wgs84Earth {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64> {
        let metres = Geodesic::distance(Self::to_point(a), Self::to_point(b));
        if metres.is_nan() {
            return Err(NightError::Geodesy("Geodesic distance is undefined".to_string()));
        }
        Ok(metres / METRES_PER_NM)
    }

    fn midpoint(&self, a: &Coordinate, b: &Coordinate) -> Result<Coordinate> {
        let mid = Geodesic::point_at_ratio_between(Self::to_point(a), Self::to_point(b), 0.5);
        if mid.y().is_nan() || mid.x().is_nan() {
            return Err(NightError::Geodesy("Geodesic midpoint is undefined".to_string()));
        }
        Ok(Coordinate::new(mid.y(), mid.x()))
    }
}
