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

use serde::Deserialize;

use crate::earth::coordinate::Coordinate;
use crate::error::Result;

use super::location::Location;

/// One entry of the airport reference file, keyed by station code.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportRecord {
    pub iata: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    id: String,
    iata: String,
    city: String,
    coordinate: Coordinate,
}

impl Airport {
    pub fn new(id: String, iata: String, city: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            iata,
            city,
            coordinate: Coordinate::new(latitude, longitude),
        }
    }

    pub fn from_record(id: &str, record: AirportRecord) -> Result<Self> {
        let coordinate = Coordinate::try_new(record.lat, record.lon)?;
        Ok(Self {
            id: id.to_ascii_uppercase(),
            iata: record.iata,
            city: record.city,
            coordinate,
        })
    }

    pub fn get_iata(&self) -> &str {
        &self.iata
    }

    pub fn get_city(&self) -> &str {
        &self.city
    }
}

impl Location for Airport {
    fn get_id(&self) -> &str {
        &self.id
    }

    fn get_loc(&self) -> &Coordinate {
        &self.coordinate
    }

    fn get_name(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IATA: {} City: {}", self.id, self.iata, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record() {
        let record = AirportRecord {
            iata: "SYD".to_string(),
            city: "Sydney".to_string(),
            lat: -33.9461,
            lon: 151.177,
        };
        let airport = Airport::from_record("yssy", record).unwrap();
        assert_eq!(airport.get_id(), "YSSY");
        assert_eq!(airport.get_iata(), "SYD");
        assert_eq!(airport.get_lat(), -33.9461);
        assert_eq!(airport.to_string(), "YSSY IATA: SYD City: Sydney");
    }

    #[test]
    fn test_from_record_bad_latitude() {
        let record = AirportRecord {
            iata: "XXX".to_string(),
            city: "Nowhere".to_string(),
            lat: 133.9,
            lon: 151.177,
        };
        assert!(Airport::from_record("XXXX", record).is_err());
    }
}
