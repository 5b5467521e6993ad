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

use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex_lite::{Captures, Regex, RegexBuilder};

use crate::error::{NightError, Result};

lazy_static! {
    static ref FLIGHT_CODE: Regex =
        RegexBuilder::new(r"^([A-Z0-9]{4})([0-9]{4})([A-Z0-9]{4})([0-9]{4})([0-9]{8})?$")
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("Flight code pattern does not compile: {}", e));
}

/// A parsed `DDDDTTTTAAAATTTT[YYYYMMDD]` flight code. Times are UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightCode {
    pub departure_code: String,
    pub departure_time: NaiveTime,
    pub arrival_code: String,
    pub arrival_time: NaiveTime,
    pub date: Option<NaiveDate>,
}

impl FlightCode {
    /// The flight date, or `default` when the code carried none.
    pub fn date_or(&self, default: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(default)
    }
}

pub struct FlightCodeParser {}

impl FlightCodeParser {
    pub fn new() -> Self {
        FlightCodeParser {}
    }

    pub fn parse(&self, code: &str) -> Result<FlightCode> {
        let code = code.trim();
        let caps = FLIGHT_CODE.captures(code).ok_or_else(|| {
            NightError::FlightCode(format!(
                "'{}' is not of the form DDDDTTTTAAAATTTT[YYYYMMDD]",
                code
            ))
        })?;

        let date = match caps.get(5) {
            Some(m) => Some(
                NaiveDate::parse_from_str(m.as_str(), "%Y%m%d").map_err(|_| {
                    NightError::FlightCode(format!("Invalid date {}", m.as_str()))
                })?,
            ),
            None => None,
        };

        Ok(FlightCode {
            departure_code: Self::station(&caps, 1),
            departure_time: Self::time(&caps, 2)?,
            arrival_code: Self::station(&caps, 3),
            arrival_time: Self::time(&caps, 4)?,
            date,
        })
    }

    fn station(caps: &Captures, group: usize) -> String {
        caps.get(group)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default()
    }

    fn time(caps: &Captures, group: usize) -> Result<NaiveTime> {
        let text = caps.get(group).map(|m| m.as_str()).unwrap_or_default();
        let hour = text.get(0..2).and_then(|t| t.parse::<u32>().ok());
        let min = text.get(2..4).and_then(|t| t.parse::<u32>().ok());
        match (hour, min) {
            (Some(h), Some(m)) => NaiveTime::from_hms_opt(h, m, 0)
                .ok_or_else(|| NightError::FlightCode(format!("Invalid time {}", text))),
            _ => Err(NightError::FlightCode(format!("Invalid time {}", text))),
        }
    }
}
