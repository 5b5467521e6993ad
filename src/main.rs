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

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, TimeZone, Utc};
use clap::Parser;
use log::{error, info};

use earth::geodesy::EarthModel;
use earth::solar::EphemerisType;
use earth::AirportTable;
use error::Result;
use model::flight::FlightLeg;
use planner::night_time::NightTimeCalculator;
use preference::{Overrides, Settings};
use util::distance_format::Units;
use util::flight_code_parser::{FlightCode, FlightCodeParser};
use util::report::ReportWriter;
use util::Logger;

mod earth;
mod error;
mod model;
mod planner;
mod preference;
mod util;

#[derive(Parser)]
#[command(name = "nightflight", version = util::info::VERSION, about = util::info::ABOUT)]
struct Cli {
    /// Flight as DDDDTTTTAAAATTTT[YYYYMMDD], times in UTC
    flight_code: String,

    /// Airport data file (JSON, optionally gzipped)
    #[arg(long)]
    airports: Option<PathBuf>,

    /// Report units: Nm, Mi or Km
    #[arg(long)]
    units: Option<Units>,

    /// Earth model for distances and midpoints: wgs84 or sphere
    #[arg(long)]
    earth: Option<EarthModel>,

    /// Sunrise and sunset source: spa or approx
    #[arg(long)]
    ephemeris: Option<EphemerisType>,

    /// Print every step of the terminator search
    #[arg(long)]
    trace: bool,

    /// More logging, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Save the airports path and units given here as preferences
    #[arg(long)]
    remember: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logger = Logger::new(util::verbosity_level(cli.verbose));
    info!("{} {} started", util::info::PROGRAM_NAME, util::info::VERSION);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let overrides = Overrides {
        airports_path: cli.airports.clone(),
        units: cli.units,
        earth: cli.earth,
        ephemeris: cli.ephemeris,
    };
    let prefs = preference::manager();
    let settings = Settings::resolve(&overrides, prefs);
    if cli.remember {
        Settings::remember(&overrides, prefs);
    }

    let code = FlightCodeParser::new().parse(&cli.flight_code)?;
    let airports = match &settings.airports_path {
        Some(path) => AirportTable::load(path)?,
        None => AirportTable::bundled()?,
    };
    let leg = build_leg(&code, &airports, Utc::now().date_naive())?;

    let geodesy = settings.earth.provider();
    let sun = settings.ephemeris.provider();
    info!("Using {} earth and {} ephemeris", settings.earth, settings.ephemeris);
    let report = NightTimeCalculator::new(geodesy.as_ref(), sun.as_ref()).calculate(&leg)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ReportWriter::new(settings.units, cli.trace).write(&mut out, &report)?;
    out.flush()?;
    Ok(())
}

/// Both stations must be known before anything is computed.
fn build_leg(code: &FlightCode, airports: &AirportTable, today: NaiveDate) -> Result<FlightLeg> {
    let departure = airports.get_airport_by_id(&code.departure_code)?.clone();
    let arrival = airports.get_airport_by_id(&code.arrival_code)?.clone();
    let date = code.date_or(today);
    FlightLeg::new(
        departure,
        Utc.from_utc_datetime(&date.and_time(code.departure_time)),
        arrival,
        Utc.from_utc_datetime(&date.and_time(code.arrival_time)),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use clap::Parser;

    use super::*;
    use crate::error::NightError;
    use crate::model::location::Location;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_build_leg_from_code() {
        let airports = AirportTable::bundled().unwrap();
        let code = FlightCodeParser::new().parse("egll2300kjfk0700").unwrap();
        let leg = build_leg(&code, &airports, today()).unwrap();
        assert_eq!(leg.get_departure().get_id(), "EGLL");
        assert_eq!(leg.get_arrival().get_id(), "KJFK");
        assert_eq!(leg.get_departure_time(), Utc.with_ymd_and_hms(2024, 1, 15, 23, 0, 0).unwrap());
        assert_eq!(leg.get_arrival_time(), Utc.with_ymd_and_hms(2024, 1, 16, 7, 0, 0).unwrap());
        assert_eq!(leg.get_block_time(), Duration::hours(8));
        assert!(leg.is_arrival_next_day());
    }

    #[test]
    fn test_build_leg_unknown_airport() {
        let airports = AirportTable::bundled().unwrap();
        let code = FlightCodeParser::new().parse("ZZZZ1000KJFK1800").unwrap();
        assert!(matches!(build_leg(&code, &airports, today()), Err(NightError::Lookup(_))));
        let code = FlightCodeParser::new().parse("EGLL1000ZZZZ1800").unwrap();
        assert!(matches!(build_leg(&code, &airports, today()), Err(NightError::Lookup(_))));
    }

    #[test]
    fn test_build_leg_zero_block_time() {
        let airports = AirportTable::bundled().unwrap();
        let code = FlightCodeParser::new().parse("EGLL1000KJFK1000").unwrap();
        assert!(matches!(build_leg(&code, &airports, today()), Err(NightError::InvalidFlight(_))));
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "nightflight",
            "EGLL1500KJFK2300",
            "--units",
            "km",
            "--earth",
            "sphere",
            "--ephemeris",
            "approx",
            "--trace",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.flight_code, "EGLL1500KJFK2300");
        assert_eq!(cli.units, Some(Units::Km));
        assert_eq!(cli.earth, Some(EarthModel::Sphere));
        assert_eq!(cli.ephemeris, Some(EphemerisType::Approximate));
        assert!(cli.trace);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.remember);
        assert!(cli.airports.is_none());

        assert!(Cli::try_parse_from(["nightflight", "EGLL1500KJFK2300", "--earth", "flat"]).is_err());
        assert!(Cli::try_parse_from(["nightflight"]).is_err());
    }
}
