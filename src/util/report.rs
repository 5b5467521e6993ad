/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 */
use std::io::Write;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::airport::Airport;
use crate::model::location::Location;
use crate::planner::night_time::NightTimeReport;
use crate::planner::terminator::CrossingResult;
use crate::util::distance_format::{DistanceFormat, Units};
use crate::util::hour_format::HourFormat;
use crate::util::speed_format::SpeedFormat;

const UI_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct ReportWriter {
    distance_format: DistanceFormat,
    speed_format: SpeedFormat,
    hour_format: HourFormat,
    trace: bool,
}

impl ReportWriter {
    pub fn new(units: Units, trace: bool) -> Self {
        Self {
            distance_format: DistanceFormat::new(units),
            speed_format: SpeedFormat::new(units),
            hour_format: HourFormat::new(),
            trace,
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, report: &NightTimeReport) -> Result<()> {
        let leg = &report.leg;
        Self::write_airport(out, "Departure: ", leg.get_departure(), leg.get_departure_time())?;
        Self::write_airport(out, "Arrival:   ", leg.get_arrival(), leg.get_arrival_time())?;
        writeln!(
            out,
            "Distance:  {} Flight time: {} Ground speed: {}",
            self.distance_format.format(&report.distance),
            self.hour_format.format(&leg.get_block_time()),
            self.speed_format.format(report.ground_speed)
        )?;
        writeln!(
            out,
            "Departure Sunrise: {} Sunset: {}",
            ui_time(report.departure_window.get_sunrise()),
            ui_time(report.departure_window.get_sunset())
        )?;
        writeln!(
            out,
            "Arrival   Sunrise: {} Sunset: {}",
            ui_time(report.arrival_window.get_sunrise()),
            ui_time(report.arrival_window.get_sunset())
        )?;
        writeln!(out, "{}", report.scenario.description())?;

        if let Some(crossing) = &report.crossing {
            if self.trace {
                self.write_trace(out, crossing)?;
            }
            let loc = crossing.get_point().get_loc();
            writeln!(
                out,
                "Crossing:  {} {} at {} ({} iterations)",
                loc.get_latitude_as_string(),
                loc.get_longitude_as_string(),
                ui_time(crossing.get_instant()),
                crossing.get_iterations()
            )?;
            if !crossing.is_converged() {
                writeln!(
                    out,
                    "Warning: {} crossing is approximate, not found within {} iterations",
                    crossing.get_target(),
                    crossing.get_iterations()
                )?;
            }
        }

        writeln!(out, "Night time: {}", self.hour_format.format_long(&report.night_time))?;
        Ok(())
    }

    fn write_airport<W: Write>(out: &mut W, label: &str, airport: &Airport, time: DateTime<Utc>) -> Result<()> {
        writeln!(
            out,
            "{}{} Time: {} IATA: {} City: {}",
            label,
            airport.get_id(),
            ui_time(time),
            airport.get_iata(),
            airport.get_city()
        )?;
        Ok(())
    }

    fn write_trace<W: Write>(&self, out: &mut W, crossing: &CrossingResult) -> Result<()> {
        writeln!(
            out,
            "lat\tlon\tdist\ttime on route\t\t{}\t\t\tdiff (minutes)",
            crossing.get_target()
        )?;
        for step in crossing.get_steps() {
            writeln!(
                out,
                "{:.2}\t{:.2}\t{:.2}\t{}\t{}\t{:.2}",
                step.point.get_latitude(),
                step.point.get_longitude(),
                step.distance_from_departure,
                ui_time(step.instant),
                ui_time(step.event_instant),
                step.diff_minutes
            )?;
        }
        Ok(())
    }
}

fn ui_time(time: DateTime<Utc>) -> String {
    time.format(UI_FORMAT).to_string()
}
