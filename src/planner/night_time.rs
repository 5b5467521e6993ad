/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 */
use chrono::Duration;
use log::{info, warn};

use crate::earth::geodesy::GeodesyProvider;
use crate::earth::solar::{SolarEvent, SolarEventProvider, SolarWindow};
use crate::error::{NightError, Result};
use crate::model::flight::FlightLeg;
use crate::model::location::Location;
use crate::model::route_point::RoutePoint;
use crate::planner::geometry::{classify, compute_distance, ground_speed, DayNight};
use crate::planner::terminator::{CrossingResult, TerminatorSolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightScenario {
    FullDay,
    DayToNight,
    NightToDay,
    FullNight,
}

impl FlightScenario {
    pub fn from_classes(departure: DayNight, arrival: DayNight) -> Self {
        match (departure, arrival) {
            (DayNight::Day, DayNight::Day) => FlightScenario::FullDay,
            (DayNight::Day, DayNight::Night) => FlightScenario::DayToNight,
            (DayNight::Night, DayNight::Day) => FlightScenario::NightToDay,
            (DayNight::Night, DayNight::Night) => FlightScenario::FullNight,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FlightScenario::FullDay => "Full day flight",
            FlightScenario::DayToNight => "Flight from day to night, night landing",
            FlightScenario::NightToDay => "Flight from night to day, day landing",
            FlightScenario::FullNight => "Full night time",
        }
    }
}

/// Everything worked out for one flight.
#[derive(Debug, Clone)]
pub struct NightTimeReport {
    pub leg: FlightLeg,
    pub distance: f64,
    pub ground_speed: f64,
    pub departure_window: SolarWindow,
    pub arrival_window: SolarWindow,
    pub departure_class: DayNight,
    pub arrival_class: DayNight,
    pub scenario: FlightScenario,
    pub crossing: Option<CrossingResult>,
    pub night_time: Duration,
}

pub struct NightTimeCalculator<'a> {
    geodesy: &'a dyn GeodesyProvider,
    sun: &'a dyn SolarEventProvider,
}

impl<'a> NightTimeCalculator<'a> {
    pub fn new(geodesy: &'a dyn GeodesyProvider, sun: &'a dyn SolarEventProvider) -> Self {
        Self { geodesy, sun }
    }

    pub fn calculate(&self, leg: &FlightLeg) -> Result<NightTimeReport> {
        let departure = leg.departure_point();
        let arrival = leg.arrival_point();

        let distance = compute_distance(self.geodesy, departure.get_loc(), arrival.get_loc())?;
        let speed = ground_speed(distance, leg.get_block_time());

        let departure_window = self.window_at(&departure)?;
        let arrival_window = self.window_at(&arrival)?;

        let departure_class = classify(&departure_window, departure.get_instant());
        let arrival_class = classify(&arrival_window, arrival.get_instant());
        let scenario = FlightScenario::from_classes(departure_class, arrival_class);
        info!(
            "{} to {}: {:.1}nm at {:.0}kt, {}",
            leg.get_departure().get_id(),
            leg.get_arrival().get_id(),
            distance,
            speed,
            scenario.description()
        );

        let solver = TerminatorSolver::new(self.geodesy, self.sun);
        let (crossing, night_time) = match scenario {
            FlightScenario::FullDay => (None, Duration::zero()),
            FlightScenario::DayToNight => {
                let crossing = solver.solve(
                    &departure.with_window(departure_window),
                    &arrival,
                    speed,
                    SolarEvent::Sunset,
                )?;
                let night = checked_night(arrival.get_instant() - crossing.get_instant(), scenario)?;
                (Some(crossing), night)
            }
            FlightScenario::NightToDay => {
                let crossing = solver.solve(
                    &departure.with_window(departure_window),
                    &arrival,
                    speed,
                    SolarEvent::Sunrise,
                )?;
                let night = checked_night(crossing.get_instant() - departure.get_instant(), scenario)?;
                (Some(crossing), night)
            }
            FlightScenario::FullNight => (None, leg.get_block_time()),
        };

        if let Some(c) = &crossing {
            if !c.is_converged() {
                warn!(
                    "{} crossing for {} to {} is approximate",
                    c.get_target(),
                    leg.get_departure().get_id(),
                    leg.get_arrival().get_id()
                );
            }
        }

        Ok(NightTimeReport {
            leg: leg.clone(),
            distance,
            ground_speed: speed,
            departure_window,
            arrival_window,
            departure_class,
            arrival_class,
            scenario,
            crossing,
            night_time,
        })
    }
}

impl NightTimeCalculator<'_> {
    /// The window for the point's UTC date, unless the instant falls in the
    /// daylight of the neighbouring date, as a late local afternoon west of
    /// Greenwich does.
    fn window_at(&self, point: &RoutePoint) -> Result<SolarWindow> {
        let date = point.get_instant().date_naive();
        let window = self.sun.solar_window(point.get_loc(), date)?;
        if window.contains(point.get_instant()) {
            return Ok(window);
        }
        let neighbour = if point.get_instant() < window.get_sunrise() {
            date.pred_opt()
        } else {
            date.succ_opt()
        };
        if let Some(other_date) = neighbour {
            let other = self.sun.solar_window(point.get_loc(), other_date)?;
            if other.contains(point.get_instant()) {
                return Ok(other);
            }
        }
        Ok(window)
    }
}

/// A negative night means classification and the crossing disagree.
fn checked_night(night: Duration, scenario: FlightScenario) -> Result<Duration> {
    if night < Duration::zero() {
        return Err(NightError::InternalConsistency(format!(
            "{} gave a negative night time of {} minutes",
            scenario.description(),
            night.num_minutes()
        )));
    }
    Ok(night)
}
