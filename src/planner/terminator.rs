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
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};

use crate::earth::coordinate::Coordinate;
use crate::earth::geodesy::GeodesyProvider;
use crate::earth::solar::{SolarEvent, SolarEventProvider};
use crate::error::{NightError, Result};
use crate::model::route_point::RoutePoint;

pub const MAX_ITERATIONS: usize = 50;
pub const TOLERANCE_MINUTES: f64 = 0.5;

const MINUTES_PER_DAY: f64 = 1440.0;
const HALF_DAY_MINUTES: f64 = 720.0;

/// One pass of the bisection, kept for tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverStep {
    pub iteration: usize,
    pub point: Coordinate,
    pub distance_from_departure: f64,
    pub instant: DateTime<Utc>,
    pub event_instant: DateTime<Utc>,
    pub diff_minutes: f64,
    /// Length of the bracket that was bisected, nautical miles
    pub bracket_length: f64,
}

#[derive(Debug, Clone)]
pub struct CrossingResult {
    point: RoutePoint,
    target: SolarEvent,
    iterations: usize,
    converged: bool,
    steps: Vec<SolverStep>,
}

impl CrossingResult {
    pub fn get_point(&self) -> &RoutePoint {
        &self.point
    }

    pub fn get_instant(&self) -> DateTime<Utc> {
        self.point.get_instant()
    }

    pub fn get_target(&self) -> SolarEvent {
        self.target
    }

    pub fn get_iterations(&self) -> usize {
        self.iterations
    }

    /// False when the iteration budget ran out; the point is then only the
    /// centre of the last bracket.
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    pub fn get_steps(&self) -> &[SolverStep] {
        &self.steps
    }
}

/// Finds where the route meets the terminator by bisecting the route itself.
///
/// The time of the target event changes smoothly along the route, so each
/// pass halves the bracket on whichever side the aircraft passes the event.
/// This assumes the difference between the aircraft's time and the event
/// changes sign only once along the leg, which is not checked. Near-polar
/// routes around an equinox can break it and converge on a false crossing.
pub struct TerminatorSolver<'a> {
    geodesy: &'a dyn GeodesyProvider,
    sun: &'a dyn SolarEventProvider,
    max_iterations: usize,
    tolerance_minutes: f64,
}

impl<'a> TerminatorSolver<'a> {
    pub fn new(geodesy: &'a dyn GeodesyProvider, sun: &'a dyn SolarEventProvider) -> Self {
        Self::with_limits(geodesy, sun, MAX_ITERATIONS, TOLERANCE_MINUTES)
    }

    pub fn with_limits(
        geodesy: &'a dyn GeodesyProvider,
        sun: &'a dyn SolarEventProvider,
        max_iterations: usize,
        tolerance_minutes: f64,
    ) -> Self {
        Self {
            geodesy,
            sun,
            max_iterations: max_iterations.max(1),
            tolerance_minutes,
        }
    }

    pub fn solve(
        &self,
        departure: &RoutePoint,
        arrival: &RoutePoint,
        ground_speed: f64,
        target: SolarEvent,
    ) -> Result<CrossingResult> {
        // Every point on the route is compared with the event on the departure date
        let date = departure.get_instant().date_naive();
        let mut start = *departure.get_loc();
        let mut end = *arrival.get_loc();
        let mut steps: Vec<SolverStep> = Vec::new();
        let mut last: Option<RoutePoint> = None;

        for iteration in 1..=self.max_iterations {
            let bracket_length = self.geodesy.distance(&start, &end)?;
            let mid = self.geodesy.midpoint(&start, &end)?;
            let window = self.sun.solar_window(&mid, date)?;
            let event_instant = window.get(target);

            let distance = self.geodesy.distance(departure.get_loc(), &mid)?;
            let instant = departure.get_instant() + time_en_route(distance, ground_speed);
            let diff = normalise_minutes(minutes_between(event_instant, instant));

            debug!(
                "{:>2} {:.2} {:.2} {:.2}nm {} {} {} {:.2}",
                iteration,
                mid.get_latitude(),
                mid.get_longitude(),
                distance,
                instant.format("%Y-%m-%d %H:%M"),
                target,
                event_instant.format("%Y-%m-%d %H:%M"),
                diff
            );
            steps.push(SolverStep {
                iteration,
                point: mid,
                distance_from_departure: distance,
                instant,
                event_instant,
                diff_minutes: diff,
                bracket_length,
            });

            let point = RoutePoint::new(mid, instant).with_window(window);
            if diff.abs() < self.tolerance_minutes {
                return Ok(CrossingResult {
                    point,
                    target,
                    iterations: iteration,
                    converged: true,
                    steps,
                });
            }

            // Past the event at mid means the crossing lies nearer departure
            if diff > 0.0 {
                end = mid;
            } else {
                start = mid;
            }
            last = Some(point);
        }

        let point = last.ok_or_else(|| {
            NightError::InternalConsistency("Terminator search made no iterations".to_string())
        })?;
        warn!(
            "No {} crossing within {} minutes after {} iterations, using {:.2} {:.2}",
            target,
            self.tolerance_minutes,
            self.max_iterations,
            point.get_loc().get_latitude(),
            point.get_loc().get_longitude()
        );
        Ok(CrossingResult {
            point,
            target,
            iterations: self.max_iterations,
            converged: false,
            steps,
        })
    }
}

fn time_en_route(distance: f64, ground_speed: f64) -> Duration {
    if ground_speed > 0.0 {
        Duration::milliseconds((distance / ground_speed * 3_600_000.0).round() as i64)
    } else {
        Duration::zero()
    }
}

fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 60_000.0
}

/// Fold whole days out of a difference so it lands in [-720, 720) minutes,
/// i.e. compare against the nearest occurrence of the event.
pub(crate) fn normalise_minutes(minutes: f64) -> f64 {
    (minutes + HALF_DAY_MINUTES).rem_euclid(MINUTES_PER_DAY) - HALF_DAY_MINUTES
}
