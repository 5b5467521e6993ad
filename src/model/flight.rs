/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 */
use chrono::{DateTime, Duration, Utc};

use crate::error::{NightError, Result};
use crate::model::airport::Airport;
use crate::model::location::Location;
use crate::model::route_point::RoutePoint;
use crate::planner::geometry::compute_block_duration;

/// A single scheduled sector between two airports.
#[derive(Debug, Clone)]
pub struct FlightLeg {
    departure: Airport,
    departure_time: DateTime<Utc>,
    arrival: Airport,
    arrival_time: DateTime<Utc>,
    block_time: Duration,
    arrival_next_day: bool,
}

impl FlightLeg {
    /// Arrival clock times earlier than departure are taken to be the next day.
    pub fn new(
        departure: Airport,
        departure_time: DateTime<Utc>,
        arrival: Airport,
        scheduled_arrival: DateTime<Utc>,
    ) -> Result<Self> {
        let block = compute_block_duration(departure_time, scheduled_arrival);
        if block.duration <= Duration::zero() {
            return Err(NightError::InvalidFlight(format!(
                "{} to {} has no block time",
                departure.get_id(),
                arrival.get_id()
            )));
        }
        Ok(Self {
            departure,
            departure_time,
            arrival,
            arrival_time: departure_time + block.duration,
            block_time: block.duration,
            arrival_next_day: block.rolled,
        })
    }

    pub fn get_departure(&self) -> &Airport {
        &self.departure
    }

    pub fn get_departure_time(&self) -> DateTime<Utc> {
        self.departure_time
    }

    pub fn get_arrival(&self) -> &Airport {
        &self.arrival
    }

    pub fn get_arrival_time(&self) -> DateTime<Utc> {
        self.arrival_time
    }

    pub fn get_block_time(&self) -> Duration {
        self.block_time
    }

    pub fn is_arrival_next_day(&self) -> bool {
        self.arrival_next_day
    }

    pub fn departure_point(&self) -> RoutePoint {
        RoutePoint::new(*self.departure.get_loc(), self.departure_time)
    }

    pub fn arrival_point(&self) -> RoutePoint {
        RoutePoint::new(*self.arrival.get_loc(), self.arrival_time)
    }
}
