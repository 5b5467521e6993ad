/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 */
use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NightError>;

#[derive(Debug, Error)]
pub enum NightError {
    #[error("Unknown airport {0}")]
    Lookup(String),

    #[error("No sunrise or sunset at {latitude:.2} {longitude:.2} on {date}")]
    SolarDataUnavailable {
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    },

    #[error("Geodesy failure: {0}")]
    Geodesy(String),

    #[error("Coordinate out of range: {latitude} {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid flight: {0}")]
    InvalidFlight(String),

    #[error("Invalid flight code: {0}")]
    FlightCode(String),

    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    #[error("Ephemeris failure: {0}")]
    Ephemeris(String),

    #[error("Unable to load airport data: {0}")]
    AirportData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
