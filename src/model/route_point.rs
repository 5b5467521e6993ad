use chrono::{DateTime, Utc};

use crate::earth::coordinate::Coordinate;
use crate::earth::solar::SolarWindow;

/// A position on the route and when the aircraft is expected there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePoint {
    coordinate: Coordinate,
    instant: DateTime<Utc>,
    window: Option<SolarWindow>,
}

impl RoutePoint {
    pub fn new(coordinate: Coordinate, instant: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            instant,
            window: None,
        }
    }

    pub fn with_window(self, window: SolarWindow) -> Self {
        Self {
            window: Some(window),
            ..self
        }
    }

    pub fn get_loc(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn get_instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn get_window(&self) -> Option<&SolarWindow> {
        self.window.as_ref()
    }
}
