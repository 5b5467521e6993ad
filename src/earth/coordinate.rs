use crate::error::{NightError, Result};
use crate::util::lat_long_format::LatLongFormat;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Mean earth radius in nautical miles
    pub const EARTH_RADIUS: f64 = 3441.85;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate from untrusted data, rejecting anything off the globe.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(NightError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self::new(latitude, longitude))
    }

    pub fn distance_to(&self, l: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lon2 = l.longitude.to_radians();
        let d_lon = lon1 - lon2;
        let d_lat = lat1 - lat2;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let d = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Self::EARTH_RADIUS * d.abs()
    }

    /// Mean of the two n-vectors, projected back onto the sphere.
    /// Returns None for antipodal points where the mean vanishes.
    pub fn midpoint_with(&self, l: &Coordinate) -> Option<Coordinate> {
        let (x1, y1, z1) = self.to_n_vector();
        let (x2, y2, z2) = l.to_n_vector();
        let (x, y, z) = (x1 + x2, y1 + y2, z1 + z2);

        let norm = (x * x + y * y + z * z).sqrt();
        if norm < 1e-12 {
            return None;
        }
        let (x, y, z) = (x / norm, y / norm, z / norm);

        let lat = z.atan2((x * x + y * y).sqrt());
        let lon = y.atan2(x);
        Some(Coordinate::new(lat.to_degrees(), lon.to_degrees()))
    }

    fn to_n_vector(&self) -> (f64, f64, f64) {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        (lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_latitude_as_string(&self) -> String {
        let formatter = LatLongFormat::lat_format();
        formatter.format(self.latitude)
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }

    pub fn get_longitude_as_string(&self) -> String {
        let formatter = LatLongFormat::long_format();
        formatter.format(self.longitude)
    }
}
