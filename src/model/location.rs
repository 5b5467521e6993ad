use crate::earth::coordinate::Coordinate;

pub trait Location {
    fn get_id(&self) -> &str;
    fn get_loc(&self) -> &Coordinate;
    fn get_name(&self) -> &str;

    fn get_lat(&self) -> f64 {
        self.get_loc().get_latitude()
    }

    fn get_lat_as_string(&self) -> String {
        self.get_loc().get_latitude_as_string()
    }

    fn get_long(&self) -> f64 {
        self.get_loc().get_longitude()
    }

    fn get_long_as_string(&self) -> String {
        self.get_loc().get_longitude_as_string()
    }
}
