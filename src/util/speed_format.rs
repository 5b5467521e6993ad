use crate::util::distance_format::Units;

pub struct SpeedFormat {
    conversion_factor: f64,
    speed_unit: &'static str,
}

impl SpeedFormat {
    pub fn new(units: Units) -> Self {
        let speed_unit = match units {
            Units::Nm => "Kts",
            Units::Mi => "Mph",
            Units::Km => "Kph",
        };
        SpeedFormat { conversion_factor: units.conversion_factor(), speed_unit }
    }

    pub fn format(&self, speed: f64) -> String {
        let converted_speed = speed * self.conversion_factor;

        format!("{:.0}{}", converted_speed, self.speed_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::SpeedFormat;
    use crate::util::distance_format::Units;

    #[test]
    fn test_fmt_speed() {
        assert_eq!(SpeedFormat::new(Units::Nm).format(34.4), "34Kts");
        assert_eq!(SpeedFormat::new(Units::Nm).format(34.0), "34Kts");
        assert_eq!(SpeedFormat::new(Units::Nm).format(34.9), "35Kts");
        assert_eq!(SpeedFormat::new(Units::Mi).format(34.5), "40Mph");
        assert_eq!(SpeedFormat::new(Units::Km).format(34.5), "64Kph");
    }

}
