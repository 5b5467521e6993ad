/*
 * Copyright (c) 2003-2023. Trevor Campbell and others.
 */
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MILES_PER_NM: f64 = 6076.0 / 5280.0;
const KM_PER_NM: f64 = 1.609 * 6076.0 / 5280.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Nm,
    Mi,
    Km,
}

impl Units {
    /// Multiplier from nautical miles.
    pub fn conversion_factor(&self) -> f64 {
        match self {
            Units::Nm => 1.0,
            Units::Mi => MILES_PER_NM,
            Units::Km => KM_PER_NM,
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nm" => Ok(Units::Nm),
            "mi" => Ok(Units::Mi),
            "km" => Ok(Units::Km),
            _ => Err(format!("Unknown units {}, expected Nm, Mi or Km", s)),
        }
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Units::Nm => "Nm",
            Units::Mi => "Mi",
            Units::Km => "Km",
        };
        write!(f, "{}", name)
    }
}

pub struct DistanceFormat {
    units: Units,
}

impl DistanceFormat {
    pub fn new(units: Units) -> Self {
        Self { units }
    }

    pub fn format(&self, distance: &f64) -> String {
        let converted_distance = distance * self.units.conversion_factor();
        format!("{:.1}{}", converted_distance, self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::{DistanceFormat, Units};

    #[test]
    fn test_fmt_distance() {
        assert_eq!(DistanceFormat::new(Units::Nm).format(&35.0), "35.0Nm");
        assert_eq!(DistanceFormat::new(Units::Mi).format(&34.0), "39.1Mi");
        assert_eq!(DistanceFormat::new(Units::Km).format(&34.0), "63.0Km");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("Nm".parse::<Units>().unwrap(), Units::Nm);
        assert_eq!("mi".parse::<Units>().unwrap(), Units::Mi);
        assert_eq!("KM".parse::<Units>().unwrap(), Units::Km);
        assert!("furlong".parse::<Units>().is_err());
        assert_eq!(Units::default().to_string(), "Nm");
    }
}
