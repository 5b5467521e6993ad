use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::info;
use rust_embed::RustEmbed;

use crate::error::{NightError, Result};
use crate::model::airport::{Airport, AirportRecord};
use crate::model::location::Location;

pub mod coordinate;
pub mod ephemeris;
pub mod geodesy;
pub mod solar;

const BUNDLED_AIRPORTS: &str = "airports.json";

#[derive(RustEmbed)]
#[folder = "resources/data/"]
struct Bundled;

/// Read-only station lookup, loaded once and passed to whoever needs it.
#[derive(Debug, Default)]
pub struct AirportTable {
    airports: HashMap<String, Airport>,
}

impl AirportTable {
    pub fn new(airports: Vec<Airport>) -> Self {
        Self {
            airports: airports
                .into_iter()
                .map(|a| (a.get_id().to_string(), a))
                .collect(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: HashMap<String, AirportRecord> = serde_json::from_reader(reader)?;
        let airports = records
            .into_iter()
            .map(|(id, record)| Airport::from_record(&id, record))
            .collect::<Result<Vec<Airport>>>()?;
        Ok(Self::new(airports))
    }

    /// Load a JSON airport file, gunzipping it first if the name ends in `.gz`.
    pub fn load(path: &Path) -> Result<Self> {
        let timer = std::time::Instant::now();
        let file = fs::File::open(path).map_err(|e| {
            NightError::AirportData(format!("Unable to open {}: {}", path.display(), e))
        })?;
        let table = if path.extension().is_some_and(|ext| ext == "gz") {
            Self::from_reader(BufReader::new(GzDecoder::new(file)))?
        } else {
            Self::from_reader(BufReader::new(file))?
        };
        info!("{} airports loaded from {} in {:?}", table.len(), path.display(), timer.elapsed());
        Ok(table)
    }

    /// The table compiled into the binary, used when no file is configured.
    pub fn bundled() -> Result<Self> {
        let file = Bundled::get(BUNDLED_AIRPORTS)
            .ok_or_else(|| NightError::AirportData("Bundled airport table is missing".to_string()))?;
        let table = Self::from_reader(file.data.as_ref())?;
        info!("{} bundled airports loaded", table.len());
        Ok(table)
    }

    pub fn get_airport_by_id(&self, id: &str) -> Result<&Airport> {
        self.airports
            .get(&id.to_ascii_uppercase())
            .ok_or_else(|| NightError::Lookup(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn test_file(name: &str) -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("resources/test");
        path.push(name);
        path
    }

    #[test]
    fn test_load_json() {
        let table = AirportTable::load(&test_file("airports.json")).unwrap();
        assert_eq!(table.len(), 4);
        let lhr = table.get_airport_by_id("EGLL").unwrap();
        assert_eq!(lhr.get_iata(), "LHR");
        assert_eq!(lhr.get_city(), "London");
    }

    #[test]
    fn test_load_gzip() {
        let table = AirportTable::load(&test_file("airports.json.gz")).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get_airport_by_id("kjfk").unwrap().get_iata(), "JFK");
    }

    #[test]
    fn test_missing_station() {
        let table = AirportTable::load(&test_file("airports.json")).unwrap();
        match table.get_airport_by_id("ZZZZ") {
            Err(NightError::Lookup(code)) => assert_eq!(code, "ZZZZ"),
            other => panic!("Expected lookup failure, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = AirportTable::load(&test_file("no_such_file.json"));
        assert!(matches!(result, Err(NightError::AirportData(_))));
    }

    #[test]
    fn test_bad_coordinate_rejected() {
        let json = r#"{"XXXX": {"iata": "XXX", "city": "Nowhere", "lat": 91.0, "lon": 0.0}}"#;
        let result = AirportTable::from_reader(json.as_bytes());
        assert!(matches!(result, Err(NightError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_bundled() {
        let table = AirportTable::bundled().unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.get_airport_by_id("YSSY").unwrap().get_iata(), "SYD");
    }
}
