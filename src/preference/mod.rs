use std::{
    path::PathBuf,
    str::FromStr,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use lazy_static::lazy_static;
use log::{error, warn};
use preferences::{AppInfo, Preferences, PreferencesMap};

use crate::earth::geodesy::EarthModel;
use crate::earth::solar::EphemerisType;
use crate::util::distance_format::Units;

const PREFS_PATH: &str = "calculator";
const APP_INFO: AppInfo = AppInfo {
    name: "night-time-calculator",
    author: "shartrec.com",
};

// Preference constants
pub const AIRPORTS_PATH: &str = "Airports.Path";
pub const UNITS: &str = "Units";
pub const EARTH_MODEL: &str = "Earth.Model";
pub const EPHEMERIS: &str = "Ephemeris.Type";

lazy_static! {
    static ref MANAGER: PreferenceManager = PreferenceManager {
        preferences: {
            match PreferencesMap::<String>::load(&APP_INFO, PREFS_PATH) {
                Ok(map) => Arc::new(RwLock::new(map)),
                Err(e) => {
                    warn!("Error opening preferences {}", e);
                    Arc::new(RwLock::new(PreferencesMap::new()))
                }
            }
        },
        path: Some(PREFS_PATH),
    };
}

pub struct PreferenceManager {
    preferences: Arc<RwLock<PreferencesMap>>,
    path: Option<&'static str>,
}

impl PreferenceManager {
    /// A manager that never touches the preferences file.
    pub fn in_memory() -> Self {
        PreferenceManager {
            preferences: Arc::new(RwLock::new(PreferencesMap::new())),
            path: None,
        }
    }

    pub fn get<T: FromStr>(&self, key: &str) -> Option<T> {
        match self.read().get(key) {
            Some(s) => match s.parse::<T>() {
                Ok(i) => Some(i),
                Err(_e) => {
                    warn!("Ignoring invalid preference {} = {}", key, s);
                    None
                }
            },
            None => None,
        }
    }

    pub fn put<T: ToString>(&self, key: &str, value: T) {
        {
            let mut prefs = self.write();
            prefs.insert(key.to_string(), value.to_string());
        }
        self.store();
    }

    pub fn remove(&self, key: &str) {
        {
            let mut prefs = self.write();
            let _e = prefs.remove(key);
        }
        self.store();
    }

    fn read(&self) -> RwLockReadGuard<'_, PreferencesMap> {
        self.preferences.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, PreferencesMap> {
        self.preferences.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn store(&self) {
        if let Some(path) = self.path {
            let prefs = self.read();
            if let Err(e) = prefs.save(&APP_INFO, path) {
                error!("Unable to save preferences {}", e);
            }
        }
    }
}

pub fn manager() -> &'static PreferenceManager {
    &MANAGER
}

/// Values given on the command line, each overriding its preference.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub airports_path: Option<PathBuf>,
    pub units: Option<Units>,
    pub earth: Option<EarthModel>,
    pub ephemeris: Option<EphemerisType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// None means use the bundled airport table
    pub airports_path: Option<PathBuf>,
    pub units: Units,
    pub earth: EarthModel,
    pub ephemeris: EphemerisType,
}

impl Settings {
    pub fn resolve(overrides: &Overrides, prefs: &PreferenceManager) -> Self {
        Settings {
            airports_path: overrides
                .airports_path
                .clone()
                .or_else(|| prefs.get::<String>(AIRPORTS_PATH).map(PathBuf::from)),
            units: overrides
                .units
                .or_else(|| prefs.get::<Units>(UNITS))
                .unwrap_or_default(),
            earth: overrides
                .earth
                .or_else(|| prefs.get::<EarthModel>(EARTH_MODEL))
                .unwrap_or(EarthModel::Wgs84),
            ephemeris: overrides
                .ephemeris
                .or_else(|| prefs.get::<EphemerisType>(EPHEMERIS))
                .unwrap_or(EphemerisType::Spa),
        }
    }

    /// Keep the command line airports path and units for next time.
    pub fn remember(overrides: &Overrides, prefs: &PreferenceManager) {
        if let Some(path) = &overrides.airports_path {
            prefs.put(AIRPORTS_PATH, path.display());
        }
        if let Some(units) = overrides.units {
            prefs.put(UNITS, units);
        }
    }
}
