use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::host::location::LocationOptions;
use crate::utils::geo::Coordinate;

/// What the simulated device answers when asked for its position
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeviceLocation {
    Fixed(Coordinate),
    Denied,
    Unsupported,
}

impl FromStr for DeviceLocation {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim() {
            "denied" => Ok(Self::Denied),
            "unsupported" => Ok(Self::Unsupported),
            other => {
                let (lat, lng) = other.split_once(',').ok_or_else(|| {
                    AppError::Config(format!(
                        "DEVICE_LOCATION must be 'lat,lon', 'denied' or 'unsupported', got '{other}'"
                    ))
                })?;
                let lat = parse_number("DEVICE_LOCATION latitude", lat.trim())?;
                let lng = parse_number("DEVICE_LOCATION longitude", lng.trim())?;
                Ok(Self::Fixed(Coordinate::new(lat, lng)?))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub device_location: DeviceLocation,
    pub location_delay: Duration,
    pub location_timeout: Duration,
    pub location_high_accuracy: bool,
    pub candidates_path: Option<PathBuf>,
    pub view_format: ViewFormat,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            device_location: var("DEVICE_LOCATION", "-34.9100,-68.8300").parse()?,
            location_delay: Duration::from_millis(parse_number(
                "LOCATION_DELAY_MS",
                &var("LOCATION_DELAY_MS", "800"),
            )?),
            location_timeout: Duration::from_millis(parse_number(
                "LOCATION_TIMEOUT_MS",
                &var("LOCATION_TIMEOUT_MS", "10000"),
            )?),
            location_high_accuracy: parse_number(
                "LOCATION_HIGH_ACCURACY",
                &var("LOCATION_HIGH_ACCURACY", "true"),
            )?,
            candidates_path: lookup("CANDIDATES_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            view_format: match var("VIEW_FORMAT", "text").as_str() {
                "text" => ViewFormat::Text,
                "json" => ViewFormat::Json,
                other => {
                    return Err(AppError::Config(format!(
                        "VIEW_FORMAT must be 'text' or 'json', got '{other}'"
                    )));
                }
            },
        })
    }

    pub fn location_options(&self) -> LocationOptions {
        LocationOptions {
            high_accuracy: self.location_high_accuracy,
            timeout: self.location_timeout,
        }
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| AppError::Config(format!("{key} is invalid ('{value}'): {e}")))
}
