use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to fetch weather data";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Configuration Error: API Key is missing. Please set OPENWEATHER_API_KEY in the service environment.")]
    MissingApiKey,

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("weather transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Provider payload, restricted to the fields the UI renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Conditions>,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub sys: Sys,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainReadings {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

/// A city as the provider identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRef {
    pub name: String,
    pub id: Option<i64>,
}

impl CityRef {
    /// Reads `name` and `id` straight from a provider payload, falling back
    /// to the name that was searched for.
    pub fn from_payload(raw: &serde_json::Value, searched: &str) -> Self {
        let name = raw
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(searched);
        Self {
            name: name.to_string(),
            id: raw.get("id").and_then(serde_json::Value::as_i64),
        }
    }
}

/// Display bucket used to pick the weather icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Rainy,
    Cloudy,
}

impl Condition {
    pub fn from_main(main: &str) -> Self {
        match main {
            "Clear" => Self::Sunny,
            "Rain" | "Drizzle" | "Thunderstorm" => Self::Rainy,
            _ => Self::Cloudy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherSummary {
    pub city: String,
    pub country: Option<String>,
    pub description: Option<String>,
    pub condition: Condition,
    pub temperature: Option<i64>,
    pub feels_like: Option<i64>,
    pub humidity: Option<f64>,
    pub wind_speed: f64,
}

impl CurrentWeather {
    pub fn from_json(value: &serde_json::Value) -> anyhow::Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn summary(&self) -> WeatherSummary {
        let first = self.weather.first();
        WeatherSummary {
            city: self.name.clone(),
            country: self.sys.country.clone(),
            description: first.map(|w| w.description.clone()),
            condition: first
                .map(|w| Condition::from_main(&w.main))
                .unwrap_or(Condition::Cloudy),
            temperature: self.main.temp.map(round_half_up),
            feels_like: self.main.feels_like.map(round_half_up),
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
        }
    }
}

// Halves round toward positive infinity: -2.5 -> -2, 2.5 -> 3.
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
