mod client;
pub mod handlers;
mod types;

use crate::state::AppState;
use axum::Router;

pub use client::{OpenWeatherClient, WeatherProvider};
pub use types::{CityRef, CurrentWeather, WeatherError, WeatherSummary};

pub fn router() -> Router<AppState> {
    handlers::weather_routes()
}
