use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;
use crate::favorites::FavoriteRepo;
use crate::history::HistoryRepo;
use crate::weather::{OpenWeatherClient, WeatherProvider};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub weather: Arc<dyn WeatherProvider>,
    pub history: Arc<dyn HistoryRepo>,
    pub favorites: Arc<dyn FavoriteRepo>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let weather =
            Arc::new(OpenWeatherClient::new(config.weather.clone())) as Arc<dyn WeatherProvider>;

        Ok(Self {
            history: Arc::new(db.clone()),
            favorites: Arc::new(db.clone()),
            db,
            config,
            weather,
        })
    }
}
