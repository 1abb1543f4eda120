use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::types::{WeatherError, UPSTREAM_FALLBACK_MESSAGE};
use crate::config::WeatherConfig;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for `city`, as the provider's raw JSON.
    async fn current(&self, city: &str) -> Result<Value, WeatherError>;
}

#[derive(Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self), level = "info")]
    async fn current(&self, city: &str) -> Result<Value, WeatherError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            error!("API key missing. Please set OPENWEATHER_API_KEY in .env or the deployment environment.");
            return Err(WeatherError::MissingApiKey);
        };

        let url = format!(
            "{}/data/2.5/weather",
            self.config.base_url.trim_end_matches('/')
        );
        let res = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", self.config.units.as_str()),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body: Value = res.json().await.unwrap_or_default();
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(UPSTREAM_FALLBACK_MESSAGE)
                .to_string();
            warn!(%status, %message, "weather provider rejected request");
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data = res.json::<Value>().await?;
        debug!("weather fetched");
        Ok(data)
    }
}
