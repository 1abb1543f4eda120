#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

/// OpenWeatherMap settings. A missing key is reported per request, not at boot.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub units: String,
    pub lang: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub weather: WeatherConfig,
}

impl WeatherConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: std::env::var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org".into()),
            units: std::env::var("OPENWEATHER_UNITS").unwrap_or_else(|_| "metric".into()),
            lang: std::env::var("OPENWEATHER_LANG").unwrap_or_else(|_| "ja".into()),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "weathermind".into()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "weathermind-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
            refresh_ttl_minutes: std::env::var("JWT_REFRESH_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 14),
        };
        if std::env::var("OPENWEATHER_API_KEY").map_or(true, |k| k.trim().is_empty()) {
            tracing::warn!("OPENWEATHER_API_KEY is not set; weather lookups will fail with 500");
        }
        Ok(Self {
            database_url,
            jwt,
            weather: WeatherConfig::from_env(),
        })
    }
}
