use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

pub fn weather_routes() -> Router<AppState> {
    Router::new().route("/api/weather", get(get_weather))
}

/// Rejects absent or blank city names before anything reaches the provider.
pub(crate) fn required_city(raw: Option<&str>) -> Result<&str, ApiError> {
    match raw.map(str::trim) {
        Some(city) if !city.is_empty() => Ok(city),
        _ => Err(ApiError::BadRequest("City is required".into())),
    }
}

/// GET /api/weather?city=Tokyo
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(q): Query<WeatherQuery>,
) -> Result<Json<Value>, ApiError> {
    let city = required_city(q.city.as_deref())?;
    let data = state.weather.current(city).await?;
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeatherConfig;
    use crate::test_support::{read_json, TestState};
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn weather_config(base_url: &str, api_key: Option<&str>) -> WeatherConfig {
        WeatherConfig {
            api_key: api_key.map(String::from),
            base_url: base_url.into(),
            units: "metric".into(),
            lang: "ja".into(),
        }
    }

    async fn call(state: AppState, uri: &str) -> (StatusCode, Value) {
        let app = weather_routes().with_state(state);
        let res = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        (status, read_json(res).await)
    }

    #[test]
    fn blank_city_is_rejected() {
        assert!(required_city(None).is_err());
        assert!(required_city(Some("   ")).is_err());
        assert_eq!(required_city(Some(" Tokyo ")).unwrap(), "Tokyo");
    }

    #[tokio::test]
    async fn missing_city_is_400() {
        let state = TestState::new(weather_config("http://127.0.0.1:9", Some("k"))).state();
        let (status, body) = call(state, "/api/weather").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "City is required"}));
    }

    #[tokio::test]
    async fn missing_key_is_500() {
        let state = TestState::new(weather_config("http://127.0.0.1:9", None)).state();
        let (status, body) = call(state, "/api/weather?city=Tokyo").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("API Key is missing"));
    }

    #[tokio::test]
    async fn upstream_status_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "cod": 401, "message": "Invalid API key."
            })))
            .mount(&server)
            .await;

        let state = TestState::new(weather_config(&server.uri(), Some("bad"))).state();
        let (status, body) = call(state, "/api/weather?city=Tokyo").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid API key.");
    }

    #[tokio::test]
    async fn unreachable_provider_is_generic_500() {
        // Nothing listens on the discard port.
        let state = TestState::new(weather_config("http://127.0.0.1:9", Some("k"))).state();
        let (status, body) = call(state, "/api/weather?city=Tokyo").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn success_returns_upstream_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1850144, "name": "Tokyo"
            })))
            .mount(&server)
            .await;

        let state = TestState::new(weather_config(&server.uri(), Some("k"))).state();
        let (status, body) = call(state, "/api/weather?city=Tokyo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1850144);
    }
}
