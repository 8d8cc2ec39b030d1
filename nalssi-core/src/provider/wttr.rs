use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::WttrConfig,
    model::{CityQuery, WeatherReport},
};

use super::{FetchError, WeatherProvider};

/// Client for the wttr.in JSON endpoint (`/{city}?format=j1`).
///
/// Every fetch is a fresh round-trip: no retries, no caching, and no
/// timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct WttrProvider {
    http: Client,
    config: WttrConfig,
}

impl WttrProvider {
    pub fn new(config: WttrConfig) -> Self {
        Self { http: Client::new(), config }
    }

    fn request_url(&self, query: &CityQuery) -> String {
        format!("{}/{}?format=j1", self.config.base_url, query.search_key())
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn fetch(&self, query: &CityQuery) -> Result<WeatherReport, FetchError> {
        if query.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let url = self.request_url(query);
        debug!(url = %url, "requesting weather");

        let res =
            self.http.get(&url).send().await.map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            debug!(%status, key = query.search_key(), "upstream refused the query");
            return Err(FetchError::NotFound { display_name: query.display_name().to_string() });
        }

        let parsed: WttrResponse =
            res.json().await.map_err(|e| FetchError::Malformed(e.to_string()))?;

        parsed.into_report()
    }
}

// wttr.in's j1 format; only the fields we display. Numeric values come
// over the wire as JSON strings.

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<WttrCurrent>,
    weather: Vec<WttrDay>,
}

#[derive(Debug, Deserialize)]
struct WttrCurrent {
    #[serde(rename = "temp_C")]
    temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: String,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrText>,
    #[serde(rename = "windspeedKmph")]
    windspeed_kmph: String,
}

#[derive(Debug, Deserialize)]
struct WttrText {
    value: String,
}

#[derive(Debug, Deserialize)]
struct WttrDay {
    #[serde(rename = "mintempC")]
    mintemp_c: String,
    #[serde(rename = "maxtempC")]
    maxtemp_c: String,
}

impl WttrResponse {
    /// Pull the displayed metrics out of the decoded body.
    ///
    /// wttr.in always puts today's conditions at `current_condition[0]`
    /// and today's forecast at `weather[0]`; an empty array means the
    /// body is not usable.
    fn into_report(self) -> Result<WeatherReport, FetchError> {
        let current = self
            .current_condition
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Malformed("current_condition이 비어 있습니다".to_string()))?;

        let today = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Malformed("weather 예보가 비어 있습니다".to_string()))?;

        let condition = current
            .weather_desc
            .into_iter()
            .next()
            .map(|d| d.value)
            .ok_or_else(|| FetchError::Malformed("weatherDesc가 비어 있습니다".to_string()))?;

        Ok(WeatherReport {
            temp_c: current.temp_c,
            feels_like_c: current.feels_like_c,
            condition,
            wind_speed_kmph: current.windspeed_kmph,
            min_temp_c: today.mintemp_c,
            max_temp_c: today.maxtemp_c,
        })
    }
}
