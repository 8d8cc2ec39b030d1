use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::{CityQuery, WeatherReport};

pub mod wttr;

/// Why a submission produced no weather.
///
/// Display strings are the user-facing Korean messages; the CLI prints
/// them as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The user submitted a blank city name. No request is made.
    #[error("도시 이름을 입력해주세요.")]
    EmptyQuery,

    /// The upstream service answered, but not with weather for this
    /// place. Carries the name the user typed, not the search key.
    #[error("'{display_name}' 도시의 날씨 정보를 찾을 수 없습니다. 도시 이름을 확인해주세요.")]
    NotFound { display_name: String },

    /// A 2xx answer whose body was not the expected shape.
    #[error("날씨 응답을 해석하지 못했습니다: {0}")]
    Malformed(String),

    /// The request never completed (DNS, timeout, connection reset).
    #[error("날씨 정보를 가져오는 데 실패했습니다: {0}")]
    Transport(String),
}

/// Source of weather reports.
///
/// The session state machine only sees this trait, so tests can drive
/// it with scripted providers instead of the network.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &CityQuery) -> Result<WeatherReport, FetchError>;
}
