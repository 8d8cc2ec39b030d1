use deunicode::deunicode;
use serde::{Deserialize, Serialize};

/// A city lookup as entered by the user.
///
/// `display_name` is the input as typed (trimmed), kept for labels and
/// error messages. `search_key` is the Latin-script form sent upstream
/// and is never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery {
    display_name: String,
    search_key: String,
}

impl CityQuery {
    /// Build a query from raw user input.
    ///
    /// The search key is a best-effort Latin transliteration of the
    /// trimmed input (e.g. "여수" -> "yeosu"), with whitespace collapsed
    /// to `+` so the key can be used directly in a URL path.
    pub fn new(input: &str) -> Self {
        let display_name = input.trim().to_string();
        let search_key = deunicode(&display_name).split_whitespace().collect::<Vec<_>>().join("+");

        Self { display_name, search_key }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    /// True when there is nothing to send upstream.
    pub fn is_empty(&self) -> bool {
        self.search_key.is_empty()
    }
}

/// The handful of metrics shown to the user, copied out of a larger
/// upstream response; everything else in that response is discarded.
///
/// wttr.in serves these numbers as strings and they stay strings here:
/// values are displayed verbatim, never computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp_c: String,
    pub feels_like_c: String,
    /// Raw English condition text, e.g. "Partly cloudy".
    pub condition: String,
    pub wind_speed_kmph: String,
    pub min_temp_c: String,
    pub max_temp_c: String,
}
