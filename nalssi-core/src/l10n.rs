//! Korean labels for the condition text served by wttr.in.

/// English condition text to Korean label, in lookup order.
const CONDITIONS_KO: &[(&str, &str)] = &[
    ("Sunny", "맑음 ☀️"),
    ("Partly cloudy", "구름 조금 ⛅"),
    ("Cloudy", "흐림 ☁️"),
    ("Overcast", "구름 많음 🌥️"),
    ("Mist", "안개 🌫️"),
    ("Patchy rain possible", "간헐적 비 가능성 🌦️"),
    ("Patchy rain nearby", "주변 지역 비 🌦️"),
    ("Clear", "맑음 ☀️"),
    ("Light rain", "비 🌧️"),
    ("Moderate rain", "보통 비 🌧️"),
    ("Heavy rain", "강한 비 🌧️"),
    ("Light rain shower", "가벼운 소나기 🌦️"),
    ("Moderate or heavy rain shower", "보통/강한 소나기 🌧️"),
    ("Fog", "안개 🌫️"),
    ("Light snow", "눈 🌨️"),
    ("Moderate snow", "보통 눈 🌨️"),
    ("Heavy snow", "강한 눈 🌨️"),
    ("Blizzard", "눈보라 🌨️"),
];

/// Return the Korean label for an upstream condition string.
///
/// Unknown conditions pass through unchanged so rendering never blocks
/// on a string the table has not seen.
pub fn localize(condition: &str) -> &str {
    CONDITIONS_KO.iter().find(|(en, _)| *en == condition).map_or(condition, |(_, ko)| *ko)
}
