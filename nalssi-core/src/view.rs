use chrono::NaiveDate;

use crate::{l10n, session::Session};

/// Render the session for the terminal.
///
/// `today` comes from the caller so output stays deterministic under
/// test. The report layout mirrors the metrics panel: current and
/// feels-like temperature, localized condition, wind speed, then the
/// day's forecast range.
pub fn render(session: &Session, today: NaiveDate) -> String {
    match session {
        Session::Idle => "알고 싶은 도시를 검색해보세요! 🏙️".to_string(),
        Session::Showing { city, report } => {
            let date = today.format("%Y년 %m월 %d일");
            let lines = [
                format!("✅ {date} '{city}'의 날씨 정보입니다."),
                String::new(),
                format!("  현재 기온  {} °C", report.temp_c),
                format!("  체감 온도  {} °C", report.feels_like_c),
                format!("  현재 날씨  {}", l10n::localize(&report.condition)),
                format!("  풍속       {} km/h", report.wind_speed_kmph),
                String::new(),
                format!(
                    "오늘의 예상 기온: 최저 {}°C / 최고 {}°C",
                    report.min_temp_c, report.max_temp_c
                ),
            ];
            lines.join("\n")
        }
    }
}
