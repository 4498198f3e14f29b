//! Sample weather forecast resource exposed by the backend

use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::api::{ApiClient, ApiError, ApiResponse, RequestOptions};

pub const WEATHER_FORECAST_PATH: &str = "/weatherforecast";

/// One day of forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: String,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: Option<String>,
}

impl WeatherForecast {
    pub fn summary_or_default(&self) -> &str {
        self.summary.as_deref().unwrap_or("No summary")
    }

    /// Short Japanese date label, e.g. `5月1日(木)`
    pub fn date_label(&self) -> String {
        format_forecast_date(&self.date)
    }
}

/// Format a forecast date (`2025-05-01` or an RFC 3339 timestamp) as
/// `5月1日(木)`. Anything else is returned unchanged.
pub fn format_forecast_date(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(day) => format!(
            "{}月{}日({})",
            day.month(),
            day.day(),
            weekday_label(day.weekday())
        ),
        None => date.to_string(),
    }
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}

/// Fetch the forecast list, optionally as an authenticated call
pub async fn fetch_forecasts(
    client: &ApiClient,
    authorization: Option<&str>,
) -> Result<Vec<WeatherForecast>, ApiError> {
    let mut options = RequestOptions::get();
    if let Some(value) = authorization {
        options = options.header("Authorization", value);
    }

    match client.fetch(WEATHER_FORECAST_PATH, options).await? {
        ApiResponse::NoContent => Ok(Vec::new()),
        other => other.into_json(),
    }
}
