//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::NaiveDate;

/// Date format used by the `ru-RU` locale.
const RU_DATE_FORMAT: &str = "%d.%m.%Y";

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats an ISO date (`2024-01-15`) as `15.01.2024`.
///
/// Values that are not ISO dates are passed through unchanged.
///
/// Usage in templates: `{{ order.date|ru_date }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn ru_date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_ru_date(&value.to_string()))
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

fn format_ru_date(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_or_else(
        |_| value.to_string(),
        |date| date.format(RU_DATE_FORMAT).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ru_date() {
        assert_eq!(format_ru_date("2024-01-15"), "15.01.2024");
        assert_eq!(format_ru_date("2023-12-01"), "01.12.2023");
    }

    #[test]
    fn test_format_ru_date_passes_through_garbage() {
        assert_eq!(format_ru_date("вчера"), "вчера");
    }
}
