//! French Display Formatting
//!
//! Currency and date rendering for the `fr-FR` locale, plus the date
//! normalization used when a form is turned into a request body.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Abbreviated month names as rendered by `fr-FR` short dates
const MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin",
    "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

/// Thousands separator (narrow no-break space)
const GROUP_SEPARATOR: char = '\u{202F}';
/// Space between amount and currency symbol (no-break space)
const CURRENCY_SPACE: char = '\u{00A0}';

/// Format an amount as euros, e.g. `1 234,50 €`
pub fn format_eur(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}{}€", sign, grouped, cents % 100, CURRENCY_SPACE)
}

/// Parse the date portion of any ISO-8601 form the API produces
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Short French date, e.g. `15 janv. 2024`. Unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_date(raw) {
        Some(date) => format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year()),
        None => raw.to_string(),
    }
}

/// Normalize a date input value to a full UTC timestamp with milliseconds.
///
/// Blank stays blank; values that are neither `YYYY-MM-DD` nor RFC 3339 pass
/// through unchanged.
pub fn to_iso_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return midnight.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    raw.to_string()
}

/// Value for an `<input type="date">`: the part before `T`
pub fn date_input_value(iso: &str) -> String {
    iso.split('T').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(0.0), "0,00\u{a0}€");
        assert_eq!(format_eur(150.5), "150,50\u{a0}€");
        assert_eq!(format_eur(1234.5), "1\u{202f}234,50\u{a0}€");
        assert_eq!(format_eur(1234567.891), "1\u{202f}234\u{202f}567,89\u{a0}€");
        assert_eq!(format_eur(-42.0), "-42,00\u{a0}€");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15T00:00:00.000Z"), "15 janv. 2024");
        assert_eq!(format_date("2025-12-10T14:30:00Z"), "10 déc. 2025");
        assert_eq!(format_date("2024-08-01"), "1 août 2024");
        assert_eq!(format_date("2024-02-03T10:00:00.123456"), "3 févr. 2024");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("someday"), "someday");
    }

    #[test]
    fn test_to_iso_timestamp() {
        assert_eq!(to_iso_timestamp("2024-01-15"), "2024-01-15T00:00:00.000Z");
        assert_eq!(to_iso_timestamp("2024-01-15T10:30:00+02:00"), "2024-01-15T08:30:00.000Z");
        assert_eq!(to_iso_timestamp(""), "");
        assert_eq!(to_iso_timestamp("   "), "");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2024-01-15T00:00:00.000Z"), "2024-01-15");
        assert_eq!(date_input_value("2024-01-15"), "2024-01-15");
        assert_eq!(date_input_value(""), "");
    }
}
