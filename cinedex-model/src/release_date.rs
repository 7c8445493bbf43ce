//! Lenient release date decoding.
//!
//! TMDB reports unknown release dates as an empty string rather than `null`,
//! so the listing and detail payloads need a decoder that maps both to
//! `None` instead of failing the whole page.

use chrono::NaiveDate;
use serde::Deserialize;

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

pub fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_and_rejects_blanks() {
        assert_eq!(
            parse_date("1994-09-23"),
            NaiveDate::from_ymd_opt(1994, 9, 23)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("23/09/1994"), None);
    }
}
