use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const NAIVE_DATE_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const NAIVE_DATE_TIME_SPACE: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date: '{0}'")]
pub struct DateParseError(pub String);

/// Parses a calendar date in `YYYY-MM-DD` notation.
pub fn parse_iso_date(s: &str) -> Result<Date, DateParseError> {
    let trimmed = s.trim();
    Date::parse(trimmed, ISO_DATE).map_err(|_| DateParseError(s.to_owned()))
}

pub fn format_iso_date(date: Date) -> String {
    // The format only consists of numeric components
    // that are available for every date.
    date.format(ISO_DATE).unwrap_or_default()
}

/// Parses a timestamp as RFC 3339.
///
/// Timestamps without an offset (with either `T` or a blank as separator)
/// and optional fractional seconds are interpreted as UTC.
pub fn parse_timestamp(s: &str) -> Result<OffsetDateTime, DateParseError> {
    let trimmed = s.trim();
    if let Ok(ts) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(ts);
    }
    let without_fraction = trimmed.split('.').next().unwrap_or(trimmed);
    PrimitiveDateTime::parse(without_fraction, NAIVE_DATE_TIME)
        .or_else(|_| PrimitiveDateTime::parse(without_fraction, NAIVE_DATE_TIME_SPACE))
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| DateParseError(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn iso_date() {
        assert_eq!(parse_iso_date("2024-10-05").unwrap(), date!(2024 - 10 - 05));
        assert_eq!(parse_iso_date(" 2022-01-01 ").unwrap(), date!(2022 - 01 - 01));
        assert!(parse_iso_date("").is_err());
        assert!(parse_iso_date("2024-13-01").is_err());
        assert!(parse_iso_date("05.10.2024").is_err());
        assert_eq!(format_iso_date(date!(2022 - 12 - 31)), "2022-12-31");
    }

    #[test]
    fn timestamps() {
        assert_eq!(
            parse_timestamp("2024-10-05T10:32:00Z").unwrap(),
            datetime!(2024-10-05 10:32:00 UTC)
        );
        assert_eq!(
            parse_timestamp("2024-10-05T10:32:00+02:00").unwrap(),
            datetime!(2024-10-05 08:32:00 UTC)
        );
        assert_eq!(
            parse_timestamp("2024-10-05 10:32:00").unwrap(),
            datetime!(2024-10-05 10:32:00 UTC)
        );
        assert_eq!(
            parse_timestamp("2024-10-05T10:32:00.123456").unwrap(),
            datetime!(2024-10-05 10:32:00 UTC)
        );
        assert!(parse_timestamp("tomorrow").is_err());
    }
}
