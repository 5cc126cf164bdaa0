//! UTC-anchored time helpers.
//!
//! Instants cross service boundaries as `YYYY-MM-DDTHH:MM:SS.ffffffZ`. Parsing is
//! strict: the trailing `Z` is required and numeric offsets are rejected.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use regex::Regex;

use crate::ValidationError;

/// Strict ISO-8601 UTC shape: `YYYY-MM-DDTHH:MM:SS[.fraction]Z`.
pub static ISO_8601_UTC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]+)?Z$")
        .expect("ISO-8601 pattern is valid")
});

/// Years representable in the four-digit wire format.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999) {
    Some(time) => time,
    None => panic!("23:59:59.999999 is a valid time"),
};

/// Fractional-second precision used by [`to_iso`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsoPrecision {
    /// Six fractional digits.
    #[default]
    Micros,
    /// Three fractional digits.
    Millis,
}

/// Anything that can be normalized to a UTC instant.
///
/// Naive datetimes are taken to already be in UTC.
pub trait IntoUtc {
    fn into_utc(self) -> DateTime<Utc>;
}

impl IntoUtc for NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        self.and_utc()
    }
}

impl IntoUtc for &NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        self.and_utc()
    }
}

impl<Tz: TimeZone> IntoUtc for DateTime<Tz> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

impl<Tz: TimeZone> IntoUtc for &DateTime<Tz> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

/// Seconds since the Unix epoch, whole or fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EpochSeconds {
    Whole(i64),
    Fractional(f64),
}

impl From<i64> for EpochSeconds {
    fn from(seconds: i64) -> Self {
        EpochSeconds::Whole(seconds)
    }
}

impl From<i32> for EpochSeconds {
    fn from(seconds: i32) -> Self {
        EpochSeconds::Whole(seconds.into())
    }
}

impl From<u32> for EpochSeconds {
    fn from(seconds: u32) -> Self {
        EpochSeconds::Whole(seconds.into())
    }
}

impl From<f64> for EpochSeconds {
    fn from(seconds: f64) -> Self {
        EpochSeconds::Fractional(seconds)
    }
}

impl From<f32> for EpochSeconds {
    fn from(seconds: f32) -> Self {
        EpochSeconds::Fractional(seconds.into())
    }
}

/// Returns the current instant in UTC.
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Converts a Unix timestamp to a UTC instant.
///
/// The result must fall in years `0001..=9999` so it stays printable by [`to_iso`].
/// Fractional seconds are rounded to the nearest microsecond.
pub fn utc_from_timestamp(
    seconds: impl Into<EpochSeconds>,
) -> Result<DateTime<Utc>, ValidationError> {
    let (secs, nanos) = match seconds.into() {
        EpochSeconds::Whole(secs) => (secs, 0),
        EpochSeconds::Fractional(value) => split_fractional(value)?,
    };

    DateTime::from_timestamp(secs, nanos)
        .filter(|instant| in_wire_range(instant.year()))
        .ok_or_else(|| {
            ValidationError::TimestampOutOfRange(format!("{secs}s + {nanos}ns since epoch"))
        })
}

fn in_wire_range(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

fn split_fractional(value: f64) -> Result<(i64, u32), ValidationError> {
    // Beyond this magnitude no chrono date is representable anyway.
    const LIMIT: f64 = 1e15;

    if !value.is_finite() || value.abs() > LIMIT {
        return Err(ValidationError::TimestampOutOfRange(value.to_string()));
    }

    let whole = value.floor();
    let micros = ((value - whole) * 1e6).round() as i64;
    let (secs, micros) = if micros >= 1_000_000 {
        (whole as i64 + 1, 0)
    } else {
        (whole as i64, micros)
    };

    Ok((secs, (micros * 1_000) as u32))
}

/// Formats an instant as an ISO-8601 UTC string with a `Z` suffix.
#[must_use]
pub fn to_iso(instant: impl IntoUtc, precision: IsoPrecision) -> String {
    let utc = instant.into_utc();
    let format = match precision {
        IsoPrecision::Micros => "%Y-%m-%dT%H:%M:%S%.6fZ",
        IsoPrecision::Millis => "%Y-%m-%dT%H:%M:%S%.3fZ",
    };
    utc.format(format).to_string()
}

/// Parses a strict ISO-8601 UTC string (`YYYY-MM-DDTHH:MM:SS[.fraction]Z`).
///
/// Leap seconds and years outside `0001..=9999` are rejected. Fractions beyond nanosecond precision are truncated.
pub fn parse_iso(text: &str) -> Result<DateTime<Utc>, ValidationError> {
    if !ISO_8601_UTC_RE.is_match(text) {
        return Err(ValidationError::InvalidTimestamp(text.to_string()));
    }

    let without_zone = text.strip_suffix('Z').unwrap_or(text);
    let naive = NaiveDateTime::parse_from_str(without_zone, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| ValidationError::InvalidTimestamp(text.to_string()))?;

    // chrono reads `:60` as a leap second; the wire format has no leap seconds.
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(ValidationError::InvalidTimestamp(text.to_string()));
    }
    if !in_wire_range(naive.year()) {
        return Err(ValidationError::TimestampOutOfRange(text.to_string()));
    }

    Ok(naive.and_utc())
}

/// Midnight UTC at the start of the instant's calendar day.
#[must_use]
pub fn start_of_day(instant: impl IntoUtc) -> DateTime<Utc> {
    instant
        .into_utc()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// `23:59:59.999999` UTC on the instant's calendar day.
#[must_use]
pub fn end_of_day(instant: impl IntoUtc) -> DateTime<Utc> {
    instant.into_utc().date_naive().and_time(END_OF_DAY).and_utc()
}

#[must_use]
pub fn start_of_today() -> DateTime<Utc> {
    start_of_day(now_utc())
}

#[must_use]
pub fn end_of_today() -> DateTime<Utc> {
    end_of_day(now_utc())
}

/// Serde adapter writing instants with [`to_iso`] and reading them with [`parse_iso`].
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Event {
///     #[serde(with = "coretypes::time::iso")]
///     created_at: DateTime<Utc>,
/// }
/// ```
pub mod iso {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_iso, to_iso, IsoPrecision};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_iso(instant, IsoPrecision::Micros))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_iso(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate};
    use rstest::rstest;
    use serde::{Deserialize, Serialize};

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, micro: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
            + chrono::Duration::microseconds(i64::from(micro))
    }

    #[rstest]
    #[case("2023-05-18T15:30:00Z")]
    #[case("2023-05-18T15:30:00.123Z")]
    #[case("2023-05-18T15:30:00.123456Z")]
    fn test_iso_regex_accepts(#[case] text: &str) {
        assert!(ISO_8601_UTC_RE.is_match(text));
    }

    #[rstest]
    #[case::no_zone("2023-05-18T15:30:00")]
    #[case::offset("2023-05-18T15:30:00+00:00")]
    #[case::space("2023-05-18 15:30:00Z")]
    #[case::garbage("not-a-date")]
    #[case::empty_fraction("2023-05-18T15:30:00.Z")]
    #[case::lowercase_z("2023-05-18T15:30:00z")]
    fn test_iso_regex_rejects(#[case] text: &str) {
        assert!(!ISO_8601_UTC_RE.is_match(text));
    }

    #[test]
    fn test_now_utc() {
        let now = now_utc();
        let system_now = Utc::now();
        assert!((now - system_now).num_milliseconds().abs() < 1000);
    }

    #[test]
    fn test_to_iso_with_timezone() {
        let dt = utc(2023, 5, 18, 15, 30, 45, 123_456);
        assert_eq!(to_iso(dt, IsoPrecision::Micros), "2023-05-18T15:30:45.123456Z");
    }

    #[test]
    fn test_to_iso_without_timezone() {
        let dt = NaiveDate::from_ymd_opt(2023, 5, 18)
            .unwrap()
            .and_hms_micro_opt(15, 30, 45, 123_456)
            .unwrap();
        assert_eq!(to_iso(dt, IsoPrecision::default()), "2023-05-18T15:30:45.123456Z");
    }

    #[test]
    fn test_to_iso_with_milliseconds() {
        let dt = utc(2023, 5, 18, 15, 30, 45, 123_456);
        assert_eq!(to_iso(&dt, IsoPrecision::Millis), "2023-05-18T15:30:45.123Z");
    }

    #[test]
    fn test_to_iso_different_timezone() {
        // +1 hour from UTC
        let tz = FixedOffset::east_opt(3600).unwrap();
        let dt = tz
            .with_ymd_and_hms(2023, 5, 18, 16, 30, 45)
            .unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(to_iso(dt, IsoPrecision::Micros), "2023-05-18T15:30:45.123456Z");
    }

    #[test]
    fn test_to_iso_whole_seconds_keep_fraction() {
        let dt = utc(2023, 5, 18, 15, 30, 45, 0);
        assert_eq!(to_iso(dt, IsoPrecision::Micros), "2023-05-18T15:30:45.000000Z");
        assert_eq!(to_iso(dt, IsoPrecision::Millis), "2023-05-18T15:30:45.000Z");
    }

    #[test]
    fn test_parse_iso_valid() {
        assert_eq!(
            parse_iso("2023-05-18T15:30:45Z").unwrap(),
            utc(2023, 5, 18, 15, 30, 45, 0)
        );
        assert_eq!(
            parse_iso("2023-05-18T15:30:45.123Z").unwrap(),
            utc(2023, 5, 18, 15, 30, 45, 123_000)
        );
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("2023-05-18T15:30:45")]
    #[case("2023-05-18T15:30:45+00:00")]
    #[case("2023-05-18 15:30:00Z")]
    #[case::impossible_date("2023-02-30T15:30:45Z")]
    #[case::impossible_hour("2023-05-18T25:30:45Z")]
    #[case::leap_second("2023-05-18T23:59:60Z")]
    #[case::year_zero("0000-01-01T00:00:00Z")]
    fn test_parse_iso_invalid(#[case] text: &str) {
        let err = parse_iso(text).unwrap_err();
        assert!(err.is_time_error());
    }

    #[test]
    fn test_iso_roundtrip() {
        let dt = utc(2024, 2, 29, 23, 59, 59, 999_999);
        assert_eq!(parse_iso(&to_iso(dt, IsoPrecision::Micros)).unwrap(), dt);
    }

    #[test]
    fn test_utc_from_timestamp() {
        assert_eq!(utc_from_timestamp(0_i64).unwrap(), utc(1970, 1, 1, 0, 0, 0, 0));

        let dt = utc_from_timestamp(1_684_424_445_i64).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2023, 5, 18, 15));

        let dt = utc_from_timestamp(1_684_424_445.123_f64).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2023, 5, 18, 15));
        assert_eq!(dt.timestamp_subsec_micros(), 123_000);
    }

    #[test]
    fn test_utc_from_negative_fractional_timestamp() {
        let dt = utc_from_timestamp(-1.5_f64).unwrap();
        assert_eq!(dt, utc(1969, 12, 31, 23, 59, 58, 500_000));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(1e300)]
    fn test_utc_from_timestamp_out_of_range(#[case] seconds: f64) {
        assert!(utc_from_timestamp(seconds).unwrap_err().is_time_error());
    }

    #[test]
    fn test_utc_from_timestamp_whole_out_of_range() {
        assert!(utc_from_timestamp(i64::MAX).is_err());
    }

    #[rstest]
    #[case::year_11476(300_000_000_000_i64)]
    #[case::year_10000(253_402_300_800_i64)]
    #[case::before_year_1(-62_135_596_801_i64)]
    fn test_utc_from_timestamp_outside_four_digit_years(#[case] seconds: i64) {
        let err = utc_from_timestamp(seconds).unwrap_err();
        assert!(matches!(err, ValidationError::TimestampOutOfRange(_)));
    }

    #[test]
    fn test_four_digit_year_boundaries_roundtrip() {
        let last = parse_iso("9999-12-31T23:59:59.999999Z").unwrap();
        assert_eq!(to_iso(last, IsoPrecision::Micros), "9999-12-31T23:59:59.999999Z");
        assert_eq!(end_of_day(utc_from_timestamp(253_402_300_799_i64).unwrap()), last);

        let first = utc_from_timestamp(-62_135_596_800_i64).unwrap();
        let text = to_iso(first, IsoPrecision::Micros);
        assert_eq!(text, "0001-01-01T00:00:00.000000Z");
        assert_eq!(parse_iso(&text).unwrap(), first);
    }

    #[test]
    fn test_start_of_day() {
        let dt = utc(2023, 5, 18, 15, 30, 45, 123_456);
        assert_eq!(start_of_day(dt), utc(2023, 5, 18, 0, 0, 0, 0));
    }

    #[test]
    fn test_start_of_day_naive() {
        let dt = NaiveDate::from_ymd_opt(2023, 5, 18)
            .unwrap()
            .and_hms_micro_opt(15, 30, 45, 123_456)
            .unwrap();
        assert_eq!(start_of_day(dt), utc(2023, 5, 18, 0, 0, 0, 0));
    }

    #[test]
    fn test_start_of_day_converts_to_utc_first() {
        // 01:00 at +02:00 is still the previous day in UTC.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = tz.with_ymd_and_hms(2023, 5, 18, 1, 0, 0).unwrap();
        assert_eq!(start_of_day(dt), utc(2023, 5, 17, 0, 0, 0, 0));
    }

    #[test]
    fn test_end_of_day() {
        let dt = utc(2023, 5, 18, 15, 30, 45, 123_456);
        assert_eq!(end_of_day(dt), utc(2023, 5, 18, 23, 59, 59, 999_999));
    }

    #[test]
    fn test_today_bounds() {
        let start = start_of_today();
        let end = end_of_today();
        assert_eq!(start.date_naive(), end.date_naive());
        assert_eq!(end - start, chrono::Duration::days(1) - chrono::Duration::microseconds(1));
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(with = "iso")]
        at: DateTime<Utc>,
    }

    #[test]
    fn test_iso_serde_adapter() {
        let stamped = Stamped {
            at: utc(2023, 5, 18, 15, 30, 45, 123_456),
        };
        let json = serde_json::to_string(&stamped).unwrap();
        assert_eq!(json, r#"{"at":"2023-05-18T15:30:45.123456Z"}"#);
        assert_eq!(serde_json::from_str::<Stamped>(&json).unwrap(), stamped);

        assert!(serde_json::from_str::<Stamped>(r#"{"at":"2023-05-18T15:30:45+00:00"}"#).is_err());
    }
}
