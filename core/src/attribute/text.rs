//! Validation, parsing and formatting of text values.
//!
//! Text values are kept as they were given,
//! one string per value.
//! The functions in this module check them against
//! the grammar of their value representation
//! and turn them into numbers or dates on request.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use num_traits::ToPrimitive;
use snafu::ensure;

use crate::attribute::binary::convert;
use crate::error::{DataSnafu, FormatSnafu, Result};
use crate::header::{Tag, VR};
use crate::value::BinaryValue;

/// Maximum number of characters of a formatted decimal string.
const DS_MAX_LEN: usize = 16;

/// Whether surrounding whitespace is insignificant for this VR,
/// so that values are trimmed on read.
pub(crate) fn is_trimmed(vr: VR) -> bool {
    matches!(vr, VR::DS | VR::IS | VR::DA | VR::TM | VR::DT | VR::UI)
}

/// Remove padding around a value of the given VR,
/// if the VR considers it insignificant.
pub(crate) fn trim_value(vr: VR, value: &str) -> &str {
    if is_trimmed(vr) {
        value.trim_matches(|c: char| c == ' ' || c == '\0')
    } else {
        value
    }
}

/// Whether a value of this VR may denote a range with a hyphen.
fn accepts_range(vr: VR) -> bool {
    matches!(vr, VR::DA | VR::TM | VR::DT)
}

/// Check a single text value against the rules of its VR.
pub(crate) fn validate(tag: Tag, vr: VR, value: &str) -> Result<()> {
    let info = vr.info();
    if info.multi_valued {
        ensure!(
            !value.contains('\\'),
            FormatSnafu {
                vr,
                value,
                reason: "single value contains a value delimiter",
            }
        );
    }

    let trimmed = value.trim_matches(|c: char| c == ' ' || c == '\0');
    if info.max_len > 0 {
        // a range holds two values and the hyphen between them
        let max_len = if accepts_range(vr) && trimmed.contains('-') {
            2 * info.max_len + 1
        } else {
            info.max_len
        };
        let len = trimmed.chars().count();
        ensure!(
            len <= max_len,
            DataSnafu {
                tag,
                vr,
                message: format!("{} characters exceed the maximum of {}", len, max_len),
            }
        );
    }

    if trimmed.is_empty() {
        return Ok(());
    }

    let reason = match vr {
        VR::AE if trimmed.chars().any(char::is_control) => Some("control characters are not allowed"),
        VR::AS if !is_age_string(trimmed) => Some("expected three digits and one of D, W, M, Y"),
        VR::CS if !trimmed.bytes().all(is_code_string_byte) => {
            Some("only upper case letters, digits, space and underscore are allowed")
        }
        VR::DA if !is_date_or_range(trimmed) => Some("expected YYYYMMDD or a range of dates"),
        VR::DS if !is_decimal_string(trimmed) => Some("not a decimal number"),
        VR::IS if !is_integer_string(trimmed) => Some("not an integer number"),
        VR::DT if !is_date_time_or_range(trimmed) => {
            Some("unexpected character in date time or range")
        }
        VR::TM if !is_time_or_range(trimmed, info.max_len) => {
            Some("expected HHMMSS.FFFFFF or a range of times")
        }
        VR::UI if !trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'.') => {
            Some("only digits and periods are allowed")
        }
        _ => None,
    };
    if let Some(reason) = reason {
        return FormatSnafu { vr, value, reason }.fail();
    }

    if vr == VR::IS {
        let in_range = trimmed
            .parse::<i64>()
            .map(|v| v >= i64::from(i32::MIN) && v <= i64::from(i32::MAX))
            .unwrap_or(false);
        ensure!(
            in_range,
            DataSnafu {
                tag,
                vr,
                message: format!("{} is outside the 32-bit integer range", trimmed),
            }
        );
    }

    Ok(())
}

fn is_code_string_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b' ' || b == b'_'
}

fn is_age_string(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 4
        && bytes[..3].iter().all(u8::is_ascii_digit)
        && matches!(bytes[3], b'D' | b'W' | b'M' | b'Y')
}

fn is_date_or_range(value: &str) -> bool {
    let is_date = |s: &str| s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit());
    match value.split_once('-') {
        Some((start, end)) => {
            !(start.is_empty() && end.is_empty())
                && (start.is_empty() || is_date(start))
                && (end.is_empty() || is_date(end))
        }
        None => is_date(value),
    }
}

/// A time, or two times around a single hyphen with either one optional.
fn is_time_or_range(value: &str, max_len: usize) -> bool {
    let is_time = |s: &str| {
        s.len() <= max_len && s.bytes().all(|b| b.is_ascii_digit() || b".: ".contains(&b))
    };
    match value.split_once('-') {
        Some((start, end)) => {
            !(start.is_empty() && end.is_empty())
                && (start.is_empty() || is_time(start))
                && (end.is_empty() || is_time(end))
        }
        None => is_time(value),
    }
}

/// Hyphens separate a range and may also start a UTC offset,
/// so a range of two date times has at most three of them.
fn is_date_time_or_range(value: &str) -> bool {
    value.bytes().filter(|&b| b == b'-').count() <= 3
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || b"+-. ".contains(&b))
}

fn strip_sign(value: &str) -> &str {
    value
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(value)
}

fn all_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer_string(value: &str) -> bool {
    let digits = strip_sign(value);
    !digits.is_empty() && all_digits(digits)
}

fn is_decimal_string(value: &str) -> bool {
    let value = strip_sign(value);
    let (mantissa, exponent) = match value.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&value[..i], Some(&value[i + 1..])),
        None => (value, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int.is_empty() && frac.is_empty() {
        return false;
    }
    if !all_digits(int) || !all_digits(frac) {
        return false;
    }
    match exponent {
        Some(exponent) => is_integer_string(exponent),
        None => true,
    }
}

/// Interpret a numeric string as a number of the given type.
///
/// Integer targets accept decimal strings with an integral value,
/// such as `"1.0e2"`.
pub(crate) fn parse_number<T: BinaryValue>(value: &str) -> Option<T> {
    let value = value.trim_matches(|c: char| c == ' ' || c == '\0');
    let value = value.strip_prefix('+').unwrap_or(value);
    T::from_str(value)
        .ok()
        .or_else(|| f64::from_str(value).ok().and_then(convert))
}

/// Format a number as a decimal string of at most 16 characters.
///
/// Returns `None` for values which cannot be represented,
/// such as infinities.
pub(crate) fn format_decimal<N>(value: N) -> Option<String>
where
    N: ToPrimitive + Display + Copy,
{
    let float = value.to_f64()?;
    if !float.is_finite() {
        return None;
    }
    let plain = value.to_string();
    if plain.len() <= DS_MAX_LEN {
        return Some(plain);
    }
    (0..12)
        .rev()
        .map(|precision| format!("{:.*e}", precision, float))
        .find(|s| s.len() <= DS_MAX_LEN)
}

/// Format a number as an integer string,
/// if it is integral and fits in 32 bits.
pub(crate) fn format_integer<N>(value: N) -> Option<String>
where
    N: ToPrimitive + Copy,
{
    let v: i32 = convert(value)?;
    Some(v.to_string())
}

fn read_number<T: FromStr>(digits: &[u8]) -> Option<T> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// Parse a full date in the `YYYYMMDD` form.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let buf = value.as_bytes();
    if buf.len() != 8 {
        return None;
    }
    NaiveDate::from_ymd_opt(
        read_number(&buf[0..4])?,
        read_number(&buf[4..6])?,
        read_number(&buf[6..8])?,
    )
}

/// Parse a time in the `HH[MM[SS[.F{1,6}]]]` form.
/// Colons between components are tolerated.
pub(crate) fn parse_time(value: &str) -> Option<NaiveTime> {
    let value: String = value.chars().filter(|&c| c != ':').collect();
    let (hms, fraction) = value.split_once('.').unwrap_or((value.as_str(), ""));
    let buf = hms.as_bytes();
    if buf.len() < 2 || buf.len() > 6 || buf.len() % 2 != 0 {
        return None;
    }
    if !fraction.is_empty() && buf.len() != 6 {
        return None;
    }
    let hour = read_number(&buf[0..2])?;
    let minute = if buf.len() >= 4 { read_number(&buf[2..4])? } else { 0 };
    let second = if buf.len() == 6 { read_number(&buf[4..6])? } else { 0 };
    let micro = match fraction.len() {
        0 => 0,
        1..=6 => {
            let f: u32 = read_number(fraction.as_bytes())?;
            f * 10u32.pow(6 - fraction.len() as u32)
        }
        _ => return None,
    };
    NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
}

/// Parse a date time in the `YYYY[MM[DD[HH[MM[SS[.F]]]]]]` form.
///
/// Missing date components default to the first month or day,
/// a missing time to midnight.
/// A trailing UTC offset is ignored.
pub(crate) fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = match value.get(4..).and_then(|rest| rest.rfind(|c: char| c == '+' || c == '-')) {
        Some(i) => &value[..i + 4],
        None => value,
    };
    let buf = value.as_bytes();
    if buf.len() < 4 {
        return None;
    }
    let year = read_number(&buf[0..4])?;
    let month = match buf.get(4..6) {
        Some(m) => read_number(m)?,
        None => 1,
    };
    let day = match buf.get(6..8) {
        Some(d) => read_number(d)?,
        None => 1,
    };
    if buf.len() != 4 && buf.len() != 6 && buf.len() < 8 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = if buf.len() > 8 {
        parse_time(&value[8..])?
    } else {
        NaiveTime::from_hms_opt(0, 0, 0)?
    };
    Some(NaiveDateTime::new(date, time))
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

pub(crate) fn format_time(time: NaiveTime) -> String {
    let mut out = format!("{:02}{:02}{:02}", time.hour(), time.minute(), time.second());
    let micro = time.nanosecond() / 1_000;
    if micro > 0 {
        out.push_str(&format!(".{:06}", micro));
    }
    out
}

pub(crate) fn format_datetime(datetime: NaiveDateTime) -> String {
    format_date(datetime.date()) + &format_time(datetime.time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    const TAG: Tag = Tag(0x0010, 0x0010);

    #[rstest]
    #[case("1000")]
    #[case("-1.5")]
    #[case("+.5")]
    #[case("3.")]
    #[case("1e10")]
    #[case("6.02E-23")]
    fn decimal_strings(#[case] value: &str) {
        assert!(is_decimal_string(value));
        assert!(validate(TAG, VR::DS, value).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("1.2.3")]
    #[case("abc")]
    #[case("1e")]
    #[case("--1")]
    fn not_decimal_strings(#[case] value: &str) {
        assert!(!is_decimal_string(value));
    }

    #[test]
    fn integer_strings_are_range_checked() {
        assert!(validate(TAG, VR::IS, " 2147483647").is_ok());
        assert!(matches!(
            validate(TAG, VR::IS, "2147483648"),
            Err(Error::Data { .. })
        ));
        assert!(matches!(
            validate(TAG, VR::IS, "12.5"),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn maximum_length() {
        assert!(validate(TAG, VR::SH, "0123456789ABCDEF").is_ok());
        assert!(matches!(
            validate(TAG, VR::SH, "0123456789ABCDEFG"),
            Err(Error::Data { .. })
        ));
        // trailing padding does not count
        assert!(validate(TAG, VR::SH, "0123456789ABCDEF  ").is_ok());
        // date ranges exceed the length of a single date
        assert!(validate(TAG, VR::DA, "20240101-20241231").is_ok());
    }

    #[rstest]
    #[case(VR::AS, "018Y", true)]
    #[case(VR::AS, "18Y", false)]
    #[case(VR::CS, "ORIGINAL_PRIMARY", true)]
    #[case(VR::CS, "lower", false)]
    #[case(VR::DA, "20240131", true)]
    #[case(VR::DA, "-20240131", true)]
    #[case(VR::DA, "2024.01.31", false)]
    #[case(VR::UI, "1.2.840.10008.1.2", true)]
    #[case(VR::UI, "1.2.a", false)]
    #[case(VR::TM, "10:21:05.25", true)]
    #[case(VR::TM, "1000-1200", true)]
    #[case(VR::TM, "-1200", true)]
    #[case(VR::TM, "1-1-1-1-1-1-1-1-1-1-1-1-1-1-1", false)]
    #[case(VR::TM, "1-1-1", false)]
    #[case(VR::TM, "-", false)]
    #[case(VR::TM, "1234567890.1234567-10", false)]
    #[case(VR::DT, "20240131101010.5-0500", true)]
    #[case(VR::DT, "20240131-0500-20240201-0500", true)]
    #[case(VR::DT, "2024-01-31-01-01", false)]
    #[case(VR::LO, "anything goes", true)]
    fn grammar(#[case] vr: VR, #[case] value: &str, #[case] valid: bool) {
        assert_eq!(validate(TAG, vr, value).is_ok(), valid);
    }

    #[test]
    fn delimiter_in_multi_valued_vr() {
        assert!(matches!(
            validate(TAG, VR::LO, "a\\b"),
            Err(Error::Format { .. })
        ));
        assert!(validate(TAG, VR::LT, "a\\b").is_ok());
    }

    #[test]
    fn numbers_from_text() {
        assert_eq!(parse_number::<i32>(" 42 "), Some(42));
        assert_eq!(parse_number::<i32>("+7"), Some(7));
        assert_eq!(parse_number::<u16>("1.0e2"), Some(100));
        assert_eq!(parse_number::<u16>("1.5"), None);
        assert_eq!(parse_number::<u16>("-1"), None);
        assert_eq!(parse_number::<f64>("6.5"), Some(6.5));
    }

    #[test]
    fn decimal_formatting() {
        assert_eq!(format_decimal(1.5_f64).as_deref(), Some("1.5"));
        assert_eq!(format_decimal(42_u16).as_deref(), Some("42"));
        assert_eq!(format_decimal(0.1_f32).as_deref(), Some("0.1"));
        let long = format_decimal(1.0_f64 / 3.0).unwrap();
        assert!(long.len() <= DS_MAX_LEN);
        assert!(is_decimal_string(&long));
        let big = format_decimal(u64::MAX).unwrap();
        assert!(big.len() <= DS_MAX_LEN);
        assert!(is_decimal_string(&big));
        assert_eq!(format_decimal(f64::NAN), None);
    }

    #[test]
    fn integer_formatting() {
        assert_eq!(format_integer(-12_i64).as_deref(), Some("-12"));
        assert_eq!(format_integer(3.0_f64).as_deref(), Some("3"));
        assert_eq!(format_integer(3.5_f64), None);
        assert_eq!(format_integer(u32::MAX), None);
    }

    #[test]
    fn dates_and_times() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_date("20240229"), Some(date));
        assert_eq!(parse_date("20230229"), None);
        assert_eq!(format_date(date), "20240229");

        let time = NaiveTime::from_hms_micro_opt(10, 21, 5, 250_000).unwrap();
        assert_eq!(parse_time("102105.25"), Some(time));
        assert_eq!(parse_time("10:21:05.25"), Some(time));
        assert_eq!(
            parse_time("10"),
            Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        );
        assert_eq!(parse_time("1021053"), None);
        assert_eq!(format_time(time), "102105.250000");

        let datetime = NaiveDateTime::new(date, time);
        assert_eq!(parse_datetime("20240229102105.25+0100"), Some(datetime));
        assert_eq!(
            parse_datetime("2024"),
            Some(NaiveDateTime::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveTime::from_hms_opt(0, 0, 0).unwrap()
            ))
        );
        assert_eq!(format_datetime(datetime), "20240229102105.250000");
    }
}
