use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Years added to an enrollment start to approximate graduation.
pub const PROGRAM_LENGTH_YEARS: i32 = 4;

const YEAR_ONLY_MONTH: u32 = 12;

/// Parses a roster date token (`"YYYY"` or `"YYYY.MM"`) into midnight on the
/// first day of the referenced month.
///
/// A bare year resolves to December of that year. A numeric month outside
/// `1..=12` makes the whole token absent. A month part that is not an integer
/// is ignored and the token is re-read as a bare year. Anything else yields
/// `None`; the parser never fails loudly.
pub fn parse_year_month(token: Option<&str>) -> Option<NaiveDateTime> {
    let token = token?;
    if token.trim().is_empty() {
        return None;
    }

    if token.contains('.') {
        let mut parts = token.split('.');
        let year = parts.next().and_then(parse_integer);
        let month = parts.next().and_then(parse_integer);
        if let (Some(year), Some(month)) = (year, month) {
            return month_start(year, month);
        }
    }

    let year = leading_integer(token)?;
    month_start(year, i64::from(YEAR_ONLY_MONTH))
}

/// Shifts a calendar point forward by the standard program length, keeping
/// the month.
pub fn project_graduation(start: NaiveDateTime) -> Option<NaiveDateTime> {
    let date = start.date();
    NaiveDate::from_ymd_opt(date.year() + PROGRAM_LENGTH_YEARS, date.month(), 1)
        .and_then(|projected| projected.and_hms_opt(0, 0, 0))
}

fn month_start(year: i64, month: i64) -> Option<NaiveDateTime> {
    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(month).ok().filter(|m| (1..=12).contains(m))?;
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Reads the integer prefix of `raw` (after leading whitespace and an
/// optional sign), ignoring whatever trails it.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(year: i32, month: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid calendar point")
    }

    #[test]
    fn year_and_month_resolve_to_first_of_month() {
        assert_eq!(parse_year_month(Some("2020.06")), Some(midnight(2020, 6)));
        assert_eq!(parse_year_month(Some("2019.1")), Some(midnight(2019, 1)));
    }

    #[test]
    fn bare_year_assumes_december() {
        assert_eq!(parse_year_month(Some("2020")), Some(midnight(2020, 12)));
        assert_eq!(parse_year_month(Some(" 2018 ")), Some(midnight(2018, 12)));
    }

    #[test]
    fn unparseable_tokens_are_absent() {
        assert_eq!(parse_year_month(None), None);
        assert_eq!(parse_year_month(Some("")), None);
        assert_eq!(parse_year_month(Some("   ")), None);
        assert_eq!(parse_year_month(Some("abcd")), None);
        assert_eq!(parse_year_month(Some(".06")), None);
    }

    #[test]
    fn out_of_range_month_is_absent() {
        assert_eq!(parse_year_month(Some("2020.13")), None);
        assert_eq!(parse_year_month(Some("2020.0")), None);
        assert_eq!(parse_year_month(Some("2020.-3")), None);
    }

    #[test]
    fn non_numeric_month_falls_back_to_year() {
        assert_eq!(parse_year_month(Some("2020.")), Some(midnight(2020, 12)));
        assert_eq!(parse_year_month(Some("2020.xx")), Some(midnight(2020, 12)));
    }

    #[test]
    fn year_prefix_tolerates_trailing_text() {
        assert_eq!(parse_year_month(Some("2021 (expected)")), Some(midnight(2021, 12)));
        assert_eq!(parse_year_month(Some("2017-2021")), Some(midnight(2017, 12)));
    }

    #[test]
    fn projection_keeps_month() {
        assert_eq!(project_graduation(midnight(2016, 12)), Some(midnight(2020, 12)));
        assert_eq!(project_graduation(midnight(2019, 7)), Some(midnight(2023, 7)));
    }
}
