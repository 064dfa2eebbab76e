//! Accepted textual forms for build dates.
//!
//! The form is picked from the input itself: a `-` selects the dashed form, a `/`
//! selects the slashed form, and anything else is read as compact `YYYYMMDD`.

use crate::error::{BuildToolsError, Result};
use chrono::NaiveDate;

/// Date string layout accepted by `--msbuilddate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Dashed,
    /// `YYYY/MM/DD`
    Slashed,
    /// `YYYYMMDD`
    Compact,
}

impl DateFormat {
    /// All formats, in detection order
    pub const ALL: [DateFormat; 3] = [DateFormat::Dashed, DateFormat::Slashed, DateFormat::Compact];

    /// Pick the format for an input string by its separator
    pub fn detect(input: &str) -> Self {
        if input.contains('-') {
            DateFormat::Dashed
        } else if input.contains('/') {
            DateFormat::Slashed
        } else {
            DateFormat::Compact
        }
    }

    /// strftime pattern for this format
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Dashed => "%Y-%m-%d",
            DateFormat::Slashed => "%Y/%m/%d",
            DateFormat::Compact => "%Y%m%d",
        }
    }

    /// Parse `input` strictly in this format
    pub fn parse(&self, input: &str) -> Result<NaiveDate> {
        match self {
            DateFormat::Compact => parse_compact(input),
            _ => NaiveDate::parse_from_str(input, self.pattern()).map_err(|e| {
                BuildToolsError::date_parse(format!(
                    "'{}' does not match {}: {}",
                    input,
                    self.pattern(),
                    e
                ))
            }),
        }
    }

    /// Render a date in this format
    pub fn render(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// Detect the format of `input` and parse it
pub fn parse_build_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    DateFormat::detect(input).parse(input)
}

// %Y has no fixed width, so split the eight digits by position instead.
fn parse_compact(input: &str) -> Result<NaiveDate> {
    let invalid = |reason: &str| {
        BuildToolsError::date_parse(format!("'{}' does not match %Y%m%d: {}", input, reason))
    };

    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected exactly 8 digits"));
    }

    let year = input[0..4].parse::<i32>().map_err(|_| invalid("bad year"))?;
    let month = input[4..6].parse::<u32>().map_err(|_| invalid("bad month"))?;
    let day = input[6..8].parse::<u32>().map_err(|_| invalid("bad day"))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("no such calendar date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_detect_by_separator() {
        assert_eq!(DateFormat::detect("2020-01-15"), DateFormat::Dashed);
        assert_eq!(DateFormat::detect("2020/01/15"), DateFormat::Slashed);
        assert_eq!(DateFormat::detect("20200115"), DateFormat::Compact);
        // Dash wins when both separators are present
        assert_eq!(DateFormat::detect("2020/01-15"), DateFormat::Dashed);
    }

    #[test]
    fn test_all_forms_parse_to_same_date() {
        for input in ["2020-01-15", "2020/01/15", "20200115"] {
            assert_eq!(parse_build_date(input).unwrap(), ymd(2020, 1, 15), "input {}", input);
        }
    }

    #[test]
    fn test_unpadded_fields_accepted_with_separators() {
        assert_eq!(parse_build_date("2020-1-5").unwrap(), ymd(2020, 1, 5));
        assert_eq!(parse_build_date("2020/1/5").unwrap(), ymd(2020, 1, 5));
    }

    #[test]
    fn test_render_each_format() {
        let date = ymd(2000, 1, 1);
        assert_eq!(DateFormat::Dashed.render(date), "2000-01-01");
        assert_eq!(DateFormat::Slashed.render(date), "2000/01/01");
        assert_eq!(DateFormat::Compact.render(date), "20000101");
    }

    #[test]
    fn test_invalid_inputs_fail() {
        let bad = [
            "2020-13-01",
            "2020/02/30",
            "2020011",
            "202001150",
            "2020ab15",
            "yesterday",
            "",
            "2020-01",
        ];
        for input in bad {
            let err = parse_build_date(input).unwrap_err();
            assert!(
                err.to_string().starts_with("Date parsing error"),
                "input {:?} gave {}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(parse_build_date("20000229").unwrap(), ymd(2000, 2, 29));
        assert!(parse_build_date("19000229").is_err());
    }
}
