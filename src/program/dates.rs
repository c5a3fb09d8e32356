use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::types::{DateLine, DateMatch, DatePattern, MeetingKind};

/// Danish month names in calendar order, as they appear in labels
pub const MONTH_NAMES: [&str; 12] = [
    "Januar", "Februar", "Marts", "April", "Maj", "Juni",
    "Juli", "August", "September", "Oktober", "November", "December",
];

const MONTH_ABBREVIATIONS: [(&str, u32); 12] = [
    ("jan", 1), ("feb", 2), ("mar", 3), ("apr", 4), ("maj", 5), ("jun", 6),
    ("jul", 7), ("aug", 8), ("sep", 9), ("okt", 10), ("nov", 11), ("dec", 12),
];

/// Leading tokens of weekday-meeting labels
pub const WEEKDAY_TOKENS: [&str; 3] = ["Tirsdag", "Mandag", "Torsdag"];
pub const DEFAULT_WEEKDAY_TOKEN: &str = "Tirsdag";
pub const WEEKEND_TOKEN: &str = "Søndag";

// Year rules tied to the 2025/26 programme season
pub const RANGE_YEAR: i32 = 2026;
pub const NAMED_WEEKDAY_YEAR: i32 = 2025;
pub const NEXT_YEAR: i32 = 2026;
pub const CURRENT_YEAR: i32 = 2025;

// Monday = 0 .. Sunday = 6
const TUESDAY: u32 = 1;
const SUNDAY: u32 = 6;

const NO_MEETING_MARKERS: [&str; 2] = ["intet møde", "ingen møde"];

const MONTH_ALTERNATION: &str =
    "Januar|Februar|Marts|April|Maj|Juni|Juli|August|September|Oktober|November|December";

static CROSS_MONTH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^({m})\s+(\d{{1,2}})\s*-\s*({m})\s+(\d{{1,2}})\b",
        m = MONTH_ALTERNATION
    ))
    .expect("valid regex")
});

static MONTH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^({m})\s+(\d{{1,2}})\s*-\s*(\d{{1,2}})\b",
        m = MONTH_ALTERNATION
    ))
    .expect("valid regex")
});

static NAMED_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(Tirsdag|Mandag|Torsdag)\s+(\d{{1,2}})\s+({m})\b",
        m = MONTH_ALTERNATION
    ))
    .expect("valid regex")
});

static NUMERIC_WEEKEND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})").expect("valid regex"));

static JANUARY_ABBREVIATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.\s*JAN\b").expect("valid regex"));

static DANISH_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(\d{{1,2}})\.?\s*({m})\b", m = MONTH_ALTERNATION))
        .expect("valid regex")
});

static ABBREVIATED_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d{1,2})\.?\s*([a-zæøå]{3})\b").expect("valid regex"));

type Recognizer = fn(&str) -> Option<Vec<DateMatch>>;

/// Recognizers in precedence order, most specific first
const RECOGNIZERS: [(DatePattern, Recognizer); 7] = [
    (DatePattern::CrossMonthRange, cross_month_range),
    (DatePattern::MonthRange, month_range),
    (DatePattern::NamedWeekday, named_weekday),
    (DatePattern::NumericWeekend, numeric_weekend),
    (DatePattern::JanuaryAbbreviated, january_abbreviated),
    (DatePattern::DanishDate, danish_date),
    (DatePattern::AbbreviatedMonth, abbreviated_month),
];

/// Month number (1-12) for a Danish month name, any case
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
}

/// Canonical Danish month name for a month number (1-12)
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

fn abbreviation_month(code: &str) -> Option<u32> {
    let code = code.to_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == code)
        .map(|(_, n)| *n)
}

/// Builds a weekday-meeting label, e.g. "Tirsdag 02 September 2025"
pub fn weekday_label(token: &str, day: u32, month: u32, year: i32) -> Option<String> {
    Some(format!("{} {:02} {} {}", token, day, month_name(month)?, year))
}

/// Builds a weekend-meeting label, e.g. "Søndag 07 September 2025"
pub fn weekend_label(day: u32, month: u32, year: i32) -> Option<String> {
    Some(format!("{} {:02} {} {}", WEEKEND_TOKEN, day, month_name(month)?, year))
}

fn is_no_meeting(line: &str) -> bool {
    let lower = line.to_lowercase();
    NO_MEETING_MARKERS.iter().any(|m| lower.contains(m))
}

/// Recognizes at most one date pattern at the start of a stripped line.
///
/// Patterns are tried in precedence order and the first recognizer that
/// accepts the line decides the result. Ranges may yield zero, one or two
/// dates; every other pattern yields exactly one.
pub fn extract_date(line: &str) -> Option<DateLine> {
    RECOGNIZERS.iter().find_map(|(pattern, recognize)| {
        recognize(line).map(|dates| DateLine {
            pattern: *pattern,
            dates,
            no_meeting: is_no_meeting(line),
        })
    })
}

fn number(caps: &Captures, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn single(label: Option<String>, kind: MeetingKind, date: NaiveDate) -> Option<Vec<DateMatch>> {
    Some(vec![DateMatch {
        label: label?,
        kind,
        key: (date.year(), date.month(), date.day()),
    }])
}

// An impossible day/month still makes a date line, just one without dates
fn weekday_date(token: &str, day: u32, month: u32, year: i32) -> Option<Vec<DateMatch>> {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => single(weekday_label(token, day, month, year), MeetingKind::Weekday, date),
        None => Some(Vec::new()),
    }
}

/// First Tuesday and first Sunday among the candidate days.
/// Invalid day numbers were already dropped by the caller.
fn resolve_range(days: impl Iterator<Item = NaiveDate>) -> Vec<DateMatch> {
    let mut tuesday = None;
    let mut sunday = None;
    for date in days {
        match date.weekday().num_days_from_monday() {
            TUESDAY if tuesday.is_none() => tuesday = Some(date),
            SUNDAY if sunday.is_none() => sunday = Some(date),
            _ => {}
        }
        if tuesday.is_some() && sunday.is_some() {
            break;
        }
    }

    let mut dates = Vec::new();
    if let Some(date) = tuesday {
        let label = weekday_label(DEFAULT_WEEKDAY_TOKEN, date.day(), date.month(), date.year());
        if let Some(label) = label {
            dates.push(DateMatch {
                label,
                kind: MeetingKind::Weekday,
                key: (date.year(), date.month(), date.day()),
            });
        }
    }
    if let Some(date) = sunday {
        if let Some(label) = weekend_label(date.day(), date.month(), date.year()) {
            dates.push(DateMatch {
                label,
                kind: MeetingKind::Weekend,
                key: (date.year(), date.month(), date.day()),
            });
        }
    }
    dates
}

fn days_in(year: i32, month: u32, from: u32, to: u32) -> impl Iterator<Item = NaiveDate> {
    (from..=to).filter_map(move |d| NaiveDate::from_ymd_opt(year, month, d))
}

// "Marts 30-april 05"
fn cross_month_range(line: &str) -> Option<Vec<DateMatch>> {
    let caps = CROSS_MONTH_RANGE.captures(line)?;
    let start_month = month_number(&caps[1])?;
    let start_day = number(&caps, 2)?;
    let end_month = month_number(&caps[3])?;
    let end_day = number(&caps, 4)?;

    if start_month == end_month {
        return Some(resolve_range(days_in(RANGE_YEAR, start_month, start_day, end_day)));
    }

    let days = days_in(RANGE_YEAR, start_month, start_day, 31)
        .chain(days_in(RANGE_YEAR, end_month, 1, end_day));
    Some(resolve_range(days))
}

// "April 06-12"
fn month_range(line: &str) -> Option<Vec<DateMatch>> {
    let caps = MONTH_RANGE.captures(line)?;
    let month = month_number(&caps[1])?;
    let start = number(&caps, 2)?;
    let end = number(&caps, 3)?;
    Some(resolve_range(days_in(RANGE_YEAR, month, start, end)))
}

// "Tirsdag 15 September"
fn named_weekday(line: &str) -> Option<Vec<DateMatch>> {
    let caps = NAMED_WEEKDAY.captures(line)?;
    let day = number(&caps, 2)?;
    let month = month_number(&caps[3])?;
    weekday_date(&caps[1], day, month, NAMED_WEEKDAY_YEAR)
}

// "07/09/2025"
fn numeric_weekend(line: &str) -> Option<Vec<DateMatch>> {
    let caps = NUMERIC_WEEKEND.captures(line)?;
    let day = number(&caps, 1)?;
    let month = number(&caps, 2)?;
    let year: i32 = caps[3].parse().ok()?;
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => single(weekend_label(day, month, year), MeetingKind::Weekend, date),
        None => Some(Vec::new()),
    }
}

// "13. JAN"
fn january_abbreviated(line: &str) -> Option<Vec<DateMatch>> {
    let caps = JANUARY_ABBREVIATED.captures(line)?;
    weekday_date(DEFAULT_WEEKDAY_TOKEN, number(&caps, 1)?, 1, NEXT_YEAR)
}

// "21. Oktober" / "21 Oktober"
fn danish_date(line: &str) -> Option<Vec<DateMatch>> {
    let caps = DANISH_DATE.captures(line)?;
    let day = number(&caps, 1)?;
    let month = month_number(&caps[2])?;
    let year = if month == 1 { NEXT_YEAR } else { CURRENT_YEAR };
    weekday_date(DEFAULT_WEEKDAY_TOKEN, day, month, year)
}

// "04 FEB" / "4. okt"
fn abbreviated_month(line: &str) -> Option<Vec<DateMatch>> {
    let caps = ABBREVIATED_MONTH.captures(line)?;
    let day = number(&caps, 1)?;
    let month = abbreviation_month(&caps[2])?;
    let year = if month <= 3 { NEXT_YEAR } else { CURRENT_YEAR };
    weekday_date(DEFAULT_WEEKDAY_TOKEN, day, month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(line: &str) -> Vec<(String, MeetingKind)> {
        extract_date(line)
            .map(|d| d.dates.into_iter().map(|m| (m.label, m.kind)).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_cross_month_range_resolves_tuesday_and_sunday() {
        let line = extract_date("Marts 30-april 05").unwrap();
        assert_eq!(line.pattern, DatePattern::CrossMonthRange);
        assert_eq!(
            labels("Marts 30-april 05"),
            vec![
                ("Tirsdag 31 Marts 2026".to_string(), MeetingKind::Weekday),
                ("Søndag 05 April 2026".to_string(), MeetingKind::Weekend),
            ]
        );
        assert_eq!(line.date_of_kind(MeetingKind::Weekend).unwrap().key, (2026, 4, 5));
    }

    #[test]
    fn test_cross_month_range_tuesday_in_second_month() {
        // 2026-04-29 is a Wednesday, 2026-05-03 a Sunday, 2026-05-05 a Tuesday
        assert_eq!(
            labels("April 29-maj 05"),
            vec![
                ("Tirsdag 05 Maj 2026".to_string(), MeetingKind::Weekday),
                ("Søndag 03 Maj 2026".to_string(), MeetingKind::Weekend),
            ]
        );
    }

    #[test]
    fn test_single_month_range() {
        // 2026-04-06 is a Monday
        let line = extract_date("April 06-12").unwrap();
        assert_eq!(line.pattern, DatePattern::MonthRange);
        assert_eq!(
            labels("April 06-12"),
            vec![
                ("Tirsdag 07 April 2026".to_string(), MeetingKind::Weekday),
                ("Søndag 12 April 2026".to_string(), MeetingKind::Weekend),
            ]
        );
    }

    #[test]
    fn test_range_without_matching_days_is_still_recognized() {
        // 2026-04-08 Wednesday .. 2026-04-09 Thursday
        let line = extract_date("April 08-09").unwrap();
        assert_eq!(line.pattern, DatePattern::MonthRange);
        assert!(line.dates.is_empty());
    }

    #[test]
    fn test_range_skips_impossible_days() {
        // April has no 31st; the scan moves on to May 1-3 and finds no Tuesday
        assert_eq!(
            labels("April 29-maj 03"),
            vec![("Søndag 03 Maj 2026".to_string(), MeetingKind::Weekend)]
        );
    }

    #[test]
    fn test_named_weekday_date() {
        let line = extract_date("Tirsdag 15 September Sang 12").unwrap();
        assert_eq!(line.pattern, DatePattern::NamedWeekday);
        assert_eq!(line.dates[0].label, "Tirsdag 15 September 2025");
        assert_eq!(line.dates[0].kind, MeetingKind::Weekday);
        assert_eq!(line.dates[0].key, (2025, 9, 15));
        assert!(!line.no_meeting);

        assert_eq!(labels("Torsdag 02 Oktober")[0].0, "Torsdag 02 Oktober 2025");
    }

    #[test]
    fn test_no_meeting_marker() {
        let line = extract_date("Tirsdag 23 December Intet møde").unwrap();
        assert!(line.no_meeting);
        let line = extract_date("Mandag 29 December - Ingen møde").unwrap();
        assert!(line.no_meeting);
    }

    #[test]
    fn test_numeric_weekend_date() {
        let line = extract_date("07/09/2025").unwrap();
        assert_eq!(line.pattern, DatePattern::NumericWeekend);
        assert_eq!(line.dates[0].label, "Søndag 07 September 2025");
        assert_eq!(line.dates[0].kind, MeetingKind::Weekend);
        assert_eq!(line.dates[0].key, (2025, 9, 7));
    }

    #[test]
    fn test_impossible_single_dates_are_date_lines_without_dates() {
        let lines = ["07/13/2025", "31/09/2025", "Tirsdag 31 September", "31 September", "30. feb"];
        for line in lines {
            let date_line = extract_date(line).unwrap();
            assert!(date_line.dates.is_empty(), "{}", line);
        }
    }

    #[test]
    fn test_january_abbreviated() {
        let line = extract_date("13. JAN").unwrap();
        assert_eq!(line.pattern, DatePattern::JanuaryAbbreviated);
        assert_eq!(line.dates[0].label, "Tirsdag 13 Januar 2026");
    }

    #[test]
    fn test_danish_date_year_rule() {
        let line = extract_date("21. Oktober").unwrap();
        assert_eq!(line.pattern, DatePattern::DanishDate);
        assert_eq!(line.dates[0].label, "Tirsdag 21 Oktober 2025");
        assert_eq!(labels("6 Januar")[0].0, "Tirsdag 06 Januar 2026");
        assert_eq!(labels("3 Februar")[0].0, "Tirsdag 03 Februar 2025");
    }

    #[test]
    fn test_abbreviated_month_year_rule() {
        let line = extract_date("03 feb.").unwrap();
        assert_eq!(line.pattern, DatePattern::AbbreviatedMonth);
        assert_eq!(line.dates[0].label, "Tirsdag 03 Februar 2026");
        assert_eq!(labels("10. MAR")[0].0, "Tirsdag 10 Marts 2026");
        assert_eq!(labels("14 OKT")[0].0, "Tirsdag 14 Oktober 2025");
    }

    #[test]
    fn test_unrecognized_lines() {
        assert!(extract_date("Bøn: Anna Jensen").is_none());
        assert!(extract_date("10 min. Sang").is_none());
        assert!(extract_date("").is_none());
        assert!(extract_date("Weekendmødet 07/09/2025").is_none());
    }

    #[test]
    fn test_month_tables() {
        assert_eq!(month_number("marts"), Some(3));
        assert_eq!(month_number("December"), Some(12));
        assert_eq!(month_number("Smarch"), None);
        assert_eq!(month_name(1), Some("Januar"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
