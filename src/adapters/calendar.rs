use crate::domain::model::ParsedDate;
use crate::domain::ports::DateParser;
use chrono::{NaiveDate, NaiveTime};

/// Permissive parser for slash-separated dates.
///
/// `YYYY/M/D` when the first field has four digits, `M/D/YYYY` or `M/D/YY`
/// otherwise. A time of day and timezone may follow, separated by whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarDateParser;

impl CalendarDateParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_fields(date: &str, parsed: &mut ParsedDate) {
        let fields: Vec<&str> = date.split('/').collect();
        if fields.len() != 3 {
            parsed
                .errors
                .push(format!("Expected three date fields, found {}", fields.len()));
            return;
        }
        if let Some(bad) = fields
            .iter()
            .find(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()))
        {
            parsed.errors.push(format!("Unexpected date field '{}'", bad));
            return;
        }

        if fields[0].len() == 4 {
            parsed.year = fields[0].parse().ok();
            parsed.month = short_field(fields[1], "month", parsed);
            parsed.day = short_field(fields[2], "day", parsed);
        } else {
            parsed.month = short_field(fields[0], "month", parsed);
            parsed.day = short_field(fields[1], "day", parsed);
            parsed.year = match fields[2].len() {
                4 => fields[2].parse().ok(),
                2 => fields[2].parse::<i32>().ok().map(expand_two_digit_year),
                n => {
                    parsed.errors.push(format!("Unexpected {}-digit year", n));
                    None
                }
            };
        }
    }
}

fn short_field(field: &str, name: &str, parsed: &mut ParsedDate) -> Option<u32> {
    if field.len() > 2 {
        parsed
            .errors
            .push(format!("Unexpected {}-digit {}", field.len(), name));
        return None;
    }
    field.parse().ok()
}

/// 00-69 → 2000s, 70-99 → 1900s
fn expand_two_digit_year(year: i32) -> i32 {
    if year < 70 {
        2000 + year
    } else {
        1900 + year
    }
}

fn is_time_of_day(token: &str) -> bool {
    NaiveTime::parse_from_str(token, "%H:%M:%S").is_ok()
        || NaiveTime::parse_from_str(token, "%H:%M").is_ok()
}

fn is_timezone(token: &str) -> bool {
    if token.len() <= 6 && token.bytes().all(|b| b.is_ascii_alphabetic()) {
        return true;
    }

    let Some(offset) = token.strip_prefix(['+', '-']) else {
        return false;
    };
    let digits: String = offset.chars().filter(|c| *c != ':').collect();
    matches!(digits.len(), 2 | 4)
        && digits.bytes().all(|b| b.is_ascii_digit())
        && offset.matches(':').count() <= 1
}

impl DateParser for CalendarDateParser {
    fn parse(&self, input: &str) -> ParsedDate {
        let mut parsed = ParsedDate::default();
        let mut tokens = input.split_whitespace();

        let Some(date) = tokens.next() else {
            parsed.errors.push("Empty date string".to_string());
            return parsed;
        };
        Self::parse_fields(date, &mut parsed);

        let mut seen_time = false;
        for token in tokens {
            if !seen_time && !parsed.has_timezone && is_time_of_day(token) {
                seen_time = true;
            } else if !parsed.has_timezone && is_timezone(token) {
                parsed.has_timezone = true;
            } else {
                parsed.errors.push(format!("Unexpected token '{}'", token));
            }
        }

        parsed
    }

    fn is_valid_calendar_date(&self, year: i32, month: u32, day: u32) -> bool {
        NaiveDate::from_ymd_opt(year, month, day).is_some()
    }
}
