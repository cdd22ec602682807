use crate::domain::ports::DateParser;

/// Rewrite `-` separators as `/` so both styles share one grammar.
pub fn normalize_separators(input: &str) -> String {
    input.replace('-', "/")
}

/// Accepts `M/D/Y` (4- or 2-digit year) and `Y/M/D` (4-digit year only), with
/// `/` or `-` separators and 1- or 2-digit month and day.
///
/// The date must exist on the calendar, carry no timezone, parse without
/// errors, and have a year printed with exactly four digits.
pub fn is_valid_date<P: DateParser>(input: &str, parser: &P) -> bool {
    let normalized = normalize_separators(input);
    let parsed = parser.parse(&normalized);

    if parsed.error_count() > 0 {
        tracing::debug!("Date {:?} has parse errors: {:?}", input, parsed.errors);
        return false;
    }
    if parsed.has_timezone {
        tracing::debug!("Date {:?} carries a timezone", input);
        return false;
    }

    let (Some(year), Some(month), Some(day)) = (parsed.year, parsed.month, parsed.day) else {
        tracing::debug!("Date {:?} is missing a field", input);
        return false;
    };

    // 年份必須是四位數
    if !(1000..=9999).contains(&year) {
        return false;
    }

    parser.is_valid_calendar_date(year, month, day)
}
