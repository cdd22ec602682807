use crate::domain::model::ParsedDate;
use crate::utils::error::Result;

/// Record-existence queries against DNS.
///
/// Names are passed fully qualified with a trailing dot. `Ok(false)` means the
/// name resolved but carries no record of that type; transport and resolver
/// failures are `Err`.
pub trait DnsResolver: Send + Sync {
    fn has_mx_record(&self, fqdn: &str) -> Result<bool>;
    fn has_a_record(&self, fqdn: &str) -> Result<bool>;
}

pub trait DateParser: Send + Sync {
    /// Split `input` (already using `/` separators) into date fields.
    fn parse(&self, input: &str) -> ParsedDate;

    /// Leap-year aware check that `day` exists in `month` of `year`.
    fn is_valid_calendar_date(&self, year: i32, month: u32, day: u32) -> bool;
}

impl<T: DnsResolver + ?Sized> DnsResolver for &T {
    fn has_mx_record(&self, fqdn: &str) -> Result<bool> {
        (**self).has_mx_record(fqdn)
    }

    fn has_a_record(&self, fqdn: &str) -> Result<bool> {
        (**self).has_a_record(fqdn)
    }
}

impl<T: DateParser + ?Sized> DateParser for &T {
    fn parse(&self, input: &str) -> ParsedDate {
        (**self).parse(input)
    }

    fn is_valid_calendar_date(&self, year: i32, month: u32, day: u32) -> bool {
        (**self).is_valid_calendar_date(year, month, day)
    }
}
