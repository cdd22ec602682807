use crate::domain::model::IssuerKind;

/// Drop every character that is not an ASCII digit (spaces, hyphens, ...).
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Luhn checksum over the digits of `number`; separators are ignored.
///
/// Every second digit counting from the rightmost is doubled (minus 9 when it
/// exceeds 9) and the number is valid when the digit total is a multiple of 10.
/// Input without any digit is never valid.
pub fn luhn_check(number: &str) -> bool {
    let digits = strip_non_digits(number);
    if digits.is_empty() {
        return false;
    }

    let parity = digits.len() % 2;
    let total = digits
        .bytes()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .fold(0u32, |total, (i, digit)| {
            let value = if i % 2 == parity {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            };
            (total + value) % 10
        });

    total == 0
}

/// Issuer rule table keyed on digit count and leading digits.
///
/// `digits` must already be normalized; the Luhn check is not applied here, so
/// the result is never `Invalid`.
pub fn classify_issuer(digits: &str) -> IssuerKind {
    let len = digits.len();
    if len == 15 && digits.starts_with('3') {
        IssuerKind::AmericanExpress
    } else if len == 16 && digits.starts_with("6011") {
        IssuerKind::Discover
    } else if len == 16 && digits.starts_with('5') {
        IssuerKind::MasterCard
    } else if (len == 16 || len == 13) && digits.starts_with('4') {
        IssuerKind::Visa
    } else {
        IssuerKind::Unknown
    }
}

/// Validate a card number and name its issuer.
///
/// Returns `Invalid` for input with no digits or a failed Luhn check. A
/// Luhn-valid number outside the issuer table is `Unknown`, not `Invalid`.
pub fn credit_card_type(input: &str) -> IssuerKind {
    let digits = strip_non_digits(input);
    if digits.is_empty() {
        tracing::debug!("Card number has no digits");
        return IssuerKind::Invalid;
    }

    if !luhn_check(&digits) {
        tracing::debug!("Card number failed Luhn check ({} digits)", digits.len());
        return IssuerKind::Invalid;
    }

    classify_issuer(&digits)
}
