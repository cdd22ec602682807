use serde::{Deserialize, Serialize};
use std::fmt;

/// Issuing network of a card number, or `Invalid` when the Luhn check fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssuerKind {
    #[serde(rename = "amex")]
    AmericanExpress,
    #[serde(rename = "discover")]
    Discover,
    #[serde(rename = "mc")]
    MasterCard,
    #[serde(rename = "visa")]
    Visa,
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "invalid")]
    Invalid,
}

impl IssuerKind {
    /// `true` for every outcome except `Invalid`, including `Unknown`.
    pub fn is_valid(self) -> bool {
        self != IssuerKind::Invalid
    }

    pub fn code(self) -> &'static str {
        match self {
            IssuerKind::AmericanExpress => "amex",
            IssuerKind::Discover => "discover",
            IssuerKind::MasterCard => "mc",
            IssuerKind::Visa => "visa",
            IssuerKind::Unknown => "unknown",
            IssuerKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for IssuerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Email,
    Date,
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<IssuerKind>,
}

/// Fields recovered from a date string by a [`DateParser`](crate::domain::ports::DateParser).
///
/// Missing fields stay `None`; problems are collected in `errors` rather than
/// aborting the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub has_timezone: bool,
    pub errors: Vec<String>,
}

impl ParsedDate {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
