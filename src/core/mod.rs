pub mod card;
pub mod date;
pub mod email;
pub mod validator;

pub use crate::domain::model::{CheckKind, CheckOutcome, IssuerKind, ParsedDate};
pub use crate::domain::ports::{DateParser, DnsResolver};
pub use crate::utils::error::Result;
