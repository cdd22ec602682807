pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::calendar::CalendarDateParser;
pub use adapters::dns::{HickoryDnsResolver, LazyDnsResolver};
pub use config::toml_config::ValidatorConfig;
pub use crate::core::card::{classify_issuer, credit_card_type, luhn_check};
pub use crate::core::validator::{ConfiguredValidator, Validator};
pub use domain::model::{CheckKind, CheckOutcome, IssuerKind};
pub use domain::ports::{DateParser, DnsResolver};
pub use utils::error::{Result, ValidatorError};
