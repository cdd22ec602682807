use crate::adapters::calendar::CalendarDateParser;
use crate::adapters::dns::{HickoryDnsResolver, LazyDnsResolver};
use crate::config::toml_config::ValidatorConfig;
use crate::core::email::EmailPattern;
use crate::core::{card, date, email};
use crate::domain::model::{CheckKind, CheckOutcome, IssuerKind};
use crate::domain::ports::{DateParser, DnsResolver};
use crate::utils::error::Result;

/// Bundles the capabilities the checks depend on. Holds no mutable state.
pub struct Validator<R: DnsResolver, P: DateParser> {
    resolver: R,
    date_parser: P,
    email_pattern: EmailPattern,
}

/// Validator wired to real DNS and the built-in date parser.
pub type ConfiguredValidator = Validator<LazyDnsResolver<HickoryDnsResolver>, CalendarDateParser>;

impl ConfiguredValidator {
    /// The resolver is only built on the first email check, so card and date
    /// checks never depend on DNS setup.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        let resolver = LazyDnsResolver::from_config(config);
        let mut validator = Self::new(resolver, CalendarDateParser::new());

        if let Some(pattern) = config.email_pattern() {
            tracing::debug!("Using custom email pattern: {}", pattern);
            validator = validator.with_email_pattern(EmailPattern::new(pattern)?);
        }

        Ok(validator)
    }
}

impl<R: DnsResolver, P: DateParser> Validator<R, P> {
    pub fn new(resolver: R, date_parser: P) -> Self {
        Self {
            resolver,
            date_parser,
            email_pattern: EmailPattern::default(),
        }
    }

    pub fn with_email_pattern(mut self, pattern: EmailPattern) -> Self {
        self.email_pattern = pattern;
        self
    }

    /// See [`email::is_valid_email`]. Never treat `false` as proof the address
    /// is undeliverable.
    pub fn is_valid_email(&self, input: &str) -> bool {
        email::is_valid_email(input, &self.email_pattern, &self.resolver)
    }

    pub fn is_valid_date(&self, input: &str) -> bool {
        date::is_valid_date(input, &self.date_parser)
    }

    pub fn credit_card_type(&self, input: &str) -> IssuerKind {
        card::credit_card_type(input)
    }

    pub fn check(&self, kind: CheckKind, input: &str) -> CheckOutcome {
        let (valid, issuer) = match kind {
            CheckKind::Email => (self.is_valid_email(input), None),
            CheckKind::Date => (self.is_valid_date(input), None),
            CheckKind::Card => {
                let issuer = self.credit_card_type(input);
                (issuer.is_valid(), Some(issuer))
            }
        };

        tracing::debug!("{:?} check on {:?}: valid={}", kind, input, valid);

        CheckOutcome {
            kind,
            input: input.to_string(),
            valid,
            issuer,
        }
    }
}
