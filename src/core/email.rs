use crate::domain::ports::DnsResolver;
use crate::utils::error::{Result, ValidatorError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Dot-atom local part, then one or more hostname labels ending in an
/// alphabetic TLD. The `domain` group is what gets looked up in DNS.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^(?P<local>[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*)@(?P<domain>(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63})$";

const DOMAIN_GROUP: &str = "domain";

static DEFAULT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).expect("built-in email pattern compiles"));

/// Email address matcher exposing the domain portion of a match.
#[derive(Debug, Clone)]
pub struct EmailPattern {
    regex: Regex,
}

impl EmailPattern {
    /// Compile a custom pattern. It must define a named `domain` group.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        if !regex.capture_names().flatten().any(|name| name == DOMAIN_GROUP) {
            return Err(ValidatorError::InvalidConfigValueError {
                field: "email.pattern".to_string(),
                value: pattern.to_string(),
                reason: "Pattern must define a named `domain` capture group".to_string(),
            });
        }
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Domain of `email` when the whole address matches, otherwise `None`.
    pub fn domain<'a>(&self, email: &'a str) -> Option<&'a str> {
        self.regex
            .captures(email)
            .and_then(|caps| caps.name(DOMAIN_GROUP))
            .map(|m| m.as_str())
            .filter(|domain| !domain.is_empty())
    }
}

impl Default for EmailPattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
        }
    }
}

/// Plausibility check for an email address: format match plus a domain that
/// has an MX record, or failing that an A record.
///
/// This is a heuristic. A `false` result means "might be invalid"; callers
/// should word errors that way and let the user keep the address.
pub fn is_valid_email<R: DnsResolver>(input: &str, pattern: &EmailPattern, resolver: &R) -> bool {
    let email = input.trim();
    if email.is_empty() {
        return false;
    }

    let Some(domain) = pattern.domain(email) else {
        tracing::debug!("Email format rejected: {}", email);
        return false;
    };

    // 加上結尾的點，避免與本地網域同名主機混淆
    let fqdn = format!("{}.", domain.trim_end_matches('.'));

    match resolver.has_mx_record(&fqdn) {
        Ok(true) => return true,
        Ok(false) => tracing::debug!("No MX record for {}, trying A", fqdn),
        Err(e) => tracing::debug!("MX lookup failed for {}: {}", fqdn, e),
    }

    match resolver.has_a_record(&fqdn) {
        Ok(found) => {
            if !found {
                tracing::debug!("No A record for {}", fqdn);
            }
            found
        }
        Err(e) => {
            tracing::debug!("A lookup failed for {}: {}", fqdn, e);
            false
        }
    }
}
