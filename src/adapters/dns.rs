use crate::config::toml_config::ValidatorConfig;
use crate::domain::ports::DnsResolver;
use crate::utils::error::{Result, ValidatorError};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::Resolver;
use once_cell::sync::OnceCell;
use std::time::Duration;

/// Blocking DNS resolver backed by `hickory-resolver`.
///
/// Must not be called from inside an async runtime.
pub struct HickoryDnsResolver {
    resolver: Resolver,
}

impl HickoryDnsResolver {
    pub fn new(nameservers: &str, timeout: Duration, attempts: usize) -> Result<Self> {
        let (config, mut opts) = Self::resolver_config(nameservers)?;
        opts.timeout = timeout;
        opts.attempts = attempts;
        // 不快取，每次查詢都走網路
        opts.cache_size = 0;

        tracing::debug!(
            "Building DNS resolver (nameservers: {}, timeout: {:?}, attempts: {})",
            nameservers,
            timeout,
            attempts
        );

        let resolver = Resolver::new(config, opts)?;
        Ok(Self { resolver })
    }

    fn resolver_config(nameservers: &str) -> Result<(ResolverConfig, ResolverOpts)> {
        match nameservers {
            "system" => hickory_resolver::system_conf::read_system_conf().map_err(|e| {
                ValidatorError::ConfigError {
                    message: format!("Could not read system resolver configuration: {}", e),
                }
            }),
            "google" => Ok((ResolverConfig::google(), ResolverOpts::default())),
            "cloudflare" => Ok((ResolverConfig::cloudflare(), ResolverOpts::default())),
            "quad9" => Ok((ResolverConfig::quad9(), ResolverOpts::default())),
            other => Err(ValidatorError::InvalidConfigValueError {
                field: "dns.nameservers".to_string(),
                value: other.to_string(),
                reason: "Unknown nameserver set".to_string(),
            }),
        }
    }
}

type ResolverFactory<R> = Box<dyn Fn() -> Result<R> + Send + Sync>;

/// Builds the wrapped resolver on the first lookup and reuses it afterwards.
///
/// A failed build is remembered and every lookup then reports `DnsError`.
pub struct LazyDnsResolver<R> {
    factory: ResolverFactory<R>,
    resolver: OnceCell<std::result::Result<R, String>>,
}

impl<R: DnsResolver> LazyDnsResolver<R> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<R> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            resolver: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.resolver.get().is_some()
    }

    fn resolver(&self, fqdn: &str) -> Result<&R> {
        let built = self.resolver.get_or_init(|| {
            (self.factory)().map_err(|e| {
                tracing::warn!("⚠️ DNS resolver unavailable: {}", e);
                e.to_string()
            })
        });

        built.as_ref().map_err(|message| ValidatorError::DnsError {
            domain: fqdn.to_string(),
            message: message.clone(),
        })
    }
}

impl LazyDnsResolver<HickoryDnsResolver> {
    pub fn from_config(config: &ValidatorConfig) -> Self {
        let nameservers = config.nameservers().to_string();
        let timeout = config.dns_timeout();
        let attempts = config.dns_attempts();
        Self::new(move || HickoryDnsResolver::new(&nameservers, timeout, attempts))
    }
}

impl<R: DnsResolver> DnsResolver for LazyDnsResolver<R> {
    fn has_mx_record(&self, fqdn: &str) -> Result<bool> {
        self.resolver(fqdn)?.has_mx_record(fqdn)
    }

    fn has_a_record(&self, fqdn: &str) -> Result<bool> {
        self.resolver(fqdn)?.has_a_record(fqdn)
    }
}

/// An empty answer is "no record"; anything else is a lookup failure.
fn record_presence(fqdn: &str, outcome: std::result::Result<bool, ResolveError>) -> Result<bool> {
    match outcome {
        Ok(found) => Ok(found),
        Err(e) if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(false),
        Err(e) => Err(ValidatorError::DnsError {
            domain: fqdn.to_string(),
            message: e.to_string(),
        }),
    }
}

impl DnsResolver for HickoryDnsResolver {
    fn has_mx_record(&self, fqdn: &str) -> Result<bool> {
        let outcome = self
            .resolver
            .mx_lookup(fqdn)
            .map(|lookup| lookup.iter().next().is_some());
        record_presence(fqdn, outcome)
    }

    fn has_a_record(&self, fqdn: &str) -> Result<bool> {
        let outcome = self
            .resolver
            .ipv4_lookup(fqdn)
            .map(|lookup| lookup.iter().next().is_some());
        record_presence(fqdn, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StaticDns(bool);

    impl DnsResolver for StaticDns {
        fn has_mx_record(&self, _fqdn: &str) -> Result<bool> {
            Ok(self.0)
        }

        fn has_a_record(&self, _fqdn: &str) -> Result<bool> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_unknown_nameserver_set_is_rejected() {
        let err = HickoryDnsResolver::new("opendns", Duration::from_secs(1), 1)
            .err()
            .unwrap();
        assert!(matches!(err, ValidatorError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_system_nameservers_yield_resolver_or_config_error() {
        match HickoryDnsResolver::new("system", Duration::from_secs(1), 1) {
            Ok(_) => {}
            Err(ValidatorError::ConfigError { message }) => {
                assert!(message.contains("system resolver configuration"))
            }
            Err(ValidatorError::IoError(_)) => {}
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_lazy_resolver_builds_once_on_first_lookup() {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = builds.clone();
        let lazy = LazyDnsResolver::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(StaticDns(true))
        });

        assert!(!lazy.is_initialized());
        assert!(lazy.has_mx_record("gustavus.edu.").unwrap());
        assert!(lazy.has_a_record("gustavus.edu.").unwrap());
        assert!(lazy.is_initialized());
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_resolver_build_failure_is_a_dns_error() {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = builds.clone();
        let lazy: LazyDnsResolver<StaticDns> = LazyDnsResolver::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(ValidatorError::ConfigError {
                message: "no resolv.conf".to_string(),
            })
        });

        for _ in 0..2 {
            match lazy.has_mx_record("gustavus.edu.") {
                Err(ValidatorError::DnsError { domain, message }) => {
                    assert_eq!(domain, "gustavus.edu.");
                    assert!(message.contains("no resolv.conf"));
                }
                other => panic!("unexpected: {:?}", other),
            }
        }
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_builds_with_public_nameservers() {
        assert!(HickoryDnsResolver::new("google", Duration::from_secs(1), 1).is_ok());
    }

    #[test]
    #[ignore = "requires network access"]
    fn test_real_lookups() {
        let resolver = HickoryDnsResolver::new("google", Duration::from_secs(5), 2).unwrap();
        assert!(resolver.has_mx_record("gustavus.edu.").unwrap());
        assert!(!resolver
            .has_mx_record("totallyabogusdomainnamethisdoesnotexist.com.")
            .unwrap_or(false));
    }
}
