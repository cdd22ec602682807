use crate::utils::error::{Result, ValidatorError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_range, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const NAMESERVER_CHOICES: &[&str] = &["system", "google", "cloudflare", "quad9"];
pub const LOG_FORMATS: &[&str] = &["compact", "json"];

const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
const DEFAULT_ATTEMPTS: usize = 2;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub dns: Option<DnsConfig>,
    pub email: Option<EmailConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsConfig {
    pub nameservers: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub attempts: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailConfig {
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

impl ValidatorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ValidatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ValidatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DNS_TIMEOUT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_one_of("dns.nameservers", self.nameservers(), NAMESERVER_CHOICES)?;
        validate_range("dns.timeout_seconds", self.dns_timeout().as_secs(), 1, 60)?;
        validate_range("dns.attempts", self.dns_attempts(), 1, 10)?;
        validate_one_of("logging.format", self.log_format(), LOG_FORMATS)?;

        if let Some(pattern) = self.email_pattern() {
            validate_non_empty_string("email.pattern", pattern)?;
        }

        Ok(())
    }

    pub fn nameservers(&self) -> &str {
        self.dns
            .as_ref()
            .and_then(|d| d.nameservers.as_deref())
            .unwrap_or("system")
    }

    pub fn dns_timeout(&self) -> Duration {
        let secs = self
            .dns
            .as_ref()
            .and_then(|d| d.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        Duration::from_secs(secs)
    }

    pub fn dns_attempts(&self) -> usize {
        self.dns
            .as_ref()
            .and_then(|d| d.attempts)
            .unwrap_or(DEFAULT_ATTEMPTS)
    }

    pub fn email_pattern(&self) -> Option<&str> {
        self.email.as_ref().and_then(|e| e.pattern.as_deref())
    }

    pub fn log_format(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .unwrap_or("compact")
    }
}

impl Validate for ValidatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ValidatorConfig::from_toml_str("").unwrap();
        assert_eq!(config.nameservers(), "system");
        assert_eq!(config.dns_timeout(), Duration::from_secs(5));
        assert_eq!(config.dns_attempts(), 2);
        assert_eq!(config.log_format(), "compact");
        assert!(config.email_pattern().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[dns]
nameservers = "cloudflare"
timeout_seconds = 3
attempts = 1

[email]
pattern = '^[^@\s]+@(?P<domain>[^@\s]+)$'

[logging]
format = "json"
"#;

        let config = ValidatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.nameservers(), "cloudflare");
        assert_eq!(config.dns_timeout(), Duration::from_secs(3));
        assert_eq!(config.dns_attempts(), 1);
        assert_eq!(config.email_pattern(), Some(r"^[^@\s]+@(?P<domain>[^@\s]+)$"));
        assert_eq!(config.log_format(), "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VALIDKIT_TEST_NAMESERVERS", "quad9");

        let toml_content = r#"
[dns]
nameservers = "${VALIDKIT_TEST_NAMESERVERS}"
"#;

        let config = ValidatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.nameservers(), "quad9");

        std::env::remove_var("VALIDKIT_TEST_NAMESERVERS");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[dns]
nameservers = "${VALIDKIT_TEST_UNSET_VARIABLE}"
"#;
        let config = ValidatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.nameservers(), "${VALIDKIT_TEST_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_timeout = ValidatorConfig::from_toml_str("[dns]\ntimeout_seconds = 0\n").unwrap();
        assert!(bad_timeout.validate().is_err());

        let bad_attempts = ValidatorConfig::from_toml_str("[dns]\nattempts = 11\n").unwrap();
        assert!(bad_attempts.validate().is_err());

        let bad_format = ValidatorConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let blank_pattern = ValidatorConfig::from_toml_str("[email]\npattern = \" \"\n").unwrap();
        assert!(blank_pattern.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = ValidatorConfig::from_toml_str("[dns\n").unwrap_err();
        assert!(matches!(err, ValidatorError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[dns]\nnameservers = \"google\"\n")
            .unwrap();

        let config = ValidatorConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.nameservers(), "google");
    }
}
