use anyhow::Result;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use validkit::app::batch::{run_batch, write_report};
use validkit::utils::validation::Validate;
use validkit::{
    CalendarDateParser, DnsResolver, IssuerKind, LazyDnsResolver, Validator, ValidatorConfig,
    ValidatorError,
};

struct OfflineDns;

impl DnsResolver for OfflineDns {
    fn has_mx_record(&self, fqdn: &str) -> validkit::Result<bool> {
        Ok(fqdn == "gustavus.edu.")
    }

    fn has_a_record(&self, _fqdn: &str) -> validkit::Result<bool> {
        Ok(false)
    }
}

#[test]
fn test_batch_from_file_to_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("rows.csv");
    let output_path = temp_dir.path().join("report.json");

    std::fs::write(
        &input_path,
        "kind,value\n\
         email,\" jlencion@gustavus.edu \"\n\
         email,user@nowhere.example\n\
         date,1-9-83\n\
         card,3782 822463 10005\n\
         card,1234567812345678\n",
    )?;

    let validator = Validator::new(OfflineDns, CalendarDateParser::new());
    let report = run_batch(&validator, std::fs::File::open(&input_path)?)?;
    write_report(&report, std::fs::File::create(&output_path)?)?;

    assert_eq!(report.summary.total, 5);
    assert_eq!(report.summary.valid, 3);
    assert_eq!(report.summary.invalid, 2);
    assert_eq!(report.outcomes[3].issuer, Some(IssuerKind::AmericanExpress));

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output_path)?)?;
    assert_eq!(json["outcomes"][4]["issuer"], "invalid");
    assert_eq!(json["outcomes"][0]["input"], " jlencion@gustavus.edu ");
    Ok(())
}

#[test]
fn test_config_file_drives_validator_setup() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"
[dns]
nameservers = "google"
timeout_seconds = 2
attempts = 1

[email]
pattern = '^[^@\s]+@(?P<domain>[^@\s]+\.[a-z]+)$'
"#
    )?;

    let config = ValidatorConfig::from_file(config_file.path())?;
    config.validate()?;

    let validator = Validator::from_config(&config)?;
    assert_eq!(validator.credit_card_type("4012888888881881"), IssuerKind::Visa);
    assert!(validator.is_valid_date("1983/1/9"));
    Ok(())
}

#[test]
fn test_batch_without_resolver_still_checks_cards_and_dates() -> Result<()> {
    let resolver: LazyDnsResolver<OfflineDns> = LazyDnsResolver::new(|| {
        Err(ValidatorError::ConfigError {
            message: "resolv.conf missing".to_string(),
        })
    });
    let validator = Validator::new(resolver, CalendarDateParser::new());

    let csv = "kind,value\ncard,4111111111111111\ndate,1983/01/09\nemail,jlencion@gustavus.edu\n";
    let report = run_batch(&validator, csv.as_bytes())?;

    assert_eq!(report.summary.valid, 2);
    assert_eq!(report.outcomes[0].issuer, Some(IssuerKind::Visa));
    assert!(report.outcomes[1].valid);
    assert!(!report.outcomes[2].valid);
    Ok(())
}
