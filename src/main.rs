use clap::Parser;
use validkit::utils::error::{ErrorSeverity, ValidatorError};
use validkit::utils::{logger, validation::Validate};
use validkit::{CheckOutcome, CliConfig, Validator};

fn main() {
    let cli = CliConfig::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &CliConfig) -> i32 {
    let config = match cli.load_validator_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            return exit_code(&e);
        }
    };

    // 初始化日誌
    if config.log_format() == "json" {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        return report_failure("Configuration validation failed", &e);
    }

    let validator = match Validator::from_config(&config) {
        Ok(validator) => validator,
        Err(e) => return report_failure("Could not set up validator", &e),
    };

    let outcome = validator.check(cli.command.kind(), cli.command.value());

    if cli.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => return report_failure("Could not serialize outcome", &e.into()),
        }
    } else {
        println!("{}", describe(&outcome));
    }

    if outcome.valid {
        0
    } else {
        1
    }
}

fn describe(outcome: &CheckOutcome) -> String {
    let verdict = if outcome.valid { "✅ valid" } else { "❌ invalid" };
    match outcome.issuer {
        Some(issuer) if outcome.valid => format!("{} ({}): {}", verdict, issuer, outcome.input),
        _ => format!("{}: {}", verdict, outcome.input),
    }
}

fn report_failure(context: &str, e: &ValidatorError) -> i32 {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    exit_code(e)
}

// 0/1 保留給驗證結果
fn exit_code(e: &ValidatorError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 3,
        ErrorSeverity::Critical => 4,
    }
}
