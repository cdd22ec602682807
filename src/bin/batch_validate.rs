use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use validkit::app::batch::{run_batch, write_report};
use validkit::utils::{logger, validation::Validate};
use validkit::{Validator, ValidatorConfig};

#[derive(Parser)]
#[command(name = "batch-validate")]
#[command(about = "Validate every row of a `kind,value` CSV file")]
struct Args {
    /// CSV file with a `kind,value` header (kind: email, date or card)
    #[arg(short, long)]
    input: String,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ValidatorConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => ValidatorConfig::default(),
    };

    if config.log_format() == "json" {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    config.validate().context("Configuration validation failed")?;

    tracing::info!("🚀 Starting batch validation");
    tracing::info!("📁 Reading rows from: {}", args.input);

    let validator = Validator::from_config(&config)?;
    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open input file '{}'", args.input))?;
    let report = run_batch(&validator, BufReader::new(input))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path))?;
            write_report(&report, BufWriter::new(file))?;
            tracing::info!("📁 Report saved to: {}", path);
        }
        None => {
            write_report(&report, std::io::stdout().lock())?;
            println!();
        }
    }

    Ok(())
}
