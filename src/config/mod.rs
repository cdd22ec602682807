#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "validkit")]
#[command(about = "Check email addresses, dates and credit card numbers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the outcome as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔，未指定時使用預設值
    pub fn load_validator_config(&self) -> crate::Result<toml_config::ValidatorConfig> {
        match &self.config {
            Some(path) => toml_config::ValidatorConfig::from_file(path),
            None => Ok(toml_config::ValidatorConfig::default()),
        }
    }
}
