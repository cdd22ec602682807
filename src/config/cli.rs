use crate::domain::model::CheckKind;
use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check that an address is well formed and its domain has MX or A records
    Email { address: String },
    /// Check an M/D/Y or Y/M/D date
    Date { date: String },
    /// Luhn-check a card number and report its issuer
    Card { number: String },
}

impl Command {
    pub fn kind(&self) -> CheckKind {
        match self {
            Command::Email { .. } => CheckKind::Email,
            Command::Date { .. } => CheckKind::Date,
            Command::Card { .. } => CheckKind::Card,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Command::Email { address } => address,
            Command::Date { date } => date,
            Command::Card { number } => number,
        }
    }
}
