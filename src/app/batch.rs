use crate::core::validator::Validator;
use crate::domain::model::{CheckKind, CheckOutcome};
use crate::domain::ports::{DateParser, DnsResolver};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRow {
    pub kind: CheckKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub outcomes: Vec<CheckOutcome>,
}

/// Run every `kind,value` row of a CSV document through `validator`.
///
/// A malformed row aborts the batch; an invalid value is just a `false` outcome.
pub fn run_batch<R, D, P>(validator: &Validator<D, P>, input: R) -> Result<BatchReport>
where
    R: Read,
    D: DnsResolver,
    P: DateParser,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let mut summary = BatchSummary::default();
    let mut outcomes = Vec::new();

    for row in reader.deserialize::<BatchRow>() {
        let row = row?;
        let outcome = validator.check(row.kind, &row.value);

        summary.total += 1;
        if outcome.valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        outcomes.push(outcome);
    }

    tracing::info!(
        "📊 Checked {} values: {} valid, {} invalid",
        summary.total,
        summary.valid,
        summary.invalid
    );

    Ok(BatchReport { summary, outcomes })
}

pub fn write_report<W: Write>(report: &BatchReport, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}
