use super::{open_destination, OutputSettings};
use crate::core::{parse_sequence, DedupeReport};
use crate::io::{self, create_writer};
use anyhow::{Context, Result};

pub struct DedupeConfig {
    /// Raw values from the command line; empty means read stdin
    pub values: Vec<String>,
    pub output: OutputSettings,
}

pub fn handle_dedupe(config: DedupeConfig) -> Result<()> {
    let text = if config.values.is_empty() {
        log::debug!("No values given, reading sequence from stdin");
        io::read_stdin()?
    } else {
        config.values.join(" ")
    };

    let report = build_report(&text)?;
    log::info!(
        "Deduplicated {} values into {} ({} removed)",
        report.original.len(),
        report.unique.len(),
        report.removed
    );

    let destination = open_destination(config.output.output.as_deref())?;
    let mut writer = create_writer(config.output.format, config.output.formatting, destination);
    writer.write_report(&report)
}

pub fn build_report(text: &str) -> Result<DedupeReport> {
    let values = parse_sequence(text).context("Invalid input sequence")?;
    Ok(DedupeReport::new(values))
}
