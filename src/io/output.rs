use crate::core::sequence::format_sequence;
use crate::core::DedupeReport;
use crate::demo::DemoPage;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DedupeReport) -> anyhow::Result<()>;
    fn write_page(&mut self, page: &DemoPage) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DedupeReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_page(&mut self, page: &DemoPage) -> anyhow::Result<()> {
        self.write_json(page)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &DedupeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Dedupe Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Sequence | Values | Length |")?;
        writeln!(self.writer, "|----------|--------|--------|")?;
        writeln!(
            self.writer,
            "| Original | `{}` | {} |",
            format_sequence(&report.original),
            report.original.len()
        )?;
        writeln!(
            self.writer,
            "| Deduplicated | `{}` | {} |",
            format_sequence(&report.unique),
            report.unique.len()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Repeated values removed: {}", report.removed)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_page(&mut self, page: &DemoPage) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", page.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Array dedupe demo")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- **Original:** `{}`",
            format_sequence(&page.original)
        )?;
        writeln!(
            self.writer,
            "- **Deduplicated:** `{}`",
            format_sequence(&page.unique)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Counter demo")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Current count: **{}**", page.counter)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(formatting),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &DedupeReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.writer,
            "{}     {}",
            f.label("Original:"),
            format_sequence(&report.original)
        )?;
        writeln!(
            self.writer,
            "{} {}",
            f.label("Deduplicated:"),
            f.value(&format_sequence(&report.unique))
        )?;

        let summary = match report.removed {
            0 => "no repeated values".to_string(),
            1 => "removed 1 repeated value".to_string(),
            n => format!("removed {n} repeated values"),
        };
        writeln!(self.writer, "{}", f.dim(&summary))?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_page(&mut self, page: &DemoPage) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header(&page.title))?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "{} {}",
            f.emoji("🧹", "[*]"),
            f.header("Array dedupe demo")
        )?;
        writeln!(
            self.writer,
            "  {}     {}",
            f.label("Original:"),
            format_sequence(&page.original)
        )?;
        writeln!(
            self.writer,
            "  {} {}",
            f.label("Deduplicated:"),
            f.value(&format_sequence(&page.unique))
        )?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "{} {}",
            f.emoji("🔢", "[#]"),
            f.header("Counter demo")
        )?;
        writeln!(
            self.writer,
            "  {} {}",
            f.label("Current count:"),
            f.value(&page.counter.to_string())
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    formatting: FormattingConfig,
    destination: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, formatting)),
    }
}
