use super::{open_destination, OutputSettings};
use crate::config::UniqmapConfig;
use crate::core::parse_sequence;
use crate::demo::{DemoEvent, DemoPage};
use crate::io::output::{create_writer, OutputWriter};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub struct DemoConfig {
    pub values: Option<String>,
    pub title: Option<String>,
    pub interactive: bool,
    pub output: OutputSettings,
}

pub fn handle_demo(config: DemoConfig, file_config: &UniqmapConfig) -> Result<()> {
    let page = build_page(&config, file_config)?;
    let destination = open_destination(config.output.output.as_deref())?;
    let mut writer = create_writer(config.output.format, config.output.formatting, destination);

    if config.interactive {
        eprintln!("Type increment (+), reset (r) or quit (q), one per line.");
        let stdin = std::io::stdin();
        run_demo(page, stdin.lock(), writer.as_mut(), &mut std::io::stderr())?;
    } else {
        writer.write_page(&page)?;
    }
    Ok(())
}

/// CLI flags win over the config file, which wins over the built-in literal.
pub fn build_page(config: &DemoConfig, file_config: &UniqmapConfig) -> Result<DemoPage> {
    let values = match &config.values {
        Some(text) => parse_sequence(text).context("Invalid --values")?,
        None => file_config.demo_values(),
    };
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| file_config.demo_title());

    Ok(DemoPage::new(title, values))
}

/// Render the page, then apply one event per input line and re-render after
/// each counter change. Ends on `quit` or end of input and returns the final
/// page. Unknown actions are reported on `warnings` and skipped.
pub fn run_demo<R: BufRead>(
    mut page: DemoPage,
    input: R,
    writer: &mut dyn OutputWriter,
    warnings: &mut dyn Write,
) -> Result<DemoPage> {
    writer.write_page(&page)?;

    for line in input.lines() {
        let line = line.context("Failed to read action")?;
        let event = match DemoEvent::parse(&line) {
            None => continue,
            Some(Ok(event)) => event,
            Some(Err(e)) => {
                log::debug!("Skipping input line: {}", e);
                writeln!(warnings, "Warning: {}", e)?;
                continue;
            }
        };

        if !page.handle(event) {
            break;
        }
        writer.write_page(&page)?;
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::Counter;
    use crate::formatting::FormattingConfig;
    use crate::io::output::OutputFormat;
    use std::io::Cursor;

    /// Records every rendered counter value
    #[derive(Default)]
    struct RecordingWriter {
        counts: Vec<u64>,
    }

    impl OutputWriter for RecordingWriter {
        fn write_report(&mut self, _report: &crate::core::DedupeReport) -> Result<()> {
            Ok(())
        }

        fn write_page(&mut self, page: &DemoPage) -> Result<()> {
            self.counts.push(page.counter.count());
            Ok(())
        }
    }

    fn settings() -> OutputSettings {
        OutputSettings {
            format: OutputFormat::Terminal,
            formatting: FormattingConfig::plain(),
            output: None,
        }
    }

    #[test]
    fn test_run_demo_applies_actions_in_order() {
        let input = Cursor::new("+\nincrement\n\ninc\nreset\n+\n");
        let mut writer = RecordingWriter::default();
        let mut warnings = Vec::new();

        let page = run_demo(DemoPage::default(), input, &mut writer, &mut warnings).unwrap();

        assert_eq!(writer.counts, vec![0, 1, 2, 3, 0, 1]);
        assert_eq!(page.counter.count(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_run_demo_stops_on_quit() {
        let input = Cursor::new("+\nq\n+\n+\n");
        let mut writer = RecordingWriter::default();
        let mut warnings = Vec::new();

        let page = run_demo(DemoPage::default(), input, &mut writer, &mut warnings).unwrap();

        assert_eq!(writer.counts, vec![0, 1]);
        assert_eq!(page.counter, {
            let mut c = Counter::new();
            c.increment();
            c
        });
    }

    #[test]
    fn test_run_demo_warns_on_unknown_action() {
        let input = Cursor::new("jump\n+\n");
        let mut writer = RecordingWriter::default();
        let mut warnings = Vec::new();

        let page = run_demo(DemoPage::default(), input, &mut writer, &mut warnings).unwrap();

        assert_eq!(page.counter.count(), 1);
        let warnings = String::from_utf8(warnings).unwrap();
        assert!(warnings.starts_with("Warning: Unknown action \"jump\""));
    }

    #[test]
    fn test_build_page_prefers_flags_over_config() {
        let file_config = crate::config::parse_and_validate_config(
            "[demo]\ntitle = \"From file\"\nvalues = [8, 8]\n",
        )
        .unwrap();

        let from_file = DemoConfig {
            values: None,
            title: None,
            interactive: false,
            output: settings(),
        };
        let page = build_page(&from_file, &file_config).unwrap();
        assert_eq!(page.title, "From file");
        assert_eq!(page.unique, vec![8]);

        let from_flags = DemoConfig {
            values: Some("2 1 2".to_string()),
            title: Some("Flags".to_string()),
            interactive: false,
            output: settings(),
        };
        let page = build_page(&from_flags, &file_config).unwrap();
        assert_eq!(page.title, "Flags");
        assert_eq!(page.unique, vec![2, 1]);
    }

    #[test]
    fn test_build_page_rejects_bad_values() {
        let config = DemoConfig {
            values: Some("[1, 2".to_string()),
            title: None,
            interactive: false,
            output: settings(),
        };
        assert!(build_page(&config, &UniqmapConfig::default()).is_err());
    }
}
