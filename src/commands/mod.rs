//! CLI command implementations.
//!
//! Available commands:
//! - **dedupe**: Deduplicate a sequence given on the command line or stdin
//! - **demo**: Render the dedupe and counter demo page
//! - **init**: Write a default configuration file

pub mod dedupe;
pub mod demo;
pub mod init;

pub use dedupe::{handle_dedupe, DedupeConfig};
pub use demo::{handle_demo, run_demo, DemoConfig};
pub use init::init_config;

use crate::cli::OutputArgs;
use crate::config::UniqmapConfig;
use crate::formatting::FormattingConfig;
use crate::io::output::OutputFormat;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output settings after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
    pub output: Option<PathBuf>,
}

impl OutputSettings {
    pub fn resolve(args: OutputArgs, config: &UniqmapConfig) -> Self {
        let formatting = if args.plain || config.plain() {
            FormattingConfig::plain()
        } else if args.output.is_some() {
            FormattingConfig::from_env().for_file()
        } else {
            FormattingConfig::from_env()
        };

        Self {
            format: args.format.unwrap_or_else(|| config.default_format()),
            formatting,
            output: args.output,
        }
    }
}

pub(crate) fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::formatting::{ColorMode, EmojiMode};

    #[test]
    fn test_cli_format_overrides_config() {
        let config = UniqmapConfig {
            demo: None,
            output: Some(OutputConfig {
                default_format: Some(OutputFormat::Markdown),
                plain: None,
            }),
        };
        let args = OutputArgs {
            format: Some(OutputFormat::Json),
            ..OutputArgs::default()
        };

        assert_eq!(OutputSettings::resolve(args, &config).format, OutputFormat::Json);
        assert_eq!(
            OutputSettings::resolve(OutputArgs::default(), &config).format,
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_plain_from_config() {
        let config = UniqmapConfig {
            demo: None,
            output: Some(OutputConfig {
                default_format: None,
                plain: Some(true),
            }),
        };
        let settings = OutputSettings::resolve(OutputArgs::default(), &config);
        assert_eq!(settings.formatting, FormattingConfig::plain());
        assert_eq!(settings.format, OutputFormat::Terminal);
    }

    #[test]
    fn test_output_file_never_auto_detects_terminal() {
        let args = OutputArgs {
            output: Some(PathBuf::from("report.txt")),
            ..OutputArgs::default()
        };
        let settings = OutputSettings::resolve(args, &UniqmapConfig::default());
        assert_ne!(settings.formatting.color, ColorMode::Auto);
        assert_eq!(settings.formatting.emoji, EmojiMode::Never);
    }
}
