use serde::{Deserialize, Serialize};

use crate::demo::{DEFAULT_TITLE, DEFAULT_VALUES};
use crate::io::output::OutputFormat;

/// Root configuration structure, read from `.uniqmap.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UniqmapConfig {
    /// Demo page configuration
    #[serde(default)]
    pub demo: Option<DemoConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
    /// Literal sequence shown on the page
    #[serde(default)]
    pub values: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Disable colors and emoji
    #[serde(default)]
    pub plain: Option<bool>,
}

impl UniqmapConfig {
    pub fn demo_title(&self) -> String {
        self.demo
            .as_ref()
            .and_then(|demo| demo.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn demo_values(&self) -> Vec<i64> {
        self.demo
            .as_ref()
            .and_then(|demo| demo.values.clone())
            .unwrap_or_else(|| DEFAULT_VALUES.to_vec())
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.default_format)
            .unwrap_or_default()
    }

    pub fn plain(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|output| output.plain)
            .unwrap_or(false)
    }
}

/// Contents written by `uniqmap init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# uniqmap configuration

[demo]
title = "Hello, uniqmap!"
values = [1, 2, 2, 3, 3, 4, 5, 5, 6]

[output]
default_format = "terminal"
plain = false
"#;
