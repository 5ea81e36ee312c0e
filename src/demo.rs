//! Presentation model of the demo page.
//!
//! The page shows a fixed literal sequence next to its deduplicated form and
//! an independent counter. Rendering lives in [`crate::io::output`]; this
//! module only holds state and applies user input to it.

use crate::core::dedupe;
use crate::core::errors::Result;
use crate::core::sequence::format_sequence;
use crate::counter::{Counter, CounterAction};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Hello, uniqmap!";
pub const DEFAULT_VALUES: [i64; 9] = [1, 2, 2, 3, 3, 4, 5, 5, 6];

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    Counter(CounterAction),
    Quit,
}

impl DemoEvent {
    /// Parse a line of input. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Ok(Self::Quit)),
            _ => Some(CounterAction::parse(line).map(Self::Counter)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoPage {
    pub title: String,
    pub original: Vec<i64>,
    pub unique: Vec<i64>,
    pub counter: Counter,
}

impl Default for DemoPage {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_VALUES.to_vec())
    }
}

impl DemoPage {
    pub fn new(title: impl Into<String>, original: Vec<i64>) -> Self {
        let unique = dedupe(&original);
        log::info!("Deduplicated array: {}", format_sequence(&unique));
        log::info!("Original array: {}", format_sequence(&original));
        Self {
            title: title.into(),
            original,
            unique,
            counter: Counter::new(),
        }
    }

    /// Apply an event; returns `false` once the page should close.
    pub fn handle(&mut self, event: DemoEvent) -> bool {
        match event {
            DemoEvent::Counter(action) => {
                self.counter.apply(action);
                true
            }
            DemoEvent::Quit => false,
        }
    }
}
