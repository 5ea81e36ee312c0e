//! Click counter shown next to the dedupe demo.

use crate::core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user action against the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterAction {
    Increment,
    Reset,
}

impl CounterAction {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "increment" | "inc" | "+" => Ok(Self::Increment),
            "reset" | "r" | "0" => Ok(Self::Reset),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

impl FromStr for CounterAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn apply(&mut self, action: CounterAction) {
        match action {
            CounterAction::Increment => self.increment(),
            CounterAction::Reset => self.reset(),
        }
        log::debug!("Counter after {:?}: {}", action, self.count);
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}
