// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod counter;
pub mod demo;
pub mod formatting;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    dedupe, dedupe_by, dedupe_by_key, dedupe_in_place, format_sequence, has_duplicates,
    parse_sequence, DedupeReport, Error, Result, Unique, UniqueIter,
};

pub use crate::counter::{Counter, CounterAction};
pub use crate::demo::{DemoEvent, DemoPage};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
