//! Custom panic hook for structured crash reports.
//!
//! Replaces the default one-line panic message with a boxed report naming
//! the version, platform, time and panic location, so bug reports carry
//! enough detail to reproduce.

use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BOX_WIDTH: usize = 78;

/// Install the custom panic hook.
///
/// ```ignore
/// use uniqmap::observability::install_panic_hook;
///
/// fn main() {
///     install_panic_hook();
///     // ... rest of application
/// }
/// ```
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!();
        eprintln!("{}", crash_report(info));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>) -> String {
    let mut lines = vec![
        border('╔', '╗'),
        row(&centered("UNIQMAP CRASH REPORT")),
        border('╠', '╣'),
        row(&format!("Version: {}", VERSION)),
        row(&format!("Platform: {}", std::env::consts::OS)),
        row(&format!(
            "Time: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )),
        border('╠', '╣'),
        row(&format!("PANIC: {}", extract_panic_message(info))),
    ];

    if let Some(location) = info.location() {
        lines.push(row(&format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        )));
    }

    lines.push(border('╠', '╣'));
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(row("STACK TRACE:"));
        lines.push(border('╚', '╝'));
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push(row("Run with RUST_BACKTRACE=1 for stack trace"));
        lines.push(border('╚', '╝'));
    }

    lines.join("\n")
}

fn border(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(BOX_WIDTH), right)
}

fn row(text: &str) -> String {
    let inner = BOX_WIDTH - 4;
    format!("║  {:<width$}  ║", truncate(text, inner), width = inner)
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = BOX_WIDTH - 4)
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

// Counts chars, not bytes, so multi-byte messages never split mid-character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
