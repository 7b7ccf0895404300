//! Rendering of diagnostics for terminals and machine consumers.

use crate::diagnostics::Diagnostic;
use colored::Colorize;
use std::io::Write;

/// Print diagnostics in compiler style, one location line per warning
/// followed by its fix-its.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_diagnostics(
    writer: &mut impl Write,
    diagnostics: &[Diagnostic],
) -> std::io::Result<()> {
    for diagnostic in diagnostics {
        let location = format!(
            "{}:{}:{}",
            diagnostic.file.display(),
            diagnostic.line,
            diagnostic.col
        );
        writeln!(
            writer,
            "{}: {} {} {}",
            location.bold(),
            "warning:".yellow().bold(),
            diagnostic.message,
            format!("[{}]", diagnostic.check).dimmed()
        )?;
        for fixit in &diagnostic.fixits {
            let action = if fixit.is_insertion() {
                format!("insert at {}", fixit.span.start)
            } else {
                format!("replace {}..{}", fixit.span.start, fixit.span.end)
            };
            writeln!(writer, "  {} {} with {:?}", "fix-it:".green(), action, fixit.text)?;
        }
    }
    Ok(())
}

/// Print a one-line summary after the diagnostics.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(writer: &mut impl Write, diagnostics: &[Diagnostic]) -> std::io::Result<()> {
    if diagnostics.is_empty() {
        writeln!(writer, "{}", "No deprecated QVariant usage found.".green())?;
    } else {
        writeln!(
            writer,
            "{} {}",
            diagnostics.len().to_string().red().bold(),
            if diagnostics.len() == 1 {
                "warning emitted"
            } else {
                "warnings emitted"
            }
        )?;
    }
    Ok(())
}

/// Serialize diagnostics, fix-its included, to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_json(diagnostics: &[Diagnostic]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diagnostics)
}
