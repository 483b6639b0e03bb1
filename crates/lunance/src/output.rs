//! Output formatting: table or JSON.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats serialize the entity itself via serde.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Resolved rendering options for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Render {
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Format an amount with `.` thousands separators, e.g. `1.250.000`.
///
/// Fractions are kept to two places only when present.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let fraction = cents - whole * 100.0;

    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents > 0.0 { "-" } else { "" };
    if fraction > 0.0 {
        format!("{sign}{grouped},{fraction:02.0}")
    } else {
        format!("{sign}{grouped}")
    }
}

/// Amount colored green for income and red for expense.
pub fn signed_amount(amount: f64, color: bool) -> String {
    let text = format_amount(amount);
    if !color {
        return text;
    }
    if amount < 0.0 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

/// A `label: value` block for single-item table views.
pub fn detail(pairs: &[(&str, String)], color: bool) -> String {
    let width = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(k, v)| {
            let label = format!("{k:<width$}");
            if color {
                format!("{}  {v}", label.bold())
            } else {
                format!("{label}  {v}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list in the chosen format.
pub fn render_list<T, R>(
    render: &Render,
    data: &[T],
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match render.format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(data)?),
    }
}

/// Render a single item; table mode uses `detail_fn`.
pub fn render_single<T>(
    render: &Render,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match render.format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(data)?),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Short confirmation on stderr, e.g. "Category deleted".
pub fn notice(render: &Render, message: &str) {
    if render.quiet {
        return;
    }
    if render.color {
        eprintln!("{} {message}", "✓".green());
    } else {
        eprintln!("{message}");
    }
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_dot_grouping() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(950.0), "950");
        assert_eq!(format_amount(1_000.0), "1.000");
        assert_eq!(format_amount(1_250_000.0), "1.250.000");
        assert_eq!(format_amount(-37_500.5), "-37.500,50");
    }

    #[test]
    fn uncolored_amount_is_plain() {
        assert_eq!(signed_amount(-15_000.0, false), "-15.000");
    }

    #[test]
    fn detail_aligns_labels() {
        let text = detail(&[("ID", "c1".into()), ("Name", "Gaji".into())], false);
        assert_eq!(text, "ID    c1\nName  Gaji");
    }
}
