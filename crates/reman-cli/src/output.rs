//! Output formatting utilities for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Trait for types that can be formatted for output
pub trait FormattedOutput: Serialize {
    fn format_text(&self) -> String;

    fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn render<T: FormattedOutput>(format: OutputFormat, value: &T) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Text => value.format_text(),
        OutputFormat::Json => value.format_json()?,
    })
}

/// Print formatted output to stdout
pub fn print_output<T: FormattedOutput>(ctx: &CommandContext, value: &T) -> Result<(), CliError> {
    write_output(ctx.format, value, std::io::stdout().lock())
}

/// Print formatted output to a writer
pub fn write_output<T, W>(format: OutputFormat, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput,
    W: Write,
{
    let output = render(format, value)?;
    if output.is_empty() {
        return Ok(());
    }

    writeln!(writer, "{output}").map_err(|e| CliError::Io {
        message: format!("failed to write output: {e}"),
        source: Some(Box::new(e)),
        path: None,
    })
}
