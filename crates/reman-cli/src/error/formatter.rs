//! Error formatting for CLI output.

use std::fmt::Write as FmtWrite;

use colored::{ColoredString, Colorize};

use crate::error::CliError;

/// Error output formatter
pub struct ErrorFormatter {
    color: bool,
    verbose: bool,
}

impl ErrorFormatter {
    pub fn new() -> Self {
        Self {
            color: false,
            verbose: false,
        }
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Format and print an error to stderr
    pub fn print(&self, error: &CliError) {
        let formatted = self.format(error);
        eprint!("{formatted}");
    }

    /// Format an error to a string
    pub fn format(&self, error: &CliError) -> String {
        let mut output = String::new();

        // A declined confirmation is not a failure worth decorating
        if error.is_aborted() {
            let _ = writeln!(output, "{}", self.paint("Aborted", |s| s.yellow()));
            return output;
        }

        let prefix = self.paint(&format!("error[{}]:", error.code()), |s| s.red().bold());
        let _ = writeln!(output, "{prefix} {error}");

        if self.verbose {
            self.format_source_chain(&mut output, error);
        }

        self.format_context(&mut output, error);

        if let Some(hint) = error.hint() {
            let label = self.paint("hint:", |s| s.cyan().bold());
            let _ = writeln!(output, "\n{label} {hint}");
        }

        let suggestions = error.suggestions();
        if !suggestions.is_empty() {
            let label = self.paint("suggestions:", |s| s.yellow().bold());
            let _ = writeln!(output, "\n{label}");
            for suggestion in suggestions {
                let _ = writeln!(output, "  - {suggestion}");
            }
        }

        output
    }

    /// Format as JSON
    pub fn format_json(&self, error: &CliError) -> String {
        let json = serde_json::json!({
            "success": false,
            "error": {
                "code": error.code(),
                "message": error.to_string(),
                "hint": error.hint(),
                "path": error.path().map(|p| p.display().to_string()),
                "suggestions": error.suggestions(),
            }
        });

        serde_json::to_string_pretty(&json).unwrap_or_else(|_| error.to_string())
    }

    fn format_source_chain(&self, output: &mut String, error: &CliError) {
        use std::error::Error;

        let Some(source) = error.source() else {
            return;
        };

        let label = self.paint("caused by:", |s| s.bright_black());
        let _ = writeln!(output, "\n{label}");
        let _ = writeln!(output, "  {source}");

        let mut current = source.source();
        let mut depth = 1;
        while let Some(src) = current {
            let _ = writeln!(output, "  {depth}: {src}");
            current = src.source();
            depth += 1;
        }
    }

    fn format_context(&self, output: &mut String, error: &CliError) {
        match error {
            CliError::Validation {
                field: Some(field), ..
            } => {
                let label = self.paint("field:", |s| s.bright_black());
                let _ = writeln!(output, "\n  {label} {field}");
            }
            CliError::NotFound { .. } => {}
            _ => {
                if let Some(path) = error.path() {
                    let label = self.paint("path:", |s| s.bright_black());
                    let _ = writeln!(output, "\n  {label} {}", path.display());
                }
            }
        }
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
