//! Line-oriented prompter over any reader and writer.

use std::io::{BufRead, Write};

use colored::Colorize;

use super::{PromptError, PromptResult, Prompter};

/// Reads one answer per line from `reader`, writing questions to `writer`.
///
/// End of input counts as declining a confirmation, as the default for
/// text input, and as cancelling a selection. Answers that do not parse
/// are asked again.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    /// Color the question marks and hints.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    fn ask(&mut self, question: &str, hint: Option<&str>) -> PromptResult<()> {
        let mark = if self.styled {
            "?".green().bold().to_string()
        } else {
            "?".to_string()
        };
        let question = if self.styled {
            question.bold().to_string()
        } else {
            question.to_string()
        };

        match hint {
            Some(hint) if self.styled => {
                write!(self.writer, "{mark} {question} {} ", format!("({hint})").dimmed())?
            }
            Some(hint) => write!(self.writer, "{mark} {question} ({hint}) ")?,
            None => write!(self.writer, "{mark} {question} ")?,
        }
        self.writer.flush()?;
        Ok(())
    }

    fn read_answer(&mut self) -> PromptResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn complain(&mut self, message: &str) -> PromptResult<()> {
        if self.styled {
            writeln!(self.writer, "{}", message.red())?;
        } else {
            writeln!(self.writer, "{message}")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn confirm(&mut self, question: &str) -> PromptResult<bool> {
        loop {
            self.ask(question, Some("y/N"))?;
            let Some(answer) = self.read_answer()? else {
                return Ok(false);
            };

            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => self.complain("Please answer y or n")?,
            }
        }
    }

    fn input(&mut self, question: &str, default: Option<&str>) -> PromptResult<String> {
        let default = default.filter(|d| !d.is_empty());
        self.ask(question, default)?;

        let answer = self.read_answer()?.unwrap_or_default();
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn select(&mut self, question: &str, options: &[String]) -> PromptResult<String> {
        if options.is_empty() {
            return Err(PromptError::Cancelled);
        }

        writeln!(self.writer, "{question}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.writer, "  {}) {option}", i + 1)?;
        }

        let range = format!("1-{}", options.len());
        loop {
            self.ask("Choice", Some(&range))?;
            let Some(answer) = self.read_answer()? else {
                return Err(PromptError::Cancelled);
            };

            if let Ok(n) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    return Ok(options[n - 1].clone());
                }
            }
            if let Some(option) = options.iter().find(|o| **o == answer) {
                return Ok(option.clone());
            }
            self.complain(&format!("Please enter a number from {range}"))?;
        }
    }

    fn heading(&mut self, title: &str) -> PromptResult<()> {
        if self.styled {
            writeln!(self.writer, "\n{}", title.bold())?;
        } else {
            writeln!(self.writer, "\n{title}")?;
        }
        Ok(())
    }
}
