//! CLI argument definitions using clap derive macros.

use std::io::{self, IsTerminal};

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use crate::commands::{ConfigCommand, InitCommand, NewCommand};
use crate::error::CliError;
use crate::prompts::{is_interactive, LinePrompter};

/// Resume Manager CLI
///
/// Resume Manager is a CLI tool for your ever-changing resume needs.
#[derive(Debug, Parser)]
#[command(
    name = "reman",
    author,
    version,
    about,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// When to use colors
    #[arg(
        long,
        global = true,
        env = "REMAN_COLOR",
        default_value = "auto",
        value_enum,
        help = "When to use terminal colors"
    )]
    pub color: ColorChoice,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a resume store
    Init(InitCommand),

    /// Create a new resume
    New(NewCommand),

    /// Configure the CLI
    Config(ConfigCommand),
}

impl Cli {
    /// Whether stderr output should be colored.
    pub fn color_enabled(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()
            }
        }
    }

    pub fn context(&self) -> CommandContext {
        CommandContext {
            format: self.format,
            color: self.color_enabled(),
            verbose: self.verbose,
        }
    }

    /// Execute the selected command against the terminal.
    pub fn execute(self) -> Result<(), CliError> {
        let ctx = self.context();
        let mut prompter = LinePrompter::new(io::stdin().lock(), io::stderr())
            .styled(ctx.color && is_interactive());

        match &self.command {
            Command::Init(cmd) => cmd.execute(&ctx, &mut prompter),
            Command::New(cmd) => cmd.execute(&ctx, &mut prompter),
            Command::Config(cmd) => cmd.execute(&ctx, &mut prompter),
        }
    }
}

/// Context passed to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub color: bool,
    pub verbose: u8,
}
