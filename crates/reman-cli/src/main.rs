//! Main entry point for the `reman` binary.

use std::process::ExitCode;

use clap::Parser;
use reman_cli::cli::Cli;
use reman_cli::error::{handle_result, setup_panic_handler};
use reman_common_log::{LogConfig, LogLevel};

fn main() -> ExitCode {
    setup_panic_handler();

    let cli = Cli::parse();
    init_tracing(&cli);

    let color = cli.color_enabled();
    colored::control::set_override(color);

    let format = cli.format;
    let verbose = cli.verbose > 0;
    handle_result(cli.execute(), format, color, verbose)
}

fn init_tracing(cli: &Cli) {
    let mut config = LogConfig::from_env();
    if cli.verbose > 0 || cli.quiet {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = reman_common_log::init(config) {
        eprintln!("warning: logging disabled: {e}");
    }
}
