//! numerus - convert and calculate with Roman numerals
//!
//! Usage:
//!   numerus to-roman <INTEGER>
//!   numerus to-integer <NUMERAL>
//!   numerus validate <NUMERAL>...
//!   numerus calc <LEFT> <OP> <RIGHT>
//!   numerus demo <INTEGER> <NUMERAL>
//!
//! Environment:
//!   `NUMERUS_FORMAT`  default output format (`text` or `json`)
//!   `NUMERUS_LOG`     tracing filter directives (default: `warn`)

mod commands;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "numerus")]
#[command(version, about = "Convert between Roman numerals and integers")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, env = "NUMERUS_FORMAT", default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a non-negative integer to a Roman numeral
    ToRoman(commands::ToRomanArgs),
    /// Convert a Roman numeral to an integer
    ToInteger(commands::ToIntegerArgs),
    /// Check one or more Roman numerals
    Validate(commands::ValidateArgs),
    /// Apply one arithmetic operation to two numerals
    Calc(commands::CalcArgs),
    /// Show every operation on an integer and a numeral
    Demo(commands::DemoArgs),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NUMERUS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let outcome = match cli.command {
        Commands::ToRoman(args) => commands::to_roman(&args, cli.format)?,
        Commands::ToInteger(args) => commands::to_integer(&args, cli.format)?,
        Commands::Validate(args) => commands::validate(&args, cli.format),
        Commands::Calc(args) => commands::calc(&args, cli.format)?,
        Commands::Demo(args) => commands::demo(&args, cli.format)?,
    };

    println!("{}", outcome.rendered);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
