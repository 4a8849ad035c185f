use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `kil` binary.
#[derive(Debug, Parser)]
#[command(name = "kil", version, about = "Kilmere - spell eligibility and exam records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, table, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Roster TOML file (defaults to the bundled roster)
    #[arg(short, long, global = true)]
    pub roster: Option<String>,

    /// Calendar year used for school-year arithmetic
    #[arg(short, long, global = true, value_parser = clap::value_parser!(i32).range(1..))]
    pub year: Option<i32>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            roster: self.roster.clone(),
            year: self.year,
        }
    }
}
