//! CLI commands.

mod alphabet;
mod decode;
mod encode;
mod next;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::logging;
use crate::output::OutputFormat;

/// serialctl - Validate, inspect, and issue serial numbers.
#[derive(Debug, Parser)]
#[command(name = "sn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (overrides config and SN_FORMAT).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the serial number alphabet in increment order.
    Alphabet,

    /// Check candidate serial numbers.
    Validate(validate::ValidateCommand),

    /// Convert serial numbers to ordinals.
    Decode(decode::DecodeCommand),

    /// Convert an ordinal to its serial number.
    Encode(encode::EncodeCommand),

    /// Compute the serial numbers after the last one issued.
    Next(next::NextCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;

        logging::init(self.resolve_log_level(&config));

        let ctx = self.context(&config);
        tracing::debug!(format = ?ctx.format, "configuration loaded");

        match self.command {
            Commands::Alphabet => alphabet::run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Next(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("sn {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }

    /// Resolve the log filter, preferring flag over config.
    fn resolve_log_level<'a>(&'a self, config: &'a Config) -> &'a str {
        self.log_level.as_deref().unwrap_or(&config.log_level)
    }

    /// Build the command context, preferring flags over config.
    fn context(&self, config: &Config) -> CommandContext {
        CommandContext {
            format: self.format.unwrap_or(config.format),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["sn", "next", "AB9", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Next(_)));
    }

    fn config(format: OutputFormat, log_level: &str) -> Config {
        Config {
            format,
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn format_flag_overrides_config() {
        let cli = Cli::try_parse_from(["sn", "alphabet", "--format", "json"]).unwrap();
        let ctx = cli.context(&config(OutputFormat::Table, "warn"));
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[test]
    fn config_format_applies_without_flag() {
        let cli = Cli::try_parse_from(["sn", "alphabet"]).unwrap();
        let ctx = cli.context(&config(OutputFormat::Json, "warn"));
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[test]
    fn log_level_flag_overrides_config() {
        let config = config(OutputFormat::Table, "warn");

        let cli = Cli::try_parse_from(["sn", "--log-level", "debug", "alphabet"]).unwrap();
        assert_eq!(cli.resolve_log_level(&config), "debug");

        let cli = Cli::try_parse_from(["sn", "alphabet"]).unwrap();
        assert_eq!(cli.resolve_log_level(&config), "warn");
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["sn", "alphabet", "--format", "yaml"]).is_err());
    }
}
