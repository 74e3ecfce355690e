use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sentinel_config::PatternDefinition;
use sentinel_core::RiskLevel;

#[derive(Parser)]
#[command(name = "sentinel")]
#[command(about = "Detect and redact PII in text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "SENTINEL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan text for PII and print the redacted result
    Scan(ScanArgs),

    /// List the classifiers a scan would use
    Patterns {
        /// Extra classifier as NAME=REGEX (repeatable)
        #[arg(long = "pattern", short = 'p', value_parser = parse_pattern)]
        patterns: Vec<PatternDefinition>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct ScanArgs {
    /// Sources to scan: text:<content>, file:<path>, a bare path, or - for stdin
    #[arg(required = true)]
    pub sources: Vec<String>,

    /// Extra classifier as NAME=REGEX (repeatable); overrides a built-in of the same name
    #[arg(long = "pattern", short = 'p', value_parser = parse_pattern)]
    pub patterns: Vec<PatternDefinition>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show matched values next to each detection
    #[arg(long)]
    pub show_values: bool,

    /// Exit with an error if any result reaches this risk level (low, medium or high)
    #[arg(long, value_parser = parse_risk)]
    pub fail_on: Option<RiskLevel>,

    /// Ignore sentinel.toml in the current project
    #[arg(long)]
    pub no_project: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the global config file path
    Path,

    /// Print the effective global config
    Show,

    /// Create sentinel.toml in the current directory
    Init {
        /// Overwrite an existing sentinel.toml
        #[arg(long)]
        force: bool,
    },
}

fn parse_pattern(arg: &str) -> Result<PatternDefinition, String> {
    PatternDefinition::parse_assignment(arg).map_err(|e| e.to_string())
}

/// Every result is at least `None`, so it is not a usable threshold
fn parse_risk(arg: &str) -> Result<RiskLevel, String> {
    match arg.parse::<RiskLevel>() {
        Ok(RiskLevel::None) => Err("threshold must be low, medium or high".to_string()),
        Ok(level) => Ok(level),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_args() {
        let cli = Cli::parse_from([
            "sentinel",
            "scan",
            "text:hello",
            "-p",
            r"EMAIL=nomatch$^",
            "--fail-on",
            "medium",
            "--json",
        ]);

        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.sources, vec!["text:hello"]);
                assert_eq!(args.patterns[0].name, "EMAIL");
                assert_eq!(args.fail_on, Some(RiskLevel::Medium));
                assert!(args.json);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_fail_on_rejects_none() {
        assert!(Cli::try_parse_from(["sentinel", "scan", "text:x", "--fail-on", "none"]).is_err());
        assert!(Cli::try_parse_from(["sentinel", "scan", "text:x", "--fail-on", "severe"]).is_err());
        assert!(Cli::try_parse_from(["sentinel", "scan", "text:x", "--fail-on", "low"]).is_ok());
    }

    #[test]
    fn test_rejects_bad_pattern_argument() {
        assert!(Cli::try_parse_from(["sentinel", "scan", "text:x", "-p", "novalue"]).is_err());
    }
}
