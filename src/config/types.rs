//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS, STDIN_PATH};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// Every field has a default, so a plain `domain_checker < domains.txt`
/// reads stdin and writes CSV to stdout.
///
/// # Examples
///
/// ```bash
/// # Read domains from stdin
/// cat domains.txt | domain_checker
///
/// # Read from a file, write the CSV to another file
/// domain_checker domains.txt --output report.csv
///
/// # Fail DNS queries faster
/// domain_checker domains.txt --dns-timeout-seconds 3 --dns-attempts 1
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_checker",
    version,
    about = "Reports MX, SPF and DMARC records for a list of domains as CSV."
)]
pub struct Config {
    /// File to read domains from, one per line ("-" for stdin)
    #[arg(value_parser, default_value = STDIN_PATH)]
    pub file: PathBuf,

    /// Write CSV to this file instead of stdout
    #[arg(long, short = 'o', value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,

    /// Attempts per DNS query
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    pub dns_attempts: usize,
}

impl Config {
    /// Returns `true` when domains should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == STDIN_PATH
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(STDIN_PATH),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            dns_attempts: DNS_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config_reads_stdin() {
        let config = Config::default();
        assert!(config.reads_stdin());
        assert!(config.output.is_none());
        assert_eq!(config.dns_timeout_seconds, DNS_TIMEOUT_SECS);
        assert_eq!(config.dns_attempts, DNS_ATTEMPTS);
    }

    #[test]
    fn test_parse_without_arguments_matches_default() {
        let parsed = Config::try_parse_from(["domain_checker"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.file, default.file);
        assert_eq!(parsed.output, default.output);
        assert_eq!(parsed.log_level, default.log_level);
        assert_eq!(parsed.log_format, default.log_format);
        assert_eq!(parsed.dns_timeout_seconds, default.dns_timeout_seconds);
        assert_eq!(parsed.dns_attempts, default.dns_attempts);
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = Config::try_parse_from([
            "domain_checker",
            "domains.txt",
            "--output",
            "out.csv",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--dns-timeout-seconds",
            "3",
            "--dns-attempts",
            "1",
        ])
        .unwrap();

        assert_eq!(parsed.file, PathBuf::from("domains.txt"));
        assert!(!parsed.reads_stdin());
        assert_eq!(parsed.output, Some(PathBuf::from("out.csv")));
        assert_eq!(parsed.log_level, LogLevel::Debug);
        assert_eq!(parsed.log_format, LogFormat::Json);
        assert_eq!(parsed.dns_timeout_seconds, 3);
        assert_eq!(parsed.dns_attempts, 1);
    }

    #[test]
    fn test_parse_rejects_unknown_log_level() {
        let result = Config::try_parse_from(["domain_checker", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
