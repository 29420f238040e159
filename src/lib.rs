//! domain_checker library: MX, SPF and DMARC presence checks
//!
//! Reads domain names line by line, looks up each domain's mail exchangers,
//! SPF policy (TXT on the domain) and DMARC policy (TXT on `_dmarc.<domain>`),
//! and writes one CSV row per domain.
//!
//! # Example
//!
//! ```no_run
//! use domain_checker::{run_check, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("domains.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! eprintln!("Checked {} domains", report.total_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Domains are processed strictly one
//! after another, so a current-thread runtime is enough.

#![warn(missing_docs)]

mod app;
mod checker;
pub mod config;
mod dns;
mod error_handling;
pub mod export;
pub mod initialization;

// Re-export public API
pub use checker::{DomainChecker, LookupResult, LookupStatus};
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{DnsResolver, HickoryResolver, MxRecord};
pub use error_handling::{
    ErrorType, InitializationError, LookupError, ProcessingStats, QueryType, WarningType,
};
pub use run::{check_stream, run_check, CheckReport};

// Internal run module (contains the main checking loop)
mod run {
    use anyhow::{Context, Result};
    use std::io::Write;
    use std::time::Instant;

    use log::{info, warn};
    use tokio::io::{AsyncBufRead, AsyncBufReadExt};

    use crate::app::{print_error_statistics, print_summary};
    use crate::checker::DomainChecker;
    use crate::config::Config;
    use crate::dns::{DnsResolver, HickoryResolver};
    use crate::error_handling::ErrorType;
    use crate::export::write_header;
    use crate::initialization::{init_resolver, open_input, open_output};

    /// Results of a checking run.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct CheckReport {
        /// Number of domains read and reported (one CSV row each)
        pub total_domains: usize,
        /// Domains with at least one MX record
        pub with_mx: usize,
        /// Domains with an SPF record
        pub with_spf: usize,
        /// Domains with a DMARC record
        pub with_dmarc: usize,
        /// Lookups that failed (timeouts, resolver errors); NXDOMAIN is not a failure
        pub failed_lookups: usize,
        /// Whether the input ended on a read error rather than EOF
        pub input_error: bool,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Checks every line of `input` and writes the CSV report to `output`.
    ///
    /// Writes the header first, then one row per line in input order. Each
    /// line minus its terminator is the domain; blank lines and lines that are
    /// not valid UTF-8 are checked too, so the row count always matches the
    /// line count. A read error is logged and ends the run early without
    /// failing it.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `output` fails.
    pub async fn check_stream<R, I, W>(
        checker: &DomainChecker<R>,
        mut input: I,
        output: &mut W,
    ) -> Result<CheckReport>
    where
        R: DnsResolver,
        I: AsyncBufRead + Unpin,
        W: Write + ?Sized,
    {
        let start_time = Instant::now();
        let mut report = CheckReport::default();

        write_header(&mut *output).context("Failed to write CSV header")?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("Error: Could not read from input: {e}");
                    checker.stats().increment_error(ErrorType::InputReadError);
                    report.input_error = true;
                    break;
                }
            }
            let domain = line_to_domain(&buf);

            let result = checker
                .check_domain(&domain, &mut *output)
                .await
                .with_context(|| format!("Failed to write CSV row for {domain}"))?;

            report.total_domains += 1;
            report.with_mx += usize::from(result.has_mx());
            report.with_spf += usize::from(result.has_spf());
            report.with_dmarc += usize::from(result.has_dmarc());
            report.failed_lookups += result.failed_lookups();
        }

        output.flush().context("Failed to flush CSV output")?;
        report.elapsed_seconds = start_time.elapsed().as_secs_f64();
        Ok(report)
    }

    /// Strips one `\n` or `\r\n` terminator, or a bare trailing `\r` on the
    /// last line. Invalid UTF-8 is replaced, not rejected.
    fn line_to_domain(line: &[u8]) -> String {
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        String::from_utf8_lossy(line).into_owned()
    }

    /// Runs a check with the provided configuration.
    ///
    /// This is the main entry point for the library. It opens the configured
    /// input and output, builds a resolver from the system configuration, runs
    /// [`check_stream`] and logs the run statistics.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be opened
    /// - The output file cannot be created
    /// - Writing to the output fails
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let input = open_input(&config)
            .await
            .context("Failed to open input")?;
        let mut output = open_output(&config).context("Failed to open output")?;

        let resolver = HickoryResolver::new(init_resolver(&config));
        let checker = DomainChecker::new(resolver);

        info!(
            "Checking domains from {}",
            if config.reads_stdin() {
                "stdin".to_string()
            } else {
                config.file.display().to_string()
            }
        );

        let report = check_stream(&checker, input, &mut output).await?;

        print_error_statistics(checker.stats());
        print_summary(&report);

        Ok(report)
    }
}
