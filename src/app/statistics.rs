//! Statistics printing.
//!
//! Everything here goes through `log`, so it lands on stderr and never mixes
//! with the CSV on stdout.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats, WarningType};
use crate::CheckReport;

/// Prints a simple one-line summary of the run.
pub fn print_summary(report: &CheckReport) {
    info!(
        "✅ Checked {} domain{} in {:.1}s (MX: {}, SPF: {}, DMARC: {}, failed lookups: {})",
        report.total_domains,
        if report.total_domains == 1 { "" } else { "s" },
        report.elapsed_seconds,
        report.with_mx,
        report.with_spf,
        report.with_dmarc,
        report.failed_lookups
    );
    if report.input_error {
        info!("Input ended early on a read error; remaining lines were not checked");
    }
}

/// Prints error and warning statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_warnings = error_stats.total_warnings();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_leaves_counts_untouched() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::DnsLookupTimeout);
        stats.increment_error(ErrorType::InputReadError);
        stats.increment_warning(WarningType::MissingDmarc);

        print_error_statistics(&stats);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.get_warning_count(WarningType::MissingDmarc), 1);
    }

    #[test]
    fn test_print_summary_leaves_report_untouched() {
        let report = CheckReport {
            total_domains: 1,
            with_mx: 1,
            with_spf: 0,
            with_dmarc: 0,
            failed_lookups: 2,
            input_error: true,
            elapsed_seconds: 0.25,
        };
        let before = report.clone();

        print_summary(&report);

        assert_eq!(report, before);
    }
}
