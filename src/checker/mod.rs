//! Per-domain mail authentication check.
//!
//! [`DomainChecker`] runs three lookups for a domain, one after another:
//! MX on the domain, TXT on the domain (SPF), TXT on `_dmarc.<domain>` (DMARC).
//! Lookup failures never abort a check; they are logged as `Error: ...`
//! diagnostics and downgrade the affected field.

use std::io::{self, Write};

use log::{debug, info, warn};

use crate::dns::{dmarc_name, extract_dmarc_record, extract_spf_record, DnsResolver, MxRecord};
use crate::error_handling::{ErrorType, LookupError, ProcessingStats, WarningType};
use crate::export::write_row;

/// Outcome of one lookup.
///
/// The CSV report collapses `NotFound` and `Failed` into `false` / empty,
/// but the distinction is kept for statistics and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus<T> {
    /// The record was found.
    Found(T),
    /// The query was answered but nothing matched (including NXDOMAIN).
    NotFound,
    /// The query itself failed.
    Failed(LookupError),
}

impl<T> LookupStatus<T> {
    /// Returns `true` for [`LookupStatus::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, LookupStatus::Found(_))
    }

    /// Returns the found value, if any.
    pub fn found(&self) -> Option<&T> {
        match self {
            LookupStatus::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the lookup error, if the query failed.
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            LookupStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Everything learned about one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Domain exactly as read from input
    pub domain: String,
    /// Mail exchangers, sorted by preference
    pub mx: LookupStatus<Vec<MxRecord>>,
    /// First TXT record on the domain starting with `v=spf1`
    pub spf: LookupStatus<String>,
    /// First TXT record on `_dmarc.<domain>` starting with `v=DMARC1`
    pub dmarc: LookupStatus<String>,
}

impl LookupResult {
    /// Whether at least one MX record was found.
    pub fn has_mx(&self) -> bool {
        self.mx.is_found()
    }

    /// Whether an SPF record was found.
    pub fn has_spf(&self) -> bool {
        self.spf.is_found()
    }

    /// SPF record text, or `""` when absent.
    pub fn spf_record(&self) -> &str {
        self.spf.found().map(String::as_str).unwrap_or("")
    }

    /// Whether a DMARC record was found.
    pub fn has_dmarc(&self) -> bool {
        self.dmarc.is_found()
    }

    /// DMARC record text, or `""` when absent.
    pub fn dmarc_record(&self) -> &str {
        self.dmarc.found().map(String::as_str).unwrap_or("")
    }

    /// Number of lookups that failed outright.
    pub fn failed_lookups(&self) -> usize {
        [
            self.mx.error().is_some(),
            self.spf.error().is_some(),
            self.dmarc.error().is_some(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}

/// Checks domains against an injected resolver.
pub struct DomainChecker<R> {
    resolver: R,
    stats: ProcessingStats,
}

impl<R: DnsResolver> DomainChecker<R> {
    /// Creates a checker with fresh statistics.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            stats: ProcessingStats::new(),
        }
    }

    /// Error and warning counters accumulated over all checks so far.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Runs the MX, SPF and DMARC lookups for `domain`.
    ///
    /// The domain is passed to the resolver as-is; no syntax validation is done.
    pub async fn check(&self, domain: &str) -> LookupResult {
        let mx = match self.resolver.lookup_mx(domain).await {
            Ok(records) if !records.is_empty() => LookupStatus::Found(records),
            Ok(_) => LookupStatus::NotFound,
            Err(e) => self.absorb(e, ErrorType::DnsMxLookupError),
        };

        let spf = match self.resolver.lookup_txt(domain).await {
            Ok(records) => extract_spf_record(&records)
                .map_or(LookupStatus::NotFound, LookupStatus::Found),
            Err(e) => self.absorb(e, ErrorType::DnsTxtLookupError),
        };

        let dmarc = match self.resolver.lookup_txt(&dmarc_name(domain)).await {
            Ok(records) => extract_dmarc_record(&records)
                .map_or(LookupStatus::NotFound, LookupStatus::Found),
            Err(e) => self.absorb(e, ErrorType::DnsDmarcLookupError),
        };

        self.record_missing(&mx, WarningType::MissingMx);
        self.record_missing(&spf, WarningType::MissingSpf);
        self.record_missing(&dmarc, WarningType::MissingDmarc);

        let result = LookupResult {
            domain: domain.to_string(),
            mx,
            spf,
            dmarc,
        };
        debug!(
            "{}: mx={} spf={} dmarc={}",
            result.domain,
            result.has_mx(),
            result.has_spf(),
            result.has_dmarc()
        );
        result
    }

    /// Checks `domain` and writes its CSV row to `out`.
    ///
    /// # Errors
    ///
    /// Only a failed write is an error; lookup failures are absorbed.
    pub async fn check_domain<W: Write + ?Sized>(
        &self,
        domain: &str,
        out: &mut W,
    ) -> io::Result<LookupResult> {
        let result = self.check(domain).await;
        write_row(out, &result)?;
        Ok(result)
    }

    fn absorb<T>(&self, error: LookupError, error_type: ErrorType) -> LookupStatus<T> {
        if error.is_no_records() {
            info!("Error: {error}");
            return LookupStatus::NotFound;
        }

        warn!("Error: {error}");
        if error.is_timeout() {
            self.stats.increment_error(ErrorType::DnsLookupTimeout);
        } else {
            self.stats.increment_error(error_type);
        }
        LookupStatus::Failed(error)
    }

    fn record_missing<T>(&self, status: &LookupStatus<T>, warning: WarningType) {
        if matches!(status, LookupStatus::NotFound) {
            self.stats.increment_warning(warning);
        }
    }
}
