//! Configuration constants.
//!
//! Defaults for the CLI options plus the fixed strings that make up the
//! output contract (CSV header, record prefixes, DMARC label).

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 10;
/// Attempts per DNS query before the resolver gives up
pub const DNS_ATTEMPTS: usize = 2;

/// Input path that selects stdin.
pub const STDIN_PATH: &str = "-";

/// First line of every output stream.
///
/// Downstream consumers match on this exact string, spacing included.
pub const CSV_HEADER: &str = "domain, hasMX, hasSPF, spfRecord,hasDMARC,dmarcRecord";

// Record identification
/// TXT records starting with this prefix are SPF policies
pub const SPF_PREFIX: &str = "v=spf1";
/// TXT records starting with this prefix are DMARC policies
pub const DMARC_PREFIX: &str = "v=DMARC1";
/// Label prepended to a domain to find its DMARC policy
pub const DMARC_LABEL: &str = "_dmarc.";
