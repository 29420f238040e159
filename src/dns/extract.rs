//! DNS record extraction utilities.
//!
//! This module provides functions to pick SPF and DMARC policies out of
//! TXT record collections.

use crate::config::{DMARC_LABEL, DMARC_PREFIX, SPF_PREFIX};

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1". The match is a case-sensitive prefix
/// check on the untrimmed text, and the first match in resolver order wins.
///
/// # Arguments
///
/// * `txt_records` - TXT record strings in resolver order
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    first_with_prefix(txt_records, SPF_PREFIX)
}

/// Extracts DMARC record from TXT records.
///
/// DMARC records live at `_dmarc.<domain>` (see [`dmarc_name`]) and start with
/// "v=DMARC1". Same matching rules as [`extract_spf_record`].
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    first_with_prefix(txt_records, DMARC_PREFIX)
}

/// Returns the name that holds the DMARC policy for `domain`.
pub fn dmarc_name(domain: &str) -> String {
    format!("{DMARC_LABEL}{domain}")
}

fn first_with_prefix(txt_records: &[String], prefix: &str) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.starts_with(prefix))
        .cloned()
}
