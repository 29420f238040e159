//! DNS record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Text record queries (TXT records) with SPF/DMARC extraction
//! - Mail exchanger queries (MX records)
//! - The [`DnsResolver`] trait the checker is written against
//!
//! All operations are async and respect system DNS configuration.

mod extract;
mod records;
mod resolver;

// Re-export public API
pub use extract::{dmarc_name, extract_dmarc_record, extract_spf_record};
pub use records::{lookup_mx_records, lookup_txt_records};
pub use resolver::{DnsResolver, HickoryResolver, MxRecord};
