//! DNS record queries (TXT, MX).
//!
//! This module provides functions to query the record types the checker needs:
//! - Text records (TXT)
//! - Mail exchanger records (MX)

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::{LookupError, QueryType};

/// Queries TXT (text) records for a name.
///
/// Records are returned in the order the resolver produced them. TXT records
/// made of several character-strings are joined without a separator.
///
/// # Arguments
///
/// * `name` - The name to query
/// * `resolver` - The DNS resolver instance
///
/// # Errors
///
/// Returns a [`LookupError`] describing why the query produced no answer.
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    match resolver.lookup(name, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            Ok(txt_records)
        }
        Err(e) => Err(classify_resolve_error(name, QueryType::Txt, &e)),
    }
}

/// Queries MX (mail exchanger) records for a name.
///
/// # Returns
///
/// A vector of (preference, exchange) tuples, sorted by preference (lower = tried first).
///
/// # Errors
///
/// Returns a [`LookupError`] describing why the query produced no answer.
pub async fn lookup_mx_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<(u16, String)>, LookupError> {
    match resolver.lookup(name, RecordType::MX).await {
        Ok(lookup) => {
            let mut mx_records: Vec<(u16, String)> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::MX(mx) = rdata {
                        Some((mx.preference(), mx.exchange().to_utf8()))
                    } else {
                        None
                    }
                })
                .collect();
            mx_records.sort_by_key(|(preference, _)| *preference);
            Ok(mx_records)
        }
        Err(e) => Err(classify_resolve_error(name, QueryType::Mx, &e)),
    }
}

/// Maps a hickory error onto the checker's error taxonomy.
fn classify_resolve_error(name: &str, query_type: QueryType, error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords {
            name: name.to_string(),
            query_type,
        },
        ResolveErrorKind::Timeout => LookupError::Timeout {
            name: name.to_string(),
            query_type,
        },
        _ => LookupError::Resolver {
            name: name.to_string(),
            query_type,
            message: error.to_string(),
        },
    }
}
