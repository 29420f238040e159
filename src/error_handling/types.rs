//! Error type definitions.
//!
//! This module defines the error and warning types used throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error opening the input or output stream.
    #[error("I/O initialization error for {path}: {source}")]
    StreamError {
        /// Path that could not be opened
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// DNS query type, as seen by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    /// Mail exchanger records
    Mx,
    /// Text records (SPF and DMARC live here)
    Txt,
}

impl QueryType {
    /// Returns the record type mnemonic.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Mx => "MX",
            QueryType::Txt => "TXT",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed DNS lookup.
///
/// Carries the queried name and record type so the diagnostic line is
/// self-contained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name does not exist (NXDOMAIN) or has no records of this type.
    #[error("no {query_type} records found for {name}")]
    NoRecords {
        /// Name that was queried
        name: String,
        /// Record type that was queried
        query_type: QueryType,
    },

    /// The resolver gave up waiting for an answer.
    #[error("{query_type} lookup for {name} timed out")]
    Timeout {
        /// Name that was queried
        name: String,
        /// Record type that was queried
        query_type: QueryType,
    },

    /// Any other resolver failure (malformed name, network unreachable, ...).
    #[error("{query_type} lookup for {name} failed: {message}")]
    Resolver {
        /// Name that was queried
        name: String,
        /// Record type that was queried
        query_type: QueryType,
        /// Resolver error text
        message: String,
    },
}

impl LookupError {
    /// Returns `true` when the lookup reached an authoritative "nothing here".
    pub fn is_no_records(&self) -> bool {
        matches!(self, LookupError::NoRecords { .. })
    }

    /// Returns `true` when the lookup timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Timeout { .. })
    }
}

/// Types of errors that can occur while checking domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// MX query failed
    DnsMxLookupError,
    /// TXT query on the domain failed
    DnsTxtLookupError,
    /// TXT query on `_dmarc.<domain>` failed
    DnsDmarcLookupError,
    /// Any query timed out
    DnsLookupTimeout,
    /// Reading the input stream failed
    InputReadError,
}

/// Types of warnings that can occur while checking domains.
///
/// Warnings indicate a record the domain does not publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing"
pub enum WarningType {
    /// Domain has no MX records
    MissingMx,
    /// Domain has no SPF record
    MissingSpf,
    /// Domain has no DMARC record
    MissingDmarc,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsMxLookupError => "DNS MX lookup error",
            ErrorType::DnsTxtLookupError => "DNS TXT lookup error",
            ErrorType::DnsDmarcLookupError => "DNS DMARC lookup error",
            ErrorType::DnsLookupTimeout => "DNS lookup timeout",
            ErrorType::InputReadError => "Input read error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingMx => "Missing MX record",
            WarningType::MissingSpf => "Missing SPF record",
            WarningType::MissingDmarc => "Missing DMARC record",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(ErrorType::DnsMxLookupError.as_str(), "DNS MX lookup error");
        assert_eq!(ErrorType::DnsLookupTimeout.to_string(), "DNS lookup timeout");
        assert_eq!(ErrorType::InputReadError.as_str(), "Input read error");
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_all_warning_types_have_string_representation() {
        for warning_type in WarningType::iter() {
            assert!(
                !warning_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                warning_type
            );
        }
    }

    #[test]
    fn test_lookup_error_messages_name_the_query() {
        let err = LookupError::NoRecords {
            name: "_dmarc.example.com".to_string(),
            query_type: QueryType::Txt,
        };
        assert_eq!(err.to_string(), "no TXT records found for _dmarc.example.com");
        assert!(err.is_no_records());
        assert!(!err.is_timeout());

        let err = LookupError::Timeout {
            name: "example.com".to_string(),
            query_type: QueryType::Mx,
        };
        assert_eq!(err.to_string(), "MX lookup for example.com timed out");
        assert!(err.is_timeout());

        let err = LookupError::Resolver {
            name: "..".to_string(),
            query_type: QueryType::Mx,
            message: "malformed label".to_string(),
        };
        assert_eq!(err.to_string(), "MX lookup for .. failed: malformed label");
    }
}
