//! Resolver capability used by the checker.
//!
//! [`DnsResolver`] is the seam between the checker and the network: the
//! binary plugs in [`HickoryResolver`], tests plug in fixture resolvers.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use super::records::{lookup_mx_records, lookup_txt_records};
use crate::error_handling::LookupError;

/// One mail exchanger: preference and host name.
pub type MxRecord = (u16, String);

/// Looks up the record types the checker needs.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Returns the mail exchangers for `name`.
    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError>;

    /// Returns the text records for `name`, in resolver order.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

/// [`DnsResolver`] backed by `hickory-resolver`.
#[derive(Clone)]
pub struct HickoryResolver {
    inner: Arc<TokioAsyncResolver>,
}

impl HickoryResolver {
    /// Wraps an already configured resolver.
    pub fn new(inner: Arc<TokioAsyncResolver>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DnsResolver for HickoryResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        lookup_mx_records(name, &self.inner).await
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        lookup_txt_records(name, &self.inner).await
    }
}
