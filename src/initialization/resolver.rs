//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::Config;

/// Initializes the DNS resolver for MX and TXT lookups.
///
/// Reads the system resolver configuration (`/etc/resolv.conf` on Unix, the
/// registry on Windows). If that cannot be read, logs a warning and falls back
/// to the library's default upstreams.
///
/// The per-query timeout and attempt count come from `config`. `ndots` is
/// forced to 0 so names are queried exactly as given, without search-domain
/// expansion, and the answer cache is disabled so every check hits the wire.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc`.
pub fn init_resolver(config: &Config) -> Arc<TokioAsyncResolver> {
    let (resolver_config, mut opts) = match read_system_conf() {
        Ok((resolver_config, opts)) => {
            debug!(
                "Using system DNS configuration ({} name servers)",
                resolver_config.name_servers().len()
            );
            (resolver_config, opts)
        }
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    apply_config(&mut opts, config);

    Arc::new(TokioAsyncResolver::tokio(resolver_config, opts))
}

fn apply_config(opts: &mut ResolverOpts, config: &Config) {
    opts.timeout = Duration::from_secs(config.dns_timeout_seconds);
    opts.attempts = config.dns_attempts.max(1);
    opts.ndots = 0;
    opts.cache_size = 0;
}
