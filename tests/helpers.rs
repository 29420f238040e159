// Shared test helpers: a fixture resolver and output capture.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;

use async_trait::async_trait;
use domain_checker::{
    check_stream, CheckReport, DnsResolver, DomainChecker, LookupError, MxRecord, QueryType,
};

/// Resolver answering from fixed tables. Names without an entry are NXDOMAIN.
#[derive(Default, Clone)]
pub struct StaticResolver {
    mx: HashMap<String, Result<Vec<MxRecord>, LookupError>>,
    txt: HashMap<String, Result<Vec<String>, LookupError>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mx(mut self, name: &str, hosts: &[&str]) -> Self {
        let records = hosts
            .iter()
            .map(|host| (10, host.to_string()))
            .collect();
        self.mx.insert(name.to_string(), Ok(records));
        self
    }

    pub fn txt(mut self, name: &str, records: &[&str]) -> Self {
        self.txt.insert(
            name.to_string(),
            Ok(records.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    pub fn mx_timeout(mut self, name: &str) -> Self {
        self.mx.insert(
            name.to_string(),
            Err(LookupError::Timeout {
                name: name.to_string(),
                query_type: QueryType::Mx,
            }),
        );
        self
    }

    pub fn txt_failure(mut self, name: &str, message: &str) -> Self {
        self.txt.insert(
            name.to_string(),
            Err(LookupError::Resolver {
                name: name.to_string(),
                query_type: QueryType::Txt,
                message: message.to_string(),
            }),
        );
        self
    }
}

#[async_trait]
impl DnsResolver for StaticResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.mx.get(name).cloned().unwrap_or_else(|| {
            Err(LookupError::NoRecords {
                name: name.to_string(),
                query_type: QueryType::Mx,
            })
        })
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.txt.get(name).cloned().unwrap_or_else(|| {
            Err(LookupError::NoRecords {
                name: name.to_string(),
                query_type: QueryType::Txt,
            })
        })
    }
}

/// Runs `input` through a checker backed by `resolver`; returns the CSV lines and the report.
#[allow(dead_code)]
pub async fn run_lines(resolver: StaticResolver, input: &str) -> (Vec<String>, CheckReport) {
    let checker = DomainChecker::new(resolver);
    let mut out = Vec::new();
    let report = check_stream(&checker, input.as_bytes(), &mut out)
        .await
        .expect("writing to a Vec cannot fail");
    let text = String::from_utf8(out).expect("CSV output should be UTF-8");
    (text.lines().map(str::to_string).collect(), report)
}

/// The `example.com` fixture with MX, SPF and DMARC all published.
#[allow(dead_code)]
pub fn example_com() -> StaticResolver {
    StaticResolver::new()
        .mx("example.com", &["mx1.example.com.", "mx2.example.com."])
        .txt("example.com", &["v=spf1 include:_spf.example.com ~all"])
        .txt("_dmarc.example.com", &["v=DMARC1; p=none"])
}
