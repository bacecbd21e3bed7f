#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use trust_dns_resolver::error::ResolveError;
use zoneserial::{DynSoaSource, Error, InMemorySoaSource, SoaSource};

/// Build a shareable in-memory source preloaded with the given
/// (domain, serial) entries.
pub fn in_memory(entries: &[(&str, &str)]) -> DynSoaSource {
    let mut source = InMemorySoaSource::new();
    for (domain, serial) in entries {
        source.set_serial(domain, *serial);
    }
    Arc::new(source)
}

/// A source whose every lookup fails the way an unreachable resolver does.
pub struct FailingSoaSource;

#[async_trait]
impl SoaSource for FailingSoaSource {
    async fn query_soa_serial(&self, _domain: &str) -> Result<String, Error> {
        Err(Error::Resolve(ResolveError::from("no nameserver reachable")))
    }
}
