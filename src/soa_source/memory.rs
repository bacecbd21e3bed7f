//! A fixed, in-memory implementation of the [`SoaSource`][super::SoaSource]
//! trait.

use crate::error::Error;
use crate::soa_source::SoaSource;
use std::collections::HashMap;

/// An in-memory [`SoaSource`] serving serials from a fixed domain map.
///
/// Useful in tests and for dry runs without network access. Domain keys are
/// matched ASCII case-insensitively and with any trailing root dot ignored,
/// the way a nameserver treats query names. A domain with no entry behaves
/// like a zone with no SOA record.
#[derive(Default, Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct InMemorySoaSource {
    serials: HashMap<String, String>,
}

impl InMemorySoaSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `serial` as the answer the source gives for `domain`.
    pub fn set_serial(&mut self, domain: &str, serial: impl Into<String>) {
        self.serials.insert(normalize(domain), serial.into());
    }
}

fn normalize(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}

#[async_trait::async_trait]
impl SoaSource for InMemorySoaSource {
    async fn query_soa_serial(&self, domain: &str) -> Result<String, Error> {
        self.serials
            .get(&normalize(domain))
            .cloned()
            .ok_or_else(|| Error::NoSoaRecord(domain.to_string()))
    }
}
