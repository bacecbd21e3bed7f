//! Authoritative SOA serial sources.
//!
//! A [`SoaSource`] answers one question: what serial does a domain's zone
//! publish in its SOA record right now? It is the only seam in the crate that
//! touches the network, and the single point of suspension for everything
//! built on top of it.
//!
//! Two implementations are provided, [`resolver::ResolverSoaSource`] and
//! [`memory::InMemorySoaSource`]. The former performs live DNS queries through
//! a stub resolver. The latter serves answers from a fixed map, for tests and
//! dry runs without network access.

use crate::error::Error;
use std::sync::Arc;

pub mod memory;
pub mod resolver;

#[allow(clippy::module_name_repetitions)]
pub use memory::InMemorySoaSource;
#[allow(clippy::module_name_repetitions)]
pub use resolver::ResolverSoaSource;

/// `DynSoaSource` is a type alias for a [`SoaSource`] shared by any number of
/// consumers through an [`Arc`]. Sources are read-only, so no lock is needed.
#[allow(clippy::module_name_repetitions)]
pub type DynSoaSource = Arc<dyn SoaSource + Send + Sync>;

/// An async trait describing where authoritative SOA serials come from.
#[async_trait::async_trait]
pub trait SoaSource {
    /// The serial field of `domain`'s SOA record, as the decimal digits the
    /// zone publishes.
    ///
    /// The serial travels the wire as a `u32`; implementations render it with
    /// `to_string()` and leave interpretation to the caller, so a zone outside
    /// the `YYYYMMDDnn` convention is observed exactly as published.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolve`] for NXDOMAIN, unreachable nameservers, and
    /// transport failures, or [`Error::NoSoaRecord`] when the answer carries
    /// no SOA record.
    async fn query_soa_serial(&self, domain: &str) -> Result<String, Error>;
}
