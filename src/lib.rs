//! Zone Serial
//!
//! Computes, validates, and increments DNS "Start of Authority" serial numbers
//! following the conventional `YYYYMMDDnn` scheme recommended by [RIPE-203],
//! and resolves a domain's current/next serial by querying its live
//! [SOA record].
//!
//! The core is [`SoaSerial`], an immutable value carrying the day-aware
//! increment rule, and [`SoaResolver`], which reconciles a locally computed
//! successor against whatever serial the zone publishes right now. DNS access
//! sits behind the [`SoaSource`] trait: [`ResolverSoaSource`] performs live
//! lookups through a stub resolver, while [`InMemorySoaSource`] serves fixed
//! answers for tests and dry runs.
//!
//! [RIPE-203]: https://www.ripe.net/publications/docs/ripe-203
//! [SOA record]: https://www.rfc-editor.org/rfc/rfc1035#section-3.3.13
//!
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod git_info;
pub mod resolve;
pub mod serial;
pub mod soa_source;

pub use config::Config;
pub use error::Error;
pub use git_info::GitInfo;
pub use resolve::SoaResolver;
pub use serial::{SoaSerial, MAX_SEQUENCE_NUMBER};
pub use soa_source::{DynSoaSource, InMemorySoaSource, ResolverSoaSource, SoaSource};
