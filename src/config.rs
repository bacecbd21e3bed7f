use crate::error::Error;
use crate::soa_source::{DynSoaSource, ResolverSoaSource};
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_secs(5);

/// Runtime configuration: which nameservers to ask, and how long to wait.
///
/// Both fields are optional in the JSON file, so `{}` is a valid
/// configuration and behaves like [`Config::default`].
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Nameservers to query directly over UDP. Empty means use the system
    /// resolver configuration (usually `/etc/resolv.conf`).
    #[serde(default)]
    pub nameservers: Vec<SocketAddr>,
    /// Per-query timeout, in whole seconds in the JSON file.
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_dns_timeout")]
    pub dns_timeout: Duration,
}

fn default_dns_timeout() -> Duration {
    DEFAULT_DNS_TIMEOUT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            dns_timeout: DEFAULT_DNS_TIMEOUT,
        }
    }
}

impl Config {
    /// Load a `Config` from the JSON file at `p`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] when the path can't be opened or read, and
    /// [`Error::InvalidJSON`] when its content doesn't parse.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        Ok(conf)
    }

    /// Build the SOA source this configuration describes: the configured
    /// nameservers when given, the system resolver configuration otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolve`] when the resolver can't be constructed.
    pub fn soa_source(&self) -> Result<DynSoaSource, Error> {
        let source = if self.nameservers.is_empty() {
            ResolverSoaSource::from_system_conf(self.dns_timeout)?
        } else {
            ResolverSoaSource::from_nameservers(&self.nameservers, self.dns_timeout)?
        };
        Ok(Arc::new(source))
    }
}
