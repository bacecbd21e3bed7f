//! A [`SoaSource`] backed by a stub resolver.

use crate::error::Error;
use crate::soa_source::SoaSource;
use std::net::SocketAddr;
use std::time::Duration;
use trust_dns_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use trust_dns_resolver::system_conf::read_system_conf;
use trust_dns_resolver::TokioAsyncResolver;

/// A [`SoaSource`] that performs live DNS queries through a
/// [`TokioAsyncResolver`].
///
/// Each [`query_soa_serial`][SoaSource::query_soa_serial] call performs
/// exactly one lookup: the resolver is pinned to a single attempt, with the
/// timeout given at construction. Retry and backoff policy, if any, belong to
/// the caller.
#[derive(Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ResolverSoaSource {
    resolver: TokioAsyncResolver,
}

impl ResolverSoaSource {
    /// Wrap an existing resolver, options and all.
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }

    /// Construct a source that uses the system resolver configuration
    /// (usually `/etc/resolv.conf`) for the underlying nameservers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolve`] when the system configuration can't be read
    /// or the resolver can't be built from it.
    pub fn from_system_conf(timeout: Duration) -> Result<Self, Error> {
        let (config, opts) = read_system_conf()?;
        let resolver = TokioAsyncResolver::tokio(config, Self::single_query_opts(opts, timeout))?;
        Ok(Self { resolver })
    }

    /// Construct a source that asks the given nameservers over UDP.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolve`] when the resolver can't be built.
    pub fn from_nameservers(addrs: &[SocketAddr], timeout: Duration) -> Result<Self, Error> {
        let mut config = ResolverConfig::new();
        for &socket_addr in addrs {
            config.add_name_server(NameServerConfig {
                socket_addr,
                protocol: Protocol::Udp,
                tls_dns_name: None,
                trust_nx_responses: false,
                bind_addr: None,
            });
        }
        let opts = Self::single_query_opts(ResolverOpts::default(), timeout);
        let resolver = TokioAsyncResolver::tokio(config, opts)?;
        Ok(Self { resolver })
    }

    fn single_query_opts(mut opts: ResolverOpts, timeout: Duration) -> ResolverOpts {
        opts.timeout = timeout;
        // One query per call; callers own any retry policy.
        opts.attempts = 1;
        opts
    }
}

#[async_trait::async_trait]
impl SoaSource for ResolverSoaSource {
    async fn query_soa_serial(&self, domain: &str) -> Result<String, Error> {
        let lookup = self.resolver.soa_lookup(domain).await?;
        let soa = lookup
            .iter()
            .next()
            .ok_or_else(|| Error::NoSoaRecord(domain.to_string()))?;
        Ok(soa.serial().to_string())
    }
}
