//! Serial resolution against live domains.
//!
//! [`SoaResolver`] answers "what serial should this zone publish next" by
//! reconciling a locally computed successor against whatever the zone
//! publishes right now:
//!
//! - A domain that publishes a conforming `YYYYMMDDnn` serial advances through
//!   [`SoaSerial::next`], so its serials stay strictly increasing.
//! - A domain with no SOA record, an unresolvable name, or a serial outside
//!   the convention starts over at a baseline serial: today's date with
//!   sequence `00`.
//! - A day whose sequence space is used up is *not* papered over; the
//!   exhaustion failure reaches the caller, who must decide (typically: wait
//!   for the next UTC day).

use crate::error::Error;
use crate::serial::SoaSerial;
use crate::soa_source::DynSoaSource;
use time::OffsetDateTime;

/// Resolves the current and next `YYYYMMDDnn` serial of live domains.
#[derive(Clone)]
pub struct SoaResolver {
    source: DynSoaSource,
}

impl SoaResolver {
    pub fn new(source: DynSoaSource) -> Self {
        Self { source }
    }

    /// The raw serial string `domain`'s zone publishes right now.
    ///
    /// A thin pass-through to the underlying
    /// [`SoaSource`][crate::soa_source::SoaSource]; failures are neither
    /// interpreted nor retried here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolve`] or [`Error::NoSoaRecord`] as reported by the
    /// source.
    pub async fn current_serial_string(&self, domain: &str) -> Result<String, Error> {
        self.source.query_soa_serial(domain).await
    }

    /// The current serial of `domain` as a [`SoaSerial`].
    ///
    /// # Errors
    ///
    /// Returns the lookup failures of
    /// [`current_serial_string`][Self::current_serial_string], or
    /// [`Error::NotASerial`] when the zone publishes a serial outside the
    /// `YYYYMMDDnn` convention. The raw string is never coerced into a value.
    pub async fn current_serial(&self, domain: &str) -> Result<SoaSerial, Error> {
        let raw = self.current_serial_string(domain).await?;
        SoaSerial::parse(&raw)
    }

    /// The serial `domain` should publish for an update at `at`.
    ///
    /// When the domain has a conforming current serial, this is its successor
    /// per [`SoaSerial::next`]. When fetching or parsing the current serial
    /// fails for any reason, the domain is treated as having no prior
    /// convention-following serial and sequencing starts at `00` for `at`'s
    /// UTC calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceExhausted`] when the current serial's day has
    /// no sequence numbers left; a value violating monotonicity is never
    /// fabricated.
    pub async fn next_serial(&self, domain: &str, at: OffsetDateTime) -> Result<SoaSerial, Error> {
        match self.current_serial(domain).await {
            Ok(current) => {
                let next = current.next(at)?;
                tracing::debug!("\"{domain}\": serial {current} advances to {next}");
                Ok(next)
            }
            Err(err) => {
                let baseline = SoaSerial::new(at, 0)?;
                tracing::debug!("\"{domain}\": no usable serial ({err}), starting at {baseline}");
                Ok(baseline)
            }
        }
    }
}
