//! Error types.

use time::Date;
use trust_dns_resolver::error::ResolveError;

/// Error enumerates the possible zoneserial error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a serial is constructed with a sequence number above
    /// [`MAX_SEQUENCE_NUMBER`][crate::serial::MAX_SEQUENCE_NUMBER]. The `nn`
    /// suffix of a `YYYYMMDDnn` serial has room for two digits, no more.
    #[error("sequence number {0} is out of range (expected 0..=99)")]
    SequenceOutOfRange(u8),

    /// Returned when a serial is constructed for a date before year zero,
    /// which has no 8 digit `YYYYMMDD` form.
    #[error("{0} has no YYYYMMDD form")]
    DateOutOfRange(Date),

    /// Returned when parsing a string that is not exactly 10 ASCII digits
    /// beginning with a valid `YYYYMMDD` calendar date.
    ///
    /// [`SoaResolver::current_serial`][crate::resolve::SoaResolver::current_serial]
    /// surfaces this same condition for a zone that publishes an SOA serial
    /// outside the convention; such serials are never coerced into a value.
    #[error("\"{0}\" is not a YYYYMMDDnn serial")]
    NotASerial(String),

    /// Returned by [`SoaSerial::next`][crate::serial::SoaSerial::next] when the
    /// receiver already carries sequence number 99 for its date: the day's
    /// sequence space is used up, and the date may only advance when the clock
    /// reaches the next UTC day.
    #[error("serial sequence space for {0} is exhausted")]
    SequenceExhausted(Date),

    /// Returned when an SOA lookup produces an answer with no SOA record for
    /// the domain.
    #[error("no SOA record for \"{0}\"")]
    NoSoaRecord(String),

    /// Returned when the resolver fails: the domain does not exist, no
    /// nameserver is reachable, or a transport error occurred.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Returned when a [`GitInfo`][crate::git_info::GitInfo] is constructed
    /// with a non-empty commit SHA that is not 40 hex digits.
    #[error("\"{0}\" is not a commit SHA")]
    NotACommitSha(String),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g.
    /// [trying to load a `Config`][crate::config::Config::try_from_file]) fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
