//! The `YYYYMMDDnn` SOA serial value type.
//!
//! [RIPE-203] recommends DNS zone serials of the form `YYYYMMDDnn`: the UTC
//! calendar date of the last zone update, followed by a two digit sequence
//! number that leaves room for 100 updates per day. [`SoaSerial`] is that
//! value, together with the validation, parsing, formatting, and increment
//! rules the convention implies.
//!
//! # Increment policy
//!
//! [`SoaSerial::next`] never lets a serial move backward. An update on a later
//! UTC day advances the date and resets the sequence to `00`. An update on the
//! same day increments the sequence. An update timestamped on an *earlier* day
//! than the serial's own date (a stale or skewed clock at the call site) also
//! increments the sequence under the serial's own date, because a published
//! serial must never regress. When a day's 100 sequence numbers are used up,
//! [`SoaSerial::next`] fails with
//! [`Error::SequenceExhausted`][crate::error::Error::SequenceExhausted] rather
//! than borrowing tomorrow's date.
//!
//! [RIPE-203]: https://www.ripe.net/publications/docs/ripe-203

use crate::error::Error;
use lazy_static::lazy_static;
use std::fmt;
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// The largest sequence number that fits the two digit `nn` suffix.
pub const MAX_SEQUENCE_NUMBER: u8 = 99;

/// The number of ASCII digits in a conforming serial string.
const SERIAL_LEN: usize = 10;

/// The number of leading digits that encode the calendar date.
const SERIAL_START_LEN: usize = 8;

lazy_static! {
    static ref SERIAL_DATE_FORMAT: &'static [time::format_description::FormatItem<'static>] =
        format_description!(version = 2, "[year][month][day]");
}

/// An immutable `YYYYMMDDnn` zone serial.
///
/// The first eight digits are a real proleptic-Gregorian calendar date in UTC;
/// the last two are a sequence number in `00..=99`. Values are only ever
/// created through the checked constructors and parsers, so every `SoaSerial`
/// renders as exactly 10 ASCII digits.
///
/// Ordering follows the date first and the sequence number second, which
/// coincides with numeric ordering of the rendered 10 digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoaSerial {
    date: Date,
    sequence: u8,
}

impl SoaSerial {
    /// Construct a serial for the UTC calendar date of `at`.
    ///
    /// `at` may carry any UTC offset; the date is taken after projecting the
    /// instant to UTC. Pure and side-effect free.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceOutOfRange`] when `sequence_number` exceeds
    /// [`MAX_SEQUENCE_NUMBER`].
    pub fn new(at: OffsetDateTime, sequence_number: u8) -> Result<Self, Error> {
        Self::from_date(at.to_offset(UtcOffset::UTC).date(), sequence_number)
    }

    /// Construct a serial from an already-known calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceOutOfRange`] when `sequence_number` exceeds
    /// [`MAX_SEQUENCE_NUMBER`], or [`Error::DateOutOfRange`] for a
    /// before-year-zero date, which has no 8 digit `YYYYMMDD` form.
    pub fn from_date(date: Date, sequence_number: u8) -> Result<Self, Error> {
        if date.year() < 0 {
            return Err(Error::DateOutOfRange(date));
        }
        if sequence_number > MAX_SEQUENCE_NUMBER {
            return Err(Error::SequenceOutOfRange(sequence_number));
        }
        Ok(Self {
            date,
            sequence: sequence_number,
        })
    }

    /// True iff `candidate` is a conforming serial: exactly 10 ASCII decimal
    /// digits whose first 8 form a valid calendar date, leap years included.
    ///
    /// Total over every `&str`; never panics, whatever the content.
    pub fn is_serial(candidate: &str) -> bool {
        Self::parse(candidate).is_ok()
    }

    /// Parse a conforming serial string into its date and sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASerial`] unless [`is_serial`][Self::is_serial]
    /// holds for `serial`.
    pub fn parse(serial: &str) -> Result<Self, Error> {
        let not_a_serial = || Error::NotASerial(serial.to_string());
        if serial.len() != SERIAL_LEN || !serial.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_a_serial());
        }
        // The two checks above make both slices char-boundary safe.
        let date = Date::parse(&serial[..SERIAL_START_LEN], &SERIAL_DATE_FORMAT)
            .map_err(|_| not_a_serial())?;
        let sequence = serial[SERIAL_START_LEN..]
            .parse::<u8>()
            .map_err(|_| not_a_serial())?;
        Ok(Self { date, sequence })
    }

    /// The serial that supersedes this one for an update at `at`.
    ///
    /// An `at` on a later UTC day yields that day with sequence `00`; an `at`
    /// on the same day increments the sequence; an `at` on an earlier day (a
    /// stale or skewed clock) keeps this serial's date and increments the
    /// sequence, so the published serial never moves backward. The receiver is
    /// unchanged either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceExhausted`] when the date would stay put and
    /// the sequence number is already [`MAX_SEQUENCE_NUMBER`].
    pub fn next(&self, at: OffsetDateTime) -> Result<Self, Error> {
        let today = at.to_offset(UtcOffset::UTC).date();
        if today > self.date {
            return Ok(Self {
                date: today,
                sequence: 0,
            });
        }
        if self.sequence >= MAX_SEQUENCE_NUMBER {
            return Err(Error::SequenceExhausted(self.date));
        }
        Ok(Self {
            date: self.date,
            sequence: self.sequence + 1,
        })
    }

    /// The serial's UTC calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The serial's sequence number, in `0..=99`.
    pub fn sequence_number(&self) -> u8 {
        self.sequence
    }

    /// The date rendered as the 8 digit `YYYYMMDD` prefix.
    pub fn serial_start(&self) -> String {
        // NB: unwrap is safe: a valid Date always formats with the fixed
        // [year][month][day] layout.
        self.date.format(&SERIAL_DATE_FORMAT).unwrap()
    }

    /// The full 10 digit serial string.
    pub fn serial(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SoaSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.serial_start(), self.sequence)
    }
}

impl FromStr for SoaSerial {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
