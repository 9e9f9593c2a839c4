//! Date and time utilities.

use std::{cmp::Ordering, fmt, marker::PhantomData};

use derive_more::{Debug, Display, Error};
use time::{format_description::well_known::Rfc3339, UtcOffset};

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// UTC date and time with a microsecond precision.
///
/// `Of` describes what this moment is of (e.g. `(Listing, Creation)`), so
/// creation and modification moments of different entities cannot be mixed
/// up without an explicit [`DateTimeOf::coerce()`].
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// A [`DateTime`] representing the Unix epoch.
    pub const UNIX_EPOCH: Self = Self {
        inner: time::OffsetDateTime::UNIX_EPOCH,
        _of: PhantomData,
    };

    /// Creates a new [`DateTime`] representing the current date and time.
    #[must_use]
    pub fn now() -> Self {
        Self::truncated(time::OffsetDateTime::now_utc())
    }

    /// Creates a new [`DateTime`] from the provided Unix timestamp in seconds.
    ///
    /// [`None`] is returned if the timestamp is out of range.
    #[must_use]
    pub fn from_unix_timestamp(timestamp: i64) -> Option<Self> {
        time::OffsetDateTime::from_unix_timestamp(timestamp)
            .ok()
            .map(Self::truncated)
    }

    /// Returns the Unix timestamp of this [`DateTime`] in seconds.
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.inner.unix_timestamp()
    }

    /// Parses a [`DateTime`] from the provided [RFC 3339] string, converting
    /// it to UTC.
    ///
    /// # Errors
    ///
    /// If the string is not a valid [RFC 3339] date and time.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    pub fn from_rfc3339(input: &str) -> Result<Self, ParseError> {
        time::OffsetDateTime::parse(input, &Rfc3339)
            .map(|dt| Self::truncated(dt.to_offset(UtcOffset::UTC)))
            .map_err(ParseError)
    }

    /// Formats this [`DateTime`] as an [RFC 3339] string.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.inner.format(&Rfc3339).unwrap_or_else(|e| {
            panic!("cannot format `DateTime` as RFC 3339: {e}")
        })
    }

    /// Coerces one kind of [`DateTime`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateTimeOf<NewOf> {
        DateTimeOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }

    /// Drops the sub-microsecond part of the provided moment.
    fn truncated(inner: time::OffsetDateTime) -> Self {
        let micros = inner.nanosecond() / 1_000 * 1_000;
        Self {
            inner: inner.replace_nanosecond(micros).unwrap_or(inner),
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`DateTime`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid RFC 3339 date and time: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Display for DateTimeOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateTimeOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateTimeOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
