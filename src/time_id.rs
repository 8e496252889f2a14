//! Time-based (version 1) identifier type and its field codec.

#[cfg(not(feature = "std"))]
use core as std;

use std::{cmp, fmt, str};

use crate::{Error, Uuid};

/// The number of 100-nanosecond ticks in a millisecond; valid tick values are `0..MAX_TICKS`.
pub const MAX_TICKS: u16 = 10_000;

/// Milliseconds between the Gregorian calendar reform (1582-10-15) and the Unix epoch.
pub const GREGORIAN_OFFSET_MS: i64 = 12_219_292_800_000;

/// The smallest Unix timestamp in milliseconds that a [`TimeUuid`] can encode.
pub const MIN_UNIX_TS_MS: i64 = -GREGORIAN_OFFSET_MS;

/// The largest Unix timestamp in milliseconds that a [`TimeUuid`] can encode with any tick value.
pub const MAX_UNIX_TS_MS: i64 =
    ((1 << 60) - MAX_TICKS as i64) / MAX_TICKS as i64 - GREGORIAN_OFFSET_MS;

const MIN_NODE_ID: [u8; 6] = [0x80; 6];
const MIN_CLOCK_ID: [u8; 2] = [0x80; 2];
const MAX_NODE_ID: [u8; 6] = [0x7f; 6];
const MAX_CLOCK_ID: [u8; 2] = [0x7f; 2];

/// Represents a time-based UUID (version 1).
///
/// A `TimeUuid` stores the same 16 bytes as [`Uuid`] and shares its text form, but its fields
/// carry a 60-bit count of 100-nanosecond intervals since 1582-10-15, a 2-byte clock
/// identifier, and a 6-byte node identifier. The timestamp is split into a millisecond part and
/// a sub-millisecond "ticks" part in `0..10_000`.
///
/// Unlike [`Uuid`], `TimeUuid` orders chronologically: by the 60-bit timestamp first and the raw
/// bytes second. Byte-wise order would not follow time because the RFC 4122 layout puts the low
/// timestamp bits first.
///
/// # Examples
///
/// ```rust
/// use timeuuid::TimeUuid;
///
/// let x = TimeUuid::from_fields(0, 0, [0xff; 2], [0xff; 6]);
/// assert_eq!(x.to_string(), "13814000-1dd2-11b2-bfff-ffffffffffff");
/// assert_eq!(x.timestamp_and_ticks(), (0, 0));
///
/// let y = "13814000-1dd2-11b2-bfff-ffffffffffff".parse::<TimeUuid>()?;
/// assert_eq!(x, y);
/// # Ok::<(), timeuuid::ParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TimeUuid(Uuid);

impl TimeUuid {
    /// Wraps a 16-byte array as is, without touching the version or variant bits.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Wraps a byte slice as is, failing with [`Error::InvalidLength`] unless the slice is
    /// exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Uuid::from_slice(bytes).map(Self)
    }

    /// Creates a UUIDv1 from field values.
    ///
    /// `unix_ts_ms` is the Unix timestamp in milliseconds and `ticks` the count of 100-nanosecond
    /// intervals within that millisecond. The top two bits of `clock_id[0]` are replaced by the
    /// variant bits.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not within `MIN_UNIX_TS_MS..=MAX_UNIX_TS_MS` or `ticks` is not
    /// less than `MAX_TICKS`.
    pub const fn from_fields(
        unix_ts_ms: i64,
        ticks: u16,
        clock_id: [u8; 2],
        node_id: [u8; 6],
    ) -> Self {
        if !is_valid_unix_ts_ms(unix_ts_ms) || ticks >= MAX_TICKS {
            panic!("invalid field value");
        }

        let timestamp =
            (unix_ts_ms + GREGORIAN_OFFSET_MS) as u64 * MAX_TICKS as u64 + ticks as u64;
        Self::from_timestamp_100ns(timestamp, clock_id, node_id)
    }

    /// Packs a 60-bit Gregorian timestamp with clock and node identifiers.
    const fn from_timestamp_100ns(timestamp: u64, clock_id: [u8; 2], node_id: [u8; 6]) -> Self {
        debug_assert!(timestamp < 1 << 60);
        Self(Uuid::from_bytes([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | ((timestamp >> 56) as u8 & 0x0f),
            (timestamp >> 48) as u8,
            0x80 | (clock_id[0] & 0x3f),
            clock_id[1],
            node_id[0],
            node_id[1],
            node_id[2],
            node_id[3],
            node_id[4],
            node_id[5],
        ]))
    }

    /// Returns the smallest identifier for a timestamp, for use as an inclusive lower bound of a
    /// time range query.
    ///
    /// The node and clock identifiers are filled with `0x80` bytes, which sort first when bytes
    /// are compared as signed integers. `ticks` defaults to `0`; a value of `MAX_TICKS` or more
    /// is treated as absent. The bound is computed without a generator, so it never draws ticks
    /// from or advances the explicit-time sequence of [`V1Generator`](crate::V1Generator).
    ///
    /// Returns `None` if `unix_ts_ms` is not within `MIN_UNIX_TS_MS..=MAX_UNIX_TS_MS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::{TimeUuid, MAX_UNIX_TS_MS};
    ///
    /// let lower = TimeUuid::min(1_700_000_000_000, None).unwrap();
    /// assert_eq!(lower.ticks(), 0);
    /// assert_eq!(TimeUuid::min(MAX_UNIX_TS_MS + 1, None), None);
    /// ```
    pub fn min(unix_ts_ms: i64, ticks: Option<u16>) -> Option<Self> {
        let ticks = ticks.filter(|&t| t < MAX_TICKS).unwrap_or(0);
        is_valid_unix_ts_ms(unix_ts_ms)
            .then(|| Self::from_fields(unix_ts_ms, ticks, MIN_CLOCK_ID, MIN_NODE_ID))
    }

    /// Returns the largest identifier for a timestamp, for use as an inclusive upper bound of a
    /// time range query.
    ///
    /// The node and clock identifiers are filled with `0x7f` bytes, which sort last when bytes
    /// are compared as signed integers. `ticks` defaults to `MAX_TICKS - 1`; a value of
    /// `MAX_TICKS` or more is treated as absent. Like [`TimeUuid::min`], it leaves the
    /// explicit-time sequence of [`V1Generator`](crate::V1Generator) untouched.
    ///
    /// Returns `None` if `unix_ts_ms` is not within `MIN_UNIX_TS_MS..=MAX_UNIX_TS_MS`.
    pub fn max(unix_ts_ms: i64, ticks: Option<u16>) -> Option<Self> {
        let ticks = ticks.filter(|&t| t < MAX_TICKS).unwrap_or(MAX_TICKS - 1);
        is_valid_unix_ts_ms(unix_ts_ms)
            .then(|| Self::from_fields(unix_ts_ms, ticks, MAX_CLOCK_ID, MAX_NODE_ID))
    }

    /// Returns the underlying [`Uuid`].
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure. See [`Uuid::encode`].
    pub fn encode(&self) -> impl std::ops::Deref<Target = str> + fmt::Display {
        self.0.encode()
    }

    /// Returns the raw 60-bit timestamp: 100-nanosecond intervals since 1582-10-15.
    pub const fn timestamp_100ns(&self) -> u64 {
        let b = self.as_bytes();
        ((b[6] as u64 & 0x0f) << 56)
            | (b[7] as u64) << 48
            | (b[4] as u64) << 40
            | (b[5] as u64) << 32
            | (b[0] as u64) << 24
            | (b[1] as u64) << 16
            | (b[2] as u64) << 8
            | b[3] as u64
    }

    /// Returns the Unix timestamp in milliseconds and the sub-millisecond ticks.
    ///
    /// This exactly inverts [`TimeUuid::from_fields`].
    pub const fn timestamp_and_ticks(&self) -> (i64, u16) {
        let timestamp = self.timestamp_100ns();
        (
            (timestamp / MAX_TICKS as u64) as i64 - GREGORIAN_OFFSET_MS,
            (timestamp % MAX_TICKS as u64) as u16,
        )
    }

    /// Returns the Unix timestamp in milliseconds.
    pub const fn unix_ts_ms(&self) -> i64 {
        self.timestamp_and_ticks().0
    }

    /// Returns the sub-millisecond ticks in `0..MAX_TICKS`.
    pub const fn ticks(&self) -> u16 {
        self.timestamp_and_ticks().1
    }

    /// Returns the 6-byte node identifier.
    pub const fn node_id(&self) -> [u8; 6] {
        let b = self.as_bytes();
        [b[10], b[11], b[12], b[13], b[14], b[15]]
    }

    /// Returns the node identifier decoded as 7-bit ASCII.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn node_id_text(&self) -> String {
        self.node_id().iter().map(|&b| char::from(b & 0x7f)).collect()
    }

    /// Returns the 2-byte clock identifier as stored, including the variant bits.
    pub const fn clock_id(&self) -> [u8; 2] {
        let b = self.as_bytes();
        [b[8], b[9]]
    }

    /// Returns the identifier one tick earlier with the same node and clock identifiers, or
    /// `None` if `self` already holds the earliest encodable timestamp.
    ///
    /// At tick `0` this borrows from the millisecond: the result is one millisecond earlier with
    /// tick `9999`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::TimeUuid;
    ///
    /// let x = TimeUuid::from_fields(1_000, 0, [0x12, 0x34], *b"node01");
    /// let p = x.predecessor().unwrap();
    /// assert_eq!(p.timestamp_and_ticks(), (999, 9_999));
    /// assert_eq!(p.node_id(), x.node_id());
    /// assert_eq!(p.clock_id(), x.clock_id());
    /// ```
    pub fn predecessor(&self) -> Option<Self> {
        self.timestamp_100ns()
            .checked_sub(1)
            .map(|timestamp| Self::from_timestamp_100ns(timestamp, self.clock_id(), self.node_id()))
    }

    /// Returns `true` if `self` has an earlier timestamp than `other`.
    pub const fn is_before(&self, other: &Self) -> bool {
        self.timestamp_100ns() < other.timestamp_100ns()
    }

    /// Returns `true` if `self` has a later timestamp than `other`.
    pub const fn is_after(&self, other: &Self) -> bool {
        self.timestamp_100ns() > other.timestamp_100ns()
    }

    /// Compares two identifiers from the earliest to the latest, for use with `sort_by`.
    pub fn compare_ascending(a: &Self, b: &Self) -> cmp::Ordering {
        a.cmp(b)
    }

    /// Compares two identifiers from the latest to the earliest, for use with `sort_by`.
    pub fn compare_descending(a: &Self, b: &Self) -> cmp::Ordering {
        b.cmp(a)
    }
}

/// Returns `true` if `unix_ts_ms` can be encoded with any tick value.
pub(crate) const fn is_valid_unix_ts_ms(unix_ts_ms: i64) -> bool {
    MIN_UNIX_TS_MS <= unix_ts_ms && unix_ts_ms <= MAX_UNIX_TS_MS
}

impl Ord for TimeUuid {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.timestamp_100ns()
            .cmp(&other.timestamp_100ns())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TimeUuid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<Uuid> for TimeUuid {
    fn eq(&self, other: &Uuid) -> bool {
        &self.0 == other
    }
}

impl PartialEq<TimeUuid> for Uuid {
    fn eq(&self, other: &TimeUuid) -> bool {
        self == &other.0
    }
}

impl fmt::Display for TimeUuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl str::FromStr for TimeUuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// The version field is not checked, so the string of any UUID is accepted.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        src.parse().map(Self)
    }
}

impl From<Uuid> for TimeUuid {
    fn from(src: Uuid) -> Self {
        Self(src)
    }
}

impl From<TimeUuid> for Uuid {
    fn from(src: TimeUuid) -> Self {
        src.0
    }
}

impl From<TimeUuid> for [u8; 16] {
    fn from(src: TimeUuid) -> Self {
        src.0.into()
    }
}

impl TryFrom<&[u8]> for TimeUuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for TimeUuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<Uuid> for TimeUuid {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::TimeUuid;
    use crate::Error;

    impl From<TimeUuid> for String {
        fn from(src: TimeUuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for TimeUuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
mod chrono_support {
    use super::TimeUuid;
    use chrono::{DateTime, Utc};

    impl TimeUuid {
        /// Returns the millisecond part of the timestamp as a UTC date and time.
        pub fn datetime(&self) -> Option<DateTime<Utc>> {
            DateTime::from_timestamp_millis(self.unix_ts_ms())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::TimeUuid;
    use crate::id::serde_support::VisitorImpl;
    use serde::{Deserializer, Serializer};

    impl serde::Serialize for TimeUuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serde::Serialize::serialize(&self.0, serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for TimeUuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl).map(Self)
            } else {
                deserializer.deserialize_bytes(VisitorImpl).map(Self)
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{TimeUuid, MAX_TICKS, MAX_UNIX_TS_MS, MIN_UNIX_TS_MS};
    use crate::{Error, Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((i64, u16, [u8; 2], [u8; 6]), &'static str)] {
        &[
            (
                (MIN_UNIX_TS_MS, 0, [0x00; 2], [0x00; 6]),
                "00000000-0000-1000-8000-000000000000",
            ),
            (
                (0, 0, [0xff; 2], [0xff; 6]),
                "13814000-1dd2-11b2-bfff-ffffffffffff",
            ),
            (
                (MAX_UNIX_TS_MS, MAX_TICKS - 1, [0x3f, 0xff], [0xab; 6]),
                "ffffe4bf-ffff-1fff-bfff-abababababab",
            ),
            (
                (1_594_821_664_047, 5_891, [0x08, 0x02], [0x08, 0x06, 0x07, 0x05, 0x03, 0x09]),
                "9f2952f3-c6a3-11ea-8802-080607050309",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for ((ts, ticks, clock_id, node_id), text) in prepare_cases() {
            let e = TimeUuid::from_fields(*ts, *ticks, *clock_id, *node_id);
            assert_eq!(&e.encode() as &str, *text);
            assert_eq!(text.parse(), Ok(e));
            assert_eq!(e.timestamp_and_ticks(), (*ts, *ticks));
            assert_eq!(e.unix_ts_ms(), *ts);
            assert_eq!(e.ticks(), *ticks);
            assert_eq!(e.node_id(), *node_id);
            assert_eq!(e.clock_id()[1], clock_id[1]);
            assert_eq!(e.as_uuid().version(), Some(1));
            assert_eq!(e.as_uuid().variant(), Variant::Var10);
        }
    }

    /// Panics on out-of-range timestamp
    #[test]
    #[should_panic(expected = "invalid field value")]
    fn panics_on_out_of_range_timestamp() {
        TimeUuid::from_fields(MIN_UNIX_TS_MS - 1, 0, [0; 2], [0; 6]);
    }

    /// Panics on out-of-range ticks
    #[test]
    #[should_panic(expected = "invalid field value")]
    fn panics_on_out_of_range_ticks() {
        TimeUuid::from_fields(0, MAX_TICKS, [0; 2], [0; 6]);
    }

    /// Wraps trusted buffers without bit fixups
    #[test]
    fn wraps_trusted_buffers_without_bit_fixups() {
        let e = TimeUuid::from_bytes([0xff; 16]);
        assert_eq!(e, Uuid::MAX);
        assert_eq!(TimeUuid::from_slice(&[0xff; 16]), Ok(e));
        assert_eq!(TimeUuid::from_slice(&[0xff; 12]), Err(Error::InvalidLength(12)));
        assert_eq!(
            TimeUuid::try_from(&[0xff; 20][..]),
            Err(Error::InvalidLength(20))
        );
    }

    /// Accepts strings of other versions without validation
    #[test]
    fn accepts_strings_of_other_versions_without_validation() {
        let e = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
            .parse::<TimeUuid>()
            .unwrap();
        assert_eq!(e.as_uuid().version(), Some(4));
        assert_eq!(
            "2ca4b2ce-6c13-40d4-bccf-37d22282f6f".parse::<TimeUuid>(),
            Err(Error::InvalidFormat)
        );
    }

    /// Decodes node identifier as text
    #[test]
    #[cfg(feature = "std")]
    fn decodes_node_identifier_as_text() {
        let e = TimeUuid::from_fields(0, 0, *b"ab", *b"host01");
        assert_eq!(e.node_id_text(), "host01");
        assert_eq!(e.node_id(), *b"host01");
        assert_eq!(e.clock_id(), [0x80 | (b'a' & 0x3f), b'b']);
    }

    /// Returns predecessor within and across millisecond
    #[test]
    fn returns_predecessor_within_and_across_millisecond() {
        let e = TimeUuid::from_fields(1_000_000, 0, [0x81, 0x02], [1, 2, 3, 4, 5, 6]);
        let p = e.predecessor().unwrap();
        assert_eq!(p.timestamp_and_ticks(), (999_999, 9_999));
        assert_eq!(p.node_id(), e.node_id());
        assert_eq!(p.clock_id(), e.clock_id());
        assert!(p.is_before(&e));

        let e = TimeUuid::from_fields(1_000_000, 42, [0x81, 0x02], [1, 2, 3, 4, 5, 6]);
        let p = e.predecessor().unwrap();
        assert_eq!(p.timestamp_and_ticks(), (1_000_000, 41));
        assert_eq!(p.node_id(), e.node_id());
        assert_eq!(p.clock_id(), e.clock_id());

        let e = TimeUuid::from_fields(MIN_UNIX_TS_MS, 0, [0x81, 0x02], [1, 2, 3, 4, 5, 6]);
        assert_eq!(e.predecessor(), None);
    }

    /// Builds min and max boundaries
    #[test]
    fn builds_min_and_max_boundaries() {
        let ts = 1_700_000_000_000;
        let min = TimeUuid::min(ts, None).unwrap();
        let max = TimeUuid::max(ts, None).unwrap();
        assert_eq!(min.node_id(), [0x80; 6]);
        assert_eq!(max.node_id(), [0x7f; 6]);
        assert_eq!(min.clock_id(), [0x80, 0x80]);
        assert_eq!(max.clock_id(), [0xbf, 0x7f]);
        assert_eq!(min.timestamp_and_ticks(), (ts, 0));
        assert_eq!(max.timestamp_and_ticks(), (ts, MAX_TICKS - 1));
        assert_eq!(TimeUuid::min(ts, Some(7)).unwrap().ticks(), 7);
        assert_eq!(TimeUuid::max(ts, Some(7)).unwrap().ticks(), 7);
        assert_eq!(TimeUuid::min(ts, Some(MAX_TICKS)).unwrap().ticks(), 0);

        let inner = TimeUuid::from_fields(ts, 5_000, [0xaa; 2], [0x55; 6]);
        assert!(min < inner && inner < max);
        assert!(max.is_before(&TimeUuid::min(ts + 1, None).unwrap()));
    }

    /// Returns no boundary for out-of-range timestamp
    #[test]
    fn returns_no_boundary_for_out_of_range_timestamp() {
        for ts in [i64::MIN, MIN_UNIX_TS_MS - 1, MAX_UNIX_TS_MS + 1, i64::MAX] {
            assert_eq!(TimeUuid::min(ts, None), None);
            assert_eq!(TimeUuid::max(ts, None), None);
            assert_eq!(TimeUuid::min(ts, Some(0)), None);
            assert_eq!(TimeUuid::max(ts, Some(MAX_TICKS - 1)), None);
        }

        let lower = TimeUuid::min(MIN_UNIX_TS_MS, None).unwrap();
        let upper = TimeUuid::max(MAX_UNIX_TS_MS, None).unwrap();
        assert_eq!(lower.timestamp_and_ticks(), (MIN_UNIX_TS_MS, 0));
        assert_eq!(upper.timestamp_and_ticks(), (MAX_UNIX_TS_MS, MAX_TICKS - 1));
    }

    /// Orders chronologically rather than byte-wise
    #[test]
    fn orders_chronologically_rather_than_byte_wise() {
        // time_low comes first in the byte layout: 0x13814000 vs. 0x00000150
        let earlier = TimeUuid::from_fields(0, 0, [0; 2], [0; 6]);
        let later = TimeUuid::from_fields(396_773, 0, [0; 2], [0; 6]);
        assert!(earlier.as_uuid() > later.as_uuid());
        assert!(earlier < later);
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
        assert!(!later.is_before(&earlier));
    }

    /// Agrees between comparators and before/after predicates
    #[test]
    fn agrees_between_comparators_and_before_after_predicates() {
        use std::cmp::Ordering;

        let mut ids: Vec<TimeUuid> = (0..500i64)
            .map(|i| {
                let ts = 1_600_000_000_000 + (i * 7_919) % 101;
                let ticks = ((i * 104_729) % MAX_TICKS as i64) as u16;
                TimeUuid::from_fields(ts, ticks, [i as u8; 2], [(i * 3) as u8; 6])
            })
            .collect();

        ids.sort_by(TimeUuid::compare_ascending);
        for w in ids.windows(2) {
            assert!(!w[1].is_before(&w[0]));
            if w[0].timestamp_and_ticks() != w[1].timestamp_and_ticks() {
                assert!(w[0].is_before(&w[1]));
                assert!(w[1].is_after(&w[0]));
            }
        }

        ids.sort_by(TimeUuid::compare_descending);
        for w in ids.windows(2) {
            assert!(!w[1].is_after(&w[0]));
            assert_ne!(TimeUuid::compare_descending(&w[0], &w[1]), Ordering::Greater);
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for ((ts, ticks, clock_id, node_id), _) in prepare_cases() {
            let e = TimeUuid::from_fields(*ts, *ticks, *clock_id, *node_id);
            assert_eq!(TimeUuid::from(Uuid::from(e)), e);
            assert_eq!(TimeUuid::from_bytes(<[u8; 16]>::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(TimeUuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(String::from(e), Uuid::from(e).to_string());
        }
    }

    /// Compares equal to plain UUID in both directions
    #[test]
    fn compares_equal_to_plain_uuid_in_both_directions() {
        let e = TimeUuid::from_fields(1_594_821_664_047, 5_891, [8, 2], [8, 6, 7, 5, 3, 9]);
        let u = Uuid::from(e);
        assert!(e == u);
        assert!(u == e);
        assert!(e != Uuid::NIL);
        assert!(Uuid::NIL != e);
    }

    /// Round-trips random buffers through string representation
    #[test]
    fn round_trips_random_buffers_through_string_representation() {
        use rand::RngCore;

        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            let e = TimeUuid::from_bytes(bytes);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.as_bytes(), &bytes);
        }
    }

    /// Converts to date and time
    #[test]
    #[cfg(feature = "chrono")]
    fn converts_to_date_and_time() {
        use chrono::Datelike;

        let e = TimeUuid::from_fields(MIN_UNIX_TS_MS, 0, [0; 2], [0; 6]);
        let dt = e.datetime().unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (1582, 10, 15));
        assert_eq!(dt.timestamp_millis(), MIN_UNIX_TS_MS);
    }
}
