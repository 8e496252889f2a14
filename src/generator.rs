//! UUIDv1 generator and related types.

use crate::time_id::{is_valid_unix_ts_ms, MAX_TICKS};
use crate::{Error, TimeUuid, Uuid};

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`V1Generator`].
///
/// The source is expected to be cryptographically strong; node and clock identifiers drawn from
/// it are the only thing that keeps identifiers of independent generators apart.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the minimum system clock interface for [`V1Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> i64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> i64 {
        use std::time;
        match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            Err(err) => -(err.duration().as_millis() as i64),
        }
    }
}

/// An explicit node or clock identifier, given either as raw bytes or as ASCII text.
///
/// The value is checked against the field width (6 bytes for a node identifier, 2 bytes for a
/// clock identifier) when the identifier is generated. Text must be ASCII; each character
/// supplies one byte.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum IdBytes<'a> {
    /// Raw bytes.
    Bytes(&'a [u8]),

    /// ASCII text, such as a host name.
    Text(&'a str),
}

impl IdBytes<'_> {
    /// Resolves the value to a fixed-width field or returns `err`.
    fn resolve<const N: usize>(self, err: Error) -> Result<[u8; N], Error> {
        let bytes = match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) if text.is_ascii() => text.as_bytes(),
            Self::Text(_) => return Err(err),
        };
        <[u8; N]>::try_from(bytes).map_err(|_| err)
    }
}

impl<'a> From<&'a [u8]> for IdBytes<'a> {
    fn from(src: &'a [u8]) -> Self {
        Self::Bytes(src)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for IdBytes<'a> {
    fn from(src: &'a [u8; N]) -> Self {
        Self::Bytes(src)
    }
}

impl<'a> From<&'a str> for IdBytes<'a> {
    fn from(src: &'a str) -> Self {
        Self::Text(src)
    }
}

/// Optional inputs of [`V1Generator::generate_with`].
///
/// Every field left unset is filled in by the generator:
///
/// | Field        | When unset (or invalid)                                      |
/// | ------------ | ------------------------------------------------------------ |
/// | `unix_ts_ms` | Current time from the [`TimeSource`]                         |
/// | `ticks`      | Now-counter if the time is unset, else the explicit sequence |
/// | `node_id`    | 6 random bytes                                               |
/// | `clock_id`   | 2 random bytes                                               |
///
/// # Examples
///
/// ```rust
/// use timeuuid::Params;
///
/// let params = Params::new()
///     .unix_ts_ms(1_700_000_000_000)
///     .node_id("host01")
///     .clock_id(&[0x12u8, 0x34]);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct Params<'a> {
    unix_ts_ms: Option<i64>,
    ticks: Option<u16>,
    node_id: Option<IdBytes<'a>>,
    clock_id: Option<IdBytes<'a>>,
}

impl<'a> Params<'a> {
    /// Creates a parameter set with every field unset.
    pub const fn new() -> Self {
        Self {
            unix_ts_ms: None,
            ticks: None,
            node_id: None,
            clock_id: None,
        }
    }

    /// Sets the Unix timestamp in milliseconds.
    ///
    /// A value outside `MIN_UNIX_TS_MS..=MAX_UNIX_TS_MS` is treated as unset.
    pub const fn unix_ts_ms(mut self, unix_ts_ms: i64) -> Self {
        self.unix_ts_ms = Some(unix_ts_ms);
        self
    }

    /// Sets the sub-millisecond ticks.
    ///
    /// A value of `MAX_TICKS` or more is treated as unset.
    pub const fn ticks(mut self, ticks: u16) -> Self {
        self.ticks = Some(ticks);
        self
    }

    /// Sets the node identifier: 6 bytes or 6 ASCII characters.
    pub fn node_id(mut self, node_id: impl Into<IdBytes<'a>>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    /// Sets the clock identifier: 2 bytes or 2 ASCII characters.
    pub fn clock_id(mut self, clock_id: impl Into<IdBytes<'a>>) -> Self {
        self.clock_id = Some(clock_id.into());
        self
    }

    /// Sets the timestamp from a UTC date and time, truncated to milliseconds.
    #[cfg(feature = "chrono")]
    #[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
    pub fn datetime(self, datetime: chrono::DateTime<chrono::Utc>) -> Self {
        self.unix_ts_ms(datetime.timestamp_millis())
    }
}

/// Represents a UUIDv1 generator that encapsulates the tick counters and guarantees distinct
/// identifiers for calls within the same millisecond.
///
/// The generator keeps two independent counters:
///
/// 1.  The now-counter serves calls without an explicit time. The first call that observes a
///     new millisecond gets tick `0`; each further call within that millisecond gets the next
///     tick, wrapping from `9999` back to `0` without moving the timestamp.
/// 2.  The explicit-time sequence serves calls with an explicit time but no usable ticks. It
///     yields `0, 1, ..., 9999, 0, ...` regardless of the timestamp passed, so the 10,001st call
///     with the same timestamp, node, and clock identifiers reproduces the first identifier.
///
/// All methods take `&mut self`. The following example shares a generator across threads using
/// Rust's standard synchronization mechanism so that the counters stay consistent.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use timeuuid::V1Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V1Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V1Generator<R, T> {
    last_unix_ts_ms: i64,
    current_tick: u16,
    sequence: u16,

    /// The random number generator used by the generator.
    rand_source: R,

    /// The system clock used by the generator.
    time_source: T,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> V1Generator<R, StdSystemTime> {
    /// Creates a generator object with a specified random number generator and the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> V1Generator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            last_unix_ts_ms: 0,
            current_tick: 0,
            sequence: 0,
            rand_source,
            time_source,
        }
    }

    /// Generates a new UUIDv1 object from the current time with random node and clock
    /// identifiers.
    ///
    /// # Panics
    ///
    /// Panics if the [`TimeSource`] returns a timestamp outside
    /// `MIN_UNIX_TS_MS..=MAX_UNIX_TS_MS`.
    pub fn generate(&mut self) -> TimeUuid {
        let node_id = self.random_bytes();
        let clock_id = self.random_bytes();
        self.generate_core(None, None, clock_id, node_id)
    }

    /// Generates a new UUIDv1 object from optional field values.
    ///
    /// Explicit node and clock identifiers are validated before any counter moves, so a failed
    /// call leaves the generator state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeId`] or [`Error::InvalidClockId`] if an explicit identifier
    /// does not have the field width or is non-ASCII text.
    ///
    /// # Panics
    ///
    /// Panics if the time is taken from the [`TimeSource`] and it returns a timestamp outside
    /// `MIN_UNIX_TS_MS..=MAX_UNIX_TS_MS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::{Params, V1Generator};
    ///
    /// let mut g = V1Generator::with_rand08(rand::thread_rng());
    /// let params = Params::new().unix_ts_ms(1_700_000_000_000).node_id("host01");
    /// let x = g.generate_with(&params)?;
    /// let y = g.generate_with(&params)?;
    /// assert_eq!(x.unix_ts_ms(), 1_700_000_000_000);
    /// assert_eq!(y.ticks(), x.ticks() + 1);
    /// assert_eq!(x.node_id_text(), "host01");
    /// # Ok::<(), timeuuid::Error>(())
    /// ```
    pub fn generate_with(&mut self, params: &Params<'_>) -> Result<TimeUuid, Error> {
        let node_id = params
            .node_id
            .map(|e| e.resolve(Error::InvalidNodeId))
            .transpose()?;
        let clock_id = params
            .clock_id
            .map(|e| e.resolve(Error::InvalidClockId))
            .transpose()?;

        let node_id = node_id.unwrap_or_else(|| self.random_bytes());
        let clock_id = clock_id.unwrap_or_else(|| self.random_bytes());
        Ok(self.generate_core(params.unix_ts_ms, params.ticks, clock_id, node_id))
    }

    /// Generates a new UUIDv4 object utilizing the random number generator inside.
    pub fn generate_v4(&mut self) -> Uuid {
        Uuid::from_random_bytes_v4(self.random_bytes())
    }

    /// Resolves the timestamp and ticks and packs the fields.
    fn generate_core(
        &mut self,
        unix_ts_ms: Option<i64>,
        ticks: Option<u16>,
        clock_id: [u8; 2],
        node_id: [u8; 6],
    ) -> TimeUuid {
        let unix_ts_ms = unix_ts_ms.filter(|&ts| {
            let valid = is_valid_unix_ts_ms(ts);
            if !valid {
                log::warn!("timestamp {} ms out of range; using current time", ts);
            }
            valid
        });
        let ticks = ticks.filter(|&t| t < MAX_TICKS);

        let (unix_ts_ms, ticks) = match (unix_ts_ms, ticks) {
            (Some(ts), Some(ticks)) => (ts, ticks),
            (Some(ts), None) => (ts, self.next_sequence()),
            (None, Some(ticks)) => (self.now(), ticks),
            (None, None) => self.next_now_tick(),
        };
        TimeUuid::from_fields(unix_ts_ms, ticks, clock_id, node_id)
    }

    /// Advances the now-counter and returns the current timestamp with its tick.
    fn next_now_tick(&mut self) -> (i64, u16) {
        let unix_ts_ms = self.now();
        if unix_ts_ms > self.last_unix_ts_ms {
            self.last_unix_ts_ms = unix_ts_ms;
            self.current_tick = 0;
        } else {
            self.current_tick += 1;
            if self.current_tick >= MAX_TICKS {
                log::trace!("tick counter wrapped within {} ms", self.last_unix_ts_ms);
                self.current_tick = 0;
            }
        }
        (unix_ts_ms, self.current_tick)
    }

    /// Returns the current value of the explicit-time sequence and advances it.
    fn next_sequence(&mut self) -> u16 {
        let ticks = self.sequence;
        self.sequence += 1;
        if self.sequence >= MAX_TICKS {
            log::trace!("explicit-time tick sequence wrapped");
            self.sequence = 0;
        }
        ticks
    }

    fn now(&mut self) -> i64 {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        assert!(
            is_valid_unix_ts_ms(unix_ts_ms),
            "clock returned timestamp out of range: {} ms",
            unix_ts_ms
        );
        unix_ts_ms
    }

    fn random_bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut bytes = [0u8; N];
        self.rand_source.fill_bytes(&mut bytes);
        bytes
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use timeuuid::V1Generator;
///
/// V1Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V1Generator<R, T> {
    type Item = TimeUuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for V1Generator<R, T> {}
