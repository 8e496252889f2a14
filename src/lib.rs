//! An implementation of RFC 4122 time-based (version 1) and random (version 4) UUIDs
//!
//! ```rust
//! use timeuuid::{time_uuid, uuid4};
//!
//! let uuid = time_uuid();
//! println!("{}", uuid); // e.g. "9f2952f3-c6a3-11ea-8802-080607050309"
//! println!("{:?}", uuid.timestamp_and_ticks()); // Unix ms and sub-ms ticks
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This implementation produces version 1 identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_id          |             node_id           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            node_id                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp, split into `time_low`, `time_mid`, and `time_hi`, counts
//!   100-nanosecond intervals since 1582-10-15. It is computed as
//!   `(unix_ts_ms + 12_219_292_800_000) * 10_000 + ticks`.
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14 remaining bits of the 2-byte `clock_id` and the 48-bit `node_id` are either
//!   supplied by the caller (e.g., a host name in ASCII) or filled with random bytes.
//!
//! The wall clock only has millisecond resolution, so the generator fills the sub-millisecond
//! `ticks` (`0..10_000`) from a counter. For calls without an explicit time, the counter restarts
//! at zero whenever the clock moves to a new millisecond and otherwise increments, so up to
//! 10,000 identifiers per millisecond get distinct timestamps. For calls with an explicit time,
//! a separate sequence cycles through all 10,000 tick values.
//!
//! [`TimeUuid`] orders by timestamp, not by bytes, and provides [`TimeUuid::min`] and
//! [`TimeUuid::max`] for range query boundaries.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables the system clock, `String` conversions, and `std::error::Error`.
//! - `global_gen` (implies `std`) enables the process-wide default generator behind
//!   [`time_uuid()`], [`time_uuid_with()`], and [`uuid4()`].
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Uuid`] and [`TimeUuid`].
//! - `uuid` enables conversions between [`Uuid`] and `uuid::Uuid`.
//! - `chrono` enables conversions between timestamps and `chrono::DateTime<Utc>`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, ParseError};

mod id;
pub use id::{Uuid, Variant};

mod time_id;
pub use time_id::{TimeUuid, GREGORIAN_OFFSET_MS, MAX_TICKS, MAX_UNIX_TS_MS, MIN_UNIX_TS_MS};

pub mod generator;
pub use generator::{IdBytes, Params, RandSource, TimeSource, V1Generator};

#[cfg(feature = "std")]
pub use generator::StdSystemTime;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{time_uuid, time_uuid_with, uuid4};
