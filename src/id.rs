#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops, str};

use crate::Error;

/// Represents a Universally Unique IDentifier.
///
/// This is the plain 128-bit value shared by every UUID version. Equality, hashing, and ordering
/// are byte-wise. The value is `Copy` and exposes no mutating method, so the bytes returned by
/// [`Uuid::as_bytes`] can never be changed through an existing identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from a byte slice, failing with [`Error::InvalidLength`] unless the
    /// slice is exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::{Error, Uuid};
    ///
    /// let x = Uuid::from_slice(&[0xff; 16])?;
    /// assert_eq!(x, Uuid::MAX);
    /// assert_eq!(Uuid::from_slice(&[0xff; 15]), Err(Error::InvalidLength(15)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidLength(bytes.len()))
    }

    /// Creates a UUIDv4 from 16 random bytes by overwriting the version and variant bits.
    pub const fn from_random_bytes_v4(mut bytes: [u8; 16]) -> Self {
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    ///
    /// For convenience, this method reports [`Variant::Nil`] or [`Variant::Max`] if `self`
    /// represents the Nil or Max UUID, although the Nil and Max UUIDs are technically subsumed
    /// under the variants `0b0` and `0b111`, respectively.
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if self == &Self::NIL => Variant::Nil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            0xe..=0xf if self == &Self::MAX => Variant::Max,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the variant
    /// field value of `0b10`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::Uuid;
    ///
    /// let x = "13814000-1dd2-11b2-bfff-ffffffffffff".parse::<Uuid>()?;
    /// assert_eq!(x.version(), Some(1));
    /// assert_eq!(Uuid::NIL.version(), None);
    /// # Ok::<(), timeuuid::ParseError>(())
    /// ```
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::Uuid;
    ///
    /// let x = "13814000-1DD2-11B2-BFFF-FFFFFFFFFFFF".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "13814000-1dd2-11b2-bfff-ffffffffffff");
    /// assert_eq!(format!("{}", y), "13814000-1dd2-11b2-bfff-ffffffffffff");
    /// # Ok::<(), timeuuid::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(pos == 36 && buffer.is_ascii());
        UuidStr(buffer)
    }
}

/// The reserved variants of UUIDs.
///
/// Identifiers generated by this crate always carry [`Variant::Var10`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// Nil UUID.
    Nil,

    /// The variant field value of `0b0`.
    Var0,

    /// The variant field value of `0b10` (RFC 4122).
    Var10,

    /// The variant field value of `0b110`.
    Var110,

    /// The reserved variant field value of `0b111`.
    VarReserved,

    /// Max UUID.
    Max,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Only the exact 36-character hyphenated form is accepted. Hexadecimal digits may be upper
    /// or lower case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: Error = Error::InvalidFormat;
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        // SAFETY: the buffer only ever holds ASCII hex digits and hyphens
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::Uuid;
    use crate::Error;

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub(crate) mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    /// Visitor that accepts either representation of [`Uuid`].
    pub(crate) struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

}
