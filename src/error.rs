//! Error type shared by identifier construction, parsing, and generation.

/// Error constructing, parsing, or generating an identifier.
///
/// Every variant reports caller input that can never become a valid identifier; none of them is
/// transient, so retrying the same call with the same input always fails the same way.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// A byte buffer that should hold an identifier is not 16 bytes long.
    #[error("invalid length: expected 16 bytes, found {0}")]
    InvalidLength(usize),

    /// A string is not the 8-4-4-4-12 hexadecimal representation.
    #[error("invalid string representation")]
    InvalidFormat,

    /// An explicit node identifier is not 6 bytes (or 6 ASCII characters) long.
    #[error("node identifier must be 6 bytes")]
    InvalidNodeId,

    /// An explicit clock identifier is not 2 bytes (or 2 ASCII characters) long.
    #[error("clock identifier must be 2 bytes")]
    InvalidClockId,
}

/// Error parsing an invalid string representation of UUID.
///
/// Parsing only ever yields [`Error::InvalidFormat`].
pub type ParseError = Error;
