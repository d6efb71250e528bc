//! Message canonicalization.

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::MESSAGE_BITS;
use crate::errors::GhrError;

/// A message accepted by the signing and verification operations.
///
/// Byte strings are read as big-endian integers, so `Bytes(b"\x01\x00")` and
/// `Integer(256)` denote the same message, as do byte strings that differ only
/// in leading zero bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Message {
    Bytes(Vec<u8>),
    Integer(BigInt),
}

impl Message {
    /// Maps the message to its canonical integer `M < 2^256`.
    ///
    /// Integers of 256 bits or more are replaced by the big-endian value of the
    /// SHA-256 digest of their minimal big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GhrError::InvalidMessageType`] for a negative integer.
    ///
    /// # Example
    ///
    /// ```
    /// use ghr::Message;
    /// use num_bigint::BigUint;
    ///
    /// let m = Message::from("hi").canonicalize().unwrap();
    /// assert_eq!(m, BigUint::from(0x6869u32));
    /// ```
    pub fn canonicalize(&self) -> Result<BigUint, GhrError> {
        let value = match self {
            Message::Bytes(bytes) => BigUint::from_bytes_be(bytes),
            Message::Integer(value) => {
                BigUint::try_from(value).map_err(|_| GhrError::InvalidMessageType)?
            }
        };
        Ok(compress(value))
    }
}

fn compress(value: BigUint) -> BigUint {
    if value.bits() < MESSAGE_BITS {
        return value;
    }
    tracing::trace!(bits = value.bits(), "compressing over-length message");
    let digest = Sha256::digest(value.to_bytes_be());
    BigUint::from_bytes_be(&digest)
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Bytes(text.as_bytes().to_vec())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Bytes(text.into_bytes())
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Message::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Message::Bytes(bytes)
    }
}

impl From<u64> for Message {
    fn from(value: u64) -> Self {
        Message::Integer(BigInt::from(value))
    }
}

impl From<BigUint> for Message {
    fn from(value: BigUint) -> Self {
        Message::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Message {
    fn from(value: BigInt) -> Self {
        Message::Integer(value)
    }
}
