//! The prime derivation function `H`.
//!
//! `H(l, K, c, z)` maps a PRF key `K`, an `l`-bit mask `c` and a message
//! prefix `z` to an odd prime below `2^l`. Signer and verifier must obtain the
//! same prime from the same arguments, so the function is pure: each call
//! builds its own bit stream and shares no generator state with other calls.
//!
//! For counter `i = 1, 2, ...` the stream is SHA-256 in counter mode over
//!
//! ```text
//! PRF_DOMAIN || enc(K) || i (u64 BE) || enc(z) || block (u32 BE)
//! ```
//!
//! where `enc(x)` is the `u32` big-endian length of the minimal big-endian
//! bytes of `x` followed by those bytes. The first `l` bits of the stream are
//! XORed with `c`; the first counter yielding a prime other than 2 wins.

use modarith::is_prime;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::constants::{PRF_DOMAIN, PRF_MAX_ATTEMPTS};
use crate::errors::GhrError;

/// Derives the exponent for prefix `z`.
///
/// The result is always an odd prime strictly greater than 2 and strictly
/// below `2^l`.
///
/// # Example
///
/// ```
/// use ghr::derive_prime;
/// use num_bigint::BigUint;
///
/// let k = BigUint::from(0xbeefu32);
/// let c = BigUint::from(0x1234u32);
/// let z = BigUint::from(5u32);
///
/// let first = derive_prime(20, &k, &c, &z).unwrap();
/// let second = derive_prime(20, &k, &c, &z).unwrap();
/// assert_eq!(first, second);
/// assert!(first.bit(0));
/// ```
pub fn derive_prime(l: u64, k: &BigUint, c: &BigUint, z: &BigUint) -> Result<BigUint, GhrError> {
    let two = BigUint::from(2u8);
    for attempt in 1..=PRF_MAX_ATTEMPTS {
        let candidate = prf_bits(l, k, attempt, z) ^ c;
        if candidate != two && is_prime(&candidate) {
            return Ok(candidate);
        }
    }
    Err(GhrError::AttemptBudgetExhausted {
        search: "prime derivation",
        attempts: PRF_MAX_ATTEMPTS,
    })
}

/// Draws the first `l` bits of the stream for `(k, attempt, z)`.
pub(crate) fn prf_bits(l: u64, k: &BigUint, attempt: u64, z: &BigUint) -> BigUint {
    let len = l.div_ceil(8) as usize;
    if len == 0 {
        return BigUint::default();
    }

    let mut prefix = Sha256::new();
    prefix.update(PRF_DOMAIN);
    absorb_integer(&mut prefix, k);
    prefix.update(attempt.to_be_bytes());
    absorb_integer(&mut prefix, z);

    let mut stream = Vec::with_capacity(len.next_multiple_of(32));
    let mut block = 0u32;
    while stream.len() < len {
        let mut hasher = prefix.clone();
        hasher.update(block.to_be_bytes());
        stream.extend_from_slice(&hasher.finalize());
        block += 1;
    }
    stream.truncate(len);

    let surplus = (len as u64 * 8 - l) as u32;
    stream[0] &= 0xff >> surplus;
    BigUint::from_bytes_be(&stream)
}

fn absorb_integer(hasher: &mut Sha256, value: &BigUint) {
    let bytes = value.to_bytes_be();
    hasher.update((bytes.len() as u32).to_be_bytes());
    hasher.update(&bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_derive_prime_is_deterministic() {
        let k = BigUint::from(1234u32);
        let c = BigUint::from(0x5a5a5u32);
        for z in 0u32..32 {
            let z = BigUint::from(z);
            let a = derive_prime(21, &k, &c, &z).expect("derive");
            let b = derive_prime(21, &k, &c, &z).expect("derive");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_derive_prime_is_odd_prime_below_bound() {
        let k = BigUint::from(99u32);
        let c = BigUint::from(0x3ffu32);
        let bound = BigUint::one() << 14u32;
        for z in 0u32..64 {
            let e = derive_prime(14, &k, &c, &BigUint::from(z)).expect("derive");
            assert!(is_prime(&e));
            assert!(e.bit(0));
            assert!(e > BigUint::from(2u8));
            assert!(e < bound);
        }
    }

    #[test]
    fn test_prf_bits_width() {
        let k = BigUint::from(7u32);
        let z = BigUint::from(3u32);
        for l in [1u64, 8, 13, 31, 255, 300, 513] {
            for attempt in 1..8 {
                assert!(prf_bits(l, &k, attempt, &z).bits() <= l);
            }
        }
        assert_eq!(prf_bits(0, &k, 1, &z), BigUint::default());
    }

    #[test]
    fn test_prf_bits_depends_on_every_input() {
        let k = BigUint::from(7u32);
        let z = BigUint::from(3u32);
        let base = prf_bits(64, &k, 1, &z);
        assert_ne!(base, prf_bits(64, &BigUint::from(8u32), 1, &z));
        assert_ne!(base, prf_bits(64, &k, 2, &z));
        assert_ne!(base, prf_bits(64, &k, 1, &BigUint::from(4u32)));
    }

    #[test]
    fn test_encoding_is_unambiguous() {
        // Digit concatenation would map (K=1, z=23) and (K=12, z=3) to the
        // same seed; the length-prefixed encoding keeps them apart.
        let a = prf_bits(64, &BigUint::from(1u32), 1, &BigUint::from(23u32));
        let b = prf_bits(64, &BigUint::from(12u32), 1, &BigUint::from(3u32));
        assert_ne!(a, b);
    }
}
