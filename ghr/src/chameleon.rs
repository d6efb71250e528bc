//! RSA-form chameleon hash and the weak-to-strong transform.
//!
//! Signing `x = J^M * r^e mod N` for a fresh randomizer `r` instead of `M`
//! itself turns the weak scheme into a strongly unforgeable one: a second
//! signature on an already-signed message would require a collision in the
//! chameleon hash.

use modarith::random_below;
use num_bigint::BigUint;
use rand::Rng;

use crate::errors::GhrError;
use crate::keys::{PrivateKey, PublicKey, SchemeConstants};
use crate::signatures::{StrongSignature, sign_integer, verify_integer};

/// Computes `(J^m mod N) * (r^e mod N) mod N`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn chameleon_hash(
    m: &BigUint,
    r: &BigUint,
    j: &BigUint,
    e: &BigUint,
    n: &BigUint,
) -> BigUint {
    (j.modpow(m, n) * r.modpow(e, n)) % n
}

pub(crate) fn strong_sign_integer<R: Rng + ?Sized>(
    rng: &mut R,
    sk: &PrivateKey,
    m: &BigUint,
    constants: &SchemeConstants,
) -> Result<StrongSignature, GhrError> {
    let n = sk.modulus();
    let r = random_below(rng, &n);
    let x = chameleon_hash(m, &r, &constants.j, &constants.e, &n);
    let signature = sign_integer(sk, &x, constants.l)?;
    Ok(StrongSignature { signature, r })
}

pub(crate) fn strong_verify_integer(
    pk: &PublicKey,
    m: &BigUint,
    sig: &StrongSignature,
    constants: &SchemeConstants,
) -> Result<bool, GhrError> {
    if sig.r >= pk.n {
        return Ok(false);
    }
    let x = chameleon_hash(m, &sig.r, &constants.j, &constants.e, &pk.n);
    verify_integer(pk, &x, &sig.signature, constants.l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chameleon_hash_small_values() {
        let n = BigUint::from(23u32 * 47);
        let j = BigUint::from(5u32);
        let e = BigUint::from(3u32);
        // 5^2 * 4^3 = 25 * 64 = 1600 = 1081 + 519
        let x = chameleon_hash(&BigUint::from(2u32), &BigUint::from(4u32), &j, &e, &n);
        assert_eq!(x, BigUint::from(519u32));
    }

    #[test]
    fn test_chameleon_hash_is_reduced() {
        let n = BigUint::from(1081u32);
        for m in 0u32..20 {
            for r in [0u32, 1, 500, 1080] {
                let x = chameleon_hash(
                    &BigUint::from(m),
                    &BigUint::from(r),
                    &BigUint::from(1000u32),
                    &BigUint::from(17u32),
                    &n,
                );
                assert!(x < n);
            }
        }
    }
}
