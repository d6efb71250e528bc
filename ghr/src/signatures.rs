//! Signature types and the bit-chain sign/verify core.
//!
//! A message integer `M` with binary digits `b_1 ... b_t` (no padding, and the
//! single digit `0` for `M = 0`) is signed through the chain of its prefixes:
//! prefix `i` is the integer `b_1 ... b_i`, and its exponent is
//! `e_i = H(l, K, c, prefix_i)`. The signature is
//!
//! ```text
//! sigma = h ^ (e_1^-1 * ... * e_t^-1 mod phi(N)) mod N
//! ```
//!
//! and verification checks `sigma ^ (e_1 * ... * e_t) == h (mod N)`. Every
//! `e_i` is a prime coprime to `phi(N)`, so both exponents cancel by Euler's
//! theorem.

use modarith::mod_inverse;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::GhrError;
use crate::keys::{PrivateKey, PublicKey};
use crate::prf::derive_prime;

/// A signature of the weak (existentially unforgeable) scheme.
///
/// Wraps an integer in `[0, N)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeakSignature(pub BigUint);

/// A signature of the strong (strongly unforgeable) scheme.
///
/// The pair `(signature, r)` satisfies the weak verification equation on the
/// chameleon hash `J^M * r^e mod N` of the message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrongSignature {
    /// The bit-chain signature on the chameleon hash, in `[0, N)`
    pub signature: BigUint,
    /// The chameleon hash randomizer, in `[0, N)`
    pub r: BigUint,
}

impl From<BigUint> for WeakSignature {
    fn from(value: BigUint) -> Self {
        WeakSignature(value)
    }
}

/// Iterates over the prefixes of the minimal binary expansion of `m`.
fn prefixes(m: &BigUint) -> impl Iterator<Item = BigUint> + '_ {
    let len = m.bits().max(1);
    (1..=len).map(move |i| m >> (len - i))
}

/// Signs the canonical integer `m`.
pub(crate) fn sign_integer(sk: &PrivateKey, m: &BigUint, l: u64) -> Result<BigUint, GhrError> {
    let n = sk.modulus();
    let phi = sk.phi();

    let mut exponent = BigUint::one();
    for (position, prefix) in prefixes(m).enumerate() {
        let e = derive_prime(l, &sk.k, &sk.c, &prefix)?;
        if (&phi % &e).is_zero() {
            tracing::debug!(position, "derived exponent divides phi(N)");
            return Err(GhrError::DegenerateExponent { position });
        }
        let inverse = mod_inverse(&e, &phi).ok_or(GhrError::DegenerateExponent { position })?;
        exponent = exponent * inverse % &phi;
    }

    Ok(sk.h.modpow(&exponent, &n))
}

/// Verifies `signature` on the canonical integer `m`.
///
/// The exponents are applied one at a time instead of multiplying them out,
/// since the verifier does not know `phi(N)`.
pub(crate) fn verify_integer(
    pk: &PublicKey,
    m: &BigUint,
    signature: &BigUint,
    l: u64,
) -> Result<bool, GhrError> {
    if signature >= &pk.n {
        return Ok(false);
    }

    let mut acc = signature.clone();
    for prefix in prefixes(m) {
        let e = derive_prime(l, &pk.k, &pk.c, &prefix)?;
        acc = acc.modpow(&e, &pk.n);
    }

    Ok(acc == pk.h)
}
