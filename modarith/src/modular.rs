//! Modular arithmetic helpers.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Computes `a^-1 mod modulus`.
///
/// Returns `None` if `modulus` is zero or `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }
    a.modinv(modulus)
}

/// Returns `true` if `x` is a unit modulo `n`, i.e. `gcd(x, n) == 1`.
pub fn is_unit(x: &BigUint, n: &BigUint) -> bool {
    x.gcd(n).is_one()
}
