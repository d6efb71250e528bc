//! Deterministic primality testing by trial division.

use num_bigint::BigUint;
use num_integer::{Integer, Roots};
use num_traits::{ToPrimitive, Zero};

/// Returns `true` if `n` is prime.
///
/// Every prime above 3 has the form `6k +/- 1`, so after ruling out 2 and 3
/// only those divisors up to `floor(sqrt(n))` are tried.
pub fn is_prime_u64(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let limit = Roots::sqrt(&n);
    let mut f = 5u64;
    while f <= limit {
        if n % f == 0 || n % (f + 2) == 0 {
            return false;
        }
        f += 6;
    }
    true
}

/// Returns `true` if `n` is prime.
///
/// The answer is exact. Values that fit in a `u64` take the word-sized path;
/// larger values fall back to `BigUint` division, which is only practical for
/// a few dozen bits beyond that.
///
/// # Example
///
/// ```
/// use modarith::is_prime;
/// use num_bigint::BigUint;
///
/// assert!(is_prime(&BigUint::from(4093u32)));
/// assert!(!is_prime(&BigUint::from(4095u32)));
/// ```
pub fn is_prime(n: &BigUint) -> bool {
    if let Some(small) = n.to_u64() {
        return is_prime_u64(small);
    }
    if n.is_even() || (n % 3u32).is_zero() {
        return false;
    }

    let limit = n.sqrt();
    let mut f = BigUint::from(5u32);
    while f <= limit {
        if (n % &f).is_zero() {
            return false;
        }
        let g = &f + 2u32;
        if (n % &g).is_zero() {
            return false;
        }
        f += 6u32;
    }
    true
}
