//! Helpers for sampling random integers.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;

use crate::modular::is_unit;

/// Samples an integer uniformly from `[0, 2^bits)`.
///
/// This is the `bits`-bit random integer used for masks, keys and exponents;
/// the top bit is not forced, so the result may be shorter than `bits`.
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    if bits == 0 {
        return BigUint::zero();
    }
    let len = bits.div_ceil(8) as usize;
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    let surplus = (len as u64 * 8 - bits) as u32;
    bytes[0] &= 0xff >> surplus;
    BigUint::from_bytes_be(&bytes)
}

/// Samples an integer uniformly from `[0, bound)`.
///
/// Uses rejection sampling over `bound.bits()`-bit strings, so each draw is
/// accepted with probability above one half.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    assert!(!bound.is_zero(), "cannot sample below zero");
    let bits = bound.bits();
    loop {
        let candidate = random_bits(rng, bits);
        if &candidate < bound {
            return candidate;
        }
    }
}

/// Samples an integer uniformly from `[low, high)`.
///
/// # Panics
///
/// Panics if the range is empty.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, low: &BigUint, high: &BigUint) -> BigUint {
    assert!(low < high, "cannot sample from an empty range");
    random_below(rng, &(high - low)) + low
}

/// Samples a unit of `Z*_n` uniformly from `[1, n)`.
///
/// Candidates are drawn uniformly and rejected until one is coprime to `n`.
/// Returns `None` if no unit was found within `max_attempts` draws or if
/// `[1, n)` is empty.
pub fn random_unit<R: Rng + ?Sized>(
    rng: &mut R,
    n: &BigUint,
    max_attempts: u64,
) -> Option<BigUint> {
    let one = BigUint::one();
    if *n <= one {
        return None;
    }
    for attempt in 0..max_attempts {
        let candidate = random_range(rng, &one, n);
        if is_unit(&candidate, n) {
            return Some(candidate);
        }
        tracing::trace!(attempt, "rejected non-unit candidate");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_bits_width() {
        let mut rng = StdRng::seed_from_u64(42);
        for bits in [1u64, 7, 8, 9, 31, 64, 65] {
            for _ in 0..50 {
                assert!(random_bits(&mut rng, bits).bits() <= bits);
            }
        }
        assert!(random_bits(&mut rng, 0).is_zero());
    }

    #[test]
    fn test_random_below_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = BigUint::from(1000u32);
        let mut seen_high = false;
        for _ in 0..500 {
            let x = random_below(&mut rng, &bound);
            assert!(x < bound);
            seen_high |= x >= BigUint::from(512u32);
        }
        assert!(seen_high);
    }

    #[test]
    #[should_panic]
    fn test_random_below_zero_panics() {
        let mut rng = StdRng::seed_from_u64(7);
        random_below(&mut rng, &BigUint::zero());
    }

    #[test]
    fn test_random_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let low = BigUint::from(10u32);
        let high = BigUint::from(13u32);
        for _ in 0..100 {
            let x = random_range(&mut rng, &low, &high);
            assert!(x >= low && x < high);
        }
    }

    #[test]
    fn test_random_unit() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = BigUint::from(23u32 * 47);
        for _ in 0..100 {
            let h = random_unit(&mut rng, &n, 1_000).expect("units are dense");
            assert!(is_unit(&h, &n));
            assert!(h < n && !h.is_zero());
        }
        assert!(random_unit(&mut rng, &BigUint::one(), 10).is_none());
        assert!(random_unit(&mut rng, &n, 0).is_none());
    }
}
