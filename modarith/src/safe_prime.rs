//! Candidate prime enumeration and safe-prime pools.

use num_bigint::BigUint;
use rand::Rng;

use crate::primality::is_prime_u64;

/// Enumerates the primes `p'` in `[2^(bits-2), 2^(bits-1) - 2)`.
///
/// This is the window from which Sophie Germain candidates for `bits`-bit
/// safe primes are drawn. Returns an empty vector for `bits < 3` or
/// `bits > 63`.
pub fn primes_in_window(bits: u32) -> Vec<u64> {
    if !(3..=63).contains(&bits) {
        return Vec::new();
    }
    let low = 1u64 << (bits - 2);
    let high = (1u64 << (bits - 1)) - 2;
    (low..high).filter(|&x| is_prime_u64(x)).collect()
}

/// The safe primes `p = 2p' + 1` reachable from one candidate window.
///
/// # Example
///
/// ```
/// use modarith::SafePrimePool;
///
/// let pool = SafePrimePool::new(8);
/// assert!(pool.candidate_count() >= 2);
/// assert_eq!(pool.safe_primes().collect::<Vec<_>>(), vec![167, 179, 227]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafePrimePool {
    bits: u32,
    candidate_count: usize,
    germain: Vec<u64>,
}

impl SafePrimePool {
    /// Builds the pool for `bits`-bit safe primes.
    pub fn new(bits: u32) -> Self {
        let candidates = primes_in_window(bits);
        let candidate_count = candidates.len();
        let germain: Vec<u64> = candidates
            .into_iter()
            .filter(|&p| is_prime_u64(2 * p + 1))
            .collect();

        tracing::debug!(
            bits,
            candidates = candidate_count,
            safe_primes = germain.len(),
            "enumerated safe-prime pool"
        );

        Self {
            bits,
            candidate_count,
            germain,
        }
    }

    /// Bit width the pool was built for.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of primes found in the candidate window, safe or not.
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Number of safe primes in the pool.
    pub fn len(&self) -> usize {
        self.germain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.germain.is_empty()
    }

    /// Iterates over the safe primes `2p' + 1` in ascending order.
    pub fn safe_primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.germain.iter().map(|&p| 2 * p + 1)
    }

    /// Draws a safe prime uniformly from the pool.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<BigUint> {
        if self.germain.is_empty() {
            return None;
        }
        let p = self.germain[rng.random_range(0..self.germain.len())];
        Some(BigUint::from(2 * p + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_window_bounds() {
        // [4, 6)
        assert_eq!(primes_in_window(4), vec![5]);
        // [8, 14)
        assert_eq!(primes_in_window(5), vec![11, 13]);
        assert!(primes_in_window(2).is_empty());
        assert!(primes_in_window(64).is_empty());
    }

    #[test]
    fn test_pool_contains_only_safe_primes() {
        let pool = SafePrimePool::new(12);
        assert!(pool.len() >= 2);
        for p in pool.safe_primes() {
            assert!(is_prime_u64(p));
            assert!(is_prime_u64((p - 1) / 2));
            assert!(p < 1 << 12);
            assert!(p > 1 << 11);
        }
    }

    #[test]
    fn test_small_pool() {
        // 11 -> 23 is safe, 13 -> 27 is not.
        let pool = SafePrimePool::new(5);
        assert_eq!(pool.candidate_count(), 2);
        assert_eq!(pool.safe_primes().collect::<Vec<_>>(), vec![23]);
    }

    #[test]
    fn test_sample() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = SafePrimePool::new(10);
        let members: Vec<u64> = pool.safe_primes().collect();
        for _ in 0..50 {
            let p = pool.sample(&mut rng).expect("pool is not empty");
            assert!(members.contains(&u64::try_from(&p).expect("fits in u64")));
        }
        // [4, 6) holds 5, and 2 * 5 + 1 = 11 is prime
        let single = SafePrimePool::new(4);
        assert_eq!(single.safe_primes().collect::<Vec<_>>(), vec![11]);
        assert_eq!(single.sample(&mut rng), Some(BigUint::from(11u32)));

        let empty = SafePrimePool::new(2);
        assert!(empty.is_empty());
        assert!(empty.sample(&mut rng).is_none());
    }

    #[test]
    fn test_pool_reports_its_width() {
        for bits in [3u32, 8, 12] {
            assert_eq!(SafePrimePool::new(bits).bits(), bits);
        }
    }
}
