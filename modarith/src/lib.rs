//! Number-theory helpers over arbitrary-precision integers.
//!
//! This crate provides the integer machinery needed by small RSA-style
//! constructions:
//! - an exact trial-division primality predicate with a `u64` fast path
//! - enumeration of candidate primes in a bit window and the derived pool of
//!   safe primes `p = 2p' + 1`
//! - uniform sampling of `BigUint` values below a bound, of fixed-width random
//!   bit strings and of units of `Z*_N`
//! - modular inverses and related helpers
//!
//! Trial division costs `O(sqrt(n))`, so the predicate is only meant for the
//! word-sized numbers these constructions test, never for a full modulus.

mod modular;
mod primality;
mod random;
mod safe_prime;

pub use modular::{is_unit, mod_inverse};
pub use primality::{is_prime, is_prime_u64};
pub use random::{random_below, random_bits, random_range, random_unit};
pub use safe_prime::{primes_in_window, SafePrimePool};
