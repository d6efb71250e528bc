//! Constants used by the GHR signature scheme implementation.

/// Smallest security parameter for which candidate primes are enumerated.
pub const MIN_SECURITY_PARAMETER: u32 = 3;

/// Largest supported security parameter.
///
/// Key generation enumerates every integer of the candidate window and the
/// derived exponents are tested by trial division, so both costs grow about
/// fourfold per extra bit. At 24 bits key generation and signing take around
/// a second each in release builds.
pub const MAX_SECURITY_PARAMETER: u32 = 24;

/// Security parameter used by [`KeyGenConfig::default`](crate::KeyGenConfig).
pub const DEFAULT_SECURITY_PARAMETER: u32 = 12;

/// Default budget for each rejection-sampling loop in key generation.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1 << 20;

/// Canonical messages are strictly below `2^MESSAGE_BITS`.
///
/// Longer messages are compressed with SHA-256, which bounds the exponent
/// chain to at most this many PRF invocations.
pub const MESSAGE_BITS: u64 = 256;

/// Maximum number of counters tried by the prime derivation function.
pub(crate) const PRF_MAX_ATTEMPTS: u64 = 1 << 24;

/// Domain separation prefix for the prime derivation stream.
pub(crate) const PRF_DOMAIN: &[u8] = b"ghr/prime-derivation/v1";
