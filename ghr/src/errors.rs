//! Error types for the GHR signature scheme.

use thiserror::Error;

/// Errors that can occur during key generation, signing and verification.
///
/// Every error is terminal for the call that produced it: no partial key pair
/// or signature is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GhrError {
    /// The candidate window for the requested security parameter holds fewer
    /// than two usable primes. The caller must choose a larger parameter.
    #[error("security parameter {sec_param} yields only {found} usable primes, at least 2 are required")]
    InsufficientPrimes { sec_param: u32, found: usize },

    /// The security parameter is larger than the candidate enumeration supports.
    #[error("security parameter {sec_param} exceeds the supported maximum of {max}")]
    UnsupportedSecurityParameter { sec_param: u32, max: u32 },

    /// The message is neither a byte string nor a non-negative integer.
    #[error("message must be a byte string or a non-negative integer")]
    InvalidMessageType,

    /// A derived exponent divides `phi(N)` and has no inverse.
    ///
    /// `position` is the zero-based index of the message prefix whose exponent
    /// failed. This happens with negligible probability for realistic keys.
    #[error("exponent derived for prefix {position} divides phi(N)")]
    DegenerateExponent { position: usize },

    /// A bounded retry loop ran out of attempts.
    #[error("{search} gave up after {attempts} attempts")]
    AttemptBudgetExhausted { search: &'static str, attempts: u64 },
}
