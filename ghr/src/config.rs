//! Key generation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_SECURITY_PARAMETER, MAX_SECURITY_PARAMETER,
    MIN_SECURITY_PARAMETER,
};
use crate::errors::GhrError;

/// Parameters for [`KeyPair::generate_with_config`](crate::KeyPair::generate_with_config).
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Example
///
/// ```
/// use ghr::KeyGenConfig;
///
/// let config = KeyGenConfig::new(16).with_max_attempts(10_000);
/// assert_eq!(config.sec_param, 16);
/// assert_eq!(config.max_attempts, 10_000);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyGenConfig {
    /// Bit length of the safe primes `p` and `q`.
    pub sec_param: u32,
    /// Budget for each rejection-sampling loop (distinct `q`, unit `h`).
    pub max_attempts: u64,
}

impl KeyGenConfig {
    pub fn new(sec_param: u32) -> Self {
        Self {
            sec_param,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), GhrError> {
        if self.sec_param > MAX_SECURITY_PARAMETER {
            return Err(GhrError::UnsupportedSecurityParameter {
                sec_param: self.sec_param,
                max: MAX_SECURITY_PARAMETER,
            });
        }
        if self.sec_param < MIN_SECURITY_PARAMETER {
            return Err(GhrError::InsufficientPrimes {
                sec_param: self.sec_param,
                found: 0,
            });
        }
        Ok(())
    }
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            sec_param: DEFAULT_SECURITY_PARAMETER,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
