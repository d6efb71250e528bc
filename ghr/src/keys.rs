//! Key generation and the signing and verifying keys of the GHR scheme.

use modarith::{SafePrimePool, random_below, random_bits, random_unit};
use num_bigint::BigUint;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chameleon::{strong_sign_integer, strong_verify_integer};
use crate::config::KeyGenConfig;
use crate::errors::GhrError;
use crate::message::Message;
use crate::signatures::{StrongSignature, WeakSignature, sign_integer, verify_integer};

/// A public verifying key `(N, h, c, K)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) h: BigUint,
    pub(crate) c: BigUint,
    pub(crate) k: BigUint,
}

/// A secret signing key `(p, q, h, c, K)`.
///
/// `h`, `c` and `K` duplicate the public key since signing needs them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) h: BigUint,
    pub(crate) c: BigUint,
    pub(crate) k: BigUint,
}

/// Public constants `(l, J, e)` shared by signer and verifier.
///
/// `l` is the bit length of the derived exponents; `J` and `e` parameterize
/// the chameleon hash of the strong scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeConstants {
    pub(crate) l: u64,
    pub(crate) j: BigUint,
    pub(crate) e: BigUint,
}

/// A freshly generated key pair together with its scheme constants.
///
/// # Example
///
/// ```
/// use ghr::{KeyPair, Message};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let keys = KeyPair::generate(&mut rng, 10).unwrap();
///
/// let msg = Message::from("hello");
/// let sig = keys.private.weak_sign(&msg, &keys.constants).unwrap();
/// assert!(keys.public.weak_verify(&msg, &sig, &keys.constants).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
    pub constants: SchemeConstants,
}

impl KeyPair {
    /// Generates a key pair whose safe primes have `sec_param` bits.
    ///
    /// Uses the default attempt budget; see [`KeyPair::generate_with_config`].
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, sec_param: u32) -> Result<Self, GhrError> {
        Self::generate_with_config(rng, &KeyGenConfig::new(sec_param))
    }

    /// Generates a key pair.
    ///
    /// 1. Enumerate the primes `p'` in `[2^(s-2), 2^(s-1) - 2)` and keep those
    ///    for which `2p' + 1` is prime
    /// 2. Draw distinct safe primes `p` and `q` from that pool
    /// 3. Set `N = pq`, `phi = (p-1)(q-1)` and `l = floor(log2(phi))`
    /// 4. Draw `J` uniformly from `[0, N)` and `e` as an `l`-bit integer
    /// 5. Draw `h` uniformly from `Z*_N`
    /// 6. Draw `K` as an `s`-bit integer and `c` as an `l`-bit integer
    ///
    /// The randomness source must be a CSPRNG for any real use.
    ///
    /// # Errors
    ///
    /// - [`GhrError::InsufficientPrimes`] if the window holds fewer than two
    ///   primes, or fewer than two of them give safe primes
    /// - [`GhrError::UnsupportedSecurityParameter`] above
    ///   [`MAX_SECURITY_PARAMETER`](crate::MAX_SECURITY_PARAMETER)
    /// - [`GhrError::AttemptBudgetExhausted`] if sampling `q` or `h` exceeds
    ///   `config.max_attempts`
    pub fn generate_with_config<R: Rng + ?Sized>(
        rng: &mut R,
        config: &KeyGenConfig,
    ) -> Result<Self, GhrError> {
        config.validate()?;
        let sec_param = config.sec_param;

        let pool = SafePrimePool::new(sec_param);
        if pool.candidate_count() < 2 {
            return Err(GhrError::InsufficientPrimes {
                sec_param,
                found: pool.candidate_count(),
            });
        }
        if pool.len() < 2 {
            return Err(GhrError::InsufficientPrimes {
                sec_param,
                found: pool.len(),
            });
        }

        let (p, q) = sample_distinct_pair(rng, &pool, config.max_attempts)?;
        let n = &p * &q;
        let phi = (&p - 1u32) * (&q - 1u32);
        // phi = 4p'q' > 0
        let l = phi.bits() - 1;

        let j = random_below(rng, &n);
        let e = random_bits(rng, l);
        let h = random_unit(rng, &n, config.max_attempts).ok_or(
            GhrError::AttemptBudgetExhausted {
                search: "unit sampling",
                attempts: config.max_attempts,
            },
        )?;
        let k = random_bits(rng, u64::from(sec_param));
        let c = random_bits(rng, l);

        tracing::debug!(sec_param, modulus_bits = n.bits(), l, "generated key pair");

        Ok(Self {
            public: PublicKey {
                n,
                h: h.clone(),
                c: c.clone(),
                k: k.clone(),
            },
            private: PrivateKey { p, q, h, c, k },
            constants: SchemeConstants { l, j, e },
        })
    }
}

fn sample_distinct_pair<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &SafePrimePool,
    max_attempts: u64,
) -> Result<(BigUint, BigUint), GhrError> {
    let exhausted = GhrError::AttemptBudgetExhausted {
        search: "safe prime sampling",
        attempts: max_attempts,
    };
    let p = pool.sample(rng).ok_or(exhausted.clone())?;
    for attempt in 0..max_attempts {
        let q = pool.sample(rng).ok_or(exhausted.clone())?;
        if q != p {
            return Ok((p, q));
        }
        tracing::trace!(attempt, "rejected q == p");
    }
    Err(exhausted)
}

impl PublicKey {
    /// The RSA modulus `N`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The target element `h` of `Z*_N`.
    pub fn h(&self) -> &BigUint {
        &self.h
    }

    /// The PRF mask `c`.
    pub fn c(&self) -> &BigUint {
        &self.c
    }

    /// The PRF key `K`.
    pub fn k(&self) -> &BigUint {
        &self.k
    }

    /// Verifies a weak signature on a message.
    ///
    /// Returns `Ok(false)` for an invalid signature, including one outside
    /// `[0, N)`.
    ///
    /// # Errors
    ///
    /// Returns [`GhrError::InvalidMessageType`] if the message cannot be
    /// canonicalized.
    pub fn weak_verify(
        &self,
        msg: &Message,
        sig: &WeakSignature,
        constants: &SchemeConstants,
    ) -> Result<bool, GhrError> {
        let m = msg.canonicalize()?;
        verify_integer(self, &m, &sig.0, constants.l)
    }

    /// Verifies a strong signature on a message.
    ///
    /// Returns `Ok(false)` for an invalid signature, including a signature or
    /// randomizer outside `[0, N)`.
    pub fn strong_verify(
        &self,
        msg: &Message,
        sig: &StrongSignature,
        constants: &SchemeConstants,
    ) -> Result<bool, GhrError> {
        let m = msg.canonicalize()?;
        strong_verify_integer(self, &m, sig, constants)
    }
}

impl PrivateKey {
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn h(&self) -> &BigUint {
        &self.h
    }

    pub fn c(&self) -> &BigUint {
        &self.c
    }

    pub fn k(&self) -> &BigUint {
        &self.k
    }

    /// The RSA modulus `N = pq`.
    pub fn modulus(&self) -> BigUint {
        &self.p * &self.q
    }

    /// Euler's totient `phi(N) = (p-1)(q-1)`.
    pub fn phi(&self) -> BigUint {
        (&self.p - 1u32) * (&self.q - 1u32)
    }

    /// Derives the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            n: self.modulus(),
            h: self.h.clone(),
            c: self.c.clone(),
            k: self.k.clone(),
        }
    }

    /// Signs a message with the weak scheme.
    ///
    /// Deterministic: the same key and message always give the same signature.
    ///
    /// # Errors
    ///
    /// - [`GhrError::InvalidMessageType`] if the message cannot be canonicalized
    /// - [`GhrError::DegenerateExponent`] if a derived exponent divides `phi(N)`
    pub fn weak_sign(
        &self,
        msg: &Message,
        constants: &SchemeConstants,
    ) -> Result<WeakSignature, GhrError> {
        let m = msg.canonicalize()?;
        sign_integer(self, &m, constants.l).map(WeakSignature)
    }

    /// Signs a message with the strong scheme.
    ///
    /// Draws a fresh chameleon hash randomizer from `rng`, so repeated calls
    /// give different signatures.
    ///
    /// # Errors
    ///
    /// Same as [`PrivateKey::weak_sign`].
    pub fn strong_sign<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &Message,
        constants: &SchemeConstants,
    ) -> Result<StrongSignature, GhrError> {
        let m = msg.canonicalize()?;
        strong_sign_integer(rng, self, &m, constants)
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(sk: &PrivateKey) -> Self {
        sk.public_key()
    }
}

impl SchemeConstants {
    /// Bit length `l` of the derived exponents.
    pub fn l(&self) -> u64 {
        self.l
    }

    /// Chameleon hash base `J`.
    pub fn j(&self) -> &BigUint {
        &self.j
    }

    /// Chameleon hash exponent `e`.
    pub fn e(&self) -> &BigUint {
        &self.e
    }
}
