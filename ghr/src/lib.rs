//! GHR-style RSA signatures with a chameleon-hash strong transform.
//!
//! This library implements a hash-and-sign signature scheme over an RSA
//! modulus built from two safe primes:
//! - A pseudorandom function `H` derives one prime exponent per prefix of the
//!   message's binary expansion
//! - The weak scheme signs by raising a public element `h` to the product of
//!   the inverses of those exponents modulo `phi(N)`
//! - The strong scheme signs an RSA-form chameleon hash `J^M * r^e mod N` of
//!   the message under a fresh randomizer `r`
//!
//! # Overview
//!
//! The weak scheme is existentially unforgeable and fully deterministic. The
//! strong scheme additionally prevents an adversary holding a valid
//! `(message, signature)` pair from producing a second signature on the same
//! message.
//!
//! # Example
//!
//! ```
//! use ghr::{KeyPair, Message};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let keys = KeyPair::generate(&mut rng, 12).expect("key generation failed");
//!
//! let message = Message::from("hello world");
//!
//! let weak = keys.private.weak_sign(&message, &keys.constants).expect("signing failed");
//! assert!(keys.public.weak_verify(&message, &weak, &keys.constants).expect("verification failed"));
//!
//! let strong = keys
//!     .private
//!     .strong_sign(&mut rng, &message, &keys.constants)
//!     .expect("signing failed");
//! assert!(keys.public.strong_verify(&message, &strong, &keys.constants).expect("verification failed"));
//! ```
//!
//! # Security Considerations
//!
//! - Key material is drawn from the caller's RNG; pass a CSPRNG such as
//!   `rand::rng()` for any real use
//! - The supported security parameters are tiny: the modulus is at most 48
//!   bits and offers no real security. The crate demonstrates the construction
//! - Primality is tested by exact trial division, which limits exponent sizes

mod chameleon;
mod config;
mod constants;
mod errors;
mod keys;
mod message;
mod prf;
mod scheme;
mod signatures;


pub use chameleon::chameleon_hash;
pub use config::KeyGenConfig;
pub use constants::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_SECURITY_PARAMETER, MAX_SECURITY_PARAMETER, MESSAGE_BITS,
    MIN_SECURITY_PARAMETER,
};
pub use errors::GhrError;
pub use keys::{KeyPair, PrivateKey, PublicKey, SchemeConstants};
pub use message::Message;
pub use prf::derive_prime;
pub use scheme::{generate_key_pair, strong_sign, strong_verify, weak_sign, weak_verify};
pub use signatures::{StrongSignature, WeakSignature};
