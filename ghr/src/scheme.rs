//! Free-function entry points for the five scheme operations.
//!
//! These mirror the methods on [`KeyPair`], [`PrivateKey`] and [`PublicKey`]
//! for callers that prefer to pass keys explicitly.

use rand::Rng;

use crate::errors::GhrError;
use crate::keys::{KeyPair, PrivateKey, PublicKey, SchemeConstants};
use crate::message::Message;
use crate::signatures::{StrongSignature, WeakSignature};

/// Generates a key pair for the given security parameter.
pub fn generate_key_pair<R: Rng + ?Sized>(rng: &mut R, sec_param: u32) -> Result<KeyPair, GhrError> {
    KeyPair::generate(rng, sec_param)
}

/// Signs `msg` with the weak, deterministic scheme.
pub fn weak_sign(
    sk: &PrivateKey,
    msg: &Message,
    constants: &SchemeConstants,
) -> Result<WeakSignature, GhrError> {
    sk.weak_sign(msg, constants)
}

/// Verifies a weak signature.
pub fn weak_verify(
    pk: &PublicKey,
    msg: &Message,
    sig: &WeakSignature,
    constants: &SchemeConstants,
) -> Result<bool, GhrError> {
    pk.weak_verify(msg, sig, constants)
}

/// Signs `msg` with the strong scheme, drawing the randomizer from `rng`.
pub fn strong_sign<R: Rng + ?Sized>(
    rng: &mut R,
    sk: &PrivateKey,
    msg: &Message,
    constants: &SchemeConstants,
) -> Result<StrongSignature, GhrError> {
    sk.strong_sign(rng, msg, constants)
}

/// Verifies a strong signature.
pub fn strong_verify(
    pk: &PublicKey,
    msg: &Message,
    sig: &StrongSignature,
    constants: &SchemeConstants,
) -> Result<bool, GhrError> {
    pk.strong_verify(msg, sig, constants)
}
