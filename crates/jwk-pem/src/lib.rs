//! Convert JSON Web Keys to PEM encoded public keys
//!
//! This crate provides:
//! - JWK (JSON Web Key) types per RFC 7517 for RSA, EC and OKP public keys
//! - Decoding into typed public keys (RSA, P-256, P-384, P-521, secp256k1, Ed25519, X25519)
//! - PKIX SubjectPublicKeyInfo DER and `PUBLIC KEY` PEM encoding
//!
//! Symmetric (`oct`) keys and JWKs carrying private key material are rejected.

mod convert;
pub mod error;
mod jwk;
mod key_type;
mod public_key;

#[cfg(feature = "rsa")]
pub mod rsa;

#[cfg(feature = "p256")]
pub mod p256;

#[cfg(feature = "p384")]
pub mod p384;

#[cfg(feature = "p521")]
pub mod p521;

#[cfg(feature = "k256")]
pub mod secp256k1;

#[cfg(feature = "ed25519")]
pub mod ed25519;

#[cfg(feature = "x25519")]
pub mod x25519;

pub use convert::{ConvertedKey, convert};
pub use error::JwkError;
pub use jwk::{ECParams, JWK, OctetParams, Params, RSAParams, SymmetricParams};
pub use key_type::KeyType;
pub use public_key::{PEM_LABEL, PublicKey};
