//! Ed25519 public key decoding

use ed25519_dalek::{PUBLIC_KEY_LENGTH, VerifyingKey};

use crate::{
    JwkError, OctetParams, PublicKey,
    error::{DECODE_PUBLIC_KEY, Result},
};

/// Decodes an Ed25519 public key from JWK OKP parameters
/// The compressed point must decompress onto the curve
pub fn public_key(params: &OctetParams) -> Result<PublicKey> {
    let bytes = params.public_bytes::<PUBLIC_KEY_LENGTH>()?;

    let key = VerifyingKey::from_bytes(&bytes).map_err(|e| {
        JwkError::decode(
            DECODE_PUBLIC_KEY,
            format!("Couldn't create Ed25519 VerifyingKey: {e}"),
        )
    })?;

    Ok(PublicKey::Ed25519(key))
}
