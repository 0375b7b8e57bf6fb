//! P-256 (secp256r1/prime256v1) public key decoding

use crate::{
    ECParams, JwkError, PublicKey,
    error::{DECODE_PUBLIC_KEY, Result},
};

/// Size of each affine coordinate in bytes
const COORDINATE_LEN: usize = 32;

/// Decodes a P-256 public key from JWK EC parameters
/// Points that aren't on the curve are rejected
pub fn public_key(params: &ECParams) -> Result<PublicKey> {
    let point = params.sec1_point(COORDINATE_LEN)?;

    let key = p256::PublicKey::from_sec1_bytes(&point).map_err(|_| {
        JwkError::decode(
            DECODE_PUBLIC_KEY,
            "P-256 public key isn't a valid curve point",
        )
    })?;

    Ok(PublicKey::P256(key))
}
