//! secp256k1 public key decoding

use crate::{
    ECParams, JwkError, PublicKey,
    error::{DECODE_PUBLIC_KEY, Result},
};

/// Size of each affine coordinate in bytes
const COORDINATE_LEN: usize = 32;

/// Decodes a secp256k1 public key from JWK EC parameters
/// Points that aren't on the curve are rejected
pub fn public_key(params: &ECParams) -> Result<PublicKey> {
    let point = params.sec1_point(COORDINATE_LEN)?;

    let key = k256::PublicKey::from_sec1_bytes(&point).map_err(|_| {
        JwkError::decode(
            DECODE_PUBLIC_KEY,
            "secp256k1 public key isn't a valid curve point",
        )
    })?;

    Ok(PublicKey::Secp256k1(key))
}
