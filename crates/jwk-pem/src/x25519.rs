//! X25519 public key decoding

use crate::{OctetParams, PublicKey, error::Result};

/// Decodes an X25519 public key from JWK OKP parameters
/// Every 32 byte string is a valid Montgomery u-coordinate
pub fn public_key(params: &OctetParams) -> Result<PublicKey> {
    let bytes = params.public_bytes::<32>()?;

    Ok(PublicKey::X25519(x25519_dalek::PublicKey::from(bytes)))
}
