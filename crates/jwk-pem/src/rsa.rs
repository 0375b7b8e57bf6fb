//! RSA public key decoding

use rsa::{BigUint, RsaPublicKey};

use crate::{
    JwkError, PublicKey, RSAParams,
    error::{DECODE_PUBLIC_KEY, Result},
    jwk::decode_member,
};

/// Largest modulus accepted, in bits
pub const MAX_MODULUS_BITS: usize = 16384;

/// Decodes an RSA public key from the JWK modulus (`n`) and exponent (`e`)
pub fn public_key(params: &RSAParams) -> Result<PublicKey> {
    let n = decode_member("n", &params.n)?;
    let e = decode_member("e", &params.e)?;

    if n.is_empty() || e.is_empty() {
        return Err(JwkError::decode(
            DECODE_PUBLIC_KEY,
            "RSA modulus and exponent can't be empty",
        ));
    }

    let key = RsaPublicKey::new_with_max_size(
        BigUint::from_bytes_be(&n),
        BigUint::from_bytes_be(&e),
        MAX_MODULUS_BITS,
    )
    .map_err(|err| {
        JwkError::decode(
            DECODE_PUBLIC_KEY,
            format!("RSA public key isn't valid: {err}"),
        )
    })?;

    Ok(PublicKey::RSA(key))
}
